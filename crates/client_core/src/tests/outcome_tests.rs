use super::*;
use crate::test_support::{blank_state, finished_state, first_move_state};

#[test]
fn silent_while_squares_remain() {
    assert_eq!(end_of_game(&first_move_state()), None);

    let mut state = finished_state(&[1]);
    state.empty_squares = 1;
    assert_eq!(end_of_game(&state), None);
}

#[test]
fn single_leader_is_sole_winner() {
    let outcome = end_of_game(&finished_state(&[3])).expect("finished");
    assert_eq!(outcome, Outcome::Winner(PlayerId(3)));
    assert_eq!(outcome.to_string(), "Game Over! Player 3 wins!!!");
}

#[test]
fn several_leaders_tie_in_given_order() {
    let outcome = end_of_game(&finished_state(&[5, 2])).expect("finished");
    assert_eq!(outcome, Outcome::Tie(vec![PlayerId(5), PlayerId(2)]));
    assert_eq!(outcome.to_string(), "Tie Game! Players 5, 2 all win!!!");

    let outcome = end_of_game(&finished_state(&[2, 5])).expect("finished");
    assert_eq!(outcome.to_string(), "Tie Game! Players 2, 5 all win!!!");
}

#[test]
fn full_board_without_leaders_still_ends() {
    let mut state = blank_state(1, 1, 2);
    state.empty_squares = 0;
    state.leaders.clear();
    assert_eq!(end_of_game(&state), Some(Outcome::Undecided));
}
