use super::*;
use client_core::{render_board, render_scores, MarkerTable};
use shared::{domain::PlayerId, protocol::GameState};

fn state(width: usize, height: usize) -> GameState {
    GameState {
        width,
        height,
        squares: vec![vec![0; width]; height],
        num_players: 2,
        current_player: PlayerId(2),
        scores: vec![4, 1],
        empty_squares: (width * height) as u64,
        leaders: vec![PlayerId(1)],
    }
}

#[test]
fn board_is_printed_top_row_first() {
    let mut game = state(3, 2);
    game.squares[0][0] = 1;
    game.squares[1][2] = 2;
    let text = format_board(&render_board(&game, &MarkerTable::standard()), false);

    let expected = "\
Cols: 1 | 2 | 3 |
----------------
    |   |   | 2 |
    | 1 |   |   |
----------------
";
    assert_eq!(text, expected);
}

#[test]
fn wide_boards_keep_cells_under_their_headers() {
    let game = state(12, 1);
    let text = format_board(&render_board(&game, &MarkerTable::standard()), false);
    let lines: Vec<_> = text.lines().collect();

    assert_eq!(lines[0].len(), lines[2].len());
    assert!(lines[0].ends_with("| 11 | 12 |"));
}

#[test]
fn scores_point_at_current_player() {
    let text = format_scores(&render_scores(&state(2, 2), &MarkerTable::standard()), false);
    assert_eq!(text, "SCORE\n   1 Player 1: 4\n > 2 Player 2: 1\n");
}

#[test]
fn prompts_follow_session_phase() {
    assert!(prompt_for(SessionPhase::NoGame).contains("new <players>"));
    assert_eq!(
        prompt_for(SessionPhase::AwaitingMove {
            current_player: PlayerId(3)
        }),
        "\nPlayer #3 - please enter the column number to play in: "
    );
    assert!(prompt_for(SessionPhase::Finished).starts_with("\nGame over."));
}

#[test]
fn surface_writes_alerts_verbatim() {
    let mut surface = TerminalSurface::new(Vec::new(), false);
    surface.alert("Column is full, please select another");
    let written = String::from_utf8(surface.into_inner()).expect("utf8");
    assert_eq!(written, "\n*** Column is full, please select another ***\n");
}
