use super::*;
use crate::test_support::{blank_state, first_move_state};
use shared::domain::Column;

#[test]
fn headers_are_numbered_from_one() {
    let view = render_board(&blank_state(7, 6, 2), &MarkerTable::standard());

    let labels: Vec<_> = view.headers.iter().map(|h| h.label.as_str()).collect();
    assert_eq!(labels, ["1", "2", "3", "4", "5", "6", "7"]);
    assert_eq!(
        view.headers[2].request(),
        AuthorityRequest::PlayColumn { column: Column(3) }
    );
    assert_eq!(view.caption, BOARD_CAPTION);
}

#[test]
fn column_controls_carry_their_number() {
    let control = column_control(12).expect("fits");
    assert_eq!(control.column, Column(12));
    assert_eq!(control.label, "12");

    let widest = column_control(u32::MAX as usize).expect("fits");
    assert_eq!(widest.column, Column(u32::MAX));
}

#[cfg(target_pointer_width = "64")]
#[test]
fn column_numbers_beyond_request_range_get_no_control() {
    assert_eq!(column_control(u32::MAX as usize + 1), None);
    assert_eq!(column_control(usize::MAX), None);
}

#[test]
fn produces_one_cell_per_square() {
    for (width, height) in [(1, 1), (6, 6), (9, 8), (12, 9)] {
        let view = render_board(&blank_state(width, height, 2), &MarkerTable::standard());
        assert_eq!(view.width(), width);
        assert_eq!(view.height(), height);
        assert_eq!(view.cells().count(), width * height);
        assert!(view.rows.iter().all(|row| row.len() == width));
    }
}

#[test]
fn rows_are_drawn_top_of_board_first() {
    let mut state = blank_state(3, 3, 3);
    state.squares = vec![vec![1, 0, 0], vec![2, 0, 0], vec![3, 0, 0]];
    let view = render_board(&state, &MarkerTable::standard());

    for (displayed, row) in view.rows.iter().enumerate() {
        let storage_row = state.height - 1 - displayed;
        for (col, cell) in row.iter().enumerate() {
            assert_eq!(cell.row, storage_row);
            assert_eq!(cell.col, col);
            assert_eq!(cell.value, Some(state.squares[storage_row][col]));
        }
    }
    assert_eq!(view.rows[0][0].marker.name, "blue");
    assert_eq!(view.rows[2][0].marker.name, "red");
}

#[test]
fn first_token_lands_bottom_left() {
    let markers = MarkerTable::standard();
    let view = render_board(&first_move_state(), &markers);

    let bottom_left = &view.rows[3][0];
    assert_eq!(bottom_left.value, Some(1));
    assert_eq!(&bottom_left.marker, markers.lookup(1).expect("red"));

    let occupied = view.cells().filter(|c| c.marker != *markers.empty()).count();
    assert_eq!(occupied, 1);
}

#[test]
fn unknown_values_render_placeholder() {
    let markers = MarkerTable::standard();
    let mut state = blank_state(2, 1, 2);
    state.squares = vec![vec![9, -1]];
    let view = render_board(&state, &markers);

    assert!(view.cells().all(|c| c.marker == *markers.placeholder()));
    assert_eq!(view.rows[0][0].value, Some(9));
}

#[test]
fn short_grid_still_fills_declared_dimensions() {
    let markers = MarkerTable::standard();
    let mut state = blank_state(3, 2, 2);
    state.squares = vec![vec![1, 2]];
    let view = render_board(&state, &markers);

    assert_eq!(view.cells().count(), 6);
    // top displayed row is storage row 1, which is absent
    assert!(view.rows[0].iter().all(|c| c.value.is_none()));
    assert_eq!(view.rows[1][2].value, None);
    assert_eq!(view.rows[1][2].marker, *markers.placeholder());
    assert_eq!(view.rows[1][1].marker.name, "yellow");
}
