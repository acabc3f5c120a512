use shared::{
    domain::Column,
    protocol::{AuthorityRequest, GameState},
};
use tracing::warn;

use crate::markers::{Marker, MarkerTable};

pub const BOARD_CAPTION: &str = "Click a column header to drop a token in the column";

/// Header above a column; activating it plays that column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnControl {
    pub column: Column,
    pub label: String,
}

impl ColumnControl {
    pub fn request(&self) -> AuthorityRequest {
        AuthorityRequest::PlayColumn {
            column: self.column,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardCell {
    /// Storage row in `squares`, not the displayed row.
    pub row: usize,
    pub col: usize,
    /// `None` when the snapshot had no value at this position.
    pub value: Option<i64>,
    pub marker: Marker,
}

/// Whole board region, rows already in display order (top of the board first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub caption: &'static str,
    pub headers: Vec<ColumnControl>,
    pub rows: Vec<Vec<BoardCell>>,
}

impl BoardView {
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn cells(&self) -> impl Iterator<Item = &BoardCell> {
        self.rows.iter().flatten()
    }
}

pub fn render_board(state: &GameState, markers: &MarkerTable) -> BoardView {
    let headers = (1..=state.width).filter_map(column_control).collect();

    let rows = (0..state.height)
        .rev()
        .map(|row| {
            (0..state.width)
                .map(|col| render_cell(state, markers, row, col))
                .collect()
        })
        .collect();

    BoardView {
        caption: BOARD_CAPTION,
        headers,
        rows,
    }
}

/// `None` for a column number the request path cannot carry.
fn column_control(number: usize) -> Option<ColumnControl> {
    match u32::try_from(number) {
        Ok(column) => Some(ColumnControl {
            column: Column(column),
            label: number.to_string(),
        }),
        Err(_) => {
            warn!(column = number, "column number too large for a play request");
            None
        }
    }
}

fn render_cell(state: &GameState, markers: &MarkerTable, row: usize, col: usize) -> BoardCell {
    let value = state.cell(row, col);
    let marker = match value {
        Some(value) => match markers.lookup(value) {
            Some(marker) => *marker,
            None => {
                warn!(row, col, value, "square holds a value with no marker");
                *markers.placeholder()
            }
        },
        None => {
            warn!(
                row,
                col,
                width = state.width,
                height = state.height,
                "square missing from snapshot grid"
            );
            *markers.placeholder()
        }
    };

    BoardCell {
        row,
        col,
        value,
        marker,
    }
}

#[cfg(test)]
#[path = "tests/board_tests.rs"]
mod tests;
