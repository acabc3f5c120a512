//! Client side of Connect More: decodes authority snapshots, renders them into
//! view-models and hands those to a [`DisplaySurface`].

pub mod board;
pub mod decoder;
pub mod dispatcher;
pub mod error;
pub mod markers;
pub mod outcome;
pub mod scoreboard;
pub mod surface;
pub mod transport;

pub use board::{render_board, BoardCell, BoardView, ColumnControl, BOARD_CAPTION};
pub use decoder::{decode_snapshot, DecodeError};
pub use dispatcher::{GameDispatcher, SessionPhase};
pub use error::ClientError;
pub use markers::{Marker, MarkerTable};
pub use outcome::{end_of_game, Outcome};
pub use scoreboard::{render_scores, ScoreRow, ScoreView};
pub use surface::{present, DisplaySurface, Presented};
pub use transport::{HttpTransport, Transport, TransportError};

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;
