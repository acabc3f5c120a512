//! UI layer for desktop GUI: app shell, board and scoreboard widgets.

pub mod app;
pub mod widgets;

pub use app::ConnectMoreApp;
