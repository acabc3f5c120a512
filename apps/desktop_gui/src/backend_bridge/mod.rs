//! Worker thread that owns the dispatcher and performs every authority request.

pub mod commands;
pub mod runtime;
