mod commands;
mod history;

use crate::error::CanvasError;

pub use commands::Command;
pub use history::{CommandHistory, Snapshot};

/// Result type for command operations
pub type CommandResult = Result<(), CanvasError>;
