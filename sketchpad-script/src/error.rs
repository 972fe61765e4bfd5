//! Script-level errors.

use sketchpad_core::SketchError;
use thiserror::Error;

/// Result type for script operations.
pub type ScriptResult<T> = Result<T, ScriptError>;

/// Errors raised while executing a script line.
///
/// All are non-fatal: the executor logs one transcript line and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    /// A shape or registry operation failed.
    #[error(transparent)]
    Sketch(#[from] SketchError),

    /// The line's first token is not a known command keyword.
    #[error("invalid command: {0}")]
    UnknownCommand(String),
}
