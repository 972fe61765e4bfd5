//! Error types for shape and registry operations.

use thiserror::Error;

/// Result type for shape and registry operations.
pub type SketchResult<T> = Result<T, SketchError>;

/// Errors that can occur while manipulating shapes.
///
/// Every variant is user-facing and non-fatal: the interpreter renders it
/// as a single transcript line and moves on to the next script line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SketchError {
    /// A shape with this name already exists; creates never overwrite.
    #[error("name already in use: {0}")]
    DuplicateName(String),

    /// The name does not match the naming pattern (letter first, then
    /// letters/digits/underscore).
    #[error("invalid name: {0}")]
    InvalidName(String),

    /// `new` was issued without a shape type.
    #[error("missing shape type")]
    MissingType,

    /// The shape type keyword is not a recognized variant or alias.
    #[error("unknown shape type: {0}")]
    UnknownType(String),

    /// No shape is registered under this name.
    #[error("no such object: {0}")]
    ObjectNotFound(String),
}
