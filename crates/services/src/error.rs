//! Shared error types for the services crate.

use thiserror::Error;

use storage::StorageError;

/// Errors raised by a display surface.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SurfaceError {
    #[error("input closed")]
    Closed,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors emitted by game sessions.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    /// Question data could not be loaded; no session was started.
    #[error("question source unavailable: {0}")]
    SourceUnavailable(#[from] StorageError),
    /// Blank answer; nothing changed, ask again.
    #[error("answer must not be empty")]
    EmptyAnswer,
    #[error("session already finished")]
    Finished,
    #[error("session has not finished yet")]
    InProgress,
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}
