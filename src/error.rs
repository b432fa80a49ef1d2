//! Error types for taskdeck.

/// Top-level error type for the task manager.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Rejected user input (empty description or assignee).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Persistence error (serialization or storage backend).
    #[error("storage error: {0}")]
    Storage(String),

    /// Fact retrieval error (transport or malformed response).
    #[error("fact error: {0}")]
    Fact(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, Error>;
