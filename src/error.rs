//! Error types for the storage boundary.
//!
//! Uses `thiserror` for ergonomic error handling with typed variants that
//! callers can inspect. Every storage failure in this crate is recoverable:
//! the sync engine logs it and continues with the in-memory log.

use thiserror::Error;

/// Errors produced by the storage boundary.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The backing store could not be read or written.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The persisted payload exists but does not deserialize.
    ///
    /// The in-memory log is authoritative; callers recover by rewriting the
    /// mirror from memory.
    #[error("stored payload corrupt: {0}")]
    Corrupt(String),
}

impl StoreError {
    /// Creates an unavailable error from any displayable cause.
    #[must_use]
    pub fn unavailable(cause: impl std::fmt::Display) -> Self {
        Self::Unavailable(cause.to_string())
    }

    /// Creates a corrupt-payload error from any displayable cause.
    #[must_use]
    pub fn corrupt(cause: impl std::fmt::Display) -> Self {
        Self::Corrupt(cause.to_string())
    }
}

/// Convenience alias used throughout the storage boundary.
pub type StoreResult<T> = Result<T, StoreError>;
