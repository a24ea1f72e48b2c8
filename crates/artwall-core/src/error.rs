//! Error types for the artwall libraries.
//!
//! This module provides a unified error type with explicit variants for
//! store failures and input validation errors.

use thiserror::Error;

/// The unified error type for artwall operations.
///
/// Covers all failure modes in the library, with explicit variants to
/// allow callers to handle specific cases.
#[derive(Debug, Error)]
pub enum Error {
    /// Storage collaborator errors (unreachable store, missing or corrupt records).
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Input validation errors (malformed cursor, invalid artwork id).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Check if the operation can be retried unchanged.
    ///
    /// Cursors encode store state rather than engine counters, so a page
    /// fetch that failed with a transient store error can be re-issued
    /// with the same cursor once the store recovers.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Store(StoreError::Unavailable { .. }))
    }
}

/// Errors surfaced by the record store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store is unreachable or an operation failed transiently.
    #[error("store unavailable: {message}")]
    Unavailable { message: String },

    /// No record exists for the given id.
    #[error("record '{id}' not found")]
    NotFound { id: String },

    /// A stored record could not be decoded.
    #[error("record '{id}' is corrupt: {message}")]
    Corrupt { id: String, message: String },
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// A pagination cursor token failed to decode.
    #[error("malformed cursor '{value}': {reason}")]
    Cursor { value: String, reason: String },

    /// Invalid artwork identifier format.
    #[error("invalid artwork id '{value}': {reason}")]
    ArtworkId { value: String, reason: String },

    /// Invalid hex color format.
    #[error("invalid hex color '{value}': {reason}")]
    HexColor { value: String, reason: String },

    /// A page was requested with a size of zero.
    #[error("page size must be positive")]
    PageSize,

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}
