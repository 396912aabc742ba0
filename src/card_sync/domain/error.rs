//! Error types for card domain validation.

use thiserror::Error;

/// Errors returned while constructing card domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CardDomainError {
    /// The list identifier is empty.
    #[error("list identifier must not be empty")]
    EmptyListId,

    /// The card identifier is empty.
    #[error("card identifier must not be empty")]
    EmptyCardId,
}
