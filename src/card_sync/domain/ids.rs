//! Validated identifiers for board lists and cards.

use super::CardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the list new cards are created in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(String);

impl ListId {
    /// Creates a validated list identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CardDomainError::EmptyListId`] when the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, CardDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CardDomainError::EmptyListId);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a card assigned by the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Creates a validated card identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CardDomainError::EmptyCardId`] when the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, CardDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(CardDomainError::EmptyCardId);
        }
        Ok(Self(raw))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
