//! Cards as read from the board.

use super::CardId;

/// A card on the task board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    id: CardId,
    short_id: u64,
    name: String,
    url: String,
}

impl Card {
    /// Creates a card value.
    #[must_use]
    pub fn new(id: CardId, short_id: u64, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id,
            short_id,
            name: name.into(),
            url: url.into(),
        }
    }

    /// Returns the board-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> &CardId {
        &self.id
    }

    /// Returns the board-local sequence number.
    #[must_use]
    pub const fn short_id(&self) -> u64 {
        self.short_id
    }

    /// Returns the card title.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the card URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}
