//! Task board port.

use crate::card_sync::domain::{Card, ListId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task board operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// Remote task board contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskBoard: Send + Sync {
    /// Returns every open card on the board that owns `list`, across all of
    /// its lists.
    async fn all_cards_on_board_of(&self, list: &ListId) -> BoardResult<Vec<Card>>;

    /// Creates a card at the bottom of `list`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] when the board rejects the card.
    async fn create_card(&self, list: &ListId, title: &str, body: &str) -> BoardResult<Card>;
}

/// Errors returned by task board adapters.
#[derive(Debug, Clone, Error)]
pub enum BoardError {
    /// The board answered with a non-success status.
    #[error("board responded with HTTP {status}: {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body as returned by the server.
        body: String,
    },

    /// The list does not exist on any board.
    #[error("list not found: {0}")]
    ListNotFound(ListId),

    /// The request did not complete.
    #[error("board transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The response could not be understood.
    #[error("unexpected board response: {0}")]
    Decode(String),
}

impl BoardError {
    /// Wraps a transport failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
