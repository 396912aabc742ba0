//! Thread-safe in-memory task board.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::card_sync::{
    domain::{Card, CardId, ListId},
    ports::{BoardError, BoardResult, TaskBoard},
};

/// Task board that keeps boards, lists and cards in process memory.
///
/// Lists must be registered with [`InMemoryTaskBoard::add_list`] before
/// cards can be created in them.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskBoard {
    state: Arc<RwLock<InMemoryBoardState>>,
}

#[derive(Debug, Default)]
struct InMemoryBoardState {
    board_of_list: HashMap<ListId, String>,
    cards: Vec<StoredCard>,
    next_short_id: HashMap<String, u64>,
}

#[derive(Debug, Clone)]
struct StoredCard {
    board: String,
    list: ListId,
    card: Card,
    body: String,
}

impl InMemoryBoardState {
    fn board_of(&self, list: &ListId) -> BoardResult<String> {
        self.board_of_list
            .get(list)
            .cloned()
            .ok_or_else(|| BoardError::ListNotFound(list.clone()))
    }

    fn insert(&mut self, list: &ListId, name: &str, body: &str) -> BoardResult<Card> {
        let board = self.board_of(list)?;
        let next = self.next_short_id.entry(board.clone()).or_insert(1);
        let short_id = *next;
        *next = next.saturating_add(1);
        let id = CardId::new(format!("{board}-{short_id}"))
            .map_err(|err| BoardError::Decode(err.to_string()))?;
        let card = Card::new(
            id.clone(),
            short_id,
            name,
            format!("https://boards.invalid/c/{id}"),
        );
        self.cards.push(StoredCard {
            board,
            list: list.clone(),
            card: card.clone(),
            body: body.to_owned(),
        });
        Ok(card)
    }
}

fn lock_error(err: impl std::fmt::Display) -> BoardError {
    BoardError::transport(std::io::Error::other(err.to_string()))
}

impl InMemoryTaskBoard {
    /// Creates an empty board store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `list` as belonging to `board`.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn add_list(&self, board: &str, list: &ListId) -> BoardResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state
            .board_of_list
            .insert(list.clone(), board.to_owned());
        Ok(())
    }

    /// Stores a card directly, bypassing the reconciler.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ListNotFound`] when `list` is not registered.
    pub fn seed_card(&self, list: &ListId, name: &str) -> BoardResult<Card> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.insert(list, name, "")
    }

    /// Renames a stored card, as a board user would.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Http`] with status 404 when no card has `id`.
    pub fn rename_card(&self, id: &CardId, name: &str) -> BoardResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let stored = state
            .cards
            .iter_mut()
            .find(|stored| stored.card.id() == id)
            .ok_or_else(|| BoardError::Http {
                status: 404,
                body: format!("card not found: {id}"),
            })?;
        stored.card = Card::new(
            stored.card.id().clone(),
            stored.card.short_id(),
            name,
            stored.card.url(),
        );
        Ok(())
    }

    /// Returns the cards in `list`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn cards_in(&self, list: &ListId) -> BoardResult<Vec<Card>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .cards
            .iter()
            .filter(|stored| &stored.list == list)
            .map(|stored| stored.card.clone())
            .collect())
    }

    /// Returns the body of the card with `id`, if any.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn body_of(&self, id: &CardId) -> BoardResult<Option<String>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .cards
            .iter()
            .find(|stored| stored.card.id() == id)
            .map(|stored| stored.body.clone()))
    }
}

#[async_trait]
impl TaskBoard for InMemoryTaskBoard {
    async fn all_cards_on_board_of(&self, list: &ListId) -> BoardResult<Vec<Card>> {
        let state = self.state.read().map_err(lock_error)?;
        let board = state.board_of(list)?;
        Ok(state
            .cards
            .iter()
            .filter(|stored| stored.board == board)
            .map(|stored| stored.card.clone())
            .collect())
    }

    async fn create_card(&self, list: &ListId, title: &str, body: &str) -> BoardResult<Card> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.insert(list, title, body)
    }
}
