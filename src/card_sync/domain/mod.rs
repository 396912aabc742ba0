//! Domain model for card reconciliation.
//!
//! Cards are owned by the remote board. A pull request is recognised on the
//! board by the [`CardIdentifier`] at the start of its card title.

mod body;
mod card;
mod error;
mod identifier;
mod ids;

pub use body::card_body;
pub use card::Card;
pub use error::CardDomainError;
pub use identifier::{CardIdentifier, card_title, find_matching_card};
pub use ids::{CardId, ListId};
