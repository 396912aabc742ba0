//! Adapter implementations for the task board port.

pub mod memory;
pub mod trello;

pub use memory::InMemoryTaskBoard;
pub use trello::TrelloTaskBoard;
