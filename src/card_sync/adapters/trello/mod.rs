//! Trello REST v1 adapter for the task board port.

mod board;
mod payloads;

pub use board::TrelloTaskBoard;
