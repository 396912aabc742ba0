//! In-memory task board for tests and local runs.

mod board;

pub use board::InMemoryTaskBoard;
