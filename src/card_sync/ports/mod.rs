//! Port contracts for card reconciliation.

pub mod board;

pub use board::{BoardError, BoardResult, TaskBoard};

#[cfg(test)]
pub use board::MockTaskBoard;
