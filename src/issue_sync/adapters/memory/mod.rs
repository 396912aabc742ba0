//! In-memory issue tracker for tests and local runs.

mod tracker;

pub use tracker::InMemoryIssueTracker;
