//! Port contracts for issue reconciliation.
//!
//! Ports define infrastructure-agnostic interfaces used by issue services.

pub mod tracker;

pub use tracker::{IssueTracker, TrackerError, TrackerResult};

#[cfg(test)]
pub use tracker::MockIssueTracker;
