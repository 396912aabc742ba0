//! Adapter implementations for the issue tracker port.

pub mod jira;
pub mod memory;

pub use jira::JiraIssueTracker;
pub use memory::InMemoryIssueTracker;
