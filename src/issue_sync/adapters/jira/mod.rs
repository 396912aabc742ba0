//! Jira REST v2 adapter for the issue tracker port.

mod payloads;
mod tracker;

pub use tracker::JiraIssueTracker;
