//! Error types for issue domain validation.

use thiserror::Error;

/// Errors returned while constructing issue domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IssueDomainError {
    /// The project key is empty or contains whitespace.
    #[error("invalid project key '{0}'")]
    InvalidProjectKey(String),

    /// The issue key does not follow `PROJECT-123` format.
    #[error("invalid issue key '{0}', expected PROJECT-123")]
    InvalidIssueKey(String),

    /// The key pattern for a project could not be compiled.
    #[error("cannot build issue key pattern for project '{project}': {reason}")]
    KeyPattern {
        /// Project key the pattern was built for.
        project: String,
        /// Compiler diagnostic.
        reason: String,
    },
}
