//! Error types for pull request construction.

use thiserror::Error;

/// Errors returned while constructing pull request values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PullRequestDomainError {
    /// The webhook identifier is empty after trimming.
    #[error("pull request identifier must not be empty")]
    EmptyIdentifier,

    /// The repository name is empty after trimming.
    #[error("repository name must not be empty")]
    EmptyRepositoryName,

    /// The pull request number is invalid.
    #[error("invalid pull request number {0}, expected a positive integer")]
    InvalidPullRequestNumber(u64),

    /// The sender login is empty after trimming.
    #[error("sender login must not be empty")]
    EmptySenderLogin,
}
