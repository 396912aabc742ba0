//! Validated scalar types for pull requests.

use super::PullRequestDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Positive pull request number within a repository.
///
/// # Examples
///
///     use pullsync::pull_request::PullRequestNumber;
///
///     let number = PullRequestNumber::new(42).expect("valid");
///     assert_eq!(number.value(), 42);
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PullRequestNumber(u64);

impl PullRequestNumber {
    /// Creates a validated pull request number.
    ///
    /// # Errors
    ///
    /// Returns [`PullRequestDomainError::InvalidPullRequestNumber`] when the
    /// value is zero.
    pub const fn new(value: u64) -> Result<Self, PullRequestDomainError> {
        if value == 0 {
            return Err(PullRequestDomainError::InvalidPullRequestNumber(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PullRequestNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
