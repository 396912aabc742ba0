//! Issue tracker port.

use crate::issue_sync::domain::{Issue, IssueKey, NewIssue, RemoteLink};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for issue tracker operations.
pub type TrackerResult<T> = Result<T, TrackerError>;

/// Remote issue tracker contract.
///
/// Every call is a fresh remote query; implementations keep no cache.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Finds an issue by key.
    ///
    /// Returns `None` when no such issue exists.
    async fn find_by_key(&self, key: &IssueKey) -> TrackerResult<Option<Issue>>;

    /// Finds the issue carrying the given pull request webhook identifier.
    ///
    /// Returns `None` when the pull request has not been tracked yet.
    async fn find_by_webhook_id(&self, webhook_id: &str) -> TrackerResult<Option<Issue>>;

    /// Files a new issue.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Http`] when the tracker rejects the request.
    async fn create_issue(&self, issue: &NewIssue) -> TrackerResult<Issue>;

    /// Attaches a remote link to an existing issue.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError`] when the link cannot be stored.
    async fn add_remote_link(&self, key: &IssueKey, link: &RemoteLink) -> TrackerResult<()>;
}

/// Errors returned by issue tracker adapters.
#[derive(Debug, Clone, Error)]
pub enum TrackerError {
    /// The tracker answered with a non-success status.
    #[error("tracker responded with HTTP {status}: {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body as returned by the server.
        body: String,
    },

    /// The request did not complete.
    #[error("tracker transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The response could not be understood.
    #[error("unexpected tracker response: {0}")]
    Decode(String),
}

impl TrackerError {
    /// Wraps a transport failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Returns the server response body for HTTP failures.
    #[must_use]
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::Http { body, .. } => Some(body),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }
}
