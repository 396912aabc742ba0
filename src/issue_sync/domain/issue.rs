//! Issue values exchanged with the tracker.

use super::{IssueKey, ProjectKey, RemoteLink};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Issue types the reconciler files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueType {
    /// Generic unit of work; used for every pull request.
    Task,
}

impl IssueType {
    /// Returns the type name the tracker expects.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Task => "Task",
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Issue as read back from the tracker.
///
/// `remote_links` holds whatever links the adapter returned with the issue;
/// adapters that need an extra round-trip to list links may leave it empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    key: IssueKey,
    project: ProjectKey,
    summary: String,
    remote_links: Vec<RemoteLink>,
}

impl Issue {
    /// Creates an issue value without remote links.
    #[must_use]
    pub fn new(key: IssueKey, project: ProjectKey, summary: impl Into<String>) -> Self {
        Self {
            key,
            project,
            summary: summary.into(),
            remote_links: Vec::new(),
        }
    }

    /// Sets the remote links known for the issue.
    #[must_use]
    pub fn with_remote_links(mut self, links: impl IntoIterator<Item = RemoteLink>) -> Self {
        self.remote_links = links.into_iter().collect();
        self
    }

    /// Returns the issue key.
    #[must_use]
    pub const fn key(&self) -> &IssueKey {
        &self.key
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project(&self) -> &ProjectKey {
        &self.project
    }

    /// Returns the summary line.
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Returns the remote links known for the issue.
    #[must_use]
    pub fn remote_links(&self) -> &[RemoteLink] {
        &self.remote_links
    }
}

/// Request to file a new issue for a pull request.
///
/// `webhook_id` is stored by the tracker adapter in a searchable field so
/// that later deliveries of the same event find this issue again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIssue {
    project: ProjectKey,
    summary: String,
    description: String,
    issue_type: IssueType,
    webhook_id: String,
}

impl NewIssue {
    /// Creates a `Task` issue request.
    #[must_use]
    pub fn task(
        project: ProjectKey,
        summary: impl Into<String>,
        description: impl Into<String>,
        webhook_id: impl Into<String>,
    ) -> Self {
        Self {
            project,
            summary: summary.into(),
            description: description.into(),
            issue_type: IssueType::Task,
            webhook_id: webhook_id.into(),
        }
    }

    /// Returns the target project.
    #[must_use]
    pub const fn project(&self) -> &ProjectKey {
        &self.project
    }

    /// Returns the summary line.
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Returns the description body.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the issue type.
    #[must_use]
    pub const fn issue_type(&self) -> IssueType {
        self.issue_type
    }

    /// Returns the webhook identifier to embed.
    #[must_use]
    pub fn webhook_id(&self) -> &str {
        &self.webhook_id
    }
}
