//! Thread-safe in-memory issue tracker.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use crate::issue_sync::{
    domain::{Issue, IssueKey, NewIssue, ProjectKey, RemoteLink},
    ports::{IssueTracker, TrackerError, TrackerResult},
};

/// Issue tracker that keeps issues in process memory.
///
/// Keys are allocated per project starting at 1, mirroring how hosted
/// trackers number issues.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIssueTracker {
    state: Arc<RwLock<InMemoryTrackerState>>,
}

#[derive(Debug, Default)]
struct InMemoryTrackerState {
    issues: BTreeMap<IssueKey, StoredIssue>,
    next_number: HashMap<ProjectKey, u64>,
}

#[derive(Debug, Clone)]
struct StoredIssue {
    issue: Issue,
    webhook_id: Option<String>,
    remote_links: Vec<RemoteLink>,
}

impl InMemoryTrackerState {
    /// Returns `None` once the project's number space is used up.
    fn allocate_key(&mut self, project: &ProjectKey) -> Option<IssueKey> {
        let next = self.next_number.entry(project.clone()).or_insert(1);
        let key = IssueKey::in_project(project, *next);
        if self.issues.contains_key(&key) {
            return None;
        }
        *next = next.saturating_add(1);
        Some(key)
    }

    fn materialize(stored: &StoredIssue) -> Issue {
        stored
            .issue
            .clone()
            .with_remote_links(stored.remote_links.clone())
    }
}

fn lock_error(err: impl std::fmt::Display) -> TrackerError {
    TrackerError::transport(std::io::Error::other(err.to_string()))
}

impl InMemoryIssueTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an issue under `key`, bypassing the reconciler.
    ///
    /// Later allocations in the same project continue after `key`.
    ///
    /// # Errors
    ///
    /// Returns a decode error when the key prefix is not a valid project key
    /// and a transport error when lock acquisition fails.
    pub fn seed_issue(
        &self,
        key: &IssueKey,
        summary: impl Into<String>,
        webhook_id: Option<&str>,
    ) -> TrackerResult<()> {
        let project = ProjectKey::new(key.project_prefix())
            .map_err(|err| TrackerError::Decode(err.to_string()))?;
        let mut state = self.state.write().map_err(lock_error)?;
        let next = state.next_number.entry(project.clone()).or_insert(1);
        if let Some(number) = key.number() {
            *next = (*next).max(number.saturating_add(1));
        }
        state.issues.insert(
            key.clone(),
            StoredIssue {
                issue: Issue::new(key.clone(), project, summary),
                webhook_id: webhook_id.map(str::to_owned),
                remote_links: Vec::new(),
            },
        );
        Ok(())
    }

    /// Returns every stored issue ordered by key.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn issues(&self) -> TrackerResult<Vec<Issue>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .issues
            .values()
            .map(InMemoryTrackerState::materialize)
            .collect())
    }

    /// Returns the remote links attached to `key`.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn remote_links(&self, key: &IssueKey) -> TrackerResult<Vec<RemoteLink>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .issues
            .get(key)
            .map(|stored| stored.remote_links.clone())
            .unwrap_or_default())
    }

    /// Returns the webhook identifier stored on `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn webhook_id(&self, key: &IssueKey) -> TrackerResult<Option<String>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .issues
            .get(key)
            .and_then(|stored| stored.webhook_id.clone()))
    }
}

#[async_trait]
impl IssueTracker for InMemoryIssueTracker {
    async fn find_by_key(&self, key: &IssueKey) -> TrackerResult<Option<Issue>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.issues.get(key).map(InMemoryTrackerState::materialize))
    }

    async fn find_by_webhook_id(&self, webhook_id: &str) -> TrackerResult<Option<Issue>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .issues
            .values()
            .find(|stored| stored.webhook_id.as_deref() == Some(webhook_id))
            .map(InMemoryTrackerState::materialize))
    }

    async fn create_issue(&self, issue: &NewIssue) -> TrackerResult<Issue> {
        let mut state = self.state.write().map_err(lock_error)?;
        let key = state
            .allocate_key(issue.project())
            .ok_or_else(|| TrackerError::Http {
                status: 400,
                body: format!("no issue numbers left in {}", issue.project()),
            })?;
        let created = Issue::new(key.clone(), issue.project().clone(), issue.summary());
        state.issues.insert(
            key,
            StoredIssue {
                issue: created.clone(),
                webhook_id: Some(issue.webhook_id().to_owned()),
                remote_links: Vec::new(),
            },
        );
        Ok(created)
    }

    async fn add_remote_link(&self, key: &IssueKey, link: &RemoteLink) -> TrackerResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let stored = state.issues.get_mut(key).ok_or_else(|| TrackerError::Http {
            status: 404,
            body: format!("Issue Does Not Exist: {key}"),
        })?;
        stored.remote_links.push(link.clone());
        Ok(())
    }
}
