//! The pull request value object consumed by both reconcilers.

use super::{PullRequestDomainError, PullRequestNumber, Sender};
use serde::{Deserialize, Serialize};

/// Immutable view over the pull request fields of a webhook event.
///
/// The `identifier` is stable across webhook redeliveries and is the key
/// used to recognise a pull request that is already tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    identifier: String,
    repo_name: String,
    number: PullRequestNumber,
    title: String,
    html_url: String,
    body: Option<String>,
    sender: Sender,
}

impl PullRequest {
    /// Creates a pull request from validated components.
    ///
    /// # Errors
    ///
    /// Returns a [`PullRequestDomainError`] when the identifier or repository
    /// name is blank or the number is zero.
    pub fn new(
        identifier: impl Into<String>,
        repo_name: impl Into<String>,
        number: u64,
        title: impl Into<String>,
        html_url: impl Into<String>,
        sender: Sender,
    ) -> Result<Self, PullRequestDomainError> {
        let raw_identifier = identifier.into();
        let identifier = raw_identifier.trim();
        if identifier.is_empty() {
            return Err(PullRequestDomainError::EmptyIdentifier);
        }
        let raw_repo_name = repo_name.into();
        let repo_name = raw_repo_name.trim();
        if repo_name.is_empty() {
            return Err(PullRequestDomainError::EmptyRepositoryName);
        }

        Ok(Self {
            identifier: identifier.to_owned(),
            repo_name: repo_name.to_owned(),
            number: PullRequestNumber::new(number)?,
            title: title.into(),
            html_url: html_url.into(),
            body: None,
            sender,
        })
    }

    /// Sets the pull request description.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        let value = body.into();
        let normalized = value.trim();
        self.body = (!normalized.is_empty()).then(|| normalized.to_owned());
        self
    }

    /// Returns the identifier that is stable across webhook redeliveries.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Returns the repository name.
    #[must_use]
    pub fn repo_name(&self) -> &str {
        &self.repo_name
    }

    /// Returns the pull request number.
    #[must_use]
    pub const fn number(&self) -> PullRequestNumber {
        self.number
    }

    /// Returns the title as it was when the event was delivered.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the browser URL of the pull request.
    #[must_use]
    pub fn html_url(&self) -> &str {
        &self.html_url
    }

    /// Returns the description, if one was provided.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Returns the account that opened the pull request.
    #[must_use]
    pub const fn sender(&self) -> &Sender {
        &self.sender
    }
}
