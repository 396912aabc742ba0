//! Decoding of GitHub `pull_request` webhook payloads.

use super::domain::{PullRequest, PullRequestDomainError, Sender};
use serde::Deserialize;
use thiserror::Error;

/// Errors returned while decoding a webhook payload.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WebhookError {
    /// The payload is not valid JSON or lacks required fields.
    #[error("malformed pull request payload: {0}")]
    Malformed(String),

    /// The payload decoded but carries invalid values.
    #[error(transparent)]
    Domain(#[from] PullRequestDomainError),
}

#[derive(Debug, Deserialize)]
struct PullRequestEvent {
    pull_request: PullRequestPayload,
    repository: RepositoryPayload,
    sender: SenderPayload,
}

#[derive(Debug, Deserialize)]
struct PullRequestPayload {
    id: u64,
    number: u64,
    title: String,
    html_url: String,
    #[serde(default)]
    body: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RepositoryPayload {
    name: String,
}

#[derive(Debug, Deserialize)]
struct SenderPayload {
    login: String,
    #[serde(default)]
    avatar_url: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    company: Option<String>,
}

impl PullRequest {
    /// Builds a pull request from the raw JSON body of a webhook delivery.
    ///
    /// The numeric `pull_request.id` is used as the identifier because it
    /// does not change when the event is redelivered or the pull request is
    /// edited.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::Malformed`] when the JSON cannot be decoded
    /// and [`WebhookError::Domain`] when a decoded value fails validation.
    pub fn from_webhook_json(json: &str) -> Result<Self, WebhookError> {
        let event: PullRequestEvent =
            serde_json::from_str(json).map_err(|err| WebhookError::Malformed(err.to_string()))?;

        let mut sender = Sender::new(event.sender.login, event.sender.avatar_url)?;
        if let Some(name) = event.sender.name {
            sender = sender.with_name(name);
        }
        if let Some(email) = event.sender.email {
            sender = sender.with_email(email);
        }
        if let Some(company) = event.sender.company {
            sender = sender.with_company(company);
        }

        let payload = event.pull_request;
        let mut pull_request = Self::new(
            payload.id.to_string(),
            event.repository.name,
            payload.number,
            payload.title,
            payload.html_url,
            sender,
        )?;
        if let Some(body) = payload.body {
            pull_request = pull_request.with_body(body);
        }
        Ok(pull_request)
    }
}
