//! HTTP client for Jira issues and remote links.

use super::payloads::{CreatedIssueResponse, IssueResponse, RemoteLinkRequest, SearchResponse};
use crate::config::JiraSettings;
use crate::issue_sync::{
    domain::{Issue, IssueKey, NewIssue, ProjectKey, RemoteLink},
    ports::{IssueTracker, TrackerError, TrackerResult},
};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde_json::{Map, Value, json};
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const SEARCH_PAGE_SIZE: u32 = 50;

/// Issue tracker backed by the Jira REST v2 API.
///
/// The pull request webhook identifier is written to, and searched in, the
/// custom field named by [`JiraSettings::webhook_id_field`].
#[derive(Debug, Clone)]
pub struct JiraIssueTracker {
    http: Client,
    base_url: String,
    username: String,
    api_token: String,
    webhook_id_field: String,
    project: ProjectKey,
}

impl JiraIssueTracker {
    /// Builds a tracker from connection settings.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Decode`] when the configured project key is
    /// invalid and [`TrackerError::Transport`] when the HTTP client cannot be
    /// built.
    pub fn from_settings(settings: &JiraSettings) -> TrackerResult<Self> {
        let project = ProjectKey::new(settings.project.as_str())
            .map_err(|err| TrackerError::Decode(err.to_string()))?;
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(TrackerError::transport)?;
        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_owned(),
            username: settings.username.clone(),
            api_token: settings.api_token.clone(),
            webhook_id_field: settings.webhook_id_field.clone(),
            project,
        })
    }

    /// Returns the project configured for this tracker.
    #[must_use]
    pub const fn project(&self) -> &ProjectKey {
        &self.project
    }

    fn url(&self, path: &str) -> String {
        format!("{}/rest/api/2/{path}", self.base_url)
    }

    fn webhook_id_clause(&self, webhook_id: &str) -> String {
        let field = self.webhook_id_field.strip_prefix("customfield_").map_or_else(
            || format!("\"{}\"", escape_jql(&self.webhook_id_field)),
            |number| format!("cf[{number}]"),
        );
        format!("{field} ~ \"{}\"", escape_jql(webhook_id))
    }

    async fn get(&self, url: String, query: &[(&str, &str)]) -> TrackerResult<Response> {
        debug!(%url, "jira GET");
        self.http
            .get(url)
            .basic_auth(&self.username, Some(&self.api_token))
            .query(query)
            .send()
            .await
            .map_err(TrackerError::transport)
    }

    async fn post(
        &self,
        url: String,
        body: &(impl serde::Serialize + Sync),
    ) -> TrackerResult<Response> {
        debug!(%url, "jira POST");
        self.http
            .post(url)
            .basic_auth(&self.username, Some(&self.api_token))
            .json(body)
            .send()
            .await
            .map_err(TrackerError::transport)
    }
}

fn escape_jql(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

async fn ensure_success(response: Response) -> TrackerResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(TrackerError::Http {
        status: status.as_u16(),
        body,
    })
}

async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> TrackerResult<T> {
    response
        .json()
        .await
        .map_err(|err| TrackerError::Decode(err.to_string()))
}

#[async_trait]
impl IssueTracker for JiraIssueTracker {
    async fn find_by_key(&self, key: &IssueKey) -> TrackerResult<Option<Issue>> {
        let response = self
            .get(self.url(&format!("issue/{key}")), &[("fields", "summary,project")])
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let payload: IssueResponse = decode(ensure_success(response).await?).await?;
        payload.into_issue(&self.project).map(Some)
    }

    async fn find_by_webhook_id(&self, webhook_id: &str) -> TrackerResult<Option<Issue>> {
        let jql = self.webhook_id_clause(webhook_id);
        let fields = format!("summary,project,{}", self.webhook_id_field);
        let page_size = SEARCH_PAGE_SIZE.to_string();
        let response = self
            .get(
                self.url("search"),
                &[
                    ("jql", jql.as_str()),
                    ("fields", fields.as_str()),
                    ("maxResults", page_size.as_str()),
                ],
            )
            .await?;
        let payload: SearchResponse = decode(ensure_success(response).await?).await?;

        // `~` is a text match; keep only exact hits.
        payload
            .issues
            .into_iter()
            .find(|issue| issue.field_str(&self.webhook_id_field) == Some(webhook_id))
            .map(|issue| issue.into_issue(&self.project))
            .transpose()
    }

    async fn create_issue(&self, issue: &NewIssue) -> TrackerResult<Issue> {
        let mut fields = Map::new();
        fields.insert("project".to_owned(), json!({ "key": issue.project().as_str() }));
        fields.insert("summary".to_owned(), json!(issue.summary()));
        fields.insert("description".to_owned(), json!(issue.description()));
        fields.insert(
            "issuetype".to_owned(),
            json!({ "name": issue.issue_type().as_str() }),
        );
        fields.insert(
            self.webhook_id_field.clone(),
            Value::String(issue.webhook_id().to_owned()),
        );

        let response = self
            .post(self.url("issue"), &json!({ "fields": fields }))
            .await?;
        let created: CreatedIssueResponse = decode(ensure_success(response).await?).await?;
        let key =
            IssueKey::new(created.key).map_err(|err| TrackerError::Decode(err.to_string()))?;
        Ok(Issue::new(key, issue.project().clone(), issue.summary()))
    }

    async fn add_remote_link(&self, key: &IssueKey, link: &RemoteLink) -> TrackerResult<()> {
        let response = self
            .post(
                self.url(&format!("issue/{key}/remotelink")),
                &RemoteLinkRequest::from(link),
            )
            .await?;
        ensure_success(response).await?;
        Ok(())
    }
}
