//! Request and response bodies of the Jira REST v2 API.

use crate::issue_sync::{
    domain::{Issue, IssueKey, ProjectKey, RemoteLink},
    ports::TrackerError,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub(super) struct IssueResponse {
    pub key: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl IssueResponse {
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    pub fn into_issue(self, fallback_project: &ProjectKey) -> Result<Issue, TrackerError> {
        let key =
            IssueKey::new(self.key.as_str()).map_err(|err| TrackerError::Decode(err.to_string()))?;
        let project = self
            .fields
            .get("project")
            .and_then(|project| project.get("key"))
            .and_then(Value::as_str)
            .and_then(|value| ProjectKey::new(value).ok())
            .unwrap_or_else(|| fallback_project.clone());
        let summary = self.field_str("summary").unwrap_or_default().to_owned();
        Ok(Issue::new(key, project, summary))
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct SearchResponse {
    #[serde(default)]
    pub issues: Vec<IssueResponse>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CreatedIssueResponse {
    pub key: String,
}

#[derive(Debug, Serialize)]
pub(super) struct NameRef<'a> {
    pub name: &'a str,
}

#[derive(Debug, Serialize)]
pub(super) struct RemoteLinkRequest<'a> {
    pub application: NameRef<'a>,
    pub object: RemoteLinkObject<'a>,
}

#[derive(Debug, Serialize)]
pub(super) struct RemoteLinkObject<'a> {
    pub url: &'a str,
    pub title: &'a str,
    pub icon: &'a crate::issue_sync::domain::LinkIcon,
}

impl<'a> From<&'a RemoteLink> for RemoteLinkRequest<'a> {
    fn from(link: &'a RemoteLink) -> Self {
        Self {
            application: NameRef {
                name: link.application(),
            },
            object: RemoteLinkObject {
                url: link.url(),
                title: link.title(),
                icon: link.icon(),
            },
        }
    }
}
