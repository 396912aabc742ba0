//! Jira connection settings.

use super::{ConfigResult, extract, require};
use figment::{Figment, providers::Env};
use serde::{Deserialize, Serialize};

/// Connection settings for the Jira tracker adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JiraSettings {
    /// Base URL of the Jira site, such as `https://example.atlassian.net`.
    pub base_url: String,
    /// Account used for basic authentication.
    pub username: String,
    /// API token for `username`.
    pub api_token: String,
    /// Project new issues are filed in.
    pub project: String,
    /// Custom field holding the pull request webhook identifier, such as
    /// `customfield_10100`.
    pub webhook_id_field: String,
}

impl JiraSettings {
    /// Loads settings from `JIRA_BASE_URL`, `JIRA_USERNAME`,
    /// `JIRA_API_TOKEN`, `JIRA_PROJECT` and `JIRA_WEBHOOK_ID_FIELD`.
    ///
    /// # Errors
    ///
    /// Returns [`super::ConfigError`] when a variable is missing or blank.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_figment(&Figment::new().merge(Env::prefixed("JIRA_")))
    }

    /// Loads settings from an arbitrary provider stack.
    ///
    /// # Errors
    ///
    /// Returns [`super::ConfigError`] when a value is missing or blank.
    pub fn from_figment(figment: &Figment) -> ConfigResult<Self> {
        let settings: Self = extract(figment)?;
        require("base_url", &settings.base_url)?;
        require("username", &settings.username)?;
        require("api_token", &settings.api_token)?;
        require("project", &settings.project)?;
        require("webhook_id_field", &settings.webhook_id_field)?;
        Ok(settings)
    }
}
