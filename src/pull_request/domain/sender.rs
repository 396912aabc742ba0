//! Identity of the account that opened a pull request.

use super::PullRequestDomainError;
use serde::{Deserialize, Serialize};

/// GitHub account that triggered the pull request event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sender {
    login: String,
    name: Option<String>,
    email: Option<String>,
    company: Option<String>,
    avatar_url: String,
}

impl Sender {
    /// Creates a sender with the required login and avatar URL.
    ///
    /// # Errors
    ///
    /// Returns [`PullRequestDomainError::EmptySenderLogin`] when the login is
    /// blank.
    pub fn new(
        login: impl Into<String>,
        avatar_url: impl Into<String>,
    ) -> Result<Self, PullRequestDomainError> {
        let raw_login = login.into();
        let normalized = raw_login.trim();
        if normalized.is_empty() {
            return Err(PullRequestDomainError::EmptySenderLogin);
        }
        Ok(Self {
            login: normalized.to_owned(),
            name: None,
            email: None,
            company: None,
            avatar_url: avatar_url.into().trim().to_owned(),
        })
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = non_blank(name.into());
        self
    }

    /// Sets the public email address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = non_blank(email.into());
        self
    }

    /// Sets the company.
    #[must_use]
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = non_blank(company.into());
        self
    }

    /// Returns the account login.
    #[must_use]
    pub fn login(&self) -> &str {
        &self.login
    }

    /// Returns the display name, falling back to the login.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.login)
    }

    /// Returns the public email address, if any.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns the company, if any.
    #[must_use]
    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    /// Returns the avatar image URL.
    #[must_use]
    pub fn avatar_url(&self) -> &str {
        &self.avatar_url
    }
}

fn non_blank(value: String) -> Option<String> {
    let normalized = value.trim();
    (!normalized.is_empty()).then(|| normalized.to_owned())
}
