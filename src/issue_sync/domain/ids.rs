//! Validated identifiers for tracker projects and issues.

use super::IssueDomainError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Key of the tracker project new issues are filed in, such as `PROJ`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectKey(String);

impl ProjectKey {
    /// Creates a validated project key.
    ///
    /// # Errors
    ///
    /// Returns [`IssueDomainError::InvalidProjectKey`] when the value is
    /// empty or contains whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, IssueDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() || normalized.chars().any(char::is_whitespace) {
            return Err(IssueDomainError::InvalidProjectKey(raw));
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the key as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProjectKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ProjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tracker issue key in `PROJECT-123` form.
///
/// The digits are kept as written, so `PROJ-007` stays distinct from
/// `PROJ-7` and a number too large for `u64` is still a key.
///
/// # Examples
///
///     use pullsync::issue_sync::domain::IssueKey;
///
///     let key = IssueKey::new("PROJ-42").expect("valid key");
///     assert_eq!(key.project_prefix(), "PROJ");
///     assert_eq!(key.number(), Some(42));
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IssueKey {
    prefix: String,
    digits: String,
}

impl IssueKey {
    /// Parses an issue key.
    ///
    /// # Errors
    ///
    /// Returns [`IssueDomainError::InvalidIssueKey`] unless the value is a
    /// non-empty prefix, a hyphen and one or more ASCII digits.
    pub fn new(value: impl Into<String>) -> Result<Self, IssueDomainError> {
        let raw = value.into();
        let parsed = raw.trim().rsplit_once('-').filter(|(prefix, digits)| {
            !prefix.is_empty() && !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
        });
        let Some((prefix, digits)) = parsed else {
            return Err(IssueDomainError::InvalidIssueKey(raw));
        };
        Ok(Self {
            prefix: prefix.to_owned(),
            digits: digits.to_owned(),
        })
    }

    /// Builds the key of issue `number` in `project`.
    #[must_use]
    pub fn in_project(project: &ProjectKey, number: u64) -> Self {
        Self {
            prefix: project.as_str().to_owned(),
            digits: number.to_string(),
        }
    }

    pub(crate) fn from_parts(prefix: &str, digits: &str) -> Self {
        Self {
            prefix: prefix.to_owned(),
            digits: digits.to_owned(),
        }
    }

    /// Returns the project prefix.
    #[must_use]
    pub fn project_prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the digits after the hyphen exactly as written.
    #[must_use]
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Returns the issue number, or `None` when it does not fit in `u64`.
    #[must_use]
    pub fn number(&self) -> Option<u64> {
        self.digits.parse().ok()
    }

    fn significant_digits(&self) -> &str {
        let trimmed = self.digits.trim_start_matches('0');
        if trimmed.is_empty() { "0" } else { trimmed }
    }
}

impl Ord for IssueKey {
    /// Orders by prefix, then numerically, then by the written digits.
    fn cmp(&self, other: &Self) -> Ordering {
        let (ours, theirs) = (self.significant_digits(), other.significant_digits());
        self.prefix
            .cmp(&other.prefix)
            .then_with(|| ours.len().cmp(&theirs.len()))
            .then_with(|| ours.cmp(theirs))
            .then_with(|| self.digits.cmp(&other.digits))
    }
}

impl PartialOrd for IssueKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for IssueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.prefix, self.digits)
    }
}

impl TryFrom<String> for IssueKey {
    type Error = IssueDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for IssueKey {
    type Error = IssueDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<IssueKey> for String {
    fn from(value: IssueKey) -> Self {
        value.to_string()
    }
}
