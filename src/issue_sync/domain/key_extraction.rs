//! Extraction of issue keys referenced in free text.

use super::{IssueDomainError, IssueKey, ProjectKey};
use regex::Regex;

/// Finds `{project}-{digits}` references in text.
///
/// The project key is escaped before it is embedded in the pattern, so a key
/// containing regex metacharacters matches only itself. Matching is
/// case-sensitive and word-boundary delimited.
#[derive(Debug, Clone)]
pub struct IssueKeyMatcher {
    project: ProjectKey,
    pattern: Regex,
}

impl IssueKeyMatcher {
    /// Compiles the matcher for `project`.
    ///
    /// # Errors
    ///
    /// Returns [`IssueDomainError::KeyPattern`] when the pattern cannot be
    /// compiled.
    pub fn new(project: &ProjectKey) -> Result<Self, IssueDomainError> {
        let source = format!(r"\b{}-[0-9]+\b", regex::escape(project.as_str()));
        let pattern = Regex::new(&source).map_err(|err| IssueDomainError::KeyPattern {
            project: project.to_string(),
            reason: err.to_string(),
        })?;
        Ok(Self {
            project: project.clone(),
            pattern,
        })
    }

    /// Returns the project the matcher was built for.
    #[must_use]
    pub const fn project(&self) -> &ProjectKey {
        &self.project
    }

    /// Returns every referenced key in order of appearance.
    ///
    /// Keys are the matched text verbatim. Repeated references are kept.
    #[must_use]
    pub fn extract(&self, text: &str) -> Vec<IssueKey> {
        self.pattern
            .find_iter(text)
            .map(|found| self.key_from_match(found.as_str()))
            .collect()
    }

    /// Returns the first referenced key, if any.
    #[must_use]
    pub fn first(&self, text: &str) -> Option<IssueKey> {
        self.pattern
            .find(text)
            .map(|found| self.key_from_match(found.as_str()))
    }

    fn key_from_match(&self, matched: &str) -> IssueKey {
        // A match is always `{project}-{digits}`.
        let digits = matched
            .strip_prefix(self.project.as_str())
            .and_then(|rest| rest.strip_prefix('-'))
            .unwrap_or_default();
        IssueKey::from_parts(self.project.as_str(), digits)
    }
}

/// Extracts every `{project}-{digits}` reference from `text`.
///
/// # Errors
///
/// Returns [`IssueDomainError::KeyPattern`] when the pattern cannot be
/// compiled.
pub fn extract_issue_keys(
    project: &ProjectKey,
    text: &str,
) -> Result<Vec<IssueKey>, IssueDomainError> {
    Ok(IssueKeyMatcher::new(project)?.extract(text))
}
