//! Human-readable text for issues and cards created from pull requests.
//!
//! [`PullRequestFormatter`] is the port the reconcilers depend on;
//! [`TemplateFormatter`] is the default implementation, rendering
//! `minijinja` templates.

mod template;

pub use template::{DEFAULT_DESCRIPTION_TEMPLATE, DEFAULT_SUMMARY_TEMPLATE, TemplateFormatter};

use crate::pull_request::PullRequest;
use thiserror::Error;

/// Result type for formatting operations.
pub type FormatterResult<T> = Result<T, FormatterError>;

/// Text derived from a pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedPullRequest {
    /// One-line summary, used as the issue summary.
    pub summary: String,
    /// Multi-line description, used as the issue description and card body.
    pub description: String,
}

/// Turns pull requests into summary and description text.
///
/// Implementations are pure: no I/O and no side effects.
#[cfg_attr(test, mockall::automock)]
pub trait PullRequestFormatter: Send + Sync {
    /// Formats `pull_request`.
    ///
    /// # Errors
    ///
    /// Returns [`FormatterError`] when the text cannot be produced.
    fn format_pull_request(
        &self,
        pull_request: &PullRequest,
    ) -> FormatterResult<FormattedPullRequest>;
}

/// Errors returned while formatting.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormatterError {
    /// A template failed to render.
    #[error("cannot render {template} template: {reason}")]
    Render {
        /// Template that failed.
        template: &'static str,
        /// Renderer diagnostic.
        reason: String,
    },
}
