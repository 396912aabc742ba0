//! `minijinja`-backed pull request formatter.

use super::{FormattedPullRequest, FormatterError, FormatterResult, PullRequestFormatter};
use crate::pull_request::PullRequest;
use minijinja::{Environment, Value, context};

/// Summary template used by [`TemplateFormatter::default`].
pub const DEFAULT_SUMMARY_TEMPLATE: &str = "{{ title }} (PR {{ repo_name }}/{{ number }})";

/// Description template used by [`TemplateFormatter::default`].
pub const DEFAULT_DESCRIPTION_TEMPLATE: &str = "{% if body %}{{ body }}\n\n{% endif %}\
Pull request: {{ html_url }}\n\
Repository: {{ repo_name }} #{{ number }}";

/// Trackers reject summaries longer than this many characters.
const MAX_SUMMARY_CHARS: usize = 255;

/// Formatter rendering summary and description templates.
///
/// Templates see `identifier`, `title`, `body`, `html_url`, `repo_name`,
/// `number`, `sender_login`, `sender_name`, `sender_email` and
/// `sender_company`.
#[derive(Debug, Clone)]
pub struct TemplateFormatter {
    summary_template: String,
    description_template: String,
}

impl Default for TemplateFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_SUMMARY_TEMPLATE, DEFAULT_DESCRIPTION_TEMPLATE)
    }
}

impl TemplateFormatter {
    /// Creates a formatter from template sources.
    #[must_use]
    pub fn new(
        summary_template: impl Into<String>,
        description_template: impl Into<String>,
    ) -> Self {
        Self {
            summary_template: summary_template.into(),
            description_template: description_template.into(),
        }
    }
}

fn template_context(pull_request: &PullRequest) -> Value {
    let sender = pull_request.sender();
    context! {
        identifier => pull_request.identifier(),
        title => pull_request.title(),
        body => pull_request.body(),
        html_url => pull_request.html_url(),
        repo_name => pull_request.repo_name(),
        number => pull_request.number().value(),
        sender_login => sender.login(),
        sender_name => sender.name(),
        sender_email => sender.email(),
        sender_company => sender.company(),
    }
}

fn render(
    environment: &Environment<'_>,
    template: &'static str,
    source: &str,
    context: &Value,
) -> FormatterResult<String> {
    environment
        .render_str(source, context)
        .map_err(|err| FormatterError::Render {
            template,
            reason: err.to_string(),
        })
}

impl PullRequestFormatter for TemplateFormatter {
    fn format_pull_request(
        &self,
        pull_request: &PullRequest,
    ) -> FormatterResult<FormattedPullRequest> {
        let environment = Environment::new();
        let context = template_context(pull_request);

        let summary = render(&environment, "summary", &self.summary_template, &context)?;
        let description = render(
            &environment,
            "description",
            &self.description_template,
            &context,
        )?;

        Ok(FormattedPullRequest {
            summary: summary
                .lines()
                .next()
                .unwrap_or_default()
                .chars()
                .take(MAX_SUMMARY_CHARS)
                .collect(),
            description,
        })
    }
}
