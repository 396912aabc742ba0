//! Card body text.

use crate::formatter::FormattedPullRequest;
use crate::pull_request::Sender;

/// Builds the card body from formatter output and the pull request sender.
///
/// The body ends with the sender's avatar as a Markdown image,
/// `![{name}]({avatar_url})`. Missing email or company lines are omitted.
#[must_use]
pub fn card_body(formatted: &FormattedPullRequest, sender: &Sender) -> String {
    let mut lines = Vec::new();
    if !formatted.description.is_empty() {
        lines.push(formatted.description.clone());
        lines.push(String::new());
    }
    lines.push("---".to_owned());
    lines.push(format!("Opened by: {}", sender.name()));
    if let Some(email) = sender.email() {
        lines.push(format!("Email: {email}"));
    }
    if let Some(company) = sender.company() {
        lines.push(format!("Company: {company}"));
    }
    lines.push(String::new());
    lines.push(format!("![{}]({})", sender.name(), sender.avatar_url()));
    lines.join("\n")
}
