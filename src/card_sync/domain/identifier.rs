//! Rename-tolerant identification of pull request cards.
//!
//! A card created for a pull request is titled
//! `(PR {repo_name}/{number}) {title}`. The parenthesised prefix stays put
//! when someone edits the rest of the title, so it is what cards are
//! matched on.

use super::Card;
use crate::pull_request::PullRequest;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

#[expect(clippy::expect_used, reason = "the pattern is a literal known to compile")]
static IDENTIFIER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(.*?/\d+\)").expect("identifier pattern compiles"));

/// Parenthesised `(PR {repo}/{number})` marker embedded in card titles.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardIdentifier(String);

impl CardIdentifier {
    /// Returns the identifier for `pull_request`.
    #[must_use]
    pub fn for_pull_request(pull_request: &PullRequest) -> Self {
        Self(format!(
            "(PR {}/{})",
            pull_request.repo_name(),
            pull_request.number()
        ))
    }

    /// Returns the first `(…/{digits})` substring of `text`.
    #[must_use]
    pub fn find_in(text: &str) -> Option<Self> {
        IDENTIFIER_PATTERN
            .find(text)
            .map(|found| Self(found.as_str().to_owned()))
    }

    /// Derives the identifier to search for from a title or bare
    /// identifier.
    ///
    /// Text without an embedded identifier is used whole.
    #[must_use]
    pub fn from_search(search: &str) -> Self {
        Self::find_in(search).unwrap_or_else(|| Self(search.to_owned()))
    }

    /// Returns `true` when `card`'s title contains this identifier.
    #[must_use]
    pub fn matches(&self, card: &Card) -> bool {
        card.name().contains(&self.0)
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns the card title for `pull_request`.
#[must_use]
pub fn card_title(pull_request: &PullRequest) -> String {
    format!(
        "{} {}",
        CardIdentifier::for_pull_request(pull_request),
        pull_request.title()
    )
}

/// Returns the first card whose title carries the identifier in `search`.
pub fn find_matching_card<'a>(
    cards: impl IntoIterator<Item = &'a Card>,
    search: &str,
) -> Option<&'a Card> {
    let identifier = CardIdentifier::from_search(search);
    cards.into_iter().find(|card| identifier.matches(card))
}
