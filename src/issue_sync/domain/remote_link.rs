//! Back-links from tracker issues to pull requests.

use crate::pull_request::PullRequest;
use serde::{Deserialize, Serialize};

/// Application name shown next to pull request links.
pub const LINK_APPLICATION: &str = "Github";

/// Favicon shown next to pull request links.
pub const LINK_ICON_URL: &str = "http://github.com/favicon.ico";

/// Hover title of the link icon.
pub const LINK_ICON_TITLE: &str = "Pull Request";

/// Small icon rendered beside a remote link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkIcon {
    /// URL of a 16x16 image.
    pub url16x16: String,
    /// Hover text.
    pub title: String,
}

/// Link attached to an issue's native link list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteLink {
    url: String,
    title: String,
    application: String,
    icon: LinkIcon,
}

impl RemoteLink {
    /// Builds the link pointing back at `pull_request`.
    ///
    /// The title is always `Pull Request: {title}` and the target is always
    /// the pull request's browser URL, whichever branch attached it.
    #[must_use]
    pub fn for_pull_request(pull_request: &PullRequest) -> Self {
        Self {
            url: pull_request.html_url().to_owned(),
            title: format!("Pull Request: {}", pull_request.title()),
            application: LINK_APPLICATION.to_owned(),
            icon: LinkIcon {
                url16x16: LINK_ICON_URL.to_owned(),
                title: LINK_ICON_TITLE.to_owned(),
            },
        }
    }

    /// Returns the link target.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the link title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the application name.
    #[must_use]
    pub fn application(&self) -> &str {
        &self.application
    }

    /// Returns the link icon.
    #[must_use]
    pub const fn icon(&self) -> &LinkIcon {
        &self.icon
    }
}
