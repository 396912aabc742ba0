//! Shared fixtures for unit tests.

use crate::pull_request::{PullRequest, Sender};

/// Returns the sender used across unit tests.
pub fn sender() -> Sender {
    Sender::new("jeffmccune", "https://avatars.example.com/u/1")
        .expect("valid sender")
        .with_name("Jeff McCune")
        .with_email("jeff@puppetlabs.com")
        .with_company("Puppet Labs")
}

/// Returns a pull request with the given identifier and title in repo `r`.
pub fn pull_request(identifier: &str, title: &str) -> PullRequest {
    PullRequest::new(
        identifier,
        "r",
        1,
        title,
        "https://github.com/o/r/pull/1",
        sender(),
    )
    .expect("valid pull request")
}
