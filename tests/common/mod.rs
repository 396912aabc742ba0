//! Helpers shared by the behaviour test binaries.

use std::future::Future;

use pullsync::pull_request::PullRequest;
use serde_json::json;

/// Decodes a pull request from a webhook payload built from the step
/// arguments.
pub fn opened_pull_request(
    id: u64,
    repository: &str,
    number: u64,
    title: &str,
) -> Result<PullRequest, eyre::Report> {
    let payload = json!({
        "action": "opened",
        "number": number,
        "pull_request": {
            "id": id,
            "number": number,
            "title": title,
            "html_url": format!("https://github.com/puppetlabs/{repository}/pull/{number}"),
            "body": "Steps to reproduce are in the linked ticket."
        },
        "repository": { "name": repository },
        "sender": {
            "login": "jeffmccune",
            "avatar_url": "https://avatars.example.com/u/1",
            "name": "Jeff McCune",
            "email": "jeff@puppetlabs.com",
            "company": "Puppet Labs"
        }
    });
    PullRequest::from_webhook_json(&payload.to_string())
        .map_err(|err| eyre::eyre!("decode webhook payload: {err}"))
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
