//! Domain model for inbound pull requests.

mod error;
mod ids;
mod pull_request;
mod sender;

pub use error::PullRequestDomainError;
pub use ids::PullRequestNumber;
pub use pull_request::PullRequest;
pub use sender::Sender;
