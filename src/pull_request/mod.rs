//! Pull request value objects shared by the issue and card reconcilers.
//!
//! A [`domain::PullRequest`] is a read-only view over the webhook fields the
//! reconcilers need. It is built once per event, either directly or through
//! [`domain::PullRequest::from_webhook_json`], and never mutated afterwards.
//!
//! - Domain types in [`domain`]
//! - Webhook payload decoding in [`webhook`]
//! - In-process de-duplication of concurrent reconciliations in
//!   [`in_flight`]

pub mod domain;
pub mod in_flight;
pub mod webhook;

pub use domain::{PullRequest, PullRequestDomainError, PullRequestNumber, Sender};
pub use in_flight::{InFlightGuard, InFlightRegistry};
pub use webhook::WebhookError;

#[cfg(test)]
mod tests;
