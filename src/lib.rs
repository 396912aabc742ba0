//! Pullsync: keep issue trackers and task boards in step with pull requests.
//!
//! Each pull request event is reconciled against remote systems so that the
//! pull request is represented by exactly one tracking object:
//!
//! - an issue in a tracker project, linked back to the pull request, by
//!   [`issue_sync::services::IssueReconciler`];
//! - a card on a task board, recognised by a rename-tolerant title prefix,
//!   by [`card_sync::services::CardReconciler`].
//!
//! # Architecture
//!
//! Both reconcilers follow hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: In-memory and HTTP implementations of the ports
//!
//! # Modules
//!
//! - [`pull_request`]: Pull request value objects and webhook decoding
//! - [`issue_sync`]: Issue lookup, linking and creation
//! - [`card_sync`]: Card lookup and creation
//! - [`formatter`]: Summary and description rendering
//! - [`config`]: Environment-backed settings
//! - [`telemetry`]: Log subscriber setup

pub mod card_sync;
pub mod config;
pub mod formatter;
pub mod issue_sync;
pub mod pull_request;
pub mod telemetry;

#[cfg(test)]
mod test_support;
