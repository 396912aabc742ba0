//! Reconciliation of pull requests with issue tracker issues.
//!
//! When a pull request opens, [`services::IssueReconciler`] makes sure it is
//! represented by exactly one issue in the configured project: an issue that
//! already carries the pull request's webhook identifier is left alone, an
//! issue referenced by key in the pull request title is linked, and
//! otherwise a new issue is created and linked. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
