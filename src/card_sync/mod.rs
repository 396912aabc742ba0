//! Reconciliation of pull requests with task board cards.
//!
//! [`services::CardReconciler`] keeps one card per pull request on the board
//! that owns a target list. Cards are recognised by a
//! `(PR {repo}/{number})` prefix in their title, which survives renames.
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
