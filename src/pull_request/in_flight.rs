//! In-process exclusion of concurrent reconciliations for one pull request.
//!
//! The remote tracker and board offer no atomic check-and-create, so two
//! workers handling duplicate deliveries of the same event can both miss the
//! lookup and both create a tracking object. Claims are keyed by a target
//! scope and the pull request identifier. One [`InFlightRegistry`] can be
//! shared by the issue and card reconcilers: they claim different scopes, so
//! only duplicate work against the same target is skipped. Workers in other
//! processes are not covered.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

type Claim = (String, String);

/// Set of `(scope, identifier)` claims currently being reconciled.
#[derive(Debug, Clone, Default)]
pub struct InFlightRegistry {
    claims: Arc<Mutex<HashSet<Claim>>>,
}

impl InFlightRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims `identifier` within `scope` for the lifetime of the returned
    /// guard.
    ///
    /// Returns `None` when another reconciliation already holds the same
    /// claim. Claims in other scopes do not conflict.
    #[must_use]
    pub fn try_acquire(&self, scope: &str, identifier: &str) -> Option<InFlightGuard> {
        let claim = (scope.to_owned(), identifier.to_owned());
        let mut claims = self.claims.lock().unwrap_or_else(PoisonError::into_inner);
        if !claims.insert(claim.clone()) {
            return None;
        }
        Some(InFlightGuard {
            registry: self.clone(),
            claim,
        })
    }

    /// Returns whether `identifier` is currently claimed within `scope`.
    #[must_use]
    pub fn is_in_flight(&self, scope: &str, identifier: &str) -> bool {
        self.claims
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&(scope.to_owned(), identifier.to_owned()))
    }
}

/// Releases its claim from the registry when dropped.
#[derive(Debug)]
pub struct InFlightGuard {
    registry: InFlightRegistry,
    claim: Claim,
}

impl InFlightGuard {
    /// Returns the scope the claim was taken in.
    #[must_use]
    pub fn scope(&self) -> &str {
        &self.claim.0
    }

    /// Returns the claimed identifier.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.claim.1
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.registry
            .claims
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.claim);
    }
}
