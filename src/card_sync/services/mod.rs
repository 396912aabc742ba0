//! Application services for card reconciliation.

mod reconciler;

pub use reconciler::{CardOutcome, CardReconcileError, CardReconcileResult, CardReconciler};
