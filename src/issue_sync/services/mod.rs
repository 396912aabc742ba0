//! Application services for issue reconciliation.

mod reconciler;

pub use reconciler::{IssueOutcome, IssueReconcileError, IssueReconcileResult, IssueReconciler};
