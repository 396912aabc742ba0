//! When steps for issue reconciliation BDD scenarios.

use std::sync::Arc;

use super::world::IssueWorld;
use crate::common::run_async;
use eyre::WrapErr;
use pullsync::formatter::TemplateFormatter;
use pullsync::issue_sync::services::{IssueOutcome, IssueReconcileError, IssueReconciler};
use rstest_bdd_macros::when;

/// Runs one reconciliation of the world's pull request.
pub fn reconcile(
    world: &IssueWorld,
) -> Result<Result<IssueOutcome, IssueReconcileError>, eyre::Report> {
    let reconciler = IssueReconciler::new(
        world.project()?,
        Arc::new(world.tracker.clone()),
        Arc::new(TemplateFormatter::default()),
    )
    .wrap_err("build issue reconciler")?;
    let pull_request = world.pull_request()?;
    Ok(run_async(reconciler.perform(pull_request)))
}

#[when("the pull request is reconciled with the tracker")]
fn reconcile_with_tracker(world: &mut IssueWorld) -> Result<(), eyre::Report> {
    world.last_outcome = Some(reconcile(world)?);
    Ok(())
}
