//! When steps for card reconciliation BDD scenarios.

use std::sync::Arc;

use super::world::CardWorld;
use crate::common::run_async;
use pullsync::card_sync::services::CardReconciler;
use pullsync::formatter::TemplateFormatter;
use rstest_bdd_macros::when;

#[when("the pull request is reconciled with the board")]
fn reconcile_with_board(world: &mut CardWorld) -> Result<(), eyre::Report> {
    let pull_request = world
        .pull_request
        .clone()
        .ok_or_else(|| eyre::eyre!("missing pull request in scenario world"))?;
    let list = world
        .target_list
        .clone()
        .ok_or_else(|| eyre::eyre!("missing target list in scenario world"))?;
    let reconciler = CardReconciler::new(
        pull_request,
        list,
        Arc::new(world.board.clone()),
        Arc::new(TemplateFormatter::default()),
    );
    world.last_outcome = Some(run_async(reconciler.perform()));
    Ok(())
}
