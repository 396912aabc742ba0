//! Given steps for issue reconciliation BDD scenarios.

use super::when::reconcile;
use super::world::IssueWorld;
use crate::common::opened_pull_request;
use eyre::WrapErr;
use pullsync::issue_sync::domain::{IssueKey, ProjectKey};
use rstest_bdd_macros::given;

#[given(r#"a tracker project "{project}""#)]
fn tracker_project(world: &mut IssueWorld, project: String) -> Result<(), eyre::Report> {
    world.project = Some(ProjectKey::new(project).wrap_err("construct project key")?);
    Ok(())
}

#[given(r#"the tracker already has issue "{key}""#)]
fn existing_issue(world: &mut IssueWorld, key: String) -> Result<(), eyre::Report> {
    let issue_key = IssueKey::new(key).wrap_err("construct issue key")?;
    world
        .tracker
        .seed_issue(&issue_key, "Reported by a customer", None)
        .wrap_err("seed existing issue")?;
    Ok(())
}

#[given(
    r#"pull request {id:u64} on "{repository}" #{number:u64} is opened with title "{title}""#
)]
fn opened(
    world: &mut IssueWorld,
    id: u64,
    repository: String,
    number: u64,
    title: String,
) -> Result<(), eyre::Report> {
    world.pull_request = Some(opened_pull_request(id, &repository, number, &title)?);
    Ok(())
}

#[given("the pull request has already been reconciled with the tracker")]
fn already_reconciled(world: &IssueWorld) -> Result<(), eyre::Report> {
    reconcile(world)?.wrap_err("initial reconciliation")?;
    Ok(())
}
