//! Then steps for issue reconciliation BDD scenarios.

use super::world::IssueWorld;
use eyre::WrapErr;
use pullsync::issue_sync::{domain::IssueKey, services::IssueOutcome};
use rstest_bdd_macros::then;

fn issue_key(value: &str) -> Result<IssueKey, eyre::Report> {
    IssueKey::new(value).wrap_err("construct issue key")
}

#[then(r#"the pull request is linked to issue "{key}""#)]
fn linked_to(world: &IssueWorld, key: String) -> Result<(), eyre::Report> {
    let expected = IssueOutcome::LinkedReference {
        key: issue_key(&key)?,
    };
    let outcome = world.outcome()?;
    if outcome != &expected {
        return Err(eyre::eyre!("expected {expected:?}, got {outcome:?}"));
    }
    Ok(())
}

#[then(r#"issue "{key}" is created for the pull request"#)]
fn created(world: &IssueWorld, key: String) -> Result<(), eyre::Report> {
    let issue_key = issue_key(&key)?;
    let expected = IssueOutcome::Created {
        key: issue_key.clone(),
    };
    let outcome = world.outcome()?;
    if outcome != &expected {
        return Err(eyre::eyre!("expected {expected:?}, got {outcome:?}"));
    }
    let webhook_id = world
        .tracker
        .webhook_id(&issue_key)
        .wrap_err("read webhook id")?;
    let identifier = world.pull_request()?.identifier();
    if webhook_id.as_deref() != Some(identifier) {
        return Err(eyre::eyre!(
            "expected webhook id {identifier}, found {webhook_id:?}"
        ));
    }
    Ok(())
}

#[then(r#"the pull request is reported as already tracked by "{key}""#)]
fn already_tracked(world: &IssueWorld, key: String) -> Result<(), eyre::Report> {
    let expected = IssueOutcome::AlreadyTracked {
        key: issue_key(&key)?,
    };
    let outcome = world.outcome()?;
    if outcome != &expected {
        return Err(eyre::eyre!("expected {expected:?}, got {outcome:?}"));
    }
    Ok(())
}

#[then("the tracker holds {count:usize} issues")]
fn tracker_holds(world: &IssueWorld, count: usize) -> Result<(), eyre::Report> {
    let issues = world.tracker.issues().wrap_err("list issues")?;
    if issues.len() != count {
        return Err(eyre::eyre!(
            "expected {count} issues, found {}",
            issues.len()
        ));
    }
    Ok(())
}

#[then(r#"issue "{key}" has a link titled "{title}""#)]
fn has_link(world: &IssueWorld, key: String, title: String) -> Result<(), eyre::Report> {
    let links = world
        .tracker
        .remote_links(&issue_key(&key)?)
        .wrap_err("list remote links")?;
    let html_url = world.pull_request()?.html_url();
    if !links
        .iter()
        .any(|link| link.title() == title && link.url() == html_url)
    {
        return Err(eyre::eyre!(
            "no link titled {title:?} to {html_url} on {key}: {links:?}"
        ));
    }
    Ok(())
}

#[then(r#"issue "{key}" has {count:usize} links"#)]
fn link_count(world: &IssueWorld, key: String, count: usize) -> Result<(), eyre::Report> {
    let links = world
        .tracker
        .remote_links(&issue_key(&key)?)
        .wrap_err("list remote links")?;
    if links.len() != count {
        return Err(eyre::eyre!(
            "expected {count} links on {key}, found {}",
            links.len()
        ));
    }
    Ok(())
}
