//! Shared world state for issue reconciliation BDD scenarios.

use pullsync::issue_sync::{
    adapters::memory::InMemoryIssueTracker,
    domain::ProjectKey,
    services::{IssueOutcome, IssueReconcileError},
};
use pullsync::pull_request::PullRequest;
use rstest::fixture;

/// Scenario world for issue reconciliation behaviour tests.
#[derive(Default)]
pub struct IssueWorld {
    pub tracker: InMemoryIssueTracker,
    pub project: Option<ProjectKey>,
    pub pull_request: Option<PullRequest>,
    pub last_outcome: Option<Result<IssueOutcome, IssueReconcileError>>,
}

impl IssueWorld {
    /// Returns the configured project or a scenario error.
    pub fn project(&self) -> Result<&ProjectKey, eyre::Report> {
        self.project
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing tracker project in scenario world"))
    }

    /// Returns the pending pull request or a scenario error.
    pub fn pull_request(&self) -> Result<&PullRequest, eyre::Report> {
        self.pull_request
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing pull request in scenario world"))
    }

    /// Returns the outcome of the last reconciliation or a scenario error.
    pub fn outcome(&self) -> Result<&IssueOutcome, eyre::Report> {
        self.last_outcome
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing reconciliation result in scenario world"))?
            .as_ref()
            .map_err(|err| eyre::eyre!("unexpected reconciliation failure: {err}"))
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> IssueWorld {
    IssueWorld::default()
}
