//! Shared world state for card reconciliation BDD scenarios.

use pullsync::card_sync::{
    adapters::memory::InMemoryTaskBoard,
    domain::ListId,
    services::{CardOutcome, CardReconcileError},
};
use pullsync::pull_request::PullRequest;
use rstest::fixture;

/// Scenario world for card reconciliation behaviour tests.
#[derive(Default)]
pub struct CardWorld {
    pub board: InMemoryTaskBoard,
    pub target_list: Option<ListId>,
    pub pull_request: Option<PullRequest>,
    pub last_outcome: Option<Result<CardOutcome, CardReconcileError>>,
}

impl CardWorld {
    /// Returns the outcome of the last reconciliation or a scenario error.
    pub fn outcome(&self) -> Result<&CardOutcome, eyre::Report> {
        self.last_outcome
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing reconciliation result in scenario world"))?
            .as_ref()
            .map_err(|err| eyre::eyre!("unexpected reconciliation failure: {err}"))
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> CardWorld {
    CardWorld::default()
}
