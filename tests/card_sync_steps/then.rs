//! Then steps for card reconciliation BDD scenarios.

use super::world::CardWorld;
use eyre::WrapErr;
use pullsync::card_sync::{domain::ListId, services::CardOutcome};
use rstest_bdd_macros::then;

#[then(r#"a card titled "{name}" is created"#)]
fn card_created(world: &CardWorld, name: String) -> Result<(), eyre::Report> {
    match world.outcome()? {
        CardOutcome::Created { card } if card.name() == name => Ok(()),
        other => Err(eyre::eyre!("expected new card {name:?}, got {other:?}")),
    }
}

#[then(r#"the existing card "{name}" is reported"#)]
fn existing_card_reported(world: &CardWorld, name: String) -> Result<(), eyre::Report> {
    match world.outcome()? {
        CardOutcome::AlreadyTracked { card } if card.name() == name => Ok(()),
        other => Err(eyre::eyre!("expected existing card {name:?}, got {other:?}")),
    }
}

#[then(r#"list "{list}" holds {count:usize} cards"#)]
fn list_holds(world: &CardWorld, list: String, count: usize) -> Result<(), eyre::Report> {
    let list_id = ListId::new(list).wrap_err("construct list id")?;
    let cards = world.board.cards_in(&list_id).wrap_err("list cards")?;
    if cards.len() != count {
        return Err(eyre::eyre!(
            "expected {count} cards in {list_id}, found {}",
            cards.len()
        ));
    }
    Ok(())
}
