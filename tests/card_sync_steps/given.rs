//! Given steps for card reconciliation BDD scenarios.

use super::world::CardWorld;
use crate::common::opened_pull_request;
use eyre::WrapErr;
use pullsync::card_sync::domain::ListId;
use rstest_bdd_macros::given;

#[given(r#"a board "{board}" with list "{list}""#)]
fn board_with_list(
    world: &mut CardWorld,
    board: String,
    list: String,
) -> Result<(), eyre::Report> {
    let list_id = ListId::new(list).wrap_err("construct list id")?;
    world
        .board
        .add_list(&board, &list_id)
        .wrap_err("register list")?;
    // The first list registered is where new cards go.
    if world.target_list.is_none() {
        world.target_list = Some(list_id);
    }
    Ok(())
}

#[given(r#"the board already has card "{name}" in list "{list}""#)]
fn existing_card(world: &CardWorld, name: String, list: String) -> Result<(), eyre::Report> {
    let list_id = ListId::new(list).wrap_err("construct list id")?;
    world
        .board
        .seed_card(&list_id, &name)
        .wrap_err("seed existing card")?;
    Ok(())
}

#[given(
    r#"pull request {id:u64} on "{repository}" #{number:u64} is opened with title "{title}""#
)]
fn opened(
    world: &mut CardWorld,
    id: u64,
    repository: String,
    number: u64,
    title: String,
) -> Result<(), eyre::Report> {
    world.pull_request = Some(opened_pull_request(id, &repository, number, &title)?);
    Ok(())
}
