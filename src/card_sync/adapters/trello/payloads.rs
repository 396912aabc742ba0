//! Request and response bodies of the Trello REST v1 API.

use crate::card_sync::{
    domain::{Card, CardId},
    ports::BoardError,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub(super) struct BoardRef {
    pub id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CardResponse {
    pub id: String,
    #[serde(default)]
    pub id_short: u64,
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl CardResponse {
    pub fn into_card(self) -> Result<Card, BoardError> {
        let id = CardId::new(self.id).map_err(|err| BoardError::Decode(err.to_string()))?;
        Ok(Card::new(id, self.id_short, self.name, self.url))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct NewCardRequest<'a> {
    pub id_list: &'a str,
    pub name: &'a str,
    pub desc: &'a str,
    pub pos: &'static str,
}
