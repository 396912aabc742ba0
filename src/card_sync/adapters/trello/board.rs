//! HTTP client for Trello boards and cards.

use super::payloads::{BoardRef, CardResponse, NewCardRequest};
use crate::card_sync::{
    domain::{Card, ListId},
    ports::{BoardError, BoardResult, TaskBoard},
};
use crate::config::TrelloSettings;
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const CARD_FIELDS: &str = "id,idShort,name,url";

/// Task board backed by the Trello REST v1 API.
///
/// Requests authenticate with the application key and member token as query
/// parameters.
#[derive(Debug, Clone)]
pub struct TrelloTaskBoard {
    http: Client,
    api_url: String,
    app_key: String,
    user_token: String,
}

impl TrelloTaskBoard {
    /// Builds a board client from connection settings.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Transport`] when the HTTP client cannot be
    /// built.
    pub fn from_settings(settings: &TrelloSettings) -> BoardResult<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(BoardError::transport)?;
        Ok(Self {
            http,
            api_url: settings.api_url.trim_end_matches('/').to_owned(),
            app_key: settings.app_key.clone(),
            user_token: settings.user_token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/1/{path}", self.api_url)
    }

    async fn get(&self, url: String, query: &[(&str, &str)]) -> BoardResult<Response> {
        debug!(%url, "trello GET");
        self.http
            .get(url)
            .query(&[("key", &self.app_key), ("token", &self.user_token)])
            .query(query)
            .send()
            .await
            .map_err(BoardError::transport)
    }

    async fn board_of(&self, list: &ListId) -> BoardResult<BoardRef> {
        let response = self
            .get(self.url(&format!("lists/{list}/board")), &[("fields", "id")])
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(BoardError::ListNotFound(list.clone()));
        }
        decode(ensure_success(response).await?).await
    }
}

async fn ensure_success(response: Response) -> BoardResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(BoardError::Http {
        status: status.as_u16(),
        body,
    })
}

async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> BoardResult<T> {
    response
        .json()
        .await
        .map_err(|err| BoardError::Decode(err.to_string()))
}

#[async_trait]
impl TaskBoard for TrelloTaskBoard {
    async fn all_cards_on_board_of(&self, list: &ListId) -> BoardResult<Vec<Card>> {
        let board = self.board_of(list).await?;
        let response = self
            .get(
                self.url(&format!("boards/{}/cards", board.id)),
                &[("fields", CARD_FIELDS)],
            )
            .await?;
        let cards: Vec<CardResponse> = decode(ensure_success(response).await?).await?;
        cards.into_iter().map(CardResponse::into_card).collect()
    }

    async fn create_card(&self, list: &ListId, title: &str, body: &str) -> BoardResult<Card> {
        let url = self.url("cards");
        debug!(%url, "trello POST");
        let response = self
            .http
            .post(url)
            .query(&[("key", &self.app_key), ("token", &self.user_token)])
            .json(&NewCardRequest {
                id_list: list.as_str(),
                name: title,
                desc: body,
                pos: "bottom",
            })
            .send()
            .await
            .map_err(BoardError::transport)?;
        let created: CardResponse = decode(ensure_success(response).await?).await?;
        created.into_card()
    }
}
