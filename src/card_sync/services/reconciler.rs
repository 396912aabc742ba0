//! Find or create the card that tracks a pull request.

use crate::card_sync::{
    domain::{Card, CardIdentifier, ListId, card_body, card_title, find_matching_card},
    ports::{BoardError, TaskBoard},
};
use crate::formatter::{FormatterError, PullRequestFormatter};
use crate::pull_request::{InFlightRegistry, PullRequest};
use std::sync::Arc;
use thiserror::Error;
use tracing::{Instrument, Span, debug, info, info_span};

/// What a card reconciliation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardOutcome {
    /// A card carrying the pull request's identifier is already on the
    /// board.
    AlreadyTracked {
        /// The existing card.
        card: Card,
    },
    /// A new card was created.
    Created {
        /// The new card.
        card: Card,
    },
    /// Another reconciliation of the same pull request is running in this
    /// process.
    InFlight,
}

/// Errors that escape a card reconciliation.
#[derive(Debug, Error)]
pub enum CardReconcileError {
    /// Listing or creating cards failed.
    #[error(transparent)]
    Board(#[from] BoardError),

    /// The card body could not be produced.
    #[error(transparent)]
    Format(#[from] FormatterError),
}

/// Result type for card reconciliation.
pub type CardReconcileResult<T> = Result<T, CardReconcileError>;

/// Keeps one card per pull request on the board that owns a target list.
///
/// Cards are matched on their `(PR {repo}/{number})` title prefix, so a
/// card renamed on the board is still recognised. Every card on the board
/// is considered, whichever list it has moved to.
///
/// Like issue reconciliation this is look-then-create. Concurrent runs for
/// the same pull request can both create a card unless they share an
/// [`InFlightRegistry`] in one process. Claims are scoped to the target
/// list, so a registry shared with issue reconciliation does not block card
/// work.
pub struct CardReconciler<B, F>
where
    B: TaskBoard,
    F: PullRequestFormatter,
{
    pull_request: PullRequest,
    list_id: ListId,
    board: Arc<B>,
    formatter: Arc<F>,
    span: Span,
    in_flight: Option<InFlightRegistry>,
    in_flight_scope: String,
}

impl<B, F> CardReconciler<B, F>
where
    B: TaskBoard,
    F: PullRequestFormatter,
{
    /// Creates a reconciler placing the card for `pull_request` in
    /// `list_id`.
    #[must_use]
    pub fn new(
        pull_request: PullRequest,
        list_id: ListId,
        board: Arc<B>,
        formatter: Arc<F>,
    ) -> Self {
        let span = info_span!(
            "card_reconciler",
            pull_request.identifier = pull_request.identifier(),
            list = %list_id,
        );
        let in_flight_scope = format!("cards/{list_id}");
        Self {
            pull_request,
            list_id,
            board,
            formatter,
            span,
            in_flight: None,
            in_flight_scope,
        }
    }

    /// Emits all log events inside `span`.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Skips pull requests already being reconciled through `registry`.
    #[must_use]
    pub fn with_in_flight(mut self, registry: InFlightRegistry) -> Self {
        self.in_flight = Some(registry);
        self
    }

    /// Returns the pull request being reconciled.
    #[must_use]
    pub const fn pull_request(&self) -> &PullRequest {
        &self.pull_request
    }

    /// Returns the scope this reconciler claims in an [`InFlightRegistry`].
    #[must_use]
    pub fn in_flight_scope(&self) -> &str {
        &self.in_flight_scope
    }

    /// Returns `(PR {repo}/{number})` for the pull request.
    #[must_use]
    pub fn card_identifier(&self) -> CardIdentifier {
        CardIdentifier::for_pull_request(&self.pull_request)
    }

    /// Returns the title a new card is created with.
    #[must_use]
    pub fn card_title(&self) -> String {
        card_title(&self.pull_request)
    }

    /// Returns the body a new card is created with.
    ///
    /// # Errors
    ///
    /// Returns [`FormatterError`] when the description cannot be rendered.
    pub fn card_body(&self) -> Result<String, FormatterError> {
        let formatted = self.formatter.format_pull_request(&self.pull_request)?;
        Ok(card_body(&formatted, self.pull_request.sender()))
    }

    /// Returns the first card on the board whose title carries the
    /// identifier found in `search`.
    ///
    /// `search` may be a full card title or a bare identifier. Text without
    /// an identifier is matched as a whole.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] when the board cannot be listed.
    pub async fn find_card(&self, search: &str) -> Result<Option<Card>, BoardError> {
        let cards = self.board.all_cards_on_board_of(&self.list_id).await?;
        Ok(find_matching_card(&cards, search).cloned())
    }

    /// Reconciles the pull request with the board.
    ///
    /// # Errors
    ///
    /// Returns [`CardReconcileError`] when the board cannot be listed, the
    /// card cannot be created, or the body cannot be rendered.
    pub async fn perform(&self) -> CardReconcileResult<CardOutcome> {
        let span = self.span.clone();
        async {
            let _guard = match &self.in_flight {
                Some(registry) => {
                    let Some(guard) = registry
                        .try_acquire(&self.in_flight_scope, self.pull_request.identifier())
                    else {
                        info!("pull request is already being reconciled");
                        return Ok(CardOutcome::InFlight);
                    };
                    Some(guard)
                }
                None => None,
            };
            self.find_or_create().await
        }
        .instrument(span)
        .await
    }

    async fn find_or_create(&self) -> CardReconcileResult<CardOutcome> {
        let identifier = self.card_identifier();
        if let Some(card) = self.find_card(identifier.as_str()).await? {
            debug!(
                card.name = card.name(),
                card.short_id = card.short_id(),
                card.url = card.url(),
                "card already on board"
            );
            return Ok(CardOutcome::AlreadyTracked { card });
        }

        let title = self.card_title();
        let body = self.card_body()?;
        info!(card.name = %title, "creating card");
        let card = self
            .board
            .create_card(&self.list_id, &title, &body)
            .await?;
        info!(
            card.name = card.name(),
            card.short_id = card.short_id(),
            card.url = card.url(),
            "created card for pull request"
        );
        Ok(CardOutcome::Created { card })
    }
}
