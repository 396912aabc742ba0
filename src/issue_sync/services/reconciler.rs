//! Find, link or create the issue that tracks a pull request.

use crate::formatter::{FormatterError, PullRequestFormatter};
use crate::issue_sync::{
    domain::{
        Issue, IssueDomainError, IssueKey, IssueKeyMatcher, NewIssue, ProjectKey, RemoteLink,
    },
    ports::{IssueTracker, TrackerError},
};
use crate::pull_request::{InFlightRegistry, PullRequest};
use std::sync::Arc;
use thiserror::Error;
use tracing::{Instrument, Span, debug, error, info, info_span, warn};

/// What a reconciliation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueOutcome {
    /// An issue already carries the pull request's webhook identifier.
    AlreadyTracked {
        /// Key of the existing issue.
        key: IssueKey,
    },
    /// The issue referenced in the pull request title was linked.
    LinkedReference {
        /// Key of the referenced issue.
        key: IssueKey,
    },
    /// A new issue was created and linked.
    Created {
        /// Key of the new issue.
        key: IssueKey,
    },
    /// The tracker rejected issue creation; the failure was logged.
    CreationFailed {
        /// Title of the pull request that could not be saved.
        title: String,
        /// Tracker diagnostic.
        reason: String,
    },
    /// Another reconciliation of the same pull request is running in this
    /// process.
    InFlight,
}

/// Errors that escape a reconciliation.
#[derive(Debug, Error)]
pub enum IssueReconcileError {
    /// Looking up the issue by webhook identifier failed.
    #[error("cannot look up issue by webhook id: {0}")]
    Lookup(#[source] TrackerError),

    /// Attaching the pull request link to an issue failed.
    #[error("cannot link pull request to {key}: {source}")]
    Link {
        /// Issue the link was meant for.
        key: IssueKey,
        /// Tracker failure.
        #[source]
        source: TrackerError,
    },

    /// The issue text could not be produced.
    #[error(transparent)]
    Format(#[from] FormatterError),
}

/// Result type for issue reconciliation.
pub type IssueReconcileResult<T> = Result<T, IssueReconcileError>;

/// Maps a pull request to at most one issue in a project.
///
/// Precedence, first match wins:
///
/// 1. an issue carrying the pull request's webhook identifier is left alone;
/// 2. the first `{project}-{digits}` key in the title is looked up and, when
///    it resolves, linked to the pull request;
/// 3. otherwise a `Task` issue is created and linked.
///
/// A stale or unresolvable reference in the title never blocks creation.
/// Tracker failures while creating are logged and reported as
/// [`IssueOutcome::CreationFailed`]; failures while linking propagate, and
/// a rerun will not retry the link because step 1 then finds the issue.
///
/// Lookup and creation are not atomic. Two concurrent reconciliations of
/// the same pull request can both miss step 1 and both create an issue.
/// [`IssueReconciler::with_in_flight`] closes that window within one
/// process only. Its claims are scoped to the project, so a registry shared
/// with card reconciliation does not block card work.
pub struct IssueReconciler<T, F>
where
    T: IssueTracker,
    F: PullRequestFormatter,
{
    matcher: IssueKeyMatcher,
    tracker: Arc<T>,
    formatter: Arc<F>,
    span: Span,
    in_flight: Option<InFlightRegistry>,
    in_flight_scope: String,
}

impl<T, F> IssueReconciler<T, F>
where
    T: IssueTracker,
    F: PullRequestFormatter,
{
    /// Creates a reconciler filing issues in `project`.
    ///
    /// # Errors
    ///
    /// Returns [`IssueDomainError::KeyPattern`] when the key pattern for
    /// `project` cannot be compiled.
    pub fn new(
        project: &ProjectKey,
        tracker: Arc<T>,
        formatter: Arc<F>,
    ) -> Result<Self, IssueDomainError> {
        Ok(Self {
            matcher: IssueKeyMatcher::new(project)?,
            tracker,
            formatter,
            span: info_span!("issue_reconciler", project = %project),
            in_flight: None,
            in_flight_scope: format!("issues/{project}"),
        })
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

    /// Returns the project issues are filed in.
    #[must_use]
    pub const fn project(&self) -> &ProjectKey {
        self.matcher.project()
    }

    /// Returns the scope this reconciler claims in an [`InFlightRegistry`].
    #[must_use]
    pub fn in_flight_scope(&self) -> &str {
        &self.in_flight_scope
    }

    /// Reconciles `pull_request` with the tracker.
    ///
    /// # Errors
    ///
    /// Returns [`IssueReconcileError`] when the webhook-id lookup fails,
    /// when linking fails, or when formatting fails. Creation failures are
    /// not errors.
    pub async fn perform(
        &self,
        pull_request: &PullRequest,
    ) -> IssueReconcileResult<IssueOutcome> {
        let span = self.span.clone();
        async {
            let _guard = match &self.in_flight {
                Some(registry) => {
                    let Some(guard) =
                        registry.try_acquire(&self.in_flight_scope, pull_request.identifier())
                    else {
                        info!(
                            pull_request.identifier = pull_request.identifier(),
                            "pull request is already being reconciled"
                        );
                        return Ok(IssueOutcome::InFlight);
                    };
                    Some(guard)
                }
                None => None,
            };
            self.create_or_link(pull_request).await
        }
        .instrument(span)
        .await
    }

    async fn create_or_link(
        &self,
        pull_request: &PullRequest,
    ) -> IssueReconcileResult<IssueOutcome> {
        if let Some(issue) = self.find_issue(pull_request).await? {
            debug!(
                pull_request.identifier = pull_request.identifier(),
                issue.key = %issue.key(),
                "pull request already tracked"
            );
            return Ok(IssueOutcome::AlreadyTracked {
                key: issue.key().clone(),
            });
        }

        if let Some(issue) = self.referenced_issue(pull_request).await {
            self.link_issue(issue.key(), pull_request).await?;
            return Ok(IssueOutcome::LinkedReference {
                key: issue.key().clone(),
            });
        }

        self.create_issue(pull_request).await
    }

    async fn find_issue(&self, pull_request: &PullRequest) -> IssueReconcileResult<Option<Issue>> {
        self.tracker
            .find_by_webhook_id(pull_request.identifier())
            .await
            .map_err(IssueReconcileError::Lookup)
    }

    async fn referenced_issue(&self, pull_request: &PullRequest) -> Option<Issue> {
        let key = self.matcher.first(pull_request.title())?;
        info!(
            issue.key = %key,
            title = pull_request.title(),
            "extracted issue key from pull request title"
        );

        match self.tracker.find_by_key(&key).await {
            Ok(Some(issue)) => Some(issue),
            Ok(None) => {
                info!(issue.key = %key, "referenced issue does not exist");
                None
            }
            Err(err) => {
                warn!(issue.key = %key, error = %err, "cannot resolve referenced issue");
                None
            }
        }
    }

    async fn link_issue(
        &self,
        key: &IssueKey,
        pull_request: &PullRequest,
    ) -> IssueReconcileResult<()> {
        info!(issue.key = %key, "adding pull request link to issue");
        self.tracker
            .add_remote_link(key, &RemoteLink::for_pull_request(pull_request))
            .await
            .map_err(|source| IssueReconcileError::Link {
                key: key.clone(),
                source,
            })
    }

    async fn create_issue(
        &self,
        pull_request: &PullRequest,
    ) -> IssueReconcileResult<IssueOutcome> {
        info!(
            project = %self.project(),
            title = pull_request.title(),
            "creating new issue"
        );

        let formatted = self.formatter.format_pull_request(pull_request)?;
        let new_issue = NewIssue::task(
            self.project().clone(),
            formatted.summary,
            formatted.description,
            pull_request.identifier(),
        );

        let issue = match self.tracker.create_issue(&new_issue).await {
            Ok(issue) => issue,
            Err(err) => {
                error!(
                    title = pull_request.title(),
                    response_body = err.response_body().unwrap_or_default(),
                    error = %err,
                    "failed to save pull request as issue"
                );
                return Ok(IssueOutcome::CreationFailed {
                    title: pull_request.title().to_owned(),
                    reason: err.to_string(),
                });
            }
        };

        self.link_issue(issue.key(), pull_request).await?;
        info!(
            issue.key = %issue.key(),
            webhook_id = pull_request.identifier(),
            "created issue for pull request"
        );
        Ok(IssueOutcome::Created {
            key: issue.key().clone(),
        })
    }
}
