//! Tracker and formatter failures seen by the issue reconciler.

use std::sync::Arc;

use crate::formatter::{FormatterError, MockPullRequestFormatter, TemplateFormatter};
use crate::issue_sync::{
    domain::{Issue, IssueKey, ProjectKey},
    ports::{MockIssueTracker, TrackerError},
    services::{IssueOutcome, IssueReconcileError, IssueReconciler},
};
use crate::test_support::pull_request;
use mockall::predicate::eq;
use rstest::{fixture, rstest};

#[fixture]
fn project() -> ProjectKey {
    ProjectKey::new("PROJ").expect("valid project key")
}

fn key(value: &str) -> IssueKey {
    IssueKey::new(value).expect("valid issue key")
}

fn rejected(status: u16, body: &str) -> TrackerError {
    TrackerError::Http {
        status,
        body: body.to_owned(),
    }
}

fn reconciler(
    project: &ProjectKey,
    tracker: MockIssueTracker,
) -> IssueReconciler<MockIssueTracker, TemplateFormatter> {
    IssueReconciler::new(
        project,
        Arc::new(tracker),
        Arc::new(TemplateFormatter::default()),
    )
    .expect("reconciler builds")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_creation_is_reported_without_linking(project: ProjectKey) {
    let mut tracker = MockIssueTracker::new();
    tracker
        .expect_find_by_webhook_id()
        .with(eq("evt-1"))
        .times(1)
        .returning(|_| Ok(None));
    tracker
        .expect_create_issue()
        .times(1)
        .returning(|_| Err(rejected(400, r#"{"errors":{"summary":"required"}}"#)));
    tracker.expect_add_remote_link().never();

    let outcome = reconciler(&project, tracker)
        .perform(&pull_request("evt-1", "Fix login"))
        .await
        .expect("creation failure is not an error");

    match outcome {
        IssueOutcome::CreationFailed { title, reason } => {
            assert_eq!(title, "Fix login");
            assert!(reason.contains("HTTP 400"), "unexpected reason: {reason}");
        }
        other => panic!("expected CreationFailed, got {other:?}"),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn link_failure_after_creation_propagates(project: ProjectKey) {
    let mut tracker = MockIssueTracker::new();
    tracker.expect_find_by_webhook_id().returning(|_| Ok(None));
    tracker.expect_create_issue().times(1).returning(|new_issue| {
        Ok(Issue::new(
            IssueKey::in_project(new_issue.project(), 7),
            new_issue.project().clone(),
            new_issue.summary(),
        ))
    });
    tracker
        .expect_add_remote_link()
        .times(1)
        .returning(|_, _| Err(rejected(500, "boom")));

    let result = reconciler(&project, tracker)
        .perform(&pull_request("evt-1", "Fix login"))
        .await;

    match result {
        Err(IssueReconcileError::Link { key: failed, .. }) => {
            assert_eq!(failed, key("PROJ-7"));
        }
        other => panic!("expected link error, got {other:?}"),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn link_failure_on_referenced_issue_propagates(project: ProjectKey) {
    let mut tracker = MockIssueTracker::new();
    tracker.expect_find_by_webhook_id().returning(|_| Ok(None));
    tracker
        .expect_find_by_key()
        .with(eq(key("PROJ-42")))
        .times(1)
        .returning(|found| {
            Ok(Some(Issue::new(
                found.clone(),
                ProjectKey::new("PROJ").expect("valid project key"),
                "Login is broken",
            )))
        });
    tracker
        .expect_add_remote_link()
        .times(1)
        .returning(|_, _| Err(rejected(403, "forbidden")));
    tracker.expect_create_issue().never();

    let result = reconciler(&project, tracker)
        .perform(&pull_request("evt-1", "Fix login (PROJ-42)"))
        .await;

    assert!(matches!(result, Err(IssueReconcileError::Link { .. })));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn webhook_lookup_failure_stops_reconciliation(project: ProjectKey) {
    let mut tracker = MockIssueTracker::new();
    tracker
        .expect_find_by_webhook_id()
        .returning(|_| Err(TrackerError::transport(std::io::Error::other("timed out"))));
    tracker.expect_find_by_key().never();
    tracker.expect_create_issue().never();

    let result = reconciler(&project, tracker)
        .perform(&pull_request("evt-1", "Fix login (PROJ-42)"))
        .await;

    assert!(matches!(result, Err(IssueReconcileError::Lookup(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unresolvable_reference_falls_through_to_creation(project: ProjectKey) {
    let mut tracker = MockIssueTracker::new();
    tracker.expect_find_by_webhook_id().returning(|_| Ok(None));
    tracker
        .expect_find_by_key()
        .times(1)
        .returning(|_| Err(TrackerError::Decode("not json".to_owned())));
    tracker.expect_create_issue().times(1).returning(|new_issue| {
        assert_eq!(new_issue.webhook_id(), "evt-1");
        assert_eq!(new_issue.issue_type().as_str(), "Task");
        Ok(Issue::new(
            IssueKey::in_project(new_issue.project(), 1),
            new_issue.project().clone(),
            new_issue.summary(),
        ))
    });
    tracker
        .expect_add_remote_link()
        .times(1)
        .returning(|_, _| Ok(()));

    let outcome = reconciler(&project, tracker)
        .perform(&pull_request("evt-1", "Fix login (PROJ-42)"))
        .await
        .expect("reconciliation succeeds");

    assert_eq!(outcome, IssueOutcome::Created { key: key("PROJ-1") });
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn referenced_key_is_looked_up_as_written(project: ProjectKey) {
    let mut tracker = MockIssueTracker::new();
    tracker.expect_find_by_webhook_id().returning(|_| Ok(None));
    tracker
        .expect_find_by_key()
        .with(eq(key("PROJ-007")))
        .times(1)
        .returning(|found| {
            Ok(Some(Issue::new(
                found.clone(),
                ProjectKey::new("PROJ").expect("valid project key"),
                "Legacy issue",
            )))
        });
    tracker
        .expect_add_remote_link()
        .with(eq(key("PROJ-007")), mockall::predicate::always())
        .times(1)
        .returning(|_, _| Ok(()));
    tracker.expect_create_issue().never();

    let outcome = reconciler(&project, tracker)
        .perform(&pull_request("evt-1", "Fix PROJ-007"))
        .await
        .expect("reconciliation succeeds");

    assert_eq!(
        outcome,
        IssueOutcome::LinkedReference {
            key: key("PROJ-007")
        }
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn formatter_failure_prevents_creation(project: ProjectKey) {
    let mut tracker = MockIssueTracker::new();
    tracker.expect_find_by_webhook_id().returning(|_| Ok(None));
    tracker.expect_create_issue().never();
    let mut formatter = MockPullRequestFormatter::new();
    formatter.expect_format_pull_request().times(1).returning(|_| {
        Err(FormatterError::Render {
            template: "summary",
            reason: "unexpected end of input".to_owned(),
        })
    });

    let result = IssueReconciler::new(&project, Arc::new(tracker), Arc::new(formatter))
        .expect("reconciler builds")
        .perform(&pull_request("evt-1", "Fix login"))
        .await;

    assert!(matches!(
        result,
        Err(IssueReconcileError::Format(FormatterError::Render { .. }))
    ));
}
