//! End-to-end submission scenarios against a mock Readwise server
//!
//! Drives the workflow state machine and the real HTTP client the way the
//! TUI does, with the detail collector and notices replaced by direct calls
//! and assertions.

use marginalia::Settings;
use marginalia::readwise::Client;
use marginalia::workflow::{BeginAction, HighlightDetails, SubmissionOutcome, SubmissionWorkflow};
use mockito::Matcher;
use pretty_assertions::assert_eq;

fn details(title: &str, author: &str, category: &str) -> HighlightDetails {
    HighlightDetails {
        title: title.to_string(),
        author: author.to_string(),
        category: category.to_string(),
    }
}

#[tokio::test]
async fn accepted_submission_surfaces_one_success_notice() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_header("authorization", "Token abc123")
        .match_header("content-type", "application/json")
        .match_body(Matcher::JsonString(
            r#"{"highlights":[{"text":"Great quote.","title":"My Book","author":"Jane Doe","category":"books"}]}"#
                .to_string(),
        ))
        .with_status(200)
        .expect(1)
        .create_async()
        .await;

    let mut workflow = SubmissionWorkflow::new();
    assert_eq!(workflow.begin("Great quote."), BeginAction::CollectDetails);

    let draft = workflow.submit_details(details("My Book", "Jane Doe", "books")).unwrap();
    let client = Client::with_base_url("abc123".to_string(), server.url());
    let outcome = workflow.complete(client.send(draft).await);

    mock.assert_async().await;
    assert_eq!(outcome, SubmissionOutcome::Sent);
    assert_eq!(outcome.notice(), "Highlight sent to Readwise");
    assert!(workflow.is_idle());
}

#[tokio::test]
async fn empty_selection_never_reaches_the_network() {
    let mut server = mockito::Server::new_async().await;
    let mock = server.mock("POST", "/").expect(0).create_async().await;

    let mut workflow = SubmissionWorkflow::new();
    let action = workflow.begin("");

    match action {
        BeginAction::Reject(outcome) => assert_eq!(outcome.notice(), "No text selected"),
        BeginAction::CollectDetails => panic!("collector must not open for an empty selection"),
    }

    // Nothing to submit; the collector was never opened
    assert!(workflow.submit_details(details("t", "a", "c")).is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn rejected_submission_surfaces_the_generic_failure_once() {
    let mut server = mockito::Server::new_async().await;
    let mock = server.mock("POST", "/").with_status(401).expect(1).create_async().await;

    let mut workflow = SubmissionWorkflow::new();
    workflow.begin("Quote");
    let draft = workflow.submit_details(details("", "", "")).unwrap();

    let client = Client::with_base_url("expired".to_string(), server.url());
    let outcome = workflow.complete(client.send(draft).await);

    // Exactly one request, no retry
    mock.assert_async().await;
    assert_eq!(outcome, SubmissionOutcome::TransportFailed);
    assert_eq!(outcome.notice(), "Failed to send highlight to Readwise");
}

#[tokio::test]
async fn dismissed_collector_sends_nothing() {
    let mut server = mockito::Server::new_async().await;
    let mock = server.mock("POST", "/").expect(0).create_async().await;

    let mut workflow = SubmissionWorkflow::new();
    workflow.begin("Quote");
    workflow.cancel();

    assert!(workflow.is_idle());
    assert!(workflow.submit_details(details("t", "a", "c")).is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn updated_token_is_used_on_the_next_submission() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    // First run: empty token persisted
    Settings::default().save_to(&path).unwrap();

    // The user types a token into the settings field; each edit commits
    let mut settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.api_token, "");
    settings.api_token = "abc123".to_string();
    settings.save_to(&path).unwrap();

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_header("authorization", "Token abc123")
        .with_status(200)
        .expect(1)
        .create_async()
        .await;

    let reloaded = Settings::load_from(&path).unwrap();
    let client = Client::with_base_url(reloaded.api_token, server.url());

    let mut workflow = SubmissionWorkflow::new();
    workflow.begin("Quote");
    let draft = workflow.submit_details(details("", "", "")).unwrap();
    let outcome = workflow.complete(client.send(draft).await);

    mock.assert_async().await;
    assert_eq!(outcome, SubmissionOutcome::Sent);
}
