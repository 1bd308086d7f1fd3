use super::super::domain::Field;
use super::super::session::{FormSession, SubmitOutcome};
use super::super::validate::Violation;
use super::common::filled_draft;
use crate::client::PortalClient;

#[test]
fn set_field_reports_incremental_validation() {
    let mut session = FormSession::new();
    let error = session.set_field(Field::Email, "nope").expect("invalid email flagged");
    assert_eq!(error.violation, Violation::InvalidEmail);

    assert!(session.set_field(Field::Email, "ada@example.org").is_none());
    assert_eq!(session.draft().email, "ada@example.org");
}

#[test]
fn blur_revalidates_without_mutating() {
    let session = FormSession::new();
    let error = session.blur(Field::Name).expect("empty required field");
    assert_eq!(error.violation, Violation::MissingField);
    assert!(session.draft().name.is_empty());
}

#[test]
fn suggestions_match_case_insensitive_substrings() {
    let session = FormSession::with_directory(vec![
        "Google".to_string(),
        "OnePlus".to_string(),
        "Nothing".to_string(),
        "Xiaomi".to_string(),
    ]);

    assert_eq!(session.suggestions("no"), vec!["Nothing"]);
    assert_eq!(session.suggestions("PLUS"), vec!["OnePlus"]);
    assert_eq!(session.suggestions("").len(), 4);
    assert!(session.suggestions("sony").is_empty());
}

#[tokio::test]
async fn invalid_draft_blocks_transmission_entirely() {
    // Base URL that would refuse connections; validation must fail first,
    // so no request is ever attempted.
    let client = PortalClient::with_base_url("http://127.0.0.1:9");
    let mut session = FormSession::new();

    match session.submit(&client).await {
        SubmitOutcome::Invalid { errors } => {
            assert!(errors
                .iter()
                .any(|e| e.violation == Violation::MissingField));
        }
        other => panic!("expected validation block, got {other:?}"),
    }
    assert!(!session.is_submitting());
}

#[tokio::test]
async fn transport_failure_is_a_generic_failed_outcome() {
    // Unroutable loopback port: connection refused, no structured body.
    let client = PortalClient::with_base_url("http://127.0.0.1:9");
    let mut session = FormSession::with_draft(filled_draft());

    match session.submit(&client).await {
        SubmitOutcome::Failed { message } => {
            assert_eq!(message, super::super::session::SUBMIT_FAILED_MESSAGE);
        }
        other => panic!("expected generic failure, got {other:?}"),
    }
    assert!(!session.is_submitting());
}

#[tokio::test]
async fn directory_failure_degrades_to_an_empty_suggestion_set() {
    let client = PortalClient::with_base_url("http://127.0.0.1:9");
    let mut session = FormSession::new();
    session.load_companies(&client).await;
    assert!(session.companies().is_empty());
    assert!(session.suggestions("any").is_empty());
}
