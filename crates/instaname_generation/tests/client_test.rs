//! Tests for the schema-constrained generator client.

mod test_utils;

use instaname_error::{BackendErrorKind, GenerationErrorKind};
use instaname_generation::{NameGeneratorClient, names_schema};
use serde_json::json;
use test_utils::{MockBackend, MockBehavior, names_payload};

#[tokio::test]
async fn test_payload_becomes_batch_in_order() {
    let client = NameGeneratorClient::new(MockBackend::with_names(&[
        "Stylo",
        "Verve Wear",
        "Next Threads",
    ]));

    let batch = client.generate("prompt").await.expect("batch");
    assert_eq!(
        batch.names().collect::<Vec<_>>(),
        vec!["Stylo", "Verve Wear", "Next Threads"]
    );
    assert_eq!(client.backend().call_count(), 1);
}

#[tokio::test]
async fn test_request_carries_prompt_and_schema() {
    let client = NameGeneratorClient::new(MockBackend::with_names(&["Stylo"]));
    client.generate("the rendered prompt").await.expect("batch");

    let requests = client.backend().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].prompt(), "the rendered prompt");
    assert_eq!(requests[0].schema(), &names_schema());
}

#[tokio::test]
async fn test_candidates_are_trimmed() {
    let client = NameGeneratorClient::new(MockBackend::new(vec![MockBehavior::Payload(
        json!({"names": [{"name": "  Stylo ", "description": " Wear your style.\n"}]}),
    )]));

    let batch = client.generate("prompt").await.expect("batch");
    let first = &batch.as_slice()[0];
    assert_eq!(first.name(), "Stylo");
    assert_eq!(first.description(), "Wear your style.");
}

#[tokio::test]
async fn test_empty_names_array_is_invalid_output() {
    let client = NameGeneratorClient::new(MockBackend::new(vec![MockBehavior::Payload(
        json!({"names": []}),
    )]));

    let err = client.generate("prompt").await.unwrap_err();
    assert!(matches!(
        err.kind(),
        GenerationErrorKind::EmptyOrInvalidOutput(_)
    ));
}

#[tokio::test]
async fn test_missing_field_is_invalid_output() {
    let client = NameGeneratorClient::new(MockBackend::new(vec![MockBehavior::Payload(
        json!({"names": [{"name": "Stylo"}]}),
    )]));

    let err = client.generate("prompt").await.unwrap_err();
    match err.kind() {
        GenerationErrorKind::EmptyOrInvalidOutput(reason) => {
            assert!(reason.contains("description"), "reason was {}", reason)
        }
        other => panic!("unexpected kind {:?}", other),
    }
}

#[tokio::test]
async fn test_blank_name_is_invalid_output() {
    let client = NameGeneratorClient::new(MockBackend::new(vec![MockBehavior::Payload(
        json!({"names": [{"name": "   ", "description": "Nothing here."}]}),
    )]));

    let err = client.generate("prompt").await.unwrap_err();
    assert!(matches!(
        err.kind(),
        GenerationErrorKind::EmptyOrInvalidOutput(_)
    ));
}

#[tokio::test]
async fn test_schema_violation_is_invalid_output() {
    let client = NameGeneratorClient::new(MockBackend::new(vec![MockBehavior::Violation(
        "response was not valid JSON".to_string(),
    )]));

    let err = client.generate("prompt").await.unwrap_err();
    assert_eq!(
        err.kind(),
        &GenerationErrorKind::EmptyOrInvalidOutput("response was not valid JSON".to_string())
    );
}

#[tokio::test]
async fn test_backend_error_is_backend_failure() {
    let client = NameGeneratorClient::new(MockBackend::new(vec![MockBehavior::Fail(
        BackendErrorKind::Http {
            status_code: 503,
            message: "overloaded".to_string(),
        },
    )]));

    let err = client.generate("prompt").await.unwrap_err();
    assert!(matches!(
        err.kind(),
        GenerationErrorKind::BackendFailure(BackendErrorKind::Http {
            status_code: 503,
            ..
        })
    ));
}

#[tokio::test]
async fn test_excluded_names_are_not_filtered() {
    // Repeats are handled by the session merge, not here.
    let client = NameGeneratorClient::new(MockBackend::new(vec![MockBehavior::Payload(
        names_payload(&["Stylo", "Stylo"]),
    )]));

    let batch = client.generate("prompt").await.expect("batch");
    assert_eq!(batch.len(), 2);
}
