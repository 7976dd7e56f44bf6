//! Live tests against the Gemini API.
//!
//! Require GEMINI_API_KEY in the environment or a `.env` file.
//!
//! Run with: cargo test --package instaname_models --features api -- --ignored

#![cfg(feature = "api")]

use instaname_error::BackendErrorKind;
use instaname_interface::{GenerativeBackend, OutputSchema, StructuredRequest, StructuredResponse};
use instaname_models::{DEFAULT_GEMINI_MODEL, GeminiClient, GeminiConfig};

fn names_schema() -> OutputSchema {
    OutputSchema::object().property(
        "names",
        OutputSchema::array(
            OutputSchema::object()
                .property("name", OutputSchema::string().non_empty(), true)
                .property("description", OutputSchema::string().non_empty(), true),
        )
        .non_empty(),
        true,
    )
}

#[tokio::test]
#[ignore] // Requires GEMINI_API_KEY
async fn test_gemini_structured_generation() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let client = GeminiClient::from_env(DEFAULT_GEMINI_MODEL)?;

    let request = StructuredRequest::new(
        "Suggest three short brand names for a neighborhood coffee roaster.",
        names_schema(),
    );
    let response = client.generate_structured(&request).await?;

    match response {
        StructuredResponse::Payload(value) => {
            assert!(names_schema().validate(&value).is_ok(), "payload: {}", value)
        }
        StructuredResponse::SchemaViolation(reason) => panic!("Schema violation: {}", reason),
    }
    Ok(())
}

#[tokio::test]
#[ignore]
async fn test_gemini_rejects_bad_key() -> Result<(), Box<dyn std::error::Error>> {
    let config = GeminiConfig::builder().api_key("not-a-real-key").build()?;
    let client = GeminiClient::new(config)?;

    let request = StructuredRequest::new("Name a bakery.", names_schema());
    let err = client
        .generate_structured(&request)
        .await
        .expect_err("invalid key must fail");

    assert!(matches!(err.kind(), BackendErrorKind::Http { .. }));
    Ok(())
}
