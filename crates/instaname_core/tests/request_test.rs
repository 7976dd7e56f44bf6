//! Tests for request bounds and form decoding.

use instaname_core::{
    DESCRIPTION_TOO_LONG, DESCRIPTION_TOO_SHORT, GenerationForm, GenerationRequest,
    MAX_DESCRIPTION_CHARS, MIN_DESCRIPTION_CHARS,
};
use instaname_error::GenerationErrorKind;

fn validation_message(result: Result<GenerationRequest, instaname_error::GenerationError>) -> String {
    match result {
        Err(e) => match e.kind() {
            GenerationErrorKind::Validation { field, message } => {
                assert_eq!(field, "description");
                message.clone()
            }
            other => panic!("Expected validation error, got {:?}", other),
        },
        Ok(request) => panic!("Expected validation error, got {:?}", request),
    }
}

#[test]
fn test_description_bounds_are_inclusive() {
    let shortest = "a".repeat(MIN_DESCRIPTION_CHARS);
    let longest = "a".repeat(MAX_DESCRIPTION_CHARS);

    assert!(GenerationRequest::new(shortest, Vec::new()).is_ok());
    assert!(GenerationRequest::new(longest, Vec::new()).is_ok());
}

#[test]
fn test_description_too_short() {
    let message = validation_message(GenerationRequest::new("hi", Vec::new()));
    assert_eq!(message, DESCRIPTION_TOO_SHORT);

    let message = validation_message(GenerationRequest::new("a".repeat(9), Vec::new()));
    assert_eq!(message, DESCRIPTION_TOO_SHORT);
}

#[test]
fn test_description_too_long() {
    let message = validation_message(GenerationRequest::new("a".repeat(501), Vec::new()));
    assert_eq!(message, DESCRIPTION_TOO_LONG);
}

#[test]
fn test_description_length_counts_characters() {
    // Ten multi-byte characters are still ten characters.
    let description = "é".repeat(10);
    assert!(description.len() > MIN_DESCRIPTION_CHARS);
    assert!(GenerationRequest::new(description, Vec::new()).is_ok());

    let message = validation_message(GenerationRequest::new("ééééé", Vec::new()));
    assert_eq!(message, DESCRIPTION_TOO_SHORT);
}

#[test]
fn test_excluded_names_deduplicated_in_order() {
    let request = GenerationRequest::new(
        "A traditional bakery specializing in artisanal breads.",
        vec![
            "Rise Breads".to_string(),
            "The Loaf".to_string(),
            "Rise Breads".to_string(),
            "Dough & Co".to_string(),
        ],
    )
    .expect("valid request");

    assert_eq!(
        request.excluded_names(),
        &vec![
            "Rise Breads".to_string(),
            "The Loaf".to_string(),
            "Dough & Co".to_string()
        ]
    );
    assert!(request.is_regeneration());
}

#[test]
fn test_excluded_names_case_sensitive() {
    let request = GenerationRequest::new(
        "A modern clothing brand for teenagers.",
        vec!["Stylo".to_string(), "stylo".to_string()],
    )
    .expect("valid request");

    assert_eq!(request.excluded_names().len(), 2);
}

#[test]
fn test_form_from_pairs_first_value_wins() {
    let form = GenerationForm::from_pairs([
        ("description", "first description"),
        ("ignored", "value"),
        ("description", "second description"),
    ]);

    assert_eq!(form.description.as_deref(), Some("first description"));
    assert!(form.existing_names.is_none());
}

#[test]
fn test_form_with_existing_names_serializes_json() {
    let names = vec!["Stylo".to_string(), "Verve \"Wear\"".to_string()];
    let form = GenerationForm::for_description("A modern clothing brand for teenagers.")
        .with_existing_names(&names);

    let raw = form.existing_names.expect("names attached");
    let decoded: Vec<String> = serde_json::from_str(&raw).expect("valid JSON");
    assert_eq!(decoded, names);
}

#[test]
fn test_form_with_no_existing_names_leaves_field_unset() {
    let form = GenerationForm::for_description("A modern clothing brand for teenagers.")
        .with_existing_names(&[]);
    assert!(form.existing_names.is_none());
}

#[test]
fn test_form_deserializes_camel_case() {
    let form: GenerationForm = serde_json::from_str(
        r#"{"description": "A modern clothing brand", "existingNames": "[\"Stylo\"]"}"#,
    )
    .expect("valid form");

    assert_eq!(form.existing_names.as_deref(), Some(r#"["Stylo"]"#));
}
