//! Tests for raw form validation.

use instaname_core::{DESCRIPTION_TOO_LONG, DESCRIPTION_TOO_SHORT, GenerationForm};
use instaname_error::GenerationErrorKind;
use instaname_generation::{parse_existing_names, validate_form};

#[test]
fn test_valid_form_without_history() {
    let form = GenerationForm::for_description("A modern clothing brand for teenagers.");
    let request = validate_form(&form).expect("valid form");

    assert_eq!(request.description(), "A modern clothing brand for teenagers.");
    assert!(request.excluded_names().is_empty());
}

#[test]
fn test_missing_description_is_too_short() {
    let err = validate_form(&GenerationForm::default()).unwrap_err();
    assert_eq!(
        err.kind(),
        &GenerationErrorKind::Validation {
            field: "description".to_string(),
            message: DESCRIPTION_TOO_SHORT.to_string(),
        }
    );
}

#[test]
fn test_overlong_description_rejected() {
    let err = validate_form(&GenerationForm::for_description("x".repeat(501))).unwrap_err();
    assert_eq!(err.user_message(), DESCRIPTION_TOO_LONG);
}

#[test]
fn test_history_decoded_in_order() {
    let form = GenerationForm::from_pairs([
        ("description", "A traditional bakery specializing in artisanal breads."),
        ("existingNames", r#"["Rise Breads", "The Loaf", "Rise Breads"]"#),
    ]);
    let request = validate_form(&form).expect("valid form");

    assert_eq!(
        request.excluded_names(),
        &vec!["Rise Breads".to_string(), "The Loaf".to_string()]
    );
}

#[test]
fn test_unparsable_history_degrades_to_empty() {
    let form = GenerationForm::from_pairs([
        ("description", "A traditional bakery specializing in artisanal breads."),
        ("existingNames", "[\"Rise Breads\""),
    ]);
    let request = validate_form(&form).expect("history must never fail the request");
    assert!(request.excluded_names().is_empty());
}

#[test]
fn test_history_of_wrong_type_degrades_to_empty() {
    assert!(parse_existing_names(Some(r#"{"names": ["Stylo"]}"#)).is_empty());
    assert!(parse_existing_names(Some("[1, 2, 3]")).is_empty());
    assert!(parse_existing_names(Some("   ")).is_empty());
}

#[test]
fn test_blank_history_entries_dropped() {
    assert_eq!(
        parse_existing_names(Some(r#"["Stylo", "", "  ", "Verve Wear"]"#)),
        vec!["Stylo".to_string(), "Verve Wear".to_string()]
    );
}

#[test]
fn test_invalid_description_wins_over_bad_history() {
    let form = GenerationForm::from_pairs([("description", "hi"), ("existingNames", "oops")]);
    let err = validate_form(&form).unwrap_err();
    assert!(err.is_validation());
}
