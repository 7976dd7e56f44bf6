//! Tests for prompt rendering.

use instaname_core::GenerationRequest;
use instaname_generation::{
    MAX_CANDIDATES, MIN_CANDIDATES, PROMPT_TEMPLATE, build_prompt, exclusion_clause,
    render_prompt,
};

const CLOTHING: &str = "A modern clothing brand for teenagers.";

#[test]
fn test_prompt_is_deterministic() {
    let excluded = vec!["Stylo".to_string(), "Verve Wear".to_string()];
    assert_eq!(
        render_prompt(CLOTHING, &excluded),
        render_prompt(CLOTHING, &excluded)
    );
}

#[test]
fn test_prompt_states_constraints() {
    let prompt = render_prompt(CLOTHING, &[]);

    assert!(prompt.contains(&format!("between {} and {}", MIN_CANDIDATES, MAX_CANDIDATES)));
    assert!(prompt.contains("one or two words"));
    assert!(prompt.contains(".com"));
    assert!(prompt.contains(&format!("Description: {}", CLOTHING)));
}

#[test]
fn test_prompt_without_exclusions_has_no_exclusion_clause() {
    let prompt = render_prompt(CLOTHING, &[]);
    assert!(!prompt.contains("Do not repeat"));
    assert!(!prompt.contains("{exclusions}"));
    assert!(!prompt.contains("{description}"));
}

#[test]
fn test_prompt_lists_every_exclusion_in_order() {
    let excluded = vec![
        "Stylo".to_string(),
        "Verve Wear".to_string(),
        "Next Threads".to_string(),
    ];
    let prompt = render_prompt(CLOTHING, &excluded);

    assert!(prompt.contains(
        r#"Do not repeat any of them: "Stylo", "Verve Wear", "Next Threads"."#
    ));
}

#[test]
fn test_exclusion_clause_empty_for_no_names() {
    assert_eq!(exclusion_clause(&[]), "");
}

#[test]
fn test_names_with_commas_and_quotes_stay_distinct() {
    let excluded = vec![
        "Dough, Inc".to_string(),
        "The \"Loaf\"".to_string(),
        "Rise".to_string(),
    ];
    let clause = exclusion_clause(&excluded);

    assert!(clause.contains(r#"them: "Dough, Inc", "The \"Loaf\"", "Rise"."#));
}

#[test]
fn test_slot_markers_in_input_are_not_expanded() {
    let description = "Brand named {exclusions} for {description} lovers";
    let excluded = vec!["{description}".to_string()];
    let prompt = render_prompt(description, &excluded);

    assert!(prompt.contains(&format!("Description: {}", description)));
    assert!(prompt.contains(r#"Do not repeat any of them: "{description}"."#));
}

#[test]
fn test_build_prompt_matches_render() {
    let request = GenerationRequest::new(CLOTHING, vec!["Stylo".to_string()]).expect("valid");
    assert_eq!(
        build_prompt(&request),
        render_prompt(CLOTHING, &["Stylo".to_string()])
    );
}

#[test]
fn test_template_has_both_slots_once() {
    assert_eq!(PROMPT_TEMPLATE.matches("{description}").count(), 1);
    assert_eq!(PROMPT_TEMPLATE.matches("{exclusions}").count(), 1);
}
