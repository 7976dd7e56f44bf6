//! Deterministic prompt rendering.

use instaname_core::GenerationRequest;
use serde_json::Value as JsonValue;

/// Revision of [`PROMPT_TEMPLATE`]; bump whenever its wording changes.
pub const PROMPT_TEMPLATE_VERSION: u32 = 1;

/// Fewest candidates the prompt asks for.
pub const MIN_CANDIDATES: usize = 3;
/// Most candidates the prompt asks for.
pub const MAX_CANDIDATES: usize = 5;

const DESCRIPTION_SLOT: &str = "{description}";
const EXCLUSIONS_SLOT: &str = "{exclusions}";

/// The instruction template. Only the two slots vary between calls.
pub const PROMPT_TEMPLATE: &str = r#"You are a naming specialist who invents short, memorable brand names that are likely to still be available as .com domains.

Read the business description below and propose between 3 and 5 distinct brand names. Every name must be one or two words. Give each name a short, catchy line that would work as a one-sentence social media post.

Description: {description}
{exclusions}
Respond with JSON only: an object with a "names" array whose items each have a "name" string and a "description" string.

Examples:

Description: A modern clothing brand for teenagers.
{"names": [
  {"name": "Stylo", "description": "Wear your style."},
  {"name": "Verve Wear", "description": "Threads with attitude."},
  {"name": "Next Threads", "description": "The future of fashion."}
]}

Description: A traditional bakery specializing in artisanal breads.
{"names": [
  {"name": "Dough & Co", "description": "Artisanal breads, baked fresh daily."},
  {"name": "Rise Breads", "description": "Handcrafted loaves that rise to the occasion."},
  {"name": "The Loaf", "description": "Simply great bread."}
]}"#;

/// The sentence listing names the backend should not repeat.
///
/// Empty when there is nothing to exclude. Names keep their given order and
/// are each rendered as a quoted JSON string, so commas or quotes inside a
/// name stay unambiguous.
pub fn exclusion_clause(excluded_names: &[String]) -> String {
    if excluded_names.is_empty() {
        return String::new();
    }
    let quoted: Vec<String> = excluded_names
        .iter()
        .map(|name| JsonValue::from(name.as_str()).to_string())
        .collect();
    format!(
        "\nThese names were already suggested. Do not repeat any of them: {}.\n",
        quoted.join(", ")
    )
}

/// Renders [`PROMPT_TEMPLATE`] for a description and exclusion list.
///
/// Substitution is single-pass over the template, so slot markers appearing
/// inside the inputs are left untouched.
///
/// # Examples
///
/// ```
/// use instaname_generation::render_prompt;
///
/// let names = vec!["Stylo".to_string()];
/// let prompt = render_prompt("A modern clothing brand for teenagers.", &names);
///
/// assert!(prompt.contains("Description: A modern clothing brand for teenagers."));
/// assert!(prompt.contains(r#"Do not repeat any of them: "Stylo"."#));
/// assert_eq!(prompt, render_prompt("A modern clothing brand for teenagers.", &names));
/// ```
pub fn render_prompt(description: &str, excluded_names: &[String]) -> String {
    let exclusions = exclusion_clause(excluded_names);
    let mut out =
        String::with_capacity(PROMPT_TEMPLATE.len() + description.len() + exclusions.len());

    for (i, segment) in PROMPT_TEMPLATE.split(DESCRIPTION_SLOT).enumerate() {
        if i > 0 {
            out.push_str(description);
        }
        for (j, piece) in segment.split(EXCLUSIONS_SLOT).enumerate() {
            if j > 0 {
                out.push_str(&exclusions);
            }
            out.push_str(piece);
        }
    }
    out
}

/// Renders the prompt for a validated request.
pub fn build_prompt(request: &GenerationRequest) -> String {
    render_prompt(request.description(), request.excluded_names())
}
