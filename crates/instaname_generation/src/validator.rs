//! Input validation for raw generation forms.

use instaname_core::{GenerationForm, GenerationRequest};
use instaname_error::GenerationError;
use tracing::{debug, instrument, warn};

/// Decodes the serialized history of names already shown.
///
/// Decoding is lenient: a missing, blank or unparsable value yields an empty
/// list, and blank entries are dropped. History never fails a request.
///
/// # Examples
///
/// ```
/// use instaname_generation::parse_existing_names;
///
/// assert_eq!(parse_existing_names(Some(r#"["Stylo", "Verve Wear"]"#)), vec!["Stylo", "Verve Wear"]);
/// assert!(parse_existing_names(Some("not json")).is_empty());
/// assert!(parse_existing_names(None).is_empty());
/// ```
pub fn parse_existing_names(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw.filter(|value| !value.trim().is_empty()) else {
        return Vec::new();
    };

    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(names) => names
            .into_iter()
            .filter(|name| !name.trim().is_empty())
            .collect(),
        Err(e) => {
            warn!(error = %e, "Ignoring unparsable existingNames history");
            Vec::new()
        }
    }
}

/// Turns raw form fields into a dispatchable request.
///
/// A missing description is treated as empty and therefore too short.
///
/// # Errors
///
/// Returns a `description` validation error when the description length is
/// out of bounds.
#[instrument(skip(form))]
pub fn validate_form(form: &GenerationForm) -> Result<GenerationRequest, GenerationError> {
    let description = form.description.clone().unwrap_or_default();
    let excluded = parse_existing_names(form.existing_names.as_deref());

    let request = GenerationRequest::new(description, excluded)?;
    debug!(
        description_chars = request.description().chars().count(),
        excluded = request.excluded_names().len(),
        "Validated generation form"
    );
    Ok(request)
}
