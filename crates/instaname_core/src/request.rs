//! Validated generation request.

use instaname_error::GenerationError;
use serde::Serialize;
use std::collections::HashSet;

/// Shortest accepted description, in characters.
pub const MIN_DESCRIPTION_CHARS: usize = 10;
/// Longest accepted description, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 500;

/// Message for descriptions under [`MIN_DESCRIPTION_CHARS`].
pub const DESCRIPTION_TOO_SHORT: &str = "Description must be at least 10 characters.";
/// Message for descriptions over [`MAX_DESCRIPTION_CHARS`].
pub const DESCRIPTION_TOO_LONG: &str = "Description must be 500 characters or less.";

/// A request that is safe to dispatch to the generator.
///
/// The description is always within bounds and the excluded names are unique,
/// in the order they were first shown.
///
/// # Examples
///
/// ```
/// use instaname_core::GenerationRequest;
///
/// let request = GenerationRequest::new(
///     "A modern clothing brand for teenagers.",
///     vec!["Stylo".to_string(), "Stylo".to_string(), "Verve Wear".to_string()],
/// )?;
///
/// assert_eq!(request.excluded_names(), &vec!["Stylo".to_string(), "Verve Wear".to_string()]);
/// # Ok::<(), instaname_error::GenerationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Free-text business or product description
    description: String,
    /// Names already shown, oldest first
    excluded_names: Vec<String>,
}

impl GenerationRequest {
    /// Creates a request, enforcing the description bounds.
    ///
    /// Duplicate excluded names are dropped, keeping the first occurrence.
    ///
    /// # Errors
    ///
    /// Returns a `description` validation error when the description length
    /// falls outside `[MIN_DESCRIPTION_CHARS, MAX_DESCRIPTION_CHARS]`.
    #[track_caller]
    pub fn new(
        description: impl Into<String>,
        excluded_names: impl IntoIterator<Item = String>,
    ) -> Result<Self, GenerationError> {
        let description = description.into();
        let length = description.chars().count();

        if length < MIN_DESCRIPTION_CHARS {
            return Err(GenerationError::validation("description", DESCRIPTION_TOO_SHORT));
        }
        if length > MAX_DESCRIPTION_CHARS {
            return Err(GenerationError::validation("description", DESCRIPTION_TOO_LONG));
        }

        let mut seen = HashSet::new();
        let excluded_names = excluded_names
            .into_iter()
            .filter(|name| seen.insert(name.clone()))
            .collect();

        Ok(Self {
            description,
            excluded_names,
        })
    }

    /// True when this request steers away from previously shown names.
    pub fn is_regeneration(&self) -> bool {
        !self.excluded_names.is_empty()
    }
}
