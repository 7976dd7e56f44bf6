//! Raw key-value payload submitted by the caller.

use serde::{Deserialize, Serialize};

/// Form key carrying the business description.
pub const DESCRIPTION_FIELD: &str = "description";
/// Form key carrying the JSON-serialized list of names already shown.
pub const EXISTING_NAMES_FIELD: &str = "existingNames";

/// Unvalidated request fields as they arrive from the UI layer.
///
/// `existing_names` holds a JSON array of strings exactly as submitted; it is
/// only decoded during validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationForm {
    /// Raw description field
    #[serde(default)]
    pub description: Option<String>,
    /// Raw serialized history field
    #[serde(default)]
    pub existing_names: Option<String>,
}

impl GenerationForm {
    /// A fresh submission carrying only a description.
    pub fn for_description(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            existing_names: None,
        }
    }

    /// Attaches the names already shown, serialized as a JSON array.
    ///
    /// An empty list leaves the field unset.
    pub fn with_existing_names(mut self, names: &[String]) -> Self {
        self.existing_names = if names.is_empty() {
            None
        } else {
            Some(serde_json::Value::from(names.to_vec()).to_string())
        };
        self
    }

    /// Builds a form from decoded key-value pairs, such as a form-encoded body.
    ///
    /// Unknown keys are ignored; when a key repeats, its first value wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use instaname_core::GenerationForm;
    ///
    /// let form = GenerationForm::from_pairs([
    ///     ("description", "A traditional bakery specializing in artisanal breads."),
    ///     ("existingNames", r#"["Rise Breads"]"#),
    /// ]);
    /// assert_eq!(form.existing_names.as_deref(), Some(r#"["Rise Breads"]"#));
    /// ```
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = Self::default();
        for (key, value) in pairs {
            match key.as_ref() {
                DESCRIPTION_FIELD if form.description.is_none() => {
                    form.description = Some(value.into());
                }
                EXISTING_NAMES_FIELD if form.existing_names.is_none() => {
                    form.existing_names = Some(value.into());
                }
                _ => {}
            }
        }
        form
    }
}
