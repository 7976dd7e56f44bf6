//! Declared output schemas and validation of values against them.

use serde::Serialize;
use serde_json::{Map, Value as JsonValue, json};

/// Matches strings holding at least one non-whitespace character.
const NON_BLANK_PATTERN: &str = "\\S";

/// A minimal JSON-schema subset describing structured backend output.
///
/// Object properties keep their declaration order, which backends that
/// support property ordering receive as a hint.
///
/// # Examples
///
/// ```
/// use instaname_interface::OutputSchema;
/// use serde_json::json;
///
/// let schema = OutputSchema::object()
///     .property("name", OutputSchema::string().non_empty(), true);
///
/// assert!(schema.validate(&json!({"name": "Stylo"})).is_ok());
/// assert!(schema.validate(&json!({"name": ""})).is_err());
/// assert!(schema.validate(&json!({})).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum OutputSchema {
    /// A JSON string
    String {
        /// Hint for the backend
        description: Option<String>,
        /// Minimum length; any minimum also requires a non-whitespace character
        min_length: Option<usize>,
    },
    /// A JSON array of uniformly shaped items
    Array {
        /// Shape of each item
        items: Box<OutputSchema>,
        /// Hint for the backend
        description: Option<String>,
        /// Minimum number of items
        min_items: Option<usize>,
    },
    /// A JSON object with named properties
    Object {
        /// Properties in declaration order
        properties: Vec<(String, OutputSchema)>,
        /// Names of properties that must be present
        required: Vec<String>,
        /// Hint for the backend
        description: Option<String>,
    },
}

impl OutputSchema {
    /// A string schema.
    pub fn string() -> Self {
        OutputSchema::String {
            description: None,
            min_length: None,
        }
    }

    /// An array schema with the given item shape.
    pub fn array(items: OutputSchema) -> Self {
        OutputSchema::Array {
            items: Box::new(items),
            description: None,
            min_items: None,
        }
    }

    /// An object schema with no properties yet.
    pub fn object() -> Self {
        OutputSchema::Object {
            properties: Vec::new(),
            required: Vec::new(),
            description: None,
        }
    }

    /// Adds a property to an object schema. Has no effect on other shapes.
    pub fn property(mut self, name: impl Into<String>, schema: OutputSchema, required: bool) -> Self {
        if let OutputSchema::Object {
            properties,
            required: required_names,
            ..
        } = &mut self
        {
            let name = name.into();
            if required {
                required_names.push(name.clone());
            }
            properties.push((name, schema));
        }
        self
    }

    /// Attaches a description hint.
    pub fn describe(mut self, text: impl Into<String>) -> Self {
        match &mut self {
            OutputSchema::String { description, .. }
            | OutputSchema::Array { description, .. }
            | OutputSchema::Object { description, .. } => *description = Some(text.into()),
        }
        self
    }

    /// Requires strings to be non-blank and arrays to have at least one item.
    pub fn non_empty(mut self) -> Self {
        match &mut self {
            OutputSchema::String { min_length, .. } => *min_length = Some(1),
            OutputSchema::Array { min_items, .. } => *min_items = Some(1),
            OutputSchema::Object { .. } => {}
        }
        self
    }

    /// The description hint, if any.
    pub fn description(&self) -> Option<&str> {
        match self {
            OutputSchema::String { description, .. }
            | OutputSchema::Array { description, .. }
            | OutputSchema::Object { description, .. } => description.as_deref(),
        }
    }

    /// Renders the schema as standard JSON Schema.
    pub fn to_json_schema(&self) -> JsonValue {
        let mut out = Map::new();
        match self {
            OutputSchema::String { min_length, .. } => {
                out.insert("type".into(), json!("string"));
                if let Some(min) = min_length {
                    out.insert("minLength".into(), json!(min));
                    out.insert("pattern".into(), json!(NON_BLANK_PATTERN));
                }
            }
            OutputSchema::Array {
                items, min_items, ..
            } => {
                out.insert("type".into(), json!("array"));
                out.insert("items".into(), items.to_json_schema());
                if let Some(min) = min_items {
                    out.insert("minItems".into(), json!(min));
                }
            }
            OutputSchema::Object {
                properties,
                required,
                ..
            } => {
                let props: Map<String, JsonValue> = properties
                    .iter()
                    .map(|(name, schema)| (name.clone(), schema.to_json_schema()))
                    .collect();
                out.insert("type".into(), json!("object"));
                out.insert("properties".into(), JsonValue::Object(props));
                out.insert("required".into(), json!(required));
            }
        }
        if let Some(text) = self.description() {
            out.insert("description".into(), json!(text));
        }
        JsonValue::Object(out)
    }

    /// Checks a value against the schema.
    ///
    /// The value is validated against [`to_json_schema`](Self::to_json_schema)
    /// and every violation is reported.
    ///
    /// # Errors
    ///
    /// Returns the violations joined by `"; "`, each prefixed with the JSON
    /// pointer of the offending value, e.g. `/names/1: "description" is a
    /// required property`.
    pub fn validate(&self, value: &JsonValue) -> Result<(), String> {
        let validator = jsonschema::validator_for(&self.to_json_schema())
            .map_err(|e| format!("invalid schema: {}", e))?;

        let errors: Vec<String> = validator
            .iter_errors(value)
            .map(|e| {
                let path = e.instance_path.to_string();
                let path = if path.is_empty() { "/".to_string() } else { path };
                format!("{}: {}", path, e)
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors.join("; "))
        }
    }
}
