//! Type conversions between instaname and Gemini formats.

use super::dto::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part};
use instaname_interface::{OutputSchema, StructuredResponse};
use serde_json::{Map, Value as JsonValue, json};

/// Translates an [`OutputSchema`] into Gemini's OpenAPI schema subset.
///
/// Minimum string lengths have no Gemini equivalent and are dropped; they are
/// enforced by the caller's own validation instead.
pub fn to_gemini_schema(schema: &OutputSchema) -> JsonValue {
    let mut out = Map::new();
    match schema {
        OutputSchema::String { .. } => {
            out.insert("type".into(), json!("STRING"));
        }
        OutputSchema::Array {
            items, min_items, ..
        } => {
            out.insert("type".into(), json!("ARRAY"));
            out.insert("items".into(), to_gemini_schema(items));
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
                .map(|(name, schema)| (name.clone(), to_gemini_schema(schema)))
                .collect();
            let ordering: Vec<&str> = properties.iter().map(|(name, _)| name.as_str()).collect();
            out.insert("type".into(), json!("OBJECT"));
            out.insert("properties".into(), JsonValue::Object(props));
            out.insert("required".into(), json!(required));
            out.insert("propertyOrdering".into(), json!(ordering));
        }
    }
    if let Some(text) = schema.description() {
        out.insert("description".into(), json!(text));
    }
    JsonValue::Object(out)
}

/// Builds a single-turn JSON-mode request.
pub fn to_generate_request(
    prompt: &str,
    schema: &OutputSchema,
    temperature: Option<f32>,
    max_output_tokens: Option<u32>,
) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: Some(prompt.to_string()),
            }],
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: to_gemini_schema(schema),
            temperature,
            max_output_tokens,
        },
    }
}

/// Reads the first candidate's text as a structured payload.
///
/// Anything that prevents reading a JSON document (blocked prompt, no
/// candidates, empty text, invalid JSON) is reported as a schema violation.
pub fn from_generate_response(response: &GenerateContentResponse) -> StructuredResponse {
    if let Some(reason) = response
        .prompt_feedback
        .as_ref()
        .and_then(|feedback| feedback.block_reason.as_ref())
    {
        return StructuredResponse::SchemaViolation(format!("prompt blocked: {}", reason));
    }

    let Some(candidate) = response.candidates.first() else {
        return StructuredResponse::SchemaViolation("no candidates returned".to_string());
    };

    let text: String = candidate
        .content
        .iter()
        .flat_map(|content| content.parts.iter())
        .filter_map(|part| part.text.as_deref())
        .collect();

    if text.trim().is_empty() {
        return StructuredResponse::SchemaViolation(format!(
            "candidate has no text (finish reason: {})",
            candidate.finish_reason.as_deref().unwrap_or("unknown")
        ));
    }

    match serde_json::from_str::<JsonValue>(strip_code_fence(&text)) {
        Ok(value) => StructuredResponse::Payload(value),
        Err(e) => StructuredResponse::SchemaViolation(format!("response is not valid JSON: {}", e)),
    }
}

/// Removes a surrounding markdown code fence, if the model added one.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    body.strip_suffix("```").unwrap_or(body).trim()
}
