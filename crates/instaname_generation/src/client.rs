//! Schema-constrained generator client.

use instaname_core::{GenerationResult, NameBatch, NameCandidate};
use instaname_error::{GenerationError, GenerationErrorKind};
use instaname_interface::{GenerativeBackend, OutputSchema, StructuredRequest, StructuredResponse};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use tracing::{debug, error, instrument, warn};

/// The output shape every generation must satisfy.
///
/// An object with a non-empty `names` array whose items carry non-blank
/// `name` and `description` strings.
pub fn names_schema() -> OutputSchema {
    OutputSchema::object().property(
        "names",
        OutputSchema::array(
            OutputSchema::object()
                .property(
                    "name",
                    OutputSchema::string()
                        .non_empty()
                        .describe("A catchy, unique brand name of one or two words."),
                    true,
                )
                .property(
                    "description",
                    OutputSchema::string()
                        .non_empty()
                        .describe("A short, catchy line for the name, suitable for a tweet."),
                    true,
                ),
        )
        .non_empty()
        .describe("Brand names with descriptions."),
        true,
    )
}

#[derive(Deserialize)]
struct NamesPayload {
    names: Vec<RawCandidate>,
}

#[derive(Deserialize)]
struct RawCandidate {
    name: String,
    description: String,
}

/// Sends rendered prompts to a backend and validates what comes back.
///
/// Makes one attempt per call. Candidates are returned as produced; names the
/// prompt asked to exclude are not filtered here.
#[derive(Debug, Clone)]
pub struct NameGeneratorClient<B> {
    backend: B,
    schema: OutputSchema,
}

impl<B: GenerativeBackend> NameGeneratorClient<B> {
    /// Creates a client declaring [`names_schema`].
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            schema: names_schema(),
        }
    }

    /// The wrapped backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The schema declared on every call.
    pub fn schema(&self) -> &OutputSchema {
        &self.schema
    }

    /// Generates candidates for a rendered prompt.
    ///
    /// # Errors
    ///
    /// - `BackendFailure` when the backend call itself fails
    /// - `EmptyOrInvalidOutput` when the backend reports a schema violation or
    ///   the payload fails validation, including an empty `names` array
    #[instrument(
        skip(self, prompt),
        fields(provider = self.backend.provider_name(), model = %self.backend.model_name())
    )]
    pub async fn generate(&self, prompt: &str) -> GenerationResult {
        let request = StructuredRequest::new(prompt, self.schema.clone());

        let response = self
            .backend
            .generate_structured(&request)
            .await
            .map_err(|e| {
                error!(error = %e, "Generative backend call failed");
                GenerationError::from(e)
            })?;

        match response {
            StructuredResponse::Payload(payload) => self.parse_payload(payload),
            StructuredResponse::SchemaViolation(reason) => {
                warn!(reason = %reason, "Backend reported a schema violation");
                Err(GenerationError::new(
                    GenerationErrorKind::EmptyOrInvalidOutput(reason),
                ))
            }
        }
    }

    fn parse_payload(&self, payload: JsonValue) -> GenerationResult {
        if let Err(reason) = self.schema.validate(&payload) {
            warn!(reason = %reason, "Payload failed schema validation");
            return Err(GenerationError::new(
                GenerationErrorKind::EmptyOrInvalidOutput(reason),
            ));
        }

        let parsed: NamesPayload = serde_json::from_value(payload).map_err(|e| {
            GenerationError::new(GenerationErrorKind::EmptyOrInvalidOutput(e.to_string()))
        })?;

        let candidates: Vec<NameCandidate> = parsed
            .names
            .into_iter()
            .map(|raw| NameCandidate::new(raw.name.trim(), raw.description.trim()))
            .collect();

        let batch = NameBatch::new(candidates).ok_or_else(|| {
            GenerationError::new(GenerationErrorKind::EmptyOrInvalidOutput(
                "names array was empty".to_string(),
            ))
        })?;

        debug!(candidates = batch.len(), "Parsed name candidates");
        Ok(batch)
    }
}
