//! Schema-constrained backend trait.

use crate::OutputSchema;
use async_trait::async_trait;
use instaname_error::BackendError;
use serde::Serialize;
use std::sync::Arc;

/// A prompt plus the structured shape the backend is asked to produce.
#[derive(Debug, Clone, PartialEq, Serialize, derive_getters::Getters)]
pub struct StructuredRequest {
    /// Fully rendered prompt text
    prompt: String,
    /// Declared output schema
    schema: OutputSchema,
}

impl StructuredRequest {
    /// Creates a new structured request.
    pub fn new(prompt: impl Into<String>, schema: OutputSchema) -> Self {
        Self {
            prompt: prompt.into(),
            schema,
        }
    }
}

/// What a backend hands back when the call itself succeeded.
///
/// Declaring a schema does not make the backend honor it, so callers must
/// still validate a `Payload` before trusting it.
#[derive(Debug, Clone, PartialEq)]
pub enum StructuredResponse {
    /// Structured payload the backend claims matches the schema
    Payload(serde_json::Value),
    /// Backend produced output that could not be read as the requested shape
    SchemaViolation(String),
}

/// Trait for generative backends that accept a declared output schema.
///
/// Implementations make exactly one attempt per call; retries, if any, belong
/// to the caller.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Sends the prompt and schema, returning the structured response.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] on transport failures, timeouts, non-success
    /// statuses or an undecodable response envelope.
    async fn generate_structured(
        &self,
        request: &StructuredRequest,
    ) -> Result<StructuredResponse, BackendError>;

    /// Provider name used in logs.
    fn provider_name(&self) -> &'static str;

    /// Model identifier used in logs.
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<T> GenerativeBackend for Arc<T>
where
    T: GenerativeBackend + ?Sized,
{
    async fn generate_structured(
        &self,
        request: &StructuredRequest,
    ) -> Result<StructuredResponse, BackendError> {
        (**self).generate_structured(request).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

#[async_trait]
impl<T> GenerativeBackend for Box<T>
where
    T: GenerativeBackend + ?Sized,
{
    async fn generate_structured(
        &self,
        request: &StructuredRequest,
    ) -> Result<StructuredResponse, BackendError> {
        (**self).generate_structured(request).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
