//! Single entry point composing validation, prompting and generation.

use crate::{NameGeneratorClient, PROMPT_TEMPLATE_VERSION, build_prompt, validate_form};
use futures::FutureExt;
use instaname_core::{GenerationForm, GenerationRequest, GenerationResponse, GenerationResult};
use instaname_error::{GenerationError, GenerationErrorKind};
use instaname_interface::GenerativeBackend;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use tracing::{debug, error, info, instrument};

/// Runs a generation end to end and always returns a well-formed result.
///
/// Validation failures return before any backend call. Faults raised while
/// prompting or generating, panics included, become
/// [`GenerationErrorKind::Unexpected`].
#[derive(Debug, Clone)]
pub struct NameOrchestrator<B> {
    client: NameGeneratorClient<B>,
}

impl<B: GenerativeBackend> NameOrchestrator<B> {
    /// Creates an orchestrator over the given backend.
    pub fn new(backend: B) -> Self {
        Self {
            client: NameGeneratorClient::new(backend),
        }
    }

    /// The generator client in use.
    pub fn client(&self) -> &NameGeneratorClient<B> {
        &self.client
    }

    /// Validates raw form fields, then generates.
    #[instrument(skip_all)]
    pub async fn generate(&self, form: &GenerationForm) -> GenerationResult {
        let request = match validate_form(form) {
            Ok(request) => request,
            Err(e) => {
                debug!(error = %e, "Rejected generation form");
                return Err(e);
            }
        };
        self.generate_request(&request).await
    }

    /// Generates for an already validated request.
    #[instrument(
        skip_all,
        fields(
            excluded = request.excluded_names().len(),
            regeneration = request.is_regeneration(),
            prompt_version = PROMPT_TEMPLATE_VERSION,
        )
    )]
    pub async fn generate_request(&self, request: &GenerationRequest) -> GenerationResult {
        let outcome = AssertUnwindSafe(async {
            let prompt = build_prompt(request);
            self.client.generate(&prompt).await
        })
        .catch_unwind()
        .await;

        match outcome {
            Ok(Ok(batch)) => {
                info!(candidates = batch.len(), "Generated names");
                Ok(batch)
            }
            Ok(Err(e)) => {
                debug!(error = %e, "Generation failed");
                Err(e)
            }
            Err(panic) => {
                let message = panic_message(panic.as_ref());
                error!(panic = %message, "Generation panicked");
                Err(GenerationError::new(GenerationErrorKind::Unexpected(
                    message,
                )))
            }
        }
    }

    /// Like [`generate`](Self::generate), converted to the caller-facing record.
    pub async fn respond(&self, form: &GenerationForm) -> GenerationResponse {
        self.generate(form).await.into()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "generation panicked".to_string()
    }
}
