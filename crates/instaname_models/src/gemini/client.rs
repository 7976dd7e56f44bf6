//! Gemini client implementing [`GenerativeBackend`].

use super::conversions;
use super::dto::GenerateContentResponse;
use async_trait::async_trait;
use derive_builder::Builder;
use instaname_error::{BackendError, BackendErrorKind};
use instaname_interface::{GenerativeBackend, StructuredRequest, StructuredResponse};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Model used when none is configured.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
/// Generative Language API root.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Environment variable holding the API key.
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Settings for [`GeminiClient`].
///
/// No request timeout is applied unless one is set.
///
/// # Examples
///
/// ```
/// use instaname_models::GeminiConfig;
/// use std::time::Duration;
///
/// let config = GeminiConfig::builder()
///     .api_key("test-key")
///     .request_timeout(Duration::from_secs(30))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.model(), "gemini-2.0-flash");
/// assert_eq!(*config.request_timeout(), Some(Duration::from_secs(30)));
/// ```
#[derive(Clone, Builder, derive_getters::Getters)]
#[builder(setter(into))]
pub struct GeminiConfig {
    /// API key sent in the `x-goog-api-key` header
    #[getter(skip)]
    api_key: String,
    /// Model identifier
    #[builder(default = "DEFAULT_GEMINI_MODEL.to_string()")]
    model: String,
    /// API root, without trailing slash
    #[builder(default = "DEFAULT_GEMINI_BASE_URL.to_string()")]
    base_url: String,
    /// Sampling temperature
    #[builder(default)]
    temperature: Option<f32>,
    /// Output token cap
    #[builder(default)]
    max_output_tokens: Option<u32>,
    /// Per-request timeout
    #[builder(default)]
    request_timeout: Option<Duration>,
}

impl GeminiConfig {
    /// Returns a builder for constructing a GeminiConfig.
    pub fn builder() -> GeminiConfigBuilder {
        GeminiConfigBuilder::default()
    }
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("temperature", &self.temperature)
            .field("max_output_tokens", &self.max_output_tokens)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

/// Client for Gemini's `generateContent` endpoint in JSON mode.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Creates a client from explicit settings.
    ///
    /// # Errors
    ///
    /// Returns [`BackendErrorKind::ClientCreation`] if the HTTP client cannot be built.
    #[instrument(skip(config), fields(model = %config.model))]
    pub fn new(config: GeminiConfig) -> Result<Self, BackendError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| BackendError::new(BackendErrorKind::ClientCreation(e.to_string())))?;

        debug!(
            model = %config.model,
            url = %config.base_url,
            timeout = ?config.request_timeout,
            "Created Gemini client"
        );

        Ok(Self { client, config })
    }

    /// Creates a client for `model`, reading the key from `GEMINI_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`BackendErrorKind::MissingApiKey`] if the variable is unset or empty.
    pub fn from_env(model: impl Into<String>) -> Result<Self, BackendError> {
        let mut builder = GeminiConfig::builder();
        builder.model(model.into());
        Self::from_env_with(builder)
    }

    /// Completes `builder` with the key from `GEMINI_API_KEY` and creates a client.
    ///
    /// # Errors
    ///
    /// Returns [`BackendErrorKind::MissingApiKey`] if the variable is unset or
    /// empty, or [`BackendErrorKind::ClientCreation`] if the settings are incomplete.
    pub fn from_env_with(mut builder: GeminiConfigBuilder) -> Result<Self, BackendError> {
        let api_key = std::env::var(GEMINI_API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| BackendError::new(BackendErrorKind::MissingApiKey))?;

        let config = builder
            .api_key(api_key)
            .build()
            .map_err(|e| BackendError::new(BackendErrorKind::ClientCreation(e.to_string())))?;

        Self::new(config)
    }

    /// The settings this client was built with.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

fn classify_transport_error(e: &reqwest::Error) -> BackendErrorKind {
    if e.is_timeout() {
        BackendErrorKind::Timeout(e.to_string())
    } else if e.is_decode() {
        BackendErrorKind::MalformedPayload(e.to_string())
    } else {
        BackendErrorKind::Transport(e.to_string())
    }
}

#[async_trait]
impl GenerativeBackend for GeminiClient {
    #[instrument(skip(self, request), fields(provider = "gemini", model = %self.config.model))]
    async fn generate_structured(
        &self,
        request: &StructuredRequest,
    ) -> Result<StructuredResponse, BackendError> {
        let body = conversions::to_generate_request(
            request.prompt(),
            request.schema(),
            self.config.temperature,
            self.config.max_output_tokens,
        );

        debug!(prompt_chars = request.prompt().len(), "Sending request");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                BackendError::new(classify_transport_error(&e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "API error");
            return Err(BackendError::new(BackendErrorKind::Http {
                status_code: status.as_u16(),
                message: error_text,
            }));
        }

        let payload: GenerateContentResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            let kind = if e.is_timeout() {
                BackendErrorKind::Timeout(e.to_string())
            } else {
                BackendErrorKind::MalformedPayload(e.to_string())
            };
            BackendError::new(kind)
        })?;

        if let Some(usage) = &payload.usage_metadata {
            debug!(
                prompt_tokens = ?usage.prompt_token_count,
                output_tokens = ?usage.candidates_token_count,
                total_tokens = ?usage.total_token_count,
                "Token usage"
            );
        }
        debug!(candidates = payload.candidates.len(), "Received response");

        Ok(conversions::from_generate_response(&payload))
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
