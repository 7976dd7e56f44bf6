//! Layered configuration for the generator.

use config::{Config, Environment, File, FileFormat};
use instaname_error::{
    BackendError, BackendErrorKind, ConfigError, ConfigErrorKind, InstanameResult,
};
use instaname_models::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, GeminiClient, GeminiConfig,
    GeminiConfigBuilder,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, instrument};

/// File name looked up under the user config directory.
pub const CONFIG_FILE_NAME: &str = "instaname.toml";
/// Prefix of environment variable overrides, e.g. `INSTANAME_MODEL`.
pub const ENV_PREFIX: &str = "INSTANAME";

/// Generator settings.
///
/// Sources are layered, later ones winning: built-in defaults, the user
/// config file, an explicit file, then `INSTANAME_*` environment variables.
/// The API key is never read from these sources; see
/// [`gemini_client`](Self::gemini_client).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct InstanameConfig {
    /// Gemini model identifier
    model: String,
    /// Generative Language API root
    base_url: String,
    /// Sampling temperature
    #[serde(default)]
    temperature: Option<f32>,
    /// Output token cap
    #[serde(default)]
    max_output_tokens: Option<u32>,
    /// Per-request timeout in seconds; unset means no timeout
    #[serde(default)]
    request_timeout_secs: Option<u64>,
}

impl Default for InstanameConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            temperature: None,
            max_output_tokens: None,
            request_timeout_secs: None,
        }
    }
}

impl InstanameConfig {
    /// Path of the user config file, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("instaname").join(CONFIG_FILE_NAME))
    }

    /// Loads every configuration layer.
    ///
    /// The user config file is optional; `explicit`, when given, must exist.
    #[instrument(skip_all, fields(explicit = ?explicit))]
    pub fn load(explicit: Option<&Path>) -> InstanameResult<Self> {
        let mut builder = Self::defaults()?;

        if let Some(path) = Self::default_path() {
            debug!(path = %path.display(), "Checking user config file");
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
        }
        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        let settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .map_err(|e| ConfigError::new(ConfigErrorKind::Load(e.to_string())))?;

        Self::deserialize_from(settings)
    }

    /// Loads defaults overlaid with a single TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> InstanameResult<Self> {
        let settings = Self::defaults()?
            .add_source(
                File::from(path.as_ref())
                    .format(FileFormat::Toml)
                    .required(true),
            )
            .build()
            .map_err(|e| ConfigError::new(ConfigErrorKind::Load(e.to_string())))?;

        Self::deserialize_from(settings)
    }

    /// Replaces the model, as done by the `--model` flag.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Request timeout as a duration.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Gemini settings for the given API key.
    pub fn gemini_config(&self, api_key: impl Into<String>) -> InstanameResult<GeminiConfig> {
        let config = self
            .gemini_builder()
            .api_key(api_key.into())
            .build()
            .map_err(|e| BackendError::new(BackendErrorKind::ClientCreation(e.to_string())))?;
        Ok(config)
    }

    /// Builds a Gemini client, reading the key from `GEMINI_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`BackendErrorKind::MissingApiKey`] if the variable is unset or blank.
    pub fn gemini_client(&self) -> InstanameResult<GeminiClient> {
        Ok(GeminiClient::from_env_with(self.gemini_builder())?)
    }

    fn gemini_builder(&self) -> GeminiConfigBuilder {
        let mut builder = GeminiConfig::builder();
        builder
            .model(self.model.clone())
            .base_url(self.base_url.trim_end_matches('/').to_string())
            .temperature(self.temperature)
            .max_output_tokens(self.max_output_tokens)
            .request_timeout(self.request_timeout());
        builder
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("model", DEFAULT_GEMINI_MODEL)
            .and_then(|b| b.set_default("base_url", DEFAULT_GEMINI_BASE_URL))
            .map_err(|e| ConfigError::new(ConfigErrorKind::Load(e.to_string())))
    }

    fn deserialize_from(settings: Config) -> InstanameResult<Self> {
        let config: Self = settings
            .try_deserialize()
            .map_err(|e| ConfigError::new(ConfigErrorKind::Parse(e.to_string())))?;

        if config.model.trim().is_empty() {
            return Err(ConfigError::invalid("model", "must not be empty").into());
        }
        debug!(model = %config.model, "Configuration loaded");
        Ok(config)
    }
}
