//! Generative backend integrations for instaname.
//!
//! Currently provides a Gemini client that uses JSON mode with a response
//! schema to constrain the model output.

mod gemini;

pub use gemini::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, GEMINI_API_KEY_VAR, GeminiClient, GeminiConfig,
    GeminiConfigBuilder,
};
