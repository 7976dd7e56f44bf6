//! Gemini `generateContent` client with schema-constrained JSON output.

mod client;
mod conversions;
mod dto;

pub use client::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, GEMINI_API_KEY_VAR, GeminiClient, GeminiConfig,
    GeminiConfigBuilder,
};
