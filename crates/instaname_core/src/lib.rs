//! Core data types for the instaname name generator.
//!
//! This crate provides the request, candidate and response types shared by the
//! generator client, the orchestrator and the session layer.

mod candidate;
mod form;
mod request;
mod response;

pub use candidate::{NameBatch, NameCandidate};
pub use form::{DESCRIPTION_FIELD, EXISTING_NAMES_FIELD, GenerationForm};
pub use request::{
    DESCRIPTION_TOO_LONG, DESCRIPTION_TOO_SHORT, GenerationRequest, MAX_DESCRIPTION_CHARS,
    MIN_DESCRIPTION_CHARS,
};
pub use response::{GenerationResponse, GenerationResult};
