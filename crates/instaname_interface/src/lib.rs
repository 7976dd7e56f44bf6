//! Trait definitions for instaname generative backends.
//!
//! A backend receives a rendered prompt together with a declared output
//! schema and answers with a structured payload or a schema violation.

mod backend;
mod schema;

pub use backend::{GenerativeBackend, StructuredRequest, StructuredResponse};
pub use schema::OutputSchema;
