//! Generation outcomes and the caller-facing response record.

use crate::{NameBatch, NameCandidate};
use instaname_error::GenerationError;
use serde::{Deserialize, Serialize};

/// Outcome of one generation: a non-empty batch or a single error.
pub type GenerationResult = Result<NameBatch, GenerationError>;

/// The record handed back across the UI boundary.
///
/// Serializes as either `{"names": [...]}` or `{"error": "..."}`. Error kinds
/// do not cross this boundary, only the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenerationResponse {
    /// Successful generation
    Names {
        /// Candidates in arrival order
        names: Vec<NameCandidate>,
    },
    /// Failed generation
    Error {
        /// Human-readable message
        error: String,
    },
}

impl GenerationResponse {
    /// Returns the candidates of a successful response.
    pub fn names(&self) -> Option<&[NameCandidate]> {
        match self {
            GenerationResponse::Names { names } => Some(names),
            GenerationResponse::Error { .. } => None,
        }
    }

    /// Returns the message of a failed response.
    pub fn error(&self) -> Option<&str> {
        match self {
            GenerationResponse::Names { .. } => None,
            GenerationResponse::Error { error } => Some(error),
        }
    }
}

impl From<&GenerationResult> for GenerationResponse {
    fn from(result: &GenerationResult) -> Self {
        match result {
            Ok(batch) => GenerationResponse::Names {
                names: batch.as_slice().to_vec(),
            },
            Err(e) => GenerationResponse::Error {
                error: e.user_message(),
            },
        }
    }
}

impl From<GenerationResult> for GenerationResponse {
    fn from(result: GenerationResult) -> Self {
        match result {
            Ok(batch) => GenerationResponse::Names {
                names: batch.into_vec(),
            },
            Err(e) => GenerationResponse::Error {
                error: e.user_message(),
            },
        }
    }
}
