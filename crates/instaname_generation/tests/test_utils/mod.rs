//! Test utilities for generation tests.
//!
//! Provides a scripted mock backend that records every request it receives.

#![allow(dead_code)]

use async_trait::async_trait;
use instaname_error::{BackendError, BackendErrorKind};
use instaname_interface::{GenerativeBackend, StructuredRequest, StructuredResponse};
use serde_json::{Value as JsonValue, json};
use std::collections::VecDeque;
use std::sync::Mutex;

/// What the mock does on its next call.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Return this payload
    Payload(JsonValue),
    /// Report a schema violation
    Violation(String),
    /// Fail with a backend error
    Fail(BackendErrorKind),
    /// Panic inside the backend
    Panic(String),
}

/// Mock backend answering from a script, in order.
#[derive(Debug, Default)]
pub struct MockBackend {
    script: Mutex<VecDeque<MockBehavior>>,
    requests: Mutex<Vec<StructuredRequest>>,
}

impl MockBackend {
    pub fn new(script: Vec<MockBehavior>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Mock that returns one batch with the given names.
    pub fn with_names(names: &[&str]) -> Self {
        Self::new(vec![MockBehavior::Payload(names_payload(names))])
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.requests.lock().expect("requests lock").len()
    }

    /// Prompts received so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.requests
            .lock()
            .expect("requests lock")
            .iter()
            .map(|r| r.prompt().clone())
            .collect()
    }

    /// Requests received so far, in order.
    pub fn requests(&self) -> Vec<StructuredRequest> {
        self.requests.lock().expect("requests lock").clone()
    }
}

#[async_trait]
impl GenerativeBackend for MockBackend {
    async fn generate_structured(
        &self,
        request: &StructuredRequest,
    ) -> Result<StructuredResponse, BackendError> {
        self.requests
            .lock()
            .expect("requests lock")
            .push(request.clone());

        let next = self
            .script
            .lock()
            .expect("script lock")
            .pop_front()
            .expect("mock backend script exhausted");

        match next {
            MockBehavior::Payload(value) => Ok(StructuredResponse::Payload(value)),
            MockBehavior::Violation(reason) => Ok(StructuredResponse::SchemaViolation(reason)),
            MockBehavior::Fail(kind) => Err(BackendError::new(kind)),
            MockBehavior::Panic(message) => panic!("{}", message),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model-v1"
    }
}

/// Payload with one candidate per name and a generated blurb.
pub fn names_payload(names: &[&str]) -> JsonValue {
    let items: Vec<JsonValue> = names
        .iter()
        .map(|name| json!({"name": name, "description": format!("{} says it best.", name)}))
        .collect();
    json!({ "names": items })
}
