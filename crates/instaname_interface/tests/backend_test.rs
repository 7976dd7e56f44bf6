//! Tests for the backend trait forwarding impls.

use async_trait::async_trait;
use instaname_error::BackendError;
use instaname_interface::{GenerativeBackend, OutputSchema, StructuredRequest, StructuredResponse};
use serde_json::json;
use std::sync::Arc;

/// Backend that echoes the prompt back inside the payload.
struct EchoBackend;

#[async_trait]
impl GenerativeBackend for EchoBackend {
    async fn generate_structured(
        &self,
        request: &StructuredRequest,
    ) -> Result<StructuredResponse, BackendError> {
        Ok(StructuredResponse::Payload(json!({ "echo": request.prompt() })))
    }

    fn provider_name(&self) -> &'static str {
        "echo"
    }

    fn model_name(&self) -> &str {
        "echo-v1"
    }
}

#[tokio::test]
async fn test_arc_and_box_forward_calls() -> Result<(), BackendError> {
    let request = StructuredRequest::new("hello", OutputSchema::object());

    let shared: Arc<dyn GenerativeBackend> = Arc::new(EchoBackend);
    let boxed: Box<dyn GenerativeBackend> = Box::new(EchoBackend);

    let expected = StructuredResponse::Payload(json!({ "echo": "hello" }));
    assert_eq!(shared.generate_structured(&request).await?, expected);
    assert_eq!(boxed.generate_structured(&request).await?, expected);
    assert_eq!(shared.provider_name(), "echo");
    assert_eq!(boxed.model_name(), "echo-v1");
    Ok(())
}
