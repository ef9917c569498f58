use async_trait::async_trait;

use crate::error::Result;

/// Trait for chat-completion language models that return structured JSON.
///
/// Implementations handle API communication, request formatting, and
/// response parsing for a specific provider. The reply content is required
/// to be syntactically valid JSON; callers validate the shape per call site.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// Send a single-turn prompt and return the reply parsed as a JSON value.
    ///
    /// Fails with `Error::Upstream` when the HTTP call does not succeed and
    /// with `Error::MalformedResponse` when the completion content is absent
    /// or not valid JSON. No retries: a failure propagates immediately.
    async fn complete(&self, prompt: &str) -> Result<serde_json::Value>;

    /// Return the model name/identifier.
    fn model_name(&self) -> &str;
}
