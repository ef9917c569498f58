//! Mistral Chat Completions API integration.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use ideaforge_core::completion::CompletionModel;
use ideaforge_core::config::AppConfig;
use ideaforge_core::error::{Error, Result};

// ---------------------------------------------------------------------------
// Mistral Chat Completions API request/response types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct MistralRequest {
    pub model: String,
    pub messages: Vec<MistralMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<MistralResponseFormat>,
}

#[derive(Debug, Serialize)]
pub struct MistralMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct MistralResponseFormat {
    #[serde(rename = "type")]
    pub format_type: String,
}

#[derive(Debug, Deserialize)]
pub struct MistralResponse {
    pub choices: Vec<MistralChoice>,
}

#[derive(Debug, Deserialize)]
pub struct MistralChoice {
    pub message: MistralResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct MistralResponseMessage {
    pub content: Option<String>,
}

// ---------------------------------------------------------------------------
// MistralChatClient
// ---------------------------------------------------------------------------

/// Chat-completion client holding no state across calls beyond its
/// connection pool.
pub struct MistralChatClient {
    api_key: String,
    model_id: String,
    base_url: String,
    timeout: Duration,
    temperature: f64,
    client: reqwest::Client,
}

impl MistralChatClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            api_key: config.mistral_api_key.clone(),
            model_id: config.model.clone(),
            base_url: config.mistral_base_url.clone(),
            timeout: config.upstream_timeout,
            temperature: 0.7,
            client: reqwest::Client::new(),
        }
    }

    pub fn build_request(&self, prompt: &str) -> MistralRequest {
        MistralRequest {
            model: self.model_id.clone(),
            messages: vec![MistralMessage {
                role: "user".into(),
                content: prompt.to_string(),
            }],
            temperature: Some(self.temperature),
            response_format: Some(MistralResponseFormat {
                format_type: "json_object".into(),
            }),
        }
    }
}

/// Extract the completion content from an API response and parse it as JSON.
pub fn parse_completion(response: MistralResponse) -> Result<serde_json::Value> {
    let content = response
        .choices
        .first()
        .and_then(|c| c.message.content.as_deref())
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| Error::MalformedResponse("completion reply has no content".into()))?;

    serde_json::from_str(content)
        .map_err(|e| Error::MalformedResponse(format!("completion content is not valid JSON: {e}")))
}

#[async_trait]
impl CompletionModel for MistralChatClient {
    async fn complete(&self, prompt: &str) -> Result<serde_json::Value> {
        let request_body = self.build_request(prompt);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .timeout(self.timeout)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read response body".into());
            return Err(Error::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let api_response: MistralResponse = response
            .json()
            .await
            .map_err(|e| Error::MalformedResponse(e.to_string()))?;

        parse_completion(api_response)
    }

    fn model_name(&self) -> &str {
        &self.model_id
    }
}
