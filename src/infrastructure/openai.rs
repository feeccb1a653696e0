//! Chat completion client for the OpenAI API
//!
//! Sends a single user message and returns the first choice's content.
//! Works against any server exposing the same `/chat/completions` shape.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use crate::error::GenerationError;

/// Chat completion API client
pub struct ChatClient {
    client: Client,
    api_base: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Clone, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Clone, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatClient {
    pub fn new(
        api_base: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GenerationError> {
        let api_base = api_base.into();
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| GenerationError::Request {
                url: api_base.clone(),
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_base)
    }

    /// Send `prompt` as a user message and return the reply text
    pub async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        let url = self.completions_url();
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        info!("Requesting completion from {} ({})", url, self.model);
        debug!("Prompt: {}", prompt);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerationError::Request {
                url: url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| GenerationError::Request {
            url: url.clone(),
            message: e.to_string(),
        })?;

        if !status.is_success() {
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let content = parse_completion(&body)?;
        debug!("Received {} characters", content.len());
        Ok(content)
    }
}

/// Extract `choices[0].message.content` from a completion response body
pub fn parse_completion(body: &str) -> Result<String, GenerationError> {
    let response: ChatResponse =
        serde_json::from_str(body).map_err(|e| GenerationError::Decode {
            message: e.to_string(),
        })?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(GenerationError::EmptyResponse)
}
