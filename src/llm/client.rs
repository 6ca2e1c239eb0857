//! Ollama chat client
//!
//! Non-streaming POST /api/chat. Configuration is passed explicitly at
//! construction; there are no ambient globals or environment lookups.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::{DocChatError, Result};
use crate::llm::types::ChatMessage;

/// Default Ollama API endpoint
pub const DEFAULT_OLLAMA_URL: &str = "http://127.0.0.1:11434";

/// Default model
pub const DEFAULT_MODEL: &str = "llama3.1:8b";

/// Request timeout; completions over big contexts can be slow on CPU
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    pub base_url: String,
    pub model: String,
    pub temperature: f64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_OLLAMA_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
        }
    }
}

/// Ollama chat client
#[derive(Debug, Clone)]
pub struct OllamaChatClient {
    client: reqwest::Client,
    config: LlmConfig,
}

impl OllamaChatClient {
    /// Create a new client from explicit configuration
    pub fn new(config: LlmConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { client, config })
    }

    /// Send the full message history and return the assistant's reply.
    pub async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        let url = format!("{}/api/chat", self.config.base_url);

        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: messages.to_vec(),
            stream: false,
            options: ChatOptions {
                temperature: self.config.temperature,
            },
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| DocChatError::Api(format!("Failed to reach Ollama: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(DocChatError::Api(format!("HTTP {}: {}", status, body)));
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| DocChatError::Api(format!("Failed to parse response: {}", e)))?;

        Ok(chat.message.content)
    }

    /// Check if the Ollama server is reachable
    pub async fn health_check(&self) -> bool {
        let url = format!("{}/api/version", self.config.base_url);
        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    /// Get current model name
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Get client configuration
    pub fn config(&self) -> &LlmConfig {
        &self.config
    }
}

/// Ollama chat request
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    stream: bool,
    options: ChatOptions,
}

#[derive(Debug, Serialize)]
struct ChatOptions {
    temperature: f64,
}

/// Ollama chat response
#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = OllamaChatClient::new(LlmConfig::default()).unwrap();
        assert_eq!(client.model(), DEFAULT_MODEL);
        assert_eq!(client.config().base_url, DEFAULT_OLLAMA_URL);
    }

    #[test]
    fn test_client_custom_config() {
        let client = OllamaChatClient::new(LlmConfig {
            base_url: "http://localhost:8080".to_string(),
            model: "llama2:7b".to_string(),
            temperature: 0.0,
        })
        .unwrap();
        assert_eq!(client.model(), "llama2:7b");
        assert_eq!(client.config().temperature, 0.0);
    }

    #[test]
    fn test_request_serialization() {
        let request = ChatRequest {
            model: "m".to_string(),
            messages: vec![ChatMessage::user("hi")],
            stream: false,
            options: ChatOptions { temperature: 0.7 },
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"stream\":false"));
        assert!(json.contains("\"role\":\"user\""));
        assert!(json.contains("\"temperature\":0.7"));
    }

    #[tokio::test]
    #[ignore] // Requires Ollama running
    async fn test_health_check_integration() {
        let client = OllamaChatClient::new(LlmConfig::default()).unwrap();
        assert!(client.health_check().await);
    }
}
