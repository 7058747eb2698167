//! Raw HTTP client for an OpenAI-compatible chat-completions API.
//!
//! No generation logic, just the wire types and the call via reqwest.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::AiError;
use crate::config::DEFAULT_BASE_URL;

/// Request body for the chat-completions endpoint.
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// A single message in the conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_owned(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_owned(),
            content: content.into(),
        }
    }
}

/// Output-format constraint for the request.
#[derive(Debug, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub format_type: String,
}

impl ResponseFormat {
    /// Constrain the reply to a single JSON object.
    pub fn json_object() -> Self {
        Self {
            format_type: "json_object".to_owned(),
        }
    }
}

/// Response from the chat-completions endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

/// One completion choice in the response.
#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatReply,
}

/// The assistant message inside a choice.
#[derive(Debug, Deserialize)]
pub struct ChatReply {
    pub role: String,
    pub content: Option<String>,
}

impl ChatResponse {
    /// Extract the text content of the first choice, if any.
    pub fn content(&self) -> Option<&str> {
        self.choices.first().and_then(|c| c.message.content.as_deref())
    }
}

/// Raw HTTP client for an OpenAI-compatible chat-completions API.
#[derive(Debug)]
pub struct ChatClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl ChatClient {
    /// Create a client against the default hosted endpoint.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_owned())
    }

    /// Create a client with a custom base URL (compatible providers,
    /// mock servers in tests).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            http: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Send one chat-completions request. No retry, no timeout, no caching;
    /// each call is independent and stateless.
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, AiError> {
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();

        if status >= 400 {
            let body = response.text().await.unwrap_or_else(|_| "(no body)".into());
            return Err(AiError::Api {
                status,
                message: body,
            });
        }

        let resp: ChatResponse = response
            .json()
            .await
            .map_err(|e| AiError::Parse(format!("failed to decode response body: {e}")))?;

        Ok(resp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let client = ChatClient::new("test-key".to_owned());
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn client_custom_base_url() {
        let client =
            ChatClient::with_base_url("test-key".to_owned(), "http://localhost:8080".to_owned());
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn request_builds_correctly() {
        let req = ChatRequest {
            model: "gpt-4o".to_owned(),
            messages: vec![ChatMessage::system("Be brief."), ChatMessage::user("Hello")],
            response_format: Some(ResponseFormat::json_object()),
            temperature: None,
        };

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["model"], "gpt-4o");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "Hello");
        assert_eq!(json["response_format"]["type"], "json_object");
        // temperature is None → should be skipped
        assert!(json.get("temperature").is_none());
    }

    #[test]
    fn response_content_returns_first_choice() {
        let json = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "{\"ok\": true}"}}
            ]
        }"#;
        let resp: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.content(), Some("{\"ok\": true}"));
    }

    #[test]
    fn response_content_handles_missing_content() {
        let json = r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#;
        let resp: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.content(), None);

        let json = r#"{"choices": []}"#;
        let resp: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.content(), None);
    }
}
