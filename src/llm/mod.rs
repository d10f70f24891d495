//! Chat-completion abstraction used by the idea agents.
//!
//! Agents depend on [`ChatModel`] rather than a concrete client, so the
//! pipeline can run against any OpenAI-compatible backend and tests can mock
//! the model.

use serde::Serialize;

use crate::error::AppResult;

pub mod openai;

pub use openai::OpenAiClient;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// One completion call
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Ask the model for a JSON object instead of free text
    pub json_response: bool,
}

impl ChatRequest {
    /// System instruction followed by one user message
    pub fn new(system: &str, user: String) -> Self {
        Self {
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            temperature: 0.7,
            max_tokens: 500,
            json_response: false,
        }
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn json(mut self) -> Self {
        self.json_response = true;
        self
    }

    /// Content of the system message, if any
    pub fn system_prompt(&self) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == Role::System)
            .map(|m| m.content.as_str())
    }
}

/// A chat-completion backend
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ChatModel: Send + Sync {
    /// Returns the text content of the first completion choice
    async fn complete(&self, request: ChatRequest) -> AppResult<String>;

    /// Backend name for logging
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_builder() {
        let request = ChatRequest::new("You are terse.", "Say hi".to_string())
            .temperature(0.3)
            .max_tokens(150)
            .json();

        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.system_prompt(), Some("You are terse."));
        assert_eq!(request.messages[1].role, Role::User);
        assert_eq!(request.max_tokens, 150);
        assert!(request.json_response);
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_value(ChatMessage::system("x")).unwrap();
        assert_eq!(json["role"], "system");
        assert_eq!(json["content"], "x");
    }
}
