//! Non-streaming chat completion response

use super::messages::AssistantRole;
use super::object::ChatCompletionObject;
use serde::{Deserialize, Serialize};

/// Why generation stopped. `null` on the wire is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    ContentFilter,
}

impl std::fmt::Display for FinishReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FinishReason::Stop => write!(f, "stop"),
            FinishReason::Length => write!(f, "length"),
            FinishReason::ContentFilter => write!(f, "content_filter"),
        }
    }
}

/// Message in a response choice
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantMessage {
    pub role: AssistantRole,
    pub content: String,
}

impl AssistantMessage {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            role: AssistantRole::Assistant,
            content: content.into(),
        }
    }
}

/// Choice in a chat completion response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponseChoice {
    pub index: u32,
    pub message: AssistantMessage,
    pub finish_reason: Option<FinishReason>,
}

impl ChatResponseChoice {
    pub fn new(
        index: u32,
        content: impl Into<String>,
        finish_reason: Option<FinishReason>,
    ) -> Self {
        Self {
            index,
            message: AssistantMessage::new(content),
            finish_reason,
        }
    }
}

/// Token accounting for a completed response.
///
/// `total_tokens` should equal `prompt_tokens + completion_tokens`; decoding
/// does not enforce it, validation does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl Usage {
    /// Usage with `total_tokens` computed from its parts (saturating).
    pub fn new(prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens.saturating_add(completion_tokens),
        }
    }

    /// Whether the additive invariant holds without overflow.
    pub fn is_consistent(&self) -> bool {
        self.prompt_tokens.checked_add(self.completion_tokens) == Some(self.total_tokens)
    }
}

/// OpenAI-compatible chat completion response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub id: String,
    pub object: ChatCompletionObject,
    /// Seconds since the Unix epoch.
    pub created: i64,
    pub model: String,
    pub choices: Vec<ChatResponseChoice>,
    pub usage: Usage,
}

impl ChatResponse {
    /// Prefix of generated completion ids.
    pub const ID_PREFIX: &'static str = "chatcmpl-";

    /// A response stamped with a fresh id and the current time.
    pub fn new(model: impl Into<String>, choices: Vec<ChatResponseChoice>, usage: Usage) -> Self {
        Self {
            id: Self::generate_id(),
            object: ChatCompletionObject::ChatCompletion,
            created: chrono::Utc::now().timestamp(),
            model: model.into(),
            choices,
            usage,
        }
    }

    /// `chatcmpl-` followed by a random v4 UUID without hyphens.
    pub fn generate_id() -> String {
        format!("{}{}", Self::ID_PREFIX, uuid::Uuid::new_v4().simple())
    }

    /// Content of the first choice, if any.
    pub fn first_content(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }
}
