//! Streaming chat completion chunks
//!
//! A finite, ordered sequence of chunks sharing one `id` reconstructs a single
//! [`ChatResponse`](super::ChatResponse); see [`crate::stream`].

use super::messages::AssistantRole;
use super::object::ChatCompletionChunkObject;
use super::response::FinishReason;
use serde::{Deserialize, Serialize};

/// Incremental fragment of an assistant message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatChunkDelta {
    /// Only sent on the first chunk of a turn.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<AssistantRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl ChatChunkDelta {
    /// The opening delta of a turn: role set, no content yet.
    pub fn role() -> Self {
        Self {
            role: Some(AssistantRole::Assistant),
            content: None,
        }
    }

    pub fn content(text: impl Into<String>) -> Self {
        Self {
            role: None,
            content: Some(text.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.role.is_none() && self.content.as_deref().map_or(true, str::is_empty)
    }
}

/// Choice in a streaming chunk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatChunkChoice {
    pub index: u32,
    pub delta: ChatChunkDelta,
    pub finish_reason: Option<FinishReason>,
}

impl ChatChunkChoice {
    pub fn new(index: u32, delta: ChatChunkDelta, finish_reason: Option<FinishReason>) -> Self {
        Self {
            index,
            delta,
            finish_reason,
        }
    }
}

/// OpenAI-compatible streaming chunk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatChunk {
    pub id: String,
    pub object: ChatCompletionChunkObject,
    pub created: i64,
    pub model: String,
    pub choices: Vec<ChatChunkChoice>,
}

impl ChatChunk {
    pub fn new(
        id: impl Into<String>,
        created: i64,
        model: impl Into<String>,
        choices: Vec<ChatChunkChoice>,
    ) -> Self {
        Self {
            id: id.into(),
            object: ChatCompletionChunkObject::ChatCompletionChunk,
            created,
            model: model.into(),
            choices,
        }
    }

    /// A single-choice chunk at index 0 carrying `text`.
    pub fn content(
        id: impl Into<String>,
        created: i64,
        model: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self::new(
            id,
            created,
            model,
            vec![ChatChunkChoice::new(0, ChatChunkDelta::content(text), None)],
        )
    }

    /// A single-choice chunk at index 0 that closes the turn.
    pub fn finished(
        id: impl Into<String>,
        created: i64,
        model: impl Into<String>,
        reason: FinishReason,
    ) -> Self {
        Self::new(
            id,
            created,
            model,
            vec![ChatChunkChoice::new(0, ChatChunkDelta::default(), Some(reason))],
        )
    }

    /// Whether any choice in this chunk carries a finish reason.
    pub fn is_terminal(&self) -> bool {
        self.choices.iter().any(|c| c.finish_reason.is_some())
    }
}
