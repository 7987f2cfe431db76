//! Reassembling streamed chunks into a completed response
//!
//! [`ChunkAccumulator`] folds an ordered chunk sequence into one
//! [`ChatResponse`]. Content fragments are concatenated per choice index in
//! arrival order. A choice is closed by the first chunk that carries a
//! `finish_reason`; nothing may be appended to it afterwards, and a fresh
//! `role` delta on a choice that already produced content is treated as the
//! start of a new turn and rejected.
//!
//! # Example
//!
//! ```rust
//! use openai_chat_schema::{ChatChunk, ChunkAccumulator, FinishReason};
//!
//! let mut acc = ChunkAccumulator::new();
//! for text in ["Hel", "lo", "!"] {
//!     acc.push(ChatChunk::content("chatcmpl-1", 1_700_000_000, "gpt-4o", text))?;
//! }
//! acc.push(ChatChunk::finished("chatcmpl-1", 1_700_000_000, "gpt-4o", FinishReason::Stop))?;
//!
//! let response = acc.finish()?;
//! assert_eq!(response.first_content(), Some("Hello!"));
//! # Ok::<(), openai_chat_schema::SchemaError>(())
//! ```

use crate::error::{SchemaError, SchemaResult};
use crate::logging::{log_debug, log_trace};
use crate::types::{
    ChatChunk, ChatCompletionObject, ChatResponse, ChatResponseChoice, FinishReason, Usage,
};
use futures_util::{pin_mut, Stream, StreamExt};
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Clone)]
struct StreamIdentity {
    id: String,
    created: i64,
    model: String,
}

#[derive(Debug, Clone, Default)]
struct ChoiceState {
    content: String,
    finish_reason: Option<FinishReason>,
}

/// Stateful fold of [`ChatChunk`]s into a [`ChatResponse`].
#[derive(Debug, Clone, Default)]
pub struct ChunkAccumulator {
    identity: Option<StreamIdentity>,
    choices: BTreeMap<u32, ChoiceState>,
    chunk_count: usize,
}

impl ChunkAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of chunks accepted so far.
    pub fn chunk_count(&self) -> usize {
        self.chunk_count
    }

    /// Text accumulated so far for choice `index`.
    pub fn content(&self, index: u32) -> Option<&str> {
        self.choices.get(&index).map(|s| s.content.as_str())
    }

    /// True once at least one choice was seen and every seen choice finished.
    pub fn is_complete(&self) -> bool {
        !self.choices.is_empty() && self.choices.values().all(|s| s.finish_reason.is_some())
    }

    /// Accept the next chunk of the stream.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::StreamViolation`] if the chunk belongs to a
    /// different completion, appends to a finished choice, or starts a new
    /// turn on a choice that has not finished. The accumulator is left
    /// unchanged on error.
    pub fn push(&mut self, chunk: ChatChunk) -> SchemaResult<()> {
        self.check(&chunk)?;

        if self.identity.is_none() {
            log_debug!(id = %chunk.id, model = %chunk.model, "Starting chunk stream");
            self.identity = Some(StreamIdentity {
                id: chunk.id.clone(),
                created: chunk.created,
                model: chunk.model.clone(),
            });
        }

        for choice in chunk.choices {
            let state = self.choices.entry(choice.index).or_default();
            if let Some(text) = choice.delta.content {
                state.content.push_str(&text);
            }
            if let Some(reason) = choice.finish_reason {
                log_trace!(index = choice.index, finish_reason = %reason, "Choice finished");
                state.finish_reason = Some(reason);
            }
        }
        self.chunk_count += 1;
        Ok(())
    }

    fn check(&self, chunk: &ChatChunk) -> SchemaResult<()> {
        if let Some(identity) = &self.identity {
            if identity.id != chunk.id {
                return Err(SchemaError::stream_violation(format!(
                    "chunk id '{}' does not match stream id '{}'",
                    chunk.id, identity.id
                )));
            }
            if identity.model != chunk.model {
                return Err(SchemaError::stream_violation(format!(
                    "chunk model '{}' does not match stream model '{}'",
                    chunk.model, identity.model
                )));
            }
        }

        let mut in_chunk = HashSet::new();
        for choice in &chunk.choices {
            if !in_chunk.insert(choice.index) {
                return Err(SchemaError::stream_violation(format!(
                    "choice index {} appears twice in one chunk",
                    choice.index
                )));
            }
            let Some(state) = self.choices.get(&choice.index) else {
                continue;
            };
            if state.finish_reason.is_some() {
                let appends = choice.delta.content.as_deref().is_some_and(|c| !c.is_empty());
                if appends || choice.finish_reason.is_some() || choice.delta.role.is_some() {
                    return Err(SchemaError::stream_violation(format!(
                        "choice {} received data after it finished",
                        choice.index
                    )));
                }
            } else if choice.delta.role.is_some() && !state.content.is_empty() {
                return Err(SchemaError::stream_violation(format!(
                    "choice {} began a new turn before the previous one finished",
                    choice.index
                )));
            }
        }
        Ok(())
    }

    /// Build the response with zeroed usage; chunks carry no token counts.
    pub fn finish(self) -> SchemaResult<ChatResponse> {
        self.finish_with_usage(Usage::default())
    }

    /// Build the response with usage reported out of band.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::IncompleteStream`] if no chunk arrived, no
    /// choice was ever seen, or some choice never received a finish reason.
    pub fn finish_with_usage(self, usage: Usage) -> SchemaResult<ChatResponse> {
        let Some(identity) = self.identity else {
            return Err(SchemaError::incomplete_stream("no chunks received"));
        };
        if self.choices.is_empty() {
            return Err(SchemaError::incomplete_stream("stream carried no choices"));
        }
        if let Some((index, _)) = self
            .choices
            .iter()
            .find(|(_, s)| s.finish_reason.is_none())
        {
            return Err(SchemaError::incomplete_stream(format!(
                "choice {index} has no finish_reason"
            )));
        }

        log_debug!(
            id = %identity.id,
            chunks = self.chunk_count,
            choices = self.choices.len(),
            "Chunk stream reassembled"
        );

        let choices = self
            .choices
            .into_iter()
            .map(|(index, state)| ChatResponseChoice::new(index, state.content, state.finish_reason))
            .collect();

        Ok(ChatResponse {
            id: identity.id,
            object: ChatCompletionObject::ChatCompletion,
            created: identity.created,
            model: identity.model,
            choices,
            usage,
        })
    }
}

/// Drain `stream` through a [`ChunkAccumulator`].
///
/// Stops at the first rejected chunk.
pub async fn collect_stream<S>(stream: S) -> SchemaResult<ChatResponse>
where
    S: Stream<Item = ChatChunk>,
{
    pin_mut!(stream);
    let mut accumulator = ChunkAccumulator::new();
    while let Some(chunk) = stream.next().await {
        accumulator.push(chunk)?;
    }
    accumulator.finish()
}
