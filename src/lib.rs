//! # openai-chat-schema
//!
//! Typed wire contract for an OpenAI-compatible Chat Completions and Models API.
//!
//! ## Key Features
//!
//! - **Exact wire shapes**: requests, responses, streaming chunks, model listings and error envelopes
//! - **Closed enumerations**: unknown `role` / `finish_reason` values fail to decode instead of being coerced
//! - **Polymorphic content**: plain strings and content-part arrays both round-trip, unknown part fields included
//! - **Discriminant dispatch**: decode a payload of unknown kind from its `object` tag
//! - **Stream reassembly**: fold ordered chunks back into a completed response
//!
//! ## Example
//!
//! ```rust
//! use openai_chat_schema::{codec, ChatMessage, ChatRequest, Validate};
//!
//! # fn example() -> openai_chat_schema::SchemaResult<()> {
//! let request = ChatRequest::new("gpt-4o", vec![ChatMessage::user("Hi")]).with_temperature(0.2);
//! request.validate_default()?;
//!
//! let json = codec::encode(&request)?;
//! let back: ChatRequest = codec::decode(&json)?;
//! assert_eq!(back, request);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![allow(clippy::missing_errors_doc)]

// Logging utilities (re-exports tracing with log_* naming) - internal only
pub(crate) mod logging;

pub mod codec;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod stream;
pub mod types;
pub mod validation;

#[cfg(test)]
pub mod tests;

pub use config::ValidationConfig;
pub use dispatch::ApiPayload;
pub use error::{SchemaError, SchemaResult};
pub use stream::{collect_stream, ChunkAccumulator};
pub use validation::Validate;

// Re-export wire types
pub use types::{
    ApiError,
    ApiErrorBody,
    AssistantMessage,
    AssistantRole,
    ChatChunk,
    ChatChunkChoice,
    ChatChunkDelta,
    ChatCompletionChunkObject,
    ChatCompletionObject,
    ChatMessage,
    ChatRequest,
    ChatResponse,
    ChatResponseChoice,
    ContentPart,
    FinishReason,
    ListObject,
    MessageContent,
    Model,
    ModelList,
    ModelObject,
    ObjectKind,
    Role,
    Usage,
};
