//! OpenAI-compatible wire types
//!
//! Request/response structures for the Chat Completions and Models API
//! surface. Field names are dictated by the external API and are never
//! renamed.
//!
//! Split into modules by payload:
//! - `messages` - roles, content parts and chat messages
//! - `request` - chat completion request body
//! - `response` - non-streaming chat completion response
//! - `chunk` - streaming chat completion chunks
//! - `models` - model listing
//! - `error` - error envelope
//! - `object` - fixed `object` discriminant tags

pub mod chunk;
pub mod error;
pub mod messages;
pub mod models;
pub mod object;
pub mod request;
pub mod response;

pub use chunk::{ChatChunk, ChatChunkChoice, ChatChunkDelta};
pub use error::{ApiError, ApiErrorBody};
pub use messages::{AssistantRole, ChatMessage, ContentPart, MessageContent, Role};
pub use models::{Model, ModelList};
pub use object::{
    ChatCompletionChunkObject, ChatCompletionObject, ListObject, ModelObject, ObjectKind,
};
pub use request::ChatRequest;
pub use response::{AssistantMessage, ChatResponse, ChatResponseChoice, FinishReason, Usage};
