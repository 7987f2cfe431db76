//! Test fixtures for openai-chat-schema integration tests
//!
//! JSON payloads shaped like real OpenAI-compatible traffic, shared across
//! the integration test files.
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use openai_chat_schema::{ChatChunk, ChatChunkChoice, ChatChunkDelta, FinishReason};
use serde_json::{json, Value};

pub const STREAM_ID: &str = "chatcmpl-9x8y7z";
pub const STREAM_CREATED: i64 = 1_718_000_000;
pub const STREAM_MODEL: &str = "gpt-4o-2024-05-13";

/// A streaming multimodal request with every optional parameter set.
pub fn full_request_fixture() -> Value {
    json!({
        "model": "gpt-4o",
        "messages": [
            {"role": "system", "content": "You are a helpful assistant."},
            {"role": "user", "content": [
                {"type": "text", "text": "What is in this image?"},
                {"type": "image_url", "image_url": {"url": "https://example.com/a.png", "detail": "high"}}
            ]},
            {"role": "assistant", "content": "A cat."},
            {"role": "user", "content": "Thanks"}
        ],
        "stream": true,
        "temperature": 0.7,
        "max_tokens": 256,
        "top_p": 0.95,
        "frequency_penalty": 0.1,
        "presence_penalty": 0.2,
        "user": "session-1234"
    })
}

/// A completed non-streaming response.
pub fn completion_fixture() -> Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1_677_652_288,
        "model": "gpt-4o-mini",
        "choices": [
            {"index": 0, "message": {"role": "assistant", "content": "Hello there, how may I assist you today?"}, "finish_reason": "stop"},
            {"index": 1, "message": {"role": "assistant", "content": "Hi!"}, "finish_reason": "length"}
        ],
        "usage": {"prompt_tokens": 9, "completion_tokens": 12, "total_tokens": 21}
    })
}

/// A model listing with one entry lacking `created`.
pub fn model_list_fixture() -> Value {
    json!({
        "object": "list",
        "data": [
            {"id": "gpt-4o", "object": "model", "created": 1_715_367_049, "owned_by": "system"},
            {"id": "clawdbot", "object": "model", "owned_by": "clawdbot"}
        ]
    })
}

/// Wire form of one streaming chunk for choice 0.
pub fn chunk_fixture(delta: Value, finish_reason: Value) -> Value {
    json!({
        "id": STREAM_ID,
        "object": "chat.completion.chunk",
        "created": STREAM_CREATED,
        "model": STREAM_MODEL,
        "choices": [{"index": 0, "delta": delta, "finish_reason": finish_reason}]
    })
}

/// "Hel", "lo", "!" then a terminal stop chunk, as wire JSON.
pub fn hello_stream_fixture() -> Vec<Value> {
    vec![
        chunk_fixture(json!({"role": "assistant", "content": ""}), Value::Null),
        chunk_fixture(json!({"content": "Hel"}), Value::Null),
        chunk_fixture(json!({"content": "lo"}), Value::Null),
        chunk_fixture(json!({"content": "!"}), Value::Null),
        chunk_fixture(json!({}), json!("stop")),
    ]
}

/// Build a typed chunk for choice 0.
pub fn typed_chunk(text: Option<&str>, finish_reason: Option<FinishReason>) -> ChatChunk {
    let delta = match text {
        Some(text) => ChatChunkDelta::content(text),
        None => ChatChunkDelta::default(),
    };
    ChatChunk::new(
        STREAM_ID,
        STREAM_CREATED,
        STREAM_MODEL,
        vec![ChatChunkChoice::new(0, delta, finish_reason)],
    )
}
