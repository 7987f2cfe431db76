// Unit Tests for Invariant Validation
//
// UNIT UNDER TEST: Validate implementations
//
// BUSINESS RESPONSIBILITY:
//   - Flags responses whose usage total is not prompt + completion
//   - Flags model entries with empty id or owner
//   - Flags malformed requests without range-checking sampling values
//
// TEST COVERAGE:
//   - Usage invariant under default and lenient configs
//   - Request rules: model, messages, parts, non-finite floats
//   - Response and chunk choice index uniqueness
//   - Model list and error envelope rules

use crate::config::ValidationConfig;
use crate::error::SchemaError;
use crate::types::{
    ApiError, ChatChunk, ChatChunkChoice, ChatChunkDelta, ChatMessage, ChatRequest, ChatResponse,
    ChatResponseChoice, ContentPart, FinishReason, Model, ModelList, Role, Usage,
};
use crate::validation::Validate;
use serde_json::json;

fn response_with_usage(usage: Usage) -> ChatResponse {
    ChatResponse::new(
        "gpt-4o",
        vec![ChatResponseChoice::new(0, "hi", Some(FinishReason::Stop))],
        usage,
    )
}

fn assert_violation(result: crate::error::SchemaResult<()>, entity: &str) {
    match result {
        Err(SchemaError::InvariantViolation { entity: found, .. }) => {
            assert_eq!(found, entity, "Violation reported for wrong entity")
        }
        other => panic!("Expected invariant violation for {entity}, got {other:?}"),
    }
}

// ============================================================================
// Usage Tests
// ============================================================================

#[test]
fn test_consistent_usage_passes() {
    assert!(response_with_usage(Usage::new(5, 2)).validate_default().is_ok());
}

#[test]
fn test_inconsistent_usage_is_flagged() {
    // Business rule: a fixture violating total = prompt + completion is invalid input

    let usage = Usage {
        prompt_tokens: 5,
        completion_tokens: 2,
        total_tokens: 8,
    };

    assert_violation(response_with_usage(usage).validate_default(), "usage");
}

#[test]
fn test_lenient_config_skips_usage_check() {
    let usage = Usage {
        prompt_tokens: 5,
        completion_tokens: 2,
        total_tokens: 8,
    };

    assert!(response_with_usage(usage)
        .validate(&ValidationConfig::lenient())
        .is_ok());
}

// ============================================================================
// Request Tests
// ============================================================================

#[test]
fn test_valid_request_passes() {
    let request = ChatRequest::new(
        "gpt-4o",
        vec![
            ChatMessage::system("be brief"),
            ChatMessage::with_parts(Role::User, vec![ContentPart::text("Hi")]),
        ],
    )
    .with_temperature(5.0)
    .with_max_tokens(u32::MAX);

    assert!(request.validate_default().is_ok());
}

#[test]
fn test_empty_model_is_flagged() {
    let request = ChatRequest::new("  ", vec![ChatMessage::user("Hi")]);

    assert_violation(request.validate_default(), "request");
}

#[test]
fn test_empty_messages_flagged_unless_allowed() {
    let request = ChatRequest::new("gpt-4o", vec![]);

    assert_violation(request.validate_default(), "request");
    assert!(request.validate(&ValidationConfig::lenient()).is_ok());
}

#[test]
fn test_non_finite_temperature_is_flagged() {
    let request = ChatRequest::new("gpt-4o", vec![ChatMessage::user("Hi")]).with_temperature(f64::NAN);

    assert_violation(request.validate_default(), "request");
}

#[test]
fn test_text_part_without_text_is_flagged() {
    let request = ChatRequest::new(
        "gpt-4o",
        vec![ChatMessage::with_parts(Role::User, vec![ContentPart::new("text")])],
    );

    assert_violation(request.validate_default(), "content part");
}

#[test]
fn test_text_part_with_null_text_is_flagged() {
    let part: ContentPart = serde_json::from_value(json!({"type": "text", "text": null})).unwrap();
    let request = ChatRequest::new("gpt-4o", vec![ChatMessage::with_parts(Role::User, vec![part])]);

    assert_violation(request.validate_default(), "content part");
}

#[test]
fn test_part_with_empty_type_is_flagged() {
    let request = ChatRequest::new(
        "gpt-4o",
        vec![ChatMessage::with_parts(Role::User, vec![ContentPart::new("")])],
    );

    assert_violation(request.validate_default(), "content part");
}

#[test]
fn test_image_part_needs_no_text() {
    let part = ContentPart::new("image_url").with_field("image_url", json!({"url": "u"}));
    let request = ChatRequest::new("gpt-4o", vec![ChatMessage::with_parts(Role::User, vec![part])]);

    assert!(request.validate_default().is_ok());
}

#[test]
fn test_content_part_limit() {
    let message = ChatMessage::with_parts(
        Role::User,
        vec![ContentPart::text("a"), ContentPart::text("b"), ContentPart::text("c")],
    );
    let request = ChatRequest::new("gpt-4o", vec![message]);

    assert_violation(
        request.validate(&ValidationConfig::default().with_max_content_parts(2)),
        "message",
    );
    assert!(request
        .validate(&ValidationConfig::default().with_max_content_parts(3))
        .is_ok());
}

#[test]
fn test_request_validation_rejects_invalid_config() {
    let request = ChatRequest::new("gpt-4o", vec![ChatMessage::user("Hi")]);
    let config = ValidationConfig {
        max_content_parts: Some(0),
        ..ValidationConfig::default()
    };

    assert!(matches!(
        request.validate(&config),
        Err(SchemaError::InvalidConfig { .. })
    ));
}

// ============================================================================
// Response and Chunk Tests
// ============================================================================

#[test]
fn test_duplicate_choice_index_is_flagged() {
    let response = ChatResponse::new(
        "gpt-4o",
        vec![
            ChatResponseChoice::new(0, "a", Some(FinishReason::Stop)),
            ChatResponseChoice::new(0, "b", Some(FinishReason::Stop)),
        ],
        Usage::new(1, 2),
    );

    assert_violation(response.validate_default(), "response");
}

#[test]
fn test_empty_choices_allowed_by_default_but_not_strict() {
    let response = ChatResponse::new("gpt-4o", vec![], Usage::new(1, 0));

    assert!(response.validate_default().is_ok());
    assert_violation(response.validate(&ValidationConfig::strict()), "response");
}

#[test]
fn test_chunk_with_empty_id_is_flagged() {
    let chunk = ChatChunk::content("", 1, "gpt-4o", "x");

    assert_violation(chunk.validate_default(), "chunk");
}

#[test]
fn test_chunk_duplicate_index_is_flagged() {
    let chunk = ChatChunk::new(
        "c",
        1,
        "m",
        vec![
            ChatChunkChoice::new(2, ChatChunkDelta::content("x"), None),
            ChatChunkChoice::new(2, ChatChunkDelta::content("y"), None),
        ],
    );

    assert_violation(chunk.validate_default(), "chunk");
}

// ============================================================================
// Model and Error Envelope Tests
// ============================================================================

#[test]
fn test_model_entries_need_id_and_owner() {
    let good = ModelList::new(vec![Model::new("gpt-4o", "openai")]);
    let no_owner = ModelList::new(vec![Model::new("gpt-4o", "openai"), Model::new("x", "")]);
    let no_id = ModelList::new(vec![Model::new("", "openai")]);

    assert!(good.validate_default().is_ok());
    assert_violation(no_owner.validate_default(), "model");
    assert_violation(no_id.validate_default(), "model");
}

#[test]
fn test_empty_model_list_is_valid() {
    assert!(ModelList::new(vec![]).validate_default().is_ok());
}

#[test]
fn test_error_envelope_needs_message_and_type() {
    assert!(ApiError::new("boom", "server_error", None).validate_default().is_ok());
    assert_violation(
        ApiError::new("", "server_error", None).validate_default(),
        "error",
    );
    assert_violation(ApiError::new("boom", "", None).validate_default(), "error");
}
