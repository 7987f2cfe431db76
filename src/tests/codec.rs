// Unit Tests for Codec Helpers
//
// UNIT UNDER TEST: codec::{decode, decode_value, decode_validated, encode, encode_value}
//
// TEST COVERAGE:
//   - Decode failures name the target type
//   - decode_validated applies invariant checks after decoding
//   - Encoding produces the wire shape

use crate::codec;
use crate::config::ValidationConfig;
use crate::error::SchemaError;
use crate::types::{ChatResponse, Model, ModelList};
use serde_json::json;

#[test]
fn test_decode_error_names_target_type() {
    let err = codec::decode::<Model>(r#"{"id": "x"}"#).unwrap_err();

    match err {
        SchemaError::Decode { target, .. } => assert_eq!(target, "Model"),
        other => panic!("Expected decode error, got {other:?}"),
    }
}

#[test]
fn test_decode_value_round_trip() {
    let raw = json!({"object": "list", "data": [{"id": "a", "object": "model", "owned_by": "o"}]});

    let list: ModelList = codec::decode_value(raw.clone()).unwrap();

    assert_eq!(codec::encode_value(&list).unwrap(), raw);
}

#[test]
fn test_decode_validated_flags_bad_usage() {
    let json = json!({
        "id": "chatcmpl-1", "object": "chat.completion", "created": 1, "model": "m",
        "choices": [],
        "usage": {"prompt_tokens": 1, "completion_tokens": 1, "total_tokens": 3}
    })
    .to_string();

    let strict = codec::decode_validated::<ChatResponse>(&json, &ValidationConfig::default());
    let lenient = codec::decode_validated::<ChatResponse>(&json, &ValidationConfig::lenient());

    assert!(matches!(strict, Err(SchemaError::InvariantViolation { .. })));
    assert!(lenient.is_ok());
}

#[test]
fn test_encode_is_compact_json() {
    let encoded = codec::encode(&Model::new("a", "o")).unwrap();

    assert_eq!(encoded, r#"{"id":"a","object":"model","owned_by":"o"}"#);
}
