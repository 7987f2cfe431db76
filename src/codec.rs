//! JSON encode/decode helpers
//!
//! Thin wrappers over serde_json that map failures to [`SchemaError`] with the
//! target type named, so callers get one error type for the whole contract.

use crate::config::ValidationConfig;
use crate::error::{SchemaError, SchemaResult};
use crate::validation::Validate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Last path segment of a type name, e.g. `ChatRequest`.
fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let head = full.split('<').next().unwrap_or(full);
    head.rsplit("::").next().unwrap_or(head)
}

/// Decode a JSON document into `T`.
pub fn decode<T: DeserializeOwned>(json: &str) -> SchemaResult<T> {
    serde_json::from_str(json).map_err(|source| SchemaError::decode(short_type_name::<T>(), source))
}

/// Decode an already parsed JSON value into `T`.
pub fn decode_value<T: DeserializeOwned>(value: Value) -> SchemaResult<T> {
    serde_json::from_value(value)
        .map_err(|source| SchemaError::decode(short_type_name::<T>(), source))
}

/// Decode `T`, then check its invariants against `config`.
pub fn decode_validated<T>(json: &str, config: &ValidationConfig) -> SchemaResult<T>
where
    T: DeserializeOwned + Validate,
{
    let value: T = decode(json)?;
    value.validate(config)?;
    Ok(value)
}

/// Encode `value` as compact JSON.
pub fn encode<T: Serialize>(value: &T) -> SchemaResult<String> {
    serde_json::to_string(value).map_err(|source| SchemaError::encode(short_type_name::<T>(), source))
}

/// Encode `value` as a JSON value tree.
pub fn encode_value<T: Serialize>(value: &T) -> SchemaResult<Value> {
    serde_json::to_value(value)
        .map_err(|source| SchemaError::encode(short_type_name::<T>(), source))
}
