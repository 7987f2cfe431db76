//! Fixed `object` discriminants carried by every top-level envelope
//!
//! Each tag is a single-variant enum: it serializes to its literal and refuses
//! to deserialize from anything else, so a chunk can never be decoded as a
//! completed response or vice versa.

use crate::error::{SchemaError, SchemaResult};
use crate::logging::log_debug;
use serde::{Deserialize, Serialize};

/// `"chat.completion"`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChatCompletionObject {
    #[default]
    #[serde(rename = "chat.completion")]
    ChatCompletion,
}

/// `"chat.completion.chunk"`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChatCompletionChunkObject {
    #[default]
    #[serde(rename = "chat.completion.chunk")]
    ChatCompletionChunk,
}

/// `"model"`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelObject {
    #[default]
    #[serde(rename = "model")]
    Model,
}

/// `"list"`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListObject {
    #[default]
    #[serde(rename = "list")]
    List,
}

/// Every discriminant this crate understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    #[serde(rename = "chat.completion")]
    ChatCompletion,
    #[serde(rename = "chat.completion.chunk")]
    ChatCompletionChunk,
    #[serde(rename = "model")]
    Model,
    #[serde(rename = "list")]
    List,
}

impl ObjectKind {
    /// The wire literal for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ChatCompletion => "chat.completion",
            Self::ChatCompletionChunk => "chat.completion.chunk",
            Self::Model => "model",
            Self::List => "list",
        }
    }

    /// Map a wire literal to its kind.
    pub fn from_literal(literal: &str) -> SchemaResult<Self> {
        match literal {
            "chat.completion" => Ok(Self::ChatCompletion),
            "chat.completion.chunk" => Ok(Self::ChatCompletionChunk),
            "model" => Ok(Self::Model),
            "list" => Ok(Self::List),
            other => Err(SchemaError::unknown_object(other)),
        }
    }

    /// Determine the kind of a JSON document from its `object` field alone.
    pub fn detect(json: &str) -> SchemaResult<Self> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|source| SchemaError::decode("ObjectKind", source))?;
        let kind = Self::detect_value(&value)?;
        log_debug!(object = kind.as_str(), "Detected payload kind");
        Ok(kind)
    }

    /// Same as [`ObjectKind::detect`] for an already parsed document.
    ///
    /// The document must be a JSON object. An absent or `null` discriminant is
    /// [`SchemaError::MissingObject`]; any other non-string discriminant is a
    /// decode error.
    pub fn detect_value(value: &serde_json::Value) -> SchemaResult<Self> {
        let Some(fields) = value.as_object() else {
            return Err(SchemaError::decode(
                "ObjectKind",
                serde::de::Error::custom(format!(
                    "expected a JSON object, found {}",
                    json_type_name(value)
                )),
            ));
        };

        match fields.get("object") {
            Some(serde_json::Value::String(literal)) => Self::from_literal(literal),
            None | Some(serde_json::Value::Null) => Err(SchemaError::missing_object()),
            Some(other) => Err(SchemaError::decode(
                "ObjectKind",
                serde::de::Error::custom(format!(
                    "object discriminant must be a string, found {}",
                    json_type_name(other)
                )),
            )),
        }
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
