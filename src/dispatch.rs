//! Decoding a payload of unknown kind
//!
//! Every envelope carries a fixed `object` tag, so a consumer can pick the
//! target type by looking at that one field. Error envelopes carry no tag and
//! are recognised by their top-level `error` key.

use crate::codec::decode_value;
use crate::error::{SchemaError, SchemaResult};
use crate::logging::log_debug;
use crate::types::{ApiError, ChatChunk, ChatResponse, Model, ModelList, ObjectKind};
use serde_json::Value;

/// Any top-level payload of the modeled API surface.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiPayload {
    Completion(ChatResponse),
    Chunk(ChatChunk),
    Model(Model),
    ModelList(ModelList),
    Error(ApiError),
}

impl ApiPayload {
    /// Parse `json` and decode it into the variant named by its discriminant.
    pub fn from_json(json: &str) -> SchemaResult<Self> {
        let value: Value =
            serde_json::from_str(json).map_err(|source| SchemaError::decode("ApiPayload", source))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> SchemaResult<Self> {
        let untagged = matches!(value.get("object"), None | Some(Value::Null));
        if untagged && value.get("error").is_some() {
            log_debug!("Dispatching error envelope");
            return Ok(Self::Error(decode_value(value)?));
        }

        let kind = ObjectKind::detect_value(&value)?;
        log_debug!(object = kind.as_str(), "Dispatching payload");
        Ok(match kind {
            ObjectKind::ChatCompletion => Self::Completion(decode_value(value)?),
            ObjectKind::ChatCompletionChunk => Self::Chunk(decode_value(value)?),
            ObjectKind::Model => Self::Model(decode_value(value)?),
            ObjectKind::List => Self::ModelList(decode_value(value)?),
        })
    }

    /// The discriminant of this payload, `None` for error envelopes.
    pub fn kind(&self) -> Option<ObjectKind> {
        match self {
            Self::Completion(_) => Some(ObjectKind::ChatCompletion),
            Self::Chunk(_) => Some(ObjectKind::ChatCompletionChunk),
            Self::Model(_) => Some(ObjectKind::Model),
            Self::ModelList(_) => Some(ObjectKind::List),
            Self::Error(_) => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}
