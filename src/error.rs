//! Error types for schema operations.
//!
//! The wire types themselves never fail; errors come from the collaborators
//! around them: decoding JSON into the types, validating documented
//! invariants, dispatching on the `object` discriminant and folding streaming
//! chunks back into a completed response.
//!
//! # Error Handling Example
//!
//! ```rust
//! use openai_chat_schema::{codec, ChatRequest, SchemaError, error::ErrorCategory};
//!
//! let err = codec::decode::<ChatRequest>(r#"{"model": 42}"#).unwrap_err();
//! assert_eq!(err.category(), ErrorCategory::Client);
//! assert!(matches!(err, SchemaError::Decode { .. }));
//! ```

use crate::logging::{log_error, log_warn};
use thiserror::Error;

// ============================================================================
// Error categorization types
// ============================================================================

/// Who is responsible for an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The input was malformed or violated a documented invariant.
    ///
    /// The producer of the payload can fix this.
    Client,

    /// Something went wrong inside this crate or its caller's usage of it.
    ///
    /// These should be logged and investigated.
    Internal,
}

/// Severity level for logging and alerting decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Action failed and likely indicates a bug.
    Error,

    /// Unexpected but recoverable; usually bad input.
    Warning,
}

// ============================================================================
// Schema error types
// ============================================================================

/// Convenient result type for schema operations.
pub type SchemaResult<T> = std::result::Result<T, SchemaError>;

/// Errors raised while decoding, validating or reassembling API payloads.
///
/// | Variant | Category | Severity |
/// |---------|----------|----------|
/// | `Decode` | Client | Warning |
/// | `Encode` | Internal | Error |
/// | `MissingObject` | Client | Warning |
/// | `UnknownObject` | Client | Warning |
/// | `InvariantViolation` | Client | Warning |
/// | `StreamViolation` | Client | Warning |
/// | `IncompleteStream` | Client | Warning |
/// | `InvalidConfig` | Internal | Error |
///
/// Use the constructor methods, which log the error at creation.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// JSON did not match the expected shape.
    ///
    /// This includes values outside a closed enumeration such as an unknown
    /// `role` or `finish_reason`; those are never coerced.
    #[error("Failed to decode {target}: {source}")]
    Decode {
        /// Name of the type being decoded.
        target: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be serialized to JSON.
    #[error("Failed to encode {target}: {source}")]
    Encode {
        /// Name of the type being encoded.
        target: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A payload carried no `object` discriminant and was not an error envelope.
    #[error("Payload has no object discriminant")]
    MissingObject,

    /// A payload carried an `object` discriminant this crate does not model.
    #[error("Unrecognized object discriminant '{found}'")]
    UnknownObject {
        /// The literal that was found.
        found: String,
    },

    /// A decoded value broke one of its documented invariants.
    #[error("Invalid {entity}: {message}")]
    InvariantViolation {
        /// The kind of value that failed, e.g. `"usage"`.
        entity: &'static str,
        /// What was wrong.
        message: String,
    },

    /// A chunk arrived that cannot follow the chunks already seen.
    #[error("Stream violation: {message}")]
    StreamViolation { message: String },

    /// The chunk sequence ended before every choice finished.
    #[error("Incomplete stream: {message}")]
    IncompleteStream { message: String },

    /// A validation configuration is self-contradictory.
    #[error("Validation configuration error: {message}")]
    InvalidConfig { message: String },
}

impl SchemaError {
    /// Get the error category for routing and handling decisions.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Decode { .. } => ErrorCategory::Client,
            Self::Encode { .. } => ErrorCategory::Internal,
            Self::MissingObject => ErrorCategory::Client,
            Self::UnknownObject { .. } => ErrorCategory::Client,
            Self::InvariantViolation { .. } => ErrorCategory::Client,
            Self::StreamViolation { .. } => ErrorCategory::Client,
            Self::IncompleteStream { .. } => ErrorCategory::Client,
            Self::InvalidConfig { .. } => ErrorCategory::Internal,
        }
    }

    /// Get the error severity for logging and alerting.
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Client => ErrorSeverity::Warning,
            ErrorCategory::Internal => ErrorSeverity::Error,
        }
    }

    /// The `type` string used when this error is reported in an API error envelope.
    pub fn api_error_type(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Client => "invalid_request_error",
            ErrorCategory::Internal => "server_error",
        }
    }

    /// Stable machine-readable code for this error, used as the envelope `code`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Decode { .. } => "decode_error",
            Self::Encode { .. } => "encode_error",
            Self::MissingObject => "missing_object",
            Self::UnknownObject { .. } => "unknown_object",
            Self::InvariantViolation { .. } => "invariant_violation",
            Self::StreamViolation { .. } => "stream_violation",
            Self::IncompleteStream { .. } => "incomplete_stream",
            Self::InvalidConfig { .. } => "invalid_config",
        }
    }

    // =========================================================================
    // Constructor methods with automatic logging
    // =========================================================================

    /// Create a decode error (logs at WARN level).
    pub fn decode(target: &'static str, source: serde_json::Error) -> Self {
        log_warn!(
            error_type = "decode_error",
            target_type = target,
            line = source.line(),
            column = source.column(),
            message = %source,
            "Payload did not match schema"
        );
        Self::Decode { target, source }
    }

    /// Create an encode error (logs at ERROR level).
    pub fn encode(target: &'static str, source: serde_json::Error) -> Self {
        log_error!(
            error_type = "encode_error",
            target_type = target,
            message = %source,
            "Failed to serialize schema value"
        );
        Self::Encode { target, source }
    }

    pub fn missing_object() -> Self {
        log_warn!(
            error_type = "missing_object",
            "Payload has no object discriminant"
        );
        Self::MissingObject
    }

    pub fn unknown_object(found: impl Into<String>) -> Self {
        let found = found.into();
        log_warn!(
            error_type = "unknown_object",
            found = %found,
            "Unrecognized object discriminant"
        );
        Self::UnknownObject { found }
    }

    pub fn invariant_violation(entity: &'static str, message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "invariant_violation",
            entity = entity,
            message = %message,
            "Schema invariant violated"
        );
        Self::InvariantViolation { entity, message }
    }

    pub fn stream_violation(message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "stream_violation",
            message = %message,
            "Chunk rejected by stream accumulator"
        );
        Self::StreamViolation { message }
    }

    pub fn incomplete_stream(message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "incomplete_stream",
            message = %message,
            "Chunk stream ended early"
        );
        Self::IncompleteStream { message }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "invalid_config",
            message = %message,
            "Validation configuration rejected"
        );
        Self::InvalidConfig { message }
    }
}
