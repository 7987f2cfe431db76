//! Invariant checks for decoded payloads
//!
//! Decoding guarantees shape and closed enumerations. The checks here cover
//! what serde cannot express: non-empty identifiers, the additive `usage`
//! invariant, unique choice indices and well-formed content parts.
//!
//! Sampling parameters (`temperature`, `max_tokens`, ...) are not range
//! checked; the upstream API owns those limits. Non-finite floats are
//! rejected because JSON cannot carry them.

use crate::config::ValidationConfig;
use crate::error::{SchemaError, SchemaResult};
use crate::types::{
    ApiError, ChatChunk, ChatMessage, ChatRequest, ChatResponse, ContentPart, MessageContent,
    Model, ModelList, Usage,
};
use std::collections::HashSet;

/// A value whose documented invariants can be checked.
pub trait Validate {
    /// Check this value against `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvariantViolation`] for the first broken rule,
    /// or [`SchemaError::InvalidConfig`] if `config` itself is invalid.
    fn validate(&self, config: &ValidationConfig) -> SchemaResult<()>;

    /// Check against [`ValidationConfig::default`].
    fn validate_default(&self) -> SchemaResult<()> {
        self.validate(&ValidationConfig::default())
    }
}

fn ensure(condition: bool, entity: &'static str, message: impl FnOnce() -> String) -> SchemaResult<()> {
    if condition {
        Ok(())
    } else {
        Err(SchemaError::invariant_violation(entity, message()))
    }
}

fn ensure_non_empty(value: &str, entity: &'static str, field: &str) -> SchemaResult<()> {
    ensure(!value.trim().is_empty(), entity, || format!("{field} must not be empty"))
}

fn ensure_finite(value: Option<f64>, field: &str) -> SchemaResult<()> {
    match value {
        Some(v) if !v.is_finite() => Err(SchemaError::invariant_violation(
            "request",
            format!("{field} must be a finite number, got {v}"),
        )),
        _ => Ok(()),
    }
}

fn ensure_unique_indices(
    indices: impl Iterator<Item = u32>,
    entity: &'static str,
) -> SchemaResult<()> {
    let mut seen = HashSet::new();
    for index in indices {
        if !seen.insert(index) {
            return Err(SchemaError::invariant_violation(
                entity,
                format!("duplicate choice index {index}"),
            ));
        }
    }
    Ok(())
}

impl Validate for Usage {
    fn validate(&self, config: &ValidationConfig) -> SchemaResult<()> {
        if !config.enforce_usage_totals {
            return Ok(());
        }
        ensure(self.is_consistent(), "usage", || {
            format!(
                "total_tokens {} != prompt_tokens {} + completion_tokens {}",
                self.total_tokens, self.prompt_tokens, self.completion_tokens
            )
        })
    }
}

impl Validate for ContentPart {
    fn validate(&self, _config: &ValidationConfig) -> SchemaResult<()> {
        ensure_non_empty(&self.part_type, "content part", "type")?;
        if self.is_text() {
            ensure(self.as_text().is_some(), "content part", || {
                "text part is missing its text field".to_string()
            })?;
        }
        Ok(())
    }
}

impl Validate for ChatMessage {
    fn validate(&self, config: &ValidationConfig) -> SchemaResult<()> {
        let MessageContent::Parts(parts) = &self.content else {
            return Ok(());
        };
        if let Some(max) = config.max_content_parts {
            ensure(parts.len() <= max, "message", || {
                format!("{} content parts exceeds the limit of {max}", parts.len())
            })?;
        }
        parts.iter().try_for_each(|part| part.validate(config))
    }
}

impl Validate for ChatRequest {
    fn validate(&self, config: &ValidationConfig) -> SchemaResult<()> {
        config.validate()?;
        ensure_non_empty(&self.model, "request", "model")?;
        ensure(
            config.allow_empty_messages || !self.messages.is_empty(),
            "request",
            || "messages must contain at least one message".to_string(),
        )?;
        ensure_finite(self.temperature, "temperature")?;
        ensure_finite(self.top_p, "top_p")?;
        ensure_finite(self.frequency_penalty, "frequency_penalty")?;
        ensure_finite(self.presence_penalty, "presence_penalty")?;
        self.messages.iter().try_for_each(|m| m.validate(config))
    }
}

impl Validate for ChatResponse {
    fn validate(&self, config: &ValidationConfig) -> SchemaResult<()> {
        ensure_non_empty(&self.id, "response", "id")?;
        ensure_non_empty(&self.model, "response", "model")?;
        ensure(
            config.allow_empty_choices || !self.choices.is_empty(),
            "response",
            || "choices must not be empty".to_string(),
        )?;
        ensure_unique_indices(self.choices.iter().map(|c| c.index), "response")?;
        self.usage.validate(config)
    }
}

impl Validate for ChatChunk {
    fn validate(&self, config: &ValidationConfig) -> SchemaResult<()> {
        ensure_non_empty(&self.id, "chunk", "id")?;
        ensure_non_empty(&self.model, "chunk", "model")?;
        ensure(
            config.allow_empty_choices || !self.choices.is_empty(),
            "chunk",
            || "choices must not be empty".to_string(),
        )?;
        ensure_unique_indices(self.choices.iter().map(|c| c.index), "chunk")
    }
}

impl Validate for Model {
    fn validate(&self, _config: &ValidationConfig) -> SchemaResult<()> {
        ensure_non_empty(&self.id, "model", "id")?;
        ensure_non_empty(&self.owned_by, "model", "owned_by")
    }
}

impl Validate for ModelList {
    fn validate(&self, config: &ValidationConfig) -> SchemaResult<()> {
        self.data.iter().try_for_each(|m| m.validate(config))
    }
}

impl Validate for ApiError {
    fn validate(&self, _config: &ValidationConfig) -> SchemaResult<()> {
        ensure_non_empty(&self.error.message, "error", "message")?;
        ensure_non_empty(&self.error.error_type, "error", "type")
    }
}
