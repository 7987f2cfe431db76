//! Validation configuration
//!
//! Controls which documented invariants [`crate::validation::Validate`]
//! enforces. Closed enumerations are always enforced at decode time and are
//! not configurable.

use crate::error::{SchemaError, SchemaResult};
use serde::{Deserialize, Serialize};

/// Knobs for the invariant checks applied after decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Reject `usage` whose total is not prompt + completion.
    pub enforce_usage_totals: bool,
    /// Accept a request with an empty `messages` array.
    pub allow_empty_messages: bool,
    /// Accept a response or chunk with an empty `choices` array.
    pub allow_empty_choices: bool,
    /// Upper bound on content parts per message. `None` means unbounded.
    pub max_content_parts: Option<usize>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            enforce_usage_totals: true,
            allow_empty_messages: false,
            allow_empty_choices: true,
            max_content_parts: None,
        }
    }
}

impl ValidationConfig {
    /// Every check on, empty choice arrays rejected.
    pub fn strict() -> Self {
        Self {
            enforce_usage_totals: true,
            allow_empty_messages: false,
            allow_empty_choices: false,
            max_content_parts: None,
        }
    }

    /// Only structural checks; tolerant of providers that misreport usage.
    pub fn lenient() -> Self {
        Self {
            enforce_usage_totals: false,
            allow_empty_messages: true,
            allow_empty_choices: true,
            max_content_parts: None,
        }
    }

    pub fn with_max_content_parts(mut self, max: usize) -> Self {
        self.max_content_parts = Some(max);
        self
    }

    /// Validate the configuration itself.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidConfig`] if `max_content_parts` is zero,
    /// which would make every structured message invalid.
    pub fn validate(&self) -> SchemaResult<()> {
        if self.max_content_parts == Some(0) {
            return Err(SchemaError::invalid_config(
                "max_content_parts must be at least 1",
            ));
        }
        Ok(())
    }
}
