// Unit Tests for ValidationConfig
//
// UNIT UNDER TEST: ValidationConfig
//
// BUSINESS RESPONSIBILITY:
//   - Provides safe defaults for invariant checking
//   - Offers strict and lenient presets
//   - Rejects self-contradictory settings
//
// TEST COVERAGE:
//   - Default values
//   - Preset differences
//   - Partial deserialization falls back to defaults
//   - Zero content-part limit rejected

use crate::config::ValidationConfig;
use crate::error::SchemaError;
use serde_json::json;

#[test]
fn test_default_config_values() {
    let config = ValidationConfig::default();

    assert!(config.enforce_usage_totals);
    assert!(!config.allow_empty_messages);
    assert!(config.allow_empty_choices);
    assert_eq!(config.max_content_parts, None);
    assert!(config.validate().is_ok());
}

#[test]
fn test_strict_and_lenient_presets() {
    let strict = ValidationConfig::strict();
    let lenient = ValidationConfig::lenient();

    assert!(strict.enforce_usage_totals);
    assert!(!strict.allow_empty_choices);
    assert!(!lenient.enforce_usage_totals);
    assert!(lenient.allow_empty_messages);
    assert_ne!(strict, lenient);
}

#[test]
fn test_partial_config_deserializes_with_defaults() {
    // Arrange
    let raw = json!({"enforce_usage_totals": false, "max_content_parts": 8});

    // Act
    let config: ValidationConfig = serde_json::from_value(raw).unwrap();

    // Assert
    assert!(!config.enforce_usage_totals);
    assert_eq!(config.max_content_parts, Some(8));
    assert!(!config.allow_empty_messages, "Unspecified fields use defaults");
    assert!(config.allow_empty_choices);
}

#[test]
fn test_zero_part_limit_rejected() {
    let config = ValidationConfig::default().with_max_content_parts(0);

    let err = config.validate().unwrap_err();

    assert!(matches!(err, SchemaError::InvalidConfig { .. }));
}
