//! The shared layer's value provider.

use serde_json::Value;

use super::ValueProvider;
use crate::config::SharedConfig;

/// Value reported when nothing is configured.
pub const DEFAULT_SHARED_VALUE: &str = "Hello from the shared layer!";

/// Holds one JSON value and hands out a copy on every read.
#[derive(Debug, Clone, PartialEq)]
pub struct SharedValue {
    value: Value,
}

impl SharedValue {
    /// Creates a provider reporting [`DEFAULT_SHARED_VALUE`].
    pub fn new() -> Self {
        SharedValue {
            value: Value::from(DEFAULT_SHARED_VALUE),
        }
    }

    /// Creates a provider reporting the configured value.
    pub fn from_config(config: &SharedConfig) -> Self {
        SharedValue {
            value: config.value.clone(),
        }
    }
}

impl Default for SharedValue {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueProvider for SharedValue {
    type Value = Value;

    fn get_value(&self) -> Value {
        self.value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_reports_builtin_value() {
        assert_eq!(SharedValue::new().get_value(), json!(DEFAULT_SHARED_VALUE));
    }

    #[test]
    fn test_from_config_reports_configured_value() {
        let config = SharedConfig { value: json!(42) };
        assert_eq!(SharedValue::from_config(&config).get_value(), json!(42));
    }

    #[test]
    fn test_repeated_reads_are_identical() {
        let provider = SharedValue::from_config(&SharedConfig {
            value: json!({ "nested": [1, 2, 3] }),
        });
        assert_eq!(provider.get_value(), provider.get_value());
    }
}
