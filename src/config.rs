//! Cold-start configuration for the shared layer.
//!
//! Read once when a function container starts, then shared read-only
//! across invocations.

use serde_json::Value;

use crate::provider::DEFAULT_SHARED_VALUE;

/// Environment variable overriding the shared value.
pub const SHARED_VALUE_ENV: &str = "SHARED_VALUE";

/// Settings for the shared value provider.
#[derive(Debug, Clone, PartialEq)]
pub struct SharedConfig {
    /// Value reported by [`crate::provider::SharedValue`].
    pub value: Value,
}

impl SharedConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration against an arbitrary key lookup.
    ///
    /// `SHARED_VALUE` is parsed as JSON when it can be (so `42` is a number
    /// and `{"a":1}` an object), otherwise it is taken as a plain string.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = match lookup(SHARED_VALUE_ENV) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or(Value::String(raw)),
            None => Value::from(DEFAULT_SHARED_VALUE),
        };
        SharedConfig { value }
    }
}

impl Default for SharedConfig {
    fn default() -> Self {
        SharedConfig {
            value: Value::from(DEFAULT_SHARED_VALUE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lookup_with(value: &'static str) -> impl Fn(&str) -> Option<String> {
        move |key| (key == SHARED_VALUE_ENV).then(|| value.to_string())
    }

    #[test]
    fn test_unset_falls_back_to_default() {
        let config = SharedConfig::from_lookup(|_| None);
        assert_eq!(config, SharedConfig::default());
        assert_eq!(config.value, json!(DEFAULT_SHARED_VALUE));
    }

    #[test]
    fn test_json_text_is_parsed() {
        assert_eq!(SharedConfig::from_lookup(lookup_with("42")).value, json!(42));
        assert_eq!(
            SharedConfig::from_lookup(lookup_with(r#"{"a":[true,null]}"#)).value,
            json!({ "a": [true, null] })
        );
        assert_eq!(
            SharedConfig::from_lookup(lookup_with(r#""quoted""#)).value,
            json!("quoted")
        );
    }

    #[test]
    fn test_non_json_text_is_kept_as_string() {
        assert_eq!(
            SharedConfig::from_lookup(lookup_with("hello")).value,
            json!("hello")
        );
    }
}
