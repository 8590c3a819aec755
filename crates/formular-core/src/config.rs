//! Nested configuration mappings.
//!
//! Every renderer receives an owned [`Config`]: a copy of the caller's
//! options that the render call is free to consume. Variant-private flags
//! are removed with the `take_*` methods as they are resolved, so the keys
//! that remain at the end are exactly the ones that should surface as
//! literal HTML attributes. The caller's own mapping is never mutated —
//! each render works on its own copy.
//!
//! # Examples
//!
//! ```
//! use formular_core::Config;
//! use serde_json::json;
//!
//! let mut config = Config::from_value(json!({"custom": false, "id": "tos"}));
//! assert_eq!(config.take_bool("custom"), Some(false));
//! assert_eq!(config.take_bool("custom"), None); // consumed
//! assert!(config.contains("id"));
//! ```

use crate::error::ConfigError;
use serde_json::{Map, Value};

/// An attribute mapping, as handed to the tag builder.
pub type Attrs = Map<String, Value>;

/// A nested, consumable configuration mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    map: Attrs,
}

impl Config {
    /// Create an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a JSON value. Non-object values yield an empty mapping.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self { map },
            _ => Self::new(),
        }
    }

    /// Build from an attribute map.
    #[must_use]
    pub const fn from_attrs(map: Attrs) -> Self {
        Self { map }
    }

    /// Parse a JSON object from text.
    pub fn parse(json: &str) -> Result<Self, ConfigError> {
        match serde_json::from_str::<Value>(json)? {
            Value::Object(map) => Ok(Self { map }),
            _ => Err(ConfigError::NotAnObject),
        }
    }

    /// Check whether no keys remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Number of remaining top-level keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check for a key without consuming it.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Read a key without consuming it.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key)
    }

    /// Set a key, replacing any existing value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.map.insert(key.into(), value.into());
    }

    /// Remove and return a key.
    pub fn take(&mut self, key: &str) -> Option<Value> {
        self.map.remove(key)
    }

    /// Remove and return a boolean key. Non-boolean values are discarded
    /// silently; missing keys fall back to the caller's default.
    pub fn take_bool(&mut self, key: &str) -> Option<bool> {
        match self.map.remove(key) {
            Some(Value::Bool(b)) => Some(b),
            _ => None,
        }
    }

    /// Remove and return a string key.
    pub fn take_str(&mut self, key: &str) -> Option<String> {
        match self.map.remove(key) {
            Some(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Remove and return a nested object as its own configuration.
    /// Missing or non-object values yield an empty mapping.
    pub fn take_section(&mut self, key: &str) -> Self {
        match self.map.remove(key) {
            Some(value) => Self::from_value(value),
            None => Self::new(),
        }
    }

    /// Fill in defaults without overwriting caller-supplied keys.
    ///
    /// Nested objects merge recursively. `class` keys are the one
    /// exception to caller-wins: both class lists are kept, caller
    /// classes first, default classes appended.
    pub fn reverse_merge(&mut self, defaults: Value) {
        if let Value::Object(defaults) = defaults {
            reverse_merge_map(&mut self.map, defaults);
        }
    }

    /// Append space-separated classes to the `class` key.
    /// Existing (caller) classes stay first.
    pub fn merge_class(&mut self, classes: &str) {
        let merged = match self.map.get("class").and_then(Value::as_str) {
            Some(existing) if !existing.is_empty() => format!("{existing} {classes}"),
            _ => classes.to_string(),
        };
        self.map.insert("class".to_string(), Value::String(merged));
    }

    /// The remaining keys, as attributes for the tag builder.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn into_attrs(self) -> Attrs {
        self.map
    }

    /// The remaining keys, as a JSON value.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.map)
    }
}

impl From<Value> for Config {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

fn reverse_merge_map(target: &mut Attrs, defaults: Attrs) {
    for (key, default) in defaults {
        if !target.contains_key(&key) {
            target.insert(key, default);
            continue;
        }
        let existing = target.get_mut(&key).expect("key present, checked above");
        match (existing, default) {
            (Value::Object(existing), Value::Object(default)) => {
                reverse_merge_map(existing, default);
            }
            (Value::String(existing), Value::String(default)) if key == "class" => {
                if existing.is_empty() {
                    *existing = default;
                } else {
                    existing.push(' ');
                    existing.push_str(&default);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_from_value_non_object_is_empty() {
        assert!(Config::from_value(json!("nope")).is_empty());
        assert!(Config::from_value(json!(null)).is_empty());
    }

    #[test]
    fn test_parse_object() {
        let config = Config::parse(r#"{"inline": true}"#).unwrap();
        assert_eq!(config.get("inline"), Some(&json!(true)));
    }

    #[test]
    fn test_parse_rejects_non_object() {
        assert!(matches!(
            Config::parse("[1, 2]"),
            Err(ConfigError::NotAnObject)
        ));
        assert!(matches!(Config::parse("not json"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_take_consumes() {
        let mut config = Config::from_value(json!({"icon": "x"}));
        assert_eq!(config.take("icon"), Some(json!("x")));
        assert_eq!(config.take("icon"), None);
        assert!(config.is_empty());
    }

    #[test]
    fn test_take_bool_ignores_non_bool() {
        let mut config = Config::from_value(json!({"custom": "yes"}));
        assert_eq!(config.take_bool("custom"), None);
        // Discarded, not left behind as a literal attribute.
        assert!(!config.contains("custom"));
    }

    #[test]
    fn test_take_section_missing_is_empty() {
        let mut config = Config::new();
        assert!(config.take_section("input").is_empty());
    }

    #[test]
    fn test_take_section_nested() {
        let mut config = Config::from_value(json!({"input": {"id": "x"}, "rest": 1}));
        let input = config.take_section("input");
        assert_eq!(input.get("id"), Some(&json!("x")));
        assert!(!config.contains("input"));
        assert!(config.contains("rest"));
    }

    #[test]
    fn test_reverse_merge_caller_wins() {
        let mut config = Config::from_value(json!({"placeholder": "mine"}));
        config.reverse_merge(json!({"placeholder": "default", "id": "x"}));
        assert_eq!(config.get("placeholder"), Some(&json!("mine")));
        assert_eq!(config.get("id"), Some(&json!("x")));
    }

    #[test]
    fn test_reverse_merge_recurses_into_objects() {
        let mut config = Config::from_value(json!({"grid": {"columns": 6}}));
        config.reverse_merge(json!({"grid": {"columns": 12, "gutter": "1px"}}));
        assert_eq!(
            config.get("grid"),
            Some(&json!({"columns": 6, "gutter": "1px"}))
        );
    }

    #[test]
    fn test_reverse_merge_concatenates_classes() {
        let mut config = Config::from_value(json!({"class": "big-4"}));
        config.reverse_merge(json!({"class": "form-control"}));
        assert_eq!(config.get("class"), Some(&json!("big-4 form-control")));
    }

    #[test]
    fn test_merge_class_appends() {
        let mut config = Config::from_value(json!({"class": "big-4"}));
        config.merge_class("eb-icon eb-icon-check");
        assert_eq!(config.get("class"), Some(&json!("big-4 eb-icon eb-icon-check")));
    }

    #[test]
    fn test_merge_class_without_existing() {
        let mut config = Config::new();
        config.merge_class("badge");
        assert_eq!(config.get("class"), Some(&json!("badge")));
    }

    proptest! {
        #[test]
        fn prop_reverse_merge_is_idempotent(
            keys in proptest::collection::vec("[a-z]{1,8}", 0..6),
        ) {
            let defaults: Attrs = keys
                .iter()
                .map(|k| (k.clone(), Value::String(format!("v-{k}"))))
                .collect();

            let mut once = Config::new();
            once.reverse_merge(Value::Object(defaults.clone()));
            let mut twice = once.clone();
            twice.reverse_merge(Value::Object(defaults));
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_reverse_merge_never_overwrites_caller(
            key in "[a-z]{1,8}",
            caller in "[a-z0-9]{0,8}",
            default in "[a-z0-9]{0,8}",
        ) {
            prop_assume!(key != "class");
            let mut caller_map = Attrs::new();
            caller_map.insert(key.clone(), Value::String(caller.clone()));
            let mut config = Config::from_attrs(caller_map);

            let mut defaults = Attrs::new();
            defaults.insert(key.clone(), Value::String(default));
            config.reverse_merge(Value::Object(defaults));

            prop_assert_eq!(config.get(&key), Some(&Value::String(caller)));
        }
    }
}
