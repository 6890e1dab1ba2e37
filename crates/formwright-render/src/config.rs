//! Host-page block configuration
//!
//! A block-level key/value configuration (parsed by the host) is copied onto
//! the constructed form as custom data attributes. Falsy (empty) values are
//! excluded.

use std::collections::BTreeMap;

use formwright_core::Element;

/// Key/value configuration applied to the form element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockConfig {
    entries: BTreeMap<String, String>,
}

impl BlockConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Parse a `key=value` pair (CLI convenience).
    pub fn parse_pair(s: &str) -> Option<(String, String)> {
        let (key, value) = s.split_once('=')?;
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        Some((key.to_string(), value.trim().to_string()))
    }

    /// Copy every non-empty entry onto the form as a `data-{key}` attribute.
    pub fn apply(&self, form: &mut Element) {
        for (key, value) in &self.entries {
            if !value.is_empty() {
                form.set_attr(format!("data-{key}"), value);
            }
        }
    }
}

impl FromIterator<(String, String)> for BlockConfig {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_sets_data_attributes() {
        let mut config = BlockConfig::new();
        config.set("redirect", "/done");
        config.set("submit", "https://example.com/api");
        let mut form = Element::new("form");
        config.apply(&mut form);
        assert_eq!(form.attr("data-redirect"), Some("/done"));
        assert_eq!(form.attr("data-submit"), Some("https://example.com/api"));
    }

    #[test]
    fn test_empty_values_are_excluded() {
        let mut config = BlockConfig::new();
        config.set("redirect", "");
        let mut form = Element::new("form");
        config.apply(&mut form);
        assert!(!form.has_attr("data-redirect"));
    }

    #[test]
    fn test_parse_pair() {
        assert_eq!(
            BlockConfig::parse_pair("redirect=/done"),
            Some(("redirect".to_string(), "/done".to_string()))
        );
        assert_eq!(BlockConfig::parse_pair("no-equals"), None);
        assert_eq!(BlockConfig::parse_pair("=value"), None);
    }
}
