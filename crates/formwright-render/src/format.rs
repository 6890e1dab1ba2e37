//! Display-format extension point for output fields
//!
//! Formatters are resolved once at form-construction time and injected into
//! the render pass. An absent registry (or an unknown key) degrades to
//! identity formatting; it is logged, never an error.

use std::collections::HashMap;

use tracing::debug;

/// A pure string formatter keyed by a `Display Format` value.
pub type FormatFn = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Optional mapping from display-format key to formatting function.
#[derive(Default)]
pub struct FormatterRegistry {
    formatters: HashMap<String, FormatFn>,
}

impl FormatterRegistry {
    /// The explicit "no formatters available" registry.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        key: impl Into<String>,
        formatter: impl Fn(&str) -> String + Send + Sync + 'static,
    ) {
        self.formatters.insert(key.into(), Box::new(formatter));
    }

    /// Format `value` with the formatter registered under `key`.
    ///
    /// A missing key, or no key at all, is identity formatting.
    pub fn format(&self, key: Option<&str>, value: &str) -> String {
        match key.and_then(|k| self.formatters.get(k)) {
            Some(formatter) => formatter(value),
            None => {
                if let Some(k) = key {
                    if !self.formatters.contains_key(k) {
                        debug!("no formatter registered for '{k}', using identity");
                    }
                }
                value.to_string()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.formatters.is_empty()
    }
}

impl std::fmt::Debug for FormatterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<&str> = self.formatters.keys().map(String::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("FormatterRegistry")
            .field("keys", &keys)
            .finish()
    }
}
