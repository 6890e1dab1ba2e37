//! # Payload Builder
//!
//! Walks the live form tree at submit time and serializes every named
//! control into a flat key/value payload: radio contributes only when
//! checked, checkbox accumulates comma-joined in form order, file controls
//! are excluded entirely, and everything else contributes its current string
//! value (empty included).
//!
//! Each payload carries a synthetic `__id__` token (millisecond timestamp
//! plus a random fraction) so downstream consumers can dedup submissions.
//! Collisions are not strictly impossible, just negligibly likely.

use serde::Serialize;
use serde_json::{Map, Value};

use formwright_core::Element;

/// Synthetic key holding the per-submission unique token.
pub const UNIQUE_KEY: &str = "__id__";

/// Flat submission-time serialization of live form control values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Payload(Map<String, Value>);

impl Payload {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

/// Fresh per-submission token: timestamp in milliseconds plus a random
/// fraction, so two calls in the same millisecond still differ.
fn unique_token() -> f64 {
    chrono::Utc::now().timestamp_millis() as f64 + rand::random::<f64>()
}

/// Build the payload from the current form tree.
///
/// Pure in the control state except for the `__id__` token, which differs
/// across calls.
pub fn build_payload(form: &Element) -> Payload {
    let mut map = Map::new();
    map.insert(UNIQUE_KEY.to_string(), unique_token().into());

    form.walk(&mut |el| {
        let Some(name) = el.attr("name") else { return };
        if name.is_empty() {
            return;
        }
        match el.tag() {
            "input" => match el.attr("type") {
                Some("radio") => {
                    if el.has_attr("checked") {
                        insert(&mut map, name, current_value(el));
                    }
                }
                Some("checkbox") => {
                    if el.has_attr("checked") {
                        accumulate(&mut map, name, current_value(el));
                    }
                }
                // File content is not part of the JSON payload
                Some("file") => {}
                _ => insert(&mut map, name, current_value(el)),
            },
            "textarea" | "output" => insert(&mut map, name, el.text()),
            "select" => insert(&mut map, name, selected_value(el)),
            "button" => insert(&mut map, name, current_value(el)),
            _ => {}
        }
    });

    Payload(map)
}

fn current_value(el: &Element) -> String {
    el.attr("value").unwrap_or("").to_string()
}

/// Current value of a select: the selected option, or the empty string when
/// nothing is selected (a wired value with no matching option). An option
/// without a value attribute contributes its text. The renderer always marks
/// exactly one option selected, so a rendered-but-unwired select still
/// contributes its visible default.
fn selected_value(select: &Element) -> String {
    select
        .find_descendant(&|el| el.tag() == "option" && el.has_attr("selected"))
        .map(|el| match el.attr("value") {
            Some(v) => v.to_string(),
            None => el.text(),
        })
        .unwrap_or_default()
}

fn insert(map: &mut Map<String, Value>, name: &str, value: String) {
    map.insert(name.to_string(), Value::String(value));
}

/// Checkboxes sharing a name comma-join their checked values in form order.
fn accumulate(map: &mut Map<String, Value>, name: &str, value: String) {
    let joined = match map.get(name).and_then(Value::as_str) {
        Some(prev) if !prev.is_empty() => format!("{prev},{value}"),
        _ => value,
    };
    map.insert(name.to_string(), Value::String(joined));
}
