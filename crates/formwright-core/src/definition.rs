//! # Field Definition Domain Types
//!
//! Domain types describing one logical form control, as fetched from an
//! external JSON definition document (`{ "data": [ ... ] }`).
//!
//! The source keys use spreadsheet-style PascalCase (`Type`, `Label`,
//! `Mandatory`, ...); serde maps them onto Rust snake_case fields. Values in
//! the source are loosely typed — a `Max` column may arrive as a number, a
//! `Mandatory` flag as a boolean — so every attribute is deserialized
//! tolerantly into an optional string. Unknown keys are ignored.
//!
//! ## Key Types
//!
//! - [`FieldDefinition`] — one entry per form control
//! - [`FieldKind`] — closed discriminator enum parsed from the `Type` key
//! - [`ConstraintClass`] — which HTML constraint set a kind accepts

use serde::{Deserialize, Deserializer, Serialize};

use crate::ids::IdAllocator;

/// Deserialize a loosely-typed definition attribute into a string.
///
/// Spreadsheet-backed JSON sources emit numbers and booleans for columns we
/// treat as strings (`Max`, `Multiple`, `Mandatory`, ...). Anything non-null
/// is coerced to its string form; `null` collapses to `None`.
fn stringish<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }))
}

// ============================================================================
// FieldDefinition
// ============================================================================

/// Declarative description of one form control.
///
/// All attributes are optional except `Type`, which selects the renderer;
/// a missing `Type` falls through to the generic-input renderer. Attributes
/// that are meaningless for a given kind are ignored, never errors.
///
/// Definitions are fetched once at form-construction time and are immutable
/// thereafter; the element tree derived from them is what mutates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct FieldDefinition {
    /// Renderer discriminator (see [`FieldKind::parse`])
    #[serde(rename = "Type")]
    pub field_type: String,

    /// Control name, used as the payload key
    #[serde(deserialize_with = "stringish")]
    pub name: Option<String>,

    /// Control id; defaulted via [`normalize_definitions`] when absent
    #[serde(deserialize_with = "stringish")]
    pub id: Option<String>,

    /// Visible label text
    #[serde(deserialize_with = "stringish")]
    pub label: Option<String>,

    /// Initial value; defaulted to the empty string when absent
    #[serde(deserialize_with = "stringish")]
    pub value: Option<String>,

    #[serde(deserialize_with = "stringish")]
    pub placeholder: Option<String>,

    #[serde(deserialize_with = "stringish")]
    pub tooltip: Option<String>,

    /// Help text rendered next to the control
    #[serde(deserialize_with = "stringish")]
    pub description: Option<String>,

    /// `"true"` (case-insensitive) marks the control required
    #[serde(deserialize_with = "stringish")]
    pub mandatory: Option<String>,

    #[serde(deserialize_with = "stringish")]
    pub hidden: Option<String>,

    /// Name of the parent fieldset group
    #[serde(deserialize_with = "stringish")]
    pub fieldset: Option<String>,

    /// Comma-separated choices for select controls
    #[serde(deserialize_with = "stringish")]
    pub options: Option<String>,

    /// `"true"` (exact) pre-checks radio/checkbox controls
    #[serde(deserialize_with = "stringish")]
    pub checked: Option<String>,

    /// Extra payload for buttons (redirect hint)
    #[serde(deserialize_with = "stringish")]
    pub extra: Option<String>,

    /// `"true"` (case-insensitive) marks a fieldset repeatable
    #[serde(deserialize_with = "stringish")]
    pub repeatable: Option<String>,

    /// Formatter registry key for output controls
    #[serde(rename = "Display Format", deserialize_with = "stringish")]
    pub display_format: Option<String>,

    // Type-specific constraint attributes
    #[serde(deserialize_with = "stringish")]
    pub max: Option<String>,

    #[serde(deserialize_with = "stringish")]
    pub min: Option<String>,

    #[serde(deserialize_with = "stringish")]
    pub step: Option<String>,

    #[serde(deserialize_with = "stringish")]
    pub accept: Option<String>,

    #[serde(deserialize_with = "stringish")]
    pub multiple: Option<String>,
}

fn flag_is_true(value: &Option<String>) -> bool {
    value
        .as_deref()
        .is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

impl FieldDefinition {
    /// Parse the `Type` discriminator into its renderer kind.
    pub fn kind(&self) -> FieldKind {
        FieldKind::parse(&self.field_type)
    }

    /// Whether the control is required (`Mandatory` is "true", case-insensitive).
    pub fn is_mandatory(&self) -> bool {
        flag_is_true(&self.mandatory)
    }

    /// Whether the wrapper should carry the hidden flag.
    pub fn is_hidden(&self) -> bool {
        flag_is_true(&self.hidden)
    }

    /// Whether a fieldset allows repeated instances.
    pub fn is_repeatable(&self) -> bool {
        flag_is_true(&self.repeatable)
    }

    /// Whether a radio/checkbox starts checked.
    ///
    /// Exact-match `"true"`, unlike the other flags. The source format is
    /// inconsistent here and we preserve its behavior.
    pub fn is_checked(&self) -> bool {
        self.checked.as_deref() == Some("true")
    }

    /// The initial value, defaulting to the empty string.
    pub fn value_or_empty(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }

    /// Label text with the name as fallback (used for editor metadata).
    pub fn label_or_name(&self) -> &str {
        self.label
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("")
    }

    /// Iterate the comma-separated `Options` entries, trimmed of whitespace.
    ///
    /// Yields nothing when `Options` is absent or empty.
    pub fn options(&self) -> impl Iterator<Item = &str> {
        self.options
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
    }

    /// Id of the associated help-text node, when the field has an id.
    pub fn help_text_id(&self) -> Option<String> {
        self.id.as_ref().map(|id| format!("{id}-description"))
    }
}

/// Assign defaults that the renderers rely on: a unique id per field and an
/// empty-string value.
///
/// Id assignment is deterministic in document order: the first occurrence of
/// a name gets the bare name, later occurrences get `name-1`, `name-2`, ...
/// The allocator is scoped to one render pass, so ids are unique within a
/// pass and independent across forms.
pub fn normalize_definitions(definitions: &mut [FieldDefinition], ids: &mut IdAllocator) {
    for fd in definitions.iter_mut() {
        if fd.id.as_deref().map_or(true, str::is_empty) {
            fd.id = Some(ids.assign(fd.name.as_deref().unwrap_or("field")));
        }
        if fd.value.is_none() {
            fd.value = Some(String::new());
        }
    }
}

// ============================================================================
// FieldKind
// ============================================================================

/// Closed set of renderer kinds selected by the `Type` discriminator.
///
/// Every recognized type gets its own variant; anything else falls through
/// to [`FieldKind::Input`], the generic labeled input, carrying the raw type
/// string so it can still become the `type` attribute of the control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Radio,
    Checkbox,
    Textarea,
    Select,
    Button,
    Submit,
    Output,
    Hidden,
    Fieldset,
    Plaintext,
    /// Generic input fallback (text, email, number, file, unknown types, ...)
    Input(String),
}

impl FieldKind {
    /// Parse from the `Type` string.
    ///
    /// Unrecognized types become the generic [`FieldKind::Input`] fallback.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "radio" => Self::Radio,
            "checkbox" => Self::Checkbox,
            "textarea" => Self::Textarea,
            "select" => Self::Select,
            "button" => Self::Button,
            "submit" => Self::Submit,
            "output" => Self::Output,
            "hidden" => Self::Hidden,
            "fieldset" => Self::Fieldset,
            "plaintext" => Self::Plaintext,
            other => Self::Input(other.to_string()),
        }
    }

    /// Which HTML constraint attribute set this kind accepts.
    pub fn constraint_class(&self) -> ConstraintClass {
        match self {
            Self::Fieldset => ConstraintClass::Repeat,
            Self::Input(input_type) => match input_type.as_str() {
                "text" | "email" => ConstraintClass::TextLength,
                "number" | "range" | "date" => ConstraintClass::NumericRange,
                "file" => ConstraintClass::FileUpload,
                _ => ConstraintClass::Unconstrained,
            },
            _ => ConstraintClass::Unconstrained,
        }
    }
}

impl std::str::FromStr for FieldKind {
    type Err = std::convert::Infallible;

    /// Infallible: unrecognized types become the generic input fallback.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

// ============================================================================
// ConstraintClass
// ============================================================================

/// The set of HTML constraint attributes a field kind accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintClass {
    /// `maxlength`/`minlength` (text, email)
    TextLength,
    /// `max`/`min`/`step` (number, range, date)
    NumericRange,
    /// `accept`/`multiple` (file)
    FileUpload,
    /// `data-max`/`data-min` occurrence bounds (repeatable fieldsets)
    Repeat,
    /// No constraint attributes apply
    Unconstrained,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal() {
        let json = r#"{"Type": "text", "Name": "first"}"#;
        let fd: FieldDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(fd.field_type, "text");
        assert_eq!(fd.name.as_deref(), Some("first"));
        assert!(fd.id.is_none());
        assert!(fd.value.is_none());
    }

    #[test]
    fn test_deserialize_loose_types() {
        // Spreadsheet sources emit numbers and booleans for string columns
        let json = r#"{"Type": "number", "Name": "age", "Max": 120, "Min": 0, "Mandatory": true}"#;
        let fd: FieldDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(fd.max.as_deref(), Some("120"));
        assert_eq!(fd.min.as_deref(), Some("0"));
        assert!(fd.is_mandatory());
    }

    #[test]
    fn test_deserialize_display_format_key() {
        let json = r#"{"Type": "output", "Name": "total", "Display Format": "currency"}"#;
        let fd: FieldDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(fd.display_format.as_deref(), Some("currency"));
    }

    #[test]
    fn test_deserialize_unknown_fields_ignored() {
        let json = r#"{"Type": "text", "Name": "a", "SomeFutureColumn": "x"}"#;
        let fd: FieldDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(fd.field_type, "text");
    }

    #[test]
    fn test_missing_type_is_tolerated() {
        let json = r#"{"Name": "odd"}"#;
        let fd: FieldDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(fd.field_type, "");
        assert_eq!(fd.kind(), FieldKind::Input(String::new()));
    }

    #[test]
    fn test_mandatory_case_insensitive() {
        let mut fd = FieldDefinition::default();
        fd.mandatory = Some("TRUE".to_string());
        assert!(fd.is_mandatory());
        fd.mandatory = Some("false".to_string());
        assert!(!fd.is_mandatory());
        fd.mandatory = None;
        assert!(!fd.is_mandatory());
    }

    #[test]
    fn test_checked_exact_match() {
        let mut fd = FieldDefinition::default();
        fd.checked = Some("true".to_string());
        assert!(fd.is_checked());
        // Unlike Mandatory, Checked is an exact match
        fd.checked = Some("TRUE".to_string());
        assert!(!fd.is_checked());
    }

    #[test]
    fn test_options_trimmed() {
        let mut fd = FieldDefinition::default();
        fd.options = Some("A, B , C".to_string());
        let opts: Vec<&str> = fd.options().collect();
        assert_eq!(opts, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_options_absent_yields_nothing() {
        let fd = FieldDefinition::default();
        assert_eq!(fd.options().count(), 0);
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(FieldKind::parse("radio"), FieldKind::Radio);
        assert_eq!(FieldKind::parse("checkbox"), FieldKind::Checkbox);
        assert_eq!(FieldKind::parse("textarea"), FieldKind::Textarea);
        assert_eq!(FieldKind::parse("select"), FieldKind::Select);
        assert_eq!(FieldKind::parse("button"), FieldKind::Button);
        assert_eq!(FieldKind::parse("submit"), FieldKind::Submit);
        assert_eq!(FieldKind::parse("output"), FieldKind::Output);
        assert_eq!(FieldKind::parse("hidden"), FieldKind::Hidden);
        assert_eq!(FieldKind::parse("fieldset"), FieldKind::Fieldset);
        assert_eq!(FieldKind::parse("plaintext"), FieldKind::Plaintext);
        assert_eq!(
            FieldKind::parse("email"),
            FieldKind::Input("email".to_string())
        );
    }

    #[test]
    fn test_constraint_class_per_kind() {
        assert_eq!(
            FieldKind::parse("text").constraint_class(),
            ConstraintClass::TextLength
        );
        assert_eq!(
            FieldKind::parse("email").constraint_class(),
            ConstraintClass::TextLength
        );
        assert_eq!(
            FieldKind::parse("number").constraint_class(),
            ConstraintClass::NumericRange
        );
        assert_eq!(
            FieldKind::parse("date").constraint_class(),
            ConstraintClass::NumericRange
        );
        assert_eq!(
            FieldKind::parse("file").constraint_class(),
            ConstraintClass::FileUpload
        );
        assert_eq!(
            FieldKind::parse("fieldset").constraint_class(),
            ConstraintClass::Repeat
        );
        assert_eq!(
            FieldKind::parse("radio").constraint_class(),
            ConstraintClass::Unconstrained
        );
    }

    #[test]
    fn test_normalize_assigns_unique_ids() {
        let mut defs = vec![
            field("text", "email"),
            field("text", "email"),
            field("text", "name"),
            field("text", "email"),
        ];
        let mut ids = IdAllocator::new();
        normalize_definitions(&mut defs, &mut ids);
        let assigned: Vec<&str> = defs.iter().map(|fd| fd.id.as_deref().unwrap()).collect();
        assert_eq!(assigned, vec!["email", "email-1", "name", "email-2"]);
    }

    #[test]
    fn test_normalize_keeps_explicit_id_and_defaults_value() {
        let mut defs = vec![FieldDefinition {
            field_type: "text".to_string(),
            name: Some("a".to_string()),
            id: Some("custom".to_string()),
            ..Default::default()
        }];
        let mut ids = IdAllocator::new();
        normalize_definitions(&mut defs, &mut ids);
        assert_eq!(defs[0].id.as_deref(), Some("custom"));
        assert_eq!(defs[0].value.as_deref(), Some(""));
    }

    #[test]
    fn test_normalize_replaces_empty_id() {
        let mut defs = vec![FieldDefinition {
            field_type: "text".to_string(),
            name: Some("a".to_string()),
            id: Some(String::new()),
            ..Default::default()
        }];
        let mut ids = IdAllocator::new();
        normalize_definitions(&mut defs, &mut ids);
        assert_eq!(defs[0].id.as_deref(), Some("a"));
    }

    fn field(field_type: &str, name: &str) -> FieldDefinition {
        FieldDefinition {
            field_type: field_type.to_string(),
            name: Some(name.to_string()),
            ..Default::default()
        }
    }
}
