//! Uniform field wrapper, label, and help-text construction
//!
//! Every rendered field (except bare hidden inputs and plaintext) sits in a
//! wrapper carrying the field's group, required, and hidden state as
//! queryable attributes, plus editor metadata: a stable item id derived from
//! the field's id and the enclosing form path.

use formwright_core::{Element, FieldDefinition};

use crate::format::FormatterRegistry;

/// Shared state for one render pass.
#[derive(Debug)]
pub struct RenderContext<'a> {
    /// Path of the definition source, embedded in item ids
    pub form_path: &'a str,
    /// Resolved formatter capability for output fields
    pub formatters: &'a FormatterRegistry,
}

/// Build the semantic item id for a field (or for the form itself when `id`
/// is `None`).
pub fn item_id(form_path: &str, id: Option<&str>) -> String {
    match id {
        Some(id) => format!("urn:formwright:{form_path}:default:Id:{id}"),
        None => format!("urn:formwright:{form_path}:default"),
    }
}

/// Build the label (or legend) element for a field.
pub fn create_label(fd: &FieldDefinition, tag: &str) -> Element {
    let mut label = Element::new(tag);
    label.set_attr("for", fd.id.as_deref().unwrap_or(""));
    label.set_attr("class", "field-label");
    label.set_attr("itemprop", "Label");
    label.set_attr("itemtype", "text");
    if let Some(tooltip) = &fd.tooltip {
        label.set_attr("title", tooltip);
    }
    label.set_text(fd.label.as_deref().unwrap_or(""));
    label
}

/// Build the help-text node for a field with a `Description`.
///
/// Its id is `{field id}-description`; the control points at it via
/// `aria-describedby`.
pub fn create_help_text(fd: &FieldDefinition) -> Element {
    let mut div = Element::new("div");
    div.set_attr("class", "field-description");
    div.set_attr("aria-live", "polite");
    div.set_attr("itemtype", "text");
    div.set_attr("itemprop", "Description");
    div.set_attr("id", fd.help_text_id().unwrap_or_default());
    div.set_text(fd.description.as_deref().unwrap_or(""));
    div
}

/// Build the uniform wrapper around one field, label included.
pub fn field_wrapper(fd: &FieldDefinition, ctx: &RenderContext, tag: &str) -> Element {
    let mut wrapper = Element::new(tag);
    wrapper.set_attr("itemtype", "component");
    wrapper.set_attr("itemid", item_id(ctx.form_path, fd.id.as_deref()));
    wrapper.set_attr("itemscope", "");
    wrapper.set_attr("data-editor-itemlabel", fd.label_or_name());
    wrapper.set_attr("data-editor-itemmodel", &fd.field_type);

    let mut class = format!("form-{}-wrapper", fd.field_type);
    if let Some(name) = &fd.name {
        class.push_str(&format!(" form-{name}"));
    }
    wrapper.set_attr("class", class);

    if let Some(fieldset) = &fd.fieldset {
        wrapper.set_attr("data-fieldset", fieldset);
    }
    if fd.is_mandatory() {
        wrapper.set_attr("data-required", "");
    }
    if fd.is_hidden() {
        wrapper.set_attr("data-hidden", "true");
    }
    wrapper.add_class("field-wrapper");
    wrapper.append(create_label(fd, "label"));
    wrapper
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(formatters: &FormatterRegistry) -> RenderContext<'_> {
        RenderContext {
            form_path: "/forms/contact",
            formatters,
        }
    }

    fn def() -> FieldDefinition {
        FieldDefinition {
            field_type: "text".to_string(),
            name: Some("first".to_string()),
            id: Some("first".to_string()),
            label: Some("First name".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_item_id_shapes() {
        assert_eq!(
            item_id("/forms/contact", Some("first")),
            "urn:formwright:/forms/contact:default:Id:first"
        );
        assert_eq!(
            item_id("/forms/contact", None),
            "urn:formwright:/forms/contact:default"
        );
    }

    #[test]
    fn test_wrapper_classes_and_metadata() {
        let formatters = FormatterRegistry::none();
        let wrapper = field_wrapper(&def(), &ctx(&formatters), "div");
        assert_eq!(
            wrapper.attr("class"),
            Some("form-text-wrapper form-first field-wrapper")
        );
        assert_eq!(wrapper.attr("itemtype"), Some("component"));
        assert_eq!(wrapper.attr("data-editor-itemlabel"), Some("First name"));
        assert_eq!(wrapper.attr("data-editor-itemmodel"), Some("text"));
        assert_eq!(
            wrapper.attr("itemid"),
            Some("urn:formwright:/forms/contact:default:Id:first")
        );
    }

    #[test]
    fn test_wrapper_flags() {
        let formatters = FormatterRegistry::none();
        let mut fd = def();
        fd.mandatory = Some("TRUE".to_string());
        fd.hidden = Some("true".to_string());
        fd.fieldset = Some("address".to_string());
        let wrapper = field_wrapper(&fd, &ctx(&formatters), "div");
        assert!(wrapper.has_attr("data-required"));
        assert_eq!(wrapper.attr("data-hidden"), Some("true"));
        assert_eq!(wrapper.attr("data-fieldset"), Some("address"));
    }

    #[test]
    fn test_wrapper_contains_label() {
        let formatters = FormatterRegistry::none();
        let mut fd = def();
        fd.tooltip = Some("hint".to_string());
        let wrapper = field_wrapper(&fd, &ctx(&formatters), "div");
        let label = wrapper
            .find_descendant(&|el| el.tag() == "label")
            .expect("label present");
        assert_eq!(label.attr("for"), Some("first"));
        assert_eq!(label.attr("title"), Some("hint"));
        assert_eq!(label.text(), "First name");
    }

    #[test]
    fn test_help_text_node() {
        let mut fd = def();
        fd.description = Some("We never share this.".to_string());
        let help = create_help_text(&fd);
        assert_eq!(help.attr("id"), Some("first-description"));
        assert_eq!(help.attr("aria-live"), Some("polite"));
        assert_eq!(help.text(), "We never share this.");
    }
}
