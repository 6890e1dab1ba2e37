//! # Form Assembler
//!
//! Orchestrates one render pass: render each definition in document order,
//! wire mandatory/value/checked/description state onto the control inside
//! each wrapper, then re-parent grouped fields under their fieldsets as a
//! strictly-after post-pass.
//!
//! Fetching and normalizing the definitions happens upstream (the client
//! crate); this module is a pure function of the definition sequence.

use formwright_core::{Element, FieldDefinition};
use tracing::{debug, warn};

use crate::fields::render_field;
use crate::wrapper::{item_id, RenderContext};

/// Derive the default submission endpoint from the definition source path by
/// truncating at the `.json` suffix.
pub fn derive_action(path: &str) -> String {
    match path.find(".json") {
        Some(idx) => path[..idx].to_string(),
        None => path.to_string(),
    }
}

/// Assemble the `<form>` element from normalized definitions.
///
/// Fields render in the exact order given; the fieldset grouping pass runs
/// after every field exists, so final nesting is independent of creation
/// order.
pub fn assemble_form(definitions: &[FieldDefinition], ctx: &RenderContext) -> Element {
    let mut form = Element::new("form");
    form.set_attr("itemid", item_id(ctx.form_path, None));
    form.set_attr("itemtype", "container");
    form.set_attr("itemscope", "");
    form.set_attr("data-editor-itemlabel", "Form Container");

    for fd in definitions {
        let mut field = render_field(fd, ctx);
        wire_control(&mut field, fd);
        form.append(field);
    }
    group_fieldsets(&mut form);
    debug!(
        fields = definitions.len(),
        path = ctx.form_path,
        "form assembled"
    );
    form
}

/// Apply definition state to the interactive control inside a rendered field.
///
/// A field whose subtree has no locatable control (hidden inputs wire
/// themselves; buttons and plaintext have none to wire) is tolerated rather
/// than failing the render, even when marked mandatory.
fn wire_control(field: &mut Element, fd: &FieldDefinition) {
    let control = field
        .find_descendant_mut(&|el| matches!(el.tag(), "input" | "textarea" | "select"));
    let Some(control) = control else {
        if fd.is_mandatory() && field.tag() != "input" {
            warn!(
                name = fd.name.as_deref().unwrap_or(""),
                "mandatory field has no inner control, skipping required wiring"
            );
        }
        return;
    };

    if fd.is_mandatory() {
        control.set_attr("required", "required");
    }
    if let Some(id) = &fd.id {
        control.set_attr("id", id);
    }
    if let Some(name) = &fd.name {
        control.set_attr("name", name);
    }

    let control_type = control.attr("type").unwrap_or("").to_string();
    if control_type != "file" {
        match control.tag() {
            // Selecting happens by marking the matching option
            "select" => select_value(control, fd.value_or_empty()),
            // The textarea's value lives in its text content
            "textarea" => control.set_text(fd.value_or_empty()),
            _ => control.set_attr("value", fd.value_or_empty()),
        }
        if (control_type == "radio" || control_type == "checkbox") && fd.is_checked() {
            control.set_attr("checked", "");
        }
    }
    if fd.description.is_some() {
        if let Some(help_id) = fd.help_text_id() {
            control.set_attr("aria-describedby", help_id);
        }
    }
}

/// Move the selection to the option matching `value`, exclusively.
///
/// A non-empty value with no matching option clears the selection entirely,
/// so the payload reads an empty string for the control.
fn select_value(select: &mut Element, value: &str) {
    if value.is_empty() {
        return;
    }
    for option in select.child_elements_mut().filter(|el| el.tag() == "option") {
        if option.attr("value") == Some(value) {
            option.set_attr("selected", "");
        } else {
            option.remove_attr("selected");
        }
    }
}

/// Re-parent every field carrying a `data-fieldset` reference under the
/// fieldset whose name matches.
///
/// Runs strictly after all fields exist. A fieldset is never grouped into
/// itself.
pub fn group_fieldsets(form: &mut Element) {
    let mut names: Vec<String> = Vec::new();
    form.walk(&mut |el| {
        if el.tag() == "fieldset" {
            if let Some(name) = el.attr("name") {
                names.push(name.to_string());
            }
        }
    });

    for name in names {
        let moved = form.extract_children(&|el| {
            el.attr("data-fieldset") == Some(name.as_str())
                && !(el.tag() == "fieldset" && el.attr("name") == Some(name.as_str()))
        });
        if moved.is_empty() {
            continue;
        }
        match form.find_descendant_mut(&|el| {
            el.tag() == "fieldset" && el.attr("name") == Some(name.as_str())
        }) {
            Some(fieldset) => {
                for field in moved {
                    fieldset.append(field);
                }
            }
            None => {
                // Unreachable in practice: the name came from the tree
                for field in moved {
                    form.append(field);
                }
            }
        }
    }
}
