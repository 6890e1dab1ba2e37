//! # Field Renderers
//!
//! One rendering strategy per [`FieldKind`], dispatched through an
//! exhaustive match. Each renderer produces the subtree for one definition:
//! a uniform wrapper with exactly one interactive control when the kind has
//! one, or a bare element for hidden inputs and plaintext.
//!
//! Unrecognized types fall through to the generic labeled input.

use formwright_core::{apply_constraints, Element, FieldDefinition, FieldKind};

use crate::wrapper::{create_help_text, create_label, field_wrapper, RenderContext};

/// Render one field definition into its subtree.
///
/// When a `Description` is present, the help-text node is appended to
/// whatever the kind-specific renderer produced.
pub fn render_field(fd: &FieldDefinition, ctx: &RenderContext) -> Element {
    let mut field = match fd.kind() {
        FieldKind::Radio | FieldKind::Checkbox => render_choice(fd, ctx),
        FieldKind::Textarea => render_textarea(fd, ctx),
        FieldKind::Select => render_select(fd, ctx),
        FieldKind::Button | FieldKind::Submit => render_button(fd, ctx),
        FieldKind::Output => render_output(fd, ctx),
        FieldKind::Hidden => render_hidden(fd),
        FieldKind::Fieldset => render_fieldset(fd, ctx),
        FieldKind::Plaintext => render_plaintext(fd),
        FieldKind::Input(_) => render_generic_input(fd, ctx),
    };
    if fd.description.is_some() {
        field.append(create_help_text(fd));
    }
    field
}

/// The bare `<input>` control: raw type, placeholder, constraints.
fn create_input(fd: &FieldDefinition) -> Element {
    let mut input = Element::new("input");
    input.set_attr("type", &fd.field_type);
    if let Some(placeholder) = &fd.placeholder {
        input.set_attr("placeholder", placeholder);
    }
    apply_constraints(&mut input, fd);
    input
}

/// Generic labeled input: text-like kinds and the unrecognized-type fallback.
fn render_generic_input(fd: &FieldDefinition, ctx: &RenderContext) -> Element {
    let mut wrapper = field_wrapper(fd, ctx, "div");
    wrapper.append(create_input(fd));
    wrapper
}

/// Radio and checkbox: the input goes before the label.
fn render_choice(fd: &FieldDefinition, ctx: &RenderContext) -> Element {
    let mut wrapper = field_wrapper(fd, ctx, "div");
    wrapper.prepend(create_input(fd));
    wrapper
}

fn render_textarea(fd: &FieldDefinition, ctx: &RenderContext) -> Element {
    let mut wrapper = field_wrapper(fd, ctx, "div");
    let mut textarea = Element::new("textarea");
    if let Some(placeholder) = &fd.placeholder {
        textarea.set_attr("placeholder", placeholder);
    }
    wrapper.append(textarea);
    wrapper
}

/// Select: a disabled pre-selected placeholder option (when a placeholder is
/// set), then one option per comma-separated `Options` entry, trimmed.
///
/// Exactly one option starts selected (the placeholder, else the first
/// choice), mirroring what a browser would display; the payload builder
/// relies on this to read the current value.
fn render_select(fd: &FieldDefinition, ctx: &RenderContext) -> Element {
    let mut wrapper = field_wrapper(fd, ctx, "div");
    let mut select = Element::new("select");
    if let Some(placeholder) = &fd.placeholder {
        let mut ph = Element::new("option");
        ph.set_attr("selected", "");
        ph.set_attr("disabled", "");
        ph.set_text(placeholder);
        select.append(ph);
    }
    for (index, choice) in fd.options().enumerate() {
        let mut option = Element::new("option");
        option.set_attr("value", choice);
        if index == 0 && fd.placeholder.is_none() {
            option.set_attr("selected", "");
        }
        option.set_text(choice);
        select.append(option);
    }
    wrapper.append(select);
    wrapper
}

/// Button and submit: the wrapper's only child is the button itself, which
/// shares the wrapper's id/name and carries the redirect hint from `Extra`.
fn render_button(fd: &FieldDefinition, ctx: &RenderContext) -> Element {
    let mut wrapper = field_wrapper(fd, ctx, "div");
    let mut button = Element::new("button");
    button.set_attr("type", &fd.field_type);
    button.set_attr("class", "button");
    button.set_attr("data-redirect", fd.extra.as_deref().unwrap_or(""));
    button.set_attr("id", fd.id.as_deref().unwrap_or(""));
    button.set_attr("name", fd.name.as_deref().unwrap_or(""));
    button.set_text(fd.label.as_deref().unwrap_or(""));
    wrapper.replace_children(button);
    wrapper
}

/// Output: a computed display value run through the formatter capability.
fn render_output(fd: &FieldDefinition, ctx: &RenderContext) -> Element {
    let mut wrapper = field_wrapper(fd, ctx, "div");
    let mut output = Element::new("output");
    output.set_attr("name", fd.name.as_deref().unwrap_or(""));
    output.set_attr("id", fd.id.as_deref().unwrap_or(""));
    if let Some(display_format) = &fd.display_format {
        output.set_attr("data-display-format", display_format);
    }
    let formatted = ctx
        .formatters
        .format(fd.display_format.as_deref(), fd.value_or_empty());
    output.set_text(formatted);
    wrapper.append(output);
    wrapper
}

/// Hidden: a bare input, no wrapper semantics beyond id/name/value.
fn render_hidden(fd: &FieldDefinition) -> Element {
    let mut input = Element::new("input");
    input.set_attr("type", "hidden");
    input.set_attr("id", fd.id.as_deref().unwrap_or(""));
    input.set_attr("name", fd.name.as_deref().unwrap_or(""));
    input.set_attr("value", fd.value_or_empty());
    input
}

/// Fieldset: a legend-labeled grouping container. Repeatable fieldsets carry
/// min/max occurrence bounds as data attributes.
fn render_fieldset(fd: &FieldDefinition, ctx: &RenderContext) -> Element {
    let mut wrapper = field_wrapper(fd, ctx, "fieldset");
    wrapper.set_attr("id", fd.id.as_deref().unwrap_or(""));
    wrapper.set_attr("name", fd.name.as_deref().unwrap_or(""));
    wrapper.set_attr("itemtype", "container");
    wrapper.replace_children(create_label(fd, "legend"));
    if fd.is_repeatable() {
        apply_constraints(&mut wrapper, fd);
        wrapper.set_attr("data-repeatable", "true");
    }
    wrapper
}

/// Plaintext: a static paragraph, no interactive control.
fn render_plaintext(fd: &FieldDefinition) -> Element {
    let mut paragraph = Element::new("p");
    if let Some(name) = &fd.name {
        paragraph.set_attr("class", format!("form-{name}"));
    }
    paragraph.set_attr("data-fieldset", fd.fieldset.as_deref().unwrap_or(""));
    paragraph.set_text(fd.label.as_deref().unwrap_or(""));
    paragraph
}
