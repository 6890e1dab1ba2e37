//! # HTML Element Tree
//!
//! An owned, ordered element model that the field renderers produce and the
//! payload builder walks. Attribute order is insertion order, so rendering
//! the same definition sequence always serializes identically.
//!
//! This is deliberately a small subset of an HTML DOM: elements, text nodes,
//! attributes, and the handful of traversal operations the form pipeline
//! needs (first-match search, preorder walk, child extraction for fieldset
//! grouping).

/// A child of an [`Element`]: either a nested element or a text run.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// One HTML element: tag, ordered attributes, children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

/// Tags serialized without a closing tag.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    // ─────────────────────────────────────────────────────────
    // Attributes
    // ─────────────────────────────────────────────────────────

    /// Get an attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, replacing any existing value.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(existing) = self.attributes.iter_mut().find(|(n, _)| *n == name) {
            existing.1 = value;
        } else {
            self.attributes.push((name, value));
        }
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.attributes.retain(|(n, _)| n != name);
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.iter().any(|(n, _)| n == name)
    }

    /// Append a class token to the `class` attribute.
    pub fn add_class(&mut self, class: &str) {
        match self.attr("class") {
            Some(existing) if !existing.is_empty() => {
                let combined = format!("{existing} {class}");
                self.set_attr("class", combined);
            }
            _ => self.set_attr("class", class),
        }
    }

    // ─────────────────────────────────────────────────────────
    // Children
    // ─────────────────────────────────────────────────────────

    pub fn append(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    /// Insert a child element before all existing children.
    pub fn prepend(&mut self, child: Element) {
        self.children.insert(0, Node::Element(child));
    }

    pub fn append_text(&mut self, text: impl Into<String>) {
        self.children.push(Node::Text(text.into()));
    }

    /// Drop all children and replace them with a single element.
    pub fn replace_children(&mut self, child: Element) {
        self.children = vec![Node::Element(child)];
    }

    /// Drop all children and replace them with a text run.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.children = vec![Node::Text(text.into())];
    }

    /// Concatenated text of this subtree.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(t),
                Node::Element(el) => el.collect_text(out),
            }
        }
    }

    /// Iterate direct child elements.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|c| match c {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    /// Mutable variant of [`child_elements`](Self::child_elements).
    pub fn child_elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.children.iter_mut().filter_map(|c| match c {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    // ─────────────────────────────────────────────────────────
    // Traversal
    // ─────────────────────────────────────────────────────────

    /// Depth-first search over descendants (self excluded), first match wins.
    pub fn find_descendant(&self, pred: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        for child in &self.children {
            if let Node::Element(el) = child {
                if pred(el) {
                    return Some(el);
                }
                if let Some(found) = el.find_descendant(pred) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Mutable variant of [`find_descendant`](Self::find_descendant).
    pub fn find_descendant_mut(&mut self, pred: &dyn Fn(&Element) -> bool) -> Option<&mut Element> {
        for child in self.children.iter_mut() {
            if let Node::Element(el) = child {
                if pred(el) {
                    return Some(el);
                }
                if let Some(found) = el.find_descendant_mut(pred) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Preorder visit of this element and every descendant element.
    pub fn walk(&self, visit: &mut dyn FnMut(&Element)) {
        visit(self);
        for child in &self.children {
            if let Node::Element(el) = child {
                el.walk(visit);
            }
        }
    }

    /// Remove and return the direct child elements matching `pred`,
    /// preserving document order. Text children are kept in place.
    pub fn extract_children(&mut self, pred: &dyn Fn(&Element) -> bool) -> Vec<Element> {
        let mut taken = Vec::new();
        let mut kept = Vec::with_capacity(self.children.len());
        for child in self.children.drain(..) {
            match child {
                Node::Element(el) if pred(&el) => taken.push(el),
                other => kept.push(other),
            }
        }
        self.children = kept;
        taken
    }

    // ─────────────────────────────────────────────────────────
    // Serialization
    // ─────────────────────────────────────────────────────────

    /// Serialize this subtree to HTML.
    ///
    /// Empty-valued attributes render as bare names (`disabled`, not
    /// `disabled=""`); void tags render without a closing tag.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            if !value.is_empty() {
                out.push_str("=\"");
                out.push_str(&escape_attr(value));
                out.push('"');
            }
        }
        out.push('>');
        if VOID_TAGS.contains(&self.tag.as_str()) {
            return;
        }
        for child in &self.children {
            match child {
                Node::Element(el) => el.write_html(out),
                Node::Text(t) => out.push_str(&escape_text(t)),
            }
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_roundtrip() {
        let mut el = Element::new("input");
        el.set_attr("type", "text");
        assert_eq!(el.attr("type"), Some("text"));
        el.set_attr("type", "email");
        assert_eq!(el.attr("type"), Some("email"));
        el.remove_attr("type");
        assert_eq!(el.attr("type"), None);
    }

    #[test]
    fn test_add_class_accumulates() {
        let mut el = Element::new("div");
        el.add_class("field-label");
        el.add_class("highlight");
        assert_eq!(el.attr("class"), Some("field-label highlight"));
    }

    #[test]
    fn test_text_concatenates_subtree() {
        let mut outer = Element::new("div");
        let mut inner = Element::new("span");
        inner.append_text("world");
        outer.append_text("hello ");
        outer.append(inner);
        assert_eq!(outer.text(), "hello world");
    }

    #[test]
    fn test_find_descendant_depth_first() {
        let mut form = Element::new("form");
        let mut wrapper = Element::new("div");
        let mut input = Element::new("input");
        input.set_attr("name", "first");
        wrapper.append(input);
        form.append(wrapper);

        let found = form.find_descendant(&|el| el.tag() == "input");
        assert_eq!(found.and_then(|el| el.attr("name")), Some("first"));
        // Self is excluded
        assert!(form.find_descendant(&|el| el.tag() == "form").is_none());
    }

    #[test]
    fn test_find_descendant_mut_updates_in_place() {
        let mut form = Element::new("form");
        let mut wrapper = Element::new("div");
        wrapper.append(Element::new("input"));
        form.append(wrapper);

        let input = form
            .find_descendant_mut(&|el| el.tag() == "input")
            .expect("input present");
        input.set_attr("required", "required");
        assert!(form
            .find_descendant(&|el| el.tag() == "input")
            .unwrap()
            .has_attr("required"));
    }

    #[test]
    fn test_child_elements_mut_updates_each_child() {
        let mut select = Element::new("select");
        for value in ["A", "B"] {
            let mut option = Element::new("option");
            option.set_attr("value", value);
            select.append(option);
        }
        for option in select.child_elements_mut() {
            option.set_attr("seen", "");
        }
        assert!(select.child_elements().all(|el| el.has_attr("seen")));
    }

    #[test]
    fn test_extract_children_preserves_order() {
        let mut parent = Element::new("form");
        for name in ["a", "b", "c"] {
            let mut child = Element::new("div");
            child.set_attr("data-fieldset", if name == "b" { "other" } else { "group" });
            child.set_attr("id", name);
            parent.append(child);
        }

        let taken = parent.extract_children(&|el| el.attr("data-fieldset") == Some("group"));
        let ids: Vec<&str> = taken.iter().filter_map(|el| el.attr("id")).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(parent.child_elements().count(), 1);
    }

    #[test]
    fn test_to_html_escapes_and_closes() {
        let mut p = Element::new("p");
        p.set_attr("title", "a \"quote\" & more");
        p.append_text("1 < 2");
        assert_eq!(
            p.to_html(),
            "<p title=\"a &quot;quote&quot; &amp; more\">1 &lt; 2</p>"
        );
    }

    #[test]
    fn test_to_html_void_and_bare_attrs() {
        let mut input = Element::new("input");
        input.set_attr("type", "text");
        input.set_attr("required", "");
        assert_eq!(input.to_html(), "<input type=\"text\" required>");
    }

    #[test]
    fn test_to_html_attribute_order_is_insertion_order() {
        let mut a = Element::new("div");
        a.set_attr("one", "1");
        a.set_attr("two", "2");
        let mut b = Element::new("div");
        b.set_attr("two", "2");
        b.set_attr("one", "1");
        assert_ne!(a.to_html(), b.to_html());
        assert_eq!(a.to_html(), "<div one=\"1\" two=\"2\"></div>");
    }

    #[test]
    fn test_structural_equality() {
        let build = || {
            let mut el = Element::new("div");
            el.set_attr("class", "field-wrapper");
            el.append_text("label");
            el
        };
        assert_eq!(build(), build());
    }
}
