//! Typed attribute and child-text accessors.
//!
//! The document format defines a default for every field (ids fall back to
//! [`Uid::NULL`], numeric text to `0`, strings to the empty string). Lookups
//! return a tagged [`Resolved`] value so callers can tell an explicit value
//! apart from a fallback without re-inspecting the node.

use roxmltree::Node;
use std::str::FromStr;

/// The result of a field lookup: either the value as written in the
/// document, or the field's default.
///
/// Text that is present but does not parse as the target type resolves to
/// `Defaulted`, which is the coercion contract of the format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<T> {
    Present(T),
    Defaulted(T),
}

impl<T> Resolved<T> {
    /// Unwraps to the carried value, explicit or default.
    pub fn value(self) -> T {
        match self {
            Resolved::Present(v) | Resolved::Defaulted(v) => v,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Resolved::Present(_))
    }
}

/// Looks up a string attribute; missing attributes resolve to "".
pub fn attr_str<'a>(node: Node<'a, '_>, name: &str) -> Resolved<&'a str> {
    match node.attribute(name) {
        Some(value) => Resolved::Present(value),
        None => Resolved::Defaulted(""),
    }
}

/// Looks up an attribute and parses it, falling back to `default` when the
/// attribute is missing or unparseable.
pub fn attr_value<T: FromStr>(node: Node<'_, '_>, name: &str, default: T) -> Resolved<T> {
    match node.attribute(name) {
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(value) => Resolved::Present(value),
            Err(_) => Resolved::Defaulted(default),
        },
        None => Resolved::Defaulted(default),
    }
}

/// Looks up the text content of the first child element named `name`;
/// a missing child or empty element resolves to "".
pub fn child_text<'a>(node: Node<'a, '_>, name: &str) -> Resolved<&'a str> {
    match first_child_element(node, name).and_then(|child| child.text()) {
        Some(text) => Resolved::Present(text),
        None => Resolved::Defaulted(""),
    }
}

/// Looks up the text content of the first child element named `name` and
/// parses it, falling back to `default` when missing or unparseable.
pub fn child_value<T: FromStr>(node: Node<'_, '_>, name: &str, default: T) -> Resolved<T> {
    match first_child_element(node, name).and_then(|child| child.text()) {
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(value) => Resolved::Present(value),
            Err(_) => Resolved::Defaulted(default),
        },
        None => Resolved::Defaulted(default),
    }
}

/// First child element with the given tag name, skipping text and comments.
pub(crate) fn first_child_element<'a, 'input>(
    node: Node<'a, 'input>,
    name: &str,
) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && child.has_tag_name(name))
}

/// Element children in document order, skipping text and comments.
pub(crate) fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}
