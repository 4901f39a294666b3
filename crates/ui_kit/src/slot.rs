//! "Text or node" content slots for composite widgets.

use leptos::View;

#[derive(Debug, Clone)]
/// Content placeholder that accepts plain text or a pre-built node.
///
/// Text is wrapped in the owning widget's default typography primitive at
/// render time; nodes are rendered as-is.
pub enum Slot<N = View> {
    /// Plain text, wrapped by the widget.
    Text(String),
    /// Pre-built content, rendered verbatim.
    Content(N),
}

impl<N> Slot<N> {
    /// Renders the slot, calling `wrap` only for the text variant.
    pub fn render_with(self, wrap: impl FnOnce(String) -> N) -> N {
        match self {
            Self::Text(text) => wrap(text),
            Self::Content(node) => node,
        }
    }

    /// Returns the text payload, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Content(_) => None,
        }
    }
}

impl<N> From<&str> for Slot<N> {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl<N> From<String> for Slot<N> {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<View> for Slot<View> {
    fn from(value: View) -> Self {
        Self::Content(value)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug, PartialEq)]
    enum Node {
        Wrapped(String),
        Prebuilt(Rc<str>),
    }

    #[test]
    fn text_is_wrapped_by_the_default_typography() {
        let slot: Slot<Node> = "Revenue".into();
        assert_eq!(
            slot.render_with(Node::Wrapped),
            Node::Wrapped("Revenue".to_string())
        );
    }

    #[test]
    fn prebuilt_content_is_passed_through_untouched() {
        let node: Rc<str> = Rc::from("<b>Revenue</b>");
        let slot = Slot::Content(Node::Prebuilt(node.clone()));
        let rendered = slot.render_with(|_| panic!("content slots are never wrapped"));
        match rendered {
            Node::Prebuilt(inner) => assert!(Rc::ptr_eq(&inner, &node)),
            other => panic!("unexpected node {other:?}"),
        }
    }

    #[test]
    fn as_text_only_reports_text_slots() {
        let text: Slot<Node> = String::from("Ada Lovelace").into();
        let content = Slot::Content(Node::Wrapped(String::new()));
        assert_eq!(text.as_text(), Some("Ada Lovelace"));
        assert_eq!(content.as_text(), None);
    }
}
