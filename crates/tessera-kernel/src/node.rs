//! Display nodes: the finished, host-displayable output of a render.
//!
//! A [`Node`] is a plain value. Nothing in the kernel attaches it anywhere;
//! the host view decides how a text leaf, a line break, or an element is
//! actually shown.

use serde::{Deserialize, Serialize};

/// A finished display node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// A text leaf.
    Text { text: String },

    /// A line separator between sibling nodes.
    Break,

    /// A generic container.
    Element {
        tag: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        class: Option<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        children: Vec<Node>,
    },
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// An empty element with the given tag.
    pub fn element(tag: impl Into<String>) -> Self {
        Self::Element {
            tag: tag.into(),
            id: None,
            class: None,
            children: Vec::new(),
        }
    }

    /// Set the element id. No effect on text leaves and breaks.
    pub fn with_id(mut self, value: Option<String>) -> Self {
        if let Self::Element { id, .. } = &mut self {
            *id = value;
        }
        self
    }

    /// Set the element class. No effect on text leaves and breaks.
    pub fn with_class(mut self, value: Option<String>) -> Self {
        if let Self::Element { class, .. } = &mut self {
            *class = value;
        }
        self
    }

    /// Append a child. No effect on text leaves and breaks.
    pub fn with_child(mut self, child: Node) -> Self {
        if let Self::Element { children, .. } = &mut self {
            children.push(child);
        }
        self
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Self::Element { children, .. } => children,
            _ => &[],
        }
    }

    /// Text of the direct text-leaf children, in order.
    ///
    /// For a dump container these are its `key:\tvalue` entries.
    pub fn entries(&self) -> Vec<&str> {
        self.children()
            .iter()
            .filter_map(|child| match child {
                Self::Text { text } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Flattened text content. Breaks become newlines.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text { text } => out.push_str(text),
            Self::Break => out.push('\n'),
            Self::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }
}
