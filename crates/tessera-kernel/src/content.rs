//! Content payloads.
//!
//! Callers hand the pipeline whatever they have: plain data, an object that
//! knows how to render itself, or a node that is already finished. [`Content`]
//! closes over those three shapes so renderers can match on them instead of
//! probing at runtime.

use crate::error::RendererError;
use crate::node::Node;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// An object that can produce its own rendering.
pub trait SelfRender: Send + Sync {
    /// Produce this object's rendering.
    ///
    /// Only a [`Content::Node`] result counts as a rendering; any other
    /// content is treated by the delegate renderer as "does not apply".
    fn render(&self) -> Result<Content, RendererError>;

    /// Own enumerable properties, in enumeration order.
    fn properties(&self) -> Map<String, Value> {
        Map::new()
    }
}

/// The raw payload of an entity.
#[derive(Clone)]
pub enum Content {
    /// Plain data: strings, numbers, booleans, null, arrays, records.
    Data(Value),

    /// An object with its own `render` method.
    Renderable(Arc<dyn SelfRender>),

    /// An already-finished display node.
    Node(Node),
}

impl Content {
    pub fn renderable(object: impl SelfRender + 'static) -> Self {
        Self::Renderable(Arc::new(object))
    }

    /// Whether this content has properties to enumerate: records, arrays,
    /// renderable objects, and nodes. Scalars and null do not.
    pub fn is_object_like(&self) -> bool {
        match self {
            Self::Data(Value::Object(_) | Value::Array(_)) => true,
            Self::Data(_) => false,
            Self::Renderable(_) | Self::Node(_) => true,
        }
    }

    /// Own enumerable properties as `(key, value)` pairs, in enumeration order.
    ///
    /// Array keys are their indices. Nodes expose no own properties.
    pub fn own_properties(&self) -> Vec<(String, Value)> {
        match self {
            Self::Data(Value::Object(map)) => {
                map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
            }
            Self::Data(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), v.clone()))
                .collect(),
            Self::Data(_) | Self::Node(_) => Vec::new(),
            Self::Renderable(object) => object.properties().into_iter().collect(),
        }
    }

    /// Textual form used by the text-leaf renderer.
    pub fn to_text(&self) -> String {
        match self {
            Self::Data(value) => value_text(value),
            Self::Renderable(object) => Value::Object(object.properties()).to_string(),
            Self::Node(node) => node.text_content(),
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Self::Node(node) => Some(node),
            _ => None,
        }
    }
}

/// Strings verbatim, everything else as compact JSON.
pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl Default for Content {
    fn default() -> Self {
        Self::Data(Value::String(String::new()))
    }
}

impl PartialEq for Content {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Data(a), Self::Data(b)) => a == b,
            (Self::Node(a), Self::Node(b)) => a == b,
            (Self::Renderable(a), Self::Renderable(b)) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            _ => false,
        }
    }
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Data(value) => f.debug_tuple("Data").field(value).finish(),
            Self::Renderable(object) => f
                .debug_tuple("Renderable")
                .field(&object.properties())
                .finish(),
            Self::Node(node) => f.debug_tuple("Node").field(node).finish(),
        }
    }
}

impl From<Value> for Content {
    fn from(value: Value) -> Self {
        Self::Data(value)
    }
}

impl From<&str> for Content {
    fn from(value: &str) -> Self {
        Self::Data(Value::String(value.to_string()))
    }
}

impl From<String> for Content {
    fn from(value: String) -> Self {
        Self::Data(Value::String(value))
    }
}

impl From<Node> for Content {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}
