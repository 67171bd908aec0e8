//! Built-in renderers and the default set.
//!
//! [`default_renderers`] returns the four built-ins in canonical order:
//!
//! ```text
//! delegate     ← content renders itself into a node
//!     │
//! dump         ← records, arrays, renderables, nodes: "key:\tvalue" lines
//!     │
//! passthrough  ← content already is a node
//!     │
//! text         ← anything: stringified text leaf (never misses)
//! ```
//!
//! Under the `first` policy the scan order is the priority order. `dump`
//! claims every node before `passthrough` sees it; with the default set,
//! `passthrough` only decides the outcome when `dump` has been removed.
//!
//! Built-ins are process-wide singletons, so a handle from [`builtin`] has the
//! same identity as the one installed by a reset and can remove it.

use crate::content::{Content, value_text};
use crate::entity::Entity;
use crate::error::ArgumentError;
use crate::node::Node;
use crate::renderer::{RenderResult, Renderer};
use std::sync::LazyLock;

pub const DELEGATE: &str = "delegate";
pub const DUMP: &str = "dump";
pub const PASSTHROUGH: &str = "passthrough";
pub const TEXT: &str = "text";

/// Catalog names in canonical order.
pub const BUILTIN_NAMES: &[&str] = &[DELEGATE, DUMP, PASSTHROUGH, TEXT];

/// Tag of the container produced by the dump renderer.
pub const DUMP_TAG: &str = "div";

static BUILTINS: LazyLock<[Renderer; 4]> = LazyLock::new(|| {
    [
        Renderer::new(DELEGATE, render_delegate),
        Renderer::new(DUMP, render_dump),
        Renderer::new(PASSTHROUGH, render_passthrough),
        Renderer::new(TEXT, render_text),
    ]
});

/// The default renderer set, in canonical order.
pub fn default_renderers() -> Vec<Renderer> {
    BUILTINS.to_vec()
}

/// Look up a built-in renderer by catalog name.
pub fn builtin(name: &str) -> Result<Renderer, ArgumentError> {
    BUILTINS
        .iter()
        .find(|renderer| renderer.name() == name)
        .cloned()
        .ok_or_else(|| ArgumentError::UnknownRenderer(name.to_string()))
}

/// Content that renders itself, when the result is a finished node.
fn render_delegate(entity: &Entity) -> RenderResult {
    let Content::Renderable(object) = entity.content() else {
        return Ok(None);
    };
    match object.render()? {
        Content::Node(node) => Ok(Some(node)),
        _ => Ok(None),
    }
}

/// One `key:\tvalue` entry per own property, each followed by a break.
fn render_dump(entity: &Entity) -> RenderResult {
    let content = entity.content();
    if !content.is_object_like() {
        return Ok(None);
    }
    let container = content.own_properties().into_iter().fold(
        Node::element(DUMP_TAG)
            .with_id(entity.identity().map(str::to_string))
            .with_class(entity.style_tag().map(str::to_string)),
        |node, (key, value)| {
            node.with_child(Node::text(format!("{key}:\t{}", value_text(&value))))
                .with_child(Node::Break)
        },
    );
    Ok(Some(container))
}

fn render_passthrough(entity: &Entity) -> RenderResult {
    Ok(entity.content().as_node().cloned())
}

fn render_text(entity: &Entity) -> RenderResult {
    Ok(Some(Node::text(entity.content().to_text())))
}
