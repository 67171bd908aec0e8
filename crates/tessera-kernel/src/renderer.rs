//! Renderer handles.

use crate::entity::Entity;
use crate::error::RendererError;
use crate::node::Node;
use crate::registry::Trigger;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// What a renderer returns: `Ok(None)` when it does not apply.
pub type RenderResult = Result<Option<Node>, RendererError>;

type RenderFn = dyn Fn(&Entity) -> RenderResult + Send + Sync;

/// A named, shareable render function.
///
/// Clones share the same function, and identity is that shared function:
/// a clone removes its original from a pipeline, while two renderers built
/// from identical closures are distinct.
#[derive(Clone)]
pub struct Renderer {
    name: Cow<'static, str>,
    func: Arc<RenderFn>,
}

impl Renderer {
    pub fn new<F>(name: impl Into<Cow<'static, str>>, func: F) -> Self
    where
        F: Fn(&Entity) -> RenderResult + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn apply(&self, entity: &Entity) -> RenderResult {
        (self.func)(entity)
    }

    /// Whether `self` and `other` share the same function.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.func), Arc::as_ptr(&other.func))
    }
}

impl Trigger<Entity> for Renderer {
    type Output = Node;
    type Error = RendererError;

    fn fire(&self, input: &Entity) -> RenderResult {
        self.apply(input)
    }

    fn same(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }

    fn label(&self) -> &str {
        self.name()
    }
}

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderer").field("name", &self.name).finish()
    }
}
