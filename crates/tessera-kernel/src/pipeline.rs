//! The rendering pipeline.
//!
//! A [`Pipeline`] is the caller-facing contract over a
//! [`TriggerRegistry`] of [`Renderer`]s. Every operation maps one-to-one onto
//! the registry; the pipeline adds the default renderer set, name lookup
//! through the catalog, and the [`RenderOutcome`] surface.
//!
//! Rendering borrows the pipeline immutably, so a renderer can never observe
//! (or cause) a change to the list or the policy mid-scan.

use crate::config::PipelineConfig;
use crate::defaults;
use crate::entity::Entity;
use crate::error::{ArgumentError, RendererError};
use crate::node::Node;
use crate::registry::{ReturnPolicy, TriggerRegistry};
use crate::renderer::Renderer;
use tracing::{debug, debug_span};

/// Result of [`Pipeline::render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered(Node),
    /// No renderer produced output. Not an error.
    NoMatch,
}

impl RenderOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Rendered(_))
    }

    pub fn node(&self) -> Option<&Node> {
        match self {
            Self::Rendered(node) => Some(node),
            Self::NoMatch => None,
        }
    }

    pub fn into_node(self) -> Option<Node> {
        match self {
            Self::Rendered(node) => Some(node),
            Self::NoMatch => None,
        }
    }
}

impl From<Option<Node>> for RenderOutcome {
    fn from(node: Option<Node>) -> Self {
        node.map_or(Self::NoMatch, Self::Rendered)
    }
}

/// Ordered renderers plus a return policy.
#[derive(Debug, Clone)]
pub struct Pipeline {
    registry: TriggerRegistry<Renderer>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline {
    /// A pipeline holding the default renderer set under [`ReturnPolicy::First`].
    pub fn new() -> Self {
        let mut pipeline = Self::empty();
        pipeline.reset();
        pipeline
    }

    /// A pipeline with no renderers. It renders everything to `NoMatch`.
    pub fn empty() -> Self {
        Self {
            registry: TriggerRegistry::new(ReturnPolicy::default()),
        }
    }

    /// Replace the renderer list with the default set. The policy is kept.
    pub fn reset(&mut self) {
        self.registry.set_entries(defaults::default_renderers());
        debug!(renderers = self.size(), "pipeline reset to defaults");
    }

    /// Apply `config`. Fields left as `None` keep their current state.
    pub fn configure(&mut self, config: &PipelineConfig) {
        if let Some(policy) = config.return_policy {
            self.registry.set_return_policy(policy);
        }
        if let Some(renderers) = &config.initial_renderers {
            self.registry.set_entries(renderers.iter().cloned());
        }
        debug!(
            policy = %self.return_policy(),
            renderers = self.size(),
            "pipeline configured"
        );
    }

    /// Insert `renderer` at `position`, or append when `None`.
    pub fn add_renderer(
        &mut self,
        renderer: Renderer,
        position: Option<usize>,
    ) -> Result<bool, ArgumentError> {
        let name = renderer.name().to_string();
        let added = self.registry.add_entry(renderer, position)?;
        debug!(renderer = %name, ?position, "renderer added");
        Ok(added)
    }

    /// Insert the built-in renderer registered under `name`.
    pub fn add_named(&mut self, name: &str, position: Option<usize>) -> Result<bool, ArgumentError> {
        let renderer = defaults::builtin(name)?;
        self.add_renderer(renderer, position)
    }

    /// Remove the first occurrence of `renderer`. Returns whether one was removed.
    pub fn remove_renderer(&mut self, renderer: &Renderer) -> bool {
        let removed = self.registry.remove_entry::<Entity>(renderer);
        debug!(renderer = renderer.name(), removed, "renderer removal");
        removed
    }

    /// Remove every renderer, but only when `confirm` is true.
    pub fn clear(&mut self, confirm: bool) -> bool {
        let cleared = self.registry.clear_entries(confirm);
        debug!(cleared, "pipeline clear requested");
        cleared
    }

    pub fn size(&self) -> usize {
        self.registry.len()
    }

    pub fn renderers(&self) -> &[Renderer] {
        self.registry.entries()
    }

    pub fn renderer_names(&self) -> Vec<&str> {
        self.renderers().iter().map(Renderer::name).collect()
    }

    pub fn return_policy(&self) -> ReturnPolicy {
        self.registry.return_policy()
    }

    pub fn set_return_policy(&mut self, policy: ReturnPolicy) {
        self.registry.set_return_policy(policy);
    }

    /// Run `entity` through the renderers under the current policy.
    ///
    /// An error from a renderer aborts the scan and is returned as-is.
    pub fn render(&self, entity: &Entity) -> Result<RenderOutcome, RendererError> {
        let span = debug_span!(
            "render",
            policy = %self.return_policy(),
            renderers = self.size(),
            identity = entity.identity(),
        );
        let _guard = span.enter();

        let outcome = RenderOutcome::from(self.registry.execute(entity)?);
        debug!(matched = outcome.is_match(), "render finished");
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Content;
    use serde_json::json;

    fn constant(name: &'static str, text: &'static str) -> Renderer {
        Renderer::new(name, move |_: &Entity| Ok(Some(Node::text(text))))
    }

    fn never(name: &'static str) -> Renderer {
        Renderer::new(name, |_: &Entity| Ok(None))
    }

    #[test]
    fn new_pipeline_holds_defaults_in_order() {
        let pipeline = Pipeline::new();
        assert_eq!(pipeline.size(), 4);
        assert_eq!(
            pipeline.renderer_names(),
            vec!["delegate", "dump", "passthrough", "text"]
        );
        assert_eq!(pipeline.return_policy(), ReturnPolicy::First);
    }

    #[test]
    fn reset_restores_defaults_but_keeps_policy() {
        let mut pipeline = Pipeline::new();
        pipeline.set_return_policy(ReturnPolicy::Last);
        pipeline.clear(true);
        pipeline.add_renderer(never("x"), None).unwrap();
        pipeline.reset();
        assert_eq!(pipeline.size(), 4);
        assert_eq!(pipeline.return_policy(), ReturnPolicy::Last);
    }

    #[test]
    fn empty_pipeline_renders_no_match() {
        let outcome = Pipeline::empty().render(&Entity::new("hi")).unwrap();
        assert_eq!(outcome, RenderOutcome::NoMatch);
        assert_eq!(outcome.node(), None);
    }

    #[test]
    fn configure_replaces_list_and_is_idempotent() {
        let config = PipelineConfig::default()
            .with_return_policy(ReturnPolicy::Last)
            .with_initial_renderers([constant("a", "A"), never("b")]);

        let mut pipeline = Pipeline::new();
        pipeline.configure(&config);
        let once = (pipeline.renderer_names().join(","), pipeline.return_policy());
        pipeline.configure(&config);
        let twice = (pipeline.renderer_names().join(","), pipeline.return_policy());

        assert_eq!(once, ("a,b".to_string(), ReturnPolicy::Last));
        assert_eq!(once, twice);
    }

    #[test]
    fn configure_without_fields_changes_nothing() {
        let mut pipeline = Pipeline::new();
        pipeline.configure(&PipelineConfig::default());
        assert_eq!(pipeline.size(), 4);
        assert_eq!(pipeline.return_policy(), ReturnPolicy::First);
    }

    #[test]
    fn empty_initial_renderers_leave_an_empty_list() {
        let mut pipeline = Pipeline::new();
        pipeline.configure(&PipelineConfig::default().with_initial_renderers([]));
        assert_eq!(pipeline.size(), 0);
    }

    #[test]
    fn added_renderer_at_front_wins_under_first() {
        let mut pipeline = Pipeline::new();
        assert!(pipeline.add_renderer(constant("front", "F"), Some(0)).unwrap());
        let outcome = pipeline.render(&Entity::new(json!({"a": 1}))).unwrap();
        assert_eq!(outcome.into_node(), Some(Node::text("F")));
    }

    #[test]
    fn failed_registration_leaves_size_unchanged() {
        let mut pipeline = Pipeline::new();
        let err = pipeline.add_renderer(never("late"), Some(9)).unwrap_err();
        assert_eq!(err, ArgumentError::PositionOutOfRange { position: 9, len: 4 });
        assert!(pipeline.add_named("markdown", None).is_err());
        assert_eq!(pipeline.size(), 4);
    }

    #[test]
    fn add_named_inserts_catalog_singleton() {
        let mut pipeline = Pipeline::empty();
        pipeline.add_named("text", None).unwrap();
        pipeline.add_named("dump", Some(0)).unwrap();
        assert_eq!(pipeline.renderer_names(), vec!["dump", "text"]);
        assert!(pipeline.remove_renderer(&defaults::builtin("dump").unwrap()));
        assert_eq!(pipeline.renderer_names(), vec!["text"]);
    }

    #[test]
    fn remove_takes_first_occurrence_only() {
        let shared = constant("dup", "D");
        let mut pipeline = Pipeline::empty();
        pipeline.add_renderer(shared.clone(), None).unwrap();
        pipeline.add_renderer(never("mid"), None).unwrap();
        pipeline.add_renderer(shared.clone(), None).unwrap();

        assert!(pipeline.remove_renderer(&shared));
        assert_eq!(pipeline.renderer_names(), vec!["mid", "dup"]);
        assert!(!pipeline.remove_renderer(&constant("dup", "D")));
        assert_eq!(pipeline.size(), 2);
    }

    #[test]
    fn renderer_errors_propagate_and_leave_state_alone() {
        let mut pipeline = Pipeline::new();
        pipeline
            .add_renderer(
                Renderer::new("faulty", |_: &Entity| Err("renderer exploded".into())),
                Some(0),
            )
            .unwrap();
        let err = pipeline.render(&Entity::new("hi")).unwrap_err();
        assert_eq!(err.to_string(), "renderer exploded");
        assert_eq!(pipeline.size(), 5);
        assert_eq!(pipeline.return_policy(), ReturnPolicy::First);
    }

    #[test]
    fn passthrough_decides_nodes_once_dump_is_gone() {
        let node = Node::element("span").with_child(Node::text("ready"));
        let entity = Entity::new(Content::Node(node.clone()));

        let mut pipeline = Pipeline::new();
        let dumped = pipeline.render(&entity).unwrap().into_node().unwrap();
        assert_eq!(dumped, Node::element(defaults::DUMP_TAG));

        pipeline.remove_renderer(&defaults::builtin(defaults::DUMP).unwrap());
        assert_eq!(pipeline.render(&entity).unwrap(), RenderOutcome::Rendered(node));
    }
}
