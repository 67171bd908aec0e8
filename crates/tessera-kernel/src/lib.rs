//! # Tessera Kernel
//!
//! Turns loosely-typed content into display nodes without the caller knowing
//! what shape the content has.
//!
//! This crate is **host-agnostic**: it does not attach, style, or show
//! anything. It only decides which renderer turns a given piece of content
//! into a [`Node`], and in what order renderers are asked.
//!
//! ## Architecture
//!
//! ```text
//! RawEntity / JSON record
//!     │  normalize
//! Entity                ← content + identity + style tag, validated once
//!     │
//! Pipeline              ← ordered Renderers + ReturnPolicy (first | last)
//!     │  delegates to
//! TriggerRegistry       ← ordered entries, positional insert, policy walk
//!     │
//! RenderOutcome         ← Rendered(Node) | NoMatch
//! ```
//!
//! The default set (`delegate`, `dump`, `passthrough`, `text`) ends in an
//! unconditional text renderer, so an intact default pipeline never yields
//! `NoMatch`.

pub mod config;
pub mod content;
pub mod defaults;
pub mod entity;
pub mod error;
pub mod node;
pub mod pipeline;
pub mod registry;
pub mod renderer;

pub use config::{PipelineConfig, PipelineSettings};
pub use content::{Content, SelfRender};
pub use defaults::{BUILTIN_NAMES, builtin, default_renderers};
pub use entity::{Entity, RawEntity, normalize};
pub use error::{ArgumentError, PipelineError, RendererError, ValidationError};
pub use node::Node;
pub use pipeline::{Pipeline, RenderOutcome};
pub use registry::{ReturnPolicy, Trigger, TriggerRegistry};
pub use renderer::{RenderResult, Renderer};
