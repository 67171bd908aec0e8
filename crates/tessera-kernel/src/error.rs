//! Error types for Tessera kernel operations.

/// Error raised by a renderer (or a renderable's own `render`).
///
/// The pipeline never inspects or wraps these; they come back out of
/// [`crate::Pipeline::render`] exactly as the renderer produced them.
pub type RendererError = Box<dyn std::error::Error + Send + Sync>;

/// An entity could not be constructed from its raw shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// `id` was present but not a string.
    #[error("invalid identity: expected a string, got {found}")]
    InvalidIdentity { found: &'static str },

    /// `className` was present but neither a string nor a list of strings.
    #[error("invalid style tag: expected a string or a list of strings, got {found}")]
    InvalidStyleTag { found: &'static str },

    /// A JSON entity record was not an object.
    #[error("invalid entity record: expected an object, got {found}")]
    InvalidRecord { found: &'static str },
}

/// A renderer registration was rejected. Nothing was inserted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    /// The requested insertion index lies past the end of the list.
    #[error("renderer position {position} is out of range for {len} renderer(s)")]
    PositionOutOfRange { position: usize, len: usize },

    /// No built-in renderer is registered under this name.
    #[error("unknown renderer: {0}")]
    UnknownRenderer(String),

    /// A return policy string did not name a known policy.
    #[error("unknown return policy: {0}")]
    UnknownPolicy(String),
}

/// Errors from configuring or mutating a pipeline.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error("invalid toml at {origin}: {source}")]
    ParseConfig {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Short type name of a JSON value, used in validation messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
