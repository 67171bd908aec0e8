//! Pipeline configuration.
//!
//! [`PipelineConfig`] is the programmatic form handed to
//! [`crate::Pipeline::configure`]. [`PipelineSettings`] is its declarative
//! twin, read from TOML, naming built-in renderers instead of holding them:
//!
//! ```toml
//! return_policy = "last"
//! renderers = ["dump", "text"]
//! ```
//!
//! Unrecognized keys are ignored.

use crate::defaults;
use crate::error::{ArgumentError, PipelineError};
use crate::registry::ReturnPolicy;
use crate::renderer::Renderer;
use serde::{Deserialize, Serialize};

/// Options for [`crate::Pipeline::configure`]. `None` leaves that part of
/// the pipeline untouched.
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    pub return_policy: Option<ReturnPolicy>,
    /// Replaces the whole renderer list, in order.
    pub initial_renderers: Option<Vec<Renderer>>,
}

impl PipelineConfig {
    pub fn with_return_policy(mut self, policy: ReturnPolicy) -> Self {
        self.return_policy = Some(policy);
        self
    }

    pub fn with_initial_renderers(mut self, renderers: impl IntoIterator<Item = Renderer>) -> Self {
        self.initial_renderers = Some(renderers.into_iter().collect());
        self
    }
}

/// Declarative pipeline settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_policy: Option<ReturnPolicy>,

    /// Built-in renderer names, in scan order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renderers: Option<Vec<String>>,
}

impl PipelineSettings {
    /// Parse settings from TOML text. `origin` names the source in errors.
    pub fn from_toml_str(text: &str, origin: &str) -> Result<Self, PipelineError> {
        toml::from_str(text).map_err(|source| PipelineError::ParseConfig {
            origin: origin.to_string(),
            source,
        })
    }

    /// Resolve renderer names through the built-in catalog.
    ///
    /// Any unknown name fails the whole conversion.
    pub fn to_config(&self) -> Result<PipelineConfig, ArgumentError> {
        let initial_renderers = self
            .renderers
            .as_ref()
            .map(|names| {
                names
                    .iter()
                    .map(|name| defaults::builtin(name))
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;
        Ok(PipelineConfig {
            return_policy: self.return_policy,
            initial_renderers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_policy_and_renderers_ignoring_unknown_keys() {
        let settings = PipelineSettings::from_toml_str(
            r#"
                return_policy = "last"
                renderers = ["dump", "text"]
                theme = "dark"
            "#,
            "inline",
        )
        .unwrap();
        assert_eq!(settings.return_policy, Some(ReturnPolicy::Last));
        assert_eq!(
            settings.renderers.as_deref(),
            Some(&["dump".to_string(), "text".to_string()][..])
        );
    }

    #[test]
    fn all_is_accepted_as_last() {
        let settings = PipelineSettings::from_toml_str(r#"return_policy = "all""#, "inline").unwrap();
        assert_eq!(settings.return_policy, Some(ReturnPolicy::Last));
    }

    #[test]
    fn empty_text_is_all_defaults() {
        let settings = PipelineSettings::from_toml_str("", "inline").unwrap();
        assert_eq!(settings, PipelineSettings::default());
        let config = settings.to_config().unwrap();
        assert!(config.return_policy.is_none());
        assert!(config.initial_renderers.is_none());
    }

    #[test]
    fn bad_policy_is_a_parse_error_naming_the_origin() {
        let err = PipelineSettings::from_toml_str(r#"return_policy = "sometimes""#, "tessera.toml")
            .unwrap_err();
        assert!(matches!(err, PipelineError::ParseConfig { ref origin, .. } if origin == "tessera.toml"));
        assert!(err.to_string().starts_with("invalid toml at tessera.toml"));
    }

    #[test]
    fn unknown_renderer_name_fails_conversion() {
        let settings = PipelineSettings {
            return_policy: None,
            renderers: Some(vec!["text".to_string(), "markdown".to_string()]),
        };
        assert_eq!(
            settings.to_config().unwrap_err(),
            ArgumentError::UnknownRenderer("markdown".to_string())
        );
    }

    #[test]
    fn resolved_renderers_keep_order() {
        let settings = PipelineSettings {
            return_policy: Some(ReturnPolicy::First),
            renderers: Some(vec!["text".to_string(), "delegate".to_string()]),
        };
        let config = settings.to_config().unwrap();
        let names: Vec<&str> = config
            .initial_renderers
            .as_deref()
            .unwrap()
            .iter()
            .map(Renderer::name)
            .collect();
        assert_eq!(names, vec!["text", "delegate"]);
    }
}
