//! Entity normalization.
//!
//! An [`Entity`] is the canonical unit of work handed to the pipeline:
//! content plus an optional identity and an optional style tag. Raw input is
//! loosely typed ([`RawEntity`] or a JSON record); [`normalize`] validates it
//! once, at construction, and the result is never mutated afterwards.

use crate::content::Content;
use crate::error::{ValidationError, json_kind};
use serde_json::Value;

/// Loosely-typed construction input.
///
/// `id` maps to the entity identity and must be a string. `class_name` maps
/// to the style tag and must be a string or a list of strings. JSON `null`
/// counts as absent for both.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawEntity {
    pub content: Option<Content>,
    pub id: Option<Value>,
    pub class_name: Option<Value>,
}

impl RawEntity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: impl Into<Content>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn id(mut self, id: impl Into<Value>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class_name(mut self, class_name: impl Into<Value>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }
}

/// Normalized render input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entity {
    content: Content,
    identity: Option<String>,
    style_tag: Option<String>,
}

impl Entity {
    /// An entity with the given content and no identity or style tag.
    pub fn new(content: impl Into<Content>) -> Self {
        Self {
            content: content.into(),
            identity: None,
            style_tag: None,
        }
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    pub fn style_tag(&self) -> Option<&str> {
        self.style_tag.as_deref()
    }

    /// Build an entity from a JSON record with `content`, `id`, and
    /// `className` keys. Other keys are ignored; `null` yields the default
    /// entity.
    pub fn from_value(record: &Value) -> Result<Self, ValidationError> {
        let map = match record {
            Value::Null => return normalize(None),
            Value::Object(map) => map,
            other => {
                return Err(ValidationError::InvalidRecord {
                    found: json_kind(other),
                });
            }
        };
        normalize(Some(RawEntity {
            content: map.get("content").cloned().map(Content::Data),
            id: map.get("id").cloned(),
            class_name: map.get("className").cloned(),
        }))
    }

    /// The raw form of this entity. Normalizing it yields an equal entity.
    pub fn to_raw(&self) -> RawEntity {
        RawEntity {
            content: Some(self.content.clone()),
            id: self.identity.clone().map(Value::String),
            class_name: self.style_tag.clone().map(Value::String),
        }
    }
}

/// Validate raw input into an [`Entity`].
///
/// `None` yields the all-defaults entity: empty-string content, no identity,
/// no style tag.
pub fn normalize(raw: Option<RawEntity>) -> Result<Entity, ValidationError> {
    let Some(raw) = raw else {
        return Ok(Entity::default());
    };

    let identity = match raw.id {
        None | Some(Value::Null) => None,
        Some(Value::String(id)) => Some(id),
        Some(other) => {
            return Err(ValidationError::InvalidIdentity {
                found: json_kind(&other),
            });
        }
    };

    let style_tag = match raw.class_name {
        None | Some(Value::Null) => None,
        Some(Value::String(tag)) => Some(tag),
        Some(Value::Array(items)) => Some(join_style_tags(&items)?),
        Some(other) => {
            return Err(ValidationError::InvalidStyleTag {
                found: json_kind(&other),
            });
        }
    };

    Ok(Entity {
        content: raw.content.unwrap_or_default(),
        identity,
        style_tag,
    })
}

fn join_style_tags(items: &[Value]) -> Result<String, ValidationError> {
    let tags = items
        .iter()
        .map(|item| {
            item.as_str().ok_or(ValidationError::InvalidStyleTag {
                found: "list containing a non-string",
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(tags.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;
    use serde_json::json;

    #[test]
    fn absent_input_yields_defaults() {
        let entity = normalize(None).unwrap();
        assert_eq!(entity.content(), &Content::from(""));
        assert_eq!(entity.identity(), None);
        assert_eq!(entity.style_tag(), None);
        assert_eq!(normalize(Some(RawEntity::new())).unwrap(), entity);
    }

    #[test]
    fn style_tag_lists_are_space_joined() {
        let entity = normalize(Some(
            RawEntity::new()
                .content("x")
                .id("card-1")
                .class_name(json!(["card", "wide"])),
        ))
        .unwrap();
        assert_eq!(entity.identity(), Some("card-1"));
        assert_eq!(entity.style_tag(), Some("card wide"));
    }

    #[test]
    fn empty_style_tag_list_joins_to_empty_string() {
        let entity = normalize(Some(RawEntity::new().class_name(json!([])))).unwrap();
        assert_eq!(entity.style_tag(), Some(""));
    }

    #[test]
    fn numeric_identity_is_rejected() {
        let err = normalize(Some(RawEntity::new().id(42))).unwrap_err();
        assert_eq!(err, ValidationError::InvalidIdentity { found: "number" });
    }

    #[test]
    fn non_string_style_tags_are_rejected() {
        for bad in [json!(3), json!(true), json!({"a": "b"}), json!(["ok", 1])] {
            let err = normalize(Some(RawEntity::new().class_name(bad.clone()))).unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidStyleTag { .. }),
                "expected style tag error for {bad}"
            );
        }
    }

    #[test]
    fn null_fields_count_as_absent() {
        let entity = Entity::from_value(&json!({"id": null, "className": null})).unwrap();
        assert_eq!(entity, Entity::default());
    }

    #[test]
    fn renormalizing_is_a_no_op() {
        let inputs = [
            RawEntity::new(),
            RawEntity::new().content(json!({"a": 1})).id("x"),
            RawEntity::new().content(Node::Break).class_name(json!(["a", "b"])),
            RawEntity::new().content("hi").class_name("solo"),
        ];
        for raw in inputs {
            let once = normalize(Some(raw)).unwrap();
            let twice = normalize(Some(once.to_raw())).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn json_records_map_id_and_class_name() {
        let entity = Entity::from_value(&json!({
            "content": {"a": 1},
            "id": "row",
            "className": ["x", "y"],
            "ignored": true,
        }))
        .unwrap();
        assert_eq!(entity.content(), &Content::Data(json!({"a": 1})));
        assert_eq!(entity.identity(), Some("row"));
        assert_eq!(entity.style_tag(), Some("x y"));

        let err = Entity::from_value(&json!("just a string")).unwrap_err();
        assert_eq!(err, ValidationError::InvalidRecord { found: "string" });
    }
}
