//! Figma document model.
//!
//! The Figma REST API returns a loosely shaped tree: every node has an id, a
//! name and a type, and dozens of type-specific fields. Only a handful of
//! them matter to the extractor, so [`FigmaNode`] names those explicitly and
//! keeps everything else in an opaque `extra` map that survives a round-trip.
//!
//! Deserialization is lenient where the extractor is: a `children` field that
//! is not an array is treated as absent.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Node `type` marking a set of component variants.
pub const COMPONENT_SET: &str = "COMPONENT_SET";

/// Response of `GET /v1/files/:key`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FigmaFile {
    /// Root `DOCUMENT` node; its children are the pages.
    pub document: FigmaNode,

    /// File name shown in the Figma UI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Last modification timestamp (ISO 8601)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,

    /// File version identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Remaining top-level fields (`components`, `styles`, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A node of a Figma document tree.
///
/// # Examples
///
/// ```
/// use figma_components_core::node::FigmaNode;
///
/// let node: FigmaNode = serde_json::from_value(serde_json::json!({
///     "id": "1:2",
///     "name": "Button",
///     "type": "COMPONENT_SET",
///     "visible": true,
///     "children": [{ "name": "state=Hover", "type": "COMPONENT" }]
/// }))
/// .unwrap();
///
/// assert!(node.is_component_set());
/// assert_eq!(node.children().len(), 1);
/// assert_eq!(node.extra["visible"], serde_json::json!(true));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FigmaNode {
    /// Node id (`"12:345"`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Name given in the layers panel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Node type (`"FRAME"`, `"COMPONENT_SET"`, `"INSTANCE"`, ...)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,

    /// Style references, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Value>,

    /// Paint list, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fills: Option<Value>,

    /// Child nodes; `None` when the field is absent or not an array
    #[serde(
        default,
        deserialize_with = "lenient_children",
        skip_serializing_if = "Option::is_none"
    )]
    pub children: Option<Vec<FigmaNode>>,

    /// Every other field of the API payload
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FigmaNode {
    /// Returns the node name, or `""` when absent.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Returns the node type, or `""` when absent.
    #[must_use]
    pub fn node_type(&self) -> &str {
        self.node_type.as_deref().unwrap_or_default()
    }

    /// Returns the children, or an empty slice when absent.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Returns `true` if the node groups component variants.
    #[must_use]
    pub fn is_component_set(&self) -> bool {
        self.node_type.as_deref() == Some(COMPONENT_SET)
    }

    /// Returns the first direct child with exactly the given name.
    #[must_use]
    pub fn child_named(&self, name: &str) -> Option<&Self> {
        self.children().iter().find(|c| c.name.as_deref() == Some(name))
    }
}

fn lenient_children<'de, D>(deserializer: D) -> Result<Option<Vec<FigmaNode>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(serde::de::Error::custom))
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        _ => Ok(None),
    }
}
