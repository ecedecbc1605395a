//! Tree extractor.
//!
//! Copies `name`, `type`, `style`, `fills` and `children` out of a node tree,
//! dropping every other field. Nesting depth and sibling order are preserved
//! exactly; `style` and `fills` are opaque and copied as-is.

use figma_components_core::FigmaNode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A node reduced to the five retained fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedNode {
    /// Node name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Node type
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,

    /// Style references
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Value>,

    /// Paint list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fills: Option<Value>,

    /// Simplified children, empty for leaves
    #[serde(default)]
    pub children: Vec<SimplifiedNode>,
}

impl SimplifiedNode {
    /// Returns the depth of this subtree (a leaf has depth 1).
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Self::depth).max().unwrap_or(0)
    }
}

impl From<&FigmaNode> for SimplifiedNode {
    fn from(node: &FigmaNode) -> Self {
        Self {
            name: node.name.clone(),
            node_type: node.node_type.clone(),
            style: node.style.clone(),
            fills: node.fills.clone(),
            children: simplify_nodes(node.children()),
        }
    }
}

/// Simplifies an already-parsed list of nodes.
#[must_use]
pub fn simplify_nodes(nodes: &[FigmaNode]) -> Vec<SimplifiedNode> {
    nodes.iter().map(SimplifiedNode::from).collect()
}

/// Simplifies an arbitrary JSON value holding a list of nodes.
///
/// Anything other than an array yields an empty list. Array elements that
/// are not objects produce a node with every field absent, and `null`
/// values count as absent, matching how [`FigmaNode`] deserializes.
///
/// # Examples
///
/// ```
/// use figma_components_extract::extract_children;
/// use serde_json::json;
///
/// assert!(extract_children(&json!(null)).is_empty());
/// assert!(extract_children(&json!({ "name": "not a list" })).is_empty());
///
/// let nodes = extract_children(&json!([
///     { "name": "Label", "type": "TEXT", "characters": "Click", "style": { "fontSize": 14 } }
/// ]));
/// assert_eq!(nodes[0].name.as_deref(), Some("Label"));
/// assert!(nodes[0].children.is_empty());
/// ```
#[must_use]
pub fn extract_children(value: &Value) -> Vec<SimplifiedNode> {
    let Some(nodes) = value.as_array() else {
        return Vec::new();
    };

    nodes
        .iter()
        .map(|node| SimplifiedNode {
            name: node.get("name").and_then(Value::as_str).map(str::to_owned),
            node_type: node.get("type").and_then(Value::as_str).map(str::to_owned),
            style: node.get("style").filter(|v| !v.is_null()).cloned(),
            fills: node.get("fills").filter(|v| !v.is_null()).cloned(),
            children: node.get("children").map(extract_children).unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_children_empty() {
        assert!(extract_children(&json!([])).is_empty());
    }

    #[test]
    fn test_extract_children_non_array() {
        assert!(extract_children(&json!(null)).is_empty());
        assert!(extract_children(&json!(42)).is_empty());
        assert!(extract_children(&json!("children")).is_empty());
    }

    #[test]
    fn test_extract_children_drops_other_fields() {
        let nodes = extract_children(&json!([{
            "id": "1:2",
            "name": "Frame",
            "type": "FRAME",
            "fills": [{ "type": "SOLID" }],
            "absoluteBoundingBox": { "x": 0 }
        }]));

        let value = serde_json::to_value(&nodes).unwrap();
        assert_eq!(
            value,
            json!([{ "name": "Frame", "type": "FRAME", "fills": [{ "type": "SOLID" }], "children": [] }])
        );
    }

    #[test]
    fn test_extract_children_preserves_order_and_depth() {
        let tree = json!([
            { "name": "a", "children": [
                { "name": "a1", "children": [{ "name": "a1x" }] },
                { "name": "a2" }
            ]},
            { "name": "b" }
        ]);

        let nodes = extract_children(&tree);
        let names: Vec<_> = nodes.iter().map(|n| n.name.as_deref().unwrap()).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(nodes[0].depth(), 3);
        assert_eq!(nodes[1].depth(), 1);
        assert_eq!(nodes[0].children[1].name.as_deref(), Some("a2"));
        assert_eq!(nodes[0].children[0].children[0].name.as_deref(), Some("a1x"));
    }

    #[test]
    fn test_non_array_children_become_empty() {
        let nodes = extract_children(&json!([{ "name": "x", "children": { "oops": true } }]));
        assert!(nodes[0].children.is_empty());
    }

    #[test]
    fn test_non_object_element() {
        let nodes = extract_children(&json!([7]));
        assert_eq!(nodes, vec![SimplifiedNode::default()]);
    }

    #[test]
    fn test_typed_and_untyped_agree() {
        let raw = json!([
            { "name": "Icon", "type": "VECTOR", "style": null, "fills": [], "children": [
                { "name": "Path", "type": "VECTOR", "visible": false }
            ]}
        ]);
        let typed: Vec<FigmaNode> = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(simplify_nodes(&typed), extract_children(&raw));
    }
}
