//! Processed component output unit.

use crate::props::{PropType, extract_props};
use crate::simplify::{SimplifiedNode, simplify_nodes};
use figma_components_core::{ComponentName, Error, FigmaNode, Result};
use serde::{Deserialize, Serialize};

/// Simplified description of one component set.
///
/// Serialized as `{ "name", "props", "children" }`, the document persisted
/// to `{name}.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedComponent {
    /// `PascalCase` name derived from the component set name
    pub name: ComponentName,

    /// Props inferred from the variant names
    pub props: Vec<PropType>,

    /// Simplified variant trees
    pub children: Vec<SimplifiedNode>,
}

impl ProcessedComponent {
    /// Processes a `COMPONENT_SET` node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ComponentFailed`] if the node has no `children`
    /// array or one of its variants has no name. A name without letters or
    /// digits is not an error; it yields an empty component name.
    ///
    /// # Examples
    ///
    /// ```
    /// use figma_components_core::FigmaNode;
    /// use figma_components_extract::ProcessedComponent;
    ///
    /// let node: FigmaNode = serde_json::from_value(serde_json::json!({
    ///     "name": "Button",
    ///     "type": "COMPONENT_SET",
    ///     "children": [{ "name": "state=Hover", "type": "COMPONENT" }]
    /// }))
    /// .unwrap();
    ///
    /// let component = ProcessedComponent::from_component_set(&node).unwrap();
    /// assert_eq!(component.name.as_str(), "Button");
    /// assert_eq!(component.props[0].label(), "Hover");
    /// assert_eq!(component.children.len(), 1);
    /// ```
    pub fn from_component_set(node: &FigmaNode) -> Result<Self> {
        let raw_name = node.name.as_deref().unwrap_or_default();
        let failed = |message: String| Error::ComponentFailed {
            component: raw_name.to_string(),
            message,
        };

        let name = ComponentName::from_raw(raw_name);

        let variants = node
            .children
            .as_deref()
            .ok_or_else(|| failed("component set has no variants".to_string()))?;

        let props = extract_props(variants).map_err(|e| match e {
            Error::ComponentFailed { message, .. } => failed(message),
            other => failed(other.to_string()),
        })?;

        Ok(Self {
            name,
            props: props.into_vec(),
            children: simplify_nodes(variants),
        })
    }

    /// Returns the prop with the given name.
    #[must_use]
    pub fn prop(&self, name: &str) -> Option<&PropType> {
        self.props.iter().find(|p| p.name == name)
    }

    /// Renders the component as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerializationError`] if an opaque `style` or `fills`
    /// value cannot be encoded.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
