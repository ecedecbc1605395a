//! Prop aggregator.
//!
//! Variant children of a component set are named with comma-separated
//! `key=value` descriptors (`"State=Hover, Size=Large"`). Each key becomes a
//! camelCase prop; the values seen for a key are merged into a union type
//! label such as `"Hover | Default"`. `True`/`False` values become
//! `"boolean"`.
//!
//! Merging uses a substring test against the accumulated label, not exact
//! set membership: a value that happens to be a substring of an earlier
//! label (`"Lg"` after `"Lgx"`) is not appended.

use figma_components_core::{Error, FigmaNode, Result, to_camel_case};
use serde::{Deserialize, Serialize};

const DESCRIPTOR_SEPARATOR: &str = ", ";
const BOOLEAN: &str = "boolean";
const UNDEFINED: &str = "undefined";

/// A prop inferred from variant names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropType {
    /// camelCase prop name
    pub name: String,

    /// Union of observed value labels joined with `" | "`.
    ///
    /// `None` when the first descriptor for this prop had no `=`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_label: Option<String>,
}

impl PropType {
    /// Creates a prop with a single type label.
    #[must_use]
    pub fn new(name: impl Into<String>, type_label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_label: Some(type_label.into()),
        }
    }

    /// Returns the type label, rendering a missing value as `"undefined"`.
    #[must_use]
    pub fn label(&self) -> &str {
        self.type_label.as_deref().unwrap_or(UNDEFINED)
    }

    fn merge(&mut self, other: Option<&str>) {
        let incoming = other.unwrap_or(UNDEFINED);
        if !self.label().contains(incoming) {
            self.type_label = Some(format!("{} | {incoming}", self.label()));
        }
    }
}

/// Props of one component set keyed by name, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Props(Vec<PropType>);

impl Props {
    /// Creates an empty prop map.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Folds one `{name, type}` pair into the map.
    pub fn insert(&mut self, name: String, type_label: Option<String>) {
        match self.0.iter_mut().find(|p| p.name == name) {
            Some(existing) => existing.merge(type_label.as_deref()),
            None => self.0.push(PropType { name, type_label }),
        }
    }

    /// Returns the prop with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropType> {
        self.0.iter().find(|p| p.name == name)
    }

    /// Returns the number of distinct props.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no prop was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over props in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, PropType> {
        self.0.iter()
    }

    /// Consumes the map and returns the props in first-seen order.
    #[must_use]
    pub fn into_vec(self) -> Vec<PropType> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Props {
    type Item = &'a PropType;
    type IntoIter = std::slice::Iter<'a, PropType>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Parses a single variant name into `(prop name, type label)` pairs.
///
/// Each descriptor is split at its first `=`. A descriptor without `=`
/// yields a `None` label rather than an error.
///
/// # Examples
///
/// ```
/// use figma_components_extract::props::parse_variant_name;
///
/// let pairs = parse_variant_name("State=Hover, Has Icon=False");
/// assert_eq!(pairs[0], ("state".to_string(), Some("Hover".to_string())));
/// assert_eq!(pairs[1], ("hasIcon".to_string(), Some("boolean".to_string())));
/// ```
#[must_use]
pub fn parse_variant_name(variant_name: &str) -> Vec<(String, Option<String>)> {
    variant_name
        .split(DESCRIPTOR_SEPARATOR)
        .map(|descriptor| {
            let (key, value) = match descriptor.split_once('=') {
                Some((key, value)) => (key, Some(value)),
                None => (descriptor, None),
            };
            let type_label = value.map(|v| match v {
                "True" | "False" => BOOLEAN.to_string(),
                other => other.to_string(),
            });
            (to_camel_case(key), type_label)
        })
        .collect()
}

/// Aggregates the props of a component set from its variant children.
///
/// # Errors
///
/// Returns [`Error::ComponentFailed`] if a variant child has no name. The
/// caller replaces the `component` field with the component set's name.
///
/// # Examples
///
/// ```
/// use figma_components_core::FigmaNode;
/// use figma_components_extract::extract_props;
///
/// let variants: Vec<FigmaNode> = serde_json::from_value(serde_json::json!([
///     { "name": "state=Hover" },
///     { "name": "state=Default" },
///     { "name": "visible=True" }
/// ]))
/// .unwrap();
///
/// let props = extract_props(&variants).unwrap();
/// assert_eq!(props.get("state").unwrap().label(), "Hover | Default");
/// assert_eq!(props.get("visible").unwrap().label(), "boolean");
/// ```
pub fn extract_props(variants: &[FigmaNode]) -> Result<Props> {
    let mut props = Props::new();

    for (index, variant) in variants.iter().enumerate() {
        let variant_name = variant.name.as_deref().ok_or_else(|| Error::ComponentFailed {
            component: String::new(),
            message: format!("variant at index {index} has no name"),
        })?;

        for (name, type_label) in parse_variant_name(variant_name) {
            props.insert(name, type_label);
        }
    }

    Ok(props)
}
