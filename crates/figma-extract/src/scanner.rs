//! Component-set scanner.
//!
//! Walks the `Components` page of a document (page → sections → items),
//! records the `Icon` item and turns every accepted `COMPONENT_SET` into a
//! [`ProcessedComponent`]. The scan persists nothing; callers decide what to
//! do with the outcome.
//!
//! # Examples
//!
//! ```
//! use figma_components_core::FigmaNode;
//! use figma_components_extract::{NoExisting, ScanOptions, scan};
//!
//! let document: FigmaNode = serde_json::from_value(serde_json::json!({
//!     "children": [{
//!         "name": "Components",
//!         "children": [{
//!             "name": "Actions",
//!             "children": [{
//!                 "name": "Button",
//!                 "type": "COMPONENT_SET",
//!                 "children": [{ "name": "state=Hover" }]
//!             }]
//!         }]
//!     }]
//! }))
//! .unwrap();
//!
//! let outcome = scan(&document, &ScanOptions::all(), &NoExisting).unwrap();
//! assert_eq!(outcome.components[0].name.as_str(), "Button");
//! ```

use crate::component::ProcessedComponent;
use figma_components_core::{ComponentName, Error, FigmaNode, Result, are_same_component};
use serde::Serialize;
use std::fmt::Write;

/// Name of the page holding the design system components.
pub const COMPONENTS_PAGE: &str = "Components";

/// Name of the item holding the icon library.
pub const ICON_SET: &str = "Icon";

/// Reports whether a component has already been extracted.
pub trait ExistenceCheck {
    /// Returns `true` if output for `name` already exists.
    fn exists(&self, name: &ComponentName) -> bool;
}

impl<F> ExistenceCheck for F
where
    F: Fn(&ComponentName) -> bool,
{
    fn exists(&self, name: &ComponentName) -> bool {
        self(name)
    }
}

/// Existence check for which nothing has been extracted yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoExisting;

impl ExistenceCheck for NoExisting {
    fn exists(&self, _name: &ComponentName) -> bool {
        false
    }
}

/// Filters applied to component set candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Skip candidates whose output already exists
    pub only_missing: bool,

    /// Accept only the candidate matching this name
    pub target_name: Option<String>,
}

impl ScanOptions {
    /// Accepts every component set.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            only_missing: false,
            target_name: None,
        }
    }

    /// Accepts component sets without existing output.
    #[must_use]
    pub const fn missing() -> Self {
        Self {
            only_missing: true,
            target_name: None,
        }
    }

    /// Accepts the single component set matching `name`.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            only_missing: false,
            target_name: Some(name.into()),
        }
    }

    fn accepts_name(&self, name: &ComponentName) -> bool {
        self.target_name
            .as_deref()
            .is_none_or(|target| are_same_component(name.as_str(), target))
    }
}

/// The icon library item found on the components page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconSet {
    /// Node id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Node name (always `"Icon"`)
    pub name: String,

    /// Node type
    #[serde(rename = "type")]
    pub node_type: String,

    /// Number of direct children
    pub children: usize,
}

impl From<&FigmaNode> for IconSet {
    fn from(node: &FigmaNode) -> Self {
        Self {
            id: node.id.clone(),
            name: node.name().to_string(),
            node_type: node.node_type().to_string(),
            children: node.children().len(),
        }
    }
}

/// Result of a successful scan.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutcome {
    /// Number of candidates that passed both filters
    pub processed_count: usize,

    /// Processed components in document order
    pub components: Vec<ProcessedComponent>,

    /// Last `Icon` item seen, if any
    pub icon_set: Option<IconSet>,
}

impl ScanOutcome {
    /// Returns `true` if an icon set was found.
    #[must_use]
    pub const fn has_icon_set(&self) -> bool {
        self.icon_set.is_some()
    }

    /// Returns the names of the processed components.
    pub fn component_names(&self) -> impl Iterator<Item = &ComponentName> {
        self.components.iter().map(|c| &c.name)
    }

    /// Renders the human-readable summary returned to tool callers.
    ///
    /// # Examples
    ///
    /// ```
    /// use figma_components_extract::ScanOutcome;
    ///
    /// let outcome = ScanOutcome { processed_count: 0, components: vec![], icon_set: None };
    /// assert_eq!(
    ///     outcome.report(),
    ///     "Successfully processed 0 components.\n\nComponent sets: 0\nIcon set: Not found\n\nComponent paths:\n"
    /// );
    /// ```
    #[must_use]
    pub fn report(&self) -> String {
        let mut report = format!(
            "Successfully processed {} components.\n\nComponent sets: {}\nIcon set: {}\n\nComponent paths:\n",
            self.processed_count,
            self.components.len(),
            if self.has_icon_set() { "Found" } else { "Not found" },
        );

        let paths: Vec<String> = self.component_names().map(|n| format!("- {n}")).collect();
        report.push_str(&paths.join("\n"));

        if self.has_icon_set() {
            let _ = write!(report, "\n- Icon set: {ICON_SET}");
        }

        report
    }
}

/// Scans a document for component sets.
///
/// `document` is the root `DOCUMENT` node. Sections without children are
/// skipped. The first candidate that fails to process aborts the scan.
///
/// # Errors
///
/// - [`Error::PageNotFound`] if no page is named exactly `Components`
/// - [`Error::ComponentFailed`] if an accepted candidate cannot be processed
pub fn scan(
    document: &FigmaNode,
    options: &ScanOptions,
    existing: &dyn ExistenceCheck,
) -> Result<ScanOutcome> {
    let page = document
        .child_named(COMPONENTS_PAGE)
        .ok_or_else(|| Error::PageNotFound {
            page: COMPONENTS_PAGE.to_string(),
        })?;

    let mut outcome = ScanOutcome {
        processed_count: 0,
        components: Vec::new(),
        icon_set: None,
    };

    for section in page.children() {
        let Some(items) = section.children.as_deref() else {
            tracing::trace!(section = section.name(), "Skipping section without children");
            continue;
        };

        for item in items {
            if item.name.as_deref() == Some(ICON_SET) {
                outcome.icon_set = Some(IconSet::from(item));
                continue;
            }

            if !item.is_component_set() {
                continue;
            }

            let name = ComponentName::from_raw(item.name());
            if options.only_missing && existing.exists(&name) {
                tracing::debug!(component = %name, "Skipping already extracted component");
                continue;
            }
            if !options.accepts_name(&name) {
                continue;
            }

            outcome.processed_count += 1;

            let component = ProcessedComponent::from_component_set(item).inspect_err(|e| {
                tracing::error!(component = item.name(), error = %e, "Aborting scan");
            })?;

            tracing::debug!(
                component = %component.name,
                props = component.props.len(),
                "Processed component"
            );
            outcome.components.push(component);
        }
    }

    Ok(outcome)
}
