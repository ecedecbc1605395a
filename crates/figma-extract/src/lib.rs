//! Component-set extraction for Figma documents.
//!
//! Turns the `Components` page of a Figma file into simplified component
//! descriptions that code generators can consume.
//!
//! # Pipeline
//!
//! 1. [`scan`] locates the `Components` page and walks sections → items
//! 2. every accepted `COMPONENT_SET` becomes a [`ProcessedComponent`]:
//!    - [`extract_props`] merges variant names into typed props
//!    - [`simplify_nodes`] keeps `name`, `type`, `style`, `fills`, `children`
//! 3. [`ComponentStore`] optionally persists each component as JSON
//!
//! # Examples
//!
//! ```
//! use figma_components_core::FigmaNode;
//! use figma_components_core::ComponentName;
//! use figma_components_extract::{ScanOptions, scan};
//!
//! let document: FigmaNode = serde_json::from_value(serde_json::json!({
//!     "children": [{
//!         "name": "Components",
//!         "children": [
//!             { "name": "Icons", "children": [{ "name": "Icon", "type": "INSTANCE" }] },
//!             { "name": "Forms", "children": [{
//!                 "name": "Checkbox",
//!                 "type": "COMPONENT_SET",
//!                 "children": [
//!                     { "name": "Checked=True, Size=Sm" },
//!                     { "name": "Checked=False, Size=Md" }
//!                 ]
//!             }]}
//!         ]
//!     }]
//! }))
//! .unwrap();
//!
//! let only_missing = ScanOptions::missing();
//! let nothing_extracted = |_: &ComponentName| false;
//! let outcome = scan(&document, &only_missing, &nothing_extracted).unwrap();
//!
//! let checkbox = &outcome.components[0];
//! assert_eq!(checkbox.prop("checked").unwrap().label(), "boolean");
//! assert_eq!(checkbox.prop("size").unwrap().label(), "Sm | Md");
//! assert!(outcome.has_icon_set());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod component;
mod scanner;
mod store;

pub mod props;
pub mod simplify;

pub use component::ProcessedComponent;
pub use props::{PropType, Props, extract_props};
pub use scanner::{
    COMPONENTS_PAGE, ExistenceCheck, ICON_SET, IconSet, NoExisting, ScanOptions, ScanOutcome, scan,
};
pub use simplify::{SimplifiedNode, extract_children, simplify_nodes};
pub use store::{ComponentStore, PersistReport, StoredComponent, WriteStatus};
