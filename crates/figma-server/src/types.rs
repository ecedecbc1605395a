//! Type definitions for MCP server tools.
//!
//! This module defines the parameter and result types shared by the three
//! extraction tools:
//! - `extract_all_components`: extract every component set
//! - `extract_missing_components`: extract component sets without output yet
//! - `extract_component`: extract one component set by name

use figma_components_extract::{
    IconSet, PersistReport, ProcessedComponent, ScanOutcome, StoredComponent,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// extract_component types
// ============================================================================

/// Parameters for extracting a single component set.
///
/// # Examples
///
/// ```
/// use figma_components_server::types::ExtractComponentParams;
///
/// let params: ExtractComponentParams =
///     serde_json::from_str(r#"{ "name": "button group" }"#).unwrap();
/// assert_eq!(params.name, "button group");
/// ```
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ExtractComponentParams {
    /// Component set name as shown in Figma (case and separators are ignored)
    pub name: String,
}

// ============================================================================
// Shared result type
// ============================================================================

/// Machine-readable result of an extraction tool call.
///
/// Sent as the second text block of a successful tool result, after the
/// human-readable summary.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionResult {
    /// Number of component sets that passed the filters
    pub processed_count: usize,

    /// Icon set found on the components page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_set: Option<IconSet>,

    /// Directory holding the component files
    pub output_dir: String,

    /// Files created by this call
    pub written: Vec<StoredComponent>,

    /// Files left untouched because they already existed
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<StoredComponent>,

    /// Processed components
    pub components: Vec<ProcessedComponent>,
}

impl ExtractionResult {
    /// Combines a scan outcome with the persistence report.
    #[must_use]
    pub fn new(outcome: ScanOutcome, persisted: PersistReport, output_dir: &Path) -> Self {
        Self {
            processed_count: outcome.processed_count,
            icon_set: outcome.icon_set,
            output_dir: output_dir.display().to_string(),
            written: persisted.written,
            skipped: persisted.skipped,
            components: outcome.components,
        }
    }
}
