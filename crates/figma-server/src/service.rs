//! MCP server implementation for component extraction.
//!
//! The `ExtractorService` provides three tools:
//! 1. `extract_all_components` - Extract every component set
//! 2. `extract_missing_components` - Extract component sets without a file yet
//! 3. `extract_component` - Extract a single component set by name

use crate::types::{ExtractComponentParams, ExtractionResult};
use figma_components_client::DocumentSource;
use figma_components_core::{Error, FigmaNode, to_pascal_case};
use figma_components_extract::{ComponentStore, PersistReport, ScanOptions, ScanOutcome, scan};
use rmcp::handler::server::ServerHandler;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{ErrorData as McpError, tool, tool_handler, tool_router};
use std::fmt;
use std::sync::Arc;

/// MCP server extracting Figma component sets.
///
/// Every tool call fetches the document once, scans the `Components` page
/// with the tool's filter and writes each processed component to the store.
/// Existing files are never overwritten.
///
/// # Examples
///
/// ```no_run
/// use figma_components_client::FigmaClient;
/// use figma_components_core::FigmaConfig;
/// use figma_components_extract::ComponentStore;
/// use figma_components_server::service::ExtractorService;
/// use std::sync::Arc;
///
/// # fn example() -> figma_components_core::Result<()> {
/// let config = FigmaConfig::from_env()?;
/// let client = FigmaClient::new(&config)?;
/// let service = ExtractorService::new(Arc::new(client), ComponentStore::new(config.output_dir()));
/// // Service implements rmcp ServerHandler trait
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ExtractorService {
    /// Where the Figma document comes from
    source: Arc<dyn DocumentSource>,

    /// Output directory for component files
    store: Arc<ComponentStore>,

    /// Tool router for MCP protocol
    tool_router: ToolRouter<Self>,
}

impl ExtractorService {
    /// Creates a new extractor service.
    #[must_use]
    pub fn new(source: Arc<dyn DocumentSource>, store: ComponentStore) -> Self {
        Self {
            source,
            store: Arc::new(store),
            tool_router: Self::tool_router(),
        }
    }

    /// Returns the component store.
    #[must_use]
    pub fn store(&self) -> &ComponentStore {
        &self.store
    }

    /// Runs one extraction and converts the outcome into a tool result.
    async fn run_extraction(&self, options: ScanOptions) -> Result<CallToolResult, McpError> {
        let file = match self.source.fetch_document().await {
            Ok(file) => file,
            Err(e) => return Ok(extraction_failed(&e)),
        };
        tracing::debug!(file = ?file.name, version = ?file.version, "Fetched Figma file");

        // Scan and persist (existence checks and writes wrapped in spawn_blocking)
        let store = Arc::clone(&self.store);
        let extracted = tokio::task::spawn_blocking(move || {
            scan_and_persist(&file.document, &options, &store)
        })
        .await
        .map_err(|e| McpError::internal_error(format!("Task join error: {e}"), None))?;

        let (outcome, report) = match extracted {
            Ok(extracted) => extracted,
            Err(e) => return Ok(extraction_failed(&e)),
        };

        let summary = outcome.report();
        let result = ExtractionResult::new(outcome, report, self.store.dir());

        tracing::info!(
            processed = result.processed_count,
            written = result.written.len(),
            skipped = result.skipped.len(),
            "Extraction complete"
        );

        Ok(CallToolResult::success(vec![
            Content::text(summary),
            Content::text(serde_json::to_string_pretty(&result).map_err(|e| {
                McpError::internal_error(format!("Failed to serialize result: {e}"), None)
            })?),
        ]))
    }
}

impl fmt::Debug for ExtractorService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractorService")
            .field("store", &self.store)
            .field("tool_router", &self.tool_router)
            .finish_non_exhaustive()
    }
}

#[tool_router]
impl ExtractorService {
    /// Extract every component set on the `Components` page.
    #[tool(
        description = "Extract every component set from the Figma file's Components page into simplified JSON files. Existing files are kept."
    )]
    async fn extract_all_components(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("Extracting all components");
        self.run_extraction(ScanOptions::all()).await
    }

    /// Extract only component sets that have no output file yet.
    #[tool(
        description = "Extract only the component sets that have not been extracted yet (no JSON file in the components directory)."
    )]
    async fn extract_missing_components(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("Extracting missing components");
        self.run_extraction(ScanOptions::missing()).await
    }

    /// Extract the component set whose normalized name matches `name`.
    #[tool(
        description = "Extract a single component set by name. Matching ignores case, spaces and punctuation, so 'button group' matches 'Button-Group'."
    )]
    async fn extract_component(
        &self,
        Parameters(params): Parameters<ExtractComponentParams>,
    ) -> Result<CallToolResult, McpError> {
        if to_pascal_case(&params.name).is_empty() {
            return Err(McpError::invalid_params(
                "name must contain at least one letter or digit",
                None,
            ));
        }

        tracing::info!(name = %params.name, "Extracting component");
        self.run_extraction(ScanOptions::named(params.name)).await
    }
}

#[tool_handler]
impl ServerHandler for ExtractorService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Extract Figma component sets into simplified JSON. \
                 Use extract_all_components for a full run, extract_missing_components \
                 to fill gaps, or extract_component with a name for a single component."
                    .to_string(),
            ),
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Scans `document` against the store and writes what was processed.
///
/// Touches the filesystem; call from a blocking context.
fn scan_and_persist(
    document: &FigmaNode,
    options: &ScanOptions,
    store: &ComponentStore,
) -> figma_components_core::Result<(ScanOutcome, PersistReport)> {
    let outcome = scan(document, options, store)?;
    let report = store.write_all(&outcome.components)?;
    Ok((outcome, report))
}

/// Builds the error payload returned for a failed extraction.
fn extraction_failed(error: &Error) -> CallToolResult {
    tracing::error!(error = %error, "Extraction failed");
    CallToolResult::error(vec![Content::text(format!(
        "Error extracting components: {error}"
    ))])
}
