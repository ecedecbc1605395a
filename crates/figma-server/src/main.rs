//! MCP server entry point for Figma component extraction.
//!
//! # Usage
//!
//! Run the server via stdio transport:
//!
//! ```bash
//! FIGMA_TOKEN=... FIGMA_FILE=... figma-components
//! ```
//!
//! Or configure in `~/.config/claude/mcp.json`:
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "figma-components": {
//!       "command": "figma-components",
//!       "env": {
//!         "FIGMA_TOKEN": "figd_...",
//!         "FIGMA_FILE": "AbC123xYz",
//!         "PROJECT_DIR": "/path/to/project"
//!       }
//!     }
//!   }
//! }
//! ```

use anyhow::{Context, Result};
use figma_components_client::FigmaClient;
use figma_components_core::FigmaConfig;
use figma_components_extract::ComponentStore;
use figma_components_server::service::ExtractorService;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging to stderr (stdout is for MCP protocol)
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,figma_components_server=debug")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .init();

    tracing::info!(
        "Starting figma-components v{}",
        env!("CARGO_PKG_VERSION")
    );

    let config = FigmaConfig::from_env()
        .inspect_err(|e| tracing::error!(error = %e, "Invalid configuration"))
        .context("Failed to load configuration")?;
    tracing::info!(
        file_key = %config.file_key(),
        output_dir = %config.output_dir().display(),
        "Configuration loaded"
    );

    let client = FigmaClient::new(&config).context("Failed to create Figma client")?;
    let store = ComponentStore::new(config.output_dir());

    // Create and run the service with stdio transport
    let service = ExtractorService::new(Arc::new(client), store)
        .serve(stdio())
        .await?;
    service.waiting().await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
