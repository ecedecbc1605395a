//! MCP server library for Figma component extraction.
//!
//! This crate exposes the component extractor as MCP tools over stdio. A
//! client asks for an extraction, the server fetches the configured Figma
//! file, scans its `Components` page and writes one JSON file per component
//! set into the components directory.
//!
//! # Architecture
//!
//! The server implements three tools:
//!
//! 1. **`extract_all_components`** - Extract every component set
//! 2. **`extract_missing_components`** - Extract component sets that have no file yet
//! 3. **`extract_component`** - Extract one component set by name
//!
//! Each successful call returns a text summary followed by a JSON block with
//! the processed components and the files written. Failures come back as
//! tool errors with the message `Error extracting components: ...`.
//!
//! # Examples
//!
//! ```no_run
//! use figma_components_client::FigmaClient;
//! use figma_components_core::FigmaConfig;
//! use figma_components_extract::ComponentStore;
//! use figma_components_server::service::ExtractorService;
//! use rmcp::transport::stdio;
//! use rmcp::ServiceExt;
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = FigmaConfig::from_env()?;
//! let client = Arc::new(FigmaClient::new(&config)?);
//! let store = ComponentStore::new(config.output_dir());
//!
//! let service = ExtractorService::new(client, store).serve(stdio()).await?;
//! service.waiting().await?;
//! # Ok(())
//! # }
//! ```

pub mod service;
pub mod types;

pub use service::ExtractorService;
pub use types::{ExtractComponentParams, ExtractionResult};
