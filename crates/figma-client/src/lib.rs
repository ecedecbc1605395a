//! Figma REST API client.
//!
//! Fetches the document tree of a Figma file. The extractor only needs a
//! [`DocumentSource`]; [`FigmaClient`] is the production implementation,
//! tests substitute in-memory documents.
//!
//! # Examples
//!
//! ```no_run
//! use figma_components_client::{DocumentSource, FigmaClient};
//! use figma_components_core::FigmaConfig;
//!
//! # async fn example() -> figma_components_core::Result<()> {
//! let config = FigmaConfig::from_env()?;
//! let client = FigmaClient::new(&config)?;
//!
//! let file = client.fetch_document().await?;
//! println!("{} pages", file.document.children().len());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod client;
mod source;

pub use client::{FIGMA_TOKEN_HEADER, FigmaClient};
pub use source::DocumentSource;
