//! Core types, configuration, and errors for Figma component extraction.
//!
//! This crate provides the foundational types shared by the client, the
//! extractor, and the MCP server crates of the workspace.
//!
//! # Architecture
//!
//! The core consists of:
//! - Strong domain types (`FileKey`, `ComponentName`)
//! - Error hierarchy with contextual information
//! - Configuration (`FigmaConfig`) loaded from the environment
//! - Naming rules (`to_pascal_case`, `to_camel_case`, `are_same_component`)
//! - The Figma document model (`FigmaFile`, `FigmaNode`)

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod config;
mod error;
mod types;

pub mod naming;
pub mod node;

pub use config::{FigmaConfig, FigmaConfigBuilder};
pub use error::{Error, Result};
pub use node::{FigmaFile, FigmaNode};
pub use naming::{are_same_component, normalize_name, to_camel_case, to_pascal_case};
pub use types::{ComponentName, FileKey};
