//! Error types for Figma component extraction.
//!
//! Every library crate in the workspace reports failures through this single
//! enum so that the MCP server can turn any of them into a tool error payload.
//!
//! # Examples
//!
//! ```
//! use figma_components_core::{Error, Result};
//!
//! fn require_token(token: &str) -> Result<()> {
//!     if token.is_empty() {
//!         return Err(Error::ConfigError {
//!             message: "FIGMA_TOKEN cannot be empty".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = require_token("").unwrap_err();
//! assert!(err.is_config_error());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Figma component extraction.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error.
    ///
    /// Raised when the access token or file key is missing or malformed.
    /// The server refuses to start when this occurs.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// The Figma API answered with a non-success status.
    #[error("Failed to fetch Figma file: {status} {status_text} - {body}")]
    FetchFailed {
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase for the status
        status_text: String,
        /// Response body returned by the API
        body: String,
    },

    /// The HTTP request could not be performed at all.
    ///
    /// Covers DNS failures, refused connections, TLS errors, and bodies
    /// that could not be read.
    #[error("Figma API request failed: {message}")]
    RequestFailed {
        /// Description of the transport failure
        message: String,
        /// Underlying error cause
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A page required by the extraction is absent from the document.
    #[error("{page} page not found in Figma file")]
    PageNotFound {
        /// Name of the page that was looked up
        page: String,
    },

    /// Processing of a single component set failed.
    ///
    /// Aborts the whole scan; no partial results are reported.
    #[error("Error processing component {component}: {message}")]
    ComponentFailed {
        /// Raw name of the offending component set
        component: String,
        /// Underlying error text
        message: String,
    },

    /// Serialization/deserialization error.
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Description of the serialization failure
        message: String,
        /// Underlying serde error
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Filesystem error while persisting components.
    #[error("I/O error at {}: {source}", path.display())]
    IoError {
        /// Path being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Returns `true` if this is a configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use figma_components_core::Error;
    ///
    /// let err = Error::ConfigError {
    ///     message: "missing FIGMA_FILE".to_string(),
    /// };
    /// assert!(err.is_config_error());
    /// ```
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    /// Returns `true` if this error came from talking to the Figma API.
    ///
    /// # Examples
    ///
    /// ```
    /// use figma_components_core::Error;
    ///
    /// let err = Error::FetchFailed {
    ///     status: 403,
    ///     status_text: "Forbidden".to_string(),
    ///     body: String::new(),
    /// };
    /// assert!(err.is_fetch_error());
    /// ```
    #[must_use]
    pub const fn is_fetch_error(&self) -> bool {
        matches!(self, Self::FetchFailed { .. } | Self::RequestFailed { .. })
    }

    /// Returns `true` if the document is missing an expected page.
    ///
    /// # Examples
    ///
    /// ```
    /// use figma_components_core::Error;
    ///
    /// let err = Error::PageNotFound {
    ///     page: "Components".to_string(),
    /// };
    /// assert!(err.is_structural_error());
    /// ```
    #[must_use]
    pub const fn is_structural_error(&self) -> bool {
        matches!(self, Self::PageNotFound { .. })
    }

    /// Returns `true` if a single component set failed to process.
    #[must_use]
    pub const fn is_component_error(&self) -> bool {
        matches!(self, Self::ComponentFailed { .. })
    }

    /// Returns the HTTP status code for fetch failures.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::FetchFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

/// Result type alias for extraction operations.
///
/// # Examples
///
/// ```
/// use figma_components_core::{Error, Result};
///
/// fn find_page(found: bool) -> Result<()> {
///     if !found {
///         return Err(Error::PageNotFound {
///             page: "Components".to_string(),
///         });
///     }
///     Ok(())
/// }
///
/// assert!(find_page(true).is_ok());
/// assert!(find_page(false).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;
