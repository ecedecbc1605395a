//! Document source trait.

use async_trait::async_trait;
use figma_components_core::{FigmaFile, Result};
use std::sync::Arc;

/// Provides the Figma document to extract components from.
///
/// Fetching is the only suspension point of an extraction; everything after
/// it runs synchronously on the returned tree.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use figma_components_client::DocumentSource;
/// use figma_components_core::{FigmaFile, Result};
///
/// struct Fixed(FigmaFile);
///
/// #[async_trait]
/// impl DocumentSource for Fixed {
///     async fn fetch_document(&self) -> Result<FigmaFile> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetches the configured file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be retrieved or decoded.
    async fn fetch_document(&self) -> Result<FigmaFile>;
}

#[async_trait]
impl<T: DocumentSource + ?Sized> DocumentSource for Arc<T> {
    async fn fetch_document(&self) -> Result<FigmaFile> {
        (**self).fetch_document().await
    }
}
