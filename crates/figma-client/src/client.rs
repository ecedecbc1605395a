//! HTTP client for `GET /v1/files/:key`.

use crate::DocumentSource;
use async_trait::async_trait;
use figma_components_core::{Error, FigmaConfig, FigmaFile, FileKey, Result};
use secrecy::{ExposeSecret, SecretString};

/// Header carrying a personal access token.
pub const FIGMA_TOKEN_HEADER: &str = "X-Figma-Token";

const USER_AGENT: &str = concat!("figma-components/", env!("CARGO_PKG_VERSION"));

/// Client for the Figma REST API.
///
/// No timeout or retry is configured; a request lasts as long as the
/// underlying connection does.
#[derive(Debug)]
pub struct FigmaClient {
    http: reqwest::Client,
    api_base: String,
    token: SecretString,
    file_key: FileKey,
}

impl FigmaClient {
    /// Creates a client for the file named in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequestFailed`] if the HTTP client cannot be
    /// initialized (for example when no TLS backend is available).
    pub fn new(config: &FigmaConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::RequestFailed {
                message: format!("Failed to build HTTP client: {e}"),
                source: Box::new(e),
            })?;

        Ok(Self {
            http,
            api_base: config.api_base().to_string(),
            token: SecretString::from(config.token().to_string()),
            file_key: config.file_key().clone(),
        })
    }

    /// Returns the file key this client fetches by default.
    #[must_use]
    pub const fn file_key(&self) -> &FileKey {
        &self.file_key
    }

    /// Returns the URL of a file's document endpoint.
    ///
    /// # Examples
    ///
    /// ```
    /// use figma_components_client::FigmaClient;
    /// use figma_components_core::{FigmaConfig, FileKey};
    ///
    /// let config = FigmaConfig::builder().token("t").file_key("abc").build().unwrap();
    /// let client = FigmaClient::new(&config).unwrap();
    ///
    /// assert_eq!(
    ///     client.file_url(&FileKey::new("xyz")),
    ///     "https://api.figma.com/v1/files/xyz"
    /// );
    /// ```
    #[must_use]
    pub fn file_url(&self, file_key: &FileKey) -> String {
        format!("{}/v1/files/{}", self.api_base, file_key)
    }

    /// Fetches and decodes a file's document tree.
    ///
    /// # Errors
    ///
    /// - [`Error::RequestFailed`] if the request cannot be sent or the body
    ///   cannot be read
    /// - [`Error::FetchFailed`] if the API answers with a non-success status
    /// - [`Error::SerializationError`] if the body is not a Figma file
    pub async fn get_file(&self, file_key: &FileKey) -> Result<FigmaFile> {
        let url = self.file_url(file_key);
        tracing::info!(file_key = %file_key, "Fetching Figma file data");

        let response = self
            .http
            .get(&url)
            .header(FIGMA_TOKEN_HEADER, self.token.expose_secret())
            .send()
            .await
            .map_err(|e| Error::RequestFailed {
                message: format!("Failed to call Figma API: {e}"),
                source: Box::new(e),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Figma API returned an error");
            return Err(Error::FetchFailed {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(|e| Error::RequestFailed {
            message: format!("Failed to read Figma API response: {e}"),
            source: Box::new(e),
        })?;

        let file: FigmaFile =
            serde_json::from_slice(&bytes).map_err(|e| Error::SerializationError {
                message: format!("Failed to parse Figma file: {e}"),
                source: Some(e),
            })?;

        tracing::info!(
            pages = file.document.children().len(),
            "Successfully fetched Figma file data"
        );
        Ok(file)
    }
}

#[async_trait]
impl DocumentSource for FigmaClient {
    async fn fetch_document(&self) -> Result<FigmaFile> {
        self.get_file(&self.file_key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_base: &str) -> FigmaConfig {
        FigmaConfig::builder()
            .token("figd_test")
            .file_key("abc123")
            .api_base(api_base)
            .build()
            .unwrap()
    }

    #[test]
    fn test_file_url_uses_api_base() {
        let client = FigmaClient::new(&config("http://localhost:8080/")).unwrap();
        assert_eq!(
            client.file_url(client.file_key()),
            "http://localhost:8080/v1/files/abc123"
        );
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let client = FigmaClient::new(&config("https://api.figma.com")).unwrap();
        assert!(!format!("{client:?}").contains("figd_test"));
    }

    #[test]
    fn test_user_agent_names_crate_version() {
        assert!(USER_AGENT.starts_with("figma-components/"));
    }
}
