//! Configuration for talking to the Figma API.
//!
//! The access token and file key are required before any tool runs; the
//! server treats a missing value as a fatal startup error.
//!
//! # Environment
//!
//! | variable         | required | default                 |
//! |------------------|----------|-------------------------|
//! | `FIGMA_TOKEN`    | yes      |                         |
//! | `FIGMA_FILE`     | yes      |                         |
//! | `FIGMA_API_BASE` | no       | `https://api.figma.com` |
//! | `PROJECT_DIR`    | no       | current directory       |
//!
//! Extracted components are written to `{PROJECT_DIR}/components`.
//!
//! # Examples
//!
//! ```
//! use figma_components_core::FigmaConfig;
//!
//! let config = FigmaConfig::builder()
//!     .token("figd_example")
//!     .file_key("EORq81rMJItb19P45kHfFa")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_base(), "https://api.figma.com");
//! ```

use crate::{Error, FileKey, Result};
use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use std::path::{Path, PathBuf};

/// Environment variable holding the personal access token.
pub const TOKEN_VAR: &str = "FIGMA_TOKEN";
/// Environment variable holding the file key.
pub const FILE_VAR: &str = "FIGMA_FILE";
/// Environment variable overriding the API base URL.
pub const API_BASE_VAR: &str = "FIGMA_API_BASE";
/// Environment variable pointing at the project receiving components.
pub const PROJECT_DIR_VAR: &str = "PROJECT_DIR";

const DEFAULT_API_BASE: &str = "https://api.figma.com";
const COMPONENTS_DIR: &str = "components";

/// Runtime configuration for the extractor.
///
/// The token is held as a [`SecretString`] and never appears in `Debug`
/// output.
pub struct FigmaConfig {
    token: SecretString,
    file_key: FileKey,
    api_base: String,
    output_dir: PathBuf,
}

impl FigmaConfig {
    /// Creates a new configuration builder.
    #[must_use]
    pub fn builder() -> FigmaConfigBuilder {
        FigmaConfigBuilder::new()
    }

    /// Loads configuration from the process environment.
    ///
    /// No `.env` file is read; variables come from the launching MCP client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if `FIGMA_TOKEN` or `FIGMA_FILE` is
    /// missing or the resulting configuration fails validation.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as missing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if a required variable is missing or
    /// the resulting configuration fails validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use figma_components_core::FigmaConfig;
    /// use std::collections::HashMap;
    ///
    /// let vars = HashMap::from([
    ///     ("FIGMA_TOKEN", "figd_x"),
    ///     ("FIGMA_FILE", "abc123"),
    ///     ("PROJECT_DIR", "/srv/app"),
    /// ]);
    ///
    /// let config = FigmaConfig::from_lookup(|k| vars.get(k).map(|v| (*v).to_string())).unwrap();
    /// assert_eq!(config.output_dir().to_str(), Some("/srv/app/components"));
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let missing: Vec<&str> = [TOKEN_VAR, FILE_VAR]
            .into_iter()
            .filter(|key| var(*key).is_none())
            .collect();

        if !missing.is_empty() {
            return Err(Error::ConfigError {
                message: format!(
                    "Missing required environment variables {}",
                    missing.join(" or ")
                ),
            });
        }

        let mut builder = Self::builder();
        if let Some(token) = var(TOKEN_VAR) {
            builder = builder.token(token);
        }
        if let Some(file_key) = var(FILE_VAR) {
            builder = builder.file_key(file_key);
        }
        if let Some(api_base) = var(API_BASE_VAR) {
            builder = builder.api_base(api_base);
        }
        if let Some(project_dir) = var(PROJECT_DIR_VAR) {
            builder = builder.project_dir(project_dir);
        }

        builder.build()
    }

    /// Returns the access token.
    #[must_use]
    pub fn token(&self) -> &str {
        self.token.expose_secret()
    }

    /// Returns the file key.
    #[must_use]
    pub const fn file_key(&self) -> &FileKey {
        &self.file_key
    }

    /// Returns the API base URL without a trailing slash.
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Returns the directory receiving extracted component files.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the token is empty
    /// - the file key is empty or not alphanumeric
    /// - the API base is empty or not an http(s) URL
    /// - the output directory path is empty
    pub fn validate(&self) -> Result<()> {
        if self.token.expose_secret().trim().is_empty() {
            return Err(config_error("Figma token cannot be empty"));
        }

        if !self.file_key.is_well_formed() {
            return Err(config_error(format!(
                "Invalid Figma file key '{}': expected letters and digits only",
                self.file_key
            )));
        }

        if !(self.api_base.starts_with("https://") || self.api_base.starts_with("http://")) {
            return Err(config_error(format!(
                "Invalid API base '{}': expected an http(s) URL",
                self.api_base
            )));
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err(config_error("Output directory path cannot be empty"));
        }

        Ok(())
    }
}

impl fmt::Debug for FigmaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FigmaConfig")
            .field("token", &"[REDACTED]")
            .field("file_key", &self.file_key)
            .field("api_base", &self.api_base)
            .field("output_dir", &self.output_dir)
            .finish()
    }
}

fn config_error(message: impl Into<String>) -> Error {
    Error::ConfigError {
        message: message.into(),
    }
}

/// Builder for [`FigmaConfig`].
///
/// # Examples
///
/// ```
/// use figma_components_core::FigmaConfig;
///
/// let config = FigmaConfig::builder()
///     .token("figd_example")
///     .file_key("abc123")
///     .api_base("http://127.0.0.1:8080/")
///     .output_dir("/tmp/components")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.api_base(), "http://127.0.0.1:8080");
/// ```
#[derive(Default)]
pub struct FigmaConfigBuilder {
    token: Option<SecretString>,
    file_key: Option<FileKey>,
    api_base: Option<String>,
    output_dir: Option<PathBuf>,
}

impl FigmaConfigBuilder {
    /// Creates a new builder with no values set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the access token.
    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(SecretString::from(token.into()));
        self
    }

    /// Sets the file key.
    #[must_use]
    pub fn file_key(mut self, file_key: impl Into<FileKey>) -> Self {
        self.file_key = Some(file_key.into());
        self
    }

    /// Sets the API base URL. A trailing slash is removed.
    #[must_use]
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        let api_base: String = api_base.into();
        self.api_base = Some(api_base.trim_end_matches('/').to_string());
        self
    }

    /// Sets the project directory; components go to its `components` child.
    #[must_use]
    pub fn project_dir(mut self, project_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(project_dir.into().join(COMPONENTS_DIR));
        self
    }

    /// Sets the output directory directly.
    #[must_use]
    pub fn output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(output_dir.into());
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the token or file key was not set,
    /// or if [`FigmaConfig::validate`] rejects the values.
    pub fn build(self) -> Result<FigmaConfig> {
        let token = self
            .token
            .ok_or_else(|| config_error(format!("{TOKEN_VAR} is required")))?;
        let file_key = self
            .file_key
            .ok_or_else(|| config_error(format!("{FILE_VAR} is required")))?;

        let config = FigmaConfig {
            token,
            file_key,
            api_base: self
                .api_base
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            output_dir: self
                .output_dir
                .unwrap_or_else(|| PathBuf::from(".").join(COMPONENTS_DIR)),
        };

        config.validate()?;
        tracing::debug!(?config, "loaded Figma configuration");
        Ok(config)
    }
}

impl fmt::Debug for FigmaConfigBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FigmaConfigBuilder")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("file_key", &self.file_key)
            .field("api_base", &self.api_base)
            .field("output_dir", &self.output_dir)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_builder_defaults() {
        let config = FigmaConfig::builder()
            .token("figd_abc")
            .file_key("abc123")
            .build()
            .unwrap();

        assert_eq!(config.token(), "figd_abc");
        assert_eq!(config.file_key().as_str(), "abc123");
        assert_eq!(config.api_base(), DEFAULT_API_BASE);
        assert_eq!(config.output_dir(), Path::new("./components"));
    }

    #[test]
    fn test_builder_missing_token() {
        let err = FigmaConfig::builder().file_key("abc").build().unwrap_err();
        assert!(err.is_config_error());
        assert!(err.to_string().contains("FIGMA_TOKEN"));
    }

    #[test]
    fn test_builder_missing_file_key() {
        let err = FigmaConfig::builder().token("t").build().unwrap_err();
        assert!(err.is_config_error());
        assert!(err.to_string().contains("FIGMA_FILE"));
    }

    #[test]
    fn test_validate_rejects_malformed_file_key() {
        let err = FigmaConfig::builder()
            .token("t")
            .file_key("../../etc")
            .build()
            .unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_validate_rejects_non_http_api_base() {
        let err = FigmaConfig::builder()
            .token("t")
            .file_key("abc")
            .api_base("ftp://example.com")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("ftp://example.com"));
    }

    #[test]
    fn test_validate_rejects_blank_token() {
        let err = FigmaConfig::builder()
            .token("   ")
            .file_key("abc")
            .build()
            .unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_from_lookup_full() {
        let config = FigmaConfig::from_lookup(lookup_from(&[
            ("FIGMA_TOKEN", "figd_abc"),
            ("FIGMA_FILE", "abc123"),
            ("FIGMA_API_BASE", "http://localhost:9000/"),
            ("PROJECT_DIR", "/work"),
        ]))
        .unwrap();

        assert_eq!(config.api_base(), "http://localhost:9000");
        assert_eq!(config.output_dir(), Path::new("/work/components"));
    }

    #[test]
    fn test_from_lookup_reports_all_missing_vars() {
        let err = FigmaConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: Missing required environment variables FIGMA_TOKEN or FIGMA_FILE"
        );
    }

    #[test]
    fn test_from_lookup_empty_value_is_missing() {
        let err = FigmaConfig::from_lookup(lookup_from(&[
            ("FIGMA_TOKEN", ""),
            ("FIGMA_FILE", "abc"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("FIGMA_TOKEN"));
        assert!(!err.to_string().contains("FIGMA_FILE"));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = FigmaConfig::builder()
            .token("figd_super_secret")
            .file_key("abc")
            .build()
            .unwrap();

        let debug = format!("{config:?}");
        assert!(!debug.contains("figd_super_secret"));
        assert!(debug.contains("[REDACTED]"));

        let builder_debug = format!("{:?}", FigmaConfig::builder().token("figd_super_secret"));
        assert!(!builder_debug.contains("figd_super_secret"));
    }
}
