//! Strong domain types for Figma component extraction.
//!
//! Newtypes keep file keys and component names apart from the many other
//! strings flowing through the extractor.
//!
//! # Examples
//!
//! ```
//! use figma_components_core::{ComponentName, FileKey};
//!
//! let file = FileKey::new("EORq81rMJItb19P45kHfFa");
//! let component = ComponentName::from_raw("primary button");
//! assert_eq!(component.as_str(), "PrimaryButton");
//! ```

use crate::naming::{camel_case_to_dash, to_pascal_case};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Figma file key (newtype over String).
///
/// The key is the path segment following `/file/` or `/design/` in a Figma
/// URL.
///
/// # Examples
///
/// ```
/// use figma_components_core::FileKey;
///
/// let key = FileKey::new("abc123");
/// assert_eq!(key.as_str(), "abc123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileKey(String);

impl FileKey {
    /// Creates a new file key.
    #[inline]
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the file key as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the key is non-empty and purely alphanumeric.
    ///
    /// # Examples
    ///
    /// ```
    /// use figma_components_core::FileKey;
    ///
    /// assert!(FileKey::new("EORq81rMJItb19P45kHfFa").is_well_formed());
    /// assert!(!FileKey::new("../etc").is_well_formed());
    /// assert!(!FileKey::new("").is_well_formed());
    /// ```
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        !self.0.is_empty() && self.0.chars().all(|c| c.is_ascii_alphanumeric())
    }
}

impl fmt::Display for FileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for FileKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for FileKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// `PascalCase` name of a processed component.
///
/// Always derived from the raw design-tool name, so two raw names that
/// normalize identically yield equal `ComponentName`s. Used as the output
/// file stem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentName(String);

impl ComponentName {
    /// Derives a component name from a raw node name.
    ///
    /// # Examples
    ///
    /// ```
    /// use figma_components_core::ComponentName;
    ///
    /// assert_eq!(ComponentName::from_raw("text_field").as_str(), "TextField");
    /// ```
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        Self(to_pascal_case(raw))
    }

    /// Returns the name as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the raw name contained no word characters.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the dashed slug of this name (`TextField` → `text-field`).
    #[must_use]
    pub fn slug(&self) -> String {
        camel_case_to_dash(&self.0)
    }

    /// Returns the JSON file name used when persisting this component.
    ///
    /// # Examples
    ///
    /// ```
    /// use figma_components_core::ComponentName;
    ///
    /// assert_eq!(ComponentName::from_raw("button").file_name(), "Button.json");
    /// ```
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.json", self.0)
    }

    /// Consumes the name and returns the inner `String`.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ComponentName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // FileKey tests
    #[test]
    fn test_file_key_creation() {
        let key = FileKey::new("abc");
        assert_eq!(key.as_str(), "abc");
        assert_eq!(format!("{key}"), "abc");
    }

    #[test]
    fn test_file_key_from_string() {
        let key = FileKey::from("xyz".to_string());
        assert_eq!(key, FileKey::new("xyz"));
    }

    #[test]
    fn test_file_key_well_formed() {
        assert!(FileKey::new("A1b2").is_well_formed());
        assert!(!FileKey::new("a/b").is_well_formed());
        assert!(!FileKey::new("a b").is_well_formed());
    }

    // ComponentName tests
    #[test]
    fn test_component_name_from_raw() {
        assert_eq!(ComponentName::from_raw("Button").as_str(), "Button");
        assert_eq!(ComponentName::from_raw("button group").as_str(), "ButtonGroup");
    }

    #[test]
    fn test_component_name_same_component_equal() {
        assert_eq!(
            ComponentName::from_raw("icon-button"),
            ComponentName::from_raw("Icon Button")
        );
    }

    #[test]
    fn test_component_name_empty() {
        assert!(ComponentName::from_raw("===").is_empty());
    }

    #[test]
    fn test_component_name_slug_and_file_name() {
        let name = ComponentName::from_raw("text field");
        assert_eq!(name.slug(), "text-field");
        assert_eq!(name.file_name(), "TextField.json");
    }

    #[test]
    fn test_component_name_serializes_as_string() {
        let name = ComponentName::from_raw("card");
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"Card\"");
    }

    #[test]
    fn test_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FileKey>();
        assert_send_sync::<ComponentName>();
    }
}
