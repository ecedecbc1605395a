//! Persistence of processed components.
//!
//! Each component is written to `{dir}/{PascalName}.json`. Existing files
//! are never overwritten: the write is skipped and reported as such.
//!
//! # Examples
//!
//! ```
//! use figma_components_core::FigmaNode;
//! use figma_components_extract::{ComponentStore, ExistenceCheck, ProcessedComponent};
//! # use tempfile::TempDir;
//!
//! # let temp_dir = TempDir::new().unwrap();
//! let store = ComponentStore::new(temp_dir.path().join("components"));
//!
//! let node: FigmaNode = serde_json::from_value(serde_json::json!({
//!     "name": "Button",
//!     "children": [{ "name": "state=Hover" }]
//! }))
//! .unwrap();
//! let component = ProcessedComponent::from_component_set(&node).unwrap();
//!
//! let report = store.write_all(&[component]).unwrap();
//! assert_eq!(report.written.len(), 1);
//! assert!(store.exists(&report.written[0].name));
//! ```

use crate::component::ProcessedComponent;
use crate::scanner::ExistenceCheck;
use figma_components_core::{ComponentName, Error, Result};
use serde::Serialize;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Directory of extracted component files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentStore {
    dir: PathBuf,
}

/// What happened to a single component file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteStatus {
    /// The file was created
    Written,
    /// A file with this name already existed and was left untouched
    Skipped,
    /// The component name is empty, so no file name could be derived
    Unnamed,
}

/// Outcome of writing one component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredComponent {
    /// Component name
    pub name: ComponentName,

    /// Dashed slug of the name (`TextField` → `text-field`)
    pub slug: String,

    /// Target file path
    pub path: PathBuf,

    /// Whether the file was created
    pub status: WriteStatus,
}

/// Outcome of writing a batch of components.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PersistReport {
    /// Files created by this batch
    pub written: Vec<StoredComponent>,

    /// Files that already existed, and components without a usable name
    pub skipped: Vec<StoredComponent>,
}

impl ComponentStore {
    /// Creates a store rooted at `dir`. Nothing is created until a write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the store directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file path used for a component.
    #[must_use]
    pub fn path_for(&self, name: &ComponentName) -> PathBuf {
        self.dir.join(name.file_name())
    }

    /// Creates the store directory if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IoError`] if the directory cannot be created.
    pub fn ensure_dir(&self) -> Result<()> {
        if self.dir.is_dir() {
            tracing::debug!(dir = %self.dir.display(), "Components directory already exists");
            return Ok(());
        }

        fs::create_dir_all(&self.dir).map_err(|source| Error::IoError {
            path: self.dir.clone(),
            source,
        })?;
        tracing::info!(dir = %self.dir.display(), "Created components directory");
        Ok(())
    }

    /// Writes one component unless its file already exists.
    ///
    /// The JSON is written to a temporary file in the store directory and
    /// moved into place without replacing an existing file, so a failed
    /// write never leaves a partial `{Name}.json` behind. A component with
    /// an empty name is not written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IoError`] if the directory or file cannot be
    /// written, or [`Error::SerializationError`] if encoding fails.
    pub fn write(&self, component: &ProcessedComponent) -> Result<StoredComponent> {
        let path = self.path_for(&component.name);
        let stored = |status| StoredComponent {
            name: component.name.clone(),
            slug: component.name.slug(),
            path: path.clone(),
            status,
        };

        if component.name.is_empty() {
            tracing::warn!("Component name has no letters or digits. Skipping write.");
            return Ok(stored(WriteStatus::Unnamed));
        }

        let json = component.to_json_pretty()?;
        self.ensure_dir()?;

        let io_error = |source: std::io::Error| Error::IoError {
            path: path.clone(),
            source,
        };

        let mut staged = NamedTempFile::new_in(&self.dir).map_err(io_error)?;
        staged.write_all(json.as_bytes()).map_err(io_error)?;

        match staged.persist_noclobber(&path) {
            Ok(_) => {
                tracing::info!(
                    component = %component.name,
                    path = %path.display(),
                    "Saved component"
                );
                Ok(stored(WriteStatus::Written))
            }
            Err(e) if e.error.kind() == ErrorKind::AlreadyExists => {
                tracing::info!(path = %path.display(), "File already exists. Skipping write.");
                Ok(stored(WriteStatus::Skipped))
            }
            Err(e) => Err(io_error(e.error)),
        }
    }

    /// Writes a batch of components, stopping at the first I/O failure.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by [`ComponentStore::write`].
    pub fn write_all(&self, components: &[ProcessedComponent]) -> Result<PersistReport> {
        let mut report = PersistReport::default();

        for component in components {
            let stored = self.write(component)?;
            match stored.status {
                WriteStatus::Written => report.written.push(stored),
                WriteStatus::Skipped | WriteStatus::Unnamed => report.skipped.push(stored),
            }
        }

        Ok(report)
    }

    /// Reads a previously written component.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IoError`] if the file cannot be read, or
    /// [`Error::SerializationError`] if it does not hold a component.
    pub fn read(&self, name: &ComponentName) -> Result<ProcessedComponent> {
        let path = self.path_for(name);
        let json = fs::read_to_string(&path).map_err(|source| Error::IoError { path, source })?;
        Ok(serde_json::from_str(&json)?)
    }
}

impl ExistenceCheck for ComponentStore {
    fn exists(&self, name: &ComponentName) -> bool {
        self.path_for(name).exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figma_components_core::FigmaNode;
    use serde_json::json;
    use tempfile::TempDir;

    fn component(name: &str, variant: &str) -> ProcessedComponent {
        let node: FigmaNode = serde_json::from_value(json!({
            "name": name,
            "type": "COMPONENT_SET",
            "children": [{ "name": variant }]
        }))
        .unwrap();
        ProcessedComponent::from_component_set(&node).unwrap()
    }

    #[test]
    fn test_write_creates_directory_and_file() {
        let temp = TempDir::new().unwrap();
        let store = ComponentStore::new(temp.path().join("nested").join("components"));

        let stored = store.write(&component("text field", "state=Focus")).unwrap();

        assert_eq!(stored.status, WriteStatus::Written);
        assert_eq!(stored.slug, "text-field");
        assert_eq!(stored.path, store.dir().join("TextField.json"));
        assert!(stored.path.is_file());
    }

    #[test]
    fn test_write_skips_existing_file() {
        let temp = TempDir::new().unwrap();
        let store = ComponentStore::new(temp.path());

        store.write(&component("Button", "state=Hover")).unwrap();
        let second = store.write(&component("Button", "state=Pressed")).unwrap();

        assert_eq!(second.status, WriteStatus::Skipped);
        let kept = store.read(&ComponentName::from_raw("Button")).unwrap();
        assert_eq!(kept.prop("state").unwrap().label(), "Hover");
    }

    #[test]
    fn test_write_all_reports_written_and_skipped() {
        let temp = TempDir::new().unwrap();
        let store = ComponentStore::new(temp.path());
        fs::write(temp.path().join("Card.json"), "{}").unwrap();

        let report = store
            .write_all(&[component("Card", "a=b"), component("Chip", "a=b")])
            .unwrap();

        assert_eq!(report.written.len(), 1);
        assert_eq!(report.written[0].name.as_str(), "Chip");
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(fs::read_to_string(temp.path().join("Card.json")).unwrap(), "{}");
    }

    #[test]
    fn test_existence_check() {
        let temp = TempDir::new().unwrap();
        let store = ComponentStore::new(temp.path());
        let name = ComponentName::from_raw("icon button");

        assert!(!store.exists(&name));
        fs::write(temp.path().join("IconButton.json"), "{}").unwrap();
        assert!(store.exists(&name));
        assert!(store.exists(&ComponentName::from_raw("Icon-Button")));
    }

    #[test]
    fn test_written_file_is_pretty_json() {
        let temp = TempDir::new().unwrap();
        let store = ComponentStore::new(temp.path());
        let stored = store.write(&component("Toggle", "on=True")).unwrap();

        let content = fs::read_to_string(stored.path).unwrap();
        assert!(content.starts_with("{\n  \"name\": \"Toggle\""));
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["props"], json!([{ "name": "on", "type": "boolean" }]));
    }

    #[test]
    fn test_write_leaves_no_staging_files() {
        let temp = TempDir::new().unwrap();
        let store = ComponentStore::new(temp.path());
        fs::write(temp.path().join("Card.json"), "{}").unwrap();

        store.write(&component("Card", "a=b")).unwrap();
        store.write(&component("Chip", "a=b")).unwrap();

        let mut entries: Vec<String> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        entries.sort();
        assert_eq!(entries, ["Card.json", "Chip.json"]);
    }

    #[test]
    fn test_unnamed_component_is_not_written() {
        let temp = TempDir::new().unwrap();
        let store = ComponentStore::new(temp.path().join("components"));

        let report = store
            .write_all(&[component("★", "tone=Gold"), component("Badge", "tone=Info")])
            .unwrap();

        assert_eq!(report.written.len(), 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].status, WriteStatus::Unnamed);
        assert!(!store.dir().join(".json").exists());
    }

    #[test]
    fn test_read_missing_file() {
        let temp = TempDir::new().unwrap();
        let store = ComponentStore::new(temp.path());
        let err = store.read(&ComponentName::from_raw("Nope")).unwrap_err();
        assert!(matches!(err, Error::IoError { .. }));
    }
}
