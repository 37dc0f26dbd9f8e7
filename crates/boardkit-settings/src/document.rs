//! Hierarchical settings document.
//!
//! A thin wrapper over a JSON value tree, addressed with JSON-pointer
//! paths ("/meta/name"). Unlike `Value::pointer_mut`, `set` creates
//! intermediate objects on the way down, so parameters can be stored
//! into an empty document in any order.
//!
//! Disk I/O is synchronous and all-or-nothing: a failed load yields an
//! empty document plus a warning, and a failed save leaves the on-disk
//! file and the in-memory tree unchanged.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use tracing::warn;

use crate::error::SettingsError;

/// A tree of typed parameters bound to JSON-pointer paths.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsDocument {
    root: Value,
}

impl SettingsDocument {
    /// An empty document.
    pub fn new() -> Self {
        Self {
            root: Value::Object(Default::default()),
        }
    }

    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Load from disk. A missing or corrupt file is not fatal: it is
    /// reported at warning level and an empty document is returned so
    /// the caller proceeds with defaults.
    pub fn load(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    warn!("Could not read settings file {}: {err}", path.display());
                }
                return Self::new();
            }
        };
        match serde_json::from_str(&content) {
            Ok(root) => Self { root },
            Err(err) => {
                warn!(
                    "Settings file {} is corrupt ({err}), using defaults",
                    path.display()
                );
                Self::new()
            }
        }
    }

    /// Save to disk as pretty-printed JSON. Serialization happens
    /// before the file is touched.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(&self.root)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json).map_err(|err| SettingsError::Save {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })
    }

    /// Raw value at a JSON-pointer path.
    pub fn get(&self, pointer: &str) -> Option<&Value> {
        self.root.pointer(pointer)
    }

    /// Typed value at a path; `None` if absent or the wrong shape.
    pub fn get_as<T: DeserializeOwned>(&self, pointer: &str) -> Option<T> {
        let value = self.root.pointer(pointer)?;
        T::deserialize(value.clone()).ok()
    }

    /// Whether a path is present in the document.
    pub fn contains(&self, pointer: &str) -> bool {
        self.root.pointer(pointer).is_some()
    }

    /// Set the value at a path, creating intermediate objects.
    pub fn set<T: Serialize>(&mut self, pointer: &str, value: T) {
        let Ok(value) = serde_json::to_value(value) else {
            return;
        };
        let mut node = &mut self.root;
        let mut segments = pointer.split('/').skip(1).peekable();
        while let Some(segment) = segments.next() {
            if !node.is_object() {
                *node = Value::Object(Default::default());
            }
            let Some(map) = node.as_object_mut() else {
                return;
            };
            if segments.peek().is_none() {
                map.insert(segment.to_string(), value);
                return;
            }
            node = map
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Default::default()));
        }
    }

    pub fn as_value(&self) -> &Value {
        &self.root
    }
}

impl Default for SettingsDocument {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_creates_intermediate_objects() {
        let mut doc = SettingsDocument::new();
        doc.set("/board/colors/wire", "rgb(0, 132, 0)");
        assert_eq!(
            doc.get("/board/colors/wire").and_then(Value::as_str),
            Some("rgb(0, 132, 0)")
        );
        assert!(doc.contains("/board/colors"));
        assert!(!doc.contains("/board/palette"));
    }

    #[test]
    fn get_as_round_trips_set() {
        let mut doc = SettingsDocument::new();
        doc.set("/meta/version", 2u32);
        assert_eq!(doc.get_as::<u32>("/meta/version"), Some(2));
        assert_eq!(doc.get_as::<String>("/meta/version"), None);
    }
}
