//! Locale key sets.
//!
//! A locale file is a flat JSON object mapping translation keys to strings.
//! Only the top-level property names participate in the audit.

use std::{collections::BTreeSet, fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::Value;

/// The top-level key set of one locale JSON file.
///
/// Created fresh each run by reading and parsing the file; never mutated.
#[derive(Debug, Clone)]
pub struct LocaleKeySet {
    /// Locale code (e.g., "en", "de"), or a label for non-locale files.
    pub locale: String,
    /// File path the set was loaded from.
    pub file_path: String,
    /// Top-level property names.
    pub keys: BTreeSet<String>,
}

impl LocaleKeySet {
    /// Load the key set from a JSON file.
    ///
    /// Fails if the file is unreadable, not valid JSON, or not a JSON object
    /// at the top level.
    pub fn load(path: &Path, locale: impl Into<String>) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read JSON file: {:?}", path))?;

        let json: Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON file: {:?}", path))?;

        let Value::Object(map) = json else {
            bail!("Expected a JSON object at the top level of {:?}", path);
        };

        Ok(Self {
            locale: locale.into(),
            file_path: path.to_string_lossy().to_string(),
            keys: map.keys().cloned().collect(),
        })
    }

    /// Check if a key exists.
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Get the number of keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Extracts locale from filename.
///
/// Examples:
/// - "en.json" -> Some("en")
/// - "zh-Hans.json" -> Some("zh-Hans")
/// - "/path/to/languages/de.json" -> Some("de")
pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}
