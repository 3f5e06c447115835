//! Precomputed word-to-stem override lookup.
//!
//! For high-frequency vocabulary the morphological analyzer is bypassed
//! entirely: a precomputed map resolves the word to its canonical stem in
//! one lookup. The map is built once (from pairs or a TSV file) and is
//! read-only at query time.
//!
//! # Examples
//!
//! ```
//! use kokbul::morph::override_map::OverrideMap;
//!
//! let map = OverrideMap::builder()
//!     .add("evler", "ev")
//!     .add("kitaplar", "kitap")
//!     .build();
//!
//! assert_eq!(map.lookup("evler"), Some("ev"));
//! assert_eq!(map.lookup("yok"), None);
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashMap;

use crate::error::{KokbulError, Result};

/// A read-only word → stem map consulted before the analyzer fallback.
#[derive(Clone, Debug, Default)]
pub struct OverrideMap {
    entries: AHashMap<String, String>,
}

impl OverrideMap {
    /// Start building an override map.
    pub fn builder() -> OverrideMapBuilder {
        OverrideMapBuilder::new()
    }

    /// Look up the cached stem for a word.
    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(|s| s.as_str())
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load an override map from a TSV file of `word<TAB>stem` rows.
    ///
    /// Blank lines and lines starting with `#` are skipped. Rows without
    /// exactly two non-empty fields fail the load.
    pub fn load_tsv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let mut builder = OverrideMapBuilder::new();

        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split('\t');
            match (fields.next(), fields.next(), fields.next()) {
                (Some(word), Some(stem), None) if !word.is_empty() && !stem.is_empty() => {
                    builder = builder.add(word, stem);
                }
                _ => {
                    return Err(KokbulError::invalid_config(format!(
                        "malformed override entry at line {}: {line}",
                        index + 1
                    )));
                }
            }
        }

        Ok(builder.build())
    }
}

/// Builder collecting override entries; last write per word wins.
#[derive(Clone, Debug, Default)]
pub struct OverrideMapBuilder {
    entries: AHashMap<String, String>,
}

impl OverrideMapBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        OverrideMapBuilder {
            entries: AHashMap::new(),
        }
    }

    /// Add a word → stem entry.
    pub fn add<W, S>(mut self, word: W, stem: S) -> Self
    where
        W: Into<String>,
        S: Into<String>,
    {
        self.entries.insert(word.into(), stem.into());
        self
    }

    /// Finish building the map.
    pub fn build(self) -> OverrideMap {
        OverrideMap {
            entries: self.entries,
        }
    }
}
