//! Morphological stemming token filter.
//!
//! This is the token-normalization stage of the indexing chain: each token's
//! surface form is replaced by its canonical stem. Known words resolve
//! through a precomputed [`OverrideMap`]; otherwise the word goes through a
//! [`MorphAnalyzer`] and its candidate parses are reduced to one stem by
//! [`select_stem`]. Tokens carrying the keyword flag are never stemmed.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use kokbul::analysis::token::Token;
//! use kokbul::analysis::token_filter::Filter;
//! use kokbul::analysis::token_filter::morph_stem::MorphStemFilter;
//! use kokbul::morph::aggregate::Aggregation;
//! use kokbul::morph::invoke::TableMorphAnalyzer;
//!
//! let analyzer = TableMorphAnalyzer::from_entries([
//!     ("evler", vec!["evler ev<N><pl>".to_string()]),
//! ]);
//! let filter = MorphStemFilter::new(Arc::new(analyzer), Aggregation::Min);
//!
//! let tokens = vec![Token::new("evler", 0)];
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result[0].text, "ev");
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::{KokbulError, Result};
use crate::morph::aggregate::{Aggregation, select_stem};
use crate::morph::invoke::{MorphAnalyzer, ProcessMorphAnalyzer, TableMorphAnalyzer};
use crate::morph::override_map::OverrideMap;

/// Filter that replaces token text with its morphological stem.
///
/// # Behavior
///
/// - Tokens flagged as keywords (and stopped tokens) pass through untouched
/// - With an override map attached, resolution is lookup-only: a hit
///   replaces the text, a miss leaves the token as is
/// - Without one, the analyzer is invoked and the aggregated stem is
///   applied only when it differs from the surface form
///
/// The override map and aggregation policy are fixed at construction;
/// nothing is mutated across tokens.
pub struct MorphStemFilter {
    /// The morphological analyzer consulted on override misses.
    analyzer: Arc<dyn MorphAnalyzer>,
    /// Tie-break rule for multi-candidate parses.
    aggregation: Aggregation,
    /// Optional precomputed word → stem lookup.
    overrides: Option<Arc<OverrideMap>>,
}

impl std::fmt::Debug for MorphStemFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MorphStemFilter")
            .field("analyzer", &self.analyzer.name())
            .field("aggregation", &self.aggregation)
            .field("overrides", &self.overrides.as_ref().map(|m| m.len()))
            .finish()
    }
}

impl MorphStemFilter {
    /// Create a new morphological stem filter.
    pub fn new(analyzer: Arc<dyn MorphAnalyzer>, aggregation: Aggregation) -> Self {
        MorphStemFilter {
            analyzer,
            aggregation,
            overrides: None,
        }
    }

    /// Attach a precomputed override map.
    ///
    /// Override lookup and analyzer fallback are mutually exclusive: once a
    /// map is attached, words missing from it are left unstemmed rather
    /// than sent to the analyzer.
    pub fn with_override_map(mut self, overrides: Arc<OverrideMap>) -> Self {
        self.overrides = Some(overrides);
        self
    }

    /// Get the aggregation policy of this filter.
    pub fn aggregation(&self) -> Aggregation {
        self.aggregation
    }

    /// Resolve the stem for a single word.
    ///
    /// Returns `None` when the word should be left unchanged (override
    /// miss, no usable parses, or stem equal to the surface form).
    pub fn resolve(&self, word: &str) -> Option<String> {
        if let Some(overrides) = &self.overrides {
            return overrides.lookup(word).map(str::to_string);
        }

        let lines = self.analyzer.analyze(word);
        match select_stem(word, &lines, self.aggregation) {
            Some(stem) if stem != word => Some(stem),
            _ => None,
        }
    }
}

impl Filter for MorphStemFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() || token.is_keyword() {
                    return token;
                }
                match self.resolve(&token.text) {
                    Some(stem) => token.with_text(stem),
                    None => token,
                }
            })
            .collect::<Vec<Token>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "morph_stem"
    }
}

/// Configuration for building a [`MorphStemFilter`].
///
/// Deserializable from JSON; the aggregation name is validated when the
/// filter is built.
///
/// # Examples
///
/// ```
/// use kokbul::analysis::token_filter::morph_stem::MorphStemConfig;
///
/// let config: MorphStemConfig = serde_json::from_str(
///     r#"{ "aggregation": "max", "lookup_command": "flookup trmorph.fst" }"#,
/// ).unwrap();
///
/// assert_eq!(config.aggregation, "max");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MorphStemConfig {
    /// Aggregation strategy name (`"min"` or `"max"`).
    #[serde(default = "default_aggregation")]
    pub aggregation: String,

    /// Command line of the external lookup process.
    #[serde(default)]
    pub lookup_command: Option<String>,

    /// Path to a JSON parse table used instead of an external process.
    #[serde(default)]
    pub parse_table_path: Option<PathBuf>,

    /// Path to a TSV override map (`word<TAB>stem`).
    #[serde(default)]
    pub overrides_path: Option<PathBuf>,

    /// Words exempt from stemming.
    #[serde(default)]
    pub protected_words: Vec<String>,
}

fn default_aggregation() -> String {
    "min".to_string()
}

impl Default for MorphStemConfig {
    fn default() -> Self {
        MorphStemConfig {
            aggregation: default_aggregation(),
            lookup_command: None,
            parse_table_path: None,
            overrides_path: None,
            protected_words: Vec::new(),
        }
    }
}

impl MorphStemConfig {
    /// Build the configured filter.
    ///
    /// Fails on an unknown aggregation name, on a missing lookup source
    /// (no parse table, lookup command, or override map), or on unreadable
    /// table/override files.
    pub fn build_filter(&self) -> Result<MorphStemFilter> {
        let aggregation: Aggregation = self.aggregation.parse()?;

        let analyzer: Arc<dyn MorphAnalyzer> = match (&self.parse_table_path, &self.lookup_command)
        {
            (Some(path), _) => Arc::new(TableMorphAnalyzer::load_json(path)?),
            (None, Some(command)) => Arc::new(ProcessMorphAnalyzer::from_command_line(command)?),
            // An override-only configuration never consults the analyzer.
            (None, None) if self.overrides_path.is_some() => Arc::new(TableMorphAnalyzer::new()),
            (None, None) => {
                return Err(KokbulError::invalid_config(
                    "one of lookup_command, parse_table_path or overrides_path must be set",
                ));
            }
        };

        let mut filter = MorphStemFilter::new(analyzer, aggregation);
        if let Some(path) = &self.overrides_path {
            filter = filter.with_override_map(Arc::new(OverrideMap::load_tsv(path)?));
        }

        Ok(filter)
    }
}
