//! Turkish analyzer: the full indexing chain for Turkish text.

use std::fmt::Debug;
use std::fmt::Formatter;
use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::apostrophe::ApostropheFilter;
use crate::analysis::token_filter::keyword_marker::KeywordMarkerFilter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::morph_stem::{MorphStemConfig, MorphStemFilter};
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::error::Result;

/// Analyzer wiring the standard Turkish chain around a stem filter:
/// Unicode word tokenization, apostrophe truncation, Turkish lowercasing,
/// Turkish stop-word removal, optional keyword marking, morphological
/// stemming.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use kokbul::analysis::analyzer::analyzer::Analyzer;
/// use kokbul::analysis::analyzer::turkish::TurkishAnalyzer;
/// use kokbul::analysis::token_filter::morph_stem::MorphStemFilter;
/// use kokbul::morph::aggregate::Aggregation;
/// use kokbul::morph::invoke::TableMorphAnalyzer;
///
/// let morph = TableMorphAnalyzer::from_entries([
///     ("evler", vec!["evler ev<N><pl>".to_string()]),
/// ]);
/// let stem = MorphStemFilter::new(Arc::new(morph), Aggregation::Min);
/// let analyzer = TurkishAnalyzer::new(stem);
///
/// let tokens: Vec<_> = analyzer.analyze("Evler ve bahçeler").unwrap().collect();
/// assert_eq!(tokens[0].text, "ev");
/// ```
pub struct TurkishAnalyzer {
    inner: PipelineAnalyzer,
}

impl TurkishAnalyzer {
    /// Create a Turkish analyzer around the given stem filter.
    pub fn new(stem: MorphStemFilter) -> Self {
        Self::with_protected_words(stem, Vec::<String>::new())
    }

    /// Create a Turkish analyzer with a protected-word list.
    ///
    /// Protected words are flagged as keywords after lowercasing and stop
    /// removal, so they reach the stem filter but pass it untouched. The
    /// list is matched in lowercased form.
    pub fn with_protected_words<I, S>(stem: MorphStemFilter, protected: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut inner = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
            .add_filter(Arc::new(ApostropheFilter::new()))
            .add_filter(Arc::new(LowercaseFilter::turkish()))
            .add_filter(Arc::new(StopFilter::new()));

        let marker = KeywordMarkerFilter::from_words(protected);
        if !marker.is_empty() {
            inner = inner.add_filter(Arc::new(marker));
        }

        inner = inner
            .add_filter(Arc::new(stem))
            .with_name("turkish".to_string());

        Self { inner }
    }

    /// Build a Turkish analyzer from a stemming configuration.
    pub fn from_config(config: &MorphStemConfig) -> Result<Self> {
        let stem = config.build_filter()?;
        Ok(Self::with_protected_words(
            stem,
            config.protected_words.clone(),
        ))
    }
}

impl Analyzer for TurkishAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "turkish"
    }
}

impl Debug for TurkishAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurkishAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}
