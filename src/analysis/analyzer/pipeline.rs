//! Pipeline analyzer that combines tokenizers and filters.
//!
//! This is the main building block for custom analyzers. It allows you to
//! combine a tokenizer with any number of token filters to create a custom
//! analysis pipeline.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use kokbul::analysis::analyzer::analyzer::Analyzer;
//! use kokbul::analysis::analyzer::pipeline::PipelineAnalyzer;
//! use kokbul::analysis::token_filter::lowercase::LowercaseFilter;
//! use kokbul::analysis::token_filter::stop::StopFilter;
//! use kokbul::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
//!     .add_filter(Arc::new(LowercaseFilter::turkish()))
//!     .add_filter(Arc::new(StopFilter::from_words(vec!["ve"])))
//!     .with_name("my_custom_analyzer".to_string());
//!
//! let tokens: Vec<_> = analyzer.analyze("Evler VE bahçeler").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "evler");
//! assert_eq!(tokens[1].text, "bahçeler");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A configurable analyzer that combines a tokenizer with a chain of filters.
///
/// Filters are applied sequentially in the order they were added.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the filters used by this analyzer.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = self.tokenizer.tokenize(text)?;

        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;
    use crate::analysis::token_filter::lowercase::LowercaseFilter;
    use crate::analysis::token_filter::stop::StopFilter;
    use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;

    #[test]
    fn test_pipeline_applies_filters_in_order() {
        // Stop list is lowercased; the lowercase filter must run first for
        // "VE" to be removed.
        let analyzer = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::turkish()))
            .add_filter(Arc::new(StopFilter::from_words(vec!["ve"])));

        let tokens: Vec<Token> = analyzer.analyze("Evler VE bahçeler").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "evler");
        assert_eq!(tokens[1].text, "bahçeler");
    }

    #[test]
    fn test_pipeline_without_filters() {
        let analyzer = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()));

        let tokens: Vec<Token> = analyzer.analyze("bir iki").unwrap().collect();

        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_analyzer_name() {
        let analyzer = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()));
        assert_eq!(analyzer.name(), "pipeline");
    }
}
