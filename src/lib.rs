//! # kokbul
//!
//! Turkish morphological token normalization for search indexing.
//!
//! Given a surface word form, kokbul reduces it to a canonical stem so a
//! search index collapses inflectional variants (`evler`, `evi`, `evden`)
//! to one indexable form. Known words resolve through a precomputed
//! override map; everything else goes through a morphological analyzer
//! whose candidate parses are reduced to a single stem by a deterministic
//! min/max policy.
//!
//! ## Features
//!
//! - Token analysis pipeline (tokenizers, filters, analyzers)
//! - Turkish-aware lowercasing, apostrophe handling and stop words
//! - Pluggable morphological lookup: external process or in-memory table
//! - Precomputed word → stem overrides
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use kokbul::analysis::analyzer::Analyzer;
//! use kokbul::analysis::analyzer::turkish::TurkishAnalyzer;
//! use kokbul::analysis::token_filter::morph_stem::MorphStemFilter;
//! use kokbul::morph::aggregate::Aggregation;
//! use kokbul::morph::invoke::TableMorphAnalyzer;
//!
//! let morph = TableMorphAnalyzer::from_entries([
//!     ("evler", vec!["evler ev<N><pl>".to_string()]),
//! ]);
//! let stem = MorphStemFilter::new(Arc::new(morph), Aggregation::Min);
//! let analyzer = TurkishAnalyzer::new(stem);
//!
//! let tokens: Vec<_> = analyzer.analyze("Evler").unwrap().collect();
//! assert_eq!(tokens[0].text, "ev");
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod morph;

pub mod prelude {
    //! Commonly used types, re-exported for convenience.

    pub use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer, TurkishAnalyzer};
    pub use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
    pub use crate::analysis::token_filter::{Filter, MorphStemConfig, MorphStemFilter};
    pub use crate::analysis::tokenizer::Tokenizer;
    pub use crate::error::{KokbulError, Result};
    pub use crate::morph::aggregate::{Aggregation, select_stem};
    pub use crate::morph::invoke::{MorphAnalyzer, ProcessMorphAnalyzer, TableMorphAnalyzer};
    pub use crate::morph::override_map::OverrideMap;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
