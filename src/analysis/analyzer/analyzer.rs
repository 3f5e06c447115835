//! Core analyzer trait definition.
//!
//! This module defines the [`Analyzer`] trait, the main interface for text
//! analysis in kokbul. Analyzers combine a tokenizer with filters to
//! transform raw text into indexed tokens.
//!
//! # Role in Analysis Pipeline
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → Index
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1
//!             ↓
//!         Filter N
//! ```
//!
//! # Available Implementations
//!
//! - [`PipelineAnalyzer`](super::pipeline::PipelineAnalyzer) - Custom tokenizer + filter chains
//! - [`TurkishAnalyzer`](super::turkish::TurkishAnalyzer) - The full Turkish indexing chain

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` to allow analyzers to be used safely
/// across thread boundaries, which is essential for concurrent indexing.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
