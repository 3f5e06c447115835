//! Lowercase filter implementation.
//!
//! This module provides a filter that converts all token text to lowercase.
//! In Turkish mode the dotted/dotless i pair is folded with Turkish rules,
//! which the generic Unicode mapping gets wrong: `I` must become `ı` (not
//! `i`), and `İ` must become plain `i` (not `i` + combining dot above).
//!
//! # Examples
//!
//! ```
//! use kokbul::analysis::token_filter::Filter;
//! use kokbul::analysis::token_filter::lowercase::LowercaseFilter;
//! use kokbul::analysis::token::Token;
//!
//! let filter = LowercaseFilter::turkish();
//! let tokens = vec![Token::new("ISPARTA", 0), Token::new("İstanbul", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "ısparta");
//! assert_eq!(filtered[1].text, "istanbul");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that converts tokens to lowercase.
///
/// # Behavior
///
/// - Converts all characters to lowercase
/// - In Turkish mode, maps `I` → `ı` and `İ` → `i`
/// - Skips tokens marked as stopped
/// - Preserves token positions and offsets
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter {
    turkish: bool,
}

impl LowercaseFilter {
    /// Create a new lowercase filter using plain Unicode lowercasing.
    pub fn new() -> Self {
        LowercaseFilter { turkish: false }
    }

    /// Create a lowercase filter using Turkish casing rules.
    pub fn turkish() -> Self {
        LowercaseFilter { turkish: true }
    }

    fn lowercase(&self, text: &str) -> String {
        if !self.turkish {
            return text.to_lowercase();
        }

        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            match ch {
                'I' => out.push('ı'),
                'İ' => out.push('i'),
                _ => out.extend(ch.to_lowercase()),
            }
        }
        out
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() {
                    token
                } else {
                    let lowered = self.lowercase(&token.text);
                    token.with_text(lowered)
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
