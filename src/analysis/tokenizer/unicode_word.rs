//! Unicode word tokenizer implementation.
//!
//! This module provides a tokenizer that splits text using Unicode word
//! boundary rules (UAX #29). Punctuation and whitespace segments are
//! filtered out. Apostrophes inside a word do not break it, so Turkish
//! proper-noun suffixes (`Türkiye'den`) stay attached for the apostrophe
//! filter to handle.
//!
//! # Examples
//!
//! ```
//! use kokbul::analysis::tokenizer::Tokenizer;
//! use kokbul::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Merhaba, dünya!").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "Merhaba");
//! assert_eq!(tokens[1].text, "dünya");
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that splits text on Unicode word boundaries.
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = text
            .unicode_word_indices()
            .enumerate()
            .map(|(position, (offset, word))| {
                Token::with_offsets(word, position, offset, offset + word.len())
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}
