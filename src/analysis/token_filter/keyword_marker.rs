//! Keyword marker filter implementation.
//!
//! Marks tokens from a protected-word set with the keyword flag so the
//! stemming stage passes them through untouched. Proper nouns, product
//! names and domain vocabulary typically go in this set.
//!
//! # Examples
//!
//! ```
//! use kokbul::analysis::token_filter::Filter;
//! use kokbul::analysis::token_filter::keyword_marker::KeywordMarkerFilter;
//! use kokbul::analysis::token::Token;
//!
//! let filter = KeywordMarkerFilter::from_words(vec!["ankara"]);
//! let tokens = vec![Token::new("ankara", 0), Token::new("evler", 1)];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert!(result[0].is_keyword());
//! assert!(!result[1].is_keyword());
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that flags protected words as keywords.
#[derive(Clone, Debug)]
pub struct KeywordMarkerFilter {
    /// The set of words exempt from stemming
    protected: Arc<HashSet<String>>,
}

impl KeywordMarkerFilter {
    /// Create a new keyword marker filter with the given protected words.
    pub fn with_protected_words(protected: HashSet<String>) -> Self {
        KeywordMarkerFilter {
            protected: Arc::new(protected),
        }
    }

    /// Create a keyword marker filter from a list of protected words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let protected = words.into_iter().map(|s| s.into()).collect();
        Self::with_protected_words(protected)
    }

    /// Check if a word is protected.
    pub fn is_protected(&self, word: &str) -> bool {
        self.protected.contains(word)
    }

    /// Get the number of protected words.
    pub fn len(&self) -> usize {
        self.protected.len()
    }

    /// Check if the protected word set is empty.
    pub fn is_empty(&self) -> bool {
        self.protected.is_empty()
    }
}

impl Filter for KeywordMarkerFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if !token.is_keyword() && self.is_protected(&token.text) {
                    token.keyword()
                } else {
                    token
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "keyword_marker"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_keyword_marker_filter() {
        let filter = KeywordMarkerFilter::from_words(vec!["ankara", "izmir"]);
        let tokens = vec![
            Token::new("ankara", 0),
            Token::new("evler", 1),
            Token::new("izmir", 2),
        ];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert!(result[0].is_keyword());
        assert!(!result[1].is_keyword());
        assert!(result[2].is_keyword());
    }

    #[test]
    fn test_already_keyword_preserved() {
        let filter = KeywordMarkerFilter::from_words(Vec::<String>::new());
        let tokens = vec![Token::new("ev", 0).keyword()];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert!(result[0].is_keyword());
    }

    #[test]
    fn test_filter_name() {
        let filter = KeywordMarkerFilter::from_words(vec!["ev"]);
        assert_eq!(filter.name(), "keyword_marker");
    }
}
