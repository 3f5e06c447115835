//! Stop filter implementation.
//!
//! This module provides a filter that removes common words (stop words) that
//! typically don't contribute to search relevance. Includes a default
//! Turkish stop word list, with support for custom word lists.
//!
//! # Examples
//!
//! ```
//! use kokbul::analysis::token_filter::Filter;
//! use kokbul::analysis::token_filter::stop::StopFilter;
//! use kokbul::analysis::token::Token;
//!
//! let filter = StopFilter::new(); // Uses default Turkish stop words
//! let tokens = vec![
//!     Token::new("bu", 0),
//!     Token::new("ev", 1),
//!     Token::new("ve", 2),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! // "bu" and "ve" are removed as stop words
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].text, "ev");
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Default Turkish stop words list.
///
/// Common Turkish particles, conjunctions and pronouns that are typically
/// filtered out during indexing. Entries are expected in lowercased form as
/// produced by the Turkish lowercase filter.
const DEFAULT_TURKISH_STOP_WORDS: &[&str] = &[
    "acaba",
    "ama",
    "ancak",
    "artık",
    "aslında",
    "az",
    "bazı",
    "belki",
    "ben",
    "bile",
    "bir",
    "biri",
    "birkaç",
    "birçok",
    "biz",
    "bu",
    "bunu",
    "bunun",
    "da",
    "daha",
    "de",
    "defa",
    "diye",
    "doğru",
    "eğer",
    "en",
    "gibi",
    "hem",
    "hep",
    "hepsi",
    "her",
    "hiç",
    "ile",
    "ise",
    "için",
    "kadar",
    "kez",
    "ki",
    "kim",
    "mi",
    "mu",
    "mü",
    "mı",
    "nasıl",
    "ne",
    "neden",
    "nerde",
    "nerede",
    "nereye",
    "niye",
    "niçin",
    "o",
    "onlar",
    "onu",
    "onun",
    "sanki",
    "sen",
    "siz",
    "tüm",
    "ve",
    "veya",
    "ya",
    "yani",
    "çok",
    "çünkü",
    "şey",
    "şu",
];

/// Default Turkish stop words as a HashSet.
pub static DEFAULT_TURKISH_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_TURKISH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A filter that removes stop words from the token stream.
///
/// This filter can either remove stop words entirely or mark them as
/// stopped while keeping them in the stream.
///
/// # Examples
///
/// ## Custom Stop Words
///
/// ```
/// use kokbul::analysis::token_filter::stop::StopFilter;
///
/// let filter = StopFilter::from_words(vec!["custom", "words"]);
/// assert_eq!(filter.len(), 2);
/// ```
///
/// ## Preserve Stopped Tokens
///
/// ```
/// use kokbul::analysis::token_filter::Filter;
/// use kokbul::analysis::token_filter::stop::StopFilter;
/// use kokbul::analysis::token::Token;
///
/// // Mark as stopped but don't remove
/// let filter = StopFilter::from_words(vec!["ve"]).remove_stopped(false);
/// let tokens = vec![Token::new("ve", 0), Token::new("ev", 1)];
///
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
///
/// assert_eq!(result.len(), 2);
/// assert!(result[0].is_stopped());
/// assert!(!result[1].is_stopped());
/// ```
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
    /// Whether to remove stopped tokens entirely or just mark them as stopped
    remove_stopped: bool,
}

impl StopFilter {
    /// Create a new stop filter with the default Turkish stop words.
    pub fn new() -> Self {
        Self::with_stop_words(DEFAULT_TURKISH_STOP_WORDS_SET.clone())
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
            remove_stopped: true,
        }
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Set whether to remove stopped tokens entirely or just mark them as stopped.
    pub fn remove_stopped(mut self, remove: bool) -> Self {
        self.remove_stopped = remove;
        self
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter_map(|token| {
                if token.is_stopped() {
                    Some(token)
                } else if self.is_stop_word(&token.text) {
                    if self.remove_stopped {
                        None // Remove the token entirely
                    } else {
                        Some(token.stop()) // Mark as stopped but keep it
                    }
                } else {
                    Some(token)
                }
            })
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
