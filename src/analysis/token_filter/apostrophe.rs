//! Apostrophe filter implementation.
//!
//! Turkish orthography attaches suffixes to proper nouns with an apostrophe
//! (`Türkiye'den`, `Ankara'nın`). For indexing, everything from the first
//! apostrophe on is dropped so all inflected forms of a name collapse to
//! the bare name.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that truncates tokens at the first apostrophe.
///
/// Both the ASCII apostrophe and the typographic right single quote are
/// recognized. A leading apostrophe is left alone; only a non-empty prefix
/// is kept.
///
/// # Examples
///
/// ```
/// use kokbul::analysis::token_filter::Filter;
/// use kokbul::analysis::token_filter::apostrophe::ApostropheFilter;
/// use kokbul::analysis::token::Token;
///
/// let filter = ApostropheFilter::new();
/// let tokens = vec![Token::new("Türkiye'den", 0)];
///
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
///
/// assert_eq!(result[0].text, "Türkiye");
/// ```
#[derive(Clone, Debug, Default)]
pub struct ApostropheFilter;

impl ApostropheFilter {
    /// Create a new apostrophe filter.
    pub fn new() -> Self {
        ApostropheFilter
    }
}

impl Filter for ApostropheFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() {
                    return token;
                }
                match token.text.find(['\'', '’']) {
                    Some(i) if i > 0 => {
                        let prefix = token.text[..i].to_string();
                        token.with_text(prefix)
                    }
                    _ => token,
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "apostrophe"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_apostrophe_filter() {
        let filter = ApostropheFilter::new();
        let tokens = vec![
            Token::new("Türkiye'den", 0),
            Token::new("Ankara’nın", 1),
            Token::new("ev", 2),
        ];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result[0].text, "Türkiye");
        assert_eq!(result[1].text, "Ankara");
        assert_eq!(result[2].text, "ev");
    }

    #[test]
    fn test_leading_apostrophe_untouched() {
        let filter = ApostropheFilter::new();
        let tokens = vec![Token::new("'96", 0)];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result[0].text, "'96");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(ApostropheFilter::new().name(), "apostrophe");
    }
}
