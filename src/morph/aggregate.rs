//! Stem selection over raw morphological analyzer output.
//!
//! A morphological analyzer emits one line per candidate analysis of a word,
//! shaped like `<word> <stem><features...>`, e.g. `evi ev<N><p3s>`. This
//! module reduces such a batch of lines to a single stem: malformed lines are
//! dropped with a warning, the analyzer's "unanalyzable" escape (`+?`) forces
//! the original word through unchanged, and remaining candidates are
//! deduplicated and resolved deterministically by an [`Aggregation`] policy.
//!
//! # Examples
//!
//! ```
//! use kokbul::morph::aggregate::{Aggregation, select_stem};
//!
//! let lines = vec![
//!     "evi ev<N><p3s>".to_string(),
//!     "evi evi<N>".to_string(),
//! ];
//!
//! assert_eq!(select_stem("evi", &lines, Aggregation::Min), Some("ev".to_string()));
//! assert_eq!(select_stem("evi", &lines, Aggregation::Max), Some("evi".to_string()));
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{KokbulError, Result};

/// Character separating a stem from its grammatical feature annotations.
const FEATURE_MARKER: char = '<';

/// Escape sequence the analyzer emits for words it cannot decompose.
const UNANALYZABLE: &str = "+?";

/// Tie-break rule used when a word has more than one distinct candidate stem.
///
/// Candidates are kept in an ordered set keyed by code-point comparison, so
/// the choice depends only on the set of candidates, never on the order the
/// analyzer printed them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    /// Pick the lexicographically least candidate.
    #[default]
    Min,
    /// Pick the lexicographically greatest candidate.
    Max,
}

impl FromStr for Aggregation {
    type Err = KokbulError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "min" => Ok(Aggregation::Min),
            "max" => Ok(Aggregation::Max),
            other => Err(KokbulError::invalid_config(format!(
                "unknown aggregation strategy: {other}"
            ))),
        }
    }
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Aggregation::Min => write!(f, "min"),
            Aggregation::Max => write!(f, "max"),
        }
    }
}

/// Reduce raw analyzer output lines for `word` to a single stem.
///
/// Each line is expected to start with `word` followed by a
/// whitespace-separated analysis field. Lines that don't (or that have no
/// analysis field at all) are logged and skipped; they never fail the call.
///
/// Returns `None` when no line yields a usable candidate, which callers
/// treat as "leave the word unchanged". A line whose analysis field carries
/// the `+?` escape instead of feature annotations means the analyzer could
/// not decompose the word; the original word is returned immediately and
/// any other candidates are discarded.
///
/// # Examples
///
/// ```
/// use kokbul::morph::aggregate::{Aggregation, select_stem};
///
/// // Unanalyzable marker wins over everything else.
/// let lines = vec!["xyz +?".to_string()];
/// assert_eq!(select_stem("xyz", &lines, Aggregation::Min), Some("xyz".to_string()));
///
/// // No usable candidates.
/// assert_eq!(select_stem("abc", &["abc".to_string()], Aggregation::Min), None);
/// ```
pub fn select_stem(word: &str, lines: &[String], aggregation: Aggregation) -> Option<String> {
    let mut candidates = BTreeSet::new();

    for raw in lines {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if !line.starts_with(word) {
            warn!("unexpected line for word {word}: {line}");
            continue;
        }

        let Some(analysis) = line.split_whitespace().nth(1) else {
            warn!("unexpected line {line}");
            continue;
        };

        match analysis.find(FEATURE_MARKER) {
            Some(i) => {
                candidates.insert(analysis[..i].to_string());
            }
            None => {
                if analysis.contains(UNANALYZABLE) {
                    return Some(word.to_string());
                }
                warn!("unexpected stem {analysis}");
            }
        }
    }

    match aggregation {
        Aggregation::Min => candidates.into_iter().next(),
        Aggregation::Max => candidates.into_iter().next_back(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_candidate_ignores_policy() {
        let input = lines(&["kitap kitap<N><pl>"]);

        assert_eq!(
            select_stem("kitap", &input, Aggregation::Min),
            Some("kitap".to_string())
        );
        assert_eq!(
            select_stem("kitap", &input, Aggregation::Max),
            Some("kitap".to_string())
        );
    }

    #[test]
    fn test_min_max_over_multiple_candidates() {
        let input = lines(&["evi ev<N><p3s>", "evi evi<N>"]);

        assert_eq!(
            select_stem("evi", &input, Aggregation::Min),
            Some("ev".to_string())
        );
        assert_eq!(
            select_stem("evi", &input, Aggregation::Max),
            Some("evi".to_string())
        );
    }

    #[test]
    fn test_order_insensitive() {
        let forward = lines(&["evi ev<N><p3s>", "evi evi<N>"]);
        let backward = lines(&["evi evi<N>", "evi ev<N><p3s>"]);

        for aggregation in [Aggregation::Min, Aggregation::Max] {
            assert_eq!(
                select_stem("evi", &forward, aggregation),
                select_stem("evi", &backward, aggregation)
            );
        }
    }

    #[test]
    fn test_duplicates_collapse() {
        let input = lines(&["evi evi<N>", "evi evi<N><acc>", "evi ev<N><p3s>"]);

        // "evi" appears twice but counts once; min still picks "ev".
        assert_eq!(
            select_stem("evi", &input, Aggregation::Min),
            Some("ev".to_string())
        );
    }

    #[test]
    fn test_unanalyzable_passes_word_through() {
        let input = lines(&["xyz +?"]);

        assert_eq!(
            select_stem("xyz", &input, Aggregation::Min),
            Some("xyz".to_string())
        );
    }

    #[test]
    fn test_unanalyzable_short_circuits_other_candidates() {
        let input = lines(&["kedi ked<N><acc>", "kedi +?", "kedi kedi<N>"]);

        assert_eq!(
            select_stem("kedi", &input, Aggregation::Min),
            Some("kedi".to_string())
        );
        assert_eq!(
            select_stem("kedi", &input, Aggregation::Max),
            Some("kedi".to_string())
        );
    }

    #[test]
    fn test_line_not_starting_with_word_is_discarded() {
        let input = lines(&["banana split<N>", "kedi kedi<N>"]);

        assert_eq!(
            select_stem("kedi", &input, Aggregation::Min),
            Some("kedi".to_string())
        );
    }

    #[test]
    fn test_single_field_line_is_discarded() {
        let input = lines(&["abc"]);

        assert_eq!(select_stem("abc", &input, Aggregation::Min), None);
    }

    #[test]
    fn test_no_marker_no_escape_is_discarded() {
        let input = lines(&["abc abc"]);

        assert_eq!(select_stem("abc", &input, Aggregation::Min), None);
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert_eq!(select_stem("abc", &[], Aggregation::Min), None);
        assert_eq!(
            select_stem("abc", &lines(&["", "   ", "\t"]), Aggregation::Max),
            None
        );
    }

    #[test]
    fn test_all_lines_malformed() {
        let input = lines(&["abc", "zzz zzz<N>", "abc abc"]);

        assert_eq!(select_stem("abc", &input, Aggregation::Min), None);
    }

    #[test]
    fn test_marker_at_start_yields_empty_stem() {
        // Degenerate analyzer output: feature block with no stem prefix.
        let input = lines(&["ev <N>", "ev ev<N>"]);

        assert_eq!(
            select_stem("ev", &input, Aggregation::Min),
            Some(String::new())
        );
        assert_eq!(
            select_stem("ev", &input, Aggregation::Max),
            Some("ev".to_string())
        );
    }

    #[test]
    fn test_aggregation_parse() {
        assert_eq!("min".parse::<Aggregation>().unwrap(), Aggregation::Min);
        assert_eq!("max".parse::<Aggregation>().unwrap(), Aggregation::Max);
        assert!("median".parse::<Aggregation>().is_err());
        assert!("MAX".parse::<Aggregation>().is_err());
    }

    #[test]
    fn test_aggregation_display() {
        assert_eq!(Aggregation::Min.to_string(), "min");
        assert_eq!(Aggregation::Max.to_string(), "max");
    }
}
