//! Morphological analyzer collaborators.
//!
//! The stemming filter obtains candidate parses for a word through the
//! narrow [`MorphAnalyzer`] interface: a word goes in, raw analyzer output
//! lines come out. Failures never escape this boundary; a lookup that
//! cannot be performed degrades to an empty line list, which downstream
//! stem selection treats as "no stem found".
//!
//! Two implementations are provided:
//!
//! - [`ProcessMorphAnalyzer`] - runs an external lookup command (e.g. a
//!   finite-state morphology tool) per word over piped stdin/stdout
//! - [`TableMorphAnalyzer`] - serves parses from an in-memory table,
//!   useful for precomputed vocabularies and for tests

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;

use ahash::AHashMap;
use log::warn;

use crate::error::{KokbulError, Result};

/// Trait for collaborators that produce morphological parses for a word.
///
/// Implementations must be infallible from the caller's perspective: any
/// internal failure (process spawn error, broken pipe, interruption) is
/// reported through the log and surfaced as an empty vector.
pub trait MorphAnalyzer: Send + Sync {
    /// Produce the raw analyzer output lines for `word`.
    ///
    /// Lines are trimmed and non-empty; no further structure is guaranteed.
    /// An empty vector means the word produced no parses.
    fn analyze(&self, word: &str) -> Vec<String>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Morphological lookup over an external analyzer process.
///
/// Each call spawns the configured command, feeds the word to its stdin
/// and collects stdout. The word is written from a dedicated thread so a
/// full pipe buffer can never deadlock the read side; `wait_with_output`
/// reaps the child on every path.
///
/// # Examples
///
/// ```no_run
/// use kokbul::morph::invoke::{MorphAnalyzer, ProcessMorphAnalyzer};
///
/// let analyzer = ProcessMorphAnalyzer::from_command_line("flookup trmorph.fst").unwrap();
/// let parses = analyzer.analyze("evler");
/// ```
#[derive(Clone, Debug)]
pub struct ProcessMorphAnalyzer {
    program: String,
    args: Vec<String>,
}

impl ProcessMorphAnalyzer {
    /// Create an analyzer that invokes `program` with no arguments.
    pub fn new<S: Into<String>>(program: S) -> Self {
        ProcessMorphAnalyzer {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Add arguments passed to the program on every invocation.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Parse a whole command line (`"flookup trmorph.fst"`) into an analyzer.
    pub fn from_command_line(command: &str) -> Result<Self> {
        let mut parts = command.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| KokbulError::invalid_config("empty lookup command"))?;

        Ok(Self::new(program).with_args(parts.map(str::to_string)))
    }

    /// Get the program this analyzer invokes.
    pub fn program(&self) -> &str {
        &self.program
    }

    fn run(&self, word: &str) -> Result<Vec<String>> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| KokbulError::morphology("analyzer stdin unavailable"))?;

        // Feed the word from its own thread; writing on the caller thread
        // can deadlock against a child blocked on a full stdout pipe.
        let payload = format!("{word}\n").into_bytes();
        let writer = thread::spawn(move || {
            let _ = stdin.write_all(&payload);
            // stdin drops here, closing the pipe so the child sees EOF
        });

        let output = child.wait_with_output()?;
        let _ = writer.join();

        let lines = String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        Ok(lines)
    }
}

impl MorphAnalyzer for ProcessMorphAnalyzer {
    fn analyze(&self, word: &str) -> Vec<String> {
        match self.run(word) {
            Ok(lines) => lines,
            Err(e) => {
                warn!("morphological lookup failed for {word}: {e}");
                Vec::new()
            }
        }
    }

    fn name(&self) -> &'static str {
        "process"
    }
}

/// Morphological lookup over an in-memory parse table.
///
/// Serves precomputed analyzer output without spawning a process. Words
/// absent from the table yield no parses.
///
/// # Examples
///
/// ```
/// use kokbul::morph::invoke::{MorphAnalyzer, TableMorphAnalyzer};
///
/// let mut analyzer = TableMorphAnalyzer::new();
/// analyzer.insert("evler", vec!["evler ev<N><pl>".to_string()]);
///
/// assert_eq!(analyzer.analyze("evler").len(), 1);
/// assert!(analyzer.analyze("yok").is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct TableMorphAnalyzer {
    table: AHashMap<String, Vec<String>>,
}

impl TableMorphAnalyzer {
    /// Create an empty parse table.
    pub fn new() -> Self {
        TableMorphAnalyzer {
            table: AHashMap::new(),
        }
    }

    /// Insert the parse lines for a word, replacing any previous entry.
    pub fn insert<S: Into<String>>(&mut self, word: S, parses: Vec<String>) {
        self.table.insert(word.into(), parses);
    }

    /// Build a table from `(word, parse lines)` pairs.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<String>)>,
        S: Into<String>,
    {
        let table = entries
            .into_iter()
            .map(|(word, parses)| (word.into(), parses))
            .collect();

        TableMorphAnalyzer { table }
    }

    /// Load a table from a JSON file mapping each word to its parse lines.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let table: AHashMap<String, Vec<String>> = serde_json::from_reader(BufReader::new(file))?;

        Ok(TableMorphAnalyzer { table })
    }

    /// Get the number of words in the table.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl MorphAnalyzer for TableMorphAnalyzer {
    fn analyze(&self, word: &str) -> Vec<String> {
        self.table.get(word).cloned().unwrap_or_default()
    }

    fn name(&self) -> &'static str {
        "table"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_analyzer() {
        let analyzer = TableMorphAnalyzer::from_entries([
            ("evi", vec!["evi ev<N><p3s>".to_string(), "evi evi<N>".to_string()]),
            ("kedi", vec!["kedi kedi<N>".to_string()]),
        ]);

        assert_eq!(analyzer.len(), 2);
        assert_eq!(analyzer.analyze("evi").len(), 2);
        assert_eq!(analyzer.analyze("kedi").len(), 1);
        assert!(analyzer.analyze("bilinmeyen").is_empty());
    }

    #[test]
    fn test_table_analyzer_insert_replaces() {
        let mut analyzer = TableMorphAnalyzer::new();
        analyzer.insert("ev", vec!["ev ev<N>".to_string()]);
        analyzer.insert("ev", vec!["ev ev<N><nom>".to_string()]);

        assert_eq!(analyzer.analyze("ev"), vec!["ev ev<N><nom>".to_string()]);
    }

    #[test]
    fn test_process_analyzer_command_line_parsing() {
        let analyzer = ProcessMorphAnalyzer::from_command_line("flookup -x trmorph.fst").unwrap();
        assert_eq!(analyzer.program(), "flookup");

        assert!(ProcessMorphAnalyzer::from_command_line("   ").is_err());
    }

    #[test]
    fn test_process_analyzer_missing_binary_degrades_to_empty() {
        let analyzer = ProcessMorphAnalyzer::new("kokbul-no-such-binary");

        assert!(analyzer.analyze("ev").is_empty());
    }

    #[test]
    fn test_process_analyzer_reads_lines() {
        // `cat` echoes the word back, which is a well-formed single-field line.
        let analyzer = ProcessMorphAnalyzer::new("cat");

        assert_eq!(analyzer.analyze("ev"), vec!["ev".to_string()]);
    }

    #[test]
    fn test_analyzer_names() {
        assert_eq!(ProcessMorphAnalyzer::new("cat").name(), "process");
        assert_eq!(TableMorphAnalyzer::new().name(), "table");
    }
}
