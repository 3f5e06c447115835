//! Command line argument parsing for the kokbul CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// kokbul - Turkish morphological stemming for search indexing
#[derive(Parser, Debug, Clone)]
#[command(name = "kokbul")]
#[command(about = "Turkish morphological token normalization for search indexing")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct KokbulArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl KokbulArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Stem words through the override map or the morphological analyzer
    Stem(StemArgs),

    /// Run text through the full Turkish analysis chain
    Analyze(AnalyzeArgs),
}

/// Arguments for stemming words
#[derive(Parser, Debug, Clone)]
pub struct StemArgs {
    /// Words to stem; read from stdin (one per line) when empty
    #[arg(value_name = "WORDS")]
    pub words: Vec<String>,

    /// Command line of the external morphological lookup process
    #[arg(long, value_name = "CMD")]
    pub lookup: Option<String>,

    /// JSON parse table used instead of an external process
    #[arg(long, value_name = "JSON_FILE")]
    pub table: Option<PathBuf>,

    /// Aggregation strategy for multi-candidate parses
    #[arg(long, default_value = "min", value_name = "min|max")]
    pub aggregation: String,

    /// TSV override map (word<TAB>stem), bypassing the analyzer
    #[arg(long, value_name = "TSV_FILE")]
    pub overrides: Option<PathBuf>,
}

/// Arguments for analyzing text
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Text to analyze
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Command line of the external morphological lookup process
    #[arg(long, value_name = "CMD")]
    pub lookup: Option<String>,

    /// JSON parse table used instead of an external process
    #[arg(long, value_name = "JSON_FILE")]
    pub table: Option<PathBuf>,

    /// Aggregation strategy for multi-candidate parses
    #[arg(long, default_value = "min", value_name = "min|max")]
    pub aggregation: String,

    /// TSV override map (word<TAB>stem), bypassing the analyzer
    #[arg(long, value_name = "TSV_FILE")]
    pub overrides: Option<PathBuf>,

    /// File of protected words exempt from stemming (one per line)
    #[arg(long, value_name = "FILE")]
    pub protected: Option<PathBuf>,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output (one record per line)
    Json,
}
