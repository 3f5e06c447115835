//! Command implementations for the kokbul CLI.

use std::io::{self, BufRead};
use std::path::PathBuf;

use serde_json::json;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::turkish::TurkishAnalyzer;
use crate::analysis::token_filter::morph_stem::MorphStemConfig;
use crate::cli::args::*;
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: KokbulArgs) -> Result<()> {
    match &args.command {
        Command::Stem(stem_args) => stem_words(stem_args.clone(), &args),
        Command::Analyze(analyze_args) => analyze_text(analyze_args.clone(), &args),
    }
}

fn stem_config(
    lookup: Option<String>,
    table: Option<PathBuf>,
    aggregation: String,
    overrides: Option<PathBuf>,
    protected_words: Vec<String>,
) -> MorphStemConfig {
    MorphStemConfig {
        aggregation,
        lookup_command: lookup,
        parse_table_path: table,
        overrides_path: overrides,
        protected_words,
    }
}

/// Stem words from arguments or stdin.
fn stem_words(args: StemArgs, cli_args: &KokbulArgs) -> Result<()> {
    let config = stem_config(
        args.lookup,
        args.table,
        args.aggregation,
        args.overrides,
        Vec::new(),
    );
    let filter = config.build_filter()?;

    let words: Vec<String> = if args.words.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<_>>>()?
            .into_iter()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect()
    } else {
        args.words
    };

    for word in &words {
        let stem = filter.resolve(word);
        let stemmed = stem.as_deref().unwrap_or(word);

        match cli_args.output_format {
            OutputFormat::Human => println!("{word}\t{stemmed}"),
            OutputFormat::Json => {
                let record = json!({
                    "word": word,
                    "stem": stemmed,
                    "changed": stem.is_some(),
                });
                println!("{record}");
            }
        }
    }

    Ok(())
}

/// Run text through the full Turkish analysis chain.
fn analyze_text(args: AnalyzeArgs, cli_args: &KokbulArgs) -> Result<()> {
    let protected_words = match &args.protected {
        Some(path) => std::fs::read_to_string(path)?
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    };

    let config = stem_config(
        args.lookup,
        args.table,
        args.aggregation,
        args.overrides,
        protected_words,
    );
    let analyzer = TurkishAnalyzer::from_config(&config)?;

    if cli_args.verbosity() > 1 {
        println!("Analyzing {} bytes of text", args.text.len());
    }

    for token in analyzer.analyze(&args.text)? {
        match cli_args.output_format {
            OutputFormat::Human => println!(
                "{}\t{}\t{}..{}",
                token.position, token.text, token.start_offset, token.end_offset
            ),
            OutputFormat::Json => println!("{}", serde_json::to_string(&token)?),
        }
    }

    Ok(())
}
