//! CLI argument definitions for rowmatch.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use rowmatch_output::DEFAULT_OUTPUT_FILE;

#[derive(Parser)]
#[command(
    name = "rowmatch",
    version,
    about = "Fuzzy row matching between two CSV files",
    long_about = "Find, for every row of FILE1, the most similar row of FILE2.\n\n\
                  Rows are compared on composite keys built from up to three columns\n\
                  per file, scored 0-100 with token-sort ratio. Matches at or above the\n\
                  threshold are written to a CSV file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Match every row of FILE1 against FILE2 and write the accepted matches.
    Run(RunArgs),

    /// List the columns of a CSV file with inferred types and sample values.
    Columns(ColumnsArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// CSV file whose rows are looked up.
    #[arg(long = "file1", value_name = "CSV")]
    pub file1: PathBuf,

    /// CSV file searched for the best match of each FILE1 row.
    #[arg(long = "file2", value_name = "CSV")]
    pub file2: PathBuf,

    /// Key columns of FILE1 (1-3, in key order).
    #[arg(long = "key1", value_name = "COLUMN", num_args = 1..)]
    pub key1: Vec<String>,

    /// Key columns of FILE2 (1-3, in key order).
    #[arg(long = "key2", value_name = "COLUMN", num_args = 1..)]
    pub key2: Vec<String>,

    /// FILE1 columns copied into the result.
    #[arg(long = "out1", value_name = "COLUMN", num_args = 1..)]
    pub out1: Vec<String>,

    /// FILE2 columns copied into the result.
    #[arg(long = "out2", value_name = "COLUMN", num_args = 1..)]
    pub out2: Vec<String>,

    /// Minimum accepted match score, 0-100 (default: 80).
    #[arg(long = "threshold", value_name = "SCORE")]
    pub threshold: Option<u8>,

    /// Result file path.
    #[arg(long = "output", short = 'o', value_name = "PATH", default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Number of result rows shown after the run.
    #[arg(long = "preview", value_name = "ROWS", default_value_t = 10)]
    pub preview: usize,

    /// TOML file with key columns, output columns and threshold.
    ///
    /// Flags given on the command line override values from the file.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Field separator of the input and result files.
    #[arg(long = "separator", value_name = "CHAR", default_value = ",", value_parser = parse_separator)]
    pub separator: u8,

    /// Disable the progress bar.
    #[arg(long = "no-progress")]
    pub no_progress: bool,
}

#[derive(Parser)]
pub struct ColumnsArgs {
    /// CSV file to inspect.
    #[arg(value_name = "CSV")]
    pub file: PathBuf,

    /// Field separator.
    #[arg(long = "separator", value_name = "CHAR", default_value = ",", value_parser = parse_separator)]
    pub separator: u8,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

/// Accepts a single ASCII character, or `tab` / `\t`.
fn parse_separator(value: &str) -> Result<u8, String> {
    match value {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ => match value.as_bytes() {
            [byte] if byte.is_ascii() && !byte.is_ascii_alphanumeric() => Ok(*byte),
            _ => Err(format!(
                "separator must be one ASCII punctuation character or 'tab' (got '{value}')"
            )),
        },
    }
}
