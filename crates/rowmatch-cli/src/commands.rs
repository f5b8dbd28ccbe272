use std::fs;
use std::io::{self, IsTerminal};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, info_span};

use rowmatch_ingest::{CsvOptions, load_dataset, summarize_columns};
use rowmatch_match::{MatchProgress, Matcher};
use rowmatch_model::{Dataset, MatchConfig};
use rowmatch_output::{CsvWriteOptions, write_result_file};

use crate::cli::{ColumnsArgs, RunArgs};
use crate::summary::columns_table;
use crate::types::{DatasetInfo, RunOutcome};

/// Loads a match configuration from a TOML file.
pub fn load_match_config(path: &Path) -> Result<MatchConfig> {
    let content =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("parse config {}", path.display()))
}

/// Builds the run configuration: the config file if given, then flags on top.
pub fn resolve_config(args: &RunArgs) -> Result<MatchConfig> {
    let mut config = match &args.config {
        Some(path) => load_match_config(path)?,
        None => MatchConfig::default(),
    };
    if !args.key1.is_empty() {
        config.source_key_columns.clone_from(&args.key1);
    }
    if !args.key2.is_empty() {
        config.target_key_columns.clone_from(&args.key2);
    }
    if !args.out1.is_empty() {
        config.source_output_columns.clone_from(&args.out1);
    }
    if !args.out2.is_empty() {
        config.target_output_columns.clone_from(&args.out2);
    }
    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    }
    Ok(config)
}

pub fn run_match(args: &RunArgs) -> Result<RunOutcome> {
    let span = info_span!("run", output = %args.output.display());
    let _guard = span.enter();
    let start = Instant::now();

    let config = resolve_config(args)?;
    config.validate().context("invalid match configuration")?;
    debug!(?config, "resolved configuration");

    let options = CsvOptions::default().with_separator(args.separator);
    let source = load_input(&args.file1, &options)?;
    let target = load_input(&args.file2, &options)?;

    let progress = progress_bar(source.len(), args.no_progress);
    let table = Matcher::new()
        .run_with_progress(&source, &target, &config, |step| {
            if let Some(bar) = &progress {
                update_progress(bar, step);
            }
        })
        .context("match datasets")?;
    if let Some(bar) = progress {
        bar.finish_and_clear();
    }

    let write_options = CsvWriteOptions::default().with_separator(args.separator);
    write_result_file(&table, &args.output, &write_options)
        .with_context(|| format!("write results to {}", args.output.display()))?;

    let duration = start.elapsed();
    info!(
        matched = table.len(),
        duration_ms = duration.as_millis(),
        "run complete"
    );
    Ok(RunOutcome {
        source: dataset_info(&args.file1, &source),
        target: dataset_info(&args.file2, &target),
        config,
        table,
        output: args.output.clone(),
        duration,
    })
}

pub fn run_columns(args: &ColumnsArgs) -> Result<()> {
    let options = CsvOptions::default().with_separator(args.separator);
    let dataset = load_input(&args.file, &options)?;
    let summaries = summarize_columns(&dataset);
    println!(
        "{}: {} rows, {} columns",
        dataset.name(),
        dataset.len(),
        dataset.columns().len()
    );
    println!("{}", columns_table(&summaries, dataset.len()));
    Ok(())
}

fn load_input(path: &Path, options: &CsvOptions) -> Result<Dataset> {
    load_dataset(path, options).with_context(|| format!("load {}", path.display()))
}

fn dataset_info(path: &Path, dataset: &Dataset) -> DatasetInfo {
    DatasetInfo {
        path: path.to_path_buf(),
        rows: dataset.len(),
        columns: dataset.columns().len(),
    }
}

/// A progress bar on interactive terminals, `None` otherwise.
fn progress_bar(total: usize, disabled: bool) -> Option<ProgressBar> {
    if disabled || total == 0 || !io::stderr().is_terminal() {
        return None;
    }
    let bar = ProgressBar::new(total as u64);
    if let Ok(style) =
        ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
    {
        bar.set_style(style);
    }
    Some(bar)
}

fn update_progress(bar: &ProgressBar, step: MatchProgress) {
    bar.set_position(step.processed as u64);
    bar.set_message(format!("{} matched", step.matched));
}
