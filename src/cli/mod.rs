pub mod prompt;

pub use prompt::{Prompter, SelectorMode};

use crate::csv_processor::{file_exists, ColumnSelector};
use crate::translation::RunParameters;
use crate::utils::{CsvTranslatorError, Result};
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Translate one column of a CSV file with DeepL.
///
/// Anything not given on the command line is asked for interactively.
#[derive(Debug, Default, Parser)]
#[command(name = "deepl-csv-translator", version, about)]
pub struct Cli {
    /// CSV file to translate
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// The first line is a header row
    #[arg(long, conflicts_with = "no_header")]
    pub header: bool,

    /// Every line is a data row
    #[arg(long)]
    pub no_header: bool,

    /// Column to translate, by header name
    #[arg(long, conflicts_with = "column_index")]
    pub column_name: Option<String>,

    /// Column to translate, by zero-based index
    #[arg(long)]
    pub column_index: Option<usize>,

    /// DeepL target language code (e.g. JA, DE, EN-US)
    #[arg(short, long)]
    pub target_lang: Option<String>,

    /// DeepL source language code; auto-detected when omitted
    #[arg(long)]
    pub source_lang: Option<String>,

    /// Destination file, overwritten if present
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Optional TOML configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

impl Cli {
    pub fn header_flag(&self) -> Option<bool> {
        match (self.header, self.no_header) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    pub fn selector(&self) -> Option<ColumnSelector> {
        if let Some(name) = &self.column_name {
            Some(ColumnSelector::ByName(name.clone()))
        } else {
            self.column_index.map(ColumnSelector::ByIndex)
        }
    }
}

pub fn collect_parameters<R: BufRead, W: Write>(
    cli: &Cli,
    prompter: &mut Prompter<R, W>,
) -> Result<RunParameters> {
    let input = match &cli.input {
        Some(path) if file_exists(path) => path.clone(),
        Some(path) => return Err(CsvTranslatorError::FileNotFound(path.display().to_string())),
        None => prompter.ask_input_path()?,
    };

    let has_header = match cli.header_flag() {
        Some(flag) => flag,
        None => prompter.ask_has_header()?,
    };

    let selector = match cli.selector() {
        Some(selector) => selector,
        None => {
            let mode = prompter.ask_selector_mode()?;
            prompter.ask_column(mode)?
        }
    };

    Ok(RunParameters {
        input,
        has_header,
        selector,
    })
}
