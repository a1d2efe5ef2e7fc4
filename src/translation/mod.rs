pub mod client;
pub mod languages;

pub use client::{DeepLClient, TranslationProvider};
pub use languages::LanguagePair;

use crate::csv_processor::{read_table, resolve_column, write_table, ColumnSelector, Table};
use crate::progress::ProgressReporter;
use crate::utils::{is_blank, CsvTranslatorError, Result};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum CellOutcome {
    Translated(String),
    // blank cell, or the row is too short to have the column
    Skipped,
    Fallback { error: CsvTranslatorError },
}

impl CellOutcome {
    pub fn resolve(self, original: String) -> String {
        match self {
            CellOutcome::Translated(text) => text,
            CellOutcome::Skipped | CellOutcome::Fallback { .. } => original,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslationSummary {
    pub total: usize,
    pub translated: usize,
    pub skipped: usize,
    pub fallback: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunParameters {
    pub input: PathBuf,
    pub has_header: bool,
    pub selector: ColumnSelector,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub output: PathBuf,
    pub column: usize,
    pub rows_written: usize,
    pub summary: TranslationSummary,
}

pub async fn translate_cell<P: TranslationProvider>(provider: &P, text: &str) -> CellOutcome {
    if is_blank(text) {
        return CellOutcome::Skipped;
    }

    match provider.translate(text).await {
        Ok(translated) => CellOutcome::Translated(translated),
        Err(error) => CellOutcome::Fallback { error },
    }
}

pub async fn translate_column<P: TranslationProvider>(
    table: &mut Table,
    column: usize,
    provider: &P,
    progress: &mut ProgressReporter,
) -> TranslationSummary {
    let total = table.row_count();
    let mut summary = TranslationSummary {
        total,
        ..Default::default()
    };

    for (i, row) in table.rows.iter_mut().enumerate() {
        let row_number = i + 1;

        let outcome = match row.get(column) {
            Some(cell) => translate_cell(provider, cell).await,
            None => CellOutcome::Skipped,
        };

        match &outcome {
            CellOutcome::Translated(_) => summary.translated += 1,
            CellOutcome::Skipped => summary.skipped += 1,
            CellOutcome::Fallback { error } => {
                summary.fallback += 1;
                tracing::warn!(
                    row = row_number,
                    error = %error,
                    "Translation failed, keeping original text"
                );
            }
        }

        if let Some(cell) = row.get_mut(column) {
            let original = std::mem::take(cell);
            *cell = outcome.resolve(original);
        }

        progress.update(row_number);
    }

    summary
}

// Nothing is written unless every earlier step succeeded.
pub async fn run_translation_pipeline<P: TranslationProvider>(
    params: &RunParameters,
    output: &Path,
    provider: &P,
    log_interval: usize,
) -> Result<RunReport> {
    let mut table = read_table(&params.input, params.has_header)?;
    let column = resolve_column(&table, &params.selector)?;

    tracing::info!(
        input = %params.input.display(),
        column = column,
        rows = table.row_count(),
        "Translating {}",
        params.selector
    );

    let mut progress = ProgressReporter::new(table.row_count(), log_interval);
    let summary = translate_column(&mut table, column, provider, &mut progress).await;

    let rows_written = write_table(output, &table)?;

    tracing::info!(
        output = %output.display(),
        rows = progress.rows_processed(),
        translated = summary.translated,
        skipped = summary.skipped,
        fallback = summary.fallback,
        elapsed_ms = progress.elapsed().as_millis() as u64,
        "Translation completed"
    );

    Ok(RunReport {
        output: output.to_path_buf(),
        column,
        rows_written,
        summary,
    })
}
