pub mod app;
pub mod cli;
pub mod csv_processor;
pub mod progress;
pub mod translation;
pub mod utils;

pub use app::{init_logging, prepare_run, PreparedRun};
pub use cli::{collect_parameters, Cli, Prompter};
pub use csv_processor::{read_table, resolve_column, write_table, ColumnSelector, Row, Table};
pub use progress::ProgressReporter;
pub use translation::{
    run_translation_pipeline, translate_cell, translate_column, CellOutcome, DeepLClient,
    LanguagePair, RunParameters, RunReport, TranslationProvider, TranslationSummary,
};
pub use utils::{ApiKey, AppConfig, CsvTranslatorError, Result};
