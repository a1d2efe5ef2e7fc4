pub mod config;
pub mod errors;

pub use config::{ApiKey, AppConfig, AUTH_KEY_ENV};
pub use errors::{CsvTranslatorError, Result};

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
