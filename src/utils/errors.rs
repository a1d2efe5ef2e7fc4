use thiserror::Error;

#[derive(Error, Debug)]
pub enum CsvTranslatorError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Malformed CSV: {0}")]
    MalformedCsv(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("HTTP request error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Missing credential: environment variable {0} is not set or empty")]
    MissingCredential(String),

    #[error("Unsupported language code: {0}")]
    UnsupportedLanguage(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Column name '{name}' is ambiguous: it appears {count} times in the header")]
    AmbiguousColumn { name: String, count: usize },

    #[error("Column index {index} is out of range for rows of width {width}")]
    ColumnIndexOutOfRange { index: usize, width: usize },
}

impl From<toml::de::Error> for CsvTranslatorError {
    fn from(e: toml::de::Error) -> Self {
        CsvTranslatorError::ConfigError(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CsvTranslatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_index_and_width() {
        let err = CsvTranslatorError::ColumnIndexOutOfRange { index: 5, width: 2 };
        assert_eq!(
            err.to_string(),
            "Column index 5 is out of range for rows of width 2"
        );
    }

    #[test]
    fn toml_errors_become_config_errors() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("[api\nendpoint =");
        let err: CsvTranslatorError = parse.unwrap_err().into();
        assert!(matches!(err, CsvTranslatorError::ConfigError(_)));
    }
}
