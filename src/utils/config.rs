use crate::utils::errors::{CsvTranslatorError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

pub const AUTH_KEY_ENV: &str = "DEEPL_AUTH_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub translation: TranslationDefaults,
    pub output: OutputConfig,
    pub progress: ProgressConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub endpoint: Option<String>,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationDefaults {
    pub target_lang: String,
    pub source_lang: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    pub log_interval: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_seconds: 30,
        }
    }
}

impl Default for TranslationDefaults {
    fn default() -> Self {
        Self {
            target_lang: "JA".to_string(),
            source_lang: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("output.csv"),
        }
    }
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self { log_interval: 1 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| CsvTranslatorError::ConfigError(e.to_string()))?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) if p.exists() => Self::load_from_file(p),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.progress.log_interval == 0 {
            return Err(CsvTranslatorError::ConfigError(
                "progress.log_interval must be at least 1".to_string(),
            ));
        }
        if self.api.timeout_seconds == 0 {
            return Err(CsvTranslatorError::ConfigError(
                "api.timeout_seconds must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(AUTH_KEY_ENV) {
            Some(value) if !value.trim().is_empty() => Ok(Self(value.trim().to_string())),
            _ => Err(CsvTranslatorError::MissingCredential(AUTH_KEY_ENV.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_free_tier(&self) -> bool {
        self.0.ends_with(":fx")
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_key_is_a_credential_error() {
        let err = ApiKey::from_lookup(|_| None).unwrap_err();
        assert!(matches!(err, CsvTranslatorError::MissingCredential(ref v) if v == AUTH_KEY_ENV));
    }

    #[test]
    fn blank_key_is_a_credential_error() {
        let err = ApiKey::from_lookup(|_| Some("   ".to_string())).unwrap_err();
        assert!(matches!(err, CsvTranslatorError::MissingCredential(_)));
    }

    #[test]
    fn key_is_trimmed_and_hidden_from_debug() {
        let key = ApiKey::from_lookup(|_| Some(" abc:fx\n".to_string())).unwrap();
        assert_eq!(key.as_str(), "abc:fx");
        assert!(key.is_free_tier());
        assert_eq!(format!("{:?}", key), "ApiKey(***)");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = AppConfig::load_or_default(Some(Path::new("/nonexistent/config.toml"))).unwrap();
        assert_eq!(config.translation.target_lang, "JA");
        assert_eq!(config.output.path, PathBuf::from("output.csv"));
        assert_eq!(config.progress.log_interval, 1);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[translation]\ntarget_lang = \"DE\"\n\n[progress]\nlog_interval = 10").unwrap();

        let config = AppConfig::load_or_default(Some(file.path())).unwrap();
        assert_eq!(config.translation.target_lang, "DE");
        assert_eq!(config.progress.log_interval, 10);
        assert_eq!(config.api.timeout_seconds, 30);
        assert!(config.api.endpoint.is_none());
    }

    #[test]
    fn zero_log_interval_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[progress]\nlog_interval = 0").unwrap();

        let err = AppConfig::load_or_default(Some(file.path())).unwrap_err();
        assert!(matches!(err, CsvTranslatorError::ConfigError(_)));
    }
}
