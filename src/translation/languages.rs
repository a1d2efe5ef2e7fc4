use crate::utils::{CsvTranslatorError, Result};

pub const TARGET_LANGUAGES: &[(&str, &str)] = &[
    ("AR", "Arabic"),
    ("BG", "Bulgarian"),
    ("CS", "Czech"),
    ("DA", "Danish"),
    ("DE", "German"),
    ("EL", "Greek"),
    ("EN-GB", "English (British)"),
    ("EN-US", "English (American)"),
    ("ES", "Spanish"),
    ("ES-419", "Spanish (Latin American)"),
    ("ET", "Estonian"),
    ("FI", "Finnish"),
    ("FR", "French"),
    ("HE", "Hebrew"),
    ("HU", "Hungarian"),
    ("ID", "Indonesian"),
    ("IT", "Italian"),
    ("JA", "Japanese"),
    ("KO", "Korean"),
    ("LT", "Lithuanian"),
    ("LV", "Latvian"),
    ("NB", "Norwegian (Bokmål)"),
    ("NL", "Dutch"),
    ("PL", "Polish"),
    ("PT-BR", "Portuguese (Brazilian)"),
    ("PT-PT", "Portuguese (European)"),
    ("RO", "Romanian"),
    ("RU", "Russian"),
    ("SK", "Slovak"),
    ("SL", "Slovenian"),
    ("SV", "Swedish"),
    ("TH", "Thai"),
    ("TR", "Turkish"),
    ("UK", "Ukrainian"),
    ("VI", "Vietnamese"),
    ("ZH", "Chinese"),
    ("ZH-HANS", "Chinese (simplified)"),
    ("ZH-HANT", "Chinese (traditional)"),
];

// still accepted by DeepL, superseded by the regional variants
const DEPRECATED_TARGETS: &[&str] = &["EN", "PT"];

pub const SOURCE_LANGUAGES: &[&str] = &[
    "AR", "BG", "CS", "DA", "DE", "EL", "EN", "ES", "ET", "FI", "FR", "HE", "HU", "ID", "IT",
    "JA", "KO", "LT", "LV", "NB", "NL", "PL", "PT", "RO", "RU", "SK", "SL", "SV", "TH", "TR",
    "UK", "VI", "ZH",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    pub target: String,
    pub source: Option<String>,
}

impl LanguagePair {
    pub fn new(target: &str, source: Option<&str>) -> Result<Self> {
        let target = normalize_target(target)?;
        let source = source
            .filter(|s| !s.trim().is_empty())
            .map(normalize_source)
            .transpose()?;
        Ok(Self { target, source })
    }
}

pub fn normalize_target(code: &str) -> Result<String> {
    let code = code.trim().to_uppercase();
    if TARGET_LANGUAGES.iter().any(|(c, _)| *c == code) {
        Ok(code)
    } else if DEPRECATED_TARGETS.contains(&code.as_str()) {
        tracing::warn!(target_lang = %code, "Deprecated target language, prefer a regional variant");
        Ok(code)
    } else {
        Err(CsvTranslatorError::UnsupportedLanguage(code))
    }
}

pub fn normalize_source(code: &str) -> Result<String> {
    let code = code.trim().to_uppercase();
    if SOURCE_LANGUAGES.contains(&code.as_str()) {
        Ok(code)
    } else {
        Err(CsvTranslatorError::UnsupportedLanguage(code))
    }
}
