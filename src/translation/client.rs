use crate::translation::languages::LanguagePair;
use crate::utils::config::ApiConfig;
use crate::utils::{ApiKey, CsvTranslatorError, Result};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const FREE_API_URL: &str = "https://api-free.deepl.com";
pub const PRO_API_URL: &str = "https://api.deepl.com";

#[allow(async_fn_in_trait)]
pub trait TranslationProvider {
    async fn translate(&self, text: &str) -> Result<String>;
}

pub struct DeepLClient {
    client: Client,
    endpoint: String,
    api_key: ApiKey,
    languages: LanguagePair,
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    text: [&'a str; 1],
    target_lang: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_lang: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
struct Translation {
    #[allow(dead_code)]
    detected_source_language: Option<String>,
    text: String,
}

impl DeepLClient {
    pub fn new(api_key: ApiKey, languages: LanguagePair, api: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(api.timeout_seconds))
            .build()?;

        let base = api
            .endpoint
            .clone()
            .unwrap_or_else(|| default_base_url(&api_key).to_string());

        Ok(Self {
            client,
            endpoint: format!("{}/v2/translate", base.trim_end_matches('/')),
            api_key,
            languages,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn target_lang(&self) -> &str {
        &self.languages.target
    }

    async fn call_api(&self, text: &str) -> Result<String> {
        let request = TranslateRequest {
            text: [text],
            target_lang: &self.languages.target,
            source_lang: self.languages.source.as_deref(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header(
                "Authorization",
                format!("DeepL-Auth-Key {}", self.api_key.as_str()),
            )
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CsvTranslatorError::ApiError(describe_failure(status, &body)));
        }

        let body = response.text().await?;
        parse_translation(&body)
    }
}

impl TranslationProvider for DeepLClient {
    async fn translate(&self, text: &str) -> Result<String> {
        self.call_api(text).await
    }
}

pub fn default_base_url(api_key: &ApiKey) -> &'static str {
    if api_key.is_free_tier() {
        FREE_API_URL
    } else {
        PRO_API_URL
    }
}

fn parse_translation(body: &str) -> Result<String> {
    let response: TranslateResponse = serde_json::from_str(body)?;
    response
        .translations
        .into_iter()
        .next()
        .map(|t| t.text)
        .ok_or_else(|| CsvTranslatorError::ApiError("No translations in response".to_string()))
}

fn describe_failure(status: StatusCode, body: &str) -> String {
    let reason = match status.as_u16() {
        403 => "authorization failed, check DEEPL_AUTH_KEY",
        429 => "too many requests",
        456 => "quota exceeded",
        _ => "request rejected",
    };
    if body.is_empty() {
        format!("API returned {} ({})", status, reason)
    } else {
        format!("API returned {} ({}): {}", status, reason, body)
    }
}
