use crate::cli::{collect_parameters, Cli, Prompter};
use crate::translation::{DeepLClient, LanguagePair, RunParameters};
use crate::utils::{ApiKey, AppConfig, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub struct PreparedRun {
    pub client: DeepLClient,
    pub params: RunParameters,
    pub output: PathBuf,
    pub log_interval: usize,
}

// Order matters: credential, then config.toml, then the input file.
pub fn prepare_run<F, R, W>(
    cli: &Cli,
    lookup: F,
    prompter: &mut Prompter<R, W>,
) -> Result<PreparedRun>
where
    F: Fn(&str) -> Option<String>,
    R: BufRead,
    W: Write,
{
    let api_key = ApiKey::from_lookup(lookup)?;
    let config = AppConfig::load_or_default(Some(cli.config.as_path()))?;
    init_logging(&config.logging.level);

    let target_lang = cli
        .target_lang
        .as_deref()
        .unwrap_or(&config.translation.target_lang);
    let source_lang = cli
        .source_lang
        .as_deref()
        .or(config.translation.source_lang.as_deref());
    let languages = LanguagePair::new(target_lang, source_lang)?;

    let client = DeepLClient::new(api_key, languages, &config.api)?;
    tracing::info!(
        endpoint = client.endpoint(),
        target_lang = client.target_lang(),
        "DeepL client ready"
    );

    let params = collect_parameters(cli, prompter)?;
    let output = cli.output.clone().unwrap_or(config.output.path);

    Ok(PreparedRun {
        client,
        params,
        output,
        log_interval: config.progress.log_interval,
    })
}

pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("deepl_csv_translator={}", level)));

    // a second call (tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
