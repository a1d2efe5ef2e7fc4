use clap::Parser;
use deepl_csv_translator::{prepare_run, run_translation_pipeline, Cli, Prompter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _ = dotenvy::dotenv();

    let run = prepare_run(&cli, |name| std::env::var(name).ok(), &mut Prompter::stdio())?;

    let report =
        run_translation_pipeline(&run.params, &run.output, &run.client, run.log_interval).await?;

    println!(
        "Translated {} of {} rows ({} empty, {} kept after errors); saved to '{}'",
        report.summary.translated,
        report.summary.total,
        report.summary.skipped,
        report.summary.fallback,
        report.output.display()
    );

    Ok(())
}
