//! CLI entrypoint for qaha
//!
//! Wires the layers together: config, HTTP fetcher, cached loader, and
//! either the one-shot console output or the interactive viewer.

use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use qaha_application::{CorpusCache, LoadCorpusError, LoadCorpusUseCase, LoadOutcome};
use qaha_domain::{Model, Selection};
use qaha_infrastructure::{ConfigLoader, FileConfig, HttpResourceFetcher};
use qaha_presentation::{Cli, ConsoleFormatter, ViewerApp};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("failed to load configuration: {}", e))?
    };

    if cli.list_models {
        for file in &config.source.files {
            let model = Model::from_csv_file(file);
            println!("{:<20} {}", model.as_str(), model.display_name());
        }
        return Ok(());
    }

    info!("Starting qaha");

    // === Dependency Injection ===
    let fetcher = HttpResourceFetcher::new(config.fetch_timeout())
        .context("failed to build HTTP client")?;
    let use_case = LoadCorpusUseCase::new(Arc::new(fetcher));
    let cache = Arc::new(CorpusCache::new(config.cache_ttl()));
    let sources = config.source_list();

    // Initial load, with a spinner on the terminal
    let spinner = load_spinner();
    let outcome = match cache.get_or_load(&use_case, &sources).await {
        Ok(outcome) => outcome,
        Err(LoadCorpusError::AllSourcesFailed(report)) => {
            spinner.finish_and_clear();
            eprintln!("{}", ConsoleFormatter::format_report(&report));
            bail!("Failed to load any data. Check your internet connection.");
        }
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e.into());
        }
    };
    spinner.finish_and_clear();

    if cli.is_one_shot() {
        run_one_shot(&cli, &outcome)
    } else {
        let app = ViewerApp::new(outcome, use_case, cache, sources, config.ui.select_all);
        app.run().await?;
        Ok(())
    }
}

fn load_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .expect("static spinner template"),
    );
    spinner.set_message("Loading Qur'an translations...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn run_one_shot(cli: &Cli, outcome: &LoadOutcome) -> Result<()> {
    let (Some(chapter), Some(verse)) = (cli.chapter, cli.verse) else {
        bail!("One-shot mode needs both --chapter and --verse.");
    };

    if !outcome.report.is_empty() {
        eprintln!("{}", ConsoleFormatter::format_report(&outcome.report));
    }

    // No -m flags means the full model set
    let models: Vec<String> = if cli.model.is_empty() {
        outcome.corpus.model_names()
    } else {
        cli.model
            .iter()
            .map(|key| {
                let model: Model = key.parse().unwrap();
                model.display_name().to_string()
            })
            .collect()
    };

    let selection = Selection::new(chapter, verse).with_models(models);
    if !selection.has_models() {
        println!("{}", ConsoleFormatter::format_no_selection());
        return Ok(());
    }

    let records = outcome.corpus.select(&selection);
    if records.is_empty() {
        bail!(
            "No records for Surah {}, Ayah {} among the selected models.",
            chapter,
            verse
        );
    }

    println!("{}", ConsoleFormatter::format(chapter, verse, &records));
    Ok(())
}
