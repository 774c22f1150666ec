use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;
mod db;
mod models;
mod renamer;
mod scanner;
mod services;

use clap::Parser;
use cli::{Cli, Command};
use config::AppConfig;
use db::{Catalog, SqliteCatalog};
use models::MediaUnit;
use renamer::{RenameOutcome, Renamer};
use scanner::{TaskPhase, UpdateTask};
use services::mediainfo::{format_duration, FfprobeProbe};
use services::metadata::{scrape_unit, ProviderRegistry};
use services::nfo::{write_nfo_files, KodiMovieNfo};
use services::tmdb::{self, TmdbProvider};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mediaman_rust=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load .env file if present
    dotenvy::dotenv().ok();

    let command = Cli::parse().command;

    let config = AppConfig::load();

    config.paths.ensure_dirs().await?;

    config.log_config();

    let database_url = config.database_url();
    tracing::debug!("Database URL: {}", database_url);
    let pool = db::connect(&database_url).await?;
    let catalog: Arc<dyn Catalog> = Arc::new(SqliteCatalog::new(pool));

    // Ctrl+C stops the task between units
    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Received Ctrl+C, finishing the current unit...");
                cancel.cancel();
            }
        });
    }

    match command {
        Command::Update => update(&config, catalog, cancel).await,
        Command::Rename { target, dry_run } => {
            rename(&config, catalog, target.as_deref(), dry_run, &cancel).await
        }
        Command::Scrape { provider, target } => {
            scrape(&config, catalog, provider.as_deref(), target.as_deref(), &cancel).await
        }
        Command::List => list(catalog.as_ref()).await,
    }
}

async fn update(config: &AppConfig, catalog: Arc<dyn Catalog>, cancel: CancellationToken) -> Result<()> {
    let task = UpdateTask::new(
        catalog,
        Arc::new(config.library.clone()),
        config.scanner.clone(),
        Arc::new(KodiMovieNfo),
        Arc::new(FfprobeProbe::new(config.ffprobe_path.clone())),
    )
    .with_progress(Arc::new(|progress| {
        let phase = match progress.phase {
            TaskPhase::Scanning => "Scanning",
            TaskPhase::MediaInfo => "Media info",
        };
        tracing::debug!("{}: {}/{}", phase, progress.done, progress.total);
    }))
    .with_cancellation(cancel);

    let summary = task.run(&config.library.movie_data_sources).await?;
    println!(
        "{} added, {} updated, {} unchanged, {} failed, {} removed, {} files probed{}",
        summary.units_added,
        summary.units_updated,
        summary.units_unchanged,
        summary.units_failed,
        summary.units_removed,
        summary.media_info_updated,
        if summary.cancelled { " (cancelled)" } else { "" }
    );
    Ok(())
}

/// The unit at `target`, or every unit in the catalog
async fn select_units(catalog: &dyn Catalog, target: Option<&Path>) -> Result<Vec<MediaUnit>> {
    match target {
        Some(path) => {
            let path = tokio::fs::canonicalize(path)
                .await
                .unwrap_or_else(|_| path.to_path_buf());
            let unit = catalog
                .find_by_path(&path)
                .await?
                .with_context(|| format!("No media unit at {} (run update first)", path.display()))?;
            Ok(vec![unit])
        }
        None => catalog.all().await,
    }
}

async fn rename(
    config: &AppConfig,
    catalog: Arc<dyn Catalog>,
    target: Option<&Path>,
    dry_run: bool,
    cancel: &CancellationToken,
) -> Result<()> {
    let units = select_units(catalog.as_ref(), target).await?;
    let renamer = Renamer::new(config.renamer.clone(), catalog);

    for mut unit in units {
        if cancel.is_cancelled() {
            tracing::info!("Rename cancelled");
            break;
        }

        if dry_run {
            match renamer.preview(&unit).await {
                Ok(Some(preview)) => {
                    println!("{} -> {}", unit.path.display(), preview.folder.display());
                    for (from, to) in preview.files {
                        println!("    {} -> {}", from.display(), to.display());
                    }
                }
                Ok(None) => println!("{}: skipped", unit.path.display()),
                Err(e) => tracing::error!("Preview of {} failed: {}", unit.path.display(), e),
            }
            continue;
        }

        match renamer.rename(&mut unit).await {
            Ok(RenameOutcome::Skipped) => println!("{}: skipped", unit.path.display()),
            Ok(RenameOutcome::Renamed { failed_files, .. }) if failed_files > 0 => println!(
                "{}: renamed, {} file(s) kept their old name",
                unit.path.display(),
                failed_files
            ),
            Ok(RenameOutcome::Renamed { .. }) => println!("{}: renamed", unit.path.display()),
            Err(e) => tracing::error!("Renaming {} failed: {}", unit.path.display(), e),
        }
    }
    Ok(())
}

fn build_registry(config: &AppConfig) -> ProviderRegistry {
    let mut registry = ProviderRegistry::new();
    if let Some(api_key) = &config.tmdb_api_key {
        registry.register(Arc::new(TmdbProvider::new(
            api_key.clone(),
            config.metadata_language.clone(),
        )));
    }
    registry
}

async fn scrape(
    config: &AppConfig,
    catalog: Arc<dyn Catalog>,
    provider: Option<&str>,
    target: Option<&Path>,
    cancel: &CancellationToken,
) -> Result<()> {
    let registry = build_registry(config);
    if registry.is_empty() {
        anyhow::bail!("No metadata provider configured (set TMDB_API_KEY)");
    }
    let provider_id = provider.unwrap_or(tmdb::PROVIDER_ID);
    let provider = registry.get(provider_id).with_context(|| {
        format!(
            "Unknown metadata provider '{}' (available: {})",
            provider_id,
            registry.ids().join(", ")
        )
    })?;

    for mut unit in select_units(catalog.as_ref(), target).await? {
        if cancel.is_cancelled() {
            tracing::info!("Scrape cancelled");
            break;
        }

        match scrape_unit(provider.as_ref(), &mut unit).await {
            Ok(true) => {
                if let Err(e) = write_nfo_files(&mut unit, &KodiMovieNfo, &config.renamer.nfo_naming) {
                    tracing::warn!("Failed to write NFO for {}: {:#}", unit.display_name(), e);
                }
                catalog.upsert(&unit).await?;
                println!("{}: {}", unit.path.display(), unit.display_name());
            }
            Ok(false) => println!("{}: no match", unit.path.display()),
            Err(e) => tracing::error!("Scraping {} failed: {:#}", unit.path.display(), e),
        }
    }
    Ok(())
}

async fn list(catalog: &dyn Catalog) -> Result<()> {
    for unit in catalog.all().await? {
        let runtime = unit
            .first_video()
            .and_then(|v| v.duration_seconds)
            .map(format_duration)
            .unwrap_or_else(|| "-".to_string());
        let mut flags = Vec::new();
        if unit.is_disc {
            flags.push("disc");
        }
        if unit.has_nfo() {
            flags.push("nfo");
        }
        if unit.has_images() {
            flags.push("art");
        }
        if unit.has_subtitles() {
            flags.push("subs");
        }
        if unit.has_trailer() {
            flags.push("trailer");
        }
        if unit.scraped {
            flags.push("scraped");
        }
        println!(
            "{:<50} {:>8}  [{}]  {}",
            unit.display_name(),
            runtime,
            flags.join(","),
            scanner::describe_root(&unit.data_source, &unit.path)
        );
    }
    Ok(())
}
