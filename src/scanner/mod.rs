// Library update task: walk datasources, build or refresh media units,
// sweep orphans and gather media info

pub mod builder;
pub mod classifier;
pub mod parser;
pub mod walker;

use anyhow::{Context, Result};
use futures::StreamExt;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::config::{LibraryConfig, ScannerConfig};
use crate::db::Catalog;
use crate::models::{MediaFileType, MediaUnit};
use crate::services::mediainfo::MediaInfoProbe;
use crate::services::nfo::NfoConnector;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskPhase {
    Scanning,
    MediaInfo,
}

/// Progress of the running phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskProgress {
    pub phase: TaskPhase,
    pub done: usize,
    pub total: usize,
}

pub type ProgressCallback = Arc<dyn Fn(TaskProgress) + Send + Sync>;

/// Update task result
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UpdateSummary {
    pub data_sources_scanned: usize,
    pub units_added: usize,
    pub units_updated: usize,
    pub units_unchanged: usize,
    pub units_failed: usize,
    pub units_removed: usize,
    pub media_info_updated: usize,
    pub cancelled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RootResult {
    Added,
    Updated,
    Unchanged,
    Failed,
    Cancelled,
}

struct RootJob {
    root: PathBuf,
    data_source: PathBuf,
    /// Every root of the datasource, so nested roots are not collected twice
    roots: Arc<BTreeSet<PathBuf>>,
}

/// Scans movie datasources into the catalog
pub struct UpdateTask {
    catalog: Arc<dyn Catalog>,
    library: Arc<LibraryConfig>,
    settings: ScannerConfig,
    nfo: Arc<dyn NfoConnector>,
    probe: Arc<dyn MediaInfoProbe>,
    progress: Option<ProgressCallback>,
    cancel: CancellationToken,
}

impl UpdateTask {
    pub fn new(
        catalog: Arc<dyn Catalog>,
        library: Arc<LibraryConfig>,
        settings: ScannerConfig,
        nfo: Arc<dyn NfoConnector>,
        probe: Arc<dyn MediaInfoProbe>,
    ) -> Self {
        Self {
            catalog,
            library,
            settings,
            nfo,
            probe,
            progress: None,
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_progress(mut self, progress: ProgressCallback) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Cancellation is checked between media roots and between units
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    fn report(&self, phase: TaskPhase, done: usize, total: usize) {
        if let Some(progress) = &self.progress {
            progress(TaskProgress { phase, done, total });
        }
    }

    /// Run a full update over `data_sources`.
    ///
    /// Per-root failures are logged and counted; the run itself only fails
    /// when the catalog cannot be listed.
    pub async fn run(&self, data_sources: &[PathBuf]) -> Result<UpdateSummary> {
        let mut summary = UpdateSummary::default();
        let mut reachable: Vec<PathBuf> = Vec::new();
        let mut jobs: Vec<RootJob> = Vec::new();

        for data_source in data_sources {
            if self.cancel.is_cancelled() {
                summary.cancelled = true;
                return Ok(summary);
            }
            if !tokio::fs::try_exists(data_source).await.unwrap_or(false) {
                tracing::warn!(
                    "Datasource {} is not reachable, skipping",
                    data_source.display()
                );
                continue;
            }

            let library = self.library.clone();
            let dir = data_source.clone();
            let roots =
                tokio::task::spawn_blocking(move || walker::find_media_roots(&dir, &library))
                    .await
                    .context("Task join error")?;
            tracing::info!(
                "Found {} media roots in {}",
                roots.len(),
                data_source.display()
            );

            let roots = Arc::new(roots);
            jobs.extend(roots.iter().map(|root| RootJob {
                root: root.clone(),
                data_source: data_source.clone(),
                roots: roots.clone(),
            }));
            reachable.push(data_source.clone());
            summary.data_sources_scanned += 1;
        }

        let total = jobs.len();
        self.report(TaskPhase::Scanning, 0, total);
        let mut results = futures::stream::iter(jobs)
            .map(|job| async move {
                if self.cancel.is_cancelled() {
                    return RootResult::Cancelled;
                }
                match self.process_root(&job).await {
                    Ok(result) => result,
                    Err(e) => {
                        tracing::error!("Failed to update {}: {:#}", job.root.display(), e);
                        RootResult::Failed
                    }
                }
            })
            .buffer_unordered(self.settings.concurrency.max(1));

        let mut done = 0;
        while let Some(result) = results.next().await {
            match result {
                RootResult::Added => summary.units_added += 1,
                RootResult::Updated => summary.units_updated += 1,
                RootResult::Unchanged => summary.units_unchanged += 1,
                RootResult::Failed => summary.units_failed += 1,
                RootResult::Cancelled => summary.cancelled = true,
            }
            done += 1;
            self.report(TaskPhase::Scanning, done, total);
        }

        if summary.cancelled || self.cancel.is_cancelled() {
            summary.cancelled = true;
            tracing::info!("Update cancelled");
            return Ok(summary);
        }

        summary.units_removed = self.remove_orphans(&reachable).await?;

        if self.settings.gather_media_info {
            summary.media_info_updated = self.gather_media_info(&reachable).await?;
            if self.cancel.is_cancelled() {
                summary.cancelled = true;
            }
        }

        tracing::info!(
            "Update complete: {} added, {} updated, {} unchanged, {} failed, {} removed",
            summary.units_added,
            summary.units_updated,
            summary.units_unchanged,
            summary.units_failed,
            summary.units_removed
        );
        Ok(summary)
    }

    async fn process_root(&self, job: &RootJob) -> Result<RootResult> {
        let existing = self.catalog.find_by_path(&job.root).await?;

        let library = self.library.clone();
        let nfo = self.nfo.clone();
        let root = job.root.clone();
        let data_source = job.data_source.clone();
        let roots = job.roots.clone();
        let (unit, result) = tokio::task::spawn_blocking(move || {
            let files = walker::collect_files(&root, &library, &roots);
            match existing {
                Some(mut unit) => {
                    let changed = builder::refresh(&mut unit, files);
                    let result = if changed {
                        RootResult::Updated
                    } else {
                        RootResult::Unchanged
                    };
                    (unit, result)
                }
                None => (
                    builder::build(&root, &data_source, files, nfo.as_ref()),
                    RootResult::Added,
                ),
            }
        })
        .await
        .context("Task join error")?;

        match result {
            RootResult::Added => tracing::info!("Added {}", unit.display_name()),
            RootResult::Updated => tracing::debug!("Refreshed files of {}", unit.display_name()),
            _ => {}
        }
        if result != RootResult::Unchanged {
            self.catalog.upsert(&unit).await?;
        }
        Ok(result)
    }

    /// Remove units whose folder is gone. Units of unreachable datasources
    /// are kept (the drive may just be offline).
    async fn remove_orphans(&self, reachable: &[PathBuf]) -> Result<usize> {
        let mut removed = 0;
        for unit in self.catalog.all().await? {
            if !belongs_to(&unit, reachable) {
                continue;
            }
            if matches!(tokio::fs::try_exists(&unit.path).await, Ok(false)) {
                tracing::info!("Removing missing {} ({})", unit.display_name(), unit.path.display());
                match self.catalog.remove(&unit).await {
                    Ok(()) => removed += 1,
                    Err(e) => tracing::warn!("Failed to remove {}: {:#}", unit.path.display(), e),
                }
            }
        }
        Ok(removed)
    }

    /// Probe video files that have no media info yet. Returns the number of
    /// files updated.
    async fn gather_media_info(&self, reachable: &[PathBuf]) -> Result<usize> {
        let units: Vec<MediaUnit> = self
            .catalog
            .all()
            .await?
            .into_iter()
            .filter(|unit| belongs_to(unit, reachable))
            .filter(|unit| {
                unit.media_files_of(MediaFileType::Video)
                    .any(|mf| !mf.has_media_info())
            })
            .collect();

        let total = units.len();
        tracing::info!("Gathering media info for {} units", total);
        self.report(TaskPhase::MediaInfo, 0, total);

        let mut results = futures::stream::iter(units)
            .map(|unit| async move {
                if self.cancel.is_cancelled() {
                    return 0;
                }
                self.probe_unit(unit).await
            })
            .buffer_unordered(self.settings.media_info_concurrency.max(1));

        let mut done = 0;
        let mut updated = 0;
        while let Some(count) = results.next().await {
            updated += count;
            done += 1;
            self.report(TaskPhase::MediaInfo, done, total);
        }
        Ok(updated)
    }

    async fn probe_unit(&self, mut unit: MediaUnit) -> usize {
        let mut probed = 0;
        for mf in unit
            .media_files
            .iter_mut()
            .filter(|mf| mf.file_type == MediaFileType::Video && !mf.has_media_info())
        {
            match self.probe.probe(&mf.path).await {
                Ok(info) => {
                    info.apply_to(mf);
                    probed += 1;
                }
                Err(e) => tracing::warn!("Failed to probe {}: {:#}", mf.path.display(), e),
            }
        }

        if probed > 0 {
            if let Err(e) = self.catalog.upsert(&unit).await {
                tracing::warn!("Failed to store media info for {}: {:#}", unit.path.display(), e);
                return 0;
            }
            tracing::debug!("Media info updated for {}", unit.display_name());
        }
        probed
    }
}

fn belongs_to(unit: &MediaUnit, data_sources: &[PathBuf]) -> bool {
    data_sources
        .iter()
        .any(|ds| unit.data_source == *ds || unit.path.starts_with(ds))
}

/// `root` relative to its datasource, for display
pub fn describe_root(data_source: &Path, root: &Path) -> String {
    root.strip_prefix(data_source)
        .unwrap_or(root)
        .display()
        .to_string()
}
