// Renames media units on disk from the configured folder and file templates
//
// Order per unit: folder move, per-file renames, subtitle pass, catalog
// update, cleanup of replaced files and empty folders.

mod iso639;
pub mod languages;
pub mod template;

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::config::RenamerConfig;
use crate::db::Catalog;
use crate::models::{FileNaming, MediaFile, MediaFileType, MediaUnit, SubtitleInfo};
use crate::scanner::{parser, walker};

/// Failures that abort the rename of a whole unit
#[derive(Debug, thiserror::Error)]
pub enum RenameError {
    #[error("destination {} already exists", .0.display())]
    DestinationExists(PathBuf),

    #[error("cannot move {} into its own subfolder {}", .from.display(), .to.display())]
    DestinationInsideSource { from: PathBuf, to: PathBuf },

    #[error("failed to move {} to {}: {}", .from.display(), .to.display(), .source)]
    MoveFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("catalog error: {0:#}")]
    Catalog(anyhow::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameOutcome {
    /// The folder template expanded to nothing
    Skipped,
    Renamed {
        folder_moved: bool,
        /// Files whose move/copy failed; their old records were kept
        failed_files: usize,
    },
}

/// Planned change for one media file, computed against the final unit folder
#[derive(Debug, Clone, PartialEq)]
enum FileAction {
    Keep,
    Move(PathBuf),
    /// One copy per naming convention
    Copy(Vec<PathBuf>),
    /// Move bound to the rename of the video at `owner`
    Subtitle {
        owner: usize,
        to: PathBuf,
        info: SubtitleInfo,
    },
}

/// What `rename` would do, without touching the disk
#[derive(Debug, Clone, PartialEq)]
pub struct RenamePreview {
    pub folder: PathBuf,
    /// (current path, new path) for every file that changes location
    pub files: Vec<(PathBuf, PathBuf)>,
}

#[derive(Debug, Clone, Copy)]
enum Transfer {
    Move,
    Copy,
}

pub struct Renamer {
    settings: RenamerConfig,
    catalog: Arc<dyn Catalog>,
}

impl Renamer {
    pub fn new(settings: RenamerConfig, catalog: Arc<dyn Catalog>) -> Self {
        Self { settings, catalog }
    }

    /// Rename `unit` in place and store the result in the catalog.
    ///
    /// Only the folder move (and the final catalog update) can fail the whole
    /// operation; single file failures are logged and the old record is kept.
    pub async fn rename(&self, unit: &mut MediaUnit) -> Result<RenameOutcome, RenameError> {
        let Some((destination, nested)) = self.resolve_folder(unit).await? else {
            tracing::info!(
                "Skipped renaming {}: folder template expands to nothing",
                unit.path.display()
            );
            return Ok(RenameOutcome::Skipped);
        };

        let folder_moved = destination != unit.path;
        if folder_moved {
            self.move_folder(&unit.path, &destination).await?;
            tracing::info!("Moved {} -> {}", unit.path.display(), destination.display());
            unit.rebase_path(&destination);
        }

        let actions = self.plan(unit);
        let original = unit.media_files.clone();
        let mut needed: Vec<MediaFile> = Vec::with_capacity(original.len());
        let mut cleanup: Vec<(PathBuf, PathBuf)> = Vec::new();
        let mut renamed = vec![false; original.len()];
        let mut failed_files = 0;

        for (index, (mf, action)) in original.iter().zip(&actions).enumerate() {
            match action {
                FileAction::Keep => needed.push(mf.clone()),
                FileAction::Move(to) => match transfer(&mf.path, to, Transfer::Move).await {
                    Ok(true) => {
                        renamed[index] = true;
                        needed.push(mf.with_path(to.clone()));
                    }
                    Ok(false) => needed.push(mf.clone()),
                    Err(e) => {
                        tracing::warn!("Failed to rename {}: {}", mf.path.display(), e);
                        failed_files += 1;
                        needed.push(mf.clone());
                    }
                },
                FileAction::Copy(targets) => {
                    let mut copies = 0;
                    for to in targets.iter().filter(|to| **to != mf.path) {
                        match transfer(&mf.path, to, Transfer::Copy).await {
                            Ok(true) => {
                                copies += 1;
                                needed.push(mf.with_path(to.clone()));
                                cleanup.push((mf.path.clone(), to.clone()));
                            }
                            Ok(false) => {}
                            Err(e) => {
                                tracing::warn!(
                                    "Failed to copy {} to {}: {}",
                                    mf.path.display(),
                                    to.display(),
                                    e
                                );
                                failed_files += 1;
                            }
                        }
                    }
                    if copies == 0 || targets.contains(&mf.path) {
                        needed.push(mf.clone());
                    }
                }
                // Handled after all videos are renamed
                FileAction::Subtitle { .. } => {}
            }
        }

        for (mf, action) in original.iter().zip(&actions) {
            let FileAction::Subtitle { owner, to, info } = action else {
                continue;
            };
            if !renamed[*owner] {
                tracing::debug!(
                    "Keeping {}: its video was not renamed",
                    mf.path.display()
                );
                needed.push(mf.clone());
                continue;
            }
            match transfer(&mf.path, to, Transfer::Move).await {
                Ok(true) => {
                    let mut subtitle = mf.with_path(to.clone());
                    subtitle.subtitle = Some(info.clone());
                    needed.push(subtitle);
                }
                Ok(false) => needed.push(mf.clone()),
                Err(e) => {
                    tracing::warn!("Failed to rename subtitle {}: {}", mf.path.display(), e);
                    failed_files += 1;
                    needed.push(mf.clone());
                }
            }
        }

        let mut seen = HashSet::new();
        needed.retain(|mf| seen.insert(mf.path.clone()));
        unit.media_files = needed;
        unit.sort_media_files();
        unit.sync_local_references();

        self.catalog
            .upsert(unit)
            .await
            .map_err(RenameError::Catalog)?;

        let final_paths: HashSet<&Path> = unit.media_files.iter().map(|mf| mf.path.as_path()).collect();
        let mut removed = HashSet::new();
        for (old, new) in &cleanup {
            if !final_paths.contains(new.as_path())
                || final_paths.contains(old.as_path())
                || !removed.insert(old.clone())
            {
                continue;
            }
            match tokio::fs::remove_file(old).await {
                Ok(()) => tracing::debug!("Removed replaced file {}", old.display()),
                Err(e) => tracing::warn!("Failed to remove {}: {}", old.display(), e),
            }
        }

        // Disc structures are left exactly as they are
        if !unit.is_disc {
            remove_empty_dirs(&unit.path, &nested).await;
        }

        tracing::info!(
            "Renamed {} ({} file(s) failed)",
            unit.display_name(),
            failed_files
        );
        Ok(RenameOutcome::Renamed {
            folder_moved,
            failed_files,
        })
    }

    /// Compute the destination folder and file names without renaming anything.
    /// Returns `None` when the rename would be skipped.
    pub async fn preview(&self, unit: &MediaUnit) -> Result<Option<RenamePreview>, RenameError> {
        let Some((folder, _)) = self.resolve_folder(unit).await? else {
            return Ok(None);
        };
        let mut moved = unit.clone();
        moved.rebase_path(&folder);
        let actions = self.plan(&moved);

        let mut files = Vec::new();
        for ((old, current), action) in unit.media_files.iter().zip(&moved.media_files).zip(actions) {
            match action {
                FileAction::Keep => {
                    if current.path != old.path {
                        files.push((old.path.clone(), current.path.clone()));
                    }
                }
                FileAction::Move(to) | FileAction::Subtitle { to, .. } => {
                    if to != old.path {
                        files.push((old.path.clone(), to));
                    }
                }
                FileAction::Copy(targets) => {
                    for to in targets {
                        if to != old.path {
                            files.push((old.path.clone(), to));
                        }
                    }
                }
            }
        }

        Ok(Some(RenamePreview { folder, files }))
    }

    /// Final folder of the unit plus the roots of other units inside it.
    ///
    /// A folder holding other media units (e.g. a stacked movie promoted to a
    /// collection folder) stays where it is; only the unit's own files are
    /// renamed.
    async fn resolve_folder(
        &self,
        unit: &MediaUnit,
    ) -> Result<Option<(PathBuf, Vec<PathBuf>)>, RenameError> {
        let Some(destination) = self.destination_folder(unit) else {
            return Ok(None);
        };
        let nested = self.nested_roots(unit).await?;
        if !nested.is_empty() && destination != unit.path {
            tracing::info!(
                "Keeping folder {}: it holds {} other media unit(s)",
                unit.path.display(),
                nested.len()
            );
            return Ok(Some((unit.path.clone(), nested)));
        }
        Ok(Some((destination, nested)))
    }

    async fn nested_roots(&self, unit: &MediaUnit) -> Result<Vec<PathBuf>, RenameError> {
        let units = self.catalog.all().await.map_err(RenameError::Catalog)?;
        Ok(units
            .into_iter()
            .filter(|other| {
                other.id != unit.id && other.path != unit.path && other.path.starts_with(&unit.path)
            })
            .map(|other| other.path)
            .collect())
    }

    fn destination_folder(&self, unit: &MediaUnit) -> Option<PathBuf> {
        let relative = template::expand(&self.settings.path_template, unit);
        if relative.is_empty() {
            return None;
        }
        // Files lying directly in the datasource have no folder of their own
        if unit.path == unit.data_source {
            tracing::debug!("{} is a datasource, folder stays", unit.path.display());
            return Some(unit.path.clone());
        }
        Some(unit.data_source.join(relative))
    }

    /// New base filename (no stacking, no extension)
    fn file_base(&self, unit: &MediaUnit) -> String {
        let base = template::expand_filename(&self.settings.filename_template, unit);
        if !base.is_empty() {
            return base;
        }
        unit.first_video()
            .map(|v| parser::strip_stacking(&v.basename))
            .unwrap_or_default()
    }

    /// One action per media file, in `unit.media_files` order
    fn plan(&self, unit: &MediaUnit) -> Vec<FileAction> {
        let base = self.file_base(unit);
        let folder = unit.path.as_path();
        let mut actions = vec![FileAction::Keep; unit.media_files.len()];
        let mut videos: Vec<VideoRename> = Vec::new();

        for (index, mf) in unit.media_files.iter().enumerate() {
            if walker::is_inside_disc_structure(&mf.path, folder) {
                continue;
            }
            actions[index] = match mf.file_type {
                MediaFileType::Video if !unit.is_disc && !base.is_empty() => {
                    let new_basename = match stacking_suffix(mf) {
                        Some(suffix) => format!("{}.{}", base, suffix),
                        None => base.clone(),
                    };
                    let to = folder.join(format!("{}.{}", new_basename, mf.extension));
                    videos.push(VideoRename {
                        index,
                        stacking: mf.stacking,
                        old_basename: parser::strip_stacking(&mf.basename),
                        new_basename,
                    });
                    FileAction::Move(to)
                }
                MediaFileType::Trailer if !base.is_empty() => {
                    FileAction::Move(folder.join(format!("{}-trailer.{}", base, mf.extension)))
                }
                MediaFileType::Nfo => self.sidecar_action(&self.settings.nfo_naming, mf, unit, &base),
                MediaFileType::Poster => {
                    self.sidecar_action(&self.settings.poster_naming, mf, unit, &base)
                }
                MediaFileType::Fanart => {
                    self.sidecar_action(&self.settings.fanart_naming, mf, unit, &base)
                }
                _ => FileAction::Keep,
            };
        }

        if !unit.is_disc {
            for (index, mf) in unit.media_files.iter().enumerate() {
                if mf.file_type == MediaFileType::Subtitle && !mf.is_packed {
                    if let Some(action) = subtitle_action(mf, &videos, folder) {
                        actions[index] = action;
                    }
                }
            }
        }

        actions
    }

    fn sidecar_action<N: FileNaming>(
        &self,
        conventions: &[N],
        mf: &MediaFile,
        unit: &MediaUnit,
        base: &str,
    ) -> FileAction {
        let mut targets: Vec<PathBuf> = Vec::new();
        for convention in conventions {
            if convention.is_filename_based() && (unit.is_disc || base.is_empty()) {
                continue;
            }
            let target = unit.path.join(convention.filename(base));
            if !same_extension(&target, &mf.extension) {
                continue;
            }
            if !targets.contains(&target) {
                targets.push(target);
            }
        }

        if targets.is_empty() {
            FileAction::Keep
        } else {
            FileAction::Copy(targets)
        }
    }

    async fn move_folder(&self, from: &Path, to: &Path) -> Result<(), RenameError> {
        if to.starts_with(from) {
            return Err(RenameError::DestinationInsideSource {
                from: from.to_path_buf(),
                to: to.to_path_buf(),
            });
        }
        // A case-only rename on a case-insensitive filesystem sees itself
        if tokio::fs::try_exists(to).await.unwrap_or(false) && !is_same_file(from, to).await {
            return Err(RenameError::DestinationExists(to.to_path_buf()));
        }

        let move_failed = |source: io::Error| RenameError::MoveFailed {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        };
        if let Some(parent) = to.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(move_failed)?;
        }

        let delay = Duration::from_millis(self.settings.retry_delay_ms);
        let mut attempt = 0;
        loop {
            match tokio::fs::rename(from, to).await {
                Ok(()) => return Ok(()),
                Err(e) if attempt < self.settings.move_retries => {
                    attempt += 1;
                    tracing::warn!(
                        "Moving {} failed ({}), retry {}/{}",
                        from.display(),
                        e,
                        attempt,
                        self.settings.move_retries
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(move_failed(e)),
            }
        }
    }
}

/// A planned video rename that subtitles can bind to
struct VideoRename {
    index: usize,
    stacking: u32,
    /// Old basename without stacking marker
    old_basename: String,
    /// New basename including the stacking suffix
    new_basename: String,
}

fn stacking_suffix(mf: &MediaFile) -> Option<String> {
    if mf.stacking == 0 {
        return None;
    }
    Some(
        mf.stacking_marker
            .clone()
            .unwrap_or_else(|| format!("CD{}", mf.stacking)),
    )
}

/// `<video basename>[.forced][.<language>][.<other tokens>].<ext>`
///
/// Tokens that are neither "forced" nor a language (e.g. "sdh", "hi") are
/// kept in their original order.
fn subtitle_action(mf: &MediaFile, videos: &[VideoRename], folder: &Path) -> Option<FileAction> {
    let owner = videos
        .iter()
        .find(|v| mf.stacking > 0 && v.stacking == mf.stacking)
        .or_else(|| videos.first())?;

    let name = parser::strip_stacking(&mf.basename);
    let rest = match name.get(..owner.old_basename.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(&owner.old_basename) => &name[prefix.len()..],
        _ => name.as_str(),
    };

    let tokens: Vec<&str> = rest
        .split(['.', '_', ' '])
        .map(|t| t.trim_matches('-'))
        .filter(|t| !t.is_empty())
        .collect();
    let forced = tokens.iter().any(|t| t.eq_ignore_ascii_case("forced"));
    let tokens: Vec<&str> = tokens
        .into_iter()
        .filter(|t| !t.eq_ignore_ascii_case("forced"))
        .collect();
    let language = languages::find(&tokens);

    let mut parts = vec![owner.new_basename.clone()];
    if forced {
        parts.push("forced".to_string());
    }
    if let Some(language) = &language {
        parts.push(language.text.clone());
    }
    parts.extend(
        tokens
            .iter()
            .enumerate()
            .filter(|(i, _)| !language.as_ref().is_some_and(|l| l.span.contains(i)))
            .map(|(_, t)| t.to_string()),
    );
    parts.push(mf.extension.clone());

    Some(FileAction::Subtitle {
        owner: owner.index,
        to: folder.join(parts.join(".")),
        info: SubtitleInfo {
            language: language.as_ref().map(|l| l.text.clone()),
            iso_code: language.map(|l| l.iso_code.to_string()),
            forced,
        },
    })
}

fn normalized_extension(ext: &str) -> String {
    let ext = ext.to_lowercase();
    match ext.as_str() {
        "jpeg" => "jpg".to_string(),
        _ => ext,
    }
}

fn same_extension(target: &Path, ext: &str) -> bool {
    target
        .extension()
        .map(|e| normalized_extension(&e.to_string_lossy()) == normalized_extension(ext))
        .unwrap_or(false)
}

async fn is_same_file(a: &Path, b: &Path) -> bool {
    match (tokio::fs::canonicalize(a).await, tokio::fs::canonicalize(b).await) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Move or copy a single file. Returns `Ok(false)` when the destination
/// already exists (never overwritten).
async fn transfer(from: &Path, to: &Path, mode: Transfer) -> io::Result<bool> {
    if from == to {
        return Ok(true);
    }
    if tokio::fs::try_exists(to).await? {
        let case_only = matches!(mode, Transfer::Move) && is_same_file(from, to).await;
        if !case_only {
            tracing::warn!("Not overwriting existing {}", to.display());
            return Ok(false);
        }
    }
    if let Some(parent) = to.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    match mode {
        Transfer::Move => tokio::fs::rename(from, to).await?,
        Transfer::Copy => {
            tokio::fs::copy(from, to).await?;
        }
    }
    tracing::debug!("{:?} {} -> {}", mode, from.display(), to.display());
    Ok(true)
}

/// Remove empty folders below `dir` (not `dir` itself), never descending
/// into `protected`. Returns true if `dir` is empty afterwards.
async fn remove_empty_dirs(dir: &Path, protected: &[PathBuf]) -> bool {
    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(_) => return false,
    };

    let mut is_empty = true;
    while let Ok(Some(entry)) = entries.next_entry().await {
        let path = entry.path();
        let is_dir = entry
            .file_type()
            .await
            .map(|t| t.is_dir())
            .unwrap_or(false);

        if is_dir && !protected.contains(&path) && Box::pin(remove_empty_dirs(&path, protected)).await {
            match tokio::fs::remove_dir(&path).await {
                Ok(()) => {
                    tracing::debug!("Removed empty folder {}", path.display());
                    continue;
                }
                Err(e) => tracing::warn!("Failed to remove folder {}: {}", path.display(), e),
            }
        }
        is_empty = false;
    }
    is_empty
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LibraryConfig;
    use crate::db::memory::MemoryCatalog;
    use crate::models::{FanartNaming, PosterNaming};
    use crate::scanner::builder;
    use crate::services::nfo::KodiMovieNfo;
    use std::fs;
    use tempfile::TempDir;

    fn touch(base: &Path, relative: &str) {
        let path = base.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, relative.as_bytes()).unwrap();
    }

    fn settings() -> RenamerConfig {
        RenamerConfig {
            move_retries: 1,
            retry_delay_ms: 0,
            ..Default::default()
        }
    }

    fn renamer(settings: RenamerConfig) -> (Renamer, Arc<MemoryCatalog>) {
        let catalog = Arc::new(MemoryCatalog::new());
        (Renamer::new(settings, catalog.clone()), catalog)
    }

    /// Scan a single media root the way the update task does
    fn scan(data_source: &Path, root: &Path) -> MediaUnit {
        let library = LibraryConfig::default();
        let roots = walker::find_media_roots(data_source, &library);
        let files = walker::collect_files(root, &library, &roots);
        builder::build(root, data_source, files, &KodiMovieNfo)
    }

    fn names(unit: &MediaUnit) -> Vec<String> {
        unit.media_files
            .iter()
            .map(|mf| {
                mf.path
                    .strip_prefix(&unit.path)
                    .unwrap()
                    .to_string_lossy()
                    .to_string()
            })
            .collect()
    }

    #[tokio::test]
    async fn test_rename_movie_and_forced_subtitle() {
        let tmp = TempDir::new().unwrap();
        let ds = tmp.path();
        for name in [
            "Movie/Movie.mkv",
            "Movie/Movie.en.forced.srt",
            "Movie/poster.jpg",
            "Movie/Movie-trailer.mp4",
            "Movie/notes.txt",
        ] {
            touch(ds, name);
        }
        let mut unit = scan(ds, &ds.join("Movie"));
        unit.title = "NewTitle".to_string();
        unit.year = Some(2001);

        let (renamer, catalog) = renamer(settings());
        let outcome = renamer.rename(&mut unit).await.unwrap();
        assert_eq!(
            outcome,
            RenameOutcome::Renamed {
                folder_moved: true,
                failed_files: 0
            }
        );

        let folder = ds.join("NewTitle (2001)");
        assert_eq!(unit.path, folder);
        assert!(!ds.join("Movie").exists());
        assert!(folder.join("NewTitle (2001).mkv").exists());
        assert!(folder.join("NewTitle (2001).forced.en.srt").exists());
        assert!(folder.join("NewTitle (2001)-trailer.mp4").exists());
        assert!(folder.join("poster.jpg").exists());
        assert!(folder.join("notes.txt").exists());

        let subtitle = unit.media_files_of(MediaFileType::Subtitle).next().unwrap();
        let info = subtitle.subtitle.as_ref().unwrap();
        assert!(info.forced);
        assert_eq!(info.iso_code.as_deref(), Some("en"));

        assert!(unit.trailers[0].url.contains("NewTitle"));
        assert!(unit.poster_url.as_deref().unwrap().contains("NewTitle"));

        let stored = catalog.find_by_path(&folder).await.unwrap().unwrap();
        assert_eq!(stored, unit);
    }

    #[tokio::test]
    async fn test_empty_folder_template_skips() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "Movie/Movie.mkv");
        let mut unit = scan(tmp.path(), &tmp.path().join("Movie"));
        assert_eq!(unit.year, None);
        let before = unit.clone();

        let (renamer, catalog) = renamer(RenamerConfig {
            path_template: "$Y".to_string(),
            ..settings()
        });

        assert_eq!(renamer.rename(&mut unit).await.unwrap(), RenameOutcome::Skipped);
        assert_eq!(unit, before);
        assert!(tmp.path().join("Movie/Movie.mkv").exists());
        assert_eq!(catalog.len().await, 0);
        assert!(renamer.preview(&unit).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_disc_files_untouched() {
        let tmp = TempDir::new().unwrap();
        let ds = tmp.path();
        touch(ds, "X/BDMV/STREAM/00001.m2ts");
        touch(ds, "X/BDMV/index.bdmv");
        touch(ds, "X/BDMV/BACKUP/.keep");
        touch(ds, "X/folder.jpg");
        let mut unit = scan(ds, &ds.join("X"));
        assert!(unit.is_disc);
        unit.year = Some(2010);

        let (renamer, _catalog) = renamer(settings());
        renamer.rename(&mut unit).await.unwrap();

        let folder = ds.join("X (2010)");
        assert!(folder.join("BDMV/STREAM/00001.m2ts").exists());
        assert!(folder.join("BDMV/index.bdmv").exists());
        // folder.jpg was copied to the fixed poster name
        assert!(folder.join("poster.jpg").exists());
        assert!(!folder.join("folder.jpg").exists());
        assert!(names(&unit).contains(&"BDMV/STREAM/00001.m2ts".to_string()));
    }

    #[tokio::test]
    async fn test_no_clobber() {
        let tmp = TempDir::new().unwrap();
        let ds = tmp.path();
        touch(ds, "Heat (1995)/heat.mkv");
        let mut unit = scan(ds, &ds.join("Heat (1995)"));
        // Occupy the video's destination name
        touch(ds, "Heat (1995)/Heat (1995).mkv");

        let (renamer, _catalog) = renamer(settings());
        let outcome = renamer.rename(&mut unit).await.unwrap();
        assert_eq!(
            outcome,
            RenameOutcome::Renamed {
                folder_moved: false,
                failed_files: 0
            }
        );

        let folder = ds.join("Heat (1995)");
        assert!(folder.join("heat.mkv").exists());
        assert_eq!(
            fs::read(folder.join("Heat (1995).mkv")).unwrap(),
            b"Heat (1995)/Heat (1995).mkv"
        );
        assert!(names(&unit).contains(&"heat.mkv".to_string()));
    }

    #[tokio::test]
    async fn test_destination_folder_exists_aborts() {
        let tmp = TempDir::new().unwrap();
        let ds = tmp.path();
        touch(ds, "Movie/Movie.mkv");
        touch(ds, "Heat (1995)/other.mkv");
        let mut unit = scan(ds, &ds.join("Movie"));
        unit.title = "Heat".to_string();
        unit.year = Some(1995);
        let before = unit.clone();

        let (renamer, catalog) = renamer(settings());
        let err = renamer.rename(&mut unit).await.unwrap_err();
        assert!(matches!(err, RenameError::DestinationExists(_)));
        assert_eq!(unit, before);
        assert!(ds.join("Movie/Movie.mkv").exists());
        assert_eq!(catalog.len().await, 0);
    }

    #[tokio::test]
    async fn test_sidecar_conventions() {
        let tmp = TempDir::new().unwrap();
        let ds = tmp.path();
        touch(ds, "Heat/Heat.mkv");
        touch(ds, "Heat/Heat.nfo");
        touch(ds, "Heat/cover.png");
        touch(ds, "Heat/fanart.jpg");
        let mut unit = scan(ds, &ds.join("Heat"));
        unit.year = Some(1995);

        let (renamer, _catalog) = renamer(RenamerConfig {
            poster_naming: vec![PosterNaming::PosterJpg, PosterNaming::FilenamePosterPng],
            fanart_naming: vec![FanartNaming::FanartJpg, FanartNaming::FilenameFanartJpg],
            ..settings()
        });
        renamer.rename(&mut unit).await.unwrap();

        let mut names = names(&unit);
        names.sort();
        assert_eq!(
            names,
            vec![
                "Heat (1995)-fanart.jpg",
                "Heat (1995)-poster.png",
                "Heat (1995).mkv",
                "Heat (1995).nfo",
                "fanart.jpg",
            ]
        );
        let folder = ds.join("Heat (1995)");
        assert!(!folder.join("Heat.nfo").exists());
        assert!(!folder.join("cover.png").exists());
        // A PNG is never copied to a .jpg name
        assert!(!folder.join("poster.jpg").exists());
    }

    #[tokio::test]
    async fn test_stacked_videos_and_subtitles() {
        let tmp = TempDir::new().unwrap();
        let ds = tmp.path();
        touch(ds, "Collection/Movie/Movie-cd1.mkv");
        touch(ds, "Collection/Movie/Movie-cd2.mkv");
        touch(ds, "Collection/Movie/Movie-cd2.de.srt");
        let mut unit = scan(ds, &ds.join("Collection"));
        unit.title = "Movie".to_string();
        unit.year = Some(1999);

        let (renamer, _catalog) = renamer(settings());
        renamer.rename(&mut unit).await.unwrap();

        let folder = ds.join("Movie (1999)");
        assert!(folder.join("Movie (1999).cd1.mkv").exists());
        assert!(folder.join("Movie (1999).cd2.mkv").exists());
        assert!(folder.join("Movie (1999).cd2.de.srt").exists());
        // The emptied subfolder is gone
        assert!(!folder.join("Movie").exists());
    }

    #[tokio::test]
    async fn test_folder_holding_another_unit_stays() {
        let tmp = TempDir::new().unwrap();
        let ds = tmp.path();
        touch(ds, "Collection/Movie/Movie-cd1.mkv");
        touch(ds, "Collection/Movie/Movie-cd2.mkv");
        touch(ds, "Collection/Other/other.mkv");
        let roots = walker::find_media_roots(ds, &LibraryConfig::default());
        assert_eq!(
            roots.into_iter().collect::<Vec<_>>(),
            vec![ds.join("Collection"), ds.join("Collection/Other")]
        );

        let other = scan(ds, &ds.join("Collection/Other"));
        let mut unit = scan(ds, &ds.join("Collection"));
        unit.title = "Movie".to_string();
        unit.year = Some(1999);

        let (renamer, catalog) = renamer(settings());
        catalog.upsert(&other).await.unwrap();
        catalog.upsert(&unit).await.unwrap();

        let folder = ds.join("Collection");
        let preview = renamer.preview(&unit).await.unwrap().unwrap();
        assert_eq!(preview.folder, folder);

        let outcome = renamer.rename(&mut unit).await.unwrap();
        assert_eq!(
            outcome,
            RenameOutcome::Renamed {
                folder_moved: false,
                failed_files: 0
            }
        );
        assert_eq!(unit.path, folder);
        assert!(!ds.join("Movie (1999)").exists());
        assert!(folder.join("Movie (1999).cd1.mkv").exists());
        assert!(folder.join("Movie (1999).cd2.mkv").exists());
        assert!(!folder.join("Movie").exists());

        // The nested unit is untouched on disk and in the catalog
        assert!(folder.join("Other/other.mkv").exists());
        let stored = catalog.find_by_path(&folder.join("Other")).await.unwrap().unwrap();
        assert_eq!(stored, other);
    }

    #[tokio::test]
    async fn test_failed_folder_move_leaves_unit_untouched() {
        let tmp = TempDir::new().unwrap();
        let ds = tmp.path();
        // Folder removed after the last scan
        let mut unit = MediaUnit {
            title: "Heat".to_string(),
            year: Some(1995),
            path: ds.join("heat"),
            data_source: ds.to_path_buf(),
            ..Default::default()
        };
        unit.add_media_file(MediaFile::new(ds.join("heat/heat.mkv"), MediaFileType::Video));
        let before = unit.clone();

        let (renamer, catalog) = renamer(RenamerConfig {
            move_retries: 2,
            retry_delay_ms: 1,
            ..settings()
        });
        match renamer.rename(&mut unit).await.unwrap_err() {
            RenameError::MoveFailed { from, to, .. } => {
                assert_eq!(from, ds.join("heat"));
                assert_eq!(to, ds.join("Heat (1995)"));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(unit, before);
        assert_eq!(catalog.len().await, 0);
        assert!(!ds.join("Heat (1995)").exists());
    }

    #[tokio::test]
    async fn test_folder_move_into_blocked_parent_fails() {
        let tmp = TempDir::new().unwrap();
        let ds = tmp.path();
        touch(ds, "Movie/Movie.mkv");
        // A file where the new parent folder should go
        touch(ds, "Heat");
        let mut unit = scan(ds, &ds.join("Movie"));
        unit.title = "Heat".to_string();
        unit.year = Some(1995);
        let before = unit.clone();

        let (renamer, catalog) = renamer(RenamerConfig {
            path_template: "$T/$Y".to_string(),
            move_retries: 1,
            ..settings()
        });
        let err = renamer.rename(&mut unit).await.unwrap_err();
        assert!(matches!(err, RenameError::MoveFailed { .. }));
        assert_eq!(unit, before);
        assert!(ds.join("Movie/Movie.mkv").exists());
        assert_eq!(catalog.len().await, 0);
    }

    #[tokio::test]
    async fn test_rename_then_rescan_is_stable() {
        let tmp = TempDir::new().unwrap();
        let ds = tmp.path();
        touch(ds, "the.matrix.1999.1080p/the.matrix.1999.1080p.mkv");
        touch(ds, "the.matrix.1999.1080p/the.matrix.1999.1080p.eng.srt");
        touch(ds, "the.matrix.1999.1080p/poster.jpg");
        let mut unit = scan(ds, &ds.join("the.matrix.1999.1080p"));
        assert_eq!(unit.title, "the matrix");
        unit.title = "The Matrix".to_string();

        let (renamer, _catalog) = renamer(settings());
        renamer.rename(&mut unit).await.unwrap();

        let rescanned = scan(ds, &unit.path);
        assert_eq!(rescanned.path, ds.join("The Matrix (1999)"));
        assert_eq!(rescanned.title, unit.title);
        assert_eq!(rescanned.year, unit.year);
        let roles = |u: &MediaUnit| u.media_files.iter().map(|mf| mf.file_type).collect::<Vec<_>>();
        assert_eq!(roles(&rescanned), roles(&unit));
        assert_eq!(names(&rescanned), names(&unit));

        // A second rename changes nothing
        let mut again = rescanned.clone();
        let outcome = renamer.rename(&mut again).await.unwrap();
        assert_eq!(
            outcome,
            RenameOutcome::Renamed {
                folder_moved: false,
                failed_files: 0
            }
        );
        assert_eq!(names(&again), names(&unit));
    }

    #[tokio::test]
    async fn test_preview() {
        let (renamer, _catalog) = renamer(settings());
        let mut unit = MediaUnit {
            title: "Heat".to_string(),
            year: Some(1995),
            path: PathBuf::from("/movies/heat"),
            data_source: PathBuf::from("/movies"),
            ..Default::default()
        };
        unit.add_media_file(MediaFile::new(
            PathBuf::from("/movies/heat/heat.mkv"),
            MediaFileType::Video,
        ));
        unit.add_media_file(MediaFile::new(
            PathBuf::from("/movies/heat/readme.txt"),
            MediaFileType::Unknown,
        ));

        let preview = renamer.preview(&unit).await.unwrap().unwrap();
        assert_eq!(preview.folder, PathBuf::from("/movies/Heat (1995)"));
        assert_eq!(
            preview.files,
            vec![
                (
                    PathBuf::from("/movies/heat/heat.mkv"),
                    PathBuf::from("/movies/Heat (1995)/Heat (1995).mkv")
                ),
                (
                    PathBuf::from("/movies/heat/readme.txt"),
                    PathBuf::from("/movies/Heat (1995)/readme.txt")
                ),
            ]
        );
    }

    #[test]
    fn test_subtitle_names() {
        let videos = vec![VideoRename {
            index: 0,
            stacking: 0,
            old_basename: "Movie".to_string(),
            new_basename: "New (2000)".to_string(),
        }];
        let folder = Path::new("/m");
        let target = |name: &str| {
            let mf = MediaFile::new(folder.join(name), MediaFileType::Subtitle);
            match subtitle_action(&mf, &videos, folder).unwrap() {
                FileAction::Subtitle { to, info, .. } => (to, info),
                other => panic!("unexpected {:?}", other),
            }
        };

        assert_eq!(target("Movie.srt").0, folder.join("New (2000).srt"));
        assert_eq!(target("Movie.German.srt").0, folder.join("New (2000).German.srt"));
        assert_eq!(target("movie_FORCED_fre.ass").0, folder.join("New (2000).forced.fre.ass"));

        let (to, info) = target("Movie.sdh.srt");
        assert_eq!(to, folder.join("New (2000).sdh.srt"));
        assert_eq!(info, SubtitleInfo::default());
    }

    #[test]
    fn test_subtitle_names_keep_language_and_extra_tokens() {
        let videos = vec![VideoRename {
            index: 0,
            stacking: 0,
            old_basename: "Movie".to_string(),
            new_basename: "New (2000)".to_string(),
        }];
        let folder = Path::new("/m");
        let target = |name: &str| {
            let mf = MediaFile::new(folder.join(name), MediaFileType::Subtitle);
            match subtitle_action(&mf, &videos, folder).unwrap() {
                FileAction::Subtitle { to, info, .. } => (to, info),
                other => panic!("unexpected {:?}", other),
            }
        };

        let (to, info) = target("Movie.en.sdh.srt");
        assert_eq!(to, folder.join("New (2000).en.sdh.srt"));
        assert_eq!(info.iso_code.as_deref(), Some("en"));

        let (to, info) = target("Movie.pt-BR.srt");
        assert_eq!(to, folder.join("New (2000).pt-BR.srt"));
        assert_eq!(info.iso_code.as_deref(), Some("pt"));

        let (to, info) = target("Movie.Malay.srt");
        assert_eq!(to, folder.join("New (2000).Malay.srt"));
        assert_eq!(info.iso_code.as_deref(), Some("ms"));

        // "hi" after a language is a hearing-impaired tag, not Hindi
        let (to, info) = target("Movie.eng.hi.srt");
        assert_eq!(to, folder.join("New (2000).eng.hi.srt"));
        assert_eq!(info.iso_code.as_deref(), Some("en"));

        let (to, info) = target("Movie-forced.sdh.German.srt");
        assert_eq!(to, folder.join("New (2000).forced.German.sdh.srt"));
        assert!(info.forced);
        assert_eq!(info.language.as_deref(), Some("German"));
    }
}
