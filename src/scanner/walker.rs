// Directory walking and media root detection
//
// A datasource is depth 0, its direct children depth 1. Root precedence for
// every main video file: disc marker > stacking promotion > parent directory.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::config::LibraryConfig;
use crate::models::MediaFile;
use crate::scanner::{classifier, parser};

/// Folder names of optical disc structures
pub const DISC_MARKERS: &[&str] = &["BDMV", "VIDEO_TS"];

/// Folders that never contain media (NAS metadata, trash, Kodi actor images)
const SKIP_FOLDER_NAMES: &[&str] = &[
    "@eadir",
    "#recycle",
    "$recycle.bin",
    ".trash",
    "lost+found",
    ".actors",
    "extrafanart",
    "extrathumbs",
];

/// Marker files that exclude a directory and its subtree
const IGNORE_FILES: &[&str] = &[".ignore", ".mmignore"];

pub fn is_disc_marker(name: &str) -> bool {
    DISC_MARKERS
        .iter()
        .any(|marker| marker.eq_ignore_ascii_case(name))
}

/// True if any directory between `root` and `path` is a disc marker
pub fn is_inside_disc_structure(path: &Path, root: &Path) -> bool {
    let relative = match path.strip_prefix(root) {
        Ok(relative) => relative,
        Err(_) => return false,
    };
    // The last component is the file itself
    let mut components: Vec<_> = relative.components().collect();
    components.pop();
    components
        .iter()
        .any(|c| is_disc_marker(&c.as_os_str().to_string_lossy()))
}

fn should_skip_folder(folder_name: &str) -> bool {
    let name_lower = folder_name.to_lowercase();
    SKIP_FOLDER_NAMES.contains(&name_lower.as_str())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Visible entries of one directory, sorted by path
#[derive(Debug, Default)]
struct DirListing {
    files: Vec<PathBuf>,
    dirs: Vec<PathBuf>,
    /// Directory carries an ignore marker file
    ignored: bool,
}

fn read_dir_sorted(dir: &Path) -> Option<DirListing> {
    let read_dir = match std::fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(e) => {
            tracing::warn!("Cannot read directory {}: {}", dir.display(), e);
            return None;
        }
    };

    let mut listing = DirListing::default();
    for entry in read_dir.flatten() {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().to_string();

        if IGNORE_FILES.contains(&name.as_str()) {
            listing.ignored = true;
            continue;
        }
        if name.starts_with('.') {
            continue;
        }

        // DirEntry::file_type does not follow symlinks
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        let is_dir = if file_type.is_symlink() {
            if path.is_dir() {
                tracing::debug!("Not following symlinked folder {}", path.display());
                continue;
            }
            if !path.exists() {
                tracing::debug!("Skipping broken symlink {}", path.display());
                continue;
            }
            false
        } else {
            file_type.is_dir()
        };

        if is_dir {
            if should_skip_folder(&name) {
                tracing::debug!("Skipping folder: {}", path.display());
                continue;
            }
            listing.dirs.push(path);
        } else {
            listing.files.push(path);
        }
    }

    listing.files.sort();
    listing.dirs.sort();
    Some(listing)
}

/// Find one root directory per physical title below a datasource
pub fn find_media_roots(data_source: &Path, settings: &LibraryConfig) -> BTreeSet<PathBuf> {
    let mut roots = BTreeSet::new();
    walk_for_roots(data_source, 0, settings, &mut roots);
    roots
}

fn walk_for_roots(dir: &Path, depth: usize, settings: &LibraryConfig, roots: &mut BTreeSet<PathBuf>) {
    let Some(listing) = read_dir_sorted(dir) else {
        return;
    };
    if listing.ignored {
        tracing::debug!("Ignoring {} (ignore marker found)", dir.display());
        return;
    }

    let dir_name = file_name(dir);

    // A disc structure nominates its parent and is not walked any further
    if depth > 0 && is_disc_marker(&dir_name) {
        if contains_video(dir, settings) {
            if let Some(parent) = dir.parent() {
                tracing::debug!("Disc structure found: {}", parent.display());
                roots.insert(parent.to_path_buf());
            }
        }
        return;
    }

    let has_subdirs = !listing.dirs.is_empty();
    let dir_is_stacked = parser::parse_stacking(&dir_name).is_some();

    for file in &listing.files {
        if !classifier::is_main_video(file, settings) {
            continue;
        }

        let stem = file
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let promote = !has_subdirs
            && depth >= 2
            && (dir_is_stacked || parser::parse_stacking(&stem).is_some());

        let root = match (promote, dir.parent()) {
            (true, Some(parent)) => parent.to_path_buf(),
            _ => dir.to_path_buf(),
        };
        roots.insert(root);
    }

    for subdir in &listing.dirs {
        walk_for_roots(subdir, depth + 1, settings, roots);
    }
}

fn contains_video(dir: &Path, settings: &LibraryConfig) -> bool {
    let Some(listing) = read_dir_sorted(dir) else {
        return false;
    };
    listing
        .files
        .iter()
        .any(|f| classifier::is_main_video(f, settings))
        || listing.dirs.iter().any(|d| contains_video(d, settings))
}

/// Collect and classify every file below `root`, leaving out directories
/// that are media roots of their own
pub fn collect_files(
    root: &Path,
    settings: &LibraryConfig,
    other_roots: &BTreeSet<PathBuf>,
) -> Vec<MediaFile> {
    let mut files = Vec::new();
    collect_recursive(root, settings, other_roots, &mut files);
    files
}

fn collect_recursive(
    dir: &Path,
    settings: &LibraryConfig,
    other_roots: &BTreeSet<PathBuf>,
    files: &mut Vec<MediaFile>,
) {
    let Some(listing) = read_dir_sorted(dir) else {
        return;
    };
    if listing.ignored {
        return;
    }

    for file in &listing.files {
        files.push(classifier::classify(file, settings));
    }

    for subdir in &listing.dirs {
        if other_roots.contains(subdir) {
            continue;
        }
        collect_recursive(subdir, settings, other_roots, files);
    }
}
