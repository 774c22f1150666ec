use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use uuid::Uuid;

mod naming;

pub use naming::{FanartNaming, FileNaming, NfoNaming, PosterNaming};

/// Provider name used for trailers found next to the video files
pub const DOWNLOADED_TRAILER_PROVIDER: &str = "downloaded";

/// Semantic role of a file inside a media unit.
///
/// The declaration order is the canonical sort order of media files.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaFileType {
    Video,
    Nfo,
    Poster,
    Fanart,
    Banner,
    Thumb,
    Subtitle,
    Trailer,
    Graphic,
    Unknown,
}

impl std::fmt::Display for MediaFileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MediaFileType::Video => "video",
            MediaFileType::Nfo => "nfo",
            MediaFileType::Poster => "poster",
            MediaFileType::Fanart => "fanart",
            MediaFileType::Banner => "banner",
            MediaFileType::Thumb => "thumb",
            MediaFileType::Subtitle => "subtitle",
            MediaFileType::Trailer => "trailer",
            MediaFileType::Graphic => "graphic",
            MediaFileType::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Language information attached to an external subtitle file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubtitleInfo {
    /// Language as written in the filename (e.g. "en", "German")
    pub language: Option<String>,
    /// ISO 639-1 code of the detected language (ISO 639-2 if it has none)
    pub iso_code: Option<String>,
    pub forced: bool,
}

/// A single file owned by a media unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaFile {
    pub path: PathBuf,
    pub file_type: MediaFileType,
    pub filename: String,
    /// Filename without the last extension
    pub basename: String,
    /// Extension as found on disk (original case, without dot)
    pub extension: String,
    pub container_format: Option<String>,
    /// 0 = not stacked
    pub stacking: u32,
    /// Stacking marker as written in the filename (e.g. "cd1", "part2")
    pub stacking_marker: Option<String>,
    /// Subtitle packed inside an archive
    pub is_packed: bool,

    // Probed media info
    #[serde(default)]
    pub video_codec: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub audio_codec: Option<String>,
    #[serde(default)]
    pub audio_channels: Option<u32>,
    #[serde(default)]
    pub audio_language: Option<String>,
    #[serde(default)]
    pub duration_seconds: Option<f64>,

    #[serde(default)]
    pub subtitle: Option<SubtitleInfo>,
}

impl MediaFile {
    pub fn new(path: PathBuf, file_type: MediaFileType) -> Self {
        let (filename, basename, extension) = split_filename(&path);
        Self {
            path,
            file_type,
            filename,
            basename,
            extension,
            container_format: None,
            stacking: 0,
            stacking_marker: None,
            is_packed: false,
            video_codec: None,
            width: None,
            height: None,
            audio_codec: None,
            audio_channels: None,
            audio_language: None,
            duration_seconds: None,
            subtitle: None,
        }
    }

    /// Same file (role, stacking, media info) at another location
    pub fn with_path(&self, path: PathBuf) -> Self {
        let (filename, basename, extension) = split_filename(&path);
        Self {
            path,
            filename,
            basename,
            extension,
            ..self.clone()
        }
    }

    pub fn extension_lowercase(&self) -> String {
        self.extension.to_lowercase()
    }

    pub fn has_media_info(&self) -> bool {
        self.video_codec.is_some() || self.duration_seconds.is_some()
    }

    /// Resolution as "WIDTHxHEIGHT"
    pub fn video_resolution(&self) -> Option<String> {
        match (self.width, self.height) {
            (Some(w), Some(h)) if w > 0 && h > 0 => Some(format!("{}x{}", w, h)),
            _ => None,
        }
    }

    /// Common video format name derived from the frame size (e.g. "1080p")
    pub fn video_format(&self) -> Option<&'static str> {
        let width = self.width?;
        let height = self.height?;
        if width == 0 || height == 0 {
            return None;
        }
        let format = if width > 2560 || height > 1440 {
            "2160p"
        } else if width > 1920 || height > 1088 {
            "1440p"
        } else if width > 1280 || height > 720 {
            "1080p"
        } else if width > 1024 || height > 576 {
            "720p"
        } else if height > 480 {
            "576p"
        } else {
            "480p"
        };
        Some(format)
    }

    /// Codec and channel count, e.g. "AC3 6ch"
    pub fn audio_description(&self) -> Option<String> {
        let codec = self.audio_codec.as_deref()?.to_uppercase();
        Some(match self.audio_channels {
            Some(ch) if ch > 0 => format!("{} {}ch", codec, ch),
            _ => codec,
        })
    }

    /// Codec and format, e.g. "h264 1080p"
    pub fn video_description(&self) -> Option<String> {
        let codec = self.video_codec.as_deref()?;
        Some(match self.video_format() {
            Some(format) => format!("{} {}", codec, format),
            None => codec.to_string(),
        })
    }

    /// Total order: role, stacking index, filename, path
    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.file_type
            .cmp(&other.file_type)
            .then(self.stacking.cmp(&other.stacking))
            .then_with(|| self.filename.cmp(&other.filename))
            .then_with(|| self.path.cmp(&other.path))
    }

    pub fn file_url(&self) -> String {
        file_url(&self.path)
    }
}

fn split_filename(path: &Path) -> (String, String, String) {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let (basename, extension) = match filename.rsplit_once('.') {
        Some((base, ext)) if !base.is_empty() => (base.to_string(), ext.to_string()),
        _ => (filename.clone(), String::new()),
    };
    (filename, basename, extension)
}

/// file:// URL for a local path
pub fn file_url(path: &Path) -> String {
    reqwest::Url::from_file_path(path)
        .map(|url| url.to_string())
        .unwrap_or_else(|_| format!("file://{}", path.display()))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trailer {
    pub name: String,
    pub url: String,
    pub provider: String,
    pub quality: String,
    pub in_nfo: bool,
}

/// One logical title and the files that belong to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaUnit {
    pub id: Uuid,
    pub title: String,
    pub original_title: String,
    pub year: Option<i32>,
    pub sort_title: String,
    pub plot: String,
    pub imdb_id: String,
    pub tmdb_id: Option<i64>,
    pub path: PathBuf,
    pub data_source: PathBuf,
    pub is_disc: bool,
    pub media_files: Vec<MediaFile>,
    pub trailers: Vec<Trailer>,
    pub poster_url: Option<String>,
    pub fanart_url: Option<String>,
    pub date_added: DateTime<Utc>,
    pub scraped: bool,
}

impl Default for MediaUnit {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            title: String::new(),
            original_title: String::new(),
            year: None,
            sort_title: String::new(),
            plot: String::new(),
            imdb_id: String::new(),
            tmdb_id: None,
            path: PathBuf::new(),
            data_source: PathBuf::new(),
            is_disc: false,
            media_files: Vec::new(),
            trailers: Vec::new(),
            poster_url: None,
            fanart_url: None,
            date_added: Utc::now(),
            scraped: false,
        }
    }
}

impl MediaUnit {
    /// Adds a media file unless one with the same path is already owned
    pub fn add_media_file(&mut self, file: MediaFile) -> bool {
        if self.media_files.iter().any(|mf| mf.path == file.path) {
            return false;
        }
        self.media_files.push(file);
        true
    }

    pub fn sort_media_files(&mut self) {
        self.media_files.sort_by(MediaFile::canonical_cmp);
    }

    pub fn media_files_of(&self, file_type: MediaFileType) -> impl Iterator<Item = &MediaFile> {
        self.media_files
            .iter()
            .filter(move |mf| mf.file_type == file_type)
    }

    pub fn first_video(&self) -> Option<&MediaFile> {
        self.media_files_of(MediaFileType::Video)
            .min_by(|a, b| a.canonical_cmp(b))
    }

    pub fn has_nfo(&self) -> bool {
        self.media_files_of(MediaFileType::Nfo).next().is_some()
    }

    pub fn has_images(&self) -> bool {
        self.poster_url.is_some()
            || self.fanart_url.is_some()
            || self
                .media_files
                .iter()
                .any(|mf| matches!(mf.file_type, MediaFileType::Poster | MediaFileType::Fanart))
    }

    pub fn has_subtitles(&self) -> bool {
        self.media_files_of(MediaFileType::Subtitle)
            .any(|mf| !mf.is_packed)
    }

    pub fn has_trailer(&self) -> bool {
        !self.trailers.is_empty()
    }

    /// Moves the unit to `new_path`, re-rooting every owned file below it
    pub fn rebase_path(&mut self, new_path: &Path) {
        let old_path = std::mem::replace(&mut self.path, new_path.to_path_buf());
        for mf in &mut self.media_files {
            if let Ok(relative) = mf.path.strip_prefix(&old_path) {
                *mf = mf.with_path(new_path.join(relative));
            }
        }
        self.sync_local_references();
    }

    /// Re-derives file:// artwork URLs and downloaded trailer records from the owned files
    pub fn sync_local_references(&mut self) {
        let local_poster = self
            .media_files_of(MediaFileType::Poster)
            .next()
            .map(MediaFile::file_url);
        if self.poster_url.as_deref().map_or(true, is_file_url) {
            self.poster_url = local_poster;
        }

        let local_fanart = self
            .media_files_of(MediaFileType::Fanart)
            .next()
            .map(MediaFile::file_url);
        if self.fanart_url.as_deref().map_or(true, is_file_url) {
            self.fanart_url = local_fanart;
        }

        self.trailers
            .retain(|t| t.provider != DOWNLOADED_TRAILER_PROVIDER);
        let downloaded: Vec<Trailer> = self
            .media_files_of(MediaFileType::Trailer)
            .map(|mf| Trailer {
                name: mf.filename.clone(),
                url: mf.file_url(),
                provider: DOWNLOADED_TRAILER_PROVIDER.to_string(),
                quality: mf.video_format().unwrap_or_default().to_string(),
                in_nfo: false,
            })
            .collect();
        self.trailers.extend(downloaded);
    }

    /// "Title (Year)" for log output
    pub fn display_name(&self) -> String {
        match self.year {
            Some(year) => format!("{} ({})", self.title, year),
            None => self.title.clone(),
        }
    }
}

fn is_file_url(url: &str) -> bool {
    url.starts_with("file:")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(path: &str, stacking: u32) -> MediaFile {
        let mut mf = MediaFile::new(PathBuf::from(path), MediaFileType::Video);
        mf.stacking = stacking;
        mf
    }

    #[test]
    fn test_split_filename() {
        let mf = MediaFile::new(PathBuf::from("/m/Movie.Name.mkv"), MediaFileType::Video);
        assert_eq!(mf.filename, "Movie.Name.mkv");
        assert_eq!(mf.basename, "Movie.Name");
        assert_eq!(mf.extension, "mkv");

        let mf = MediaFile::new(PathBuf::from("/m/.hidden"), MediaFileType::Unknown);
        assert_eq!(mf.basename, ".hidden");
        assert_eq!(mf.extension, "");
    }

    #[test]
    fn test_canonical_order() {
        let mut unit = MediaUnit::default();
        unit.add_media_file(MediaFile::new(
            PathBuf::from("/m/poster.jpg"),
            MediaFileType::Poster,
        ));
        unit.add_media_file(video("/m/b-cd2.mkv", 2));
        unit.add_media_file(video("/m/a-cd1.mkv", 1));
        unit.add_media_file(MediaFile::new(
            PathBuf::from("/m/movie.nfo"),
            MediaFileType::Nfo,
        ));
        unit.sort_media_files();

        let names: Vec<&str> = unit.media_files.iter().map(|mf| mf.filename.as_str()).collect();
        assert_eq!(names, vec!["a-cd1.mkv", "b-cd2.mkv", "movie.nfo", "poster.jpg"]);
    }

    #[test]
    fn test_add_media_file_rejects_duplicate_path() {
        let mut unit = MediaUnit::default();
        assert!(unit.add_media_file(video("/m/a.mkv", 0)));
        assert!(!unit.add_media_file(video("/m/a.mkv", 0)));
        assert_eq!(unit.media_files.len(), 1);
    }

    #[test]
    fn test_rebase_path_moves_files_and_trailers() {
        let mut unit = MediaUnit {
            path: PathBuf::from("/lib/Old"),
            ..Default::default()
        };
        unit.add_media_file(video("/lib/Old/sub/a.mkv", 0));
        unit.add_media_file(MediaFile::new(
            PathBuf::from("/lib/Old/a-trailer.mkv"),
            MediaFileType::Trailer,
        ));
        unit.sync_local_references();
        assert_eq!(unit.trailers.len(), 1);

        unit.rebase_path(Path::new("/lib/New"));
        assert_eq!(unit.path, PathBuf::from("/lib/New"));
        assert_eq!(unit.media_files[0].path, PathBuf::from("/lib/New/sub/a.mkv"));
        assert_eq!(unit.trailers.len(), 1);
        assert!(unit.trailers[0].url.ends_with("/lib/New/a-trailer.mkv"));
    }

    #[test]
    fn test_media_info_descriptions() {
        let mut mf = video("/m/a.mkv", 0);
        assert_eq!(mf.video_resolution(), None);
        mf.width = Some(1920);
        mf.height = Some(800);
        mf.video_codec = Some("h264".to_string());
        mf.audio_codec = Some("ac3".to_string());
        mf.audio_channels = Some(6);
        assert_eq!(mf.video_resolution().as_deref(), Some("1920x800"));
        assert_eq!(mf.video_description().as_deref(), Some("h264 1080p"));
        assert_eq!(mf.audio_description().as_deref(), Some("AC3 6ch"));
    }

    #[test]
    fn test_remote_artwork_survives_sync() {
        let mut unit = MediaUnit {
            poster_url: Some("https://image.tmdb.org/p.jpg".to_string()),
            ..Default::default()
        };
        unit.sync_local_references();
        assert_eq!(
            unit.poster_url.as_deref(),
            Some("https://image.tmdb.org/p.jpg")
        );
    }
}
