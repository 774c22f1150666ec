// Assigns a semantic role to a single file, from its name alone

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::config::LibraryConfig;
use crate::models::{MediaFile, MediaFileType};
use crate::scanner::parser;

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "tbn", "bmp", "gif", "webp"];
const ARCHIVE_EXTENSIONS: &[&str] = &["zip", "rar", "7z"];

static RE_POSTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:poster|folder|cover|movie)$|[\-.](?:poster|cover)$").unwrap());
static RE_FANART: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:fanart|backdrop|background)\d*$|[\-.](?:fanart|backdrop)\d*$").unwrap()
});
static RE_BANNER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^banner$|[\-.]banner$").unwrap());
static RE_THUMB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:thumb|landscape)$|[\-.](?:thumb|landscape)$").unwrap());
static RE_TRAILER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|[ _.\-\(\[])trailers?(?:[ _.\-\)\]0-9]|$)").unwrap()
});
static RE_SUBTITLE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:^|[ _.\-])sub(?:s|titles?)?(?:[ _.\-]|$)").unwrap());

pub fn is_image_extension(ext: &str) -> bool {
    IMAGE_EXTENSIONS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(ext))
}

fn is_archive_extension(ext: &str) -> bool {
    ARCHIVE_EXTENSIONS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(ext))
}

pub fn is_trailer_name(basename: &str) -> bool {
    RE_TRAILER.is_match(basename)
}

/// True for playable video files that are not trailers
pub fn is_main_video(path: &Path, settings: &LibraryConfig) -> bool {
    let mf = MediaFile::new(path.to_path_buf(), MediaFileType::Unknown);
    settings.is_video_extension(&mf.extension) && !is_trailer_name(&mf.basename)
}

/// Classify a file by extension and naming conventions.
/// The file does not need to exist.
pub fn classify(path: &Path, settings: &LibraryConfig) -> MediaFile {
    let mut mf = MediaFile::new(PathBuf::from(path), MediaFileType::Unknown);
    mf.file_type = detect_type(&mf, settings);

    if mf.file_type == MediaFileType::Subtitle && is_archive_extension(&mf.extension) {
        mf.is_packed = true;
    }
    if matches!(mf.file_type, MediaFileType::Video | MediaFileType::Trailer) {
        mf.container_format = Some(mf.extension_lowercase());
    }
    if let Some(stacking) = parser::parse_stacking(&mf.basename) {
        mf.stacking = stacking.index;
        mf.stacking_marker = Some(stacking.marker);
    }

    mf
}

fn detect_type(mf: &MediaFile, settings: &LibraryConfig) -> MediaFileType {
    let ext = mf.extension.as_str();
    let base = mf.basename.to_lowercase();

    if settings.is_video_extension(ext) {
        if is_trailer_name(&mf.basename) {
            return MediaFileType::Trailer;
        }
        return MediaFileType::Video;
    }

    if ext.eq_ignore_ascii_case("nfo") {
        return MediaFileType::Nfo;
    }

    if is_image_extension(ext) {
        if RE_POSTER.is_match(&base) {
            return MediaFileType::Poster;
        }
        if RE_FANART.is_match(&base) {
            return MediaFileType::Fanart;
        }
        if RE_BANNER.is_match(&base) {
            return MediaFileType::Banner;
        }
        if RE_THUMB.is_match(&base) {
            return MediaFileType::Thumb;
        }
    }

    if settings.is_subtitle_extension(ext) {
        return MediaFileType::Subtitle;
    }

    if is_archive_extension(ext) {
        let inner_is_subtitle = base
            .rsplit_once('.')
            .map(|(_, inner)| settings.is_subtitle_extension(inner))
            .unwrap_or(false);
        if inner_is_subtitle || RE_SUBTITLE_TOKEN.is_match(&base) {
            return MediaFileType::Subtitle;
        }
    }

    if is_image_extension(ext) {
        return MediaFileType::Graphic;
    }

    MediaFileType::Unknown
}
