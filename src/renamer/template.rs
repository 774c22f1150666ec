// Token templates for folder and file names
//
// $T title, $1 first letter of title, $Y year, $O original title,
// $I IMDb id, $E sort title, $R video resolution, $A audio codec + channels,
// $V video codec + format

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::models::MediaUnit;

static RE_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$[T1YOIERAV]").unwrap());
static RE_EMPTY_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*\)|\[\s*\]|\{\s*\}").unwrap());
static RE_SPACE_COLLAPSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

fn token_value(token: &str, unit: &MediaUnit) -> String {
    let video = unit.first_video();
    let value = match token {
        "$T" => unit.title.clone(),
        "$1" => unit
            .title
            .chars()
            .find(|c| c.is_alphanumeric())
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default(),
        "$Y" => unit.year.map(|y| y.to_string()).unwrap_or_default(),
        "$O" => unit.original_title.clone(),
        "$I" => unit.imdb_id.clone(),
        "$E" => unit.sort_title.clone(),
        "$R" => video.and_then(|v| v.video_resolution()).unwrap_or_default(),
        "$A" => video.and_then(|v| v.audio_description()).unwrap_or_default(),
        "$V" => video.and_then(|v| v.video_description()).unwrap_or_default(),
        _ => String::new(),
    };
    sanitize_filename::sanitize(value)
}

fn substitute(template: &str, unit: &MediaUnit) -> String {
    RE_TOKEN
        .replace_all(template, |caps: &Captures| token_value(&caps[0], unit))
        .to_string()
}

/// Drop empty bracket groups left by missing values, collapse whitespace
fn clean_segment(segment: &str) -> String {
    let mut cleaned = segment.to_string();
    loop {
        let next = RE_EMPTY_GROUP.replace_all(&cleaned, "").to_string();
        if next == cleaned {
            break;
        }
        cleaned = next;
    }
    let cleaned = RE_SPACE_COLLAPSE.replace_all(&cleaned, " ");
    cleaned
        .trim_matches(|c: char| c == ' ' || c == '-' || c == '_')
        .trim_end_matches('.')
        .trim()
        .to_string()
}

/// Expand a folder template. `/` in the template separates folder levels;
/// levels that end up empty are dropped.
pub fn expand(template: &str, unit: &MediaUnit) -> String {
    let expanded = substitute(template, unit);
    expanded
        .split('/')
        .map(clean_segment)
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Expand a file name template (no folder levels)
pub fn expand_filename(template: &str, unit: &MediaUnit) -> String {
    clean_segment(&substitute(template, unit).replace('/', " "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MediaFile, MediaFileType};
    use std::path::PathBuf;

    fn unit() -> MediaUnit {
        MediaUnit {
            title: "The Matrix".to_string(),
            original_title: "The Matrix".to_string(),
            sort_title: "Matrix, The".to_string(),
            year: Some(1999),
            imdb_id: "tt0133093".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_expand_basic_tokens() {
        let unit = unit();
        assert_eq!(expand("$T ($Y)", &unit), "The Matrix (1999)");
        assert_eq!(expand("$1/$T ($Y)", &unit), "T/The Matrix (1999)");
        assert_eq!(expand("$E [$I]", &unit), "Matrix, The [tt0133093]");
    }

    #[test]
    fn test_missing_values_collapse() {
        let unit = MediaUnit {
            title: "Heat".to_string(),
            ..Default::default()
        };
        assert_eq!(expand("$T ($Y)", &unit), "Heat");
        assert_eq!(expand("$T ($Y) [$R]", &unit), "Heat");
        assert_eq!(expand("$T - $V", &unit), "Heat");
        assert_eq!(expand("$Y/$T", &unit), "Heat");
        // No video files: media tokens vanish instead of staying literal
        assert_eq!(expand("$R", &unit), "");
        assert_eq!(expand("$A$V", &unit), "");
    }

    #[test]
    fn test_illegal_characters_stripped() {
        let unit = MediaUnit {
            title: "Star Wars: Episode IV / A New Hope?".to_string(),
            year: Some(1977),
            ..Default::default()
        };
        assert_eq!(expand("$T ($Y)", &unit), "Star Wars Episode IV A New Hope (1977)");
        assert_eq!(expand_filename("$1/$T", &unit), "S Star Wars Episode IV A New Hope");
    }

    #[test]
    fn test_media_info_tokens() {
        let mut unit = unit();
        let mut video = MediaFile::new(PathBuf::from("/m/a.mkv"), MediaFileType::Video);
        video.width = Some(1280);
        video.height = Some(536);
        video.video_codec = Some("hevc".to_string());
        video.audio_codec = Some("dts".to_string());
        video.audio_channels = Some(6);
        unit.add_media_file(video);

        assert_eq!(
            expand_filename("$T $R $V $A", &unit),
            "The Matrix 1280x536 hevc 720p DTS 6ch"
        );
    }

    #[test]
    fn test_expand_is_deterministic() {
        let unit = unit();
        let template = "$1/$T ($Y) {$I}";
        assert_eq!(expand(template, &unit), expand(template, &unit));
    }

    #[test]
    fn test_empty_template() {
        assert_eq!(expand("", &unit()), "");
        assert_eq!(expand("  / ", &unit()), "");
    }

    #[test]
    fn test_first_letter_skips_punctuation() {
        let unit = MediaUnit {
            title: "'71".to_string(),
            ..Default::default()
        };
        assert_eq!(expand("$1", &unit), "7");
    }
}
