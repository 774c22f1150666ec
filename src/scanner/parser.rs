// Filename heuristics: stacking markers, title/year detection, sort titles

use regex::Regex;
use std::sync::LazyLock;

static RE_STACKING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|[ _.\-]+)((?:cd|dvd|part|pt|dis[ck])[ _.\-]*([0-9]{1,2}))(?:[ _.\-]|$)")
        .unwrap()
});
static RE_GROUP_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[.*?\]\s*[\-]?\s*").unwrap());
static RE_PAREN_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\(\[]\s*(\d{4})\s*[\)\]]").unwrap());
static RE_BARE_YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(\d{4})\b").unwrap());
static RE_RELEASE_INFO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(1080p|720p|480p|576p|2160p|4k|uhd|bluray|blu-ray|brrip|bdrip|webrip|web-dl|hdtv|dvdrip|dvdscr|xvid|divx|x264|x265|h\.?264|h\.?265|hevc|avc|aac|ac3|dts|atmos|10bit|hdr|remux|proper|repack|multi|dual|dubbed|subbed|amzn|dsnp)\b.*$",
    )
    .unwrap()
});
static RE_SPACE_COLLAPSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

const SORT_ARTICLES: &[&str] = &["the", "a", "an", "der", "die", "das", "le", "la", "les", "el"];

/// A stacking marker found in a file or folder name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stacking {
    /// 1-based part number
    pub index: u32,
    /// Marker as written, e.g. "CD1" or "part 2"
    pub marker: String,
    /// Name with the marker (and its leading separators) removed
    pub cleaned: String,
}

/// Detect a stacking marker like "cd1", "part-2", "disk 3"
/// e.g., "Movie-cd1" -> index 1, marker "cd1", cleaned "Movie"
pub fn parse_stacking(name: &str) -> Option<Stacking> {
    let caps = RE_STACKING.captures_iter(name).last()?;
    let whole = caps.get(0)?;
    let marker = caps.get(1)?;
    let index: u32 = caps.get(2)?.as_str().parse().ok()?;
    if index == 0 {
        return None;
    }

    // Keep the trailing separator (if any) so "a-cd1.en" becomes "a.en"
    let tail = &name[marker.end()..];
    let mut cleaned = name[..whole.start()].to_string();
    cleaned.push_str(tail);
    let cleaned = cleaned
        .trim_matches(|c: char| c == ' ' || c == '-' || c == '_')
        .to_string();

    Some(Stacking {
        index,
        marker: marker.as_str().to_string(),
        cleaned,
    })
}

/// Name with any stacking marker removed
pub fn strip_stacking(name: &str) -> String {
    match parse_stacking(name) {
        Some(stacking) => stacking.cleaned,
        None => name.to_string(),
    }
}

/// Detect title and year from a folder or file base name
/// e.g., "The.Matrix.1999.1080p.BluRay.x264-GRP" -> ("The Matrix", Some(1999))
/// e.g., "Aladdin (1992)" -> ("Aladdin", Some(1992))
pub fn detect_title_and_year(name: &str) -> (String, Option<i32>) {
    let name = name.replace(['.', '_'], " ");
    let name = RE_GROUP_TAG.replace(name.trim(), "").to_string();

    // Prefer the last "(YYYY)" / "[YYYY]"
    let paren = RE_PAREN_YEAR
        .captures_iter(&name)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let year: i32 = caps.get(1)?.as_str().parse().ok()?;
            is_plausible_year(year).then_some((whole.start(), year))
        })
        .last();
    if let Some((start, year)) = paren {
        let title = clean_title(&name[..start]);
        if !title.is_empty() {
            return (title, Some(year));
        }
    }

    // Then a bare year that has a title in front of it
    let bare = RE_BARE_YEAR
        .captures_iter(&name)
        .filter_map(|caps| {
            let m = caps.get(1)?;
            let year: i32 = m.as_str().parse().ok()?;
            let before = name[..m.start()].trim();
            (is_plausible_year(year) && !before.is_empty()).then_some((m.start(), year))
        })
        .last();
    if let Some((start, year)) = bare {
        let title = clean_title(&name[..start]);
        if !title.is_empty() {
            return (title, Some(year));
        }
    }

    let stripped = RE_RELEASE_INFO.replace(&name, "");
    let title = clean_title(&stripped);
    if title.is_empty() {
        (clean_title(&name), None)
    } else {
        (title, None)
    }
}

fn is_plausible_year(year: i32) -> bool {
    (1900..=2100).contains(&year)
}

fn clean_title(name: &str) -> String {
    let name = RE_SPACE_COLLAPSE.replace_all(name, " ");
    name.trim()
        .trim_end_matches(['-', ' ', '(', '[', ','])
        .trim()
        .to_string()
}

/// Sort title with a leading article moved to the end
/// e.g., "The Matrix" -> "Matrix, The"
pub fn sort_title(title: &str) -> String {
    let title = title.trim();
    if let Some((first, rest)) = title.split_once(' ') {
        let rest = rest.trim();
        if !rest.is_empty()
            && SORT_ARTICLES
                .iter()
                .any(|article| article.eq_ignore_ascii_case(first))
        {
            return format!("{}, {}", rest, first);
        }
    }
    title.to_string()
}
