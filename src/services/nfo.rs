// Kodi-style movie NFO reading and writing
// Format: https://kodi.wiki/view/NFO_files/Movies

use anyhow::{Context, Result};
use quick_xml::escape::escape;
use quick_xml::events::Event;
use quick_xml::Reader;
use regex::Regex;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::models::{FileNaming, MediaFile, MediaFileType, MediaUnit, NfoNaming, Trailer};
use crate::scanner::parser;

static RE_IMDB_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\btt\d{7,8}\b").unwrap());

/// Reads and writes metadata sidecar files for one kind of media
pub trait NfoConnector: Send + Sync {
    /// Parse an NFO into a partially filled unit (metadata only, no files)
    fn parse(&self, path: &Path) -> Result<MediaUnit>;

    fn write(&self, unit: &MediaUnit, path: &Path) -> Result<()>;
}

/// Kodi `<movie>` NFO
#[derive(Debug, Clone, Copy, Default)]
pub struct KodiMovieNfo;

impl NfoConnector for KodiMovieNfo {
    fn parse(&self, path: &Path) -> Result<MediaUnit> {
        let bytes =
            std::fs::read(path).with_context(|| format!("Failed to read NFO {}", path.display()))?;
        let content = String::from_utf8_lossy(&bytes);
        parse_movie_nfo(&content).with_context(|| format!("Invalid NFO {}", path.display()))
    }

    fn write(&self, unit: &MediaUnit, path: &Path) -> Result<()> {
        std::fs::write(path, render_movie_nfo(unit))
            .with_context(|| format!("Failed to write NFO {}", path.display()))
    }
}

fn parse_movie_nfo(content: &str) -> Result<MediaUnit> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut unit = MediaUnit::default();
    let mut found_movie = false;
    let mut stack: Vec<String> = Vec::new();
    let mut unique_id_type: Option<String> = None;
    let mut premiered: Option<String> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let tag_name = String::from_utf8_lossy(e.name().as_ref()).to_lowercase();
                if tag_name == "movie" {
                    found_movie = true;
                }
                if tag_name == "uniqueid" {
                    unique_id_type = e
                        .try_get_attribute("type")
                        .ok()
                        .flatten()
                        .and_then(|a| a.unescape_value().ok())
                        .map(|v| v.to_lowercase());
                }
                stack.push(tag_name);
            }
            Ok(Event::End(_)) => {
                stack.pop();
            }
            Ok(Event::Text(ref e)) => {
                let text = e.unescape().unwrap_or_default().to_string();
                apply_field(&mut unit, &stack, unique_id_type.as_deref(), &mut premiered, text);
            }
            Ok(Event::CData(e)) => {
                let text = String::from_utf8_lossy(&e.into_inner()).to_string();
                apply_field(&mut unit, &stack, unique_id_type.as_deref(), &mut premiered, text);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                if found_movie {
                    anyhow::bail!("XML error at position {}: {}", reader.buffer_position(), e);
                }
                break;
            }
            _ => {}
        }
    }

    if !found_movie {
        // Plain-text NFOs often carry just an IMDb link
        if let Some(id) = RE_IMDB_ID.find(content) {
            unit.imdb_id = id.as_str().to_string();
            return Ok(unit);
        }
        anyhow::bail!("No <movie> element and no IMDb id found");
    }

    if unit.year.is_none() {
        unit.year = premiered
            .as_deref()
            .and_then(|d| d.split('-').next())
            .and_then(|y| y.parse().ok());
    }

    Ok(unit)
}

fn apply_field(
    unit: &mut MediaUnit,
    stack: &[String],
    unique_id_type: Option<&str>,
    premiered: &mut Option<String>,
    text: String,
) {
    let text = text.trim().to_string();
    if text.is_empty() {
        return;
    }

    // Only direct children of <movie>, plus <fanart><thumb>
    let path: Vec<&str> = stack.iter().map(String::as_str).collect();
    match path.as_slice() {
        ["movie", "title"] => unit.title = text,
        ["movie", "originaltitle"] => unit.original_title = text,
        ["movie", "sorttitle"] => unit.sort_title = text,
        ["movie", "year"] => unit.year = text.parse().ok().filter(|y| *y > 0),
        ["movie", "plot"] => unit.plot = text,
        ["movie", "outline"] if unit.plot.is_empty() => unit.plot = text,
        ["movie", "premiered"] | ["movie", "releasedate"] => *premiered = Some(text),
        ["movie", "id"] | ["movie", "imdbid"] | ["movie", "imdb"] => {
            if RE_IMDB_ID.is_match(&text) {
                unit.imdb_id = text;
            }
        }
        ["movie", "tmdbid"] => unit.tmdb_id = text.parse().ok(),
        ["movie", "uniqueid"] => match unique_id_type {
            Some("imdb") => unit.imdb_id = text,
            Some("tmdb") => unit.tmdb_id = text.parse().ok(),
            _ => {}
        },
        ["movie", "thumb"] => {
            if unit.poster_url.is_none() {
                unit.poster_url = Some(text);
            }
        }
        ["movie", "fanart", "thumb"] => {
            if unit.fanart_url.is_none() {
                unit.fanart_url = Some(text);
            }
        }
        ["movie", "trailer"] => unit.trailers.push(Trailer {
            name: "nfo".to_string(),
            url: text,
            provider: "nfo".to_string(),
            quality: String::new(),
            in_nfo: true,
        }),
        _ => {}
    }
}

fn push_element(xml: &mut String, name: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    let _ = writeln!(xml, "  <{name}>{}</{name}>", escape(value));
}

fn render_movie_nfo(unit: &MediaUnit) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n<movie>\n");

    push_element(&mut xml, "title", &unit.title);
    push_element(&mut xml, "originaltitle", &unit.original_title);
    push_element(&mut xml, "sorttitle", &unit.sort_title);
    if let Some(year) = unit.year {
        push_element(&mut xml, "year", &year.to_string());
    }
    push_element(&mut xml, "plot", &unit.plot);

    if !unit.imdb_id.is_empty() {
        let _ = writeln!(
            xml,
            "  <uniqueid type=\"imdb\" default=\"true\">{}</uniqueid>",
            escape(&unit.imdb_id)
        );
    }
    if let Some(tmdb_id) = unit.tmdb_id {
        let _ = writeln!(xml, "  <uniqueid type=\"tmdb\">{}</uniqueid>", tmdb_id);
    }

    // Only remote artwork; local files are found by naming convention
    if let Some(url) = unit.poster_url.as_deref().filter(|u| !u.starts_with("file:")) {
        let _ = writeln!(xml, "  <thumb aspect=\"poster\">{}</thumb>", escape(url));
    }
    if let Some(url) = unit.fanart_url.as_deref().filter(|u| !u.starts_with("file:")) {
        let _ = writeln!(xml, "  <fanart>\n    <thumb>{}</thumb>\n  </fanart>", escape(url));
    }
    for trailer in unit.trailers.iter().filter(|t| t.in_nfo) {
        push_element(&mut xml, "trailer", &trailer.url);
    }

    xml.push_str("</movie>\n");
    xml
}

/// Write the unit's NFO under every configured naming convention and
/// register the written files with the unit.
pub fn write_nfo_files(
    unit: &mut MediaUnit,
    nfo: &dyn NfoConnector,
    conventions: &[NfoNaming],
) -> Result<Vec<PathBuf>> {
    let basename = unit
        .first_video()
        .map(|v| parser::strip_stacking(&v.basename));

    let mut written = Vec::new();
    for convention in conventions {
        if convention.is_filename_based() && unit.is_disc {
            continue;
        }
        let filename = match (&basename, convention.is_filename_based()) {
            (_, false) => convention.filename(""),
            (Some(base), true) => convention.filename(base),
            (None, true) => continue,
        };

        let path = unit.path.join(filename);
        nfo.write(unit, &path)?;
        tracing::debug!("Wrote NFO {}", path.display());
        unit.add_media_file(MediaFile::new(path.clone(), MediaFileType::Nfo));
        written.push(path);
    }

    unit.sort_media_files();
    Ok(written)
}
