// Builds a MediaUnit from the classified files of one media root

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::models::{MediaFile, MediaFileType, MediaUnit};
use crate::scanner::{parser, walker};
use crate::services::nfo::NfoConnector;

/// Build a new unit for `root`.
///
/// NFO data seeds the unit (last parsable NFO wins), then known roles are
/// adopted, then ambiguous graphics are resolved against the first video and
/// the title. Missing title and year come from the root folder name.
pub fn build(
    root: &Path,
    data_source: &Path,
    files: Vec<MediaFile>,
    nfo: &dyn NfoConnector,
) -> MediaUnit {
    let mut unit = MediaUnit::default();

    for mf in files.iter().filter(|f| f.file_type == MediaFileType::Nfo) {
        match nfo.parse(&mf.path) {
            Ok(parsed) => {
                tracing::debug!("Parsed NFO {}", mf.path.display());
                unit = parsed;
            }
            Err(e) => tracing::warn!("Ignoring NFO {}: {:#}", mf.path.display(), e),
        }
    }

    let mut graphics = Vec::new();
    for mf in files {
        if mf.file_type == MediaFileType::Graphic {
            graphics.push(mf);
        } else {
            unit.add_media_file(mf);
        }
    }

    if unit.title.is_empty() {
        let dir_name = root
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let (title, year) = parser::detect_title_and_year(&dir_name);
        unit.title = title;
        if unit.year.is_none() {
            unit.year = year;
        }
    }

    resolve_graphics(&mut unit, graphics);

    if unit.path.as_os_str().is_empty() {
        unit.path = root.to_path_buf();
    }
    unit.data_source = data_source.to_path_buf();
    if unit.sort_title.is_empty() {
        unit.sort_title = parser::sort_title(&unit.title);
    }

    normalize(&mut unit);
    tracing::debug!(
        "Built {} with {} files",
        unit.display_name(),
        unit.media_files.len()
    );
    unit
}

/// Re-sync an existing unit's file list with what is on disk.
///
/// Files still present keep their record (role, media info), new files are
/// added, vanished files dropped. Metadata is not touched.
/// Returns true if anything changed.
pub fn refresh(unit: &mut MediaUnit, files: Vec<MediaFile>) -> bool {
    let before = unit.media_files.clone();
    let before_disc = unit.is_disc;

    let present: HashSet<PathBuf> = files.iter().map(|f| f.path.clone()).collect();
    unit.media_files.retain(|mf| present.contains(&mf.path));

    let mut graphics = Vec::new();
    for mf in files {
        if unit.media_files.iter().any(|known| known.path == mf.path) {
            continue;
        }
        if mf.file_type == MediaFileType::Graphic {
            graphics.push(mf);
        } else {
            unit.add_media_file(mf);
        }
    }
    resolve_graphics(unit, graphics);

    normalize(unit);
    unit.media_files != before || unit.is_disc != before_disc
}

fn graphic_key(name: &str) -> String {
    parser::strip_stacking(name).trim().to_lowercase()
}

/// Graphics named like the first video or the title become posters;
/// the rest stay graphics
fn resolve_graphics(unit: &mut MediaUnit, graphics: Vec<MediaFile>) {
    let video_key = unit.first_video().map(|v| graphic_key(&v.basename));
    let title_key = graphic_key(&unit.title);

    for mut mf in graphics {
        let key = graphic_key(&mf.basename);
        let matches_video = video_key.as_deref().is_some_and(|v| !v.is_empty() && v == key);
        let matches_title = !title_key.is_empty() && title_key == key;
        if matches_video || matches_title {
            tracing::debug!("Using {} as poster", mf.path.display());
            mf.file_type = MediaFileType::Poster;
        }
        unit.add_media_file(mf);
    }
}

/// Stacking is only kept when at least two videos carry a marker
fn reevaluate_stacking(unit: &mut MediaUnit) {
    for mf in &mut unit.media_files {
        match parser::parse_stacking(&mf.basename) {
            Some(stacking) => {
                mf.stacking = stacking.index;
                mf.stacking_marker = Some(stacking.marker);
            }
            None => {
                mf.stacking = 0;
                mf.stacking_marker = None;
            }
        }
    }

    let stacked_videos = unit
        .media_files_of(MediaFileType::Video)
        .filter(|mf| mf.stacking > 0)
        .count();
    if stacked_videos < 2 {
        for mf in &mut unit.media_files {
            mf.stacking = 0;
            mf.stacking_marker = None;
        }
    }
}

fn normalize(unit: &mut MediaUnit) {
    let root = unit.path.clone();
    let is_disc = unit
        .media_files_of(MediaFileType::Video)
        .any(|v| walker::is_inside_disc_structure(&v.path, &root));
    unit.is_disc = is_disc;
    reevaluate_stacking(unit);
    unit.sort_media_files();
    unit.sync_local_references();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LibraryConfig;
    use crate::models::DOWNLOADED_TRAILER_PROVIDER;
    use crate::scanner::classifier;

    /// Parses "<title>.nfo" into a unit titled after the file, fails on "broken"
    struct StubNfo;

    impl NfoConnector for StubNfo {
        fn parse(&self, path: &Path) -> anyhow::Result<MediaUnit> {
            let stem = path.file_stem().unwrap().to_string_lossy().to_string();
            if stem.contains("broken") {
                anyhow::bail!("malformed");
            }
            Ok(MediaUnit {
                title: stem,
                year: Some(2000),
                ..Default::default()
            })
        }

        fn write(&self, _unit: &MediaUnit, _path: &Path) -> anyhow::Result<()> {
            Ok(())
        }
    }

    fn files(root: &str, names: &[&str]) -> Vec<MediaFile> {
        let settings = LibraryConfig::default();
        names
            .iter()
            .map(|n| classifier::classify(&Path::new(root).join(n), &settings))
            .collect()
    }

    #[test]
    fn test_scenario_plain_movie_with_poster() {
        let root = Path::new("/Movies/Aladdin (1992)");
        let unit = build(
            root,
            Path::new("/Movies"),
            files("/Movies/Aladdin (1992)", &["Aladdin.avi", "poster.jpg"]),
            &StubNfo,
        );

        assert_eq!(unit.title, "Aladdin");
        assert_eq!(unit.year, Some(1992));
        assert_eq!(unit.path, root);
        assert_eq!(unit.data_source, PathBuf::from("/Movies"));
        assert!(!unit.is_disc);
        assert_eq!(unit.media_files[0].file_type, MediaFileType::Video);
        assert_eq!(unit.media_files[1].file_type, MediaFileType::Poster);
        assert!(unit.has_images());
        assert!(unit.poster_url.as_deref().unwrap().ends_with("poster.jpg"));
    }

    #[test]
    fn test_last_parsable_nfo_wins() {
        let unit = build(
            Path::new("/m/x"),
            Path::new("/m"),
            files("/m/x", &["a.mkv", "First.nfo", "Second.nfo", "zz-broken.nfo"]),
            &StubNfo,
        );
        assert_eq!(unit.title, "Second");
        assert_eq!(unit.year, Some(2000));
        assert_eq!(unit.sort_title, "Second");
        // The unparsable NFO is still owned by the unit
        assert_eq!(unit.media_files_of(MediaFileType::Nfo).count(), 3);
    }

    #[test]
    fn test_disc_unit() {
        let unit = build(
            Path::new("/Movies/X"),
            Path::new("/Movies"),
            files(
                "/Movies/X",
                &["BDMV/STREAM/00001.m2ts", "BDMV/STREAM/00002.m2ts", "BDMV/index.bdmv"],
            ),
            &StubNfo,
        );
        assert!(unit.is_disc);
        assert_eq!(unit.title, "X");
        assert_eq!(unit.media_files_of(MediaFileType::Video).count(), 2);
        assert_eq!(unit.media_files.len(), 3);
    }

    #[test]
    fn test_stacked_videos_share_unit() {
        let unit = build(
            Path::new("/Movies/Collection"),
            Path::new("/Movies"),
            files(
                "/Movies/Collection",
                &["Movie/Movie-cd2.mkv", "Movie/Movie-cd1.mkv"],
            ),
            &StubNfo,
        );
        let stacking: Vec<u32> = unit
            .media_files_of(MediaFileType::Video)
            .map(|v| v.stacking)
            .collect();
        assert_eq!(stacking, vec![1, 2]);
    }

    #[test]
    fn test_single_marked_video_is_not_stacked() {
        let unit = build(
            Path::new("/Movies/Kill Bill Part 2 (2004)"),
            Path::new("/Movies"),
            files("/Movies/Kill Bill Part 2 (2004)", &["Kill Bill Part 2.mkv"]),
            &StubNfo,
        );
        assert_eq!(unit.title, "Kill Bill Part 2");
        assert_eq!(unit.media_files[0].stacking, 0);
        assert!(unit.media_files[0].stacking_marker.is_none());
    }

    #[test]
    fn test_graphic_resolution() {
        let unit = build(
            Path::new("/m/Heat (1995)"),
            Path::new("/m"),
            files(
                "/m/Heat (1995)",
                &["heat.1995.mkv", "HEAT.1995.jpg", "Heat.png", "scan.jpg"],
            ),
            &StubNfo,
        );
        let posters: Vec<&str> = unit
            .media_files_of(MediaFileType::Poster)
            .map(|p| p.filename.as_str())
            .collect();
        assert_eq!(posters, vec!["HEAT.1995.jpg", "Heat.png"]);

        let leftover: Vec<&str> = unit
            .media_files_of(MediaFileType::Graphic)
            .map(|p| p.filename.as_str())
            .collect();
        assert_eq!(leftover, vec!["scan.jpg"]);
        assert!(!unit.poster_url.as_deref().unwrap().ends_with("scan.jpg"));
    }

    #[test]
    fn test_unmatched_graphic_is_not_artwork() {
        let unit = build(
            Path::new("/m/Heat"),
            Path::new("/m"),
            files("/m/Heat", &["movie.mkv", "random.jpg"]),
            &StubNfo,
        );
        assert!(!unit.has_images());
        assert_eq!(unit.media_files.len(), 2);
    }

    #[test]
    fn test_trailers_and_subtitles() {
        let unit = build(
            Path::new("/m/Heat"),
            Path::new("/m"),
            files(
                "/m/Heat",
                &["Heat.mkv", "Heat-trailer.mp4", "Heat.en.srt", "Heat.de.srt.zip"],
            ),
            &StubNfo,
        );
        assert!(unit.has_trailer());
        assert_eq!(unit.trailers[0].provider, DOWNLOADED_TRAILER_PROVIDER);
        assert!(!unit.trailers[0].in_nfo);
        assert!(unit.trailers[0].url.starts_with("file://"));
        assert!(unit.has_subtitles());
        assert_eq!(unit.media_files.len(), 4);
    }

    #[test]
    fn test_refresh_keeps_records_and_tracks_changes() {
        let root = "/m/Heat (1995)";
        let mut unit = build(
            Path::new(root),
            Path::new("/m"),
            files(root, &["Heat.mkv", "Heat.jpg"]),
            &StubNfo,
        );
        unit.media_files[0].video_codec = Some("h264".to_string());
        unit.title = "Scraped Title".to_string();

        // Nothing changed on disk
        assert!(!refresh(&mut unit, files(root, &["Heat.mkv", "Heat.jpg"])));

        // Poster vanished, subtitle appeared
        assert!(refresh(&mut unit, files(root, &["Heat.mkv", "Heat.en.srt"])));
        assert_eq!(unit.title, "Scraped Title");
        assert_eq!(unit.media_files.len(), 2);
        assert_eq!(unit.media_files[0].video_codec.as_deref(), Some("h264"));
        assert_eq!(unit.media_files[1].file_type, MediaFileType::Subtitle);
        assert!(!unit.has_images());
    }
}
