// Technical stream info (codecs, frame size, duration) via ffprobe

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::models::MediaFile;

/// Probe result for one file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaInfo {
    pub duration_seconds: Option<f64>,
    pub video_codec: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Container format (e.g., "matroska,webm", "mov,mp4,m4a")
    pub container: Option<String>,
    pub audio_streams: Vec<AudioStream>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AudioStream {
    /// Codec name (e.g., "aac", "ac3", "dts")
    pub codec: String,
    /// ISO 639-2 tag as written by the muxer
    pub language: Option<String>,
    pub channels: Option<u32>,
    pub is_default: bool,
}

impl MediaInfo {
    /// The default audio stream, else the first one
    pub fn main_audio(&self) -> Option<&AudioStream> {
        self.audio_streams
            .iter()
            .find(|s| s.is_default)
            .or_else(|| self.audio_streams.first())
    }

    /// Copy the probed values onto a media file record
    pub fn apply_to(&self, mf: &mut MediaFile) {
        mf.duration_seconds = self.duration_seconds;
        mf.video_codec = self.video_codec.clone();
        mf.width = self.width;
        mf.height = self.height;
        if let Some(audio) = self.main_audio() {
            mf.audio_codec = Some(audio.codec.clone());
            mf.audio_channels = audio.channels;
            mf.audio_language = audio.language.clone();
        }
        if let Some(container) = self
            .container
            .as_deref()
            .and_then(|c| c.split(',').next())
        {
            mf.container_format = Some(container.to_string());
        }
    }
}

/// Source of technical media information for a file
#[async_trait]
pub trait MediaInfoProbe: Send + Sync {
    async fn probe(&self, path: &Path) -> Result<MediaInfo>;
}

/// Probe backed by the ffprobe binary
#[derive(Debug, Clone)]
pub struct FfprobeProbe {
    binary: PathBuf,
}

impl FfprobeProbe {
    /// `configured` comes from `[tools] ffprobe_path` or `FFPROBE_PATH`
    pub fn new(configured: Option<PathBuf>) -> Self {
        let binary = configured.unwrap_or_else(locate_ffprobe);
        tracing::debug!("Using ffprobe at {}", binary.display());
        Self { binary }
    }
}

#[async_trait]
impl MediaInfoProbe for FfprobeProbe {
    async fn probe(&self, path: &Path) -> Result<MediaInfo> {
        let binary = self.binary.clone();
        let path = path.to_path_buf();
        tokio::task::spawn_blocking(move || run_ffprobe(&binary, &path))
            .await
            .context("Task join error")?
    }
}

/// `ffprobe -print_format json` output, only the fields used here
#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    format: Option<FfprobeFormat>,
    streams: Option<Vec<FfprobeStream>>,
}

#[derive(Debug, Deserialize)]
struct FfprobeFormat {
    duration: Option<String>,
    format_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FfprobeStream {
    codec_type: Option<String>,
    codec_name: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    channels: Option<u32>,
    tags: Option<FfprobeStreamTags>,
    disposition: Option<FfprobeDisposition>,
}

#[derive(Debug, Deserialize)]
struct FfprobeStreamTags {
    language: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FfprobeDisposition {
    default: Option<i32>,
}

const FFPROBE_LOCATIONS: &[&str] = &[
    "/usr/bin/ffprobe",
    "/usr/local/bin/ffprobe",
    "/opt/homebrew/bin/ffprobe",
];

fn locate_ffprobe() -> PathBuf {
    FFPROBE_LOCATIONS
        .iter()
        .map(PathBuf::from)
        .find(|candidate| candidate.exists())
        .unwrap_or_else(|| PathBuf::from("ffprobe"))
}

fn run_ffprobe(binary: &Path, path: &Path) -> Result<MediaInfo> {
    let output = Command::new(binary)
        .args(["-v", "quiet", "-print_format", "json", "-show_format", "-show_streams"])
        .arg(path)
        .output()
        .with_context(|| format!("Cannot run {} (is ffmpeg installed?)", binary.display()))?;

    if !output.status.success() {
        anyhow::bail!(
            "ffprobe exited with {} on {}: {}",
            output.status,
            path.display(),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    parse_ffprobe_output(&String::from_utf8_lossy(&output.stdout))
}

fn parse_ffprobe_output(json_output: &str) -> Result<MediaInfo> {
    let probe: FfprobeOutput =
        serde_json::from_str(json_output).context("Failed to parse ffprobe output")?;

    let mut info = MediaInfo::default();

    if let Some(format) = probe.format {
        info.duration_seconds = format.duration.and_then(|d| d.parse::<f64>().ok());
        info.container = format.format_name;
    }

    for stream in probe.streams.unwrap_or_default() {
        match stream.codec_type.as_deref() {
            Some("video") => {
                // Cover art is reported as an mjpeg/png video stream
                let is_cover = matches!(stream.codec_name.as_deref(), Some("mjpeg" | "png"));
                if info.video_codec.is_none() && !is_cover {
                    info.video_codec = stream.codec_name;
                    info.width = stream.width;
                    info.height = stream.height;
                }
            }
            Some("audio") => {
                if let Some(codec) = stream.codec_name {
                    let is_default = stream
                        .disposition
                        .as_ref()
                        .and_then(|d| d.default)
                        .map(|v| v == 1)
                        .unwrap_or(false);

                    info.audio_streams.push(AudioStream {
                        codec,
                        language: stream.tags.and_then(|t| t.language),
                        channels: stream.channels,
                        is_default,
                    });
                }
            }
            _ => {}
        }
    }

    Ok(info)
}

/// Format a duration as human-readable string (HH:MM:SS)
pub fn format_duration(seconds: f64) -> String {
    let total_seconds = seconds.max(0.0) as i64;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MediaFileType;

    const SAMPLE: &str = r#"{
        "streams": [
            {"index": 0, "codec_type": "video", "codec_name": "h264", "width": 1920, "height": 1080},
            {"index": 1, "codec_type": "audio", "codec_name": "aac", "channels": 2,
             "tags": {"language": "jpn"}},
            {"index": 2, "codec_type": "audio", "codec_name": "ac3", "channels": 6,
             "tags": {"language": "eng"}, "disposition": {"default": 1}},
            {"index": 3, "codec_type": "video", "codec_name": "mjpeg", "width": 600, "height": 900}
        ],
        "format": {"duration": "5445.120000", "format_name": "matroska,webm"}
    }"#;

    #[test]
    fn test_format_duration() {
        // 1 hour, 30 minutes, 45 seconds
        assert_eq!(format_duration((3600 + 30 * 60 + 45) as f64), "01:30:45");

        // 5 minutes, 30 seconds
        assert_eq!(format_duration(330.4), "05:30");
    }

    #[test]
    fn test_parse_ffprobe_output() {
        let info = parse_ffprobe_output(SAMPLE).unwrap();
        assert_eq!(info.video_codec.as_deref(), Some("h264"));
        assert_eq!(info.width, Some(1920));
        assert_eq!(info.audio_streams.len(), 2);
        assert_eq!(info.main_audio().unwrap().codec, "ac3");
        assert!((info.duration_seconds.unwrap() - 5445.12).abs() < 0.001);
    }

    #[test]
    fn test_apply_to_media_file() {
        let info = parse_ffprobe_output(SAMPLE).unwrap();
        let mut mf = MediaFile::new(PathBuf::from("/m/a.mkv"), MediaFileType::Video);
        info.apply_to(&mut mf);
        assert_eq!(mf.container_format.as_deref(), Some("matroska"));
        assert_eq!(mf.audio_description().as_deref(), Some("AC3 6ch"));
        assert_eq!(mf.audio_language.as_deref(), Some("eng"));
        assert_eq!(mf.video_description().as_deref(), Some("h264 1080p"));
        assert!(mf.has_media_info());
    }

    #[test]
    fn test_parse_invalid_output() {
        assert!(parse_ffprobe_output("not json").is_err());
    }
}
