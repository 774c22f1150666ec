// Configuration module for mediaman-rust
// mediaman configuration: XDG (or portable) directories, config.toml, env overrides

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::models::{FanartNaming, NfoNaming, PosterNaming};

const APP_NAME: &str = "mediaman-rust";
const CONFIG_FILENAME: &str = "config.toml";

/// config.toml as written by the user
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// `[paths]`
    pub paths: PathsConfig,

    /// Datasources and recognized file types
    pub library: LibraryConfig,

    /// Rename templates and sidecar naming conventions
    pub renamer: RenamerConfig,

    /// Update task configuration
    pub scanner: ScannerConfig,

    /// `[metadata]`
    pub metadata: MetadataConfig,

    /// `[tools]`
    pub tools: ToolsConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Data directory override (catalog database)
    pub data_dir: Option<PathBuf>,

    /// Override cache directory
    pub cache_dir: Option<PathBuf>,

    /// Config directory override
    pub config_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MetadataConfig {
    /// TMDB API key (optional, registers the TMDB provider)
    pub tmdb_api_key: Option<String>,

    /// Preferred metadata language (default: en-US)
    pub language: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Path to ffprobe binary
    pub ffprobe_path: Option<PathBuf>,
}

/// Datasources and the file types the classifier recognizes
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Root folders scanned for movies
    pub movie_data_sources: Vec<PathBuf>,

    /// Video file extensions (lowercase, without dots)
    pub video_file_types: Vec<String>,

    /// Subtitle file extensions (lowercase, without dots)
    pub subtitle_file_types: Vec<String>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            movie_data_sources: Vec::new(),
            video_file_types: [
                "mkv", "mp4", "avi", "mov", "wmv", "flv", "webm", "m4v", "mpg", "mpeg", "ts",
                // Less common containers
                "m2ts", "mts", "vob", "ogm", "ogv", "divx", "xvid", "rmvb", "rm", "asf", "3gp",
                "3g2", "f4v", "iso", "img",
            ]
            .iter()
            .map(|ext| ext.to_string())
            .collect(),
            subtitle_file_types: ["srt", "sub", "idx", "ssa", "ass", "smi", "vtt", "sup"]
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
        }
    }
}

impl LibraryConfig {
    pub fn is_video_extension(&self, ext: &str) -> bool {
        self.video_file_types
            .iter()
            .any(|known| known.eq_ignore_ascii_case(ext))
    }

    pub fn is_subtitle_extension(&self, ext: &str) -> bool {
        self.subtitle_file_types
            .iter()
            .any(|known| known.eq_ignore_ascii_case(ext))
    }
}

/// Renamer templates and naming conventions
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenamerConfig {
    /// Folder template relative to the datasource (e.g. "$1/$T ($Y)")
    pub path_template: String,

    /// Filename template without extension (e.g. "$T ($Y) $V")
    pub filename_template: String,

    pub nfo_naming: Vec<NfoNaming>,
    pub poster_naming: Vec<PosterNaming>,
    pub fanart_naming: Vec<FanartNaming>,

    /// Extra attempts for the folder move when the rename fails (default: 5)
    pub move_retries: u32,

    /// Delay between folder move attempts in milliseconds (default: 1000)
    pub retry_delay_ms: u64,
}

impl Default for RenamerConfig {
    fn default() -> Self {
        Self {
            path_template: "$T ($Y)".to_string(),
            filename_template: "$T ($Y)".to_string(),
            nfo_naming: vec![NfoNaming::FilenameNfo],
            poster_naming: vec![PosterNaming::PosterJpg, PosterNaming::PosterPng],
            fanart_naming: vec![FanartNaming::FanartJpg, FanartNaming::FanartPng],
            move_retries: 5,
            retry_delay_ms: 1000,
        }
    }
}

/// Update task configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Number of media roots built in parallel (default: 3)
    pub concurrency: usize,

    /// Number of parallel ffprobe runs in the media info pass (default: 1)
    pub media_info_concurrency: usize,

    /// Run the media info pass after each update (default: true)
    pub gather_media_info: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            concurrency: 3,
            media_info_concurrency: 1,
            gather_media_info: true,
        }
    }
}

/// Where mediaman keeps its config, catalog database and cache
/// On other platforms, falls back to the current directory or platform-specific locations
#[derive(Debug, Clone)]
pub struct AppPaths {
    /// XDG: $XDG_CONFIG_HOME/mediaman-rust or ~/.config/mediaman-rust
    pub config_dir: PathBuf,

    /// XDG: $XDG_DATA_HOME/mediaman-rust or ~/.local/share/mediaman-rust
    pub data_dir: PathBuf,

    /// XDG: $XDG_CACHE_HOME/mediaman-rust or ~/.cache/mediaman-rust
    pub cache_dir: PathBuf,
}

impl AppPaths {
    /// Resolve directories from overrides, then XDG locations
    ///
    /// Priority order:
    /// 1. Environment variables (MEDIAMAN_CONFIG_DIR, MEDIAMAN_DATA_DIR, MEDIAMAN_CACHE_DIR)
    /// 2. Config file overrides
    /// 3. XDG / platform directories
    /// 4. Current directory fallback
    pub fn new(config_overrides: &PathsConfig) -> Self {
        Self {
            config_dir: Self::resolve_dir(
                "MEDIAMAN_CONFIG_DIR",
                &config_overrides.config_dir,
                dirs::config_dir(),
                None,
            ),
            data_dir: Self::resolve_dir(
                "MEDIAMAN_DATA_DIR",
                &config_overrides.data_dir,
                dirs::data_dir(),
                None,
            ),
            cache_dir: Self::resolve_dir(
                "MEDIAMAN_CACHE_DIR",
                &config_overrides.cache_dir,
                dirs::cache_dir(),
                Some("cache"),
            ),
        }
    }

    /// Create application paths using current directory (portable mode)
    pub fn current_dir() -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            config_dir: cwd.clone(),
            data_dir: cwd.clone(),
            cache_dir: cwd.join("cache"),
        }
    }

    fn resolve_dir(
        env_var: &str,
        config_override: &Option<PathBuf>,
        platform_dir: Option<PathBuf>,
        fallback_subdir: Option<&str>,
    ) -> PathBuf {
        if let Ok(path) = std::env::var(env_var) {
            return PathBuf::from(path);
        }

        if let Some(ref path) = config_override {
            return path.clone();
        }

        if let Some(dir) = platform_dir {
            return dir.join(APP_NAME);
        }

        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        match fallback_subdir {
            Some(sub) => cwd.join(sub),
            None => cwd,
        }
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("mediaman.db")
    }

    /// sqlx connection string for the catalog database
    pub fn database_url(&self) -> String {
        format!("sqlite:{}?mode=rwc", self.database_path().display())
    }

    pub fn config_file_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILENAME)
    }

    /// Create config, data and cache directories
    pub async fn ensure_dirs(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.config_dir).await?;
        tokio::fs::create_dir_all(&self.data_dir).await?;
        tokio::fs::create_dir_all(&self.cache_dir).await?;
        Ok(())
    }

    pub fn log_paths(&self) {
        tracing::info!("Configuration directory: {}", self.config_dir.display());
        tracing::debug!("Config file: {}", self.config_file_path().display());
        tracing::info!("Data directory: {}", self.data_dir.display());
        tracing::debug!("Cache directory: {}", self.cache_dir.display());
        tracing::debug!("Database path: {}", self.database_path().display());
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new(&PathsConfig::default())
    }
}

/// Effective configuration for one run
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub paths: AppPaths,
    pub library: LibraryConfig,
    pub renamer: RenamerConfig,
    pub scanner: ScannerConfig,

    /// TMDB API key (optional)
    pub tmdb_api_key: Option<String>,

    /// Metadata language for providers
    pub metadata_language: String,

    /// Path to ffprobe binary
    pub ffprobe_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load config.toml and apply environment overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables
    /// 2. TOML config file
    /// 3. Default values
    pub fn load() -> Self {
        let portable_mode = std::env::var("MEDIAMAN_PORTABLE")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let config_dir = if portable_mode {
            tracing::info!("Running in portable mode (using current directory)");
            AppPaths::current_dir().config_dir
        } else {
            Self::find_config_dir()
        };

        let config_file = Self::load_config_file(&config_dir);

        let mut config = Self::build(config_file);
        if portable_mode {
            config.paths = AppPaths::current_dir();
        }
        config
    }

    /// Directory holding config.toml
    fn find_config_dir() -> PathBuf {
        if let Ok(path) = std::env::var("MEDIAMAN_CONFIG_DIR") {
            return PathBuf::from(path);
        }

        if let Some(dir) = dirs::config_dir() {
            return dir.join(APP_NAME);
        }

        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    }

    /// Read config.toml; any problem falls back to defaults
    fn load_config_file(config_dir: &Path) -> ConfigFile {
        let config_path = config_dir.join(CONFIG_FILENAME);

        if !config_path.exists() {
            tracing::debug!(
                "No config file found at {}, using defaults",
                config_path.display()
            );
            return ConfigFile::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    tracing::info!("Loaded configuration from {}", config_path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to parse config file {}: {}. Using defaults.",
                        config_path.display(),
                        e
                    );
                    ConfigFile::default()
                }
            },
            Err(e) => {
                tracing::warn!(
                    "Failed to read config file {}: {}. Using defaults.",
                    config_path.display(),
                    e
                );
                ConfigFile::default()
            }
        }
    }

    /// Merge a parsed config file with environment overrides
    fn build(config_file: ConfigFile) -> Self {
        let paths = AppPaths::new(&config_file.paths);

        let mut library = config_file.library;
        // Datasources: env > config
        if let Some(sources) = Self::env_data_sources() {
            library.movie_data_sources = sources;
        }

        // TMDB API key: env > config
        let tmdb_api_key = std::env::var("TMDB_API_KEY")
            .ok()
            .or(config_file.metadata.tmdb_api_key);

        let metadata_language = config_file
            .metadata
            .language
            .unwrap_or_else(|| "en-US".to_string());

        // FFprobe path: env > config
        let ffprobe_path = std::env::var("FFPROBE_PATH")
            .ok()
            .map(PathBuf::from)
            .or(config_file.tools.ffprobe_path);

        Self {
            paths,
            library,
            renamer: config_file.renamer,
            scanner: config_file.scanner,
            tmdb_api_key,
            metadata_language,
            ffprobe_path,
        }
    }

    /// MEDIAMAN_DATA_SOURCES uses the platform path-list separator (':' on Unix)
    fn env_data_sources() -> Option<Vec<PathBuf>> {
        let value = std::env::var_os("MEDIAMAN_DATA_SOURCES")?;
        let sources: Vec<PathBuf> = std::env::split_paths(&value)
            .filter(|p| !p.as_os_str().is_empty())
            .collect();
        if sources.is_empty() {
            None
        } else {
            Some(sources)
        }
    }

    /// Catalog database URL (`DATABASE_URL` wins)
    pub fn database_url(&self) -> String {
        std::env::var("DATABASE_URL").unwrap_or_else(|_| self.paths.database_url())
    }

    /// Log the effective configuration at startup
    pub fn log_config(&self) {
        self.paths.log_paths();

        if self.library.movie_data_sources.is_empty() {
            tracing::warn!("No datasources configured");
            tracing::info!(
                "Hint: Add movie_data_sources to [library] in config.toml or set MEDIAMAN_DATA_SOURCES"
            );
        }
        for source in &self.library.movie_data_sources {
            tracing::info!("Datasource: {}", source.display());
        }

        tracing::debug!(
            "Renamer templates: folder '{}', file '{}'",
            self.renamer.path_template,
            self.renamer.filename_template
        );

        if self.tmdb_api_key.is_some() {
            tracing::info!("Metadata providers: TMDB");
        } else {
            tracing::info!("Metadata providers: none");
            tracing::info!("Scraping disabled: set tmdb_api_key in config.toml or TMDB_API_KEY");
        }

        if let Some(ref path) = self.ffprobe_path {
            tracing::debug!("FFprobe: {}", path.display());
        }
    }
}
