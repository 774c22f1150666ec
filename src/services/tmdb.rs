// TMDB metadata provider
// API Documentation: https://developer.themoviedb.org/reference/intro/getting-started

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use super::metadata::{Artwork, ArtworkKind, MetadataProvider, MovieMetadata, SearchResult};

const TMDB_API_BASE: &str = "https://api.themoviedb.org/3";
const TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub const PROVIDER_ID: &str = "tmdb";

/// TMDB API client
pub struct TmdbProvider {
    client: Client,
    api_key: String,
    /// e.g. "en-US"
    language: String,
}

/// Search result for movies
#[derive(Debug, Deserialize)]
struct MovieSearchResults {
    results: Vec<MovieSearchResult>,
}

#[derive(Debug, Clone, Deserialize)]
struct MovieSearchResult {
    id: i64,
    title: String,
    original_title: Option<String>,
    release_date: Option<String>,
}

/// Detailed movie info
#[derive(Debug, Deserialize)]
struct MovieDetails {
    id: i64,
    title: String,
    original_title: Option<String>,
    overview: Option<String>,
    release_date: Option<String>,
    imdb_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MovieImages {
    #[serde(default)]
    posters: Vec<ImageInfo>,
    #[serde(default)]
    backdrops: Vec<ImageInfo>,
}

#[derive(Debug, Deserialize)]
struct ImageInfo {
    file_path: String,
    iso_639_1: Option<String>,
    vote_average: Option<f64>,
}

/// Image sizes for different purposes
#[derive(Debug, Clone, Copy)]
pub enum ImageSize {
    /// w500 - large poster
    PosterLarge,
    /// w1280 - large backdrop
    BackdropLarge,
}

impl ImageSize {
    fn as_str(&self) -> &'static str {
        match self {
            ImageSize::PosterLarge => "w500",
            ImageSize::BackdropLarge => "w1280",
        }
    }
}

pub fn image_url(file_path: &str, size: ImageSize) -> String {
    format!("{}/{}{}", TMDB_IMAGE_BASE, size.as_str(), file_path)
}

/// Year from a "YYYY-MM-DD" date
fn year_of(date: Option<&str>) -> Option<i32> {
    date.and_then(|d| d.split('-').next())
        .and_then(|y| y.parse().ok())
}

impl From<MovieSearchResult> for SearchResult {
    fn from(result: MovieSearchResult) -> Self {
        Self {
            id: result.id.to_string(),
            year: year_of(result.release_date.as_deref()),
            title: result.title,
            original_title: result.original_title,
        }
    }
}

impl From<MovieDetails> for MovieMetadata {
    fn from(details: MovieDetails) -> Self {
        Self {
            year: year_of(details.release_date.as_deref()),
            title: details.title,
            original_title: details.original_title,
            plot: details.overview.filter(|o| !o.is_empty()),
            imdb_id: details.imdb_id.filter(|id| !id.is_empty()),
            tmdb_id: Some(details.id),
        }
    }
}

impl TmdbProvider {
    pub fn new(api_key: String, language: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            api_key,
            language,
        }
    }

    /// Primary language part of the configured locale ("en-US" -> "en")
    fn image_language(&self) -> &str {
        self.language.split('-').next().unwrap_or("en")
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str, what: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to request TMDB {}", what))?
            .error_for_status()
            .with_context(|| format!("TMDB {} request rejected", what))?;

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse TMDB {} response", what))
    }

    /// Order artwork: configured language first, then language-neutral, then the rest, by votes
    fn sort_images(&self, images: &mut [ImageInfo]) {
        let language = self.image_language().to_string();
        let rank = |image: &ImageInfo| match image.iso_639_1.as_deref() {
            Some(l) if l == language => 0,
            None => 1,
            _ => 2,
        };
        images.sort_by(|a, b| {
            rank(a).cmp(&rank(b)).then_with(|| {
                b.vote_average
                    .unwrap_or(0.0)
                    .total_cmp(&a.vote_average.unwrap_or(0.0))
            })
        });
    }
}

#[async_trait]
impl MetadataProvider for TmdbProvider {
    fn id(&self) -> &str {
        PROVIDER_ID
    }

    /// Search for movies by name
    async fn search(&self, query: &str, year: Option<i32>) -> Result<Vec<SearchResult>> {
        let mut url = format!(
            "{}/search/movie?api_key={}&query={}&include_adult=false&language={}",
            TMDB_API_BASE,
            self.api_key,
            urlencoding::encode(query),
            urlencoding::encode(&self.language)
        );

        if let Some(y) = year {
            url.push_str(&format!("&year={}", y));
        }

        let response: MovieSearchResults = self.get_json(&url, "movie search").await?;
        Ok(response.results.into_iter().map(SearchResult::from).collect())
    }

    async fn fetch_metadata(&self, id: &str) -> Result<MovieMetadata> {
        let url = format!(
            "{}/movie/{}?api_key={}&language={}",
            TMDB_API_BASE,
            urlencoding::encode(id),
            self.api_key,
            urlencoding::encode(&self.language)
        );

        let details: MovieDetails = self.get_json(&url, "movie details").await?;
        Ok(details.into())
    }

    async fn fetch_artwork(&self, id: &str) -> Result<Vec<Artwork>> {
        let url = format!(
            "{}/movie/{}/images?api_key={}&include_image_language={},null",
            TMDB_API_BASE,
            urlencoding::encode(id),
            self.api_key,
            self.image_language()
        );

        let mut images: MovieImages = self.get_json(&url, "movie images").await?;
        self.sort_images(&mut images.posters);
        self.sort_images(&mut images.backdrops);

        let posters = images.posters.iter().map(|i| Artwork {
            kind: ArtworkKind::Poster,
            url: image_url(&i.file_path, ImageSize::PosterLarge),
        });
        let backdrops = images.backdrops.iter().map(|i| Artwork {
            kind: ArtworkKind::Fanart,
            url: image_url(&i.file_path, ImageSize::BackdropLarge),
        });
        Ok(posters.chain(backdrops).collect())
    }
}
