// Metadata provider abstraction, explicit registry and unit scraping

use anyhow::Result;
use async_trait::async_trait;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use crate::models::{MediaFileType, MediaUnit};

/// One hit of a provider search
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResult {
    /// Provider specific id
    pub id: String,
    pub title: String,
    pub original_title: Option<String>,
    pub year: Option<i32>,
}

/// Movie metadata as returned by a provider
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieMetadata {
    pub title: String,
    pub original_title: Option<String>,
    pub year: Option<i32>,
    pub plot: Option<String>,
    pub imdb_id: Option<String>,
    pub tmdb_id: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtworkKind {
    Poster,
    Fanart,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Artwork {
    pub kind: ArtworkKind,
    pub url: String,
}

/// A metadata/artwork source
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Stable identifier used for registration and lookup (e.g. "tmdb")
    fn id(&self) -> &str;

    async fn search(&self, query: &str, year: Option<i32>) -> Result<Vec<SearchResult>>;

    async fn fetch_metadata(&self, id: &str) -> Result<MovieMetadata>;

    /// Artwork ordered by preference
    async fn fetch_artwork(&self, id: &str) -> Result<Vec<Artwork>>;
}

/// Providers registered at startup, keyed by id
#[derive(Default, Clone)]
pub struct ProviderRegistry {
    providers: BTreeMap<String, Arc<dyn MetadataProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider, replacing any previous one with the same id
    pub fn register(&mut self, provider: Arc<dyn MetadataProvider>) {
        let id = provider.id().to_string();
        if self.providers.insert(id.clone(), provider).is_some() {
            tracing::warn!("Metadata provider '{}' registered twice, keeping the last", id);
        }
    }

    pub fn get(&self, id: &str) -> Option<Arc<dyn MetadataProvider>> {
        self.providers.get(id).cloned()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.providers.keys().map(String::as_str).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

fn clean_for_match(title: &str) -> String {
    title
        .to_lowercase()
        .trim_end_matches(|c: char| c == ')' || c.is_ascii_digit() || c == '(' || c == ' ')
        .trim()
        .to_string()
}

/// Loose title comparison tolerant of subtitles, articles and year suffixes
fn title_matches(query: &str, result: &SearchResult) -> bool {
    let query_clean = clean_for_match(query);
    let candidates = std::iter::once(result.title.as_str()).chain(result.original_title.as_deref());

    for candidate in candidates {
        let candidate_clean = clean_for_match(candidate);
        if candidate_clean.is_empty() {
            continue;
        }

        // Exact or substring match
        if candidate_clean == query_clean {
            return true;
        }
        if candidate_clean.contains(&query_clean) || query_clean.contains(&candidate_clean) {
            let shorter = query_clean.len().min(candidate_clean.len());
            let longer = query_clean.len().max(candidate_clean.len());
            if shorter > 0 && shorter as f64 / longer as f64 > 0.4 {
                return true;
            }
        }

        // Word overlap check
        let query_words: HashSet<&str> = query_clean.split_whitespace().collect();
        let candidate_words: HashSet<&str> = candidate_clean.split_whitespace().collect();
        let common_words = query_words.intersection(&candidate_words).count();
        if !query_words.is_empty() && !candidate_words.is_empty() {
            let match_ratio =
                common_words as f64 / query_words.len().min(candidate_words.len()) as f64;
            if match_ratio >= 0.6 || (common_words >= 2 && match_ratio >= 0.4) {
                return true;
            }
        }
    }

    false
}

/// Pick the best search hit: a title match with the same year, else any title match
pub fn best_match(results: Vec<SearchResult>, title: &str, year: Option<i32>) -> Option<SearchResult> {
    if let Some(target_year) = year {
        if let Some(hit) = results
            .iter()
            .find(|r| r.year == Some(target_year) && title_matches(title, r))
        {
            return Some(hit.clone());
        }
    }
    results.into_iter().find(|r| title_matches(title, r))
}

/// Overwrite the unit's metadata with provider data
pub fn apply_metadata(unit: &mut MediaUnit, metadata: MovieMetadata) {
    if !metadata.title.is_empty() {
        unit.title = metadata.title;
        unit.sort_title = crate::scanner::parser::sort_title(&unit.title);
    }
    if let Some(original_title) = metadata.original_title {
        unit.original_title = original_title;
    }
    if metadata.year.is_some() {
        unit.year = metadata.year;
    }
    if let Some(plot) = metadata.plot {
        unit.plot = plot;
    }
    if let Some(imdb_id) = metadata.imdb_id.filter(|id| !id.is_empty()) {
        unit.imdb_id = imdb_id;
    }
    if metadata.tmdb_id.is_some() {
        unit.tmdb_id = metadata.tmdb_id;
    }
}

/// Remote artwork is only used where no local file provides it
fn apply_artwork(unit: &mut MediaUnit, artwork: &[Artwork]) {
    let first_of = |kind: ArtworkKind| artwork.iter().find(|a| a.kind == kind).map(|a| a.url.clone());

    if unit.media_files_of(MediaFileType::Poster).next().is_none() {
        if let Some(url) = first_of(ArtworkKind::Poster) {
            unit.poster_url = Some(url);
        }
    }
    if unit.media_files_of(MediaFileType::Fanart).next().is_none() {
        if let Some(url) = first_of(ArtworkKind::Fanart) {
            unit.fanart_url = Some(url);
        }
    }
}

/// Search the provider for the unit and apply the best match.
/// Returns false when nothing matched.
pub async fn scrape_unit(provider: &dyn MetadataProvider, unit: &mut MediaUnit) -> Result<bool> {
    let query = if unit.title.is_empty() {
        unit.original_title.clone()
    } else {
        unit.title.clone()
    };
    if query.is_empty() {
        anyhow::bail!("Unit at {} has no title to search for", unit.path.display());
    }

    let results = provider.search(&query, unit.year).await?;
    let Some(hit) = best_match(results, &query, unit.year) else {
        tracing::debug!(
            "{} search returned no usable match for '{}'",
            provider.id(),
            query
        );
        return Ok(false);
    };

    let metadata = provider.fetch_metadata(&hit.id).await?;
    apply_metadata(unit, metadata);

    match provider.fetch_artwork(&hit.id).await {
        Ok(artwork) => apply_artwork(unit, &artwork),
        Err(e) => tracing::warn!("Failed to fetch artwork for {}: {}", unit.display_name(), e),
    }

    unit.scraped = true;
    tracing::info!("Scraped {} from {}", unit.display_name(), provider.id());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MediaFile;
    use std::path::PathBuf;

    /// Provider answering from a fixed list
    struct FakeProvider {
        results: Vec<SearchResult>,
    }

    #[async_trait]
    impl MetadataProvider for FakeProvider {
        fn id(&self) -> &str {
            "fake"
        }

        async fn search(&self, _query: &str, _year: Option<i32>) -> Result<Vec<SearchResult>> {
            Ok(self.results.clone())
        }

        async fn fetch_metadata(&self, id: &str) -> Result<MovieMetadata> {
            let hit = self
                .results
                .iter()
                .find(|r| r.id == id)
                .ok_or_else(|| anyhow::anyhow!("unknown id {}", id))?;
            Ok(MovieMetadata {
                title: hit.title.clone(),
                original_title: hit.original_title.clone(),
                year: hit.year,
                plot: Some("Plot".to_string()),
                imdb_id: Some("tt0000001".to_string()),
                tmdb_id: id.parse().ok(),
            })
        }

        async fn fetch_artwork(&self, _id: &str) -> Result<Vec<Artwork>> {
            Ok(vec![
                Artwork {
                    kind: ArtworkKind::Poster,
                    url: "https://img/poster.jpg".to_string(),
                },
                Artwork {
                    kind: ArtworkKind::Fanart,
                    url: "https://img/fanart.jpg".to_string(),
                },
            ])
        }
    }

    fn hit(id: &str, title: &str, year: i32) -> SearchResult {
        SearchResult {
            id: id.to_string(),
            title: title.to_string(),
            original_title: None,
            year: Some(year),
        }
    }

    #[test]
    fn test_registry() {
        let mut registry = ProviderRegistry::new();
        assert!(registry.is_empty());
        registry.register(Arc::new(FakeProvider { results: vec![] }));
        assert_eq!(registry.ids(), vec!["fake"]);
        assert!(registry.get("fake").is_some());
        assert!(registry.get("tmdb").is_none());
    }

    #[test]
    fn test_best_match_prefers_year() {
        let results = vec![hit("1", "Aladdin", 2019), hit("2", "Aladdin", 1992)];
        assert_eq!(best_match(results.clone(), "Aladdin", Some(1992)).unwrap().id, "2");
        assert_eq!(best_match(results, "Aladdin", None).unwrap().id, "1");
    }

    #[test]
    fn test_best_match_rejects_unrelated() {
        let results = vec![hit("1", "Completely Different", 1992)];
        assert!(best_match(results, "Aladdin", Some(1992)).is_none());
    }

    #[tokio::test]
    async fn test_scrape_unit_applies_metadata() {
        let provider = FakeProvider {
            results: vec![hit("812", "The Lion King", 1994)],
        };
        let mut unit = MediaUnit {
            title: "lion king".to_string(),
            ..Default::default()
        };
        unit.add_media_file(MediaFile::new(
            PathBuf::from("/m/poster.jpg"),
            MediaFileType::Poster,
        ));
        unit.sync_local_references();

        assert!(scrape_unit(&provider, &mut unit).await.unwrap());
        assert_eq!(unit.title, "The Lion King");
        assert_eq!(unit.sort_title, "Lion King, The");
        assert_eq!(unit.year, Some(1994));
        assert_eq!(unit.tmdb_id, Some(812));
        assert!(unit.scraped);
        // Local poster wins, remote fanart is adopted
        assert!(unit.poster_url.as_deref().unwrap().starts_with("file:"));
        assert_eq!(unit.fanart_url.as_deref(), Some("https://img/fanart.jpg"));
    }

    #[tokio::test]
    async fn test_scrape_unit_without_match() {
        let provider = FakeProvider { results: vec![] };
        let mut unit = MediaUnit {
            title: "Nothing".to_string(),
            ..Default::default()
        };
        assert!(!scrape_unit(&provider, &mut unit).await.unwrap());
        assert!(!unit.scraped);
    }
}
