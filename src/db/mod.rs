use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::models::MediaUnit;

#[cfg(test)]
pub mod memory;

/// Persistence boundary for media units.
///
/// Implementations serialize writes; a unit's path is unique in the catalog.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Insert or replace the unit (by id). Any other unit stored under the
    /// same path is dropped.
    async fn upsert(&self, unit: &MediaUnit) -> Result<()>;

    async fn remove(&self, unit: &MediaUnit) -> Result<()>;

    async fn find_by_path(&self, path: &Path) -> Result<Option<MediaUnit>>;

    /// All units ordered by path
    async fn all(&self) -> Result<Vec<MediaUnit>>;
}

/// Open the SQLite pool and apply the schema
pub async fn connect(database_url: &str) -> Result<SqlitePool> {
    let connect_options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("Invalid database URL '{}'", database_url))?
        .create_if_missing(true)
        // Enable WAL mode for better concurrent performance
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        // NORMAL sync is safe with WAL and much faster
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        // Busy timeout for concurrent access (5 seconds)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(4)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(connect_options)
        .await
        .context("Failed to open database")?;

    tracing::debug!("SQLite configured: WAL mode");

    migrate(&pool).await?;
    Ok(pool)
}

pub async fn migrate(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS media_units (
            id TEXT PRIMARY KEY,
            path TEXT NOT NULL UNIQUE,
            data_source TEXT NOT NULL,
            title TEXT NOT NULL,
            data TEXT NOT NULL,
            updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_media_units_data_source ON media_units(data_source)",
    )
    .execute(pool)
    .await?;

    Ok(())
}

fn path_key(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

/// Catalog stored in the `media_units` table, one JSON document per unit
pub struct SqliteCatalog {
    pool: SqlitePool,
    /// Single writer
    write_lock: Mutex<()>,
}

impl SqliteCatalog {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            write_lock: Mutex::new(()),
        }
    }

    fn decode(data: &str) -> Option<MediaUnit> {
        match serde_json::from_str(data) {
            Ok(unit) => Some(unit),
            Err(e) => {
                tracing::warn!("Skipping unreadable catalog entry: {}", e);
                None
            }
        }
    }
}

#[async_trait]
impl Catalog for SqliteCatalog {
    async fn upsert(&self, unit: &MediaUnit) -> Result<()> {
        let data = serde_json::to_string(unit).context("Failed to serialize media unit")?;
        let id = unit.id.to_string();
        let path = path_key(&unit.path);

        let _guard = self.write_lock.lock().await;
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM media_units WHERE path = ? AND id != ?")
            .bind(&path)
            .bind(&id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            r#"
            INSERT INTO media_units (id, path, data_source, title, data, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                path = excluded.path,
                data_source = excluded.data_source,
                title = excluded.title,
                data = excluded.data,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(&id)
        .bind(&path)
        .bind(path_key(&unit.data_source))
        .bind(&unit.title)
        .bind(&data)
        .bind(chrono::Utc::now().to_rfc3339())
        .execute(&mut *tx)
        .await
        .with_context(|| format!("Failed to store {}", unit.path.display()))?;

        tx.commit().await?;
        Ok(())
    }

    async fn remove(&self, unit: &MediaUnit) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        sqlx::query("DELETE FROM media_units WHERE id = ?")
            .bind(unit.id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_by_path(&self, path: &Path) -> Result<Option<MediaUnit>> {
        let row: Option<(String,)> = sqlx::query_as("SELECT data FROM media_units WHERE path = ?")
            .bind(path_key(path))
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.and_then(|(data,)| Self::decode(&data)))
    }

    async fn all(&self) -> Result<Vec<MediaUnit>> {
        let rows: Vec<(String,)> = sqlx::query_as("SELECT data FROM media_units ORDER BY path")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(data,)| Self::decode(&data))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MediaFile, MediaFileType};
    use std::path::PathBuf;

    async fn test_catalog() -> SqliteCatalog {
        // A single connection keeps the in-memory database alive and shared
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        migrate(&pool).await.unwrap();
        SqliteCatalog::new(pool)
    }

    fn unit_at(path: &str, title: &str) -> MediaUnit {
        let mut unit = MediaUnit {
            title: title.to_string(),
            path: PathBuf::from(path),
            data_source: PathBuf::from("/movies"),
            ..Default::default()
        };
        unit.add_media_file(MediaFile::new(
            PathBuf::from(path).join("movie.mkv"),
            MediaFileType::Video,
        ));
        unit
    }

    #[tokio::test]
    async fn test_upsert_and_find() {
        let catalog = test_catalog().await;
        let unit = unit_at("/movies/Heat (1995)", "Heat");
        catalog.upsert(&unit).await.unwrap();

        let found = catalog
            .find_by_path(Path::new("/movies/Heat (1995)"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found, unit);
        assert!(catalog
            .find_by_path(Path::new("/movies/Other"))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_upsert_updates_path() {
        let catalog = test_catalog().await;
        let mut unit = unit_at("/movies/old", "Heat");
        catalog.upsert(&unit).await.unwrap();

        unit.rebase_path(Path::new("/movies/Heat (1995)"));
        catalog.upsert(&unit).await.unwrap();

        let all = catalog.all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].path, PathBuf::from("/movies/Heat (1995)"));
    }

    #[tokio::test]
    async fn test_path_stays_unique() {
        let catalog = test_catalog().await;
        catalog.upsert(&unit_at("/movies/a", "First")).await.unwrap();
        catalog.upsert(&unit_at("/movies/a", "Second")).await.unwrap();

        let all = catalog.all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "Second");
    }

    #[tokio::test]
    async fn test_remove() {
        let catalog = test_catalog().await;
        let a = unit_at("/movies/a", "A");
        let b = unit_at("/movies/b", "B");
        catalog.upsert(&a).await.unwrap();
        catalog.upsert(&b).await.unwrap();

        catalog.remove(&a).await.unwrap();
        let all = catalog.all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "B");
    }
}
