// In-memory catalog used by tests

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::Catalog;
use crate::models::MediaUnit;

#[derive(Default)]
pub struct MemoryCatalog {
    units: RwLock<HashMap<Uuid, MediaUnit>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.units.read().await.len()
    }
}

#[async_trait]
impl Catalog for MemoryCatalog {
    async fn upsert(&self, unit: &MediaUnit) -> Result<()> {
        let mut units = self.units.write().await;
        units.retain(|id, existing| *id == unit.id || existing.path != unit.path);
        units.insert(unit.id, unit.clone());
        Ok(())
    }

    async fn remove(&self, unit: &MediaUnit) -> Result<()> {
        self.units.write().await.remove(&unit.id);
        Ok(())
    }

    async fn find_by_path(&self, path: &Path) -> Result<Option<MediaUnit>> {
        Ok(self
            .units
            .read()
            .await
            .values()
            .find(|u| u.path == path)
            .cloned())
    }

    async fn all(&self) -> Result<Vec<MediaUnit>> {
        let mut all: Vec<MediaUnit> = self.units.read().await.values().cloned().collect();
        all.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(all)
    }
}
