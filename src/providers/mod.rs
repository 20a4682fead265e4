//! Collaborator seams consumed by the recommendation facade.
//!
//! Each collaborator is a trait object injected into the engine, so tests
//! swap in fixtures and no module-level singletons exist.

pub mod http;
pub mod usage;
pub mod water;
pub mod weather;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::catalog::FlyPattern;
use crate::conditions::{WaterSnapshot, WeatherSnapshot};
use crate::types::UsageInfo;

/// Read-only source of the full fly catalog.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn fetch_patterns(&self) -> Result<Vec<FlyPattern>>;
}

/// Current-weather snapshot by coordinates.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, latitude: f64, longitude: f64) -> Result<WeatherSnapshot>;
}

/// Nearest-station water reading within a search radius.
#[async_trait]
pub trait WaterGaugeProvider: Send + Sync {
    async fn nearest_reading(
        &self,
        latitude: f64,
        longitude: f64,
        radius_miles: f64,
    ) -> Result<WaterSnapshot>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageDecision {
    pub allowed: bool,
    pub usage: UsageInfo,
}

/// Usage/entitlement bookkeeping. Checked before scoring, incremented after.
#[async_trait]
pub trait UsageService: Send + Sync {
    async fn can_perform(&self, requester: &str, action: &str) -> Result<UsageDecision>;
    async fn increment(&self, requester: &str, action: &str) -> Result<UsageInfo>;
}

/// Catalog backed by an in-memory pattern list (the builtin set, or anything
/// a caller hands over).
pub struct StaticCatalog {
    patterns: Vec<FlyPattern>,
}

impl StaticCatalog {
    pub fn new(patterns: Vec<FlyPattern>) -> Self {
        Self { patterns }
    }

    pub fn builtin() -> Self {
        Self::new(crate::catalog::builtin::builtin_patterns())
    }
}

#[async_trait]
impl CatalogStore for StaticCatalog {
    async fn fetch_patterns(&self) -> Result<Vec<FlyPattern>> {
        Ok(self.patterns.clone())
    }
}

/// Catalog loaded from a JSON file of `FlyPattern` records.
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogStore for JsonFileCatalog {
    async fn fetch_patterns(&self) -> Result<Vec<FlyPattern>> {
        let data = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("failed reading catalog file: {}", self.path.display()))?;
        serde_json::from_str(&data)
            .with_context(|| format!("invalid catalog JSON: {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn builtin_static_catalog_serves_patterns() {
        let store = StaticCatalog::builtin();
        let patterns = store.fetch_patterns().await.unwrap();
        assert!(!patterns.is_empty());
    }

    #[tokio::test]
    async fn json_catalog_surfaces_missing_file_error() {
        let store = JsonFileCatalog::new("/nonexistent/flies.json");
        let err = store.fetch_patterns().await.unwrap_err();
        assert!(err.to_string().contains("catalog file"));
    }
}
