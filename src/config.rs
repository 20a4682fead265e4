use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub providers: ProvidersConfig,
    #[serde(default)]
    pub quota: QuotaConfig,
    #[serde(default)]
    pub suggestions: SuggestionsConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// Path to a JSON catalog file. Empty means the built-in catalog.
    #[serde(default)]
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersConfig {
    #[serde(default = "default_weather_base_url")]
    pub weather_base_url: String,
    #[serde(default = "default_water_base_url")]
    pub water_base_url: String,
    #[serde(default = "default_provider_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_water_radius_miles")]
    pub water_radius_miles: f64,
    #[serde(default = "default_live_data_enabled")]
    pub live_data: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotaConfig {
    #[serde(default = "default_daily_limit")]
    pub daily_limit: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsConfig {
    #[serde(default = "default_suggestion_count")]
    pub default_count: usize,
    #[serde(default = "default_free_tier_max")]
    pub free_tier_max: usize,
    #[serde(default = "default_authenticated_max")]
    pub authenticated_max: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen")]
    pub listen: String,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub catalog_path: Option<String>,
    pub live_data: Option<bool>,
    pub listen: Option<String>,
}

impl Config {
    pub fn default_path() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config/fly-oracle/config.toml")
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(|p| p.to_path_buf())
            .unwrap_or_else(Self::default_path);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(&path)
            .with_context(|| format!("failed reading config: {}", path.display()))?;
        let parsed: Self = toml::from_str(&data)
            .with_context(|| format!("failed parsing TOML config: {}", path.display()))?;
        Ok(parsed)
    }

    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(catalog_path) = overrides.catalog_path {
            self.catalog.path = catalog_path;
        }
        if let Some(live_data) = overrides.live_data {
            self.providers.live_data = live_data;
        }
        if let Some(listen) = overrides.listen {
            self.server.listen = listen;
        }
    }

    pub fn write_template(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed creating config directory: {}", parent.display())
            })?;
        }
        fs::write(path, Self::default_template())
            .with_context(|| format!("failed writing config template: {}", path.display()))
    }

    pub fn resolved_catalog_path(&self) -> Option<PathBuf> {
        if self.catalog.path.trim().is_empty() {
            return None;
        }
        Some(expand_tilde(&self.catalog.path))
    }

    pub fn default_template() -> String {
        let template = r#"[catalog]
# Leave empty to use the built-in pattern catalog.
path = ""

[providers]
weather_base_url = "https://api.open-meteo.com"
water_base_url = "https://waterservices.usgs.gov"
timeout_secs = 10
water_radius_miles = 25.0
live_data = true

[quota]
daily_limit = 50

[suggestions]
default_count = 5
free_tier_max = 3
authenticated_max = 10

[server]
listen = "127.0.0.1:8080"
"#;
        template.to_string()
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            providers: ProvidersConfig::default(),
            quota: QuotaConfig::default(),
            suggestions: SuggestionsConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            weather_base_url: default_weather_base_url(),
            water_base_url: default_water_base_url(),
            timeout_secs: default_provider_timeout_secs(),
            water_radius_miles: default_water_radius_miles(),
            live_data: default_live_data_enabled(),
        }
    }
}

impl Default for QuotaConfig {
    fn default() -> Self {
        Self {
            daily_limit: default_daily_limit(),
        }
    }
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        Self {
            default_count: default_suggestion_count(),
            free_tier_max: default_free_tier_max(),
            authenticated_max: default_authenticated_max(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

fn default_weather_base_url() -> String {
    "https://api.open-meteo.com".to_string()
}

fn default_water_base_url() -> String {
    "https://waterservices.usgs.gov".to_string()
}

fn default_provider_timeout_secs() -> u64 {
    10
}

fn default_water_radius_miles() -> f64 {
    25.0
}

fn default_live_data_enabled() -> bool {
    true
}

fn default_daily_limit() -> u32 {
    50
}

fn default_suggestion_count() -> usize {
    5
}

fn default_free_tier_max() -> usize {
    3
}

fn default_authenticated_max() -> usize {
    10
}

fn default_listen() -> String {
    "127.0.0.1:8080".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_round_trips_through_toml() {
        let parsed: Config = toml::from_str(&Config::default_template()).unwrap();
        assert_eq!(parsed.quota.daily_limit, 50);
        assert_eq!(parsed.suggestions.free_tier_max, 3);
        assert!(parsed.providers.live_data);
        assert!(parsed.resolved_catalog_path().is_none());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let parsed: Config = toml::from_str("[quota]\ndaily_limit = 5\n").unwrap();
        assert_eq!(parsed.quota.daily_limit, 5);
        assert_eq!(parsed.providers.timeout_secs, 10);
        assert_eq!(parsed.server.listen, "127.0.0.1:8080");
    }

    #[test]
    fn overrides_win() {
        let mut config = Config::default();
        config.apply_overrides(ConfigOverrides {
            catalog_path: Some("~/flies.json".to_string()),
            live_data: Some(false),
            listen: None,
        });
        assert!(!config.providers.live_data);
        assert!(config.resolved_catalog_path().is_some());
    }
}
