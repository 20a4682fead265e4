//! Recommendation facade: validation, quota gate, concurrent provider
//! fetches with per-source timeouts, then the scoring pipeline.
//!
//! Every failure leaves through a structured `RecommendationResponse`;
//! nothing below this boundary panics on missing data.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::time::timeout;
use tracing::{info, warn};

use crate::catalog::filter::filter_catalog;
use crate::conditions::normalize;
use crate::conditions::{Location, WaterSnapshot, WeatherSnapshot};
use crate::providers::{CatalogStore, UsageService, WaterGaugeProvider, WeatherProvider};
use crate::scoring::calibrate::calibrate_all;
use crate::scoring::select::select_diverse;
use crate::scoring::ScoringPipeline;
use crate::types::{RecommendationRequest, RecommendationResponse};

pub const RECOMMEND_ACTION: &str = "fly_recommendation";
pub const DEFAULT_SUGGESTION_COUNT: usize = 5;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("location name and coordinates are required")]
    MissingLocation,
    #[error("fly catalog is empty")]
    EmptyCatalog,
    #[error("fly catalog unavailable: {0}")]
    CatalogUnavailable(String),
    #[error("usage service failed: {0}")]
    Usage(String),
}

#[derive(Debug, Clone)]
pub struct EngineOptions {
    pub provider_timeout: Duration,
    pub gauge_radius_miles: f64,
    /// Result cap for unauthenticated callers.
    pub free_tier_max: usize,
    pub authenticated_max: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            provider_timeout: Duration::from_secs(10),
            gauge_radius_miles: 25.0,
            free_tier_max: 3,
            authenticated_max: 10,
        }
    }
}

pub struct RecommendationEngine {
    catalog: Arc<dyn CatalogStore>,
    usage: Arc<dyn UsageService>,
    weather: Option<Arc<dyn WeatherProvider>>,
    water: Option<Arc<dyn WaterGaugeProvider>>,
    pipeline: ScoringPipeline,
    options: EngineOptions,
}

impl RecommendationEngine {
    pub fn new(catalog: Arc<dyn CatalogStore>, usage: Arc<dyn UsageService>) -> Self {
        Self {
            catalog,
            usage,
            weather: None,
            water: None,
            pipeline: ScoringPipeline::standard(),
            options: EngineOptions::default(),
        }
    }

    pub fn with_weather_provider(mut self, provider: Arc<dyn WeatherProvider>) -> Self {
        self.weather = Some(provider);
        self
    }

    pub fn with_water_provider(mut self, provider: Arc<dyn WaterGaugeProvider>) -> Self {
        self.water = Some(provider);
        self
    }

    pub fn with_options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }

    /// Recommend with the wall clock.
    pub async fn recommend(
        &self,
        request: &RecommendationRequest,
        requester: Option<&str>,
    ) -> RecommendationResponse {
        self.recommend_at(request, requester, Utc::now()).await
    }

    /// Recommend at an injected evaluation instant. Deterministic for fixed
    /// inputs and fixed `now`.
    pub async fn recommend_at(
        &self,
        request: &RecommendationRequest,
        requester: Option<&str>,
        now: DateTime<Utc>,
    ) -> RecommendationResponse {
        match self.run(request, requester, now).await {
            Ok(response) => response,
            Err(err) => {
                warn!("recommendation request failed: {err}");
                RecommendationResponse::failure(err.to_string(), now)
            }
        }
    }

    async fn run(
        &self,
        request: &RecommendationRequest,
        requester: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<RecommendationResponse, EngineError> {
        let location = validated_location(request)?;

        let requester_id = requester.unwrap_or("anonymous");
        let decision = self
            .usage
            .can_perform(requester_id, RECOMMEND_ACTION)
            .await
            .map_err(|e| EngineError::Usage(e.to_string()))?;
        if !decision.allowed {
            info!(requester = requester_id, "quota exhausted, skipping scoring");
            return Ok(RecommendationResponse::quota_exhausted(decision.usage, now));
        }

        let patterns = self
            .catalog
            .fetch_patterns()
            .await
            .map_err(|e| EngineError::CatalogUnavailable(e.to_string()))?;

        // Live sources run concurrently and degrade independently. A caller
        // that already supplied a snapshot skips the fetch for that source.
        let (live_weather, live_water) = tokio::join!(
            async {
                if request.conditions.live_weather.is_some() {
                    None
                } else {
                    self.fetch_weather(&location).await
                }
            },
            async {
                if request.conditions.live_water.is_some() {
                    None
                } else {
                    self.fetch_water(&location).await
                }
            }
        );

        let mut input = request.conditions.clone();
        if input.live_weather.is_none() {
            input.live_weather = live_weather;
        }
        if input.live_water.is_none() {
            input.live_water = live_water;
        }
        let conditions = normalize::complete(&input, location, now);

        let candidates = filter_catalog(&patterns);
        if candidates.is_empty() {
            return Err(EngineError::EmptyCatalog);
        }

        let scored = candidates
            .iter()
            .map(|fly| self.pipeline.score(fly, &conditions))
            .collect::<Vec<_>>();
        let calibrated = calibrate_all(scored);

        let cap = if requester.is_some() {
            self.options.authenticated_max
        } else {
            self.options.free_tier_max
        };
        let count = request
            .count
            .unwrap_or(DEFAULT_SUGGESTION_COUNT)
            .clamp(1, cap);
        let suggestions = select_diverse(calibrated, count);

        let usage = match self.usage.increment(requester_id, RECOMMEND_ACTION).await {
            Ok(info) => Some(info),
            Err(err) => {
                warn!("usage increment failed: {err}");
                None
            }
        };

        Ok(RecommendationResponse::success(suggestions, usage, now))
    }

    async fn fetch_weather(&self, location: &Location) -> Option<WeatherSnapshot> {
        let provider = self.weather.as_ref()?;
        match timeout(
            self.options.provider_timeout,
            provider.current(location.latitude, location.longitude),
        )
        .await
        {
            Ok(Ok(snapshot)) => Some(snapshot),
            Ok(Err(err)) => {
                warn!("weather provider failed, using defaults: {err:#}");
                None
            }
            Err(_) => {
                warn!("weather provider timed out, using defaults");
                None
            }
        }
    }

    async fn fetch_water(&self, location: &Location) -> Option<WaterSnapshot> {
        let provider = self.water.as_ref()?;
        match timeout(
            self.options.provider_timeout,
            provider.nearest_reading(
                location.latitude,
                location.longitude,
                self.options.gauge_radius_miles,
            ),
        )
        .await
        {
            Ok(Ok(snapshot)) => Some(snapshot),
            Ok(Err(err)) => {
                warn!("water gauge provider failed, using defaults: {err:#}");
                None
            }
            Err(_) => {
                warn!("water gauge provider timed out, using defaults");
                None
            }
        }
    }
}

fn validated_location(request: &RecommendationRequest) -> Result<Location, EngineError> {
    let Some(location) = request.conditions.location.clone() else {
        return Err(EngineError::MissingLocation);
    };
    if location.name.trim().is_empty()
        || !location.latitude.is_finite()
        || !location.longitude.is_finite()
        || location.latitude.abs() > 90.0
        || location.longitude.abs() > 180.0
    {
        return Err(EngineError::MissingLocation);
    }
    Ok(location)
}
