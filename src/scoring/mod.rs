//! Hierarchical fly scorer: one ordered pipeline of additive tiers.
//!
//! Each tier is a pure function returning a signed delta plus human-readable
//! reasons. Deltas sum across tiers; the total is floored before calibration.
//! Determinism: for a fixed fly, fixed conditions, and fixed evaluation
//! instant (`conditions.date`), the output is byte-identical across calls.

pub mod calibrate;
pub mod select;
pub mod tiers;

use serde::Serialize;

use crate::catalog::FlyPattern;
use crate::conditions::FishingConditions;

/// Minimum raw score handed to the calibrator.
pub const SCORE_FLOOR: f64 = 5.0;

/// One tier's contribution for one fly. Output-only: serialized into API
/// breakdowns but never read back in.
#[derive(Debug, Clone, Serialize)]
pub struct TierScore {
    pub tier: &'static str,
    pub delta: f64,
    pub reasons: Vec<String>,
}

/// A fly with its summed score and accumulated reason trail.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredFly {
    pub fly: FlyPattern,
    pub score: f64,
    pub reasons: Vec<String>,
    pub breakdown: Vec<TierScore>,
}

pub type TierFn = fn(&FlyPattern, &FishingConditions) -> TierScore;

/// Ordered scoring pipeline. The standard order runs the tiers by descending
/// priority weight; a custom order is possible for tuning.
pub struct ScoringPipeline {
    tiers: Vec<TierFn>,
}

impl ScoringPipeline {
    pub fn standard() -> Self {
        Self {
            tiers: vec![
                tiers::location_tier,
                tiers::weather_tier,
                tiers::water_tier,
                tiers::season_tier,
                tiers::lunar_tier,
                tiers::versatility_tier,
                tiers::uniqueness_tier,
                tiers::realtime_tier,
            ],
        }
    }

    pub fn with_tiers(tiers: Vec<TierFn>) -> Self {
        Self { tiers }
    }

    pub fn score(&self, fly: &FlyPattern, conditions: &FishingConditions) -> ScoredFly {
        let mut total = 0.0;
        let mut reasons = Vec::new();
        let mut breakdown = Vec::with_capacity(self.tiers.len());
        for tier in &self.tiers {
            let result = tier(fly, conditions);
            total += result.delta;
            reasons.extend(result.reasons.iter().cloned());
            breakdown.push(result);
        }
        ScoredFly {
            fly: fly.clone(),
            score: total.max(SCORE_FLOOR),
            reasons,
            breakdown,
        }
    }
}

/// Score one fly with the standard pipeline. Exposed for testing and tuning.
pub fn score_fly(fly: &FlyPattern, conditions: &FishingConditions) -> ScoredFly {
    ScoringPipeline::standard().score(fly, conditions)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::catalog::FlyType;
    use crate::conditions::normalize::complete;
    use crate::conditions::{ConditionInput, Location, Season, TimeOfDay, WeatherCondition};

    use super::*;

    fn conditions_at(
        location: Location,
        hour: u32,
        month: u32,
        weather: WeatherCondition,
    ) -> FishingConditions {
        let now = Utc.with_ymd_and_hms(2024, month, 15, hour, 0, 0).unwrap();
        let input = ConditionInput {
            weather: Some(weather),
            ..ConditionInput::default()
        };
        complete(&input, location, now)
    }

    #[test]
    fn score_is_deterministic_for_fixed_inputs() {
        let fly = FlyPattern::new("pt", "Pheasant Tail Nymph", FlyType::Nymph, 16, "brown");
        let conditions = conditions_at(
            Location::new("Madison River", 44.9, -111.5),
            15,
            6,
            WeatherCondition::Cloudy,
        );
        let a = score_fly(&fly, &conditions);
        let b = score_fly(&fly, &conditions);
        assert_eq!(a.score, b.score);
        assert_eq!(a.reasons, b.reasons);
    }

    #[test]
    fn score_never_drops_below_floor() {
        // A dry fly at night in fast cold water collects penalties everywhere.
        let fly = FlyPattern::new("bad", "Giant Attractor Dry", FlyType::Dry, 6, "white");
        let mut conditions = conditions_at(
            Location::new("Madison River", 44.9, -111.5),
            6,
            1,
            WeatherCondition::Stormy,
        );
        conditions.time_of_day = TimeOfDay::Night;
        conditions.water_temperature_f = Some(38.0);
        let scored = score_fly(&fly, &conditions);
        assert!(scored.score >= SCORE_FLOOR);
    }

    #[test]
    fn declared_weather_match_scores_strictly_higher_on_weather_tier() {
        let rated = FlyPattern::new("a", "Test Dun", FlyType::Dry, 16, "gray")
            .with_weather(&[WeatherCondition::Cloudy]);
        let unrated = FlyPattern::new("b", "Test Dun", FlyType::Dry, 16, "gray");
        let conditions = conditions_at(
            Location::new("Madison River", 44.9, -111.5),
            15,
            6,
            WeatherCondition::Cloudy,
        );
        let rated_tier = score_fly(&rated, &conditions)
            .breakdown
            .into_iter()
            .find(|t| t.tier == "weather")
            .unwrap();
        let unrated_tier = score_fly(&unrated, &conditions)
            .breakdown
            .into_iter()
            .find(|t| t.tier == "weather")
            .unwrap();
        assert!(rated_tier.delta > unrated_tier.delta);
    }

    #[test]
    fn breakdown_serializes_for_api_output() {
        let fly = FlyPattern::new("pt", "Pheasant Tail Nymph", FlyType::Nymph, 16, "brown");
        let conditions = conditions_at(
            Location::new("Madison River", 44.9, -111.5),
            15,
            6,
            WeatherCondition::Cloudy,
        );
        let scored = score_fly(&fly, &conditions);
        let json = serde_json::to_value(&scored).unwrap();
        let breakdown = json["breakdown"].as_array().unwrap();
        assert_eq!(breakdown.len(), 8);
        assert_eq!(breakdown[0]["tier"], "location");
    }

    #[test]
    fn custom_pipeline_order_is_respected() {
        let fly = FlyPattern::new("pt", "Pheasant Tail Nymph", FlyType::Nymph, 16, "brown");
        let conditions = conditions_at(
            Location::new("Silver Creek", 43.3, -114.1),
            15,
            6,
            WeatherCondition::Sunny,
        );
        let single = ScoringPipeline::with_tiers(vec![super::tiers::weather_tier]);
        let scored = single.score(&fly, &conditions);
        assert_eq!(scored.breakdown.len(), 1);
        assert_eq!(scored.breakdown[0].tier, "weather");
    }

    #[test]
    fn seasonal_group_value_matches_subband() {
        let generic = FlyPattern::new("a", "Soft Hackle", FlyType::Wet, 14, "orange")
            .with_seasons(&[Season::Spring]);
        let conditions = conditions_at(
            Location::new("Madison River", 44.9, -111.5),
            15,
            4,
            WeatherCondition::Cloudy,
        );
        assert_eq!(conditions.time_of_year, Season::EarlySpring);
        let scored = score_fly(&generic, &conditions);
        assert!(scored
            .reasons
            .iter()
            .any(|r| r.contains("Rated for this season")));
    }
}
