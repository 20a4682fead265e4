pub mod builtin;
pub mod filter;

use serde::{Deserialize, Serialize};

use crate::conditions::{Season, TimeOfDay, WaterClarity, WaterFlow, WaterLevel, WeatherCondition};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FlyType {
    Dry,
    Wet,
    Nymph,
    Streamer,
    Terrestrial,
    Emerger,
}

impl FlyType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Dry => "dry",
            Self::Wet => "wet",
            Self::Nymph => "nymph",
            Self::Streamer => "streamer",
            Self::Terrestrial => "terrestrial",
            Self::Emerger => "emerger",
        }
    }
}

/// Coarse geographic region used for the regional-effectiveness bonus.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    PacificNorthwest,
    MountainWest,
    Southwest,
    Midwest,
    Northeast,
    Southeast,
}

impl Region {
    /// Rough continental-US bucketing. Anything outside the buckets falls
    /// into the nearest one; precision is not the point here.
    pub fn from_coords(latitude: f64, longitude: f64) -> Self {
        if longitude < -115.0 {
            if latitude >= 42.0 {
                Self::PacificNorthwest
            } else {
                Self::Southwest
            }
        } else if longitude < -100.0 {
            if latitude >= 37.0 {
                Self::MountainWest
            } else {
                Self::Southwest
            }
        } else if longitude < -85.0 {
            if latitude >= 36.5 {
                Self::Midwest
            } else {
                Self::Southeast
            }
        } else if latitude >= 39.0 {
            Self::Northeast
        } else {
            Self::Southeast
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::PacificNorthwest => "Pacific Northwest",
            Self::MountainWest => "Mountain West",
            Self::Southwest => "Southwest",
            Self::Midwest => "Midwest",
            Self::Northeast => "Northeast",
            Self::Southeast => "Southeast",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WaterTempRange {
    pub min_f: f64,
    pub max_f: f64,
}

/// The conditions a fly is declared to favor. Empty lists mean "not rated",
/// never "matches everything".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BestConditions {
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
    #[serde(default)]
    pub water_clarity: Vec<WaterClarity>,
    #[serde(default)]
    pub water_level: Vec<WaterLevel>,
    #[serde(default)]
    pub water_flow: Vec<WaterFlow>,
    #[serde(default)]
    pub time_of_day: Vec<TimeOfDay>,
    #[serde(default)]
    pub time_of_year: Vec<Season>,
    pub water_temp_range: Option<WaterTempRange>,
    #[serde(default)]
    pub regions: Vec<Region>,
    #[serde(default)]
    pub hatch_matches: Vec<String>,
}

/// One catalog entry. Catalog instances are shared, read-only inputs: the
/// filter returns normalized copies and nothing in the engine writes through.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlyPattern {
    pub id: String,
    pub name: String,
    pub fly_type: FlyType,
    pub size: u8,
    pub color: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub best_conditions: BestConditions,
    #[serde(default)]
    pub success_rate: f64,
    #[serde(default)]
    pub times_used: u32,
    #[serde(default = "default_official")]
    pub official: bool,
}

fn default_official() -> bool {
    true
}

impl FlyPattern {
    pub fn new(id: &str, name: &str, fly_type: FlyType, size: u8, color: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            fly_type,
            size,
            color: color.to_string(),
            description: String::new(),
            best_conditions: BestConditions::default(),
            success_rate: 0.0,
            times_used: 0,
            official: true,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_weather(mut self, weather: &[WeatherCondition]) -> Self {
        self.best_conditions.weather = weather.to_vec();
        self
    }

    pub fn with_clarity(mut self, clarity: &[WaterClarity]) -> Self {
        self.best_conditions.water_clarity = clarity.to_vec();
        self
    }

    pub fn with_level(mut self, level: &[WaterLevel]) -> Self {
        self.best_conditions.water_level = level.to_vec();
        self
    }

    pub fn with_flow(mut self, flow: &[WaterFlow]) -> Self {
        self.best_conditions.water_flow = flow.to_vec();
        self
    }

    pub fn with_time_of_day(mut self, times: &[TimeOfDay]) -> Self {
        self.best_conditions.time_of_day = times.to_vec();
        self
    }

    pub fn with_seasons(mut self, seasons: &[Season]) -> Self {
        self.best_conditions.time_of_year = seasons.to_vec();
        self
    }

    pub fn with_temp_range(mut self, min_f: f64, max_f: f64) -> Self {
        self.best_conditions.water_temp_range = Some(WaterTempRange { min_f, max_f });
        self
    }

    pub fn with_regions(mut self, regions: &[Region]) -> Self {
        self.best_conditions.regions = regions.to_vec();
        self
    }

    pub fn with_hatches(mut self, insects: &[&str]) -> Self {
        self.best_conditions.hatch_matches = insects.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_track_record(mut self, success_rate: f64, times_used: u32) -> Self {
        self.success_rate = success_rate;
        self.times_used = times_used;
        self
    }

    pub fn unofficial(mut self) -> Self {
        self.official = false;
        self
    }

    /// Case-insensitive keyword check against the fly name.
    pub fn name_has(&self, keyword: &str) -> bool {
        self.name.to_lowercase().contains(&keyword.to_lowercase())
    }

    pub fn color_has(&self, keyword: &str) -> bool {
        self.color.to_lowercase().contains(&keyword.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_bucketing() {
        // Deschutes, OR
        assert_eq!(Region::from_coords(44.6, -121.2), Region::PacificNorthwest);
        // Madison, MT
        assert_eq!(Region::from_coords(44.9, -111.5), Region::MountainWest);
        // San Juan, NM
        assert_eq!(Region::from_coords(36.8, -107.7), Region::Southwest);
        // Driftless, WI
        assert_eq!(Region::from_coords(43.4, -90.8), Region::Midwest);
        // Battenkill, VT
        assert_eq!(Region::from_coords(43.1, -73.2), Region::Northeast);
        // Chattahoochee, GA
        assert_eq!(Region::from_coords(34.0, -84.3), Region::Southeast);
    }

    #[test]
    fn name_keyword_check_is_case_insensitive() {
        let fly = FlyPattern::new("x", "Morrish Mouse", FlyType::Streamer, 4, "black");
        assert!(fly.name_has("mouse"));
        assert!(!fly.name_has("hopper"));
    }
}
