pub mod normalize;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::astro::{MoonPhaseData, SolunarPeriods};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: Option<String>,
}

impl Location {
    pub fn new(name: &str, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.to_string(),
            latitude,
            longitude,
            address: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    Sunny,
    Cloudy,
    Overcast,
    Rainy,
    Stormy,
    Foggy,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum AirTemperature {
    Frigid,
    Cold,
    Cool,
    Mild,
    Warm,
    Hot,
}

impl AirTemperature {
    pub fn from_fahrenheit(temp_f: f64) -> Self {
        match temp_f {
            t if t < 32.0 => Self::Frigid,
            t if t < 45.0 => Self::Cold,
            t if t < 58.0 => Self::Cool,
            t if t < 72.0 => Self::Mild,
            t if t < 85.0 => Self::Warm,
            _ => Self::Hot,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum WaterClarity {
    Clear,
    SlightlyMurky,
    Murky,
    VeryMurky,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum WaterLevel {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum WaterFlow {
    Slow,
    Moderate,
    Fast,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Dawn,
    Morning,
    Midday,
    Afternoon,
    Dusk,
    Night,
}

/// Seasonal band. Months map onto the nine specific bands; the generic
/// `Spring`/`Summer`/`Fall` values appear only in catalog condition lists and
/// group-match their early/late sub-bands.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Winter,
    EarlySpring,
    Spring,
    LateSpring,
    EarlySummer,
    Summer,
    LateSummer,
    EarlyFall,
    Fall,
    LateFall,
}

impl Season {
    pub fn is_spring(self) -> bool {
        matches!(self, Self::EarlySpring | Self::Spring | Self::LateSpring)
    }

    pub fn is_summer(self) -> bool {
        matches!(self, Self::EarlySummer | Self::Summer | Self::LateSummer)
    }

    pub fn is_fall(self) -> bool {
        matches!(self, Self::EarlyFall | Self::Fall | Self::LateFall)
    }

    /// Group-aware match: a generic catalog value matches any sub-band of its
    /// season, and vice versa.
    pub fn matches(self, declared: Season) -> bool {
        self == declared
            || (self.is_spring() && declared.is_spring())
            || (self.is_summer() && declared.is_summer())
            || (self.is_fall() && declared.is_fall())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HatchStage {
    Nymph,
    Emerger,
    Dun,
    Spinner,
    Adult,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum HatchIntensity {
    Sparse,
    Moderate,
    Heavy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HatchActivity {
    pub insect: String,
    pub stage: HatchStage,
    pub intensity: HatchIntensity,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DataQuality {
    Live,
    Delayed,
    Estimated,
}

/// Raw reading from a weather provider, kept alongside the categorical fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature_f: Option<f64>,
    pub wind_mph: Option<f64>,
    pub condition: Option<WeatherCondition>,
    pub humidity_pct: Option<f64>,
    pub observed_at: Option<DateTime<Utc>>,
}

/// Raw reading from a water gauge station.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterSnapshot {
    pub temperature_f: Option<f64>,
    pub flow_cfs: Option<f64>,
    pub gauge_height_ft: Option<f64>,
    pub quality: DataQuality,
    pub source: String,
    pub station_id: Option<String>,
    pub observed_at: Option<DateTime<Utc>>,
}

/// Fully-normalized condition snapshot for one recommendation request.
/// Every field the scorer consumes has a concrete value; the scorer never
/// branches on "unknown". Built fresh per request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FishingConditions {
    pub location: Location,
    pub date: DateTime<Utc>,
    pub weather: WeatherCondition,
    pub wind_speed_mph: f64,
    pub wind_direction: Option<String>,
    pub air_temperature: AirTemperature,
    pub water_clarity: WaterClarity,
    pub water_level: WaterLevel,
    pub water_flow: WaterFlow,
    pub water_temperature_f: Option<f64>,
    pub water_depth_ft: Option<f64>,
    pub ph: Option<f64>,
    pub dissolved_oxygen_mg_l: Option<f64>,
    pub time_of_day: TimeOfDay,
    pub time_of_year: Season,
    pub moon: Option<MoonPhaseData>,
    pub solunar: Option<SolunarPeriods>,
    pub active_hatches: Vec<HatchActivity>,
    pub live_weather: Option<WeatherSnapshot>,
    pub live_water: Option<WaterSnapshot>,
}

/// Partial condition input as supplied by a caller. The facade requires a
/// location; everything else is derived or defaulted by the normalizer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConditionInput {
    pub location: Option<Location>,
    pub date: Option<DateTime<Utc>>,
    pub weather: Option<WeatherCondition>,
    pub wind_speed_mph: Option<f64>,
    pub wind_direction: Option<String>,
    pub air_temperature: Option<AirTemperature>,
    pub water_clarity: Option<WaterClarity>,
    pub water_level: Option<WaterLevel>,
    pub water_flow: Option<WaterFlow>,
    pub water_temperature_f: Option<f64>,
    pub water_depth_ft: Option<f64>,
    pub ph: Option<f64>,
    pub dissolved_oxygen_mg_l: Option<f64>,
    pub time_of_day: Option<TimeOfDay>,
    pub time_of_year: Option<Season>,
    #[serde(default)]
    pub active_hatches: Vec<HatchActivity>,
    pub live_weather: Option<WeatherSnapshot>,
    pub live_water: Option<WaterSnapshot>,
}
