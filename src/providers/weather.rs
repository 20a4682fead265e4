//! Open-Meteo weather adapter.

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;

use crate::conditions::{WeatherCondition, WeatherSnapshot};
use crate::providers::http::{fetch_json, number_at};
use crate::providers::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com";

pub struct OpenMeteoProvider {
    base_url: String,
}

impl OpenMeteoProvider {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for OpenMeteoProvider {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    async fn current(&self, latitude: f64, longitude: f64) -> Result<WeatherSnapshot> {
        let url = format!(
            "{}/v1/forecast?latitude={latitude:.4}&longitude={longitude:.4}\
             &current=temperature_2m,relative_humidity_2m,wind_speed_10m,weather_code\
             &temperature_unit=fahrenheit&wind_speed_unit=mph",
            self.base_url
        );
        let payload = fetch_json(&url).await?;
        Ok(WeatherSnapshot {
            temperature_f: number_at(&payload, "current.temperature_2m"),
            wind_mph: number_at(&payload, "current.wind_speed_10m"),
            condition: number_at(&payload, "current.weather_code")
                .map(|code| condition_for_wmo_code(code as u32)),
            humidity_pct: number_at(&payload, "current.relative_humidity_2m"),
            observed_at: Some(Utc::now()),
        })
    }
}

/// WMO weather interpretation codes, coarsened to our six categories.
pub fn condition_for_wmo_code(code: u32) -> WeatherCondition {
    match code {
        0 => WeatherCondition::Sunny,
        1 | 2 => WeatherCondition::Cloudy,
        3 => WeatherCondition::Overcast,
        45 | 48 => WeatherCondition::Foggy,
        51..=67 | 80..=82 => WeatherCondition::Rainy,
        71..=77 | 85 | 86 => WeatherCondition::Overcast,
        95..=99 => WeatherCondition::Stormy,
        _ => WeatherCondition::Cloudy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wmo_code_mapping() {
        assert_eq!(condition_for_wmo_code(0), WeatherCondition::Sunny);
        assert_eq!(condition_for_wmo_code(2), WeatherCondition::Cloudy);
        assert_eq!(condition_for_wmo_code(3), WeatherCondition::Overcast);
        assert_eq!(condition_for_wmo_code(45), WeatherCondition::Foggy);
        assert_eq!(condition_for_wmo_code(61), WeatherCondition::Rainy);
        assert_eq!(condition_for_wmo_code(81), WeatherCondition::Rainy);
        assert_eq!(condition_for_wmo_code(96), WeatherCondition::Stormy);
        assert_eq!(condition_for_wmo_code(42), WeatherCondition::Cloudy);
    }
}
