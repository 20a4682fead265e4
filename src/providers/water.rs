//! USGS instantaneous-values water gauge adapter.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;

use crate::conditions::{DataQuality, WaterSnapshot};
use crate::providers::http::fetch_json;
use crate::providers::WaterGaugeProvider;

pub const DEFAULT_BASE_URL: &str = "https://waterservices.usgs.gov";

const PARAM_WATER_TEMP_C: &str = "00010";
const PARAM_DISCHARGE_CFS: &str = "00060";
const PARAM_GAUGE_HEIGHT_FT: &str = "00065";

pub struct UsgsWaterProvider {
    base_url: String,
}

impl UsgsWaterProvider {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for UsgsWaterProvider {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl WaterGaugeProvider for UsgsWaterProvider {
    async fn nearest_reading(
        &self,
        latitude: f64,
        longitude: f64,
        radius_miles: f64,
    ) -> Result<WaterSnapshot> {
        // Rough degree box; a mile is about 1/69 of a degree of latitude.
        let delta = (radius_miles / 69.0).min(1.0);
        let url = format!(
            "{}/nwis/iv/?format=json&bBox={:.4},{:.4},{:.4},{:.4}\
             &parameterCd={PARAM_DISCHARGE_CFS},{PARAM_WATER_TEMP_C},{PARAM_GAUGE_HEIGHT_FT}\
             &siteStatus=active",
            self.base_url,
            longitude - delta,
            latitude - delta,
            longitude + delta,
            latitude + delta,
        );
        let payload = fetch_json(&url).await?;
        parse_gauge_payload(&payload)
            .ok_or_else(|| anyhow!("no gauge station reported data near {latitude},{longitude}"))
    }
}

/// Fold every time series of the first reporting station into one snapshot.
pub fn parse_gauge_payload(payload: &Value) -> Option<WaterSnapshot> {
    let series = payload.get("value")?.get("timeSeries")?.as_array()?;
    if series.is_empty() {
        return None;
    }

    let mut snapshot = WaterSnapshot {
        temperature_f: None,
        flow_cfs: None,
        gauge_height_ft: None,
        quality: DataQuality::Live,
        source: "usgs".to_string(),
        station_id: None,
        observed_at: Some(Utc::now()),
    };
    let mut station: Option<String> = None;

    for entry in series {
        let site = series_site_code(entry);
        match (&station, &site) {
            (None, Some(code)) => station = Some(code.clone()),
            // Stick to the first station so mixed parameters stay coherent.
            (Some(current), Some(code)) if current != code => continue,
            _ => {}
        }
        let Some(param) = series_parameter_code(entry) else {
            continue;
        };
        let Some(reading) = series_latest_value(entry) else {
            continue;
        };
        match param.as_str() {
            PARAM_WATER_TEMP_C => snapshot.temperature_f = Some(reading * 9.0 / 5.0 + 32.0),
            PARAM_DISCHARGE_CFS => snapshot.flow_cfs = Some(reading),
            PARAM_GAUGE_HEIGHT_FT => snapshot.gauge_height_ft = Some(reading),
            _ => {}
        }
    }

    if snapshot.temperature_f.is_none()
        && snapshot.flow_cfs.is_none()
        && snapshot.gauge_height_ft.is_none()
    {
        return None;
    }
    snapshot.station_id = station;
    Some(snapshot)
}

fn series_site_code(entry: &Value) -> Option<String> {
    entry
        .get("sourceInfo")?
        .get("siteCode")?
        .as_array()?
        .first()?
        .get("value")?
        .as_str()
        .map(str::to_string)
}

fn series_parameter_code(entry: &Value) -> Option<String> {
    entry
        .get("variable")?
        .get("variableCode")?
        .as_array()?
        .first()?
        .get("value")?
        .as_str()
        .map(str::to_string)
}

fn series_latest_value(entry: &Value) -> Option<f64> {
    let raw = entry
        .get("values")?
        .as_array()?
        .first()?
        .get("value")?
        .as_array()?
        .first()?
        .get("value")?
        .as_str()?;
    let parsed = raw.trim().parse::<f64>().ok()?;
    // USGS reports missing data as large negative sentinels.
    if parsed <= -999.0 {
        return None;
    }
    Some(parsed)
}
