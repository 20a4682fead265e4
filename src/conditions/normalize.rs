//! Condition normalizer: derives or defaults every field the scorer needs
//! from partial input, so downstream tiers never see an unknown.

use chrono::{DateTime, Datelike, Duration, Timelike, Utc};

use crate::astro;
use crate::conditions::{
    AirTemperature, ConditionInput, FishingConditions, Location, Season, TimeOfDay, WaterClarity,
    WaterFlow, WaterLevel, WeatherCondition,
};

const DEFAULT_WIND_MPH: f64 = 5.0;
const CHOP_WIND_THRESHOLD_MPH: f64 = 10.0;

/// Six fixed local-hour bands.
pub fn time_of_day_for_hour(hour: u32) -> TimeOfDay {
    match hour {
        5..=7 => TimeOfDay::Dawn,
        8..=10 => TimeOfDay::Morning,
        11..=13 => TimeOfDay::Midday,
        14..=16 => TimeOfDay::Afternoon,
        17..=19 => TimeOfDay::Dusk,
        _ => TimeOfDay::Night,
    }
}

/// Calendar month to seasonal band. Generic spring/summer/fall are never
/// produced here; they exist only as catalog-side group values.
pub fn season_for_month(month: u32) -> Season {
    match month {
        12 | 1 | 2 => Season::Winter,
        3 | 4 => Season::EarlySpring,
        5 => Season::LateSpring,
        6 => Season::EarlySummer,
        7 => Season::Summer,
        8 => Season::LateSummer,
        9 => Season::EarlyFall,
        10 => Season::Fall,
        _ => Season::LateFall,
    }
}

/// Heuristic water estimate used when no live gauge reading exists.
/// Layered: seasonal baseline, then weather, then wind chop.
pub fn estimate_water(
    weather: WeatherCondition,
    wind_speed_mph: f64,
    season: Season,
    time_of_day: TimeOfDay,
) -> (WaterClarity, WaterLevel, WaterFlow) {
    let mut clarity = WaterClarity::Clear;
    let mut level = WaterLevel::Moderate;
    let mut flow = WaterFlow::Moderate;

    if season == Season::Winter {
        level = WaterLevel::Low;
        flow = WaterFlow::Slow;
    } else if season.is_spring() {
        // Runoff.
        clarity = WaterClarity::Murky;
        level = WaterLevel::High;
        flow = WaterFlow::Fast;
    }

    match weather {
        WeatherCondition::Rainy | WeatherCondition::Stormy => {
            clarity = WaterClarity::Murky;
            level = WaterLevel::High;
            flow = WaterFlow::Fast;
        }
        WeatherCondition::Sunny if time_of_day == TimeOfDay::Morning => {
            clarity = WaterClarity::Clear;
            flow = WaterFlow::Moderate;
        }
        _ => {}
    }

    if wind_speed_mph > CHOP_WIND_THRESHOLD_MPH {
        if clarity == WaterClarity::Clear {
            clarity = WaterClarity::SlightlyMurky;
        }
        flow = WaterFlow::Fast;
    }

    (clarity, level, flow)
}

/// Categorize a live gauge flow reading.
pub fn flow_for_cfs(flow_cfs: f64) -> WaterFlow {
    match flow_cfs {
        f if f < 100.0 => WaterFlow::Slow,
        f if f < 1_000.0 => WaterFlow::Moderate,
        _ => WaterFlow::Fast,
    }
}

/// Categorize a live gauge height reading.
pub fn level_for_gauge_height(height_ft: f64) -> WaterLevel {
    match height_ft {
        h if h < 2.0 => WaterLevel::Low,
        h if h < 6.0 => WaterLevel::Moderate,
        _ => WaterLevel::High,
    }
}

/// Build a complete condition snapshot from partial input. `now` is the
/// injected clock; the request date defaults to it.
pub fn complete(input: &ConditionInput, location: Location, now: DateTime<Utc>) -> FishingConditions {
    let date = input.date.unwrap_or(now);
    // Coarse local time via the same longitude/15 offset the solunar model uses.
    let local = date + Duration::seconds((location.longitude / 15.0 * 3600.0) as i64);

    let time_of_day = input
        .time_of_day
        .unwrap_or_else(|| time_of_day_for_hour(local.hour()));
    let time_of_year = input
        .time_of_year
        .unwrap_or_else(|| season_for_month(local.month()));

    let live_weather = input.live_weather.clone();
    let weather = input
        .weather
        .or_else(|| live_weather.as_ref().and_then(|w| w.condition))
        .unwrap_or(WeatherCondition::Cloudy);
    let wind_speed_mph = input
        .wind_speed_mph
        .or_else(|| live_weather.as_ref().and_then(|w| w.wind_mph))
        .unwrap_or(DEFAULT_WIND_MPH);
    let air_temperature = input
        .air_temperature
        .or_else(|| {
            live_weather
                .as_ref()
                .and_then(|w| w.temperature_f)
                .map(AirTemperature::from_fahrenheit)
        })
        .unwrap_or(AirTemperature::Mild);

    let live_water = input.live_water.clone();
    let water_temperature_f = input
        .water_temperature_f
        .or_else(|| live_water.as_ref().and_then(|w| w.temperature_f));

    let (estimated_clarity, estimated_level, estimated_flow) =
        estimate_water(weather, wind_speed_mph, time_of_year, time_of_day);
    let water_clarity = input.water_clarity.unwrap_or(estimated_clarity);
    let water_level = input.water_level.unwrap_or_else(|| {
        live_water
            .as_ref()
            .and_then(|w| w.gauge_height_ft)
            .map(level_for_gauge_height)
            .unwrap_or(estimated_level)
    });
    let water_flow = input.water_flow.unwrap_or_else(|| {
        live_water
            .as_ref()
            .and_then(|w| w.flow_cfs)
            .map(flow_for_cfs)
            .unwrap_or(estimated_flow)
    });

    let moon = astro::moon_phase(date);
    let solunar = astro::solunar_periods(date.date_naive(), location.latitude, location.longitude);

    FishingConditions {
        location,
        date,
        weather,
        wind_speed_mph,
        wind_direction: input.wind_direction.clone(),
        air_temperature,
        water_clarity,
        water_level,
        water_flow,
        water_temperature_f,
        water_depth_ft: input.water_depth_ft,
        ph: input.ph,
        dissolved_oxygen_mg_l: input.dissolved_oxygen_mg_l,
        time_of_day,
        time_of_year,
        moon: Some(moon),
        solunar: Some(solunar),
        active_hatches: input.active_hatches.clone(),
        live_weather,
        live_water,
    }
}
