use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::astro::moon::{FishingQuality, MoonPhaseData};

// Sunrise/sunset here is a deliberately simplified approximation, not solar
// ephemeris math: a 06:00/18:00 baseline, a seasonal sinusoid (amplitude 2h,
// period 365d, phase offset 80d), a latitude-linear daylight term, and a
// longitude/15 offset to place events on the UTC timeline. Downstream scoring
// consumes these windows as-is; replacing the model shifts every window.
const BASELINE_SUNRISE_HOUR: f64 = 6.0;
const BASELINE_SUNSET_HOUR: f64 = 18.0;
const SEASONAL_AMPLITUDE_HOURS: f64 = 2.0;
const SEASONAL_PHASE_OFFSET_DAYS: f64 = 80.0;
const LATITUDE_HOURS_PER_DEGREE: f64 = 0.01;

const MAJOR_HALF_WIDTH_MIN: i64 = 60;
const MINOR_HALF_WIDTH_MIN: i64 = 30;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WindowKind {
    Major,
    Minor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolunarWindow {
    pub kind: WindowKind,
    pub label: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl SolunarWindow {
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolunarPeriods {
    pub date: NaiveDate,
    pub latitude: f64,
    pub longitude: f64,
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
    pub solar_noon: DateTime<Utc>,
    pub solar_midnight: DateTime<Utc>,
    pub major_windows: Vec<SolunarWindow>,
    pub minor_windows: Vec<SolunarWindow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolunarStatus {
    pub in_window: bool,
    pub kind: Option<WindowKind>,
    pub minutes_remaining: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolunarRating {
    pub score: f64,
    pub label: &'static str,
}

/// Solunar feeding windows for one calendar day at the given coordinates.
pub fn solunar_periods(date: NaiveDate, latitude: f64, longitude: f64) -> SolunarPeriods {
    let day_of_year = date.ordinal() as f64;
    let seasonal = SEASONAL_AMPLITUDE_HOURS
        * (std::f64::consts::TAU * (day_of_year - SEASONAL_PHASE_OFFSET_DAYS) / 365.0).sin();
    let lat_term = latitude * LATITUDE_HOURS_PER_DEGREE;
    let lon_offset = longitude / 15.0;

    let sunrise_utc_hour = BASELINE_SUNRISE_HOUR - seasonal - lat_term - lon_offset;
    let sunset_utc_hour = BASELINE_SUNSET_HOUR + seasonal + lat_term - lon_offset;
    let noon_utc_hour = 12.0 - lon_offset;

    let sunrise = instant_at(date, sunrise_utc_hour);
    let sunset = instant_at(date, sunset_utc_hour);
    let solar_noon = instant_at(date, noon_utc_hour);
    let solar_midnight = solar_noon + Duration::hours(12);

    let major_windows = vec![
        window(WindowKind::Major, "sunrise", sunrise, MAJOR_HALF_WIDTH_MIN),
        window(WindowKind::Major, "sunset", sunset, MAJOR_HALF_WIDTH_MIN),
    ];
    let minor_windows = vec![
        window(WindowKind::Minor, "solar noon", solar_noon, MINOR_HALF_WIDTH_MIN),
        window(
            WindowKind::Minor,
            "solar midnight",
            solar_midnight,
            MINOR_HALF_WIDTH_MIN,
        ),
    ];

    SolunarPeriods {
        date,
        latitude,
        longitude,
        sunrise,
        sunset,
        solar_noon,
        solar_midnight,
        major_windows,
        minor_windows,
    }
}

/// Whether `now` sits inside any solunar window. Majors take precedence when
/// windows overlap at extreme latitudes.
pub fn is_in_solunar_period(periods: &SolunarPeriods, now: DateTime<Utc>) -> SolunarStatus {
    for w in periods.major_windows.iter().chain(&periods.minor_windows) {
        if w.contains(now) {
            return SolunarStatus {
                in_window: true,
                kind: Some(w.kind),
                minutes_remaining: Some((w.end - now).num_minutes()),
            };
        }
    }
    SolunarStatus {
        in_window: false,
        kind: None,
        minutes_remaining: None,
    }
}

/// Overall day rating at an instant: moon-phase quality carries 40%, window
/// containment 60% (partial credit at midday when outside every window).
pub fn solunar_rating_at(
    periods: &SolunarPeriods,
    moon: &MoonPhaseData,
    now: DateTime<Utc>,
) -> SolunarRating {
    let moon_component = match moon.fishing_quality {
        FishingQuality::Excellent => 100.0,
        FishingQuality::Good => 70.0,
        FishingQuality::Fair => 40.0,
    };
    let status = is_in_solunar_period(periods, now);
    let window_component = match status.kind {
        Some(WindowKind::Major) => 100.0,
        Some(WindowKind::Minor) => 70.0,
        None => {
            let midday =
                now > periods.solar_noon - Duration::hours(2) && now < periods.solar_noon + Duration::hours(2);
            if midday {
                50.0
            } else {
                25.0
            }
        }
    };
    let score = 0.4 * moon_component + 0.6 * window_component;
    let label = if score >= 85.0 {
        "excellent"
    } else if score >= 65.0 {
        "good"
    } else if score >= 45.0 {
        "fair"
    } else {
        "poor"
    };
    SolunarRating { score, label }
}

fn instant_at(date: NaiveDate, utc_hour: f64) -> DateTime<Utc> {
    // Hours outside [0, 24) intentionally spill into the neighboring UTC day
    // so windows stay anchored to the local solar day.
    let midnight = date.and_hms_opt(0, 0, 0).expect("midnight is always valid");
    DateTime::<Utc>::from_naive_utc_and_offset(midnight, Utc)
        + Duration::seconds((utc_hour * 3600.0) as i64)
}

fn window(kind: WindowKind, label: &str, center: DateTime<Utc>, half_width_min: i64) -> SolunarWindow {
    SolunarWindow {
        kind,
        label: label.to_string(),
        start: center - Duration::minutes(half_width_min),
        end: center + Duration::minutes(half_width_min),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use crate::astro::moon::moon_phase;

    use super::*;

    fn equinox() -> NaiveDate {
        // Day-of-year 80 zeroes the seasonal term.
        NaiveDate::from_yo_opt(2023, 80).unwrap()
    }

    #[test]
    fn equator_equinox_has_baseline_sun_times() {
        let periods = solunar_periods(equinox(), 0.0, 0.0);
        let sunrise = periods.sunrise;
        assert_eq!(sunrise.format("%H:%M").to_string(), "06:00");
        assert_eq!(periods.sunset.format("%H:%M").to_string(), "18:00");
        assert_eq!(periods.solar_noon.format("%H:%M").to_string(), "12:00");
    }

    #[test]
    fn longitude_shifts_events_west() {
        // 105W is exactly seven hours behind the solar baseline.
        let periods = solunar_periods(equinox(), 0.0, -105.0);
        assert_eq!(periods.solar_noon.format("%H:%M").to_string(), "19:00");
    }

    #[test]
    fn membership_and_minutes_remaining() {
        let periods = solunar_periods(equinox(), 0.0, 0.0);
        let date = equinox();
        let at = |h: u32, m: u32| {
            Utc.from_utc_datetime(&date.and_hms_opt(h, m, 0).unwrap())
        };

        let inside_major = is_in_solunar_period(&periods, at(6, 30));
        assert!(inside_major.in_window);
        assert_eq!(inside_major.kind, Some(WindowKind::Major));
        assert_eq!(inside_major.minutes_remaining, Some(30));

        let inside_minor = is_in_solunar_period(&periods, at(12, 15));
        assert_eq!(inside_minor.kind, Some(WindowKind::Minor));

        let outside = is_in_solunar_period(&periods, at(9, 30));
        assert!(!outside.in_window);
        assert!(outside.minutes_remaining.is_none());
    }

    #[test]
    fn rating_blends_moon_and_window() {
        let periods = solunar_periods(equinox(), 0.0, 0.0);
        let date = equinox();
        let moon = moon_phase(Utc.from_utc_datetime(&date.and_hms_opt(6, 30, 0).unwrap()));
        let in_major = solunar_rating_at(
            &periods,
            &moon,
            Utc.from_utc_datetime(&date.and_hms_opt(6, 30, 0).unwrap()),
        );
        let outside = solunar_rating_at(
            &periods,
            &moon,
            Utc.from_utc_datetime(&date.and_hms_opt(21, 0, 0).unwrap()),
        );
        assert!(in_major.score > outside.score);
        // Window component alone moves the blend by 0.6 * (100 - 25).
        assert!((in_major.score - outside.score - 45.0).abs() < 1e-9);
    }

    #[test]
    fn midday_gets_partial_credit_outside_windows() {
        let periods = solunar_periods(equinox(), 0.0, 0.0);
        let date = equinox();
        let moon = moon_phase(Utc.from_utc_datetime(&date.and_hms_opt(12, 0, 0).unwrap()));
        let midday = solunar_rating_at(
            &periods,
            &moon,
            Utc.from_utc_datetime(&date.and_hms_opt(10, 45, 0).unwrap()),
        );
        let evening = solunar_rating_at(
            &periods,
            &moon,
            Utc.from_utc_datetime(&date.and_hms_opt(21, 0, 0).unwrap()),
        );
        assert!(midday.score > evening.score);
    }
}
