use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Mean length of a lunation in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530588853;

/// Reference new moon: 2000-01-06 18:14 UTC.
const REFERENCE_NEW_MOON_UNIX: i64 = 947_182_440;

const SECONDS_PER_DAY: f64 = 86_400.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MoonPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    pub fn label(self) -> &'static str {
        match self {
            Self::New => "new moon",
            Self::WaxingCrescent => "waxing crescent",
            Self::FirstQuarter => "first quarter",
            Self::WaxingGibbous => "waxing gibbous",
            Self::Full => "full moon",
            Self::WaningGibbous => "waning gibbous",
            Self::LastQuarter => "last quarter",
            Self::WaningCrescent => "waning crescent",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum FeedingActivity {
    Low,
    Moderate,
    High,
    VeryHigh,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum FishingQuality {
    Fair,
    Good,
    Excellent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoonPhaseData {
    pub phase: MoonPhase,
    pub age_days: f64,
    pub illumination_pct: f64,
    pub feeding_activity: FeedingActivity,
    pub fishing_quality: FishingQuality,
}

/// Days since the reference new moon, wrapped into one synodic month.
pub fn moon_age_days(date: DateTime<Utc>) -> f64 {
    let elapsed = date.timestamp() as f64 - REFERENCE_NEW_MOON_UNIX as f64;
    (elapsed / SECONDS_PER_DAY).rem_euclid(SYNODIC_MONTH_DAYS)
}

/// Phase from eight contiguous age bands. Band edges sit half a band before
/// each principal phase so that new/full/quarters are centered on their band.
pub fn phase_for_age(age_days: f64) -> MoonPhase {
    let band = SYNODIC_MONTH_DAYS / 8.0;
    let half = band / 2.0;
    match age_days {
        a if a < half => MoonPhase::New,
        a if a < half + band => MoonPhase::WaxingCrescent,
        a if a < half + 2.0 * band => MoonPhase::FirstQuarter,
        a if a < half + 3.0 * band => MoonPhase::WaxingGibbous,
        a if a < half + 4.0 * band => MoonPhase::Full,
        a if a < half + 5.0 * band => MoonPhase::WaningGibbous,
        a if a < half + 6.0 * band => MoonPhase::LastQuarter,
        a if a < half + 7.0 * band => MoonPhase::WaningCrescent,
        _ => MoonPhase::New,
    }
}

/// Feeding activity by lunar age. New/full windows dominate, quarter-adjacent
/// stretches are elevated, the rest of the waxing half is moderate.
pub fn feeding_activity_for_age(age_days: f64) -> FeedingActivity {
    if (0.0..=2.0).contains(&age_days) || (14.0..=16.0).contains(&age_days) {
        FeedingActivity::VeryHigh
    } else if (6.0..=9.0).contains(&age_days) || (21.0..=24.0).contains(&age_days) {
        FeedingActivity::High
    } else if age_days > 2.0 && age_days < 14.0 {
        FeedingActivity::Moderate
    } else {
        FeedingActivity::Low
    }
}

pub fn fishing_quality_for_phase(phase: MoonPhase) -> FishingQuality {
    match phase {
        MoonPhase::New | MoonPhase::Full => FishingQuality::Excellent,
        MoonPhase::FirstQuarter
        | MoonPhase::LastQuarter
        | MoonPhase::WaxingCrescent
        | MoonPhase::WaxingGibbous => FishingQuality::Good,
        MoonPhase::WaningGibbous | MoonPhase::WaningCrescent => FishingQuality::Fair,
    }
}

/// Full lunar snapshot for a given instant.
pub fn moon_phase(date: DateTime<Utc>) -> MoonPhaseData {
    let age_days = moon_age_days(date);
    let phase = phase_for_age(age_days);
    let illumination_pct =
        (1.0 - (std::f64::consts::TAU * age_days / SYNODIC_MONTH_DAYS).cos()) / 2.0 * 100.0;
    MoonPhaseData {
        phase,
        age_days,
        illumination_pct,
        feeding_activity: feeding_activity_for_age(age_days),
        fishing_quality: fishing_quality_for_phase(phase),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn reference_instant_is_a_new_moon() {
        let date = Utc.timestamp_opt(REFERENCE_NEW_MOON_UNIX, 0).unwrap();
        let data = moon_phase(date);
        assert_eq!(data.phase, MoonPhase::New);
        assert!(data.age_days < 0.001);
        assert!(data.illumination_pct < 0.1);
        assert_eq!(data.feeding_activity, FeedingActivity::VeryHigh);
        assert_eq!(data.fishing_quality, FishingQuality::Excellent);
    }

    #[test]
    fn half_cycle_is_full_and_fully_lit() {
        let date = Utc
            .timestamp_opt(
                REFERENCE_NEW_MOON_UNIX + (SYNODIC_MONTH_DAYS / 2.0 * 86_400.0) as i64,
                0,
            )
            .unwrap();
        let data = moon_phase(date);
        assert_eq!(data.phase, MoonPhase::Full);
        assert_relative_eq!(data.illumination_pct, 100.0, epsilon = 0.1);
    }

    #[test]
    fn age_wraps_across_cycles() {
        let one_cycle_later = Utc
            .timestamp_opt(
                REFERENCE_NEW_MOON_UNIX + (SYNODIC_MONTH_DAYS * 86_400.0).round() as i64,
                0,
            )
            .unwrap();
        // Whole seconds can land a fraction of a second either side of the
        // wrap point, so accept an age adjacent to either end of the cycle.
        let age = moon_age_days(one_cycle_later);
        assert!(age < 0.01 || age > SYNODIC_MONTH_DAYS - 0.01);
        let before_reference = Utc.timestamp_opt(REFERENCE_NEW_MOON_UNIX - 86_400, 0).unwrap();
        let age = moon_age_days(before_reference);
        assert!(age > SYNODIC_MONTH_DAYS - 1.1 && age < SYNODIC_MONTH_DAYS);
    }

    #[test]
    fn phase_band_edges() {
        assert_eq!(phase_for_age(0.0), MoonPhase::New);
        assert_eq!(phase_for_age(3.0), MoonPhase::WaxingCrescent);
        assert_eq!(phase_for_age(7.4), MoonPhase::FirstQuarter);
        assert_eq!(phase_for_age(11.0), MoonPhase::WaxingGibbous);
        assert_eq!(phase_for_age(14.8), MoonPhase::Full);
        assert_eq!(phase_for_age(18.5), MoonPhase::WaningGibbous);
        assert_eq!(phase_for_age(22.1), MoonPhase::LastQuarter);
        assert_eq!(phase_for_age(25.9), MoonPhase::WaningCrescent);
        assert_eq!(phase_for_age(29.0), MoonPhase::New);
    }

    #[test]
    fn feeding_activity_bands() {
        assert_eq!(feeding_activity_for_age(1.0), FeedingActivity::VeryHigh);
        assert_eq!(feeding_activity_for_age(15.0), FeedingActivity::VeryHigh);
        assert_eq!(feeding_activity_for_age(7.5), FeedingActivity::High);
        assert_eq!(feeding_activity_for_age(22.0), FeedingActivity::High);
        assert_eq!(feeding_activity_for_age(4.0), FeedingActivity::Moderate);
        assert_eq!(feeding_activity_for_age(12.0), FeedingActivity::Moderate);
        assert_eq!(feeding_activity_for_age(18.0), FeedingActivity::Low);
        assert_eq!(feeding_activity_for_age(27.0), FeedingActivity::Low);
    }

    #[test]
    fn waxing_phases_rate_good_waning_rate_fair() {
        assert_eq!(
            fishing_quality_for_phase(MoonPhase::WaxingGibbous),
            FishingQuality::Good
        );
        assert_eq!(
            fishing_quality_for_phase(MoonPhase::WaningGibbous),
            FishingQuality::Fair
        );
    }
}
