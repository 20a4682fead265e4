//! Confidence calibrator.
//!
//! Linear map from raw tier sums to a bounded percentage: `score/2` plus
//! half a point per accumulated reason (capped at ten reasons), clamped
//! into [5, 95]. Every consumer of confidence relies on this single formula.

use serde::{Deserialize, Serialize};

use crate::catalog::FlyPattern;
use crate::scoring::ScoredFly;

pub const CONFIDENCE_MIN: u8 = 5;
pub const CONFIDENCE_MAX: u8 = 95;

const REASON_BONUS_CAP: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalibratedFly {
    pub fly: FlyPattern,
    pub score: f64,
    pub confidence: u8,
    pub reasons: Vec<String>,
}

/// Map a raw tier sum plus reason count to a bounded percentage.
pub fn calibrate(score: f64, reason_count: usize) -> u8 {
    let reason_bonus = reason_count.min(REASON_BONUS_CAP) as f64 * 0.5;
    let raw = score / 2.0 + reason_bonus;
    (raw.round() as i64).clamp(i64::from(CONFIDENCE_MIN), i64::from(CONFIDENCE_MAX)) as u8
}

pub fn calibrate_all(scored: Vec<ScoredFly>) -> Vec<CalibratedFly> {
    scored
        .into_iter()
        .map(|s| {
            let confidence = calibrate(s.score, s.reasons.len());
            CalibratedFly {
                fly: s.fly,
                score: s.score,
                confidence,
                reasons: s.reasons,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_stays_inside_bounds() {
        assert_eq!(calibrate(-500.0, 0), CONFIDENCE_MIN);
        assert_eq!(calibrate(0.0, 0), CONFIDENCE_MIN);
        assert_eq!(calibrate(400.0, 30), CONFIDENCE_MAX);
    }

    #[test]
    fn linear_midrange_with_reason_bonus() {
        assert_eq!(calibrate(80.0, 0), 40);
        assert_eq!(calibrate(80.0, 4), 42);
        // Reason bonus saturates at ten reasons.
        assert_eq!(calibrate(80.0, 10), calibrate(80.0, 25));
    }

    #[test]
    fn bound_sweep_over_plausible_inputs() {
        for score in (-20..=250).map(f64::from) {
            for reasons in 0..20 {
                let c = calibrate(score, reasons);
                assert!((CONFIDENCE_MIN..=CONFIDENCE_MAX).contains(&c));
            }
        }
    }
}
