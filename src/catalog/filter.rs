//! Catalog filter: validates and defaults fly records before scoring.
//!
//! This is a pure transform. Fetched catalog records may be cached and shared
//! across concurrent requests, so defaults are filled on returned copies and
//! never written through to the input slice.

use std::collections::BTreeSet;

use tracing::debug;

use crate::catalog::FlyPattern;

const MIN_HOOK_SIZE: u8 = 2;
const MAX_HOOK_SIZE: u8 = 32;
const DEFAULT_COLOR: &str = "natural";

/// Returns normalized copies of every usable official record. Drops
/// non-official entries, records missing an id or name, and duplicate ids.
pub fn filter_catalog(patterns: &[FlyPattern]) -> Vec<FlyPattern> {
    let mut seen = BTreeSet::new();
    let mut out = Vec::with_capacity(patterns.len());

    for pattern in patterns {
        if !pattern.official {
            continue;
        }
        if pattern.id.trim().is_empty() || pattern.name.trim().is_empty() {
            debug!("dropping catalog record with missing id or name");
            continue;
        }
        if !seen.insert(pattern.id.trim().to_string()) {
            continue;
        }
        out.push(normalize_pattern(pattern));
    }
    out
}

fn normalize_pattern(pattern: &FlyPattern) -> FlyPattern {
    let mut copy = pattern.clone();
    copy.id = copy.id.trim().to_string();
    copy.name = copy.name.trim().to_string();
    copy.size = copy.size.clamp(MIN_HOOK_SIZE, MAX_HOOK_SIZE);
    copy.success_rate = copy.success_rate.clamp(0.0, 1.0);
    if copy.color.trim().is_empty() {
        copy.color = DEFAULT_COLOR.to_string();
    } else {
        copy.color = copy.color.trim().to_lowercase();
    }
    if let Some(range) = &mut copy.best_conditions.water_temp_range {
        if range.min_f > range.max_f {
            std::mem::swap(&mut range.min_f, &mut range.max_f);
        }
    }
    copy
}

#[cfg(test)]
mod tests {
    use crate::catalog::FlyType;

    use super::*;

    #[test]
    fn drops_unofficial_and_unnamed_records() {
        let patterns = vec![
            FlyPattern::new("a", "Parachute Adams", FlyType::Dry, 16, "gray"),
            FlyPattern::new("b", "Backyard Special", FlyType::Dry, 14, "red").unofficial(),
            FlyPattern::new("", "No Id", FlyType::Nymph, 18, "olive"),
            FlyPattern::new("c", "  ", FlyType::Nymph, 18, "olive"),
        ];
        let kept = filter_catalog(&patterns);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "a");
    }

    #[test]
    fn dedupes_by_id_keeping_first() {
        let patterns = vec![
            FlyPattern::new("a", "Adams", FlyType::Dry, 16, "gray"),
            FlyPattern::new("a", "Adams Variant", FlyType::Dry, 14, "gray"),
        ];
        let kept = filter_catalog(&patterns);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "Adams");
    }

    #[test]
    fn defaults_are_filled_on_a_copy() {
        let patterns = vec![
            FlyPattern::new("a", "Zebra Midge", FlyType::Nymph, 40, "").with_track_record(1.7, 3),
        ];
        let kept = filter_catalog(&patterns);
        assert_eq!(kept[0].size, MAX_HOOK_SIZE);
        assert_eq!(kept[0].color, DEFAULT_COLOR);
        assert!((kept[0].success_rate - 1.0).abs() < f64::EPSILON);
        // Source record untouched.
        assert_eq!(patterns[0].size, 40);
        assert!(patterns[0].color.is_empty());
    }
}
