//! Diversity-constrained selector.
//!
//! Group-then-fill, not a pure score sort: pass 1 seats the best-scoring
//! candidate of every fly type present in the pool (type coverage guarantee),
//! pass 2 fills remaining slots in descending score order with a confidence
//! bonus for unseen type/size/color. Final ordering therefore differs from a
//! raw sort whenever a weaker type's champion outscores a stronger type's
//! runner-up slot.

use std::collections::BTreeSet;

use crate::scoring::calibrate::{CalibratedFly, CONFIDENCE_MAX};
use crate::types::Suggestion;

const UNSEEN_TYPE_BONUS: u8 = 20;
const UNSEEN_SIZE_BONUS: u8 = 10;
const UNSEEN_COLOR_BONUS: u8 = 5;

pub fn select_diverse(candidates: Vec<CalibratedFly>, count: usize) -> Vec<Suggestion> {
    let mut pool = candidates;
    // Stable total order: score descending, id as the deterministic tiebreak.
    pool.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.fly.id.cmp(&b.fly.id))
    });

    let mut out: Vec<Suggestion> = Vec::new();
    let mut taken_ids = BTreeSet::new();
    let mut seen_types = BTreeSet::new();
    let mut seen_sizes = BTreeSet::new();
    let mut seen_colors = BTreeSet::new();

    // Pass 1: one champion per type.
    for candidate in &pool {
        if out.len() >= count {
            break;
        }
        let type_key = candidate.fly.fly_type.label();
        if seen_types.contains(type_key) {
            continue;
        }
        seen_types.insert(type_key);
        seen_sizes.insert(candidate.fly.size);
        seen_colors.insert(candidate.fly.color.clone());
        taken_ids.insert(candidate.fly.id.clone());
        out.push(suggestion_from(candidate, candidate.confidence));
    }

    // Pass 2: fill by score with diversity-bonused confidence.
    for candidate in &pool {
        if out.len() >= count {
            break;
        }
        if taken_ids.contains(&candidate.fly.id) {
            continue;
        }
        let mut bonus = 0u8;
        if !seen_types.contains(candidate.fly.fly_type.label()) {
            bonus += UNSEEN_TYPE_BONUS;
        }
        if !seen_sizes.contains(&candidate.fly.size) {
            bonus += UNSEEN_SIZE_BONUS;
        }
        if !seen_colors.contains(&candidate.fly.color) {
            bonus += UNSEEN_COLOR_BONUS;
        }
        seen_types.insert(candidate.fly.fly_type.label());
        seen_sizes.insert(candidate.fly.size);
        seen_colors.insert(candidate.fly.color.clone());
        taken_ids.insert(candidate.fly.id.clone());
        let confidence = candidate.confidence.saturating_add(bonus).min(CONFIDENCE_MAX);
        out.push(suggestion_from(candidate, confidence));
    }

    out
}

fn suggestion_from(candidate: &CalibratedFly, confidence: u8) -> Suggestion {
    Suggestion {
        fly: candidate.fly.clone(),
        confidence,
        reason: candidate.reasons.join("; "),
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::{FlyPattern, FlyType};

    use super::*;

    fn candidate(id: &str, fly_type: FlyType, size: u8, color: &str, score: f64) -> CalibratedFly {
        CalibratedFly {
            fly: FlyPattern::new(id, id, fly_type, size, color),
            score,
            confidence: (score / 2.0) as u8,
            reasons: vec![format!("scored {score}")],
        }
    }

    #[test]
    fn every_type_present_gets_a_seat_when_count_allows() {
        let pool = vec![
            candidate("n1", FlyType::Nymph, 16, "brown", 90.0),
            candidate("n2", FlyType::Nymph, 18, "olive", 85.0),
            candidate("n3", FlyType::Nymph, 20, "black", 80.0),
            candidate("d1", FlyType::Dry, 14, "gray", 40.0),
            candidate("s1", FlyType::Streamer, 8, "olive", 30.0),
        ];
        let picks = select_diverse(pool, 4);
        let types: Vec<_> = picks.iter().map(|s| s.fly.fly_type).collect();
        assert!(types.contains(&FlyType::Dry));
        assert!(types.contains(&FlyType::Streamer));
        // Champions come first, by score.
        assert_eq!(picks[0].fly.id, "n1");
    }

    #[test]
    fn group_then_fill_beats_pure_score_order() {
        // d1 outscores s1, but s1 is its type's champion and seats in pass 1
        // ahead of the second nymph.
        let pool = vec![
            candidate("n1", FlyType::Nymph, 16, "brown", 90.0),
            candidate("n2", FlyType::Nymph, 18, "olive", 70.0),
            candidate("s1", FlyType::Streamer, 8, "olive", 30.0),
        ];
        let picks = select_diverse(pool, 2);
        assert_eq!(picks.len(), 2);
        assert_eq!(picks[0].fly.id, "n1");
        assert_eq!(picks[1].fly.id, "s1");
    }

    #[test]
    fn no_duplicate_ids_and_length_capped() {
        let pool = vec![
            candidate("a", FlyType::Dry, 14, "gray", 50.0),
            candidate("b", FlyType::Dry, 16, "tan", 45.0),
            candidate("c", FlyType::Nymph, 18, "olive", 44.0),
        ];
        let picks = select_diverse(pool.clone(), 8);
        assert_eq!(picks.len(), 3);
        let mut ids: Vec<_> = picks.iter().map(|s| s.fly.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn pass_two_diversity_bonus_lifts_confidence() {
        let pool = vec![
            candidate("a", FlyType::Dry, 14, "gray", 60.0),
            // Same type, new size and color: +10 +5 in pass 2.
            candidate("b", FlyType::Dry, 20, "olive", 50.0),
        ];
        let picks = select_diverse(pool, 2);
        assert_eq!(picks[1].fly.id, "b");
        assert_eq!(picks[1].confidence, 25 + 15);
    }

    #[test]
    fn confidence_recap_at_upper_bound() {
        let mut rich = candidate("a", FlyType::Dry, 14, "gray", 180.0);
        rich.confidence = 90;
        let mut second = candidate("b", FlyType::Nymph, 20, "olive", 170.0);
        second.confidence = 94;
        let picks = select_diverse(vec![rich, second], 2);
        for pick in picks {
            assert!(pick.confidence <= CONFIDENCE_MAX);
        }
    }

    #[test]
    fn deterministic_tiebreak_on_equal_scores() {
        let pool = vec![
            candidate("b", FlyType::Dry, 14, "gray", 50.0),
            candidate("a", FlyType::Dry, 16, "tan", 50.0),
        ];
        let picks = select_diverse(pool, 1);
        assert_eq!(picks[0].fly.id, "a");
    }
}
