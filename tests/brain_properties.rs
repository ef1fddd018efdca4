//! Property tests for the scoring tables and bounded memory

use arena_tactics::brain::arsenal::{DOMINANCE_MARGIN, PARITY_MARGIN};
use arena_tactics::brain::{band_for_difference, estimate_override, ArsenalComparison, Situation};
use arena_tactics::core::types::Location;
use arena_tactics::overrides::SurvivalOverride;
use arena_tactics::tactics::{CombatStance, RecentDestinations};
use arena_tactics::weapons::{DistanceBucket, CLOSE_RANGE, FAR_RANGE, MEDIUM_RANGE};
use proptest::prelude::*;

proptest! {
    #[test]
    fn band_always_in_range(diff in -200i32..200) {
        let band = band_for_difference(diff);
        prop_assert!((1..=5).contains(&band));
    }

    #[test]
    fn band_is_monotonic(a in -200i32..200, b in -200i32..200) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(band_for_difference(lo) <= band_for_difference(hi));
    }

    #[test]
    fn parity_within_margin(diff in -PARITY_MARGIN..=PARITY_MARGIN) {
        prop_assert_eq!(band_for_difference(diff), 3);
    }

    #[test]
    fn dominance_beyond_margin(excess in 1i32..100) {
        prop_assert_eq!(band_for_difference(DOMINANCE_MARGIN + excess), 5);
        prop_assert_eq!(band_for_difference(-DOMINANCE_MARGIN - excess), 1);
    }

    #[test]
    fn recent_memory_never_exceeds_capacity(
        capacity in 1usize..8,
        spots in prop::collection::vec((-3000.0f32..3000.0, -3000.0f32..3000.0), 0..40),
    ) {
        let mut recent = RecentDestinations::new();
        for (x, y) in spots.iter().copied() {
            recent.remember(Location::new(x, y, 0.0), capacity);
            prop_assert!(recent.len() <= capacity);
        }
        if let Some(&(x, y)) = spots.last() {
            prop_assert!(recent.contains(Location::new(x, y, 0.0)));
        }
    }

    #[test]
    fn critical_health_overrides_every_stance(
        health in -50i32..30,
        adversary_health in 0i32..200,
        bands in prop::array::uniform3(1u8..=5),
        distance in prop::option::of(0.0f32..4000.0),
        stale in 0.0f64..60.0,
    ) {
        let situation = Situation {
            health,
            adversary_health,
            arsenal: ArsenalComparison::from_bands(bands),
            adversary_distance: distance,
            seconds_since_contact: stale,
        };
        for stance in CombatStance::ALL {
            prop_assert_eq!(
                estimate_override(stance, &situation),
                Some(SurvivalOverride::CriticalHealth)
            );
        }
    }

    #[test]
    fn distance_buckets_follow_thresholds(distance in 0.0f32..5000.0) {
        let expected = if distance < CLOSE_RANGE {
            DistanceBucket::Close
        } else if distance < MEDIUM_RANGE {
            DistanceBucket::Medium
        } else if distance < FAR_RANGE {
            DistanceBucket::Far
        } else {
            DistanceBucket::Beyond
        };
        prop_assert_eq!(DistanceBucket::classify(distance), expected);
    }
}
