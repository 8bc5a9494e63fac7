//! Property-Based Tests for quiz weighting
//!
//! Tests the following invariants:
//! - Wilson bound stays in [0, 1] and is 0 without data
//! - Wilson bound is non-decreasing in `down` for a fixed number of attempts
//! - Planner output is order-preserving, same length, floored at 0.01
//! - Quota size matches min(max(0, in_flight - in_progress), new_cards)
//! - Deterministic weights are bit-identical across calls
//! - Histogram counts add up to the word count

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use wordjet_algo::{
    build_report, wilson_lower_bound, PlannerConfig, WeightPlanner, WordTally, MIN_WEIGHT,
};

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_tally() -> impl Strategy<Value = (u64, u64)> {
    prop_oneof![
        Just((0u64, 0u64)),
        (0u64..6, 0u64..6),
        (0u64..500, 0u64..500),
    ]
}

fn arb_tallies() -> impl Strategy<Value = Vec<WordTally>> {
    prop::collection::vec(arb_tally(), 0..120).prop_map(|counts| {
        counts
            .into_iter()
            .enumerate()
            .map(|(i, (up, down))| WordTally::new(format!("w{:03}", i), up, down))
            .collect()
    })
}

fn arb_config() -> impl Strategy<Value = PlannerConfig> {
    (0usize..60, 1u64..8).prop_map(|(in_flight, turns)| PlannerConfig::new(in_flight, turns))
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn wilson_bound_in_unit_interval(up in 0u64..10_000, down in 0u64..10_000) {
        let bound = wilson_lower_bound(up, down);
        prop_assert!((0.0..=1.0).contains(&bound), "bound {} for ({}, {})", bound, up, down);
        if up + down == 0 {
            prop_assert_eq!(bound, 0.0);
        }
    }

    #[test]
    fn wilson_bound_monotone_in_down(n in 1u64..400) {
        let mut prev = wilson_lower_bound(n, 0);
        for down in 1..=n {
            let next = wilson_lower_bound(n - down, down);
            prop_assert!(next >= prev, "n={} down={} {} < {}", n, down, next, prev);
            prev = next;
        }
    }

    #[test]
    fn plan_preserves_shape_and_floor(
        tallies in arb_tallies(),
        config in arb_config(),
        seed in any::<u64>(),
    ) {
        let planner = WeightPlanner::new(config);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let weights = planner.plan(&tallies, &mut rng);

        prop_assert_eq!(weights.len(), tallies.len());
        for (tally, &weight) in tallies.iter().zip(&weights) {
            prop_assert!(weight >= MIN_WEIGHT && weight <= 1.0, "{} -> {}", tally.word, weight);
            if !tally.is_new() {
                prop_assert_eq!(weight, planner.eased_weight(tally));
            } else {
                // Ramp floor at zero attempts is 1.0, quota also forces 1.0
                prop_assert_eq!(weight, 1.0);
            }
        }
    }

    #[test]
    fn quota_size_matches_formula(tallies in arb_tallies(), config in arb_config()) {
        let planner = WeightPlanner::new(config);
        let summary = planner.summarize(&tallies);

        let new_cards = tallies.iter().filter(|t| t.up == 0 && t.down == 0).count();
        let in_progress = tallies.iter().filter(|t| t.up < config.ease_in_turns).count();
        let expected = config.in_flight_cards.saturating_sub(in_progress).min(new_cards);

        prop_assert_eq!(summary.new_cards, new_cards);
        prop_assert_eq!(summary.in_progress, in_progress);
        prop_assert_eq!(summary.pick_extra, expected);
    }

    #[test]
    fn threshold_words_get_base_weight(up in 4u64..50, seed in any::<u64>()) {
        let tallies = vec![WordTally::new("w", up, 0)];
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let weights = WeightPlanner::default().plan(&tallies, &mut rng);
        prop_assert_eq!(weights[0], wilson_lower_bound(up, 0).max(MIN_WEIGHT));
    }

    #[test]
    fn repeated_plans_agree_outside_quota(tallies in arb_tallies(), a in any::<u64>(), b in any::<u64>()) {
        let planner = WeightPlanner::default();
        let first = planner.plan(&tallies, &mut ChaCha8Rng::seed_from_u64(a));
        let second = planner.plan(&tallies, &mut ChaCha8Rng::seed_from_u64(b));

        for ((tally, x), y) in tallies.iter().zip(&first).zip(&second) {
            if !tally.is_new() {
                prop_assert_eq!(x.to_bits(), y.to_bits());
            }
        }
        prop_assert_eq!(planner.eased_weights(&tallies), planner.eased_weights(&tallies));
    }

    #[test]
    fn histogram_counts_sum_to_total(tallies in arb_tallies(), seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let weights = WeightPlanner::default().plan(&tallies, &mut rng);
        let report = build_report(&tallies, &weights).unwrap();

        prop_assert_eq!(report.histogram.len(), 101);
        prop_assert_eq!(report.histogram.iter().map(|b| b.count).sum::<usize>(), tallies.len());
        prop_assert_eq!(report.words.len(), tallies.len());
    }
}
