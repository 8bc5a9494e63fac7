//! Weight Planner
//!
//! Turns a snapshot of every word's tally into one sampling weight per word.
//!
//! Pipeline:
//! - Base weight: Wilson lower bound on the failure rate, floored at [`MIN_WEIGHT`]
//! - Ease-in ramp: during the first `ease_in_turns` attempts the weight is
//!   raised to at least `1 - attempts / ease_in_turns` (never lowered)
//! - Fairness quota: when fewer than `in_flight_cards` words are in progress,
//!   that many free slots are filled by new cards picked uniformly at random
//!   and forced to weight 1.0
//!
//! Output order always matches input order; callers zip weights back onto
//! words positionally.

use rand::seq::index;
use rand::Rng;
use rayon::prelude::*;
use serde::Serialize;

use crate::types::{PlannerConfig, WeightedWord, WordTally, MAX_WEIGHT, MIN_WEIGHT};
use crate::wilson::wilson_lower_bound;

/// Counts that drive the fairness quota
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    /// Words with no attempts
    pub new_cards: usize,
    /// Words with fewer than `ease_in_turns` correct answers (new cards included)
    pub in_progress: usize,
    /// New cards promoted to full weight this round
    pub pick_extra: usize,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WeightPlanner {
    config: PlannerConfig,
}

impl WeightPlanner {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> PlannerConfig {
        self.config
    }

    /// `max(MIN_WEIGHT, wilson_lower_bound(up, down))`
    pub fn base_weight(tally: &WordTally) -> f64 {
        wilson_lower_bound(tally.up, tally.down).max(MIN_WEIGHT)
    }

    /// Linear floor from 1.0 at zero attempts down to 0.0 at `ease_in_turns`
    pub fn ramp_floor(&self, attempts: u64) -> f64 {
        let turns = self.config.ease_in_turns;
        if attempts >= turns {
            return 0.0;
        }
        1.0 - attempts as f64 / turns as f64
    }

    /// Base weight with the ease-in ramp applied
    pub fn eased_weight(&self, tally: &WordTally) -> f64 {
        let base = Self::base_weight(tally);
        let attempts = tally.attempts();
        if attempts < self.config.ease_in_turns {
            base.max(self.ramp_floor(attempts))
        } else {
            base
        }
    }

    /// Deterministic part of the plan (everything but the quota).
    pub fn eased_weights(&self, tallies: &[WordTally]) -> Vec<f64> {
        tallies
            .par_iter()
            .map(|tally| self.eased_weight(tally))
            .collect()
    }

    pub fn summarize(&self, tallies: &[WordTally]) -> PlanSummary {
        let new_cards = tallies.iter().filter(|t| t.is_new()).count();
        let in_progress = tallies
            .iter()
            .filter(|t| t.up < self.config.ease_in_turns)
            .count();
        let pick_extra = self
            .config
            .in_flight_cards
            .saturating_sub(in_progress)
            .min(new_cards);

        PlanSummary {
            new_cards,
            in_progress,
            pick_extra,
        }
    }

    /// Compute the final weight of every word, in input order.
    ///
    /// `rng` only drives the choice of which new cards fill the quota.
    pub fn plan<R: Rng + ?Sized>(&self, tallies: &[WordTally], rng: &mut R) -> Vec<f64> {
        let mut weights = self.eased_weights(tallies);
        let summary = self.summarize(tallies);

        if summary.pick_extra > 0 {
            let new_cards: Vec<usize> = tallies
                .iter()
                .enumerate()
                .filter(|(_, t)| t.is_new())
                .map(|(idx, _)| idx)
                .collect();

            assert!(
                summary.pick_extra <= new_cards.len(),
                "quota of {} exceeds {} new cards",
                summary.pick_extra,
                new_cards.len()
            );

            for pick in index::sample(rng, new_cards.len(), summary.pick_extra).iter() {
                weights[new_cards[pick]] = MAX_WEIGHT;
            }
        }

        tracing::debug!(
            words = tallies.len(),
            new_cards = summary.new_cards,
            in_progress = summary.in_progress,
            pick_extra = summary.pick_extra,
            "planned quiz weights"
        );

        weights
    }

    /// [`plan`](Self::plan) zipped back onto the words
    pub fn plan_weighted<R: Rng + ?Sized>(
        &self,
        tallies: &[WordTally],
        rng: &mut R,
    ) -> Vec<WeightedWord> {
        let weights = self.plan(tallies, rng);
        tallies
            .iter()
            .zip(weights)
            .map(|(tally, weight)| WeightedWord {
                word: tally.word.clone(),
                weight,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn test_empty_input() {
        let planner = WeightPlanner::default();
        assert!(planner.plan(&[], &mut rng()).is_empty());
        assert_eq!(planner.summarize(&[]), PlanSummary::default());
    }

    #[test]
    fn test_three_word_scenario() {
        let tallies = vec![
            WordTally::new("a", 0, 0),
            WordTally::new("b", 4, 0),
            WordTally::new("c", 1, 9),
        ];
        let planner = WeightPlanner::default();

        let summary = planner.summarize(&tallies);
        assert_eq!(summary.new_cards, 1);
        // a (up=0) and c (up=1) are in progress, b reached the threshold
        assert_eq!(summary.in_progress, 2);
        assert_eq!(summary.pick_extra, 1);

        let weights = planner.plan(&tallies, &mut rng());
        assert_eq!(weights, vec![1.0, 0.01, 0.7175556986096242]);
    }

    #[test]
    fn test_ramp_floor_values() {
        let planner = WeightPlanner::default();
        assert_eq!(planner.ramp_floor(0), 1.0);
        assert_eq!(planner.ramp_floor(1), 0.75);
        assert_eq!(planner.ramp_floor(2), 0.5);
        assert_eq!(planner.ramp_floor(3), 0.25);
        assert_eq!(planner.ramp_floor(4), 0.0);
        assert_eq!(planner.ramp_floor(40), 0.0);
    }

    #[test]
    fn test_ramp_ignores_outcome_polarity() {
        let planner = WeightPlanner::default();
        let passed = planner.eased_weight(&WordTally::new("x", 2, 0));
        let failed = planner.eased_weight(&WordTally::new("y", 0, 2));
        assert_eq!(passed, 0.5);
        // Two straight failures: Wilson bound 0.549.. beats the 0.5 floor
        assert_eq!(failed, wilson_lower_bound(0, 2));
        assert!(failed > passed);

        let mixed = planner.eased_weight(&WordTally::new("z", 1, 1));
        assert_eq!(mixed, 0.5);
    }

    #[test]
    fn test_threshold_word_uses_base_weight() {
        let planner = WeightPlanner::default();
        let tally = WordTally::new("w", 4, 0);
        assert_eq!(planner.eased_weight(&tally), wilson_lower_bound(4, 0).max(0.01));
        assert_eq!(planner.eased_weight(&tally), 0.01);
    }

    #[test]
    fn test_no_quota_when_in_flight_is_full() {
        let planner = WeightPlanner::new(PlannerConfig::new(2, 4));
        let tallies = vec![
            WordTally::new("a", 1, 0),
            WordTally::new("b", 2, 1),
            WordTally::new("c", 0, 0),
            WordTally::new("d", 0, 0),
        ];
        let summary = planner.summarize(&tallies);
        assert_eq!(summary.in_progress, 4);
        assert_eq!(summary.pick_extra, 0);
    }

    #[test]
    fn test_quota_capped_by_new_cards() {
        let planner = WeightPlanner::new(PlannerConfig::new(10, 1));
        let tallies = vec![
            WordTally::new("a", 0, 0),
            WordTally::new("b", 5, 0),
            WordTally::new("c", 0, 0),
        ];
        // in_progress = 2 (the new cards), 10 - 2 = 8 slots, only 2 new cards
        let summary = planner.summarize(&tallies);
        assert_eq!(summary.pick_extra, 2);

        let weights = planner.plan(&tallies, &mut rng());
        assert_eq!(weights[0], 1.0);
        assert_eq!(weights[2], 1.0);
        assert_eq!(weights[1], 0.01);
    }

    #[test]
    fn test_new_cards_count_as_in_progress() {
        let mut tallies: Vec<WordTally> = (0..10)
            .map(|i| WordTally::new(format!("seen{}", i), 5, 5))
            .collect();
        tallies.extend((0..10).map(|i| WordTally::unseen(format!("new{}", i))));

        let summary = WeightPlanner::new(PlannerConfig::new(3, 1)).summarize(&tallies);
        assert_eq!(summary.new_cards, 10);
        assert_eq!(summary.in_progress, 10);
        assert_eq!(summary.pick_extra, 0);

        let planner = WeightPlanner::new(PlannerConfig::new(13, 1));
        assert_eq!(planner.summarize(&tallies).pick_extra, 3);

        let weights = planner.plan(&tallies, &mut rng());
        assert!(weights[10..].iter().all(|&w| w == 1.0));
        assert!(weights[..10].iter().all(|&w| w < 1.0));
    }

    #[test]
    fn test_plan_is_order_preserving() {
        let tallies: Vec<WordTally> = (0..200)
            .map(|i| WordTally::new(format!("w{}", i), i % 7, i % 5))
            .collect();
        let planner = WeightPlanner::default();
        let weights = planner.plan(&tallies, &mut rng());

        for (tally, weight) in tallies.iter().zip(&weights) {
            if !tally.is_new() {
                assert_eq!(*weight, planner.eased_weight(tally), "word {}", tally.word);
            }
        }
    }

    #[test]
    fn test_plan_weighted_zips_words() {
        let tallies = vec![WordTally::new("x", 0, 3), WordTally::new("y", 9, 0)];
        let planned = WeightPlanner::default().plan_weighted(&tallies, &mut rng());
        assert_eq!(planned.len(), 2);
        assert_eq!(planned[0].word, "x");
        assert_eq!(planned[1].word, "y");
        assert_eq!(planned[0].weight, wilson_lower_bound(0, 3).max(0.25));
        assert_eq!(planned[1].weight, 0.01);
    }
}
