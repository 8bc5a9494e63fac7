//! Common Types and Constants
//!
//! Shared data structures used across all algorithm modules.

use serde::{Deserialize, Serialize};

// ==================== Constants ====================

/// Target number of words considered "actively in progress"
pub const IN_FLIGHT_CARDS: usize = 30;

/// Number of correct answers after which the ease-in ramp stops applying
pub const EASE_IN_TURNS: u64 = 4;

/// Default quiz batch size
pub const DEFAULT_NUM_QUESTIONS: usize = 50;

/// Weight floor; every word keeps a non-zero sampling probability
pub const MIN_WEIGHT: f64 = 0.01;

/// Weight forced onto new cards picked by the fairness quota
pub const MAX_WEIGHT: f64 = 1.0;

// ==================== Tally Types ====================

/// Cumulative answer counts for one word
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordTally {
    pub word: String,
    /// Correct answers
    pub up: u64,
    /// Incorrect answers
    pub down: u64,
}

impl WordTally {
    pub fn new(word: impl Into<String>, up: u64, down: u64) -> Self {
        Self {
            word: word.into(),
            up,
            down,
        }
    }

    /// A word that has never been answered
    pub fn unseen(word: impl Into<String>) -> Self {
        Self::new(word, 0, 0)
    }

    /// Total answers recorded (up + down)
    pub fn attempts(&self) -> u64 {
        self.up.saturating_add(self.down)
    }

    /// New card: no attempts yet
    pub fn is_new(&self) -> bool {
        self.up == 0 && self.down == 0
    }
}

/// A word paired with its sampling weight
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeightedWord {
    pub word: String,
    pub weight: f64,
}

/// Which counter an answer increments
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerDirection {
    Up,
    Down,
}

impl AnswerDirection {
    pub fn from_correct(correct: bool) -> Self {
        if correct {
            AnswerDirection::Up
        } else {
            AnswerDirection::Down
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerDirection::Up => "up",
            AnswerDirection::Down => "down",
        }
    }
}

// ==================== Planner Config ====================

/// Tunables for [`crate::planner::WeightPlanner`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Target size of the in-progress set used to size the new-card quota
    pub in_flight_cards: usize,
    /// Attempts over which the ease-in ramp decays from 1.0 to 0.0
    pub ease_in_turns: u64,
}

impl PlannerConfig {
    pub fn new(in_flight_cards: usize, ease_in_turns: u64) -> Self {
        Self {
            in_flight_cards,
            ease_in_turns: ease_in_turns.max(1),
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            in_flight_cards: IN_FLIGHT_CARDS,
            ease_in_turns: EASE_IN_TURNS,
        }
    }
}
