//! Quiz Sampler
//!
//! Draws a quiz batch by weighted sampling with replacement. Weights are
//! relative and need not sum to 1; heavy words may appear more than once.

use rand::distributions::{Distribution, WeightedIndex};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::{WordTally, DEFAULT_NUM_QUESTIONS};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SampleError {
    #[error("{words} words but {weights} weights")]
    LengthMismatch { words: usize, weights: usize },
    #[error("weights must be finite, non-negative and not all zero")]
    InvalidWeights,
}

#[derive(Clone, Copy, Debug)]
pub struct QuizSampler {
    num_questions: usize,
}

impl Default for QuizSampler {
    fn default() -> Self {
        Self::new(DEFAULT_NUM_QUESTIONS)
    }
}

impl QuizSampler {
    pub fn new(num_questions: usize) -> Self {
        Self { num_questions }
    }

    pub fn num_questions(&self) -> usize {
        self.num_questions
    }

    /// Batch size for a dictionary of `word_count` words
    pub fn batch_size(&self, word_count: usize) -> usize {
        self.num_questions.min(word_count)
    }

    /// Draw `min(num_questions, words.len())` words, with replacement.
    pub fn draw<R: Rng + ?Sized>(
        &self,
        words: &[WordTally],
        weights: &[f64],
        rng: &mut R,
    ) -> Result<Vec<String>, SampleError> {
        if words.len() != weights.len() {
            return Err(SampleError::LengthMismatch {
                words: words.len(),
                weights: weights.len(),
            });
        }

        let k = self.batch_size(words.len());
        if k == 0 {
            return Ok(Vec::new());
        }

        let dist = WeightedIndex::new(weights).map_err(|_| SampleError::InvalidWeights)?;

        Ok((0..k)
            .map(|_| words[dist.sample(rng)].word.clone())
            .collect())
    }
}

pub type QuizRng = ChaCha8Rng;

/// Random source for quiz rounds; `Some(seed)` makes the sequence of draws reproducible
pub fn quiz_rng(seed: Option<u64>) -> QuizRng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}
