//! Difficulty statistics
//!
//! Quantizes planned weights into 101 difficulty buckets
//! (`round((1 - weight) * 100)`, so 0 = hardest, 100 = easiest) and renders a
//! histogram with ASCII bars for the stats view.

use std::cmp::Ordering;

use serde::Serialize;

use crate::types::WordTally;

/// Highest bucket index
pub const MAX_BUCKET: u8 = 100;

/// Width of a bar covering every word
pub const BAR_WIDTH: usize = 50;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StatsError {
    #[error("{words} words but {weights} weights")]
    LengthMismatch { words: usize, weights: usize },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordStat {
    pub word: String,
    pub up: u64,
    pub down: u64,
    pub bucket: u8,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistogramBin {
    pub bucket: u8,
    pub count: usize,
    pub bar: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    pub total_words: usize,
    pub total_good: u64,
    pub total_bad: u64,
    /// Sorted by (bucket, attempts, up, down, word)
    pub words: Vec<WordStat>,
    /// One bin per bucket, 0..=100
    pub histogram: Vec<HistogramBin>,
}

/// `round((1 - weight) * 100)` clamped to `0..=100`
pub fn difficulty_bucket(weight: f64) -> u8 {
    if weight.is_nan() {
        return MAX_BUCKET;
    }
    ((1.0 - weight) * 100.0).round().clamp(0.0, MAX_BUCKET as f64) as u8
}

fn compare_stats(a: &WordStat, b: &WordStat) -> Ordering {
    a.bucket
        .cmp(&b.bucket)
        .then_with(|| a.up.saturating_add(a.down).cmp(&b.up.saturating_add(b.down)))
        .then_with(|| a.up.cmp(&b.up))
        .then_with(|| a.down.cmp(&b.down))
        .then_with(|| a.word.cmp(&b.word))
}

/// Histogram over all 101 buckets; bar length is `floor(BAR_WIDTH * count / total)`
pub fn histogram(stats: &[WordStat]) -> Vec<HistogramBin> {
    let mut counts = [0usize; MAX_BUCKET as usize + 1];
    for stat in stats {
        counts[stat.bucket.min(MAX_BUCKET) as usize] += 1;
    }

    let total = stats.len();
    counts
        .iter()
        .enumerate()
        .map(|(bucket, &count)| {
            let width = if total == 0 { 0 } else { BAR_WIDTH * count / total };
            HistogramBin {
                bucket: bucket as u8,
                count,
                bar: "#".repeat(width),
            }
        })
        .collect()
}

pub fn build_report(tallies: &[WordTally], weights: &[f64]) -> Result<StatsReport, StatsError> {
    if tallies.len() != weights.len() {
        return Err(StatsError::LengthMismatch {
            words: tallies.len(),
            weights: weights.len(),
        });
    }

    let mut words: Vec<WordStat> = tallies
        .iter()
        .zip(weights)
        .map(|(tally, &weight)| WordStat {
            word: tally.word.clone(),
            up: tally.up,
            down: tally.down,
            bucket: difficulty_bucket(weight),
        })
        .collect();
    words.sort_by(compare_stats);

    let histogram = histogram(&words);

    Ok(StatsReport {
        total_words: words.len(),
        total_good: tallies.iter().fold(0u64, |acc, t| acc.saturating_add(t.up)),
        total_bad: tallies.iter().fold(0u64, |acc, t| acc.saturating_add(t.down)),
        words,
        histogram,
    })
}
