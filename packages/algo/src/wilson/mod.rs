//! Wilson Score Lower Bound
//!
//! Estimates how likely a word is to be answered wrongly from its
//! (up, down) tally. The lower confidence bound keeps words with only a
//! handful of answers from being judged confidently hard or easy.
//!
//! For n = up + down and p = down / n:
//!
//! ```text
//!            p + z²/2n - z·sqrt(p(1-p)/n + z²/4n²)
//! bound  =  ---------------------------------------
//!                        1 + z²/n
//! ```

/// z-value for a ~90% one-sided confidence bound
pub const WILSON_Z: f64 = 1.281551565545;

/// Lower bound of the Wilson score interval on the "down" proportion.
///
/// Returns exactly 0.0 when there is no data. The result is clamped into
/// [0, 1]; with `down == 0` the raw expression can round a few ulps below
/// zero.
pub fn wilson_lower_bound(up: u64, down: u64) -> f64 {
    let total = up.saturating_add(down);
    if total == 0 {
        return 0.0;
    }

    let n = total as f64;
    let p = down as f64 / n;
    let z2 = WILSON_Z * WILSON_Z;

    let center = p + z2 / (2.0 * n);
    let margin = WILSON_Z * (p * (1.0 - p) / n + z2 / (4.0 * n * n)).sqrt();
    let denom = 1.0 + z2 / n;

    ((center - margin) / denom).clamp(0.0, 1.0)
}
