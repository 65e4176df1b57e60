//! Rehash distribution analysis
//!
//! Turns the per-rehash-count bucket histogram into a percentage distribution
//! and a right-cumulative distribution.

use crate::common::{RehashDistribution, RehashSamples};
use thiserror::Error;

/// Errors that can occur while deriving the distribution
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DistributionError {
    #[error("Total bucket count is zero across {rows} rows, percentages are undefined")]
    ZeroTotal { rows: usize },

    #[error("Total bucket count overflows a 64-bit integer")]
    Overflow,
}

type Result<T> = core::result::Result<T, DistributionError>;

/// Derive the frequency and cumulative distributions from the loaded samples
///
/// * `percent_count[i]` is `occurrence_count[i] * 100 / total`.
/// * `cumulative` holds, for every `i` in `1..N`, the sum of `occurrence_count[i..N]`.
/// * `percent_cumulative` is `cumulative` scaled to percent, prefixed with `0.0`.
///
/// Because the cumulative series starts at index 1 and is then shifted right by
/// the leading zero, the cumulative value drawn above rehash count `k` covers
/// rehash counts `k + 1` and above.
///
/// An empty input produces empty series (plus the leading zero) without any
/// division taking place.
///
/// # Returns
/// * `Ok(RehashDistribution)` - The derived series
/// * `Err(DistributionError::ZeroTotal)` - If there are rows but no buckets were counted
pub fn compute_distribution(samples: &RehashSamples) -> Result<RehashDistribution> {
    let counts = samples.occurrence_counts();
    let total = counts
        .iter()
        .try_fold(0u64, |sum, &count| sum.checked_add(count))
        .ok_or(DistributionError::Overflow)?;

    if !counts.is_empty() && total == 0 {
        return Err(DistributionError::ZeroTotal { rows: counts.len() });
    }

    let percent_of_total = |count: u64| count as f64 * 100.0 / total as f64;
    let percent_count: Vec<f64> = counts.iter().map(|&count| percent_of_total(count)).collect();

    // Right-cumulative sums for indices 1..N. Every suffix sum is bounded by
    // `total`, so the running sum cannot overflow.
    let mut cumulative = Vec::with_capacity(counts.len().saturating_sub(1));
    let mut running = 0u64;
    for &count in counts.iter().skip(1).rev() {
        running += count;
        cumulative.push(running);
    }
    cumulative.reverse();

    let mut percent_cumulative = Vec::with_capacity(cumulative.len() + 1);
    percent_cumulative.push(0.0);
    percent_cumulative.extend(cumulative.iter().map(|&sum| percent_of_total(sum)));

    Ok(RehashDistribution {
        rehash_counts: samples.rehash_counts().to_vec(),
        total,
        percent_count,
        cumulative,
        percent_cumulative,
    })
}
