//! Data structures for rehash statistics
//!
//! [`RehashSamples`] holds the rows loaded from the instrumentation CSV, while
//! [`RehashDistribution`] holds the series derived from them.

use serde::Deserialize;

/// A single row of the instrumentation CSV
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RehashRecord {
    /// Number of times a bucket was rehashed
    #[serde(rename = "rehashes per bucket")]
    pub rehash_count: u64,
    /// Number of buckets observed with this rehash count
    // The header in the instrumentation output carries a leading space.
    #[serde(rename = " count")]
    pub occurrence_count: u64,
}

/// Frequency table loaded from the instrumentation CSV, in file order
///
/// Both sequences always have the same length; element `i` of
/// [`occurrence_counts`](Self::occurrence_counts) belongs to element `i` of
/// [`rehash_counts`](Self::rehash_counts).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RehashSamples {
    rehash_counts: Vec<u64>,
    occurrence_counts: Vec<u64>,
}

impl RehashSamples {
    /// Creates an empty frequency table
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row, preserving insertion order
    pub fn push(&mut self, record: RehashRecord) {
        self.rehash_counts.push(record.rehash_count);
        self.occurrence_counts.push(record.occurrence_count);
    }

    /// Rehash counts (x-axis categories)
    pub fn rehash_counts(&self) -> &[u64] {
        &self.rehash_counts
    }

    /// Occurrence counts, aligned with [`rehash_counts`](Self::rehash_counts)
    pub fn occurrence_counts(&self) -> &[u64] {
        &self.occurrence_counts
    }

    pub fn len(&self) -> usize {
        self.rehash_counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rehash_counts.is_empty()
    }
}

impl FromIterator<RehashRecord> for RehashSamples {
    fn from_iter<I: IntoIterator<Item = RehashRecord>>(iter: I) -> Self {
        let mut samples = Self::new();
        for record in iter {
            samples.push(record);
        }
        samples
    }
}

/// Frequency and right-cumulative distributions derived from [`RehashSamples`]
#[derive(Debug, Clone, PartialEq)]
pub struct RehashDistribution {
    /// Rehash counts, copied from the source samples
    pub rehash_counts: Vec<u64>,
    /// Sum of all occurrence counts
    pub total: u64,
    /// Share of all buckets at each rehash count, in percent
    pub percent_count: Vec<f64>,
    /// Number of buckets at positions `i..N`, for `i` in `1..N`
    pub cumulative: Vec<u64>,
    /// `cumulative` as a percentage of `total`, with a leading `0.0`
    ///
    /// The value at position `i` is the share of buckets at positions `i + 1..N`,
    /// i.e. it starts one rehash count after the label at that position.
    pub percent_cumulative: Vec<f64>,
}

impl RehashDistribution {
    /// Pairs every rehash count with its derived values, for display
    pub fn rows(&self, samples: &RehashSamples) -> Vec<DistributionRow> {
        self.rehash_counts
            .iter()
            .zip(samples.occurrence_counts())
            .zip(self.percent_count.iter().zip(&self.percent_cumulative))
            .map(
                |((&rehash_count, &occurrence_count), (&percent, &cumulative))| DistributionRow {
                    rehash_count,
                    occurrence_count,
                    percent_count: percent,
                    percent_cumulative: cumulative,
                },
            )
            .collect()
    }
}

/// A single line of the distribution, as shown to the user
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistributionRow {
    pub rehash_count: u64,
    pub occurrence_count: u64,
    pub percent_count: f64,
    pub percent_cumulative: f64,
}
