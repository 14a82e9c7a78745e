//! Draw distribution bookkeeping.

use crate::types::{RANGE_LEN, RANGE_MAX, RANGE_MIN};

/// Chi-square critical value for 9 degrees of freedom at p = 0.001.
pub const CHI_SQUARE_CRITICAL_999: f64 = 27.877;

/// Counts of revealed values over the selection range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    counts: [u64; RANGE_LEN],
    total: u64,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count `pick`. Out-of-range values are rejected and not counted.
    pub fn record(&mut self, pick: u8) -> bool {
        if !(RANGE_MIN..=RANGE_MAX).contains(&pick) {
            return false;
        }
        self.counts[(pick - RANGE_MIN) as usize] += 1;
        self.total += 1;
        true
    }

    pub fn count(&self, pick: u8) -> u64 {
        if !(RANGE_MIN..=RANGE_MAX).contains(&pick) {
            return 0;
        }
        self.counts[(pick - RANGE_MIN) as usize]
    }

    pub fn counts(&self) -> &[u64; RANGE_LEN] {
        &self.counts
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Pearson chi-square statistic against a uniform distribution.
    pub fn chi_square(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let expected = self.total as f64 / RANGE_LEN as f64;
        self.counts
            .iter()
            .map(|&c| {
                let d = c as f64 - expected;
                d * d / expected
            })
            .sum()
    }

    /// Whether the observed counts are consistent with uniform at the 99.9% level.
    pub fn looks_uniform(&self) -> bool {
        self.chi_square() <= CHI_SQUARE_CRITICAL_999
    }
}
