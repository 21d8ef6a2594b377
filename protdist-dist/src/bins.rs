//! Bin schemas and bucket assignment.
//!
//! A schema is an ascending list of thresholds `t[0..N]` whose last two entries
//! are equal. It defines N half-open buckets:
//!
//! - bucket `0`: `x < t[0]`
//! - bucket `i + 1`: `t[i] <= x < t[i + 1]` for `i` in `0..N - 2`
//! - bucket `N - 1`: `x >= t[N - 1]`, the catch-all overflow bucket
//!
//! A value sitting exactly on a threshold always lands in the higher bucket.

use crate::consts::{MW_BINS, PI_BINS};
use crate::errors::DistError;

#[derive(Debug, Clone, PartialEq)]
pub struct BinSchema {
    thresholds: Vec<f64>,
}

impl BinSchema {
    ///
    /// Create a schema from a full threshold list, overflow repeat included.
    ///
    /// Fails unless there are at least two thresholds, all finite and
    /// non-decreasing, with the last one equal to the one before it.
    pub fn new(thresholds: Vec<f64>) -> Result<Self, DistError> {
        let n = thresholds.len();
        if n < 2 {
            return Err(DistError::InvalidBinSchema(format!(
                "at least two thresholds required, got {}",
                n
            )));
        }

        if let Some(t) = thresholds.iter().find(|t| !t.is_finite()) {
            return Err(DistError::InvalidBinSchema(format!(
                "thresholds must be finite, got {}",
                t
            )));
        }

        if let Some(w) = thresholds.windows(2).find(|w| w[0] > w[1]) {
            return Err(DistError::InvalidBinSchema(format!(
                "thresholds must be non-decreasing, {} is followed by {}",
                w[0], w[1]
            )));
        }

        if thresholds[n - 1] != thresholds[n - 2] {
            return Err(DistError::InvalidBinSchema(format!(
                "last threshold must repeat the previous one to mark the overflow bin, got {} and {}",
                thresholds[n - 2],
                thresholds[n - 1]
            )));
        }

        Ok(BinSchema { thresholds })
    }

    ///
    /// Create a schema from distinct bin edges, appending the repeated final
    /// edge that marks the overflow bucket.
    ///
    pub fn with_overflow(edges: &[f64]) -> Result<Self, DistError> {
        let mut thresholds = edges.to_vec();
        if let Some(&last) = edges.last() {
            thresholds.push(last);
        }
        BinSchema::new(thresholds)
    }

    /// Molecular weight bins from [MW_BINS].
    pub fn molecular_weight() -> BinSchema {
        BinSchema {
            thresholds: MW_BINS.to_vec(),
        }
    }

    /// Isoelectric point bins from [PI_BINS].
    pub fn isoelectric_point() -> BinSchema {
        BinSchema {
            thresholds: PI_BINS.to_vec(),
        }
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn n_buckets(&self) -> usize {
        self.thresholds.len()
    }

    ///
    /// Bucket index for `x`.
    ///
    /// Every non-NaN value gets exactly one bucket: values below the first
    /// threshold go to bucket 0 and values at or above the last go to the
    /// overflow bucket, however far out they are. Returns `None` only for NaN.
    pub fn assign(&self, x: f64) -> Option<usize> {
        let t = &self.thresholds;
        let last = t.len() - 1;

        if x < t[0] {
            return Some(0);
        }
        if x >= t[last] {
            return Some(last);
        }

        (0..last - 1)
            .find(|&i| t[i] <= x && x < t[i + 1])
            .map(|i| i + 1)
    }
}

impl TryFrom<&[f64]> for BinSchema {
    type Error = DistError;

    fn try_from(value: &[f64]) -> Result<Self, DistError> {
        BinSchema::new(value.to_vec())
    }
}

impl TryFrom<Vec<f64>> for BinSchema {
    type Error = DistError;

    fn try_from(value: Vec<f64>) -> Result<Self, DistError> {
        BinSchema::new(value)
    }
}
