//! Nearest-rank quantile estimator
//!
//! The p-quantile of a sorted sample of size n is the order statistic at
//! zero-based index `floor(p·n)`, clamped to `n - 1`. No interpolation is
//! performed, so the estimate is a step function of `p`.

use crate::{Error, QuantileEstimator, Result};
use sample_core::{utils, CentralTendencyEstimator, Numeric};
use std::marker::PhantomData;

/// Zero-based index of the nearest-rank p-quantile in a sample of size `n`
///
/// `floor(p·n)` equals `n` at `p = 1`, which is clamped to the last element.
/// Callers guarantee `n > 0` and `p ∈ [0, 1]`.
#[inline]
pub fn nearest_rank_index(n: usize, p: f64) -> usize {
    debug_assert!(n > 0, "nearest-rank index of an empty sample");
    debug_assert!((0.0..=1.0).contains(&p), "probability {p} outside [0, 1]");
    let rank = (p * n as f64).floor() as usize;
    rank.min(n - 1)
}

/// Nearest-rank quantile estimator
///
/// Stateless; the probability is supplied per call. As a central tendency
/// estimator it reports the nearest-rank median (p = 0.5), which for even n
/// is the upper of the two central elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestRank;

impl NearestRank {
    pub fn new() -> Self {
        Self
    }
}

impl<T: Numeric> QuantileEstimator<T> for NearestRank {
    fn quantile_sorted(&self, sorted_data: &[T], p: f64) -> Result<T::Float> {
        Error::check_probability(p)?;
        Error::check_non_empty(sorted_data)?;
        debug_assert!(
            utils::is_sorted_ascending(sorted_data),
            "quantile_sorted called with unsorted data"
        );
        let index = nearest_rank_index(sorted_data.len(), p);
        Ok(sorted_data[index].to_float())
    }
}

impl<T: Numeric> CentralTendencyEstimator<T> for NearestRank {
    fn estimate(&self, data: &[T]) -> sample_core::Result<T::Float> {
        Ok(self.quantile(data, 0.5)?)
    }

    fn estimate_sorted(&self, sorted_data: &[T]) -> sample_core::Result<T::Float> {
        Ok(self.quantile_sorted(sorted_data, 0.5)?)
    }

    fn name(&self) -> &str {
        "Nearest-rank median"
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn breakdown_point(&self) -> f64 {
        0.5
    }
}

/// Quantile with its probability fixed at construction
///
/// The probability is validated once in [`SampleQuantile::new`]; every
/// estimate afterwards only needs a non-empty sample.
#[derive(Debug, Clone, Copy)]
pub struct SampleQuantile<T: Numeric = f64> {
    p: f64,
    estimator: NearestRank,
    _phantom: PhantomData<T>,
}

impl<T: Numeric> SampleQuantile<T> {
    /// Create a quantile estimator for probability `p ∈ [0, 1]`
    pub fn new(p: f64) -> Result<Self> {
        Error::check_probability(p)?;
        Ok(Self {
            p,
            estimator: NearestRank::new(),
            _phantom: PhantomData,
        })
    }

    /// The median (p = 0.5)
    pub fn median() -> Self {
        Self {
            p: 0.5,
            estimator: NearestRank::new(),
            _phantom: PhantomData,
        }
    }

    /// The probability this estimator was built for
    pub fn probability(&self) -> f64 {
        self.p
    }

    /// Estimate the quantile of a sample in any order
    pub fn estimate(&self, data: &[T]) -> Result<T::Float> {
        self.estimator.quantile(data, self.p)
    }

    /// Estimate the quantile of a sample sorted ascending
    pub fn estimate_sorted(&self, sorted_data: &[T]) -> Result<T::Float> {
        self.estimator.quantile_sorted(sorted_data, self.p)
    }
}
