//! Core traits for quantile estimation

use crate::{Error, Result};
use sample_core::{utils, Numeric};

/// Main trait for quantile estimation
///
/// Implementations answer from sorted data; the unsorted entry points sort a
/// private copy, so the caller's sample keeps its order.
pub trait QuantileEstimator<T: Numeric = f64>: Send + Sync + Clone {
    /// Estimate a single quantile
    ///
    /// # Arguments
    /// * `data` - The data sample, in any order
    /// * `p` - The probability (0.0 to 1.0)
    fn quantile(&self, data: &[T], p: f64) -> Result<T::Float> {
        Error::check_probability(p)?;
        Error::check_non_empty(data)?;
        let sorted = utils::sorted(data);
        self.quantile_sorted(&sorted, p)
    }

    /// Estimate a single quantile from pre-sorted data
    ///
    /// # Arguments
    /// * `sorted_data` - The data sample, already sorted ascending
    /// * `p` - The probability (0.0 to 1.0)
    fn quantile_sorted(&self, sorted_data: &[T], p: f64) -> Result<T::Float>;

    /// Estimate multiple quantiles, sorting once
    fn quantiles(&self, data: &[T], ps: &[f64]) -> Result<Vec<T::Float>> {
        for &p in ps {
            Error::check_probability(p)?;
        }
        Error::check_non_empty(data)?;
        let sorted = utils::sorted(data);
        self.quantiles_sorted(&sorted, ps)
    }

    /// Estimate multiple quantiles from pre-sorted data
    fn quantiles_sorted(&self, sorted_data: &[T], ps: &[f64]) -> Result<Vec<T::Float>> {
        ps.iter()
            .map(|&p| self.quantile_sorted(sorted_data, p))
            .collect()
    }
}
