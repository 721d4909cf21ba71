//! Core traits for spread estimation

use sample_core::{Numeric, Result};

/// Intrinsic properties of a spread estimator that don't depend on implementation details
pub trait SpreadEstimatorProperties {
    /// Get the name of this spread estimator
    fn name(&self) -> &str;

    /// Check if this estimator is robust to outliers
    fn is_robust(&self) -> bool;

    /// Get the asymptotic breakdown point (0.0 to 0.5)
    fn breakdown_point(&self) -> f64;

    /// Get the efficiency of this estimator relative to the standard deviation
    /// for normal distributions (0.0 to 1.0)
    fn gaussian_efficiency(&self) -> f64;

    /// Smallest sample the estimator accepts
    fn minimum_sample_size(&self) -> usize;
}

/// Trait for spread/scale estimators
pub trait SpreadEstimator<T: Numeric = f64>: SpreadEstimatorProperties {
    /// Estimate spread of a sample in any order
    fn estimate(&self, data: &[T]) -> Result<T::Float>;

    /// Estimate spread of a sample sorted ascending
    ///
    /// None of the estimators here gain anything from sorted input; the
    /// default simply delegates.
    fn estimate_sorted(&self, sorted_data: &[T]) -> Result<T::Float> {
        self.estimate(sorted_data)
    }
}
