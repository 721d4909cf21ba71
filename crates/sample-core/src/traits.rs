//! Core traits for sample estimators
//!
//! Algorithm-specific traits (`QuantileEstimator`, `SpreadEstimator`) are
//! defined in their respective crates.

use crate::{Numeric, Result};

/// Base trait for all central tendency estimators
///
/// Estimators that measure the "center" of a sample: the mean, the
/// Hodges-Lehmann estimator, the median. Derived statistics (variance,
/// central moments) take one of these as a parameter for their baseline.
///
/// # API Convention
///
/// - `estimate` accepts data in any order and never reorders it
/// - `estimate_sorted` may assume ascending order and skip sorting
///
/// # Example
///
/// ```rust
/// use sample_core::{numeric::cast, CentralTendencyEstimator, Result};
///
/// #[derive(Clone)]
/// struct Midrange;
///
/// impl CentralTendencyEstimator<f64> for Midrange {
///     fn estimate(&self, data: &[f64]) -> Result<f64> {
///         self.estimate_sorted(&sample_core::utils::sorted(data))
///     }
///
///     fn estimate_sorted(&self, sorted_data: &[f64]) -> Result<f64> {
///         let (first, last) = match (sorted_data.first(), sorted_data.last()) {
///             (Some(first), Some(last)) => (*first, *last),
///             _ => return Err(sample_core::Error::empty_input("midrange")),
///         };
///         Ok((first + last) / cast::<f64, _>(2)?)
///     }
///
///     fn name(&self) -> &str { "Midrange" }
///     fn is_robust(&self) -> bool { false }
///     fn breakdown_point(&self) -> f64 { 0.0 }
/// }
///
/// assert_eq!(Midrange.estimate(&[3.0, 1.0, 5.0]).unwrap(), 3.0);
/// ```
pub trait CentralTendencyEstimator<T: Numeric = f64>: Send + Sync + Clone {
    /// Estimate the central tendency from a sample in any order
    fn estimate(&self, data: &[T]) -> Result<T::Float>;

    /// Estimate the central tendency from pre-sorted data
    fn estimate_sorted(&self, sorted_data: &[T]) -> Result<T::Float> {
        self.estimate(sorted_data)
    }

    /// Human-readable name of the estimator
    fn name(&self) -> &str;

    /// Whether this estimator is robust to outliers
    fn is_robust(&self) -> bool;

    /// The breakdown point (fraction of contamination the estimator can handle)
    /// - 0.0 for non-robust estimators (e.g., mean)
    /// - 0.5 for maximally robust estimators (e.g., median)
    fn breakdown_point(&self) -> f64;
}

/// A fixed center, for when the location is already known
///
/// Lets derived statistics reuse a precomputed mean without recomputing it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnownCenter<F>(pub F);

impl<T: Numeric> CentralTendencyEstimator<T> for KnownCenter<T::Float> {
    fn estimate(&self, _data: &[T]) -> Result<T::Float> {
        Ok(self.0)
    }

    fn name(&self) -> &str {
        "Known center"
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn breakdown_point(&self) -> f64 {
        0.5
    }
}
