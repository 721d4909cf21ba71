//! Gini mean difference

use crate::kernels::GiniKernel;
use crate::traits::{SpreadEstimator, SpreadEstimatorProperties};
use sample_core::{ComputePrimitives, Numeric, Result, ScalarBackend};

/// Gini mean difference: mean absolute difference over all unordered pairs
///
/// GMD = 2 / (n(n-1)) · Σ_{i<j} |x_i - x_j|
///
/// Needs no location estimate. Quadratic in the sample size.
#[derive(Debug, Clone)]
pub struct GiniMeanDifference<T: Numeric = f64, P: ComputePrimitives<T> = ScalarBackend> {
    kernel: GiniKernel<T, P>,
}

impl<T: Numeric, P: ComputePrimitives<T>> GiniMeanDifference<T, P> {
    pub fn new(primitives: P) -> Self {
        Self {
            kernel: GiniKernel::new(primitives),
        }
    }
}

impl<T: Numeric, P: ComputePrimitives<T> + Default> Default for GiniMeanDifference<T, P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}

impl<T: Numeric, P: ComputePrimitives<T>> SpreadEstimatorProperties for GiniMeanDifference<T, P> {
    fn name(&self) -> &str {
        "Gini mean difference"
    }

    fn is_robust(&self) -> bool {
        false
    }

    fn breakdown_point(&self) -> f64 {
        0.0
    }

    fn gaussian_efficiency(&self) -> f64 {
        0.978
    }

    fn minimum_sample_size(&self) -> usize {
        2
    }
}

impl<T: Numeric, P: ComputePrimitives<T>> SpreadEstimator<T> for GiniMeanDifference<T, P> {
    fn estimate(&self, data: &[T]) -> Result<T::Float> {
        self.kernel.compute_gini_mean_difference(data)
    }
}

/// Gini mean difference using the scalar backend
pub fn gini_mean_difference<T: Numeric>(data: &[T]) -> Result<T::Float> {
    GiniMeanDifference::<T, ScalarBackend>::default().estimate(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use sample_core::Error;

    #[test]
    fn test_gini_basic() {
        // Pairs: |1-2| + |1-3| + |2-3| = 4, times 2 / 6
        assert_relative_eq!(gini_mean_difference(&[1.0, 2.0, 3.0]).unwrap(), 4.0 / 3.0);
        assert_eq!(gini_mean_difference(&[1.0, 5.0]).unwrap(), 4.0);
    }

    #[test]
    fn test_gini_order_independent() {
        assert_eq!(
            gini_mean_difference(&[3.0, 1.0, 2.0]).unwrap(),
            gini_mean_difference(&[1.0, 2.0, 3.0]).unwrap()
        );
    }

    #[test]
    fn test_gini_constant_sample() {
        assert_eq!(gini_mean_difference(&[4.0, 4.0, 4.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_gini_insufficient() {
        assert!(matches!(
            gini_mean_difference(&[1.0]),
            Err(Error::InsufficientData { expected: 2, actual: 1 })
        ));
        assert!(matches!(
            gini_mean_difference::<f64>(&[]),
            Err(Error::InsufficientData { expected: 2, actual: 0 })
        ));
    }

    #[test]
    fn test_gini_integers() {
        assert_eq!(gini_mean_difference(&[0i32, 10]).unwrap(), 10.0);
    }

    #[test]
    fn test_gini_arithmetic_progression() {
        let data: Vec<f64> = (0..100).map(|i| i as f64).collect();
        // Closed form for 0..n-1: (n + 1) / 3
        assert_relative_eq!(gini_mean_difference(&data).unwrap(), 101.0 / 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_properties() {
        let estimator = GiniMeanDifference::<f64>::default();
        assert_eq!(estimator.name(), "Gini mean difference");
        assert!(!estimator.is_robust());
        assert_eq!(estimator.minimum_sample_size(), 2);
    }
}
