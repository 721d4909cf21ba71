//! Arithmetic sample mean

use crate::kernels::MeanKernel;
use sample_core::{CentralTendencyEstimator, ComputePrimitives, Numeric, Result, ScalarBackend};

/// Arithmetic mean: Σx / n
///
/// Not robust: a single observation can move it arbitrarily far
/// (breakdown point 0).
#[derive(Debug, Clone)]
pub struct SampleMean<T: Numeric = f64, P: ComputePrimitives<T> = ScalarBackend> {
    kernel: MeanKernel<T, P>,
}

impl<T: Numeric, P: ComputePrimitives<T>> SampleMean<T, P> {
    pub fn new(primitives: P) -> Self {
        Self {
            kernel: MeanKernel::new(primitives),
        }
    }

    /// Access the underlying kernel
    pub fn kernel(&self) -> &MeanKernel<T, P> {
        &self.kernel
    }
}

impl<T: Numeric, P: ComputePrimitives<T> + Default> Default for SampleMean<T, P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}

impl<T: Numeric, P: ComputePrimitives<T>> CentralTendencyEstimator<T> for SampleMean<T, P> {
    fn estimate(&self, data: &[T]) -> Result<T::Float> {
        self.kernel.compute_mean(data)
    }

    fn name(&self) -> &str {
        "Mean"
    }

    fn is_robust(&self) -> bool {
        false
    }

    fn breakdown_point(&self) -> f64 {
        0.0
    }
}

/// Mean of a sample using the scalar backend
pub fn mean<T: Numeric>(data: &[T]) -> Result<T::Float> {
    SampleMean::<T, ScalarBackend>::default().estimate(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use sample_core::Error;

    #[test]
    fn test_mean_basic() {
        assert_eq!(mean(&[2.0, 4.0, 6.0]).unwrap(), 4.0);
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap(), 3.0);
    }

    #[test]
    fn test_mean_single_element() {
        assert_eq!(mean(&[42.0]).unwrap(), 42.0);
    }

    #[test]
    fn test_mean_empty() {
        assert!(matches!(mean::<f64>(&[]), Err(Error::EmptyInput(_))));
    }

    #[test]
    fn test_mean_integer_sample() {
        // Integer samples are averaged in f64
        assert_eq!(mean(&[1i32, 2]).unwrap(), 1.5);
        assert_relative_eq!(mean(&[u32::MAX, u32::MAX]).unwrap(), f64::from(u32::MAX));
    }

    #[test]
    fn test_mean_f32_sample() {
        let result: f32 = mean(&[1.0f32, 2.0, 3.0]).unwrap();
        assert_eq!(result, 2.0f32);
    }

    #[test]
    fn test_mean_precision() {
        let m = mean(&[1.1, 2.2, 3.3, 4.4, 5.5]).unwrap();
        assert_relative_eq!(m, 3.3, epsilon = 1e-10);
    }

    #[test]
    fn test_estimator_properties() {
        let estimator = SampleMean::<f64, _>::new(ScalarBackend::new());
        assert_eq!(estimator.name(), "Mean");
        assert!(!estimator.is_robust());
        assert_eq!(estimator.breakdown_point(), 0.0);
    }

    #[test]
    fn test_estimate_sorted_matches_estimate() {
        let estimator = SampleMean::<f64, _>::new(ScalarBackend::new());
        let unsorted = [5.0, 1.0, 3.0];
        let sorted = [1.0, 3.0, 5.0];
        assert_relative_eq!(
            estimator.estimate(&unsorted).unwrap(),
            estimator.estimate_sorted(&sorted).unwrap()
        );
    }

    #[test]
    fn test_mean_nan_propagates() {
        assert!(mean(&[1.0, f64::NAN, 3.0]).unwrap().is_nan());
    }
}
