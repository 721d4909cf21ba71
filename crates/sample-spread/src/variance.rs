//! Unbiased sample variance and standard deviation

use crate::kernels::VarianceKernel;
use crate::traits::{SpreadEstimator, SpreadEstimatorProperties};
use num_traits::Float;
use sample_core::{
    check_min_size, CentralTendencyEstimator, ComputePrimitives, KnownCenter, Numeric, Result,
    ScalarBackend,
};
use sample_location::SampleMean;

/// Sample variance with Bessel's correction: Σ(x - x̄)² / (n - 1)
///
/// The center comes from a location estimator supplied at construction
/// (the sample mean by default). [`SampleVariance::estimate_with`] overrides
/// it for a single call, and [`SampleVariance::estimate_about`] takes an
/// already computed center.
#[derive(Debug, Clone)]
pub struct SampleVariance<
    T: Numeric = f64,
    P: ComputePrimitives<T> = ScalarBackend,
    L: CentralTendencyEstimator<T> = SampleMean<T, P>,
> {
    kernel: VarianceKernel<T, P>,
    location: L,
}

impl<T: Numeric, P: ComputePrimitives<T>> SampleVariance<T, P, SampleMean<T, P>> {
    /// Variance about the sample mean, computed with the same primitives
    pub fn new(primitives: P) -> Self {
        Self {
            location: SampleMean::new(primitives.clone()),
            kernel: VarianceKernel::new(primitives),
        }
    }
}

impl<T: Numeric, P: ComputePrimitives<T>, L: CentralTendencyEstimator<T>> SampleVariance<T, P, L> {
    /// Variance about the center reported by `location`
    pub fn with_location(primitives: P, location: L) -> Self {
        Self {
            kernel: VarianceKernel::new(primitives),
            location,
        }
    }

    /// The location estimator used as the center
    pub fn location(&self) -> &L {
        &self.location
    }

    /// Variance about the center reported by a different location estimator
    ///
    /// The sample size is checked before the location is evaluated, so a
    /// sample of 0 or 1 observations always reports `InsufficientData`.
    pub fn estimate_with<C: CentralTendencyEstimator<T>>(
        &self,
        data: &[T],
        location: &C,
    ) -> Result<T::Float> {
        check_min_size(data, 2)?;
        let center = location.estimate(data)?;
        self.kernel.compute_variance_about(data, center)
    }

    /// Variance about a known center
    pub fn estimate_about(&self, data: &[T], center: T::Float) -> Result<T::Float> {
        self.estimate_with(data, &KnownCenter(center))
    }

    /// Square root of the variance
    pub fn std_dev(&self, data: &[T]) -> Result<T::Float> {
        Ok(self.estimate(data)?.sqrt())
    }
}

impl<T: Numeric, P: ComputePrimitives<T> + Default> Default
    for SampleVariance<T, P, SampleMean<T, P>>
{
    fn default() -> Self {
        Self::new(P::default())
    }
}

impl<T: Numeric, P: ComputePrimitives<T>, L: CentralTendencyEstimator<T>> SpreadEstimatorProperties
    for SampleVariance<T, P, L>
{
    fn name(&self) -> &str {
        "Variance"
    }

    fn is_robust(&self) -> bool {
        false
    }

    fn breakdown_point(&self) -> f64 {
        0.0
    }

    fn gaussian_efficiency(&self) -> f64 {
        1.0
    }

    fn minimum_sample_size(&self) -> usize {
        2
    }
}

impl<T: Numeric, P: ComputePrimitives<T>, L: CentralTendencyEstimator<T>> SpreadEstimator<T>
    for SampleVariance<T, P, L>
{
    fn estimate(&self, data: &[T]) -> Result<T::Float> {
        self.estimate_with(data, &self.location)
    }
}

/// Unbiased variance about the sample mean using the scalar backend
pub fn variance<T: Numeric>(data: &[T]) -> Result<T::Float> {
    SampleVariance::<T, ScalarBackend>::default().estimate(data)
}

/// Standard deviation (square root of the unbiased variance)
pub fn std_dev<T: Numeric>(data: &[T]) -> Result<T::Float> {
    SampleVariance::<T, ScalarBackend>::default().std_dev(data)
}
