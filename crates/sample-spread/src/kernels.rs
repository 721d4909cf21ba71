//! Spread and moment kernels using the primitives architecture

use num_traits::One;
use sample_core::{
    check_min_size, check_non_empty, numeric::cast, ComputePrimitives, Numeric, Result,
    ScalarBackend, StatisticalKernel,
};
use std::marker::PhantomData;
use tracing::debug;

/// Kernel for the unbiased sample variance
///
/// Var = Σ(x - c)² / (n - 1) for a supplied center c
#[derive(Clone, Debug)]
pub struct VarianceKernel<T: Numeric = f64, P: ComputePrimitives<T> = ScalarBackend> {
    primitives: P,
    _phantom: PhantomData<T>,
}

impl<T: Numeric, P: ComputePrimitives<T>> VarianceKernel<T, P> {
    pub fn new(primitives: P) -> Self {
        Self {
            primitives,
            _phantom: PhantomData,
        }
    }

    /// Unbiased variance about `center`; needs n ≥ 2
    pub fn compute_variance_about(&self, data: &[T], center: T::Float) -> Result<T::Float> {
        check_min_size(data, 2)?;
        let denominator: T::Float = cast(data.len() - 1)?;
        Ok(self.primitives.sum_squared_deviations(data, center) / denominator)
    }
}

impl<T: Numeric, P: ComputePrimitives<T>> StatisticalKernel<T> for VarianceKernel<T, P> {
    type Primitives = P;

    fn primitives(&self) -> &P {
        &self.primitives
    }
}

/// Kernel for the Gini mean difference
///
/// GMD = 2 / (n(n-1)) · Σ_{i<j} |x_i - x_j|
#[derive(Clone, Debug)]
pub struct GiniKernel<T: Numeric = f64, P: ComputePrimitives<T> = ScalarBackend> {
    primitives: P,
    _phantom: PhantomData<T>,
}

impl<T: Numeric, P: ComputePrimitives<T>> GiniKernel<T, P> {
    pub fn new(primitives: P) -> Self {
        Self {
            primitives,
            _phantom: PhantomData,
        }
    }

    /// Mean absolute difference over all unordered pairs; needs n ≥ 2
    pub fn compute_gini_mean_difference(&self, data: &[T]) -> Result<T::Float> {
        check_min_size(data, 2)?;
        debug!(n = data.len(), "Gini mean difference: summing pairwise differences");
        let n: T::Float = cast(data.len())?;
        let one = <T::Float as One>::one();
        let two = one + one;
        let total = self.primitives.sum_abs_pairwise_differences(data);
        Ok(two * total / (n * (n - one)))
    }
}

impl<T: Numeric, P: ComputePrimitives<T>> StatisticalKernel<T> for GiniKernel<T, P> {
    type Primitives = P;

    fn primitives(&self) -> &P {
        &self.primitives
    }
}

/// Kernel for central moments of a fixed order
///
/// m_k = Σ(x - c)^k / n for a supplied center c
#[derive(Clone, Debug)]
pub struct MomentKernel<T: Numeric = f64, P: ComputePrimitives<T> = ScalarBackend> {
    primitives: P,
    order: i32,
    _phantom: PhantomData<T>,
}

impl<T: Numeric, P: ComputePrimitives<T>> MomentKernel<T, P> {
    /// `order` must already be validated as non-negative
    pub fn new(primitives: P, order: i32) -> Self {
        debug_assert!(order >= 0, "moment order must be non-negative");
        Self {
            primitives,
            order,
            _phantom: PhantomData,
        }
    }

    pub fn order(&self) -> i32 {
        self.order
    }

    /// Central moment about `center`; needs n ≥ 1
    ///
    /// Order 0 is exactly 1 whatever the deviations are.
    pub fn compute_moment_about(&self, data: &[T], center: T::Float) -> Result<T::Float> {
        check_non_empty(data, "central moment")?;
        if self.order == 0 {
            return Ok(<T::Float as One>::one());
        }
        let n: T::Float = cast(data.len())?;
        Ok(self.primitives.sum_centered_powers(data, center, self.order) / n)
    }
}

impl<T: Numeric, P: ComputePrimitives<T>> StatisticalKernel<T> for MomentKernel<T, P> {
    type Primitives = P;

    fn primitives(&self) -> &P {
        &self.primitives
    }
}
