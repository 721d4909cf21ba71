//! Location estimation kernels

use sample_core::{
    check_min_size, check_non_empty, numeric::cast, utils, ComputePrimitives, Error, Numeric,
    Result, ScalarBackend, StatisticalKernel,
};
use std::marker::PhantomData;
use tracing::debug;

/// Kernel for the arithmetic mean
#[derive(Clone, Debug)]
pub struct MeanKernel<T: Numeric = f64, P: ComputePrimitives<T> = ScalarBackend> {
    primitives: P,
    _phantom: PhantomData<T>,
}

impl<T: Numeric, P: ComputePrimitives<T>> MeanKernel<T, P> {
    pub fn new(primitives: P) -> Self {
        Self {
            primitives,
            _phantom: PhantomData,
        }
    }

    /// Sum of the sample divided by its size
    pub fn compute_mean(&self, data: &[T]) -> Result<T::Float> {
        check_non_empty(data, "mean")?;
        let n: T::Float = cast(data.len())?;
        Ok(self.primitives.sum(data) / n)
    }
}

impl<T: Numeric, P: ComputePrimitives<T>> StatisticalKernel<T> for MeanKernel<T, P> {
    type Primitives = P;

    fn primitives(&self) -> &P {
        &self.primitives
    }
}

/// Kernel for statistics built on Walsh averages
///
/// A Walsh average is (x_i + x_j) / 2 for a pair of distinct positions i < j.
#[derive(Clone, Debug)]
pub struct WalshKernel<T: Numeric = f64, P: ComputePrimitives<T> = ScalarBackend> {
    primitives: P,
    _phantom: PhantomData<T>,
}

impl<T: Numeric, P: ComputePrimitives<T>> WalshKernel<T, P> {
    pub fn new(primitives: P) -> Self {
        Self {
            primitives,
            _phantom: PhantomData,
        }
    }

    /// All n(n-1)/2 Walsh averages, in pair order
    pub fn walsh_averages(&self, data: &[T]) -> Vec<T::Float> {
        self.primitives.pairwise_averages(data)
    }

    /// Median of the Walsh averages
    ///
    /// Sorts the averages (never the input). O(n² log n) time, O(n²) space.
    pub fn compute_hodges_lehmann(&self, data: &[T]) -> Result<T::Float> {
        check_min_size(data, 2)?;
        let mut averages = self.walsh_averages(data);
        debug!(n = data.len(), pairs = averages.len(), "Hodges-Lehmann: sorting Walsh averages");
        utils::sort_in_place(&mut averages);
        utils::median_of_sorted(&averages).ok_or_else(|| Error::insufficient(2, data.len()))
    }
}

impl<T: Numeric, P: ComputePrimitives<T>> StatisticalKernel<T> for WalshKernel<T, P> {
    type Primitives = P;

    fn primitives(&self) -> &P {
        &self.primitives
    }
}
