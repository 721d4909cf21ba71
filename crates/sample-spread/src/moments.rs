//! Central moments and the moment-based shape statistics built on them

use crate::kernels::MomentKernel;
use num_traits::{Float, Zero};
use sample_core::{
    check_non_empty, numeric::cast, CentralTendencyEstimator, ComputePrimitives, Error,
    KnownCenter, Numeric, Result, ScalarBackend,
};
use sample_location::SampleMean;

/// k-th central moment: Σ(x - c)^k / n
///
/// The center `c` comes from a location estimator (the sample mean by
/// default). Order 2 gives the biased variance, dividing by n rather than
/// n - 1. Order 0 is exactly 1.
#[derive(Debug, Clone)]
pub struct CentralMoment<
    T: Numeric = f64,
    P: ComputePrimitives<T> = ScalarBackend,
    L: CentralTendencyEstimator<T> = SampleMean<T, P>,
> {
    kernel: MomentKernel<T, P>,
    location: L,
}

/// Reject orders that `powi` cannot take
fn check_order(k: u32) -> Result<i32> {
    i32::try_from(k)
        .map_err(|_| Error::InvalidParameter(format!("Moment order {k} exceeds {}", i32::MAX)))
}

impl<T: Numeric, P: ComputePrimitives<T>> CentralMoment<T, P, SampleMean<T, P>> {
    /// Moment of order `k` about the sample mean
    pub fn new(primitives: P, k: u32) -> Result<Self> {
        let order = check_order(k)?;
        Ok(Self {
            location: SampleMean::new(primitives.clone()),
            kernel: MomentKernel::new(primitives, order),
        })
    }
}

impl<T: Numeric, P: ComputePrimitives<T>, L: CentralTendencyEstimator<T>> CentralMoment<T, P, L> {
    /// Moment of order `k` about the center reported by `location`
    pub fn with_location(primitives: P, k: u32, location: L) -> Result<Self> {
        let order = check_order(k)?;
        Ok(Self {
            kernel: MomentKernel::new(primitives, order),
            location,
        })
    }

    /// The moment order
    pub fn order(&self) -> u32 {
        // Validated non-negative at construction
        self.kernel.order().unsigned_abs()
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    /// Moment about the configured location
    pub fn estimate(&self, data: &[T]) -> Result<T::Float> {
        self.estimate_with(data, &self.location)
    }

    /// Moment about the center reported by a different location estimator
    pub fn estimate_with<C: CentralTendencyEstimator<T>>(
        &self,
        data: &[T],
        location: &C,
    ) -> Result<T::Float> {
        check_non_empty(data, "central moment")?;
        let center = location.estimate(data)?;
        self.kernel.compute_moment_about(data, center)
    }

    /// Moment about a known center
    pub fn estimate_about(&self, data: &[T], center: T::Float) -> Result<T::Float> {
        self.estimate_with(data, &KnownCenter(center))
    }
}

/// k-th central moment about the sample mean using the scalar backend
pub fn central_moment<T: Numeric>(data: &[T], k: u32) -> Result<T::Float> {
    CentralMoment::<T, ScalarBackend>::new(ScalarBackend::new(), k)?.estimate(data)
}

/// Second, third and fourth central moments about one shared mean
fn shape_moments<T: Numeric>(data: &[T]) -> Result<(T::Float, T::Float, T::Float)> {
    check_non_empty(data, "moment shape statistic")?;
    let center = SampleMean::<T, ScalarBackend>::default().estimate(data)?;
    let moment = |k| -> Result<T::Float> {
        CentralMoment::<T, ScalarBackend>::new(ScalarBackend::new(), k)?
            .estimate_about(data, center)
    };
    let m2 = moment(2)?;
    if m2 <= <T::Float as Zero>::zero() {
        return Err(Error::InvalidInput(
            "sample has zero variance, shape is undefined".to_string(),
        ));
    }
    Ok((m2, moment(3)?, moment(4)?))
}

/// Moment coefficient of skewness: m₃ / m₂^(3/2)
///
/// Fails with `InvalidInput` for a constant sample.
pub fn skewness<T: Numeric>(data: &[T]) -> Result<T::Float> {
    let (m2, m3, _) = shape_moments(data)?;
    Ok(m3 / (m2 * m2.sqrt()))
}

/// Excess kurtosis: m₄ / m₂² - 3
///
/// Fails with `InvalidInput` for a constant sample.
pub fn excess_kurtosis<T: Numeric>(data: &[T]) -> Result<T::Float> {
    let (m2, _, m4) = shape_moments(data)?;
    let three: T::Float = cast(3)?;
    Ok(m4 / (m2 * m2) - three)
}
