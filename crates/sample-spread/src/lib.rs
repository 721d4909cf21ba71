//! Spread and moment estimators for samples
//!
//! - **Variance**: unbiased (n - 1) variance about an injected location
//! - **Gini mean difference**: mean absolute difference over all pairs
//! - **Central moments**: (1/n)·Σ(x - c)^k, plus skewness and excess kurtosis
//!
//! Variance and central moments need a center. They default to the sample
//! mean and accept any [`CentralTendencyEstimator`] in its place.
//!
//! # Example
//!
//! ```rust
//! use sample_spread::{central_moment, gini_mean_difference, variance, SampleVariance};
//! use sample_core::{KnownCenter, ScalarBackend};
//!
//! let sample = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//!
//! assert_eq!(variance(&sample).unwrap(), 2.5);
//! assert_eq!(central_moment(&sample, 2).unwrap(), 2.0);
//! assert_eq!(gini_mean_difference(&sample).unwrap(), 2.0);
//!
//! // Reuse a center computed elsewhere
//! let estimator = SampleVariance::<f64>::default();
//! assert_eq!(estimator.estimate_with(&sample, &KnownCenter(3.0)).unwrap(), 2.5);
//! ```

pub mod gini;
pub mod kernels;
pub mod moments;
pub mod traits;
pub mod variance;

pub use gini::{gini_mean_difference, GiniMeanDifference};
pub use kernels::{GiniKernel, MomentKernel, VarianceKernel};
pub use moments::{central_moment, excess_kurtosis, skewness, CentralMoment};
pub use traits::{SpreadEstimator, SpreadEstimatorProperties};
pub use variance::{std_dev, variance, SampleVariance};

pub use sample_core::CentralTendencyEstimator;
