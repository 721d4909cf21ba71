//! Location estimators for samples
//!
//! - **Mean**: the arithmetic average, efficient but not robust
//! - **Hodges-Lehmann**: median of pairwise averages, robust with breakdown
//!   point ≈ 0.29
//!
//! Both implement [`CentralTendencyEstimator`], so they can be passed as the
//! baseline of derived statistics in `sample-spread`.
//!
//! # Example
//!
//! ```rust
//! use sample_location::{hodges_lehmann, mean, SampleMean};
//! use sample_core::{CentralTendencyEstimator, ScalarBackend};
//!
//! let sample = vec![1.0, 2.0, 3.0, 4.0, 100.0];
//!
//! assert_eq!(mean(&sample).unwrap(), 22.0);
//! // Walsh averages of the four small values dominate the median
//! assert_eq!(hodges_lehmann(&sample).unwrap(), 3.25);
//!
//! let estimator = SampleMean::<f64, _>::new(ScalarBackend::new());
//! assert_eq!(estimator.estimate(&sample).unwrap(), 22.0);
//! ```

pub mod hodges_lehmann;
pub mod kernels;
pub mod mean;

pub use hodges_lehmann::{hodges_lehmann, walsh_averages, HodgesLehmann, HODGES_LEHMANN_BREAKDOWN};
pub use kernels::{MeanKernel, WalshKernel};
pub use mean::{mean, SampleMean};

pub use sample_core::CentralTendencyEstimator;
