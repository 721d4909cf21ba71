//! Classical descriptive statistics for numeric samples
//!
//! This crate re-exports the estimator crates and adds a one-shot
//! [`summarize`] driven by a [`SummaryConfig`].
//!
//! - [`sample_location`]: mean, Hodges-Lehmann
//! - [`sample_spread`]: variance, Gini mean difference, central moments
//! - [`sample_quantile`]: nearest-rank quantiles
//! - [`sample_io`]: whitespace-separated sample reader
//!
//! # Example
//!
//! ```rust
//! use sample_stats::prelude::*;
//!
//! let sample = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! assert_eq!(mean(&sample).unwrap(), 3.0);
//! assert_eq!(variance(&sample).unwrap(), 2.5);
//! assert_eq!(quantile(&sample, 0.5).unwrap(), 3.0);
//!
//! let summary = summarize(&sample, &SummaryConfig::default());
//! assert_eq!(summary.hodges_lehmann, Ok(3.0));
//! ```

pub mod config;
pub mod summary;

pub use config::{ConfigError, SummaryConfig};
pub use summary::{summarize, Estimate, MomentEstimate, QuantileEstimate, Summary};

pub use sample_core;
pub use sample_io;
pub use sample_location;
pub use sample_quantile;
pub use sample_spread;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{summarize, Summary, SummaryConfig};
    pub use sample_core::{CentralTendencyEstimator, Error, KnownCenter, Result, ScalarBackend};
    pub use sample_io::{parse_sample, read_sample, ReaderConfig};
    pub use sample_location::{hodges_lehmann, mean, HodgesLehmann, SampleMean};
    pub use sample_quantile::{median, quantile, quantiles, QuantileEstimator, SampleQuantile};
    pub use sample_spread::{
        central_moment, gini_mean_difference, std_dev, variance, CentralMoment,
        GiniMeanDifference, SampleVariance, SpreadEstimator,
    };
}
