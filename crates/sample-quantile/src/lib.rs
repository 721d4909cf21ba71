//! Nearest-rank quantile estimation
//!
//! The p-quantile of a sample of size n is the element at zero-based index
//! `floor(p·n)` of the sorted sample, clamped so `p = 1` returns the maximum.
//! This is the simplest order-statistic quantile: no interpolation, so the
//! estimate jumps between sample values as `p` changes.
//!
//! Sorting always happens on a private copy; use the `_sorted` methods to
//! skip it when the data is already in ascending order.
//!
//! # Example
//!
//! ```rust
//! use sample_quantile::{quantile, NearestRank, QuantileEstimator, SampleQuantile};
//!
//! let data = vec![5.0, 1.0, 4.0, 2.0, 3.0];
//!
//! assert_eq!(quantile(&data, 0.5).unwrap(), 3.0);
//! assert_eq!(quantile(&data, 1.0).unwrap(), 5.0);
//!
//! let quartiles = NearestRank::new().quantiles(&data, &[0.25, 0.75]).unwrap();
//! assert_eq!(quartiles, vec![2.0, 4.0]);
//!
//! let upper_decile = SampleQuantile::<f64>::new(0.9).unwrap();
//! assert_eq!(upper_decile.estimate(&data).unwrap(), 5.0);
//! ```

pub mod error;
pub mod estimators;
pub mod traits;

// Re-export main types
pub use error::{Error, Result};
pub use estimators::{nearest_rank, nearest_rank_index, NearestRank, SampleQuantile};
pub use traits::QuantileEstimator;

use sample_core::Numeric;

/// Nearest-rank p-quantile of a sample
pub fn quantile<T: Numeric>(data: &[T], p: f64) -> Result<T::Float> {
    NearestRank::new().quantile(data, p)
}

/// Nearest-rank quantiles of a sample for several probabilities
pub fn quantiles<T: Numeric>(data: &[T], ps: &[f64]) -> Result<Vec<T::Float>> {
    NearestRank::new().quantiles(data, ps)
}

/// Nearest-rank median (p = 0.5)
pub fn median<T: Numeric>(data: &[T]) -> Result<T::Float> {
    quantile(data, 0.5)
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Error, NearestRank, QuantileEstimator, Result, SampleQuantile};
}
