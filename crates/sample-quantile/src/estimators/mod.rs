//! Quantile estimator implementations

mod nearest_rank;

pub use nearest_rank::{nearest_rank_index, NearestRank, SampleQuantile};

/// Create a nearest-rank quantile estimator
pub fn nearest_rank() -> NearestRank {
    NearestRank::new()
}
