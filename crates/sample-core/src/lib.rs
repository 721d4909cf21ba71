//! Core traits and types for sample statistics
//!
//! This crate provides the foundation the estimator crates build upon.
//!
//! # Architecture Overview
//!
//! 1. **Layer 1: Primitives** - Aggregations with a fixed visiting order
//!    (`ComputePrimitives`, `ScalarBackend`)
//! 2. **Layer 2: Kernels** - Per-estimator arithmetic holding primitives
//!    (`StatisticalKernel`)
//! 3. **Layer 3: Estimators** - Input validation and the public API, in the
//!    `sample-location`, `sample-spread` and `sample-quantile` crates
//!
//! # Example
//!
//! ```rust
//! use sample_core::{ComputePrimitives, ScalarBackend};
//!
//! let primitives = ScalarBackend::new();
//! let data = vec![1.0, 2.0, 3.0, 4.0];
//! assert_eq!(primitives.sum(&data), 10.0);
//! ```

pub mod error;
pub mod kernels;
pub mod numeric;
pub mod primitives;
pub mod traits;
pub mod utils;

// Re-export core types
pub use error::{check_min_size, check_non_empty, check_probability, Error, Result};
pub use kernels::StatisticalKernel;
pub use numeric::Numeric;
pub use primitives::{scalar_backend, ComputePrimitives, ScalarBackend};
pub use traits::{CentralTendencyEstimator, KnownCenter};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::{
        CentralTendencyEstimator, ComputePrimitives, KnownCenter, Numeric, Result, ScalarBackend,
        StatisticalKernel,
    };
}
