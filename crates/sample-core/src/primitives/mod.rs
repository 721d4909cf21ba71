//! Layer 1: Compute primitives
//!
//! Low-level aggregation operations that estimator kernels build upon.
//! Every operation visits elements in a fixed order, so repeated calls on the
//! same slice produce bit-identical results.

mod scalar;
mod traits;

pub use scalar::ScalarBackend;
pub use traits::ComputePrimitives;

/// Get the scalar backend
pub fn scalar_backend() -> ScalarBackend {
    ScalarBackend::new()
}
