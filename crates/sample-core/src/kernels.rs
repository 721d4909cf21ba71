//! Layer 2: Estimator kernel traits
//!
//! Estimator crates implement their arithmetic in kernels that hold a set of
//! primitives. The estimator structs stay thin wrappers that validate input
//! and delegate here.

use crate::{primitives::ComputePrimitives, Numeric};

/// Base trait for all statistical kernels
pub trait StatisticalKernel<T: Numeric = f64>: Clone + Send + Sync {
    /// The type of primitives used by this kernel
    type Primitives: ComputePrimitives<T>;

    /// Get the primitives used by this kernel
    fn primitives(&self) -> &Self::Primitives;

    /// Name of this kernel for debugging/logging
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
