//! Generic numeric trait hierarchy for sample statistics
//!
//! This module provides the type foundation for computing estimators over
//! samples of different element types (f64, f32, i32, u32) without imposing
//! any computational infrastructure.
//!
//! # Design Philosophy
//!
//! - **Pure type constraints**: Defines relationships between numeric types
//! - **No computational layer**: All computation happens through `ComputePrimitives`
//! - **Type safety**: Can't accidentally mix numeric types

use crate::{Error, Result};
use bytemuck::Pod;
use num_traits::{Float, Num, ToPrimitive};
use std::fmt::Debug;
use std::ops::AddAssign;

/// Base trait for numeric types that can be used as sample elements
pub trait Numeric: Pod + Num + Copy + PartialOrd + Debug + Send + Sync {
    /// Type used for results and intermediate floating-point work
    ///
    /// Integer samples use f64 so sums don't overflow.
    type Float: Float
        + From<Self>
        + Into<f64>
        + num_traits::NumCast
        + AddAssign
        + Debug
        + Send
        + Sync;

    /// Convert to floating point for statistical operations
    fn to_float(self) -> Self::Float;

    /// Check if value is finite (always true for integers)
    fn is_finite(&self) -> bool;

    /// Convert to f64 (for operations that need f64)
    fn to_f64(&self) -> f64;
}

impl Numeric for f64 {
    type Float = f64;

    fn to_float(self) -> f64 {
        self
    }

    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }

    fn to_f64(&self) -> f64 {
        *self
    }
}

impl Numeric for f32 {
    type Float = f32;

    fn to_float(self) -> f32 {
        self
    }

    fn is_finite(&self) -> bool {
        f32::is_finite(*self)
    }

    fn to_f64(&self) -> f64 {
        f64::from(*self)
    }
}

impl Numeric for i32 {
    type Float = f64;

    fn to_float(self) -> f64 {
        f64::from(self)
    }

    fn is_finite(&self) -> bool {
        true
    }

    fn to_f64(&self) -> f64 {
        f64::from(*self)
    }
}

impl Numeric for u32 {
    type Float = f64;

    fn to_float(self) -> f64 {
        f64::from(self)
    }

    fn is_finite(&self) -> bool {
        true
    }

    fn to_f64(&self) -> f64 {
        f64::from(*self)
    }
}

/// Convert a count or constant into a sample's float type
///
/// Returns `Error::Computation` instead of panicking when the value cannot be
/// represented (never happens for f64/f32 with realistic sample sizes).
pub fn cast<F: num_traits::NumCast, V: ToPrimitive + Debug + Copy>(value: V) -> Result<F> {
    <F as num_traits::NumCast>::from(value)
        .ok_or_else(|| Error::conversion(&format!("{value:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_float() {
        assert_eq!(2.5f64.to_float(), 2.5);
        assert_eq!(2.5f32.to_float(), 2.5f32);
        assert_eq!((-3i32).to_float(), -3.0f64);
        assert_eq!(7u32.to_float(), 7.0f64);
    }

    #[test]
    fn test_is_finite() {
        assert!(Numeric::is_finite(&1.0f64));
        assert!(!Numeric::is_finite(&f64::NAN));
        assert!(!Numeric::is_finite(&f32::INFINITY));
        assert!(Numeric::is_finite(&i32::MAX));
    }

    #[test]
    fn test_cast() {
        let n: f64 = cast(5usize).unwrap();
        assert_eq!(n, 5.0);
        let half: f32 = cast(0.5f64).unwrap();
        assert_eq!(half, 0.5f32);
    }
}
