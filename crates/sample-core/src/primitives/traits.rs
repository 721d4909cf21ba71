//! Generic compute primitives trait

use crate::numeric::Numeric;
use num_traits::{Float, One, Zero};

/// Computational primitives with generic numeric support
///
/// Implementations may override individual operations, but must keep the
/// documented visiting order: estimators rely on it for reproducible rounding.
pub trait ComputePrimitives<T: Numeric = f64>: Clone + Send + Sync {
    /// Get the name of this backend
    fn backend_name(&self) -> &'static str;

    /// Sum all elements, left to right
    fn sum(&self, data: &[T]) -> T::Float {
        data.iter()
            .map(|&x| x.to_float())
            .fold(<T::Float as Zero>::zero(), |acc, x| acc + x)
    }

    /// Compute Σ(x - center)²
    fn sum_squared_deviations(&self, data: &[T], center: T::Float) -> T::Float {
        data.iter()
            .map(|&x| {
                let diff = x.to_float() - center;
                diff * diff
            })
            .fold(<T::Float as Zero>::zero(), |acc, x| acc + x)
    }

    /// Compute Σ(x - center)^k
    fn sum_centered_powers(&self, data: &[T], center: T::Float, k: i32) -> T::Float {
        data.iter()
            .map(|&x| (x.to_float() - center).powi(k))
            .fold(<T::Float as Zero>::zero(), |acc, x| acc + x)
    }

    /// Compute Σ_{i<j} |x_i - x_j|
    ///
    /// Pairs are visited in `(i, j)` lexicographic order; each unordered pair
    /// exactly once.
    fn sum_abs_pairwise_differences(&self, data: &[T]) -> T::Float {
        let mut total = <T::Float as Zero>::zero();
        for (i, &xi) in data.iter().enumerate() {
            let xi = xi.to_float();
            let mut row = <T::Float as Zero>::zero();
            for &xj in &data[i + 1..] {
                row += (xi - xj.to_float()).abs();
            }
            total += row;
        }
        total
    }

    /// Collect (x_i + x_j) / 2 for every i < j
    ///
    /// Each term is halved before adding, so two finite values never
    /// overflow to infinity.
    fn pairwise_averages(&self, data: &[T]) -> Vec<T::Float> {
        let n = data.len();
        let mut averages = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        let one = <T::Float as One>::one();
        let two = one + one;
        for (i, &xi) in data.iter().enumerate() {
            let xi = xi.to_float();
            for &xj in &data[i + 1..] {
                averages.push(xi / two + xj.to_float() / two);
            }
        }
        averages
    }
}
