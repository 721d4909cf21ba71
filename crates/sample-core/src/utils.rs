//! Utility functions for working with data slices

use num_traits::Float;
use std::cmp::Ordering;

/// Ascending order with NaN placed after every other value
///
/// Total over any `PartialOrd` type whose only incomparable values are
/// self-incomparable (NaN), so it is safe to hand to `sort_by`.
pub fn nan_last_cmp<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    if let Some(ordering) = a.partial_cmp(b) {
        return ordering;
    }
    let a_nan = a.partial_cmp(a).is_none();
    let b_nan = b.partial_cmp(b).is_none();
    match (a_nan, b_nan) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        _ => Ordering::Equal,
    }
}

/// Sort a slice in place, ascending, NaN last
pub fn sort_in_place<T: PartialOrd>(data: &mut [T]) {
    data.sort_by(nan_last_cmp);
}

/// Sort data and return a new vector
///
/// Handles NaN values by placing them at the end. The input is left untouched.
///
/// # Examples
///
/// ```rust
/// use sample_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// assert_eq!(data[0], 3.0);
/// ```
pub fn sorted<T: PartialOrd + Copy>(data: &[T]) -> Vec<T> {
    let mut copy = data.to_vec();
    sort_in_place(&mut copy);
    copy
}

/// Median of an ascending slice
///
/// Odd length: the central element. Even length: the mean of the two central
/// elements. `None` for an empty slice.
pub fn median_of_sorted<F: Float>(sorted_data: &[F]) -> Option<F> {
    let n = sorted_data.len();
    if n == 0 {
        return None;
    }
    let mid = n / 2;
    if n % 2 == 1 {
        Some(sorted_data[mid])
    } else {
        let two = F::one() + F::one();
        Some((sorted_data[mid - 1] + sorted_data[mid]) / two)
    }
}

/// Whether a slice is in ascending order (NaN last)
pub fn is_sorted_ascending<T: PartialOrd>(data: &[T]) -> bool {
    data.windows(2)
        .all(|w| nan_last_cmp(&w[0], &w[1]) != Ordering::Greater)
}
