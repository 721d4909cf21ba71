//! Property tests for the nearest-rank quantile

use proptest::prelude::*;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use sample_quantile::{median, quantile, quantiles, Error, NearestRank, QuantileEstimator};

fn sample() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1e9f64..1e9, 1..200)
}

proptest! {
    #[test]
    fn quantile_is_a_sample_element(data in sample(), p in 0.0f64..=1.0) {
        let q = quantile(&data, p).unwrap();
        prop_assert!(data.contains(&q));
    }

    #[test]
    fn quantile_is_monotone_in_p(data in sample(), a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(quantile(&data, lo).unwrap() <= quantile(&data, hi).unwrap());
    }

    #[test]
    fn extremes_are_min_and_max(data in sample()) {
        let min = data.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        prop_assert_eq!(quantile(&data, 0.0).unwrap(), min);
        prop_assert_eq!(quantile(&data, 1.0).unwrap(), max);
    }

    #[test]
    fn batch_matches_single(data in sample(), ps in prop::collection::vec(0.0f64..=1.0, 0..10)) {
        let batch = quantiles(&data, &ps).unwrap();
        for (p, q) in ps.iter().zip(batch) {
            prop_assert_eq!(quantile(&data, *p).unwrap(), q);
        }
    }

    #[test]
    fn out_of_range_probability_is_rejected(data in sample(), p in 1.0f64..10.0) {
        let p = p + f64::EPSILON * 4.0;
        let rejected = matches!(quantile(&data, p), Err(Error::InvalidProbability { .. }));
        let rejected_negative = matches!(quantile(&data, -p), Err(Error::InvalidProbability { .. }));
        prop_assert!(rejected);
        prop_assert!(rejected_negative);
    }
}

#[test]
fn test_permutation_does_not_change_quantiles() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let original: Vec<f64> = (0..101).map(|i| (i as f64 * 0.37).sin() * 50.0).collect();
    let mut shuffled = original.clone();
    shuffled.shuffle(&mut rng);

    for p in [0.0, 0.1, 0.25, 0.5, 0.75, 0.9, 1.0] {
        assert_eq!(
            quantile(&original, p).unwrap(),
            quantile(&shuffled, p).unwrap()
        );
    }
}

#[test]
fn test_repeated_calls_are_bit_identical() {
    let data = vec![0.1, 0.7, 0.3, 0.9, 0.5];
    let first = median::<f64>(&data).unwrap();
    let second = median::<f64>(&data).unwrap();
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn test_sorted_entry_point() {
    let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
    let estimator = NearestRank::new();
    assert_eq!(estimator.quantile_sorted(&sorted, 0.5).unwrap(), 3.0);
    assert_eq!(
        estimator.quantiles_sorted(&sorted, &[0.0, 1.0]).unwrap(),
        vec![1.0, 5.0]
    );
}
