// SPDX-FileCopyrightText: 2026 infostate contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use infostate::states::{ProbabilityState, StateError, merge_arrays};
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

#[test]
fn known_two_state_distribution() {
    // [1.0, 1.0, 2.0] discretizes to states [0, 0, 1]
    let dist = ProbabilityState::new(&Array1::from(vec![1.0, 1.0, 2.0])).unwrap();

    assert_eq!(dist.n, 3);
    assert_eq!(dist.k, 2);
    assert_eq!(dist.state_count, 2);
    assert_eq!(dist.states, Array1::from(vec![0, 0, 1]));
    assert_eq!(dist.counts[&0], 2);
    assert_eq!(dist.counts[&1], 1);
    assert_abs_diff_eq!(dist.probability(0), 2.0 / 3.0, epsilon = 1e-15);
    assert_abs_diff_eq!(dist.probability(1), 1.0 / 3.0, epsilon = 1e-15);
}

#[test]
fn probabilities_sum_to_one_on_random_data() {
    let mut rng = StdRng::seed_from_u64(42);
    let normal = Normal::new(0.0, 10.0).unwrap();
    for _ in 0..10 {
        let data: Vec<f64> = (0..1000).map(|_| normal.sample(&mut rng)).collect();
        let dist = ProbabilityState::new(&Array1::from(data)).unwrap();

        let total: f64 = dist.probabilities.values().sum();
        assert_abs_diff_eq!(total, 1.0, epsilon = 1e-12);
        for &p in dist.probabilities.values() {
            assert!(p > 0.0 && p <= 1.0);
        }
    }
}

#[test]
fn uniform_over_four_symbols() {
    let data = Array1::from(vec![0.0, 1.0, 2.0, 3.0, 0.0, 1.0, 2.0, 3.0]);
    let dist = ProbabilityState::new(&data).unwrap();

    assert_eq!(dist.k, 4);
    for state in 0..4 {
        assert_abs_diff_eq!(dist.probability(state), 0.25, epsilon = 1e-15);
    }
}

#[test]
fn sparse_states_keep_mapping_sparse_but_range_wide() {
    // Two observed states with 99 unobserved integers between them: the
    // mapping stays two entries while the contiguous range is 101 wide.
    let data = Array1::from(vec![0.0, 100.0]);
    let dist = ProbabilityState::new(&data).unwrap();

    assert_eq!(dist.state_count, 101);
    assert_eq!(dist.k, 2);
    assert_eq!(dist.probabilities.len(), 2);
    assert_abs_diff_eq!(dist.probability(0), 0.5, epsilon = 1e-15);
    assert_abs_diff_eq!(dist.probability(100), 0.5, epsilon = 1e-15);
    assert_eq!(dist.probability(50), 0.0);
}

#[test]
fn wide_state_ranges_still_count_sparsely() {
    // Range far beyond the dense counting buffer
    let data = Array1::from(vec![0.0, 10_000.0, 10_000.0, 0.0, 5_000.0]);
    let dist = ProbabilityState::new(&data).unwrap();

    assert_eq!(dist.state_count, 10_001);
    assert_eq!(dist.k, 3);
    assert_abs_diff_eq!(dist.probability(0), 0.4, epsilon = 1e-15);
    assert_abs_diff_eq!(dist.probability(10_000), 0.4, epsilon = 1e-15);
    assert_abs_diff_eq!(dist.probability(5_000), 0.2, epsilon = 1e-15);
}

#[test]
fn empty_input_is_rejected() {
    let empty = Array1::<f64>::zeros(0);
    assert_eq!(
        ProbabilityState::new(&empty).unwrap_err(),
        StateError::EmptyInput
    );
    assert_eq!(
        ProbabilityState::joint(&empty, &empty).unwrap_err(),
        StateError::EmptyInput
    );
}

#[test]
fn non_finite_input_is_rejected() {
    let data = Array1::from(vec![1.0, f64::NAN]);
    let err = ProbabilityState::new(&data).unwrap_err();
    assert!(matches!(err, StateError::NonFinite { index: 1, .. }));
}

#[test]
fn joint_distribution_counts_merged_labels() {
    let first = Array1::from(vec![0.0, 0.0, 1.0, 1.0]);
    let second = Array1::from(vec![0.0, 1.0, 0.0, 1.0]);
    let dist = ProbabilityState::joint(&first, &second).unwrap();

    let (labels, merged_count) = merge_arrays(&first, &second).unwrap();
    assert_eq!(dist.states, labels);
    assert_eq!(dist.state_count, merged_count);

    assert_eq!(dist.k, 4);
    for label in 1..=4 {
        assert_abs_diff_eq!(dist.probability(label), 0.25, epsilon = 1e-15);
    }
    let total: f64 = dist.probabilities.values().sum();
    assert_abs_diff_eq!(total, 1.0, epsilon = 1e-15);
}

#[test]
fn joint_rejects_length_mismatch() {
    let first = Array1::from(vec![1.0, 2.0, 3.0]);
    let second = Array1::from(vec![1.0]);
    assert_eq!(
        ProbabilityState::joint(&first, &second).unwrap_err(),
        StateError::LengthMismatch {
            first: 3,
            second: 1
        }
    );
}

#[test]
fn map_probs_agrees_with_per_state_lookup() {
    let mut rng = StdRng::seed_from_u64(7);
    let data: Vec<f64> = (0..300).map(|_| rng.gen_range(-5.0..5.0)).collect();
    let dist = ProbabilityState::new(&Array1::from(data)).unwrap();

    let per_sample = dist.map_probs();
    assert_eq!(per_sample.len(), dist.n);
    for (i, &state) in dist.states.iter().enumerate() {
        assert_abs_diff_eq!(per_sample[i], dist.probability(state), epsilon = 1e-15);
    }
}

#[test]
fn negative_samples_produce_zero_based_states() {
    let data = Array1::from(vec![-10.0, -9.0, -8.0]);
    let dist = ProbabilityState::new(&data).unwrap();

    assert_eq!(*dist.states.iter().min().unwrap(), 0);
    assert_eq!(dist.state_count, 3);
}
