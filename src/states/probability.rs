use ndarray::Array1;
use std::collections::HashMap;

use crate::states::discretize::normalize_array;
use crate::states::error::{Result, StateError};
use crate::states::joint::merge_arrays;

/// Empirical probability distribution of a discretized sample vector.
///
/// Construction discretizes the input, counts how often each state occurs,
/// and stores the probability mass `count / n` per observed state. The
/// mapping is sparse: its keys are exactly the distinct observed states, not
/// the full contiguous range, so `k` and `state_count` differ whenever some
/// integer inside the range is never observed.
///
/// All fields are plain owned data and nothing is mutated after
/// construction, so one instance can be shared across threads for reading.
#[derive(Debug)]
pub struct ProbabilityState {
    /// State codes, one per input sample
    pub states: Array1<i32>,
    /// Counts per observed state
    pub counts: HashMap<i32, usize>,
    /// Probability mass per observed state: count / n
    pub probabilities: HashMap<i32, f64>,
    /// Total number of observations
    pub n: usize,
    /// Number of distinct observed states
    pub k: usize,
    /// State-space size reported by the producing operation: the contiguous
    /// range size `max - min + 1` for [`ProbabilityState::new`], the final
    /// label counter for [`ProbabilityState::joint`]
    pub state_count: usize,
}

impl ProbabilityState {
    /// Estimate the marginal distribution of one sample vector.
    ///
    /// The input is discretized with [`normalize_array`], occurrences of each
    /// state are counted, and each count is divided by the number of samples.
    ///
    /// Empty input is rejected with [`StateError::EmptyInput`]: an empty
    /// mapping cannot satisfy the contract that probabilities sum to 1.0.
    /// Non-finite samples are rejected with [`StateError::NonFinite`].
    pub fn new(samples: &Array1<f64>) -> Result<Self> {
        if samples.is_empty() {
            return Err(StateError::EmptyInput);
        }
        let (states, state_count) = normalize_array(samples)?;
        Ok(Self::from_states(states, state_count))
    }

    /// Estimate the joint distribution of two sample vectors.
    ///
    /// The vectors are merged with [`merge_arrays`] and the resulting joint
    /// labels are counted exactly like marginal states. `state_count` carries
    /// the merge counter convention (1 + distinct pairs observed) and the
    /// mapping keys are the 1-based joint labels.
    pub fn joint(first: &Array1<f64>, second: &Array1<f64>) -> Result<Self> {
        if first.is_empty() && second.is_empty() {
            return Err(StateError::EmptyInput);
        }
        let (labels, state_count) = merge_arrays(first, second)?;
        Ok(Self::from_states(labels, state_count))
    }

    fn from_states(states: Array1<i32>, state_count: usize) -> Self {
        let n = states.len();
        let counts = count_states(
            states
                .as_slice()
                .expect("ndarray Array1 should be contiguous"),
        );
        let k = counts.len();
        let n_f = n as f64;
        let mut probabilities = HashMap::with_capacity(k);
        for (&state, &count) in counts.iter() {
            probabilities.insert(state, count as f64 / n_f);
        }
        Self {
            states,
            counts,
            probabilities,
            n,
            k,
            state_count,
        }
    }

    /// Probability of a single state; 0.0 if it was never observed.
    pub fn probability(&self, state: i32) -> f64 {
        self.probabilities.get(&state).copied().unwrap_or(0.0)
    }

    /// Map each sample to the probability of its state.
    pub fn map_probs(&self) -> Array1<f64> {
        self.states.mapv(|v| self.probabilities[&v])
    }
}

/// Count the occurrences of each state code in a slice.
///
/// The result is keyed by observed state only. A dense buffer is used when
/// the codes are non-negative and span a small range (always the case for
/// freshly normalized or merged vectors of moderate width), with a HashMap
/// fallback for wide or negative ranges.
fn count_states(codes: &[i32]) -> HashMap<i32, usize> {
    let n = codes.len();
    if n == 0 {
        return HashMap::new();
    }

    let mut min_v = i32::MAX;
    let mut max_v = i32::MIN;
    for &v in codes.iter() {
        if v < min_v {
            min_v = v;
        }
        if v > max_v {
            max_v = v;
        }
    }

    // Dense counting pays off only while the value range stays small.
    const MAX_DENSE_RANGE: i32 = 4096;
    if min_v >= 0 {
        let range = max_v - min_v; // since min_v >= 0, this won't underflow
        if range <= MAX_DENSE_RANGE {
            let len = (range as usize) + 1;
            let mut dense = vec![0usize; len];
            for &v in codes.iter() {
                dense[(v - min_v) as usize] += 1;
            }
            let mut map = HashMap::with_capacity(len);
            for (i, &cnt) in dense.iter().enumerate() {
                if cnt != 0 {
                    map.insert(min_v + (i as i32), cnt);
                }
            }
            return map;
        }
    }

    // Fallback: generic HashMap counting
    let mut frequency_map = HashMap::new();
    for &value in codes.iter() {
        *frequency_map.entry(value).or_insert(0) += 1;
    }
    frequency_map
}
