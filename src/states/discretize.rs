use ndarray::Array1;

use crate::states::error::{Result, StateError};

/// Round a sample value to its integer state.
///
/// Positive values are truncated after adding 0.5, non-positive values after
/// subtracting 0.5, so halves round away from zero on both sides. A single
/// +0.5 adjustment would truncate -1.0 + 0.5 = -0.5 toward zero and collapse
/// it with 0; Hanchuan Peng's MutualInfo MATLAB toolbox introduced the
/// two-sided rule to keep -1 and 1 symmetric, and downstream discrete
/// estimators depend on the resulting state assignment, so the rule is kept
/// exactly. Zero takes the non-positive branch.
///
/// Values whose rounded magnitude exceeds the `i32` range saturate at the
/// `i32` bounds.
#[inline]
pub fn round_state(value: f64) -> i32 {
    if value > 0.0 {
        (value + 0.5) as i32
    } else {
        (value - 0.5) as i32
    }
}

/// Discretize a sample vector into zero-based integer states.
///
/// Each sample is rounded with [`round_state`], the rounded vector is shifted
/// so that its minimum becomes 0, and the size of the contiguous state range
/// `max - min + 1` is returned alongside. The range size includes unobserved
/// integers strictly between the rounded min and max, so it can exceed the
/// number of distinct states actually present.
///
/// An empty input yields an empty state vector and a range size of 0.
/// Non-finite samples are rejected with [`StateError::NonFinite`].
pub fn normalize_array(input: &Array1<f64>) -> Result<(Array1<i32>, usize)> {
    if input.is_empty() {
        return Ok((Array1::zeros(0), 0));
    }

    if !input[0].is_finite() {
        return Err(StateError::NonFinite {
            index: 0,
            value: input[0],
        });
    }

    // The first element seeds the running extrema with its own rounded value.
    let seed = round_state(input[0]);
    let mut min_val = seed;
    let mut max_val = seed;
    let mut states: Vec<i32> = Vec::with_capacity(input.len());
    states.push(seed);

    for (index, &value) in input.iter().enumerate().skip(1) {
        if !value.is_finite() {
            return Err(StateError::NonFinite { index, value });
        }
        let state = round_state(value);
        if state < min_val {
            min_val = state;
        }
        if state > max_val {
            max_val = state;
        }
        states.push(state);
    }

    for state in states.iter_mut() {
        *state -= min_val;
    }

    // Widen before subtracting; the rounded span may not fit in i32.
    let state_count = (max_val as i64 - min_val as i64 + 1) as usize;
    Ok((Array1::from(states), state_count))
}
