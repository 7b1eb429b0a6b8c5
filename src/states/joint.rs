use ndarray::Array1;

use crate::states::discretize::normalize_array;
use crate::states::error::{Result, StateError};

/// Merge two sample vectors into a single joint-state vector.
///
/// Both inputs are discretized independently with [`normalize_array`], and
/// each observed (first, second) state pair is assigned a dense label,
/// starting from 1, in order of first appearance when scanning positions left
/// to right. Two positions receive the same label exactly when their state
/// pairs are equal, and identical inputs always produce identical outputs.
///
/// The returned count is the final value of the label counter, i.e. 1 + the
/// number of distinct pairs observed. Callers size their joint state spaces
/// with this value, so it is returned as-is rather than as the distinct-label
/// count. Two empty inputs yield an empty output and a count of 1, the
/// counter's initial value.
///
/// Inputs of different lengths are rejected with
/// [`StateError::LengthMismatch`]; non-finite samples in either vector with
/// [`StateError::NonFinite`].
pub fn merge_arrays(first: &Array1<f64>, second: &Array1<f64>) -> Result<(Array1<i32>, usize)> {
    if first.len() != second.len() {
        return Err(StateError::LengthMismatch {
            first: first.len(),
            second: second.len(),
        });
    }

    let (first_states, first_count) = normalize_array(first)?;
    let (second_states, second_count) = normalize_array(second)?;

    // 0 marks an unseen pair; real labels start at 1.
    let mut state_map = vec![0i32; first_count * second_count];
    let mut next_label = 1i32;
    let mut output: Vec<i32> = Vec::with_capacity(first.len());

    for (&f, &s) in first_states.iter().zip(second_states.iter()) {
        let pair_index = f as usize + s as usize * first_count;
        if state_map[pair_index] == 0 {
            state_map[pair_index] = next_label;
            next_label = next_label
                .checked_add(1)
                .expect("Too many distinct state pairs to fit into i32");
        }
        output.push(state_map[pair_index]);
    }

    Ok((Array1::from(output), next_label as usize))
}
