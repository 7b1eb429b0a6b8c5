use infostate::states::{ProbabilityState, merge_arrays, normalize_array, trace};
use ndarray::array;

fn main() {
    // Continuous samples from two coupled variables
    let x = array![1.2, -0.7, 1.2, 0.3, -0.7, 2.4];
    let y = array![3.9, 3.9, 0.2, 0.2, 3.9, 0.2];

    let (x_states, x_count) = normalize_array(&x).unwrap();
    println!("Samples x: {x:?}");
    println!("States  x: {x_states:?} ({x_count} states in range)");

    let dist = ProbabilityState::new(&x).unwrap();
    println!(
        "Distribution of x ({} observed of {} states in range):",
        dist.k, dist.state_count
    );
    for (state, p) in &dist.probabilities {
        println!("  P(state {state}) = {p:.4}");
    }

    // Verify against a manual count
    let n = x.len() as f64;
    for (state, count) in &dist.counts {
        assert_eq!(dist.probability(*state), *count as f64 / n);
    }

    let (joint, joint_count) = merge_arrays(&x, &y).unwrap();
    println!("Joint states: {joint:?} (label counter {joint_count})");

    let joint_dist = ProbabilityState::joint(&x, &y).unwrap();
    println!("Joint distribution over {} observed pairs:", joint_dist.k);
    for (label, p) in &joint_dist.probabilities {
        println!("  P(label {label}) = {p:.4}");
    }

    println!("Positive joint labels:");
    trace::print_state_vector(&joint);
    println!("Positive samples in x:");
    trace::print_sample_vector(&x);
}
