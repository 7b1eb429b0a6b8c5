//! Debug helpers for printing vectors while developing against the library.
//! Not part of the contracted interface.

use ndarray::Array1;

/// Print the strictly positive entries of a state vector, one line each.
pub fn print_state_vector(vector: &Array1<i32>) {
    for (i, &value) in vector.iter().enumerate() {
        if value > 0 {
            println!("Val at i={i}, is {value}");
        }
    }
}

/// Print the strictly positive entries of a sample vector, one line each.
pub fn print_sample_vector(vector: &Array1<f64>) {
    for (i, &value) in vector.iter().enumerate() {
        if value > 0.0 {
            println!("Val at i={i}, is {value}");
        }
    }
}
