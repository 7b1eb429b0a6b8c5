//! Error types for state estimation.
//!
//! Every failure is a precondition violation reported synchronously; there
//! are no retries and no partial results.

use thiserror::Error;

/// Error type for discretization, joint-state merging, and probability
/// estimation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    /// The two inputs to a joint-state operation have different lengths.
    #[error("input vectors differ in length: first has {first} samples, second has {second}")]
    LengthMismatch { first: usize, second: usize },

    /// A probability distribution was requested for a zero-length vector.
    #[error("cannot estimate a distribution from an empty sample vector")]
    EmptyInput,

    /// An input sample is NaN or infinite.
    #[error("non-finite sample {value} at index {index}")]
    NonFinite { index: usize, value: f64 },
}

/// Result type alias using [`StateError`].
pub type Result<T> = std::result::Result<T, StateError>;
