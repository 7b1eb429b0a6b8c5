// SPDX-FileCopyrightText: 2026 infostate contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # infostate
//!
//! Discrete state estimation for information-theoretic measures. Continuous
//! sample vectors are discretized into zero-based integer state vectors,
//! which in turn feed empirical probability mass estimates. A companion merge
//! operation computes the joint state of two vectors so that joint and
//! conditional distributions can be estimated the same way.
//!
//! ## Quick Start
//!
//! ```rust
//! use infostate::states::{ProbabilityState, merge_arrays, normalize_array};
//! use ndarray::array;
//!
//! // Discretize continuous samples into zero-based integer states
//! let (states, state_count) = normalize_array(&array![-1.0, 0.0, 1.0, 1.0]).unwrap();
//! assert_eq!(states.to_vec(), vec![0, 1, 2, 2]);
//! assert_eq!(state_count, 3);
//!
//! // Estimate the empirical distribution of one variable
//! let dist = ProbabilityState::new(&array![1.0, 1.0, 2.0]).unwrap();
//! assert_eq!(dist.probability(0), 2.0 / 3.0);
//! assert_eq!(dist.state_count, 2);
//!
//! // Joint state of two variables, labels assigned in first-seen order
//! let (joint, joint_count) =
//!     merge_arrays(&array![0.0, 0.0, 1.0, 1.0], &array![0.0, 1.0, 0.0, 1.0]).unwrap();
//! assert_eq!(joint.to_vec(), vec![1, 2, 3, 4]);
//! assert_eq!(joint_count, 5); // final label counter, 1 + distinct pairs
//! ```
//!
//! ## Discretization policy
//!
//! Rounding is asymmetric around zero: positive samples truncate after
//! adding 0.5, non-positive samples after subtracting 0.5, following the
//! convention of Hanchuan Peng's MutualInfo MATLAB toolbox. Discrete
//! estimators built on top of these state vectors depend on that exact
//! assignment, so the rule is part of the contract, not an implementation
//! detail. See [`states::discretize::round_state`].
//!
//! ## Scope
//!
//! This crate is the state-space layer only. Entropy, mutual information,
//! and other measures are downstream consumers of the state vectors and
//! probability mappings produced here.
//!
//! All operations are pure and synchronous: they allocate their own outputs,
//! touch no global state, and can run concurrently on disjoint inputs
//! without coordination.

pub mod states;
