// SPDX-FileCopyrightText: 2026 infostate contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// State-space module: groups discretization, joint-state merging, and
// probability estimation behind one import path.

pub mod discretize;
pub mod error;
pub mod joint;
pub mod probability;
pub mod trace;

// Unified re-exports so callers can import infostate::states::* ergonomically.
pub use discretize::{normalize_array, round_state};
pub use error::{Result, StateError};
pub use joint::merge_arrays;
pub use probability::ProbabilityState;
