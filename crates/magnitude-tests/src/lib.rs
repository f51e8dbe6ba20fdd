//! Cross-crate test suite for Magnitude.
//!
//! Scenario tests compare full reports against reference outputs; property
//! tests check the clamping invariants under arbitrary distributions.

pub mod helpers;
