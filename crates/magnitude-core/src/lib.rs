//! # magnitude-core
//! Foundation types for the Magnitude nomination planner: tier
//! distributions, campaign configuration, and the cumulative-to-exclusive
//! count derivation.

pub mod config;
pub mod constants;
pub mod error;
pub mod exclusive;
pub mod traits;
pub mod types;

pub use crate::config::NominationConfig;
pub use exclusive::calculate_exclusive_counts;
pub use traits::TargetCurve;
pub use types::{Distribution, TierCount};
