//! Shared test helpers for scenario and property tests.

use magnitude_core::config::NominationConfig;
use magnitude_core::constants::{magnitude_tier_name, BASE_TIER_NAME};
use magnitude_core::types::Distribution;

/// Cumulative distribution from raw counts, base tier first.
///
/// Level 0 is named `Verified`, level `n` is named `Magnitude n.0`.
pub fn cumulative(counts: &[u64]) -> Distribution {
    Distribution::from_pairs(counts.iter().enumerate().map(|(level, &count)| {
        let name = if level == 0 {
            BASE_TIER_NAME.to_string()
        } else {
            magnitude_tier_name(level as u32)
        };
        (name, count)
    }))
}

/// Default configuration at `weeks_passed` into the campaign.
pub fn config_at_week(weeks_passed: u32) -> NominationConfig {
    NominationConfig {
        weeks_passed,
        ..NominationConfig::default()
    }
}

/// Configuration with a custom distribution and assembly.
pub fn config_with(counts: &[u64], assembly_size: u64, weeks_passed: u32) -> NominationConfig {
    NominationConfig {
        distribution: cumulative(counts),
        assembly_size,
        weeks_passed,
        ..NominationConfig::default()
    }
}
