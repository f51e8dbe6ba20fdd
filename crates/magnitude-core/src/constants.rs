//! Campaign constants. All member counts are whole members.

use chrono::NaiveDate;

/// Name of the base tier. It holds the whole verified population and is
/// never reduced by a higher tier.
pub const BASE_TIER_NAME: &str = "Verified";

/// Number of magnitude tiers above the base tier.
pub const MAGNITUDE_TIER_COUNT: u32 = 9;

/// Size of the assembly of leaders and moderators issuing nominations.
pub const DEFAULT_ASSEMBLY_SIZE: u64 = 7;

/// Length of the campaign in weeks.
pub const DEFAULT_WEEKS_TOTAL: u32 = 24;

/// Weeks elapsed since [`CAMPAIGN_START`].
pub const DEFAULT_WEEKS_PASSED: u32 = 0;

/// First day of the nomination campaign (Monday, 17 March 2025).
pub const CAMPAIGN_START: NaiveDate = match NaiveDate::from_ymd_opt(2025, 3, 17) {
    Some(date) => date,
    None => panic!("invalid campaign start date"),
};

/// Lowest dropoff, reached once no campaign weeks remain.
pub const DROPOFF_FLOOR: f64 = 2.0;

/// Dropoff added per remaining campaign week.
pub const DROPOFF_PER_WEEK: f64 = 0.2;

/// Cumulative member counts, base tier first.
///
/// Each magnitude count includes every member at that magnitude or above,
/// so `Magnitude 1.0` counts holders of 1.0 through 9.0.
pub const DEFAULT_DISTRIBUTION: [(&str, u64); 1 + MAGNITUDE_TIER_COUNT as usize] = [
    (BASE_TIER_NAME, 46_349),
    ("Magnitude 1.0", 996),
    ("Magnitude 2.0", 32),
    ("Magnitude 3.0", 1),
    ("Magnitude 4.0", 0),
    ("Magnitude 5.0", 0),
    ("Magnitude 6.0", 0),
    ("Magnitude 7.0", 0),
    ("Magnitude 8.0", 0),
    ("Magnitude 9.0", 0),
];

/// Display name of a magnitude tier, e.g. `Magnitude 3.0` for level 3.
///
/// # Examples
///
/// ```
/// use magnitude_core::constants::magnitude_tier_name;
/// assert_eq!(magnitude_tier_name(3), "Magnitude 3.0");
/// ```
pub fn magnitude_tier_name(level: u32) -> String {
    format!("Magnitude {level}.0")
}
