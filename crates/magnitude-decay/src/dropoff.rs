//! Time-decaying dropoff curve.
//!
//! Early in the campaign many weeks remain and the dropoff is steep, so
//! higher tiers get small targets. As the campaign runs out the dropoff
//! flattens towards [`DROPOFF_FLOOR`] and higher tiers are allowed to grow.
//!
//! `dropoff = DROPOFF_FLOOR + DROPOFF_PER_WEEK * inertia`, where inertia is
//! the number of weeks remaining, floored at zero.

use magnitude_core::config::NominationConfig;
use magnitude_core::constants::{DROPOFF_FLOOR, DROPOFF_PER_WEEK};
use magnitude_core::traits::TargetCurve;

/// Weeks remaining in the campaign, floored at zero.
pub fn inertia(weeks_total: u32, weeks_passed: u32) -> u32 {
    weeks_total.saturating_sub(weeks_passed)
}

/// Dropoff for a given inertia.
///
/// # Examples
///
/// ```
/// use magnitude_decay::dropoff::dropoff;
/// assert_eq!(dropoff(0), 2.0);
/// assert!((dropoff(24) - 6.8).abs() < 1e-9);
/// ```
pub fn dropoff(inertia: u32) -> f64 {
    DROPOFF_FLOOR + DROPOFF_PER_WEEK * f64::from(inertia)
}

/// The production [`TargetCurve`] for a point in the campaign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropoffCurve {
    inertia: u32,
    dropoff: f64,
}

impl DropoffCurve {
    /// Curve at `weeks_passed` into a campaign of `weeks_total` weeks.
    pub fn new(weeks_total: u32, weeks_passed: u32) -> Self {
        let inertia = inertia(weeks_total, weeks_passed);
        Self {
            inertia,
            dropoff: dropoff(inertia),
        }
    }

    pub fn from_config(config: &NominationConfig) -> Self {
        Self::new(config.weeks_total, config.weeks_passed)
    }

    pub fn inertia(&self) -> u32 {
        self.inertia
    }
}

impl TargetCurve for DropoffCurve {
    fn dropoff(&self) -> f64 {
        self.dropoff
    }
}
