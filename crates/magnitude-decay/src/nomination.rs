//! Nomination quotas per tier.
//!
//! For each magnitude tier the assembly has to close the gap between the
//! curve's target and the tier's current exclusive population. The gap is
//! split evenly across assembly members with floor division. A tier already
//! at or above its target asks for nothing: quotas are never negative.

use std::num::NonZeroU64;

use magnitude_core::types::Distribution;
use magnitude_core::traits::TargetCurve;
use serde::Serialize;
use tracing::debug;

/// Result of the nomination calculation for one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Nomination {
    /// Desired population at this tier.
    pub target: u64,
    /// `target - current`; negative when the tier is over target.
    pub nominations_total: i64,
    /// Nominations each assembly member must issue, floored at zero.
    pub nominations_per_member: u64,
}

/// A [`Nomination`] tagged with the tier it was computed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierNomination {
    pub level: u32,
    pub name: String,
    /// Current exclusive population of the tier.
    pub current: u64,
    #[serde(flatten)]
    pub nomination: Nomination,
}

/// Target and per-member quota for the tier at `level`.
///
/// `verified` is the base-tier population and `current` the tier's exclusive
/// count.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroU64;
/// use magnitude_decay::{calculate_nominations, DropoffCurve};
///
/// let curve = DropoffCurve::new(24, 0);
/// let assembly = NonZeroU64::new(7).unwrap();
/// let n = calculate_nominations(46_349, 964, 1, assembly, &curve);
/// assert_eq!(n.target, 6_816);
/// assert_eq!(n.nominations_per_member, 836);
/// ```
pub fn calculate_nominations<C: TargetCurve + ?Sized>(
    verified: u64,
    current: u64,
    level: u32,
    assembly: NonZeroU64,
    curve: &C,
) -> Nomination {
    let target = curve.target(verified, level);
    let nominations_total = signed(target).saturating_sub(signed(current));
    // Floor division, then clamp: a surplus never turns into negative quotas.
    let nominations_per_member = u64::try_from(nominations_total)
        .map(|gap| gap / assembly.get())
        .unwrap_or(0);

    debug!(
        level,
        verified,
        current,
        target,
        nominations_total,
        nominations_per_member,
        "tier nomination computed"
    );

    Nomination {
        target,
        nominations_total,
        nominations_per_member,
    }
}

/// Apply [`calculate_nominations`] to every magnitude tier of an exclusive
/// distribution, using the base tier as the verified population.
///
/// Returns an empty list when the distribution has no base tier.
pub fn nominate_tiers<C: TargetCurve + ?Sized>(
    exclusive: &Distribution,
    assembly: NonZeroU64,
    curve: &C,
) -> Vec<TierNomination> {
    let Some(base) = exclusive.base() else {
        return Vec::new();
    };

    exclusive
        .magnitudes()
        .iter()
        .zip(1u32..)
        .map(|(tier, level)| TierNomination {
            level,
            name: tier.name.clone(),
            current: tier.count,
            nomination: calculate_nominations(base.count, tier.count, level, assembly, curve),
        })
        .collect()
}

fn signed(count: u64) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}
