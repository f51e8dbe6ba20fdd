//! # magnitude-decay: Time-decaying target curve and nomination quotas.
//!
//! - **Dropoff curve**: the per-level decay base starts steep
//!   (`2 + 0.2 * weeks_remaining`) and flattens to 2.0 as the campaign ends.
//! - **Targets**: the target population at level `n` is
//!   `floor(verified / dropoff^n)`.
//! - **Nominations**: the gap between target and current exclusive count is
//!   split across the assembly with floor division, never going negative.

pub mod dropoff;
pub mod nomination;

pub use dropoff::DropoffCurve;
pub use nomination::{calculate_nominations, nominate_tiers, Nomination, TierNomination};
