//! Cumulative-to-exclusive tier counts.
//!
//! A cumulative count at level `n` includes every member at level `n` or
//! above. The exclusive count keeps only members whose highest tier is `n`:
//!
//! - exclusive(top) = cumulative(top)
//! - exclusive(n) = cumulative(n) - cumulative(n + 1), for 1 <= n < top
//! - exclusive(0) = cumulative(0)
//!
//! The base tier is the verified population as a whole, so no higher tier
//! is subtracted from it.

use tracing::warn;

use crate::types::{Distribution, TierCount};

/// Derive exclusive counts from a cumulative distribution.
///
/// The output has the same tiers in the same order. A tier whose cumulative
/// count is smaller than the next tier's is clamped to 0 and logged.
///
/// # Examples
///
/// ```
/// use magnitude_core::exclusive::calculate_exclusive_counts;
/// use magnitude_core::types::Distribution;
///
/// let cumulative = Distribution::from_pairs([
///     ("Verified", 100),
///     ("Magnitude 1.0", 10),
///     ("Magnitude 2.0", 3),
/// ]);
/// let exclusive = calculate_exclusive_counts(&cumulative);
/// assert_eq!(exclusive.counts(), vec![100, 7, 3]);
/// ```
pub fn calculate_exclusive_counts(cumulative: &Distribution) -> Distribution {
    let tiers = cumulative.tiers();
    let Some(base) = tiers.first() else {
        return Distribution::default();
    };

    let mut counts = vec![0u64; tiers.len()];
    counts[0] = base.count;

    // Walk from the top tier down so each tier sees its next-higher neighbour.
    let mut higher: Option<&TierCount> = None;
    for level in (1..tiers.len()).rev() {
        let tier = &tiers[level];
        counts[level] = match higher {
            None => tier.count,
            Some(higher) => exclusive_below(tier, higher),
        };
        higher = Some(tier);
    }

    tiers
        .iter()
        .zip(counts)
        .map(|(tier, count)| TierCount::new(tier.name.clone(), count))
        .collect::<Vec<_>>()
        .into()
}

fn exclusive_below(tier: &TierCount, higher: &TierCount) -> u64 {
    tier.count.checked_sub(higher.count).unwrap_or_else(|| {
        warn!(
            tier = %tier.name,
            cumulative = tier.count,
            higher_tier = %higher.name,
            higher_cumulative = higher.count,
            "cumulative count below next tier, clamping exclusive count to 0"
        );
        0
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::default_distribution;
    use proptest::prelude::*;

    fn cumulative(counts: &[u64]) -> Distribution {
        Distribution::from_pairs(
            counts
                .iter()
                .enumerate()
                .map(|(level, &count)| (format!("Tier {level}"), count)),
        )
    }

    #[test]
    fn default_distribution_exclusive_counts() {
        let exclusive = calculate_exclusive_counts(&default_distribution());
        assert_eq!(
            exclusive.counts(),
            vec![46_349, 964, 31, 1, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn names_and_order_preserved() {
        let input = default_distribution();
        let exclusive = calculate_exclusive_counts(&input);
        let in_names: Vec<_> = input.iter().map(|t| t.name.as_str()).collect();
        let out_names: Vec<_> = exclusive.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(in_names, out_names);
    }

    #[test]
    fn base_tier_is_not_reduced() {
        // Verified is the whole population, not a tier below Magnitude 1.0.
        let exclusive = calculate_exclusive_counts(&cumulative(&[50, 40, 10]));
        assert_eq!(exclusive.base().unwrap().count, 50);
    }

    #[test]
    fn top_tier_keeps_cumulative_count() {
        let exclusive = calculate_exclusive_counts(&cumulative(&[50, 40, 10, 4]));
        assert_eq!(exclusive.counts(), vec![50, 30, 6, 4]);
    }

    #[test]
    fn inconsistent_input_clamps_to_zero() {
        // Magnitude 2 claims more members than Magnitude 1.
        let exclusive = calculate_exclusive_counts(&cumulative(&[100, 5, 9, 2]));
        assert_eq!(exclusive.counts(), vec![100, 0, 7, 2]);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let exclusive = calculate_exclusive_counts(&Distribution::default());
        assert!(exclusive.is_empty());
    }

    #[test]
    fn base_only_is_unchanged() {
        let exclusive = calculate_exclusive_counts(&cumulative(&[42]));
        assert_eq!(exclusive.counts(), vec![42]);
    }

    #[test]
    fn single_magnitude_tier() {
        let exclusive = calculate_exclusive_counts(&cumulative(&[42, 7]));
        assert_eq!(exclusive.counts(), vec![42, 7]);
    }

    fn non_increasing() -> impl Strategy<Value = Vec<u64>> {
        prop::collection::vec(0u64..1_000_000, 1..12).prop_map(|mut v| {
            v.sort_unstable_by(|a, b| b.cmp(a));
            v
        })
    }

    proptest! {
        #[test]
        fn magnitudes_telescope_to_first_magnitude(
            base in 0u64..10_000_000,
            mags in non_increasing(),
        ) {
            let mut counts = vec![base];
            counts.extend(&mags);
            let exclusive = calculate_exclusive_counts(&cumulative(&counts));
            let sum: u64 = exclusive.magnitudes().iter().map(|t| t.count).sum();
            prop_assert_eq!(sum, mags[0]);
        }

        #[test]
        fn deterministic(counts in prop::collection::vec(0u64..1_000_000, 0..12)) {
            let input = cumulative(&counts);
            prop_assert_eq!(
                calculate_exclusive_counts(&input),
                calculate_exclusive_counts(&input)
            );
        }

        #[test]
        fn exclusive_never_exceeds_cumulative(
            counts in prop::collection::vec(0u64..1_000_000, 0..12),
        ) {
            let exclusive = calculate_exclusive_counts(&cumulative(&counts));
            prop_assert_eq!(exclusive.len(), counts.len());
            for (out, &input) in exclusive.iter().zip(&counts) {
                prop_assert!(out.count <= input);
            }
        }
    }
}
