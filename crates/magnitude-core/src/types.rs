//! Tier and distribution types.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_DISTRIBUTION;

/// A named tier and a member count.
///
/// Whether `count` is cumulative or exclusive depends on the
/// [`Distribution`] holding it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TierCount {
    pub name: String,
    pub count: u64,
}

impl TierCount {
    pub fn new(name: impl Into<String>, count: u64) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Ordered tier counts, base tier (level 0) first.
///
/// A tier's level is its index. The type carries no cumulative/exclusive
/// marker; [`calculate_exclusive_counts`](crate::exclusive::calculate_exclusive_counts)
/// maps the former to the latter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distribution(Vec<TierCount>);

impl Distribution {
    /// Build from `(name, count)` pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use magnitude_core::types::Distribution;
    /// let dist = Distribution::from_pairs([("Verified", 10), ("Magnitude 1.0", 2)]);
    /// assert_eq!(dist.len(), 2);
    /// assert_eq!(dist.base().unwrap().count, 10);
    /// ```
    pub fn from_pairs<N, I>(pairs: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, u64)>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(name, count)| TierCount::new(name, count))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The level-0 tier, if any.
    pub fn base(&self) -> Option<&TierCount> {
        self.0.first()
    }

    /// Tiers at level 1 and above.
    pub fn magnitudes(&self) -> &[TierCount] {
        self.0.get(1..).unwrap_or(&[])
    }

    pub fn tiers(&self) -> &[TierCount] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TierCount> {
        self.0.iter()
    }

    pub fn counts(&self) -> Vec<u64> {
        self.0.iter().map(|t| t.count).collect()
    }
}

impl From<Vec<TierCount>> for Distribution {
    fn from(tiers: Vec<TierCount>) -> Self {
        Self(tiers)
    }
}

impl<'a> IntoIterator for &'a Distribution {
    type Item = &'a TierCount;
    type IntoIter = std::slice::Iter<'a, TierCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The compiled-in cumulative distribution.
pub fn default_distribution() -> Distribution {
    Distribution::from_pairs(DEFAULT_DISTRIBUTION)
}
