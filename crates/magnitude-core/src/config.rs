//! Campaign configuration.
//!
//! [`NominationConfig`] defaults to the compiled-in constants. A config file
//! and `MAGNITUDE_`-prefixed environment variables can override any field,
//! for example:
//!
//! ```toml
//! weeks_passed = 3
//! assembly_size = 7
//!
//! [[distribution]]
//! name = "Verified"
//! count = 46349
//! ```

use std::num::NonZeroU64;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{
    CAMPAIGN_START, DEFAULT_ASSEMBLY_SIZE, DEFAULT_WEEKS_PASSED, DEFAULT_WEEKS_TOTAL,
};
use crate::error::ConfigError;
use crate::types::{default_distribution, Distribution};

/// Prefix for environment overrides (`MAGNITUDE_WEEKS_PASSED=3`).
pub const ENV_PREFIX: &str = "MAGNITUDE";

/// Inputs of one nomination report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NominationConfig {
    /// Cumulative member counts, base tier first.
    pub distribution: Distribution,
    /// Number of assembly members sharing the nominations.
    pub assembly_size: u64,
    /// Campaign length in weeks.
    pub weeks_total: u32,
    /// Weeks elapsed since `campaign_start`.
    pub weeks_passed: u32,
    /// First day of the campaign, used to derive `weeks_passed` from a date.
    pub campaign_start: NaiveDate,
}

impl Default for NominationConfig {
    fn default() -> Self {
        Self {
            distribution: default_distribution(),
            assembly_size: DEFAULT_ASSEMBLY_SIZE,
            weeks_total: DEFAULT_WEEKS_TOTAL,
            weeks_passed: DEFAULT_WEEKS_PASSED,
            campaign_start: CAMPAIGN_START,
        }
    }
}

impl NominationConfig {
    /// Load defaults, then the optional file at `path`, then environment
    /// variables prefixed with [`ENV_PREFIX`].
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path).required(true));
        }
        let settings = builder
            .add_source(::config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;
        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.assembly().map(|_| ())
    }

    /// Assembly size as a divisor.
    pub fn assembly(&self) -> Result<NonZeroU64, ConfigError> {
        NonZeroU64::new(self.assembly_size).ok_or(ConfigError::ZeroAssemblySize)
    }

    /// Set `weeks_passed` to the whole weeks between `campaign_start` and `as_of`.
    pub fn with_as_of(mut self, as_of: NaiveDate) -> Self {
        self.weeks_passed = weeks_elapsed(self.campaign_start, as_of);
        self
    }
}

/// Whole weeks from `start` to `as_of`; 0 when `as_of` precedes `start`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use magnitude_core::config::weeks_elapsed;
/// let start = NaiveDate::from_ymd_opt(2025, 3, 17).unwrap();
/// let as_of = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
/// assert_eq!(weeks_elapsed(start, as_of), 2);
/// ```
pub fn weeks_elapsed(start: NaiveDate, as_of: NaiveDate) -> u32 {
    let weeks = (as_of - start).num_weeks().max(0);
    u32::try_from(weeks).unwrap_or(u32::MAX)
}
