//! # magnitude-report: Nomination report driver.
//!
//! [`Report::build`] runs the whole calculation for a [`NominationConfig`]:
//! it derives the exclusive distribution, builds the dropoff curve for the
//! configured week, and computes a nomination row for every magnitude tier.
//! The report renders as two text tables or serializes to JSON.

pub mod format;
pub mod table;

use magnitude_core::config::NominationConfig;
use magnitude_core::error::{MagnitudeError, ReportError};
use magnitude_core::exclusive::calculate_exclusive_counts;
use magnitude_core::traits::TargetCurve;
use magnitude_core::types::Distribution;
use magnitude_decay::{nominate_tiers, DropoffCurve, TierNomination};
use serde::Serialize;
use tracing::info;

use crate::table::{render_exclusive_table, render_nomination_table};

/// Everything printed for one week of the campaign.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Weeks passed since the campaign start.
    pub week: u32,
    pub weeks_total: u32,
    pub assembly_size: u64,
    pub dropoff: f64,
    /// Exclusive counts, base tier first.
    pub exclusive: Distribution,
    /// One row per magnitude tier, level 1 first.
    pub nominations: Vec<TierNomination>,
}

impl Report {
    /// Build the report with the production dropoff curve.
    pub fn build(config: &NominationConfig) -> Result<Self, MagnitudeError> {
        Self::build_with_curve(config, &DropoffCurve::from_config(config))
    }

    /// Build the report with an arbitrary target curve.
    pub fn build_with_curve<C: TargetCurve + ?Sized>(
        config: &NominationConfig,
        curve: &C,
    ) -> Result<Self, MagnitudeError> {
        let assembly = config.assembly()?;
        if config.distribution.base().is_none() {
            return Err(ReportError::MissingBaseTier.into());
        }

        let exclusive = calculate_exclusive_counts(&config.distribution);
        let nominations = nominate_tiers(&exclusive, assembly, curve);

        info!(
            week = config.weeks_passed,
            weeks_total = config.weeks_total,
            dropoff = curve.dropoff(),
            tiers = nominations.len(),
            "nomination report built"
        );

        Ok(Self {
            week: config.weeks_passed,
            weeks_total: config.weeks_total,
            assembly_size: assembly.get(),
            dropoff: curve.dropoff(),
            exclusive,
            nominations,
        })
    }

    /// The exclusive-count table followed by the nomination table.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        render_exclusive_table(&mut out, &self.exclusive);
        render_nomination_table(&mut out, self.week, &self.nominations);
        out.push('\n');
        out
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
