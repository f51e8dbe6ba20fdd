//! Plain-text tables.
//!
//! Each table opens with a blank line and a banner of centered titles
//! between `=` rules, then a header, a `-` rule, one row per magnitude tier,
//! and a closing `=` rule.

use magnitude_core::types::Distribution;
use magnitude_decay::TierNomination;

use crate::format::{centered, group_thousands, rule};

pub const EXCLUSIVE_TITLE: &str = "CALCULATED EXCLUSIVE MEMBER COUNTS";
pub const NOMINATION_SUBTITLE: &str = "(Using 'Exclusive Count' from Cumulative Data)";

pub fn nomination_title(week: u32) -> String {
    format!("WEEK {week} NOMINATION CALCULATION")
}

/// Exclusive counts of every magnitude tier. The base tier is left out.
pub fn render_exclusive_table(out: &mut String, exclusive: &Distribution) {
    banner(out, &[EXCLUSIVE_TITLE]);
    line(out, format!("{:<15} {:>15}", "Role", "Exclusive Count"));
    line(out, rule('-'));
    for tier in exclusive.magnitudes() {
        line(
            out,
            format!("{:<15} {:>15}", tier.name, group_thousands(tier.count)),
        );
    }
    line(out, rule('='));
}

/// Target, current exclusive count, and per-member quota of every tier.
pub fn render_nomination_table(out: &mut String, week: u32, rows: &[TierNomination]) {
    banner(out, &[&nomination_title(week), NOMINATION_SUBTITLE]);
    line(
        out,
        format!(
            "{:<15} {:>10} {:>15} {:>12}",
            "Role", "Target", "Current (Exc.)", "Nominations"
        ),
    );
    line(out, rule('-'));
    for row in rows {
        line(
            out,
            format!(
                "{:<15} {:>10} {:>15} {:>12}",
                row.name,
                group_thousands(row.nomination.target),
                group_thousands(row.current),
                group_thousands(row.nomination.nominations_per_member),
            ),
        );
    }
    line(out, rule('='));
}

fn banner(out: &mut String, titles: &[&str]) {
    out.push('\n');
    line(out, rule('='));
    for title in titles {
        line(out, centered(title));
    }
    line(out, rule('='));
}

fn line(out: &mut String, text: impl AsRef<str>) {
    out.push_str(text.as_ref());
    out.push('\n');
}
