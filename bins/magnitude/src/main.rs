//! magnitude: Nomination planner for the tiered membership campaign.
//!
//! Prints the exclusive member count per magnitude tier and the nominations
//! each assembly member has to issue this week. Without arguments it reports
//! on the compiled-in distribution.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use magnitude_core::config::NominationConfig;
use magnitude_report::Report;
use tracing::{debug, info};

/// Magnitude nomination planner.
#[derive(Parser, Debug)]
#[command(name = "magnitude", version, about = "Weekly nomination targets per magnitude tier")]
struct Args {
    /// Config file overriding the compiled-in distribution and constants
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Weeks passed since the campaign start
    #[arg(long, conflicts_with = "as_of")]
    weeks_passed: Option<u32>,

    /// Derive weeks passed from this date (YYYY-MM-DD)
    #[arg(long)]
    as_of: Option<NaiveDate>,

    /// Report output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Log output format ("text" or "json")
    #[arg(long, default_value = "text")]
    log_format: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl Args {
    /// Layer CLI overrides on top of the loaded configuration.
    fn into_config(self) -> Result<(NominationConfig, OutputFormat)> {
        let mut config = NominationConfig::load(self.config.as_deref()).with_context(|| {
            match &self.config {
                Some(path) => format!("loading config from {}", path.display()),
                None => "loading config from environment".to_string(),
            }
        })?;

        if let Some(weeks) = self.weeks_passed {
            config.weeks_passed = weeks;
        }
        if let Some(as_of) = self.as_of {
            config = config.with_as_of(as_of);
            debug!(%as_of, weeks_passed = config.weeks_passed, "weeks passed derived from date");
        }

        Ok((config, self.format))
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level, &args.log_format);

    let (config, format) = args.into_config()?;
    info!(
        weeks_total = config.weeks_total,
        weeks_passed = config.weeks_passed,
        assembly_size = config.assembly_size,
        tiers = config.distribution.len(),
        "magnitude v{}",
        env!("CARGO_PKG_VERSION")
    );

    let report = Report::build(&config).context("building nomination report")?;

    match format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => println!("{}", report.to_json().context("serializing report")?),
    }
    Ok(())
}

/// Initialize tracing on stderr so stdout carries only the report.
///
/// Pass `format = "json"` for structured JSON output. Any other value
/// defaults to human-readable text. `RUST_LOG` takes precedence over
/// `level_str`.
fn init_logging(level_str: &str, format: &str) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_str));

    if format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
