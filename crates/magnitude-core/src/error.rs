//! Error types for Magnitude.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")] Load(#[from] ::config::ConfigError),
    #[error("assembly size must be at least 1")] ZeroAssemblySize,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("distribution has no base tier")] MissingBaseTier,
}

#[derive(Error, Debug)]
pub enum MagnitudeError {
    #[error(transparent)] Config(#[from] ConfigError),
    #[error(transparent)] Report(#[from] ReportError),
}
