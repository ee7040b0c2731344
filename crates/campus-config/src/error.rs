//! Errors raised while loading or validating the CampusRoot configuration.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML layer or a `CAMPUS_*` variable could not be merged or extracted.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A value the portal cannot run without is blank.
    #[error(
        "'{section}.{field}' is not configured; set it in .campusroot/config.toml or as CAMPUS_{}__{}",
        .section.to_uppercase(),
        .field.to_uppercase()
    )]
    NotConfigured { section: String, field: String },

    /// A configuration field has an invalid value.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    /// `general.fixtures_dir` is set but does not name a directory.
    #[error("fixture directory '{}' does not exist or is not a directory", .path.display())]
    FixturesDir { path: PathBuf },
}
