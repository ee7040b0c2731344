//! # campus-config
//!
//! Layered configuration loading for CampusRoot using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CAMPUS_*` prefix, `__` as separator)
//! 2. Project-level `.campusroot/config.toml`
//! 3. User-level `~/.config/campusroot/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CAMPUS_AUTH__LATENCY_MS` -> `auth.latency_ms`,
//! `CAMPUS_EVENTS__ENFORCE_CAPACITY` -> `events.enforce_capacity`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use campus_config::CampusConfig;
//!
//! let config = CampusConfig::load_with_dotenv().expect("config");
//! println!("admin email: {}", config.auth.admin_email);
//! ```

mod auth;
mod donations;
mod error;
mod events;
mod general;

pub use auth::AuthConfig;
pub use donations::DonationsConfig;
pub use error::ConfigError;
pub use events::EventsConfig;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CampusConfig {
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub events: EventsConfig,
    #[serde(default)]
    pub donations: DonationsConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl CampusConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be merged or extracted,
    /// and `ConfigError::NotConfigured` / `ConfigError::InvalidValue` if
    /// validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".campusroot/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("CAMPUS_").split("__"))
    }

    /// Reject values the views cannot work with.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` for a blank admin email,
    /// `ConfigError::FixturesDir` when `general.fixtures_dir` is not a
    /// directory, and `ConfigError::InvalidValue` for bad preset amounts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.admin_email.trim().is_empty() {
            return Err(ConfigError::NotConfigured {
                section: "auth".into(),
                field: "admin_email".into(),
            });
        }
        if self.donations.preset_amounts.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "donations.preset_amounts".into(),
                reason: "at least one preset amount is required".into(),
            });
        }
        if self.donations.preset_amounts.contains(&0) {
            return Err(ConfigError::InvalidValue {
                field: "donations.preset_amounts".into(),
                reason: "preset amounts must be greater than zero".into(),
            });
        }
        if let Some(path) = self.general.fixtures_dir().filter(|path| !path.is_dir()) {
            return Err(ConfigError::FixturesDir { path });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("campusroot").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = CampusConfig::default();
        config.validate().expect("defaults should validate");
        assert!(config.events.enforce_capacity);
        assert!(!config.auth.enforce_credentials);
        assert!(config.general.fixtures_dir().is_none());
    }

    #[test]
    fn zero_preset_is_rejected() {
        let mut config = CampusConfig::default();
        config.donations.preset_amounts = vec![25, 0];
        let err = config.validate().expect_err("zero preset should fail");
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "donations.preset_amounts"));
    }

    #[test]
    fn blank_admin_email_is_rejected() {
        let mut config = CampusConfig::default();
        config.auth.admin_email = " ".into();
        let err = config.validate().expect_err("blank admin email should fail");
        assert!(matches!(err, ConfigError::NotConfigured { ref section, .. } if section == "auth"));
        assert_eq!(
            err.to_string(),
            "'auth.admin_email' is not configured; set it in .campusroot/config.toml or as CAMPUS_AUTH__ADMIN_EMAIL"
        );
    }

    #[test]
    fn fixtures_dir_must_exist() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut config = CampusConfig::default();
        config.general.fixtures_dir = dir.path().display().to_string();
        config.validate().expect("existing directory is accepted");

        config.general.fixtures_dir = dir.path().join("missing").display().to_string();
        let err = config.validate().expect_err("missing directory should fail");
        assert!(matches!(err, ConfigError::FixturesDir { ref path } if path.ends_with("missing")));
    }
}
