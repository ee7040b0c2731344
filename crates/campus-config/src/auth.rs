//! Simulated authentication settings.

use std::time::Duration;

use campus_core::enums::Role;
use serde::{Deserialize, Serialize};

const fn default_latency_ms() -> u64 {
    1000
}

const fn default_timeout_ms() -> u64 {
    10_000
}

fn default_admin_email() -> String {
    "admin@university.edu".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Simulated round-trip before sign-in/sign-up resolves.
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,

    /// Upper bound on a single sign-in/sign-up call.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Email that always signs in as an administrator.
    #[serde(default = "default_admin_email")]
    pub admin_email: String,

    /// Role given to sign-ins without a role hint.
    #[serde(default)]
    pub default_role: Role,

    /// Reject blank credentials and repeated sign-ups instead of accepting everything.
    #[serde(default)]
    pub enforce_credentials: bool,
}

impl AuthConfig {
    #[must_use]
    pub const fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Whether `email` is the configured administrator address.
    #[must_use]
    pub fn is_admin_email(&self, email: &str) -> bool {
        email == self.admin_email
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            timeout_ms: default_timeout_ms(),
            admin_email: default_admin_email(),
            default_role: Role::default(),
            enforce_credentials: false,
        }
    }
}
