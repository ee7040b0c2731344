//! General application configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Directory holding replacement fixture files. Empty = embedded fixtures.
    #[serde(default)]
    pub fixtures_dir: String,
}

impl GeneralConfig {
    #[must_use]
    pub fn fixtures_dir(&self) -> Option<PathBuf> {
        if self.fixtures_dir.trim().is_empty() {
            None
        } else {
            Some(PathBuf::from(&self.fixtures_dir))
        }
    }
}
