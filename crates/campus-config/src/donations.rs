//! Donation form settings.

use campus_core::enums::DonationPurpose;
use serde::{Deserialize, Serialize};

fn default_preset_amounts() -> Vec<u64> {
    vec![25, 50, 100, 250, 500, 1000]
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DonationsConfig {
    /// Amounts offered as one-click presets, in whole currency units.
    #[serde(default = "default_preset_amounts")]
    pub preset_amounts: Vec<u64>,

    /// Purpose preselected on a fresh form.
    #[serde(default)]
    pub default_purpose: DonationPurpose,
}

impl Default for DonationsConfig {
    fn default() -> Self {
        Self {
            preset_amounts: default_preset_amounts(),
            default_purpose: DonationPurpose::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = DonationsConfig::default();
        assert_eq!(config.preset_amounts, vec![25, 50, 100, 250, 500, 1000]);
        assert_eq!(config.default_purpose, DonationPurpose::Scholarship);
    }
}
