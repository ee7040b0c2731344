use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::DonationPurpose;

/// Name shown in place of the donor for anonymous gifts.
pub const ANONYMOUS_DONOR: &str = "Anonymous Donor";

/// A past donation shown on the donation page and in the admin console.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DonationRecord {
    pub id: String,
    /// Whole currency units.
    pub amount: u64,
    pub purpose: DonationPurpose,
    pub donor_name: String,
    pub date: NaiveDate,
    pub is_anonymous: bool,
}

impl DonationRecord {
    /// Donor name as displayed: anonymous gifts never show the stored name.
    #[must_use]
    pub fn display_donor(&self) -> &str {
        if self.is_anonymous {
            ANONYMOUS_DONOR
        } else {
            &self.donor_name
        }
    }
}
