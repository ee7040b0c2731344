//! Donation intake form and the donation page summary.
//!
//! The amount comes from exactly one source: a preset or a custom entry.
//! Each input clears the other. Submitting only acknowledges; the donation
//! history is never appended to.

use campus_config::DonationsConfig;
use campus_core::entities::DonationRecord;
use campus_core::enums::DonationPurpose;
use chrono::NaiveDate;
use serde::Serialize;

use crate::error::ViewError;

/// Acknowledgment text shown after a successful submission.
pub const THANK_YOU_MESSAGE: &str =
    "Thank you for your generous donation! In a real application, this would process the payment.";

const RECENT_LIMIT: usize = 5;

/// Form state for one donation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DonationForm {
    /// Amount as submitted, from whichever source was used last.
    pub amount: String,
    pub custom_amount: String,
    pub selected_preset: Option<u64>,
    pub purpose: DonationPurpose,
    pub donor_name: String,
    pub email: String,
    pub is_anonymous: bool,
    presets: Vec<u64>,
}

impl DonationForm {
    #[must_use]
    pub fn new(config: &DonationsConfig) -> Self {
        Self {
            amount: String::new(),
            custom_amount: String::new(),
            selected_preset: None,
            purpose: config.default_purpose,
            donor_name: String::new(),
            email: String::new(),
            is_anonymous: false,
            presets: config.preset_amounts.clone(),
        }
    }

    #[must_use]
    pub fn presets(&self) -> &[u64] {
        &self.presets
    }

    /// Pick a preset amount. Clears any custom entry.
    ///
    /// # Errors
    ///
    /// [`ViewError::UnknownPreset`] if `amount` is not offered; the form is
    /// left unchanged.
    pub fn select_preset(&mut self, amount: u64) -> Result<(), ViewError> {
        if !self.presets.contains(&amount) {
            return Err(ViewError::UnknownPreset(amount));
        }
        self.selected_preset = Some(amount);
        self.custom_amount.clear();
        self.amount = amount.to_string();
        Ok(())
    }

    /// Type a custom amount. Clears any preset selection.
    pub fn enter_custom_amount(&mut self, value: &str) {
        self.custom_amount = value.to_string();
        self.amount = value.to_string();
        self.selected_preset = None;
    }

    pub fn set_purpose(&mut self, purpose: DonationPurpose) {
        self.purpose = purpose;
    }

    pub fn set_donor(&mut self, name: impl Into<String>, email: impl Into<String>) {
        self.donor_name = name.into();
        self.email = email.into();
    }

    pub fn set_anonymous(&mut self, anonymous: bool) {
        self.is_anonymous = anonymous;
    }

    /// Whether the submit button is enabled. A blank amount disables it,
    /// matching the first check in [`Self::submit`].
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.amount.trim().is_empty()
    }

    #[must_use]
    pub fn button_label(&self) -> String {
        let amount = self.amount.trim();
        if amount.is_empty() {
            "Donate Now".to_string()
        } else {
            format!("Donate ${amount}")
        }
    }

    /// Validate the form and produce the acknowledgment.
    ///
    /// # Errors
    ///
    /// - [`ViewError::MissingAmount`] when no amount was chosen.
    /// - [`ViewError::InvalidAmount`] unless the amount is a finite number
    ///   greater than zero.
    /// - [`ViewError::MissingDonorDetails`] when not anonymous and the name
    ///   or email is blank.
    pub fn submit(&self) -> Result<DonationReceipt, ViewError> {
        if self.amount.trim().is_empty() {
            return Err(ViewError::MissingAmount);
        }
        let amount = parse_amount(&self.amount)?;

        let donor = if self.is_anonymous {
            None
        } else {
            if self.donor_name.trim().is_empty() || self.email.trim().is_empty() {
                return Err(ViewError::MissingDonorDetails);
            }
            Some(DonorDetails {
                name: self.donor_name.trim().to_string(),
                email: self.email.trim().to_string(),
            })
        };

        tracing::info!(amount, purpose = %self.purpose, anonymous = self.is_anonymous, "donation acknowledged");
        Ok(DonationReceipt {
            amount,
            purpose: self.purpose,
            donor,
            message: THANK_YOU_MESSAGE.to_string(),
        })
    }
}

fn parse_amount(raw: &str) -> Result<f64, ViewError> {
    let invalid = || ViewError::InvalidAmount(raw.to_string());
    let amount: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(invalid());
    }
    Ok(amount)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DonorDetails {
    pub name: String,
    pub email: String,
}

/// Acknowledgment of a submitted donation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DonationReceipt {
    pub amount: f64,
    pub purpose: DonationPurpose,
    /// `None` for anonymous donations.
    pub donor: Option<DonorDetails>,
    pub message: String,
}

/// One line of the recent-donations list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentDonation {
    pub id: String,
    pub donor: String,
    pub amount: u64,
    pub purpose: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DonationSummary {
    pub total_donated: u64,
    /// Donations that are not anonymous.
    pub named_donor_count: usize,
    pub recent: Vec<RecentDonation>,
}

/// Totals and the recent list, in fixture order.
#[must_use]
pub fn summarize(donations: &[DonationRecord]) -> DonationSummary {
    DonationSummary {
        total_donated: donations.iter().map(|d| d.amount).sum(),
        named_donor_count: donations.iter().filter(|d| !d.is_anonymous).count(),
        recent: donations
            .iter()
            .take(RECENT_LIMIT)
            .map(|d| RecentDonation {
                id: d.id.clone(),
                donor: d.display_donor().to_string(),
                amount: d.amount,
                purpose: d.purpose.label().to_string(),
                date: d.date,
            })
            .collect(),
    }
}
