//! Admin console: role-gated, query-filtered read-only tables.
//!
//! The role check is a display gate. It decides what is rendered, not what
//! data the process can reach.

use campus_core::Fixtures;
use campus_core::entities::{AlumniRecord, DonationRecord, EventRecord, SessionUser};
use campus_core::enums::DonationPurpose;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::empty::{EmptyState, RecoveryAction};
use crate::error::ViewError;
use crate::text::contains_folded;

pub const ACCESS_DENIED_TITLE: &str = "Access Denied";
pub const ACCESS_DENIED_MESSAGE: &str = "You need admin privileges to access this page.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminTab {
    #[default]
    Alumni,
    Events,
    Donations,
}

impl AdminTab {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alumni => "alumni",
            Self::Events => "events",
            Self::Donations => "donations",
        }
    }
}

/// The signed-in user, if they may see the console.
///
/// # Errors
///
/// [`ViewError::AccessDenied`] for no session or a non-admin role.
pub fn require_admin(user: Option<&SessionUser>) -> Result<&SessionUser, ViewError> {
    match user {
        Some(user) if user.is_admin() => Ok(user),
        _ => Err(ViewError::AccessDenied),
    }
}

/// Alumni whose name, email or profession contains `query`, ignoring case.
#[must_use]
pub fn filter_alumni<'a>(alumni: &'a [AlumniRecord], query: &str) -> Vec<&'a AlumniRecord> {
    let needle = query.to_lowercase();
    alumni
        .iter()
        .filter(|a| {
            contains_folded(&a.name, &needle)
                || contains_folded(&a.email, &needle)
                || contains_folded(&a.profession, &needle)
        })
        .collect()
}

/// Events whose title or location contains `query`, ignoring case.
#[must_use]
pub fn filter_events<'a>(events: &'a [EventRecord], query: &str) -> Vec<&'a EventRecord> {
    let needle = query.to_lowercase();
    events
        .iter()
        .filter(|e| contains_folded(&e.title, &needle) || contains_folded(&e.location, &needle))
        .collect()
}

/// Donations whose purpose label or stored donor name contains `query`.
#[must_use]
pub fn filter_donations<'a>(donations: &'a [DonationRecord], query: &str) -> Vec<&'a DonationRecord> {
    let needle = query.to_lowercase();
    donations
        .iter()
        .filter(|d| {
            contains_folded(d.purpose.label(), &needle) || contains_folded(&d.donor_name, &needle)
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdminStats {
    pub total_alumni: usize,
    pub total_events: usize,
    pub total_donated: u64,
}

impl AdminStats {
    #[must_use]
    pub fn compute(fixtures: &Fixtures) -> Self {
        Self {
            total_alumni: fixtures.alumni.len(),
            total_events: fixtures.events.len(),
            total_donated: fixtures.donations.iter().map(|d| d.amount).sum(),
        }
    }
}

/// Donation as listed in the console: anonymous donors are masked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DonationRow<'a> {
    pub id: &'a str,
    pub donor: &'a str,
    pub amount: u64,
    pub purpose: DonationPurpose,
    pub purpose_label: &'static str,
    pub date: NaiveDate,
}

impl<'a> From<&'a DonationRecord> for DonationRow<'a> {
    fn from(record: &'a DonationRecord) -> Self {
        Self {
            id: &record.id,
            donor: record.display_donor(),
            amount: record.amount,
            purpose: record.purpose,
            purpose_label: record.purpose.label(),
            date: record.date,
        }
    }
}

/// Rows of the active tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "tab", content = "rows", rename_all = "snake_case")]
pub enum AdminTable<'a> {
    Alumni(Vec<&'a AlumniRecord>),
    Events(Vec<&'a EventRecord>),
    Donations(Vec<DonationRow<'a>>),
}

impl AdminTable<'_> {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Alumni(rows) => rows.len(),
            Self::Events(rows) => rows.len(),
            Self::Donations(rows) => rows.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum AdminScreen<'a> {
    AccessDenied {
        title: &'static str,
        message: &'static str,
    },
    Dashboard {
        stats: AdminStats,
        tab: AdminTab,
        table: AdminTable<'a>,
        /// Set when the query leaves the active tab without rows.
        empty_state: Option<EmptyState>,
    },
}

impl AdminScreen<'_> {
    #[must_use]
    pub const fn is_dashboard(&self) -> bool {
        matches!(self, Self::Dashboard { .. })
    }
}

/// Render the console for `user`. Non-admins get the access-denied screen.
#[must_use]
pub fn render_admin<'a>(
    user: Option<&SessionUser>,
    fixtures: &'a Fixtures,
    tab: AdminTab,
    query: &str,
) -> AdminScreen<'a> {
    if require_admin(user).is_err() {
        tracing::warn!("admin console requested without admin role");
        return AdminScreen::AccessDenied {
            title: ACCESS_DENIED_TITLE,
            message: ACCESS_DENIED_MESSAGE,
        };
    }

    let table = match tab {
        AdminTab::Alumni => AdminTable::Alumni(filter_alumni(&fixtures.alumni, query)),
        AdminTab::Events => AdminTable::Events(filter_events(&fixtures.events, query)),
        AdminTab::Donations => AdminTable::Donations(
            filter_donations(&fixtures.donations, query)
                .into_iter()
                .map(DonationRow::from)
                .collect(),
        ),
    };
    tracing::debug!(tab = tab.as_str(), rows = table.len(), "admin table filtered");

    let empty_state = table.is_empty().then(|| {
        EmptyState::new(
            "No results",
            &format!("No {} match \"{query}\".", tab.as_str()),
            RecoveryAction::ClearSearch,
        )
    });

    AdminScreen::Dashboard {
        stats: AdminStats::compute(fixtures),
        tab,
        table,
        empty_state,
    }
}
