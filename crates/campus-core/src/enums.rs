//! Role, delivery mode, and donation purpose enums for CampusRoot.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Enums that the interface shows to people also carry a `label()`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Role of the signed-in user. Only `Admin` unlocks the admin console.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Alumni,
    Student,
    Admin,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alumni => "alumni",
            Self::Student => "student",
            Self::Admin => "admin",
        }
    }

    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EventMode
// ---------------------------------------------------------------------------

/// How an event is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EventMode {
    Online,
    Offline,
}

impl EventMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
        }
    }
}

impl fmt::Display for EventMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DonationPurpose
// ---------------------------------------------------------------------------

/// Fund a donation is earmarked for.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum DonationPurpose {
    #[default]
    Scholarship,
    Infrastructure,
    Research,
    StudentActivities,
    General,
}

impl DonationPurpose {
    /// Every purpose, in the order the donation form lists them.
    pub const ALL: [Self; 5] = [
        Self::Scholarship,
        Self::Infrastructure,
        Self::Research,
        Self::StudentActivities,
        Self::General,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scholarship => "scholarship",
            Self::Infrastructure => "infrastructure",
            Self::Research => "research",
            Self::StudentActivities => "student_activities",
            Self::General => "general",
        }
    }

    /// Display name of the fund.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Scholarship => "Scholarship Fund",
            Self::Infrastructure => "Infrastructure Development",
            Self::Research => "Research Programs",
            Self::StudentActivities => "Student Activities",
            Self::General => "General Fund",
        }
    }
}

impl fmt::Display for DonationPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
