use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::EventMode;

/// An alumni event open for RSVP.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EventRecord {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    /// Local start time, `HH:MM`. Display only.
    pub time: String,
    pub location: String,
    pub mode: EventMode,
    pub description: String,
    pub registered_count: u32,
    /// Not enforced against `registered_count` in the fixtures.
    pub max_capacity: u32,
    /// Seeds the per-session registration set.
    pub is_registered: bool,
}

impl EventRecord {
    /// Instant the event is compared against when splitting upcoming from past:
    /// midnight UTC on the event date.
    #[must_use]
    pub fn instant(&self) -> DateTime<Utc> {
        self.date.and_time(NaiveTime::MIN).and_utc()
    }

    #[must_use]
    pub const fn is_online(&self) -> bool {
        matches!(self.mode, EventMode::Online)
    }

    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.registered_count >= self.max_capacity
    }

    /// Share of capacity taken, as a percentage. Zero-capacity events read as full.
    #[must_use]
    pub fn fill_percent(&self) -> f64 {
        if self.max_capacity == 0 {
            return 100.0;
        }
        f64::from(self.registered_count) / f64::from(self.max_capacity) * 100.0
    }
}
