//! Static fixture collections standing in for a real data source.
//!
//! The default set is embedded at compile time from `fixtures/*.json`. A
//! directory with the same four file names can replace it at runtime.

use std::collections::HashSet;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::entities::{AlumniRecord, DonationRecord, EventRecord, MentorRecord};
use crate::errors::CoreError;

const ALUMNI_JSON: &str = include_str!("../fixtures/alumni.json");
const EVENTS_JSON: &str = include_str!("../fixtures/events.json");
const MENTORS_JSON: &str = include_str!("../fixtures/mentors.json");
const DONATIONS_JSON: &str = include_str!("../fixtures/donations.json");

/// Every collection the views project from. Never mutated after loading.
#[derive(Debug, Clone, PartialEq)]
pub struct Fixtures {
    pub alumni: Vec<AlumniRecord>,
    pub events: Vec<EventRecord>,
    pub mentors: Vec<MentorRecord>,
    pub donations: Vec<DonationRecord>,
}

impl Fixtures {
    /// Parse the embedded fixture set.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Fixture` if a document is malformed and
    /// `CoreError::Validation` if a collection repeats an id.
    pub fn load() -> Result<Self, CoreError> {
        Self::from_documents(ALUMNI_JSON, EVENTS_JSON, MENTORS_JSON, DONATIONS_JSON)
    }

    /// Parse `alumni.json`, `events.json`, `mentors.json` and `donations.json`
    /// from `dir`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Io` if a file cannot be read, plus the errors of
    /// [`Fixtures::load`].
    pub fn load_from_dir(dir: &Path) -> Result<Self, CoreError> {
        let read = |name: &str| {
            let path = dir.join(name);
            std::fs::read_to_string(&path).map_err(|source| CoreError::Io {
                path: path.display().to_string(),
                source,
            })
        };

        Self::from_documents(
            &read("alumni.json")?,
            &read("events.json")?,
            &read("mentors.json")?,
            &read("donations.json")?,
        )
    }

    fn from_documents(
        alumni: &str,
        events: &str,
        mentors: &str,
        donations: &str,
    ) -> Result<Self, CoreError> {
        let fixtures = Self {
            alumni: parse_collection("alumni", alumni, |r: &AlumniRecord| r.id.as_str())?,
            events: parse_collection("events", events, |r: &EventRecord| r.id.as_str())?,
            mentors: parse_collection("mentors", mentors, |r: &MentorRecord| r.id.as_str())?,
            donations: parse_collection("donations", donations, |r: &DonationRecord| {
                r.id.as_str()
            })?,
        };

        tracing::debug!(
            alumni = fixtures.alumni.len(),
            events = fixtures.events.len(),
            mentors = fixtures.mentors.len(),
            donations = fixtures.donations.len(),
            "fixtures loaded"
        );

        Ok(fixtures)
    }
}

fn parse_collection<T: DeserializeOwned>(
    name: &str,
    json: &str,
    id_of: fn(&T) -> &str,
) -> Result<Vec<T>, CoreError> {
    let records: Vec<T> = serde_json::from_str(json).map_err(|source| CoreError::Fixture {
        name: name.to_string(),
        source,
    })?;

    let mut seen = HashSet::with_capacity(records.len());
    for record in &records {
        let id = id_of(record);
        if !seen.insert(id) {
            return Err(CoreError::Validation(format!(
                "duplicate id '{id}' in {name} fixtures"
            )));
        }
    }

    Ok(records)
}
