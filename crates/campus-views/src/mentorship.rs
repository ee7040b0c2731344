//! Mentor discovery: expertise filter, availability split, and request tracking.
//!
//! The filter runs first and the availability split second. Aggregate stats
//! always describe the full mentor collection, never the filtered view.

use std::collections::BTreeSet;

use campus_core::entities::MentorRecord;
use serde::Serialize;

use crate::empty::{EmptyState, RecoveryAction};
use crate::error::ViewError;
use crate::text::distinct;

/// Ids of mentors this session has sent a request to. Only grows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequestSet(BTreeSet<String>);

impl RequestSet {
    /// A copy that also contains `id`.
    #[must_use]
    pub fn with_request(&self, id: &str) -> Self {
        let mut next = self.0.clone();
        next.insert(id.to_string());
        Self(next)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Every expertise tag across `mentors`, first-occurrence order.
#[must_use]
pub fn expertise_areas(mentors: &[MentorRecord]) -> Vec<String> {
    distinct(
        mentors
            .iter()
            .flat_map(|mentor| mentor.expertise.iter().map(String::as_str)),
    )
}

/// Mentors listing `expertise`. `None` or an empty tag selects everyone.
#[must_use]
pub fn filter_by_expertise<'a>(
    mentors: &'a [MentorRecord],
    expertise: Option<&str>,
) -> Vec<&'a MentorRecord> {
    match expertise.filter(|tag| !tag.is_empty()) {
        Some(tag) => mentors.iter().filter(|m| m.has_expertise(tag)).collect(),
        None => mentors.iter().collect(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MentorPartition<'a> {
    pub available: Vec<&'a MentorRecord>,
    pub unavailable: Vec<&'a MentorRecord>,
}

#[must_use]
pub fn partition_by_availability<'a>(mentors: &[&'a MentorRecord]) -> MentorPartition<'a> {
    let (available, unavailable): (Vec<_>, Vec<_>) =
        mentors.iter().copied().partition(|mentor| mentor.is_available);
    MentorPartition {
        available,
        unavailable,
    }
}

/// Header statistics of the mentorship page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MentorStats {
    pub total_mentors: usize,
    pub total_mentees: u64,
    /// Mean rating rounded to one decimal; `0.0` with no mentors.
    pub average_rating: f64,
}

impl MentorStats {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compute(mentors: &[MentorRecord]) -> Self {
        let total_mentees = mentors.iter().map(|m| u64::from(m.mentee_count)).sum();
        let average_rating = if mentors.is_empty() {
            0.0
        } else {
            let mean = mentors.iter().map(|m| m.rating).sum::<f64>() / mentors.len() as f64;
            (mean * 10.0).round() / 10.0
        };
        Self {
            total_mentors: mentors.len(),
            total_mentees,
            average_rating,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MentorCard<'a> {
    pub mentor: &'a MentorRecord,
    pub requested: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MentorshipPage<'a> {
    pub stats: MentorStats,
    pub expertise_areas: Vec<String>,
    pub selected_expertise: String,
    pub available: Vec<MentorCard<'a>>,
    pub unavailable: Vec<MentorCard<'a>>,
    pub empty_state: Option<EmptyState>,
}

/// Mentorship page controller. Owns this session's request set.
#[derive(Debug, Clone)]
pub struct MentorshipView<'a> {
    mentors: &'a [MentorRecord],
    requests: RequestSet,
    selected_expertise: String,
}

impl<'a> MentorshipView<'a> {
    #[must_use]
    pub fn new(mentors: &'a [MentorRecord]) -> Self {
        Self {
            mentors,
            requests: RequestSet::default(),
            selected_expertise: String::new(),
        }
    }

    #[must_use]
    pub const fn requests(&self) -> &RequestSet {
        &self.requests
    }

    /// Narrow to one expertise tag; an empty tag shows all areas.
    pub fn select_expertise(&mut self, tag: impl Into<String>) {
        self.selected_expertise = tag.into();
    }

    /// Send a mentorship request. Returns `false` if one was already sent.
    ///
    /// # Errors
    ///
    /// [`ViewError::NotFound`] for an unknown id and
    /// [`ViewError::MentorUnavailable`] for a mentor not taking mentees.
    pub fn request(&mut self, id: &str) -> Result<bool, ViewError> {
        let mentor = self
            .mentors
            .iter()
            .find(|mentor| mentor.id == id)
            .ok_or_else(|| ViewError::NotFound {
                entity_type: "mentor",
                id: id.to_string(),
            })?;

        if !mentor.is_available {
            tracing::warn!(mentor_id = id, "request rejected: mentor unavailable");
            return Err(ViewError::MentorUnavailable { id: id.to_string() });
        }

        if self.requests.contains(id) {
            return Ok(false);
        }

        self.requests = self.requests.with_request(id);
        tracing::debug!(mentor_id = id, total = self.requests.len(), "mentorship requested");
        Ok(true)
    }

    #[must_use]
    pub fn render(&self) -> MentorshipPage<'a> {
        let filtered = filter_by_expertise(self.mentors, Some(&self.selected_expertise));
        let partition = partition_by_availability(&filtered);

        let card = |mentor: &'a MentorRecord| MentorCard {
            mentor,
            requested: self.requests.contains(&mentor.id),
        };
        let available: Vec<MentorCard<'a>> = partition.available.into_iter().map(card).collect();
        let unavailable: Vec<MentorCard<'a>> =
            partition.unavailable.into_iter().map(card).collect();

        let empty_state = available.is_empty().then(|| {
            EmptyState::new(
                "No available mentors",
                "No mentors in this area are taking new mentees right now.",
                RecoveryAction::ShowAllAreas,
            )
        });

        MentorshipPage {
            stats: MentorStats::compute(self.mentors),
            expertise_areas: expertise_areas(self.mentors),
            selected_expertise: self.selected_expertise.clone(),
            available,
            unavailable,
            empty_state,
        }
    }
}
