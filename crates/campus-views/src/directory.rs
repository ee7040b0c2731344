//! Alumni directory: free-text search plus batch, profession, city and
//! graduation-year filters.
//!
//! Filtering is a stable, pure projection of the fixture slice. An empty
//! constraint is a wildcard; a non-empty one must match the field exactly.

use campus_core::entities::AlumniRecord;
use serde::{Deserialize, Serialize};

use crate::empty::{EmptyState, RecoveryAction};
use crate::text::{contains_folded, distinct};

/// Search term and equality constraints. Empty strings match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryFilter {
    /// Matched case-insensitively against name, profession and employer.
    pub query: String,
    pub batch: String,
    pub profession: String,
    pub city: String,
    /// Compared against the year rendered as a decimal string.
    pub graduation_year: String,
}

impl DirectoryFilter {
    /// True when neither the query nor any constraint is set.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.query.is_empty()
            && self.batch.is_empty()
            && self.profession.is_empty()
            && self.city.is_empty()
            && self.graduation_year.is_empty()
    }

    fn matches_with_folded_query(&self, record: &AlumniRecord, query: &str) -> bool {
        let matches_search = contains_folded(&record.name, query)
            || contains_folded(&record.profession, query)
            || contains_folded(&record.employer, query);

        matches_search
            && field_matches(&self.batch, &record.batch)
            && field_matches(&self.profession, &record.profession)
            && field_matches(&self.city, &record.city)
            && field_matches(&self.graduation_year, &record.graduation_year.to_string())
    }
}

fn field_matches(constraint: &str, value: &str) -> bool {
    constraint.is_empty() || constraint == value
}

/// Records of `alumni` that satisfy `filter`, in fixture order.
#[must_use]
pub fn filter_alumni<'a>(alumni: &'a [AlumniRecord], filter: &DirectoryFilter) -> Vec<&'a AlumniRecord> {
    let query = filter.query.to_lowercase();
    alumni
        .iter()
        .filter(|record| filter.matches_with_folded_query(record, &query))
        .collect()
}

/// Choices offered by each filter dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryFacets {
    pub batches: Vec<String>,
    pub professions: Vec<String>,
    pub cities: Vec<String>,
    pub graduation_years: Vec<String>,
}

impl DirectoryFacets {
    /// Distinct values per dimension across the full collection, in
    /// first-occurrence order.
    #[must_use]
    pub fn from_records(alumni: &[AlumniRecord]) -> Self {
        let years: Vec<String> = alumni.iter().map(|a| a.graduation_year.to_string()).collect();
        Self {
            batches: distinct(alumni.iter().map(|a| a.batch.as_str())),
            professions: distinct(alumni.iter().map(|a| a.profession.as_str())),
            cities: distinct(alumni.iter().map(|a| a.city.as_str())),
            graduation_years: distinct(years.iter().map(String::as_str)),
        }
    }
}

/// Rendered directory page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryPage<'a> {
    pub summary: String,
    pub shown: usize,
    pub total: usize,
    pub filter: DirectoryFilter,
    pub alumni: Vec<&'a AlumniRecord>,
    pub empty_state: Option<EmptyState>,
}

/// Directory controller. Owns the filter state for one session.
#[derive(Debug, Clone)]
pub struct DirectoryView<'a> {
    alumni: &'a [AlumniRecord],
    filter: DirectoryFilter,
}

impl<'a> DirectoryView<'a> {
    #[must_use]
    pub fn new(alumni: &'a [AlumniRecord]) -> Self {
        Self {
            alumni,
            filter: DirectoryFilter::default(),
        }
    }

    #[must_use]
    pub const fn filter(&self) -> &DirectoryFilter {
        &self.filter
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
    }

    pub fn set_batch(&mut self, batch: impl Into<String>) {
        self.filter.batch = batch.into();
    }

    pub fn set_profession(&mut self, profession: impl Into<String>) {
        self.filter.profession = profession.into();
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.filter.city = city.into();
    }

    pub fn set_graduation_year(&mut self, year: impl Into<String>) {
        self.filter.graduation_year = year.into();
    }

    /// Reset the search term and all four constraints.
    pub fn clear_filters(&mut self) {
        self.filter = DirectoryFilter::default();
    }

    #[must_use]
    pub fn results(&self) -> Vec<&'a AlumniRecord> {
        filter_alumni(self.alumni, &self.filter)
    }

    #[must_use]
    pub fn facets(&self) -> DirectoryFacets {
        DirectoryFacets::from_records(self.alumni)
    }

    #[must_use]
    pub fn render(&self) -> DirectoryPage<'a> {
        let alumni = self.results();
        let shown = alumni.len();
        let total = self.alumni.len();
        tracing::debug!(shown, total, "directory filtered");

        let empty_state = alumni.is_empty().then(|| {
            EmptyState::new(
                "No alumni found",
                "Try adjusting your search terms or filters",
                RecoveryAction::ClearFilters,
            )
        });

        DirectoryPage {
            summary: format!("Showing {shown} of {total} alumni"),
            shown,
            total,
            filter: self.filter.clone(),
            alumni,
            empty_state,
        }
    }
}
