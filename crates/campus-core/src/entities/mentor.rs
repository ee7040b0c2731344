use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An alumnus offering mentorship.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct MentorRecord {
    pub id: String,
    pub name: String,
    pub photo_url: String,
    /// Listed in display order; matching treats it as a set.
    pub expertise: Vec<String>,
    pub employer: String,
    pub graduation_year: i32,
    pub mentee_count: u32,
    /// Average rating on a 0-5 scale.
    pub rating: f64,
    pub is_available: bool,
}

impl MentorRecord {
    #[must_use]
    pub fn has_expertise(&self, tag: &str) -> bool {
        self.expertise.iter().any(|skill| skill == tag)
    }
}
