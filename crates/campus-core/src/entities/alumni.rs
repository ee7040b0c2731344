use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A graduate listed in the alumni directory.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AlumniRecord {
    pub id: String,
    pub name: String,
    pub photo_url: String,
    pub graduation_year: i32,
    pub profession: String,
    pub employer: String,
    pub city: String,
    pub profile_url: String,
    /// Enrollment range, e.g. `2014-2018`.
    pub batch: String,
    pub email: String,
}
