//! Event RSVP policy.

use serde::{Deserialize, Serialize};

const fn default_enforce_capacity() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EventsConfig {
    /// Refuse new registrations once `registered_count` reaches `max_capacity`.
    #[serde(default = "default_enforce_capacity")]
    pub enforce_capacity: bool,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            enforce_capacity: default_enforce_capacity(),
        }
    }
}
