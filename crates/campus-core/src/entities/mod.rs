//! Entity structs for all CampusRoot domain objects.
//!
//! Fixture entities (alumni, events, mentors, donations) are immutable once
//! loaded. `SessionUser` is owned by the session store. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON fixtures, CLI output,
//! and schema validation.

mod alumni;
mod donation;
mod event;
mod mentor;
mod user;

pub use alumni::AlumniRecord;
pub use donation::{ANONYMOUS_DONOR, DonationRecord};
pub use event::EventRecord;
pub use mentor::MentorRecord;
pub use user::SessionUser;
