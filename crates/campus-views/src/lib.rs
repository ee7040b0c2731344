//! # campus-views
//!
//! Derived state for every CampusRoot page.
//!
//! Each page has a controller that owns its ephemeral state (filters,
//! registrations, requests, form fields) and projects the immutable fixtures
//! into a serializable page model:
//! - [`directory`]: free-text search plus four equality filters over alumni
//! - [`events`]: RSVP toggling and the upcoming/past split
//! - [`mentorship`]: expertise filter, availability split, request tracking
//! - [`donations`]: preset-or-custom amount form and donation summary
//! - [`admin`]: role-gated, query-filtered tables
//!
//! Empty results are never errors; pages carry an [`EmptyState`] instead.

pub mod admin;
pub mod directory;
pub mod donations;
pub mod empty;
pub mod error;
pub mod events;
pub mod mentorship;
mod text;

pub use empty::{EmptyState, RecoveryAction};
pub use error::ViewError;
