//! # campus-core
//!
//! Core types, fixtures, and error types for CampusRoot.
//!
//! This crate provides the foundational types shared across all CampusRoot crates:
//! - Entity structs for alumni, events, mentors, donations, and the session user
//! - Role, delivery mode, and donation purpose enums
//! - ID generation for synthesized session users
//! - Embedded fixture collections with uniqueness validation
//! - Client-side routes and role-aware navigation links
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod fixtures;
pub mod ids;
pub mod routes;

pub use errors::CoreError;
pub use fixtures::Fixtures;
