//! # campus-auth
//!
//! Simulated authentication for CampusRoot.
//!
//! [`SessionStore`] owns the single signed-in user. Sign-in and sign-up
//! resolve after a configurable latency without checking credentials, unless
//! `auth.enforce_credentials` is set. Views read the user through
//! [`SessionStore::current_user`]; nothing is global.

pub mod error;
pub mod session;

pub use error::{AuthError, GENERIC_FAILURE};
pub use session::SessionStore;
