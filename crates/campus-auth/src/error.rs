use campus_core::CoreError;
use thiserror::Error;

/// Message shown for any failure without a more specific explanation.
pub const GENERIC_FAILURE: &str = "Authentication failed. Please try again.";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("an account already exists for {email}")]
    DuplicateAccount { email: String },

    #[error("administrator accounts cannot be created by sign-up")]
    AdminSignUp,

    #[error("authentication timed out after {after_ms}ms")]
    Timeout { after_ms: u64 },

    /// Reserved for a networked backend; the simulated flow never produces it.
    #[error("transport error: {0}")]
    Transport(String),

    #[error("another sign-in or sign-up is still pending")]
    SubmitPending,

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl AuthError {
    /// Text for the auth form's error banner.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "Invalid email or password.",
            Self::DuplicateAccount { .. } => "An account with this email already exists.",
            Self::AdminSignUp => "Administrator accounts cannot be created by sign-up.",
            Self::Timeout { .. } => "The server took too long to respond. Please try again.",
            Self::Transport(_) => "Could not reach the server. Check your connection and try again.",
            Self::SubmitPending => "Please wait for the current request to finish.",
            Self::Core(_) => GENERIC_FAILURE,
        }
    }
}
