//! View error types for campus-views.

/// Errors from page actions. Empty results are not errors.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: &'static str, id: String },

    #[error("event {id} is at capacity")]
    EventFull { id: String },

    #[error("event {id} has already taken place")]
    EventClosed { id: String },

    #[error("mentor {id} is not accepting requests")]
    MentorUnavailable { id: String },

    #[error("admin privileges required")]
    AccessDenied,

    #[error("no donation amount selected")]
    MissingAmount,

    #[error("invalid donation amount '{0}': must be a number greater than zero")]
    InvalidAmount(String),

    #[error("{0} is not one of the preset amounts")]
    UnknownPreset(u64),

    #[error("donor name and email are required unless donating anonymously")]
    MissingDonorDetails,
}
