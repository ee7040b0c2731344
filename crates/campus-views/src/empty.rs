//! Empty states: what a page shows when a valid filter leaves nothing to list.

use serde::Serialize;

/// Action offered next to an empty state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum RecoveryAction {
    ClearFilters,
    /// Drop the admin console's free-text query.
    ClearSearch,
    ShowAllAreas,
    SwitchTab { tab: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub title: String,
    pub message: String,
    pub action: RecoveryAction,
}

impl EmptyState {
    #[must_use]
    pub fn new(title: &str, message: &str, action: RecoveryAction) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            action,
        }
    }
}
