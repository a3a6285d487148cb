//! Parameter structures for calendar operations.
//!
//! Shared parameter types usable across interfaces (CLI today, others later)
//! without framework-specific derives. Interface layers define their own
//! argument structs with clap derives and convert into these via `From`,
//! keeping the core free of CLI concerns.

use serde::{Deserialize, Serialize};

/// Parameters for operations addressing one planned item by its string ID.
///
/// Used by the status-cycling and completion-toggle operations for both
/// articles and custom actions, and by draft generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemId {
    /// The ID of the article or action to operate on
    pub id: String,
}

/// Parameters for operations addressing one month by ordinal.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MonthId {
    /// Month ordinal, 0 (January) through 11 (December)
    pub id: u8,
}

/// Parameters for adding a custom action.
///
/// Type and channel fall back to the most common values when unspecified;
/// the status of a new action is always pending.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddAction {
    /// Month to attach the action to (0..=11)
    pub month_id: u8,
    /// Title of the activity (required, non-blank)
    pub title: String,
    /// Activity format; defaults to "Post"
    pub kind: Option<String>,
    /// Destination channel; defaults to "Instagram"
    pub channel: Option<String>,
}

/// Parameters for deleting a custom action.
///
/// Deletion is irreversible, so it must be explicitly confirmed; the handler
/// rejects unconfirmed requests before touching the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteAction {
    /// The ID of the action to delete
    pub id: String,
    /// Must be true for the deletion to proceed
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for resetting the whole store to catalog defaults.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ResetPlan {
    /// Must be true for the reset to proceed
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for generating draft copy for a planned item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftRequest {
    /// Subject title the draft should cover
    pub title: String,
    /// Optional context line (category or action type)
    pub context: Option<String>,
}
