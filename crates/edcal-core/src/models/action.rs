//! Custom action model definition.

use serde::{Deserialize, Serialize};

use super::ContentStatus;

/// A user-added, user-deletable planned marketing activity.
///
/// Unlike articles, custom actions are created and destroyed at runtime and
/// have no catalog fallback. The wire field names (`monthId`, `type`) are
/// pinned by the persisted document format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomAction {
    /// Unique identifier, assigned at creation and never reassigned
    pub id: String,

    /// Month this action belongs to (0..=11), selected once at creation
    #[serde(rename = "monthId")]
    pub month_id: u8,

    /// Title of the activity
    pub title: String,

    /// Activity format, e.g. "Post" or "Vídeo"
    #[serde(rename = "type")]
    pub kind: String,

    /// Destination channel, e.g. "Instagram"; may be a custom string
    pub channel: String,

    /// Current workflow status
    pub status: ContentStatus,
}
