//! Status enumeration for planned content.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of content workflow statuses.
///
/// Every planned item (catalog article or custom action) moves through the
/// same three-state workflow. The cycle is closed: advancing a completed item
/// starts it over at pending.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    /// Item has not been started
    #[default]
    Pending,

    /// Item is being written
    Draft,

    /// Item has been published/executed
    Completed,
}

impl FromStr for ContentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(ContentStatus::Pending),
            "draft" => Ok(ContentStatus::Draft),
            "completed" => Ok(ContentStatus::Completed),
            _ => Err(format!("Invalid content status: {s}")),
        }
    }
}

impl ContentStatus {
    /// Returns the successor in the workflow cycle.
    ///
    /// The function is total over the three-element domain and cyclic:
    /// pending → draft → completed → pending.
    pub fn next(self) -> Self {
        match self {
            ContentStatus::Pending => ContentStatus::Draft,
            ContentStatus::Draft => ContentStatus::Completed,
            ContentStatus::Completed => ContentStatus::Pending,
        }
    }

    /// Maps a completion checkbox directly to a status.
    ///
    /// Unchecking always resets to pending, never back to draft. That is the
    /// intended behavior of the completion toggle, not an oversight: the
    /// toggle expresses "done or not", and "not done" means starting over.
    pub fn from_completed(checked: bool) -> Self {
        if checked {
            ContentStatus::Completed
        } else {
            ContentStatus::Pending
        }
    }

    /// Whether this status counts toward completion statistics.
    pub fn is_completed(self) -> bool {
        matches!(self, ContentStatus::Completed)
    }

    /// Convert to wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentStatus::Pending => "pending",
            ContentStatus::Draft => "draft",
            ContentStatus::Completed => "completed",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Icons Used
    /// - `✓ Completed` - Checkmark for published/executed items
    /// - `➤ Draft` - Arrow for items being written
    /// - `○ Pending` - Circle for untouched items
    pub fn with_icon(&self) -> &'static str {
        match self {
            ContentStatus::Completed => "✓ Completed",
            ContentStatus::Draft => "➤ Draft",
            ContentStatus::Pending => "○ Pending",
        }
    }
}
