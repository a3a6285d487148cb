//! Article model definition.

use serde::{Deserialize, Serialize};

use super::ContentStatus;

/// A catalog-defined planned piece of content.
///
/// Articles are authored into the content catalog at build time and belong to
/// exactly one month. Their descriptive metadata is immutable; only `status`
/// changes at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Article {
    /// Unique identifier for the article (catalog-assigned, e.g. `jan1`)
    pub id: String,

    /// Practice-area label (free text)
    pub category: String,

    /// Working title of the article
    pub title: String,

    /// Target search keyword
    pub keyword: String,

    /// Search-intent label (free text)
    pub intent: String,

    /// Current workflow status
    pub status: ContentStatus,
}
