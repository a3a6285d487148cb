//! Month plan model definition.

use serde::{Deserialize, Serialize};

use super::Article;

/// One calendar month's container of planned articles plus strategy text.
///
/// Exactly twelve of these exist at all times, with ids 0..=11 matching the
/// calendar month ordinal. Article membership is fixed at catalog-authoring
/// time; the runtime only mutates nested article statuses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthPlan {
    /// Month ordinal, 0 (January) through 11 (December)
    pub id: u8,

    /// Display name of the month
    pub month: String,

    /// Editorial focus for the month
    pub focus: String,

    /// Strategy guidance text
    pub strategy: String,

    /// Planned articles, in catalog order
    pub articles: Vec<Article>,
}
