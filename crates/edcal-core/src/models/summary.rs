//! Month summary types.

use serde::{Deserialize, Serialize};

use super::{CustomAction, MonthPlan};

/// Summary of one month with item counts, for list display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthSummary {
    /// Month ordinal (0..=11)
    pub id: u8,
    /// Display name of the month
    pub month: String,
    /// Editorial focus for the month
    pub focus: String,
    /// Articles plus custom actions planned for the month
    pub total_items: u32,
    /// Items with completed status
    pub completed_items: u32,
}

impl MonthSummary {
    /// Builds a summary from a month plan and the actions assigned to it.
    pub fn from_month(month: &MonthPlan, actions: &[&CustomAction]) -> Self {
        let completed = month
            .articles
            .iter()
            .filter(|a| a.status.is_completed())
            .count()
            + actions.iter().filter(|a| a.status.is_completed()).count();

        Self {
            id: month.id,
            month: month.month.clone(),
            focus: month.focus.clone(),
            total_items: (month.articles.len() + actions.len()) as u32,
            completed_items: completed as u32,
        }
    }
}
