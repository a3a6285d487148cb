//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::models::{ContentStatus, CustomAction, MonthPlan, MonthSummary};

/// Newtype wrapper for displaying the month list.
///
/// Formats one summary line per month without a title header, so consumers
/// can add their own heading.
pub struct MonthSummaries(pub Vec<MonthSummary>);

impl MonthSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, MonthSummary> {
        self.0.iter()
    }
}

impl fmt::Display for MonthSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No months planned.");
        }
        for summary in &self.0 {
            writeln!(f, "{summary}")?;
        }
        Ok(())
    }
}

/// One month's full view: the plan plus the custom actions attached to it.
pub struct MonthDetail {
    /// The month plan, with strategy text and articles
    pub month: MonthPlan,
    /// Custom actions assigned to this month, insertion order
    pub actions: Vec<CustomAction>,
}

impl fmt::Display for MonthDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.month)?;
        writeln!(f)?;
        writeln!(f, "## Custom actions")?;
        writeln!(f)?;
        if self.actions.is_empty() {
            writeln!(f, "No custom actions planned for this month.")?;
        } else {
            for action in &self.actions {
                writeln!(f, "{action}")?;
            }
        }
        Ok(())
    }
}

/// One row of the flat execution report.
pub struct ReportRow {
    /// Display name of the month the item belongs to
    pub month: String,
    /// Article category or action channel
    pub label: String,
    /// Item title
    pub title: String,
    /// Current workflow status
    pub status: ContentStatus,
}

/// The flat execution report across all months, catalog order.
pub struct Report(pub Vec<ReportRow>);

impl Report {
    /// Count of completed rows.
    pub fn done(&self) -> usize {
        self.0.iter().filter(|r| r.status.is_completed()).count()
    }

    /// Count of rows in any other status.
    pub fn pending(&self) -> usize {
        self.0.len() - self.done()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No actions recorded.");
        }
        writeln!(f, "**Done:** {}  **Pending:** {}", self.done(), self.pending())?;
        writeln!(f)?;
        writeln!(f, "| Month | Channel / Category | Item | Status |")?;
        writeln!(f, "|-------|--------------------|------|--------|")?;
        for row in &self.0 {
            writeln!(
                f,
                "| {} | {} | {} | {} |",
                row.month,
                row.label,
                row.title,
                row.status.with_icon()
            )?;
        }
        Ok(())
    }
}
