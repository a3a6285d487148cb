//! Display implementations for domain models.
//!
//! Everything formats as markdown. Items render as single list lines with
//! their ID in a code span (the ID is what every status command takes), a
//! status icon, and their descriptive metadata.

use std::fmt;

use crate::models::{Article, CustomAction, MonthPlan, MonthSummary, PlanStats};

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- `{}` {} **{}** ({} | {} | {})",
            self.id,
            self.status.with_icon(),
            self.title,
            self.category,
            self.keyword,
            self.intent
        )
    }
}

impl fmt::Display for CustomAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- `{}` {} **{}** ({} | {})",
            self.id,
            self.status.with_icon(),
            self.title,
            self.kind,
            self.channel
        )
    }
}

impl fmt::Display for MonthPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}: {}", self.month, self.focus)?;
        writeln!(f)?;
        writeln!(f, "**Strategy:** {}", self.strategy)?;
        writeln!(f)?;
        writeln!(f, "## Articles")?;
        writeln!(f)?;
        for article in &self.articles {
            writeln!(f, "{article}")?;
        }
        Ok(())
    }
}

impl fmt::Display for MonthSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- `{}` **{}**: {} ({}/{} completed)",
            self.id, self.month, self.focus, self.completed_items, self.total_items
        )
    }
}

impl fmt::Display for PlanStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Overall execution: {}/{} ({:.1}%)",
            self.done, self.total, self.percent
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{ContentStatus, CustomAction, PlanStats};

    #[test]
    fn action_line_shows_id_icon_and_channel() {
        let action = CustomAction {
            id: "cust-7".to_string(),
            month_id: 1,
            title: "Stories semanais".to_string(),
            kind: "Post".to_string(),
            channel: "Instagram".to_string(),
            status: ContentStatus::Draft,
        };
        let line = action.to_string();
        assert!(line.contains("`cust-7`"));
        assert!(line.contains("➤ Draft"));
        assert!(line.contains("Instagram"));
    }

    #[test]
    fn stats_line_formats_percent_with_one_decimal() {
        let line = PlanStats::new(36, 5).to_string();
        assert_eq!(line, "Overall execution: 5/36 (13.9%)");
    }
}
