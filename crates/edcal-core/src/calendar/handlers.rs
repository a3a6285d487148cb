//! Calendar operation handlers.
//!
//! Each handler takes a framework-free parameter struct, applies the change
//! to the store, and schedules the debounced save when something actually
//! changed. Status mutations on unknown IDs return `None` and change
//! nothing; IDs are normally picked from existing records, so a miss is a
//! notice, not an error.

use tokio::task;

use super::Calendar;
use crate::{
    backup,
    display::{MonthDetail, MonthSummaries, Report, ReportRow},
    error::{CalendarError, Result},
    models::{Article, CustomAction, MonthSummary, PlanStats},
    params::{AddAction, DeleteAction, DraftRequest, ItemId, MonthId, ResetPlan},
    storage::Storage,
};

impl Calendar {
    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Summaries of all twelve months with completion counts.
    pub async fn list_months(&self) -> MonthSummaries {
        let store = self.store();
        let summaries = store
            .plan
            .iter()
            .map(|m| MonthSummary::from_month(m, &store.actions_for_month(m.id)))
            .collect();
        MonthSummaries(summaries)
    }

    /// One month's full detail: strategy text, articles, custom actions.
    pub async fn show_month(&self, params: &MonthId) -> Option<MonthDetail> {
        let store = self.store();
        let month = store.month(params.id)?.clone();
        let actions = store
            .actions_for_month(params.id)
            .into_iter()
            .cloned()
            .collect();
        Some(MonthDetail { month, actions })
    }

    /// Completion statistics across every planned item.
    pub async fn stats(&self) -> PlanStats {
        self.store().stats()
    }

    /// Flat execution report across all months, catalog order.
    ///
    /// Articles come first within each month, followed by that month's
    /// custom actions; the label column carries the article category or the
    /// action channel.
    pub async fn report(&self) -> Report {
        let store = self.store();
        let mut rows = Vec::new();
        for month in &store.plan {
            for article in &month.articles {
                rows.push(ReportRow {
                    month: month.month.clone(),
                    label: article.category.clone(),
                    title: article.title.clone(),
                    status: article.status,
                });
            }
            for action in store.actions_for_month(month.id) {
                rows.push(ReportRow {
                    month: month.month.clone(),
                    label: action.channel.clone(),
                    title: action.title.clone(),
                    status: action.status,
                });
            }
        }
        Report(rows)
    }

    /// Resolves a planned item into a draft-generation request.
    ///
    /// Articles contribute their category as context, actions their type,
    /// matching what the content brief expects.
    pub async fn draft_request(&self, params: &ItemId) -> Result<DraftRequest> {
        let store = self.store();
        if let Some(article) = store.find_article(&params.id) {
            return Ok(DraftRequest {
                title: article.title.clone(),
                context: Some(format!("Categoria: {}", article.category)),
            });
        }
        if let Some(action) = store.find_action(&params.id) {
            return Ok(DraftRequest {
                title: action.title.clone(),
                context: Some(format!("Tipo: {}", action.kind)),
            });
        }
        Err(CalendarError::ItemNotFound {
            id: params.id.clone(),
        })
    }

    // ------------------------------------------------------------------
    // Article mutations
    // ------------------------------------------------------------------

    /// Advances an article to its next workflow status.
    pub async fn cycle_article(&self, params: &ItemId) -> Option<Article> {
        let updated = self.store().cycle_article_status(&params.id);
        if updated.is_some() {
            self.schedule_save();
        }
        updated
    }

    /// Sets an article's status from a completion toggle.
    pub async fn toggle_article(&self, params: &ItemId, checked: bool) -> Option<Article> {
        let updated = self.store().toggle_article_completed(&params.id, checked);
        if updated.is_some() {
            self.schedule_save();
        }
        updated
    }

    // ------------------------------------------------------------------
    // Custom action mutations
    // ------------------------------------------------------------------

    /// Advances a custom action to its next workflow status.
    pub async fn cycle_action(&self, params: &ItemId) -> Option<CustomAction> {
        let updated = self.store().cycle_action_status(&params.id);
        if updated.is_some() {
            self.schedule_save();
        }
        updated
    }

    /// Sets a custom action's status from a completion toggle.
    pub async fn toggle_action(&self, params: &ItemId, checked: bool) -> Option<CustomAction> {
        let updated = self.store().toggle_action_completed(&params.id, checked);
        if updated.is_some() {
            self.schedule_save();
        }
        updated
    }

    /// Adds a custom action after validating its input.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::InvalidInput` when the title is blank or the
    /// month ordinal is out of range.
    pub async fn add_action(&self, params: &AddAction) -> Result<CustomAction> {
        if params.title.trim().is_empty() {
            return Err(CalendarError::invalid_input(
                "title",
                "Action title must not be blank",
            ));
        }
        if params.month_id > 11 {
            return Err(CalendarError::invalid_input(
                "month_id",
                "Month ordinal must be between 0 (Janeiro) and 11 (Dezembro)",
            ));
        }

        let action = self.store().add_action(params);
        self.schedule_save();
        Ok(action)
    }

    /// Deletes a custom action, requiring explicit confirmation.
    ///
    /// Returns the removed record, or `None` when the ID matched nothing.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::InvalidInput` if `confirmed` is false.
    pub async fn delete_action(&self, params: &DeleteAction) -> Result<Option<CustomAction>> {
        if !params.confirmed {
            return Err(CalendarError::invalid_input(
                "confirmed",
                "Action deletion is irreversible and requires explicit confirmation. \
                 Set 'confirmed' to true to proceed.",
            ));
        }

        let removed = self.store().delete_action(&params.id);
        if removed.is_some() {
            self.schedule_save();
        }
        Ok(removed)
    }

    // ------------------------------------------------------------------
    // Whole-store operations
    // ------------------------------------------------------------------

    /// Resets the store to catalog defaults and erases all persisted state,
    /// current and legacy keys alike. Destructive and irreversible.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::InvalidInput` if `confirmed` is false.
    pub async fn reset(&self, params: &ResetPlan) -> Result<()> {
        if !params.confirmed {
            return Err(CalendarError::invalid_input(
                "confirmed",
                "Resetting erases all local progress and requires explicit confirmation. \
                 Set 'confirmed' to true to proceed.",
            ));
        }

        // Cancel first so a pending write cannot resurrect the cleared keys.
        self.cancel_pending_save();
        self.store().reset();

        let db_path = self.db_path.clone();
        let keys = self.keys.clone();
        task::spawn_blocking(move || {
            let storage = Storage::new(&db_path)?;
            storage.clear(&keys)
        })
        .await
        .map_err(|e| CalendarError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(())
    }

    /// Serializes the current store as a formatted backup document.
    pub async fn export(&self) -> Result<String> {
        backup::export_document(&self.store())
    }

    /// Applies an uploaded backup document to the store.
    ///
    /// Whichever top-level keys the document carries replace the matching
    /// store halves wholesale; no reconciliation happens here. On parse
    /// failure the store is left untouched.
    pub async fn restore(&self, text: &str) -> Result<()> {
        let document = backup::import_document(text)?;
        self.store().apply_document(document);
        self.schedule_save();
        Ok(())
    }
}
