//! In-memory plan store and its mutation operations.
//!
//! The [`PlanStore`] holds the twelve month plans and the flat custom-action
//! list. Every mutation is total: unknown IDs are silent no-ops (IDs are
//! normally picked from existing records, so a miss is not an error), and no
//! operation can leave the store partially updated.

use jiff::Timestamp;

use crate::{
    catalog,
    models::{Article, ContentStatus, CustomAction, MonthPlan, PlanDocument, PlanStats},
    params::AddAction,
};

/// Default activity format for new custom actions.
pub const DEFAULT_ACTION_KIND: &str = "Post";
/// Default destination channel for new custom actions.
pub const DEFAULT_ACTION_CHANNEL: &str = "Instagram";

/// The complete in-memory state: month plans plus user-added actions.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanStore {
    /// The twelve month plans, in calendar order
    pub plan: Vec<MonthPlan>,
    /// User-added actions, in insertion order
    pub custom_actions: Vec<CustomAction>,
}

impl Default for PlanStore {
    /// A store holding the pristine catalog and no custom actions.
    fn default() -> Self {
        Self {
            plan: catalog::default_plan(),
            custom_actions: Vec::new(),
        }
    }
}

impl PlanStore {
    /// Builds a store from already-reconciled parts.
    pub fn new(plan: Vec<MonthPlan>, custom_actions: Vec<CustomAction>) -> Self {
        Self {
            plan,
            custom_actions,
        }
    }

    // ------------------------------------------------------------------
    // Read queries
    // ------------------------------------------------------------------

    /// Looks up a month plan by ordinal.
    pub fn month(&self, id: u8) -> Option<&MonthPlan> {
        self.plan.iter().find(|m| m.id == id)
    }

    /// Returns the custom actions attached to a month, in insertion order.
    pub fn actions_for_month(&self, month_id: u8) -> Vec<&CustomAction> {
        self.custom_actions
            .iter()
            .filter(|a| a.month_id == month_id)
            .collect()
    }

    /// Looks up an article by ID across all months.
    pub fn find_article(&self, id: &str) -> Option<&Article> {
        self.plan
            .iter()
            .flat_map(|m| m.articles.iter())
            .find(|a| a.id == id)
    }

    /// Looks up a custom action by ID.
    pub fn find_action(&self, id: &str) -> Option<&CustomAction> {
        self.custom_actions.iter().find(|a| a.id == id)
    }

    /// Completion statistics over every article and custom action.
    pub fn stats(&self) -> PlanStats {
        let articles = self.plan.iter().flat_map(|m| m.articles.iter());
        let total = articles.clone().count() + self.custom_actions.len();
        let done = articles.filter(|a| a.status.is_completed()).count()
            + self
                .custom_actions
                .iter()
                .filter(|a| a.status.is_completed())
                .count();
        PlanStats::new(total as u32, done as u32)
    }

    /// Clones the store into its persisted document shape.
    pub fn document(&self) -> PlanDocument {
        PlanDocument::new(self.plan.clone(), self.custom_actions.clone())
    }

    // ------------------------------------------------------------------
    // Article mutations
    // ------------------------------------------------------------------

    /// Advances an article's status to its cyclic successor.
    ///
    /// Returns a clone of the updated article, or None (and no change) when
    /// the ID matches nothing.
    pub fn cycle_article_status(&mut self, id: &str) -> Option<Article> {
        self.update_article(id, ContentStatus::next)
    }

    /// Sets an article's status from a completion toggle.
    pub fn toggle_article_completed(&mut self, id: &str, checked: bool) -> Option<Article> {
        self.update_article(id, |_| ContentStatus::from_completed(checked))
    }

    fn update_article(
        &mut self,
        id: &str,
        transition: impl Fn(ContentStatus) -> ContentStatus,
    ) -> Option<Article> {
        let article = self
            .plan
            .iter_mut()
            .flat_map(|m| m.articles.iter_mut())
            .find(|a| a.id == id)?;
        article.status = transition(article.status);
        Some(article.clone())
    }

    // ------------------------------------------------------------------
    // Custom action mutations
    // ------------------------------------------------------------------

    /// Advances a custom action's status to its cyclic successor.
    pub fn cycle_action_status(&mut self, id: &str) -> Option<CustomAction> {
        self.update_action(id, ContentStatus::next)
    }

    /// Sets a custom action's status from a completion toggle.
    pub fn toggle_action_completed(&mut self, id: &str, checked: bool) -> Option<CustomAction> {
        self.update_action(id, |_| ContentStatus::from_completed(checked))
    }

    fn update_action(
        &mut self,
        id: &str,
        transition: impl Fn(ContentStatus) -> ContentStatus,
    ) -> Option<CustomAction> {
        let action = self.custom_actions.iter_mut().find(|a| a.id == id)?;
        action.status = transition(action.status);
        Some(action.clone())
    }

    /// Appends a new custom action and returns it.
    ///
    /// The ID is derived from the current timestamp; a numeric suffix probe
    /// keeps it unique across the whole store even when two actions are
    /// added within the same millisecond or the clock moves backwards.
    pub fn add_action(&mut self, params: &AddAction) -> CustomAction {
        let action = CustomAction {
            id: self.next_action_id(Timestamp::now()),
            month_id: params.month_id,
            title: params.title.clone(),
            kind: params
                .kind
                .clone()
                .unwrap_or_else(|| DEFAULT_ACTION_KIND.to_string()),
            channel: params
                .channel
                .clone()
                .unwrap_or_else(|| DEFAULT_ACTION_CHANNEL.to_string()),
            status: ContentStatus::Pending,
        };
        self.custom_actions.push(action.clone());
        action
    }

    /// Removes a custom action by ID, returning the removed record.
    ///
    /// The operation itself is an unconditional filter; user confirmation is
    /// the caller's responsibility.
    pub fn delete_action(&mut self, id: &str) -> Option<CustomAction> {
        let index = self.custom_actions.iter().position(|a| a.id == id)?;
        Some(self.custom_actions.remove(index))
    }

    /// Replaces the whole store with the pristine catalog and no actions.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Applies an imported document, replacing whichever halves it carries.
    ///
    /// Restore is deliberately verbatim: no reconciliation against the
    /// catalog happens here, so an incomplete backup replaces the plan with
    /// fewer than twelve months until the next startup re-reconciles it.
    pub fn apply_document(&mut self, document: PlanDocument) {
        if let Some(plan) = document.plan {
            self.plan = plan;
        }
        if let Some(actions) = document.custom_actions {
            self.custom_actions = actions;
        }
    }

    fn next_action_id(&self, now: Timestamp) -> String {
        let base = format!("cust-{}", now.as_millisecond());
        if !self.id_exists(&base) {
            return base;
        }
        let mut n = 1u32;
        loop {
            let candidate = format!("{base}-{n}");
            if !self.id_exists(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    fn id_exists(&self, id: &str) -> bool {
        self.find_article(id).is_some() || self.find_action(id).is_some()
    }
}
