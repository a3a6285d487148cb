//! Load-time reconciliation of persisted data against the catalog.
//!
//! Stored month lists are never trusted directly. The catalog decides which
//! months exist; a stored month is taken wholesale when its id matches a
//! canonical one (that is where user-edited article statuses live), and the
//! canonical month fills any gap. The result always has exactly twelve
//! months, even when the stored data predates a catalog change.

use crate::{
    catalog,
    models::{MonthPlan, PlanDocument},
    store::PlanStore,
};

/// Merges a stored month list onto the canonical catalog.
///
/// For each canonical month (by id, in catalog order), the stored record
/// with the same id wins; months missing from the stored list fall back to
/// their canonical defaults. Extra stored months with ids outside the
/// catalog are dropped.
pub fn reconcile_plan(stored: &[MonthPlan]) -> Vec<MonthPlan> {
    catalog::default_plan()
        .into_iter()
        .map(|canonical| {
            stored
                .iter()
                .find(|m| m.id == canonical.id)
                .cloned()
                .unwrap_or(canonical)
        })
        .collect()
}

/// Builds a full store from a loaded document.
///
/// The plan half goes through [`reconcile_plan`]; custom actions are trusted
/// verbatim when present and default to empty otherwise.
pub fn reconcile_document(document: PlanDocument) -> PlanStore {
    let plan = match document.plan {
        Some(stored) => reconcile_plan(&stored),
        None => catalog::default_plan(),
    };
    PlanStore::new(plan, document.custom_actions.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContentStatus, CustomAction};

    #[test]
    fn edits_are_preserved_and_gaps_filled() {
        // Stored data: month 5 missing, month 0's first article completed.
        let mut stored = catalog::default_plan();
        stored[0].articles[0].status = ContentStatus::Completed;
        stored.retain(|m| m.id != 5);

        let merged = reconcile_plan(&stored);
        assert_eq!(merged.len(), catalog::MONTH_COUNT);
        assert_eq!(merged[0].articles[0].status, ContentStatus::Completed);
        assert_eq!(merged[5], catalog::default_plan()[5]);
    }

    #[test]
    fn unknown_month_ids_are_dropped() {
        let mut stored = catalog::default_plan();
        stored[3].id = 42;

        let merged = reconcile_plan(&stored);
        assert_eq!(merged.len(), catalog::MONTH_COUNT);
        assert!(merged.iter().all(|m| m.id <= 11));
        // Month 3 had no stored record under its own id, so it reverts.
        assert_eq!(merged[3], catalog::default_plan()[3]);
    }

    #[test]
    fn document_without_plan_yields_defaults() {
        let store = reconcile_document(PlanDocument::default());
        assert_eq!(store, PlanStore::default());
    }

    #[test]
    fn custom_actions_are_trusted_verbatim() {
        let action = CustomAction {
            id: "cust-1".to_string(),
            month_id: 2,
            title: "Reels".to_string(),
            kind: "Vídeo".to_string(),
            channel: "Instagram".to_string(),
            status: ContentStatus::Draft,
        };
        let store = reconcile_document(PlanDocument {
            plan: None,
            custom_actions: Some(vec![action.clone()]),
        });
        assert_eq!(store.custom_actions, vec![action]);
        assert_eq!(store.plan.len(), catalog::MONTH_COUNT);
    }
}
