//! Backup export/import codec.
//!
//! The backup file is the same logical document the persistence adapter
//! writes, but formatted for humans and moved through a file instead of the
//! storage key. Import is deliberately verbatim (no reconciliation); see
//! [`crate::store::PlanStore::apply_document`].

use jiff::civil::Date;

use crate::{error::Result, models::PlanDocument, store::PlanStore};

/// Prefix of suggested backup file names.
pub const BACKUP_FILE_PREFIX: &str = "backup_marketing_2026_";

/// Serializes the store as a formatted, human-readable backup document.
pub fn export_document(store: &PlanStore) -> Result<String> {
    store.document().to_json_pretty()
}

/// Parses an uploaded backup document.
///
/// # Errors
///
/// Returns `CalendarError::Serialization` when the text is not JSON; callers
/// must leave their store untouched in that case.
pub fn import_document(text: &str) -> Result<PlanDocument> {
    PlanDocument::from_json_str(text)
}

/// Suggested file name for a backup taken on the given date.
pub fn backup_file_name(date: Date) -> String {
    format!("{BACKUP_FILE_PREFIX}{date}.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        catalog,
        models::ContentStatus,
        params::AddAction,
    };
    use jiff::civil::date;

    #[test]
    fn file_name_embeds_the_iso_date() {
        assert_eq!(
            backup_file_name(date(2026, 8, 7)),
            "backup_marketing_2026_2026-08-07.json"
        );
    }

    #[test]
    fn export_import_round_trips_a_full_store() {
        let mut store = PlanStore::default();
        store.cycle_article_status("mar2");
        store.add_action(&AddAction {
            month_id: 4,
            title: "Live de dúvidas".to_string(),
            kind: Some("Vídeo".to_string()),
            channel: None,
        });

        let text = export_document(&store).expect("export");
        let document = import_document(&text).expect("import");

        let mut restored = PlanStore::new(Vec::new(), Vec::new());
        restored.apply_document(document);
        assert_eq!(restored, store);
    }

    #[test]
    fn import_of_partial_document_only_replaces_present_keys() {
        let text = r#"{"customActions": []}"#;
        let document = import_document(text).expect("import");
        assert!(document.plan.is_none());
        assert_eq!(document.custom_actions, Some(vec![]));
    }

    #[test]
    fn import_of_garbage_is_an_error() {
        assert!(import_document("not json at all").is_err());
    }

    #[test]
    fn import_does_not_reconcile_short_plans() {
        // A partial backup really does come back with fewer months; the
        // next startup's load protocol is what tops it back up to twelve.
        let mut short = catalog::default_plan();
        short.truncate(2);
        short[0].articles[0].status = ContentStatus::Completed;
        let text = export_document(&PlanStore::new(short.clone(), Vec::new())).expect("export");

        let document = import_document(&text).expect("import");
        assert_eq!(document.plan, Some(short));
    }
}
