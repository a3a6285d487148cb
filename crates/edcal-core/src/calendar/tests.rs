//! Tests for the calendar module.

use std::time::Duration;

use tempfile::TempDir;

use super::*;
use crate::{
    catalog,
    error::CalendarError,
    models::{ContentStatus, PlanDocument},
    params::{AddAction, DeleteAction, ItemId, MonthId, ResetPlan},
    storage::{Storage, StorageKeys},
};

/// Helper to build a calendar against a temp database with a short debounce.
async fn create_test_calendar() -> (TempDir, Calendar) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let calendar = CalendarBuilder::new()
        .with_database_path(Some(&db_path))
        .with_debounce(Duration::from_millis(100))
        .build()
        .await
        .expect("Failed to create calendar");
    (temp_dir, calendar)
}

fn open_storage(dir: &TempDir) -> Storage {
    Storage::new(dir.path().join("test.db")).expect("Failed to open storage")
}

fn stored_document(dir: &TempDir) -> Option<PlanDocument> {
    let raw = open_storage(dir)
        .get(&StorageKeys::default().current)
        .expect("read storage")?;
    Some(PlanDocument::from_json_str(&raw).expect("parse stored document"))
}

#[tokio::test]
async fn empty_storage_loads_catalog_defaults() {
    let (_temp_dir, calendar) = create_test_calendar().await;
    let store = calendar.snapshot();
    assert_eq!(store, crate::store::PlanStore::default());
    assert!(calendar.saved_at().is_none());
}

#[tokio::test]
async fn load_reconciles_stored_data_against_the_catalog() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");

    // Seed storage: month 5 missing, month 0's first article completed.
    let mut plan = catalog::default_plan();
    plan[0].articles[0].status = ContentStatus::Completed;
    plan.retain(|m| m.id != 5);
    let document = PlanDocument::new(plan, vec![]);
    Storage::new(&db_path)
        .expect("open storage")
        .set(
            &StorageKeys::default().current,
            &serde_json::to_string(&document).expect("serialize"),
        )
        .expect("seed storage");

    let calendar = CalendarBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("build calendar");

    let store = calendar.snapshot();
    assert_eq!(store.plan.len(), catalog::MONTH_COUNT);
    assert_eq!(store.plan[0].articles[0].status, ContentStatus::Completed);
    assert_eq!(store.plan[5], catalog::default_plan()[5]);
}

#[tokio::test]
async fn legacy_key_is_used_when_current_key_is_empty() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");

    let mut plan = catalog::default_plan();
    plan[2].articles[1].status = ContentStatus::Draft;
    let document = PlanDocument::new(plan, vec![]);
    let keys = StorageKeys::default();
    Storage::new(&db_path)
        .expect("open storage")
        .set(
            &keys.legacy[1],
            &serde_json::to_string(&document).expect("serialize"),
        )
        .expect("seed legacy key");

    let calendar = CalendarBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("build calendar");

    let store = calendar.snapshot();
    assert_eq!(store.plan[2].articles[1].status, ContentStatus::Draft);
    assert_eq!(store.plan.len(), catalog::MONTH_COUNT);
}

#[tokio::test]
async fn unreadable_document_falls_back_to_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    Storage::new(&db_path)
        .expect("open storage")
        .set(&StorageKeys::default().current, "{definitely not json")
        .expect("seed garbage");

    let calendar = CalendarBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("build calendar");

    assert_eq!(calendar.snapshot(), crate::store::PlanStore::default());
}

#[tokio::test]
async fn flush_persists_the_current_state_immediately() {
    let (temp_dir, calendar) = create_test_calendar().await;

    calendar
        .cycle_article(&ItemId {
            id: "jan1".to_string(),
        })
        .await;
    calendar.flush().await.expect("flush");
    assert!(calendar.saved_at().is_some());

    let document = stored_document(&temp_dir).expect("document written");
    let plan = document.plan.expect("plan present");
    assert_eq!(plan[0].articles[0].status, ContentStatus::Draft);
}

#[tokio::test]
async fn debounced_writes_coalesce_into_one() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let calendar = CalendarBuilder::new()
        .with_database_path(Some(&db_path))
        .with_debounce(Duration::from_millis(300))
        .build()
        .await
        .expect("Failed to create calendar");
    let id = ItemId {
        id: "jan1".to_string(),
    };

    // First mutation arms a 300 ms timer.
    calendar.cycle_article(&id).await;
    tokio::time::sleep(Duration::from_millis(150)).await;

    // Second mutation at t=150 cancels the first timer and arms a new one
    // (deadline t=450).
    calendar.cycle_article(&id).await;
    tokio::time::sleep(Duration::from_millis(200)).await;

    // t=350: past the first timer's deadline. Had it not been canceled, a
    // document with the intermediate (draft) state would exist by now.
    assert!(stored_document(&temp_dir).is_none());
    assert!(calendar.save_pending());

    // t=650: past the second timer's deadline; the single write holds the
    // state after the last mutation.
    tokio::time::sleep(Duration::from_millis(300)).await;
    let document = stored_document(&temp_dir).expect("document written");
    let plan = document.plan.expect("plan present");
    assert_eq!(plan[0].articles[0].status, ContentStatus::Completed);
    assert!(calendar.saved_at().is_some());
}

#[tokio::test]
async fn mutations_survive_a_restart() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");

    let action_id = {
        let calendar = CalendarBuilder::new()
            .with_database_path(Some(&db_path))
            .build()
            .await
            .expect("build calendar");
        let action = calendar
            .add_action(&AddAction {
                month_id: 7,
                title: "Campanha dia dos pais".to_string(),
                kind: None,
                channel: Some("WhatsApp".to_string()),
            })
            .await
            .expect("add action");
        calendar.flush().await.expect("flush");
        action.id
    };

    let calendar = CalendarBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("rebuild calendar");
    let store = calendar.snapshot();
    assert_eq!(store.custom_actions.len(), 1);
    assert_eq!(store.custom_actions[0].id, action_id);
    assert_eq!(store.custom_actions[0].channel, "WhatsApp");
}

#[tokio::test]
async fn delete_requires_confirmation() {
    let (_temp_dir, calendar) = create_test_calendar().await;
    let action = calendar
        .add_action(&AddAction {
            month_id: 0,
            title: "Post teste".to_string(),
            kind: None,
            channel: None,
        })
        .await
        .expect("add action");

    let err = calendar
        .delete_action(&DeleteAction {
            id: action.id.clone(),
            confirmed: false,
        })
        .await
        .expect_err("unconfirmed delete must fail");
    assert!(matches!(err, CalendarError::InvalidInput { .. }));
    assert_eq!(calendar.snapshot().custom_actions.len(), 1);

    let removed = calendar
        .delete_action(&DeleteAction {
            id: action.id,
            confirmed: true,
        })
        .await
        .expect("confirmed delete");
    assert!(removed.is_some());
    assert!(calendar.snapshot().custom_actions.is_empty());
}

#[tokio::test]
async fn add_action_rejects_blank_titles() {
    let (_temp_dir, calendar) = create_test_calendar().await;
    let err = calendar
        .add_action(&AddAction {
            month_id: 0,
            title: "   ".to_string(),
            kind: None,
            channel: None,
        })
        .await
        .expect_err("blank title must fail");
    assert!(matches!(err, CalendarError::InvalidInput { .. }));
}

#[tokio::test]
async fn reset_clears_current_and_legacy_keys() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let keys = StorageKeys::default();

    // Seed both a legacy key and, via a flush, the current key.
    Storage::new(&db_path)
        .expect("open storage")
        .set(&keys.legacy[0], "{\"plan\": []}")
        .expect("seed legacy");
    let calendar = CalendarBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("build calendar");
    calendar
        .cycle_article(&ItemId {
            id: "jan1".to_string(),
        })
        .await;
    calendar.flush().await.expect("flush");

    let err = calendar.reset(&ResetPlan { confirmed: false }).await;
    assert!(err.is_err());

    calendar
        .reset(&ResetPlan { confirmed: true })
        .await
        .expect("confirmed reset");

    assert_eq!(calendar.snapshot(), crate::store::PlanStore::default());
    let storage = Storage::new(&db_path).expect("open storage");
    for key in keys.lookup_order() {
        assert_eq!(storage.get(key).expect("get"), None);
    }
}

#[tokio::test]
async fn restore_replaces_store_and_schedules_a_save() {
    let (_temp_dir, calendar) = create_test_calendar().await;

    let mut plan = catalog::default_plan();
    plan[9].articles[0].status = ContentStatus::Completed;
    let backup = serde_json::to_string(&PlanDocument::new(plan, vec![])).expect("serialize");

    calendar.restore(&backup).await.expect("restore");
    assert_eq!(
        calendar.snapshot().plan[9].articles[0].status,
        ContentStatus::Completed
    );
    assert!(calendar.save_pending());
}

#[tokio::test]
async fn restore_of_invalid_text_leaves_store_untouched() {
    let (_temp_dir, calendar) = create_test_calendar().await;
    let before = calendar.snapshot();

    let err = calendar.restore("][ broken").await;
    assert!(matches!(err, Err(CalendarError::Serialization { .. })));
    assert_eq!(calendar.snapshot(), before);
    assert!(!calendar.save_pending());
}

#[tokio::test]
async fn show_month_includes_its_actions_only() {
    let (_temp_dir, calendar) = create_test_calendar().await;
    calendar
        .add_action(&AddAction {
            month_id: 2,
            title: "Série de reels".to_string(),
            kind: Some("Vídeo".to_string()),
            channel: None,
        })
        .await
        .expect("add action");

    let detail = calendar
        .show_month(&MonthId { id: 2 })
        .await
        .expect("month exists");
    assert_eq!(detail.month.month, "Março");
    assert_eq!(detail.actions.len(), 1);

    let other = calendar
        .show_month(&MonthId { id: 3 })
        .await
        .expect("month exists");
    assert!(other.actions.is_empty());
}

#[tokio::test]
async fn draft_request_uses_category_for_articles_and_type_for_actions() {
    let (_temp_dir, calendar) = create_test_calendar().await;

    let request = calendar
        .draft_request(&ItemId {
            id: "out1".to_string(),
        })
        .await
        .expect("article exists");
    assert_eq!(request.context.as_deref(), Some("Categoria: Empresarial"));

    let action = calendar
        .add_action(&AddAction {
            month_id: 0,
            title: "Newsletter mensal".to_string(),
            kind: Some("Email".to_string()),
            channel: None,
        })
        .await
        .expect("add action");
    let request = calendar
        .draft_request(&ItemId { id: action.id })
        .await
        .expect("action exists");
    assert_eq!(request.context.as_deref(), Some("Tipo: Email"));

    let missing = calendar
        .draft_request(&ItemId {
            id: "nope".to_string(),
        })
        .await;
    assert!(matches!(missing, Err(CalendarError::ItemNotFound { .. })));
}
