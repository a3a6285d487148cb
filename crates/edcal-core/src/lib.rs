//! Core library for the edcal editorial calendar.
//!
//! This crate provides the business logic for tracking a fixed 12-month
//! content plan plus user-added marketing actions: the tri-state workflow
//! machine, the in-memory plan store, durable key-value persistence with
//! legacy-key migration and load-time reconciliation, the backup codec, and
//! the draft-generation client.
//!
//! # Quick Start
//!
//! ```rust
//! use edcal_core::{CalendarBuilder, params::ItemId};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Load (or initialize) the calendar from a storage file
//! let calendar = CalendarBuilder::new()
//!     .with_database_path(Some("plan.db"))
//!     .build()
//!     .await?;
//!
//! // Advance an article through its workflow; the change is persisted by a
//! // debounced write, or immediately by flushing before exit.
//! let article = calendar
//!     .cycle_article(&ItemId { id: "jan1".to_string() })
//!     .await;
//! if let Some(article) = article {
//!     println!("{article}");
//! }
//! calendar.flush().await?;
//! # Ok(())
//! # }
//! ```

pub mod backup;
pub mod calendar;
pub mod catalog;
pub mod display;
pub mod draft;
pub mod error;
pub mod models;
pub mod params;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use calendar::{Calendar, CalendarBuilder, DEFAULT_DEBOUNCE};
pub use display::{MonthDetail, MonthSummaries, OperationStatus, Report};
pub use draft::{DraftClient, DRAFT_FALLBACK_MESSAGE};
pub use error::{CalendarError, Result};
pub use models::{
    Article, ContentStatus, CustomAction, MonthPlan, MonthSummary, PlanDocument, PlanStats,
};
pub use storage::{Storage, StorageKeys};
pub use store::PlanStore;
