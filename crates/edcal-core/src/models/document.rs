//! The persisted plan document.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use super::{CustomAction, MonthPlan};
use crate::error::Result;

/// The top-level document written to storage and to backup files.
///
/// Both keys are optional on the way in: older documents (and partial
/// backups) may carry only one of them. Serialization skips absent keys so a
/// round-trip preserves the original key set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PlanDocument {
    /// The twelve month plans, if present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<Vec<MonthPlan>>,

    /// User-added actions, if present
    #[serde(rename = "customActions", skip_serializing_if = "Option::is_none")]
    pub custom_actions: Option<Vec<CustomAction>>,
}

impl PlanDocument {
    /// Builds a complete document from both halves of the store.
    pub fn new(plan: Vec<MonthPlan>, custom_actions: Vec<CustomAction>) -> Self {
        Self {
            plan: Some(plan),
            custom_actions: Some(custom_actions),
        }
    }

    /// Parses a document, validating its shape loosely.
    ///
    /// The text must be valid JSON; beyond that, each top-level key is
    /// extracted independently and dropped (with a log line) when it is not a
    /// well-formed array of records. A document that is valid JSON but holds
    /// neither key parses to an empty `PlanDocument`.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::Serialization` when the text is not JSON.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self {
            plan: extract_records(&value, "plan"),
            custom_actions: extract_records(&value, "customActions"),
        })
    }

    /// Serializes the document as formatted, human-readable JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Whether the document carries neither key.
    pub fn is_empty(&self) -> bool {
        self.plan.is_none() && self.custom_actions.is_none()
    }
}

/// Extracts a top-level key as a typed record array, or None when the key is
/// missing, not an array, or holds records that do not decode.
fn extract_records<T: DeserializeOwned>(value: &Value, key: &str) -> Option<Vec<T>> {
    let entries = value.get(key)?;
    if !entries.is_array() {
        log::warn!("document key '{key}' is not an array; ignoring it");
        return None;
    }
    match serde_json::from_value(entries.clone()) {
        Ok(records) => Some(records),
        Err(e) => {
            log::warn!("document key '{key}' holds malformed records: {e}");
            None
        }
    }
}
