//! Storage key configuration, including the legacy migration list.

/// The key the application currently writes to.
pub const CURRENT_KEY: &str = "legal_planner_2026_core_v5";

/// Deprecated keys from earlier releases, newest first. Consulted only as a
/// read fallback; never written.
pub const LEGACY_KEYS: [&str; 3] = [
    "legal_planner_2026_core_v4",
    "legal_planner_2026_core_data",
    "legal_marketing_planner_2026",
];

/// The ordered key set the persistence adapter operates on.
///
/// Loading scans `current` first and then each legacy key in order, taking
/// the first non-empty hit. Resetting removes every key in the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    /// Key written on every save
    pub current: String,
    /// Read-fallback keys, in scan order
    pub legacy: Vec<String>,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            current: CURRENT_KEY.to_string(),
            legacy: LEGACY_KEYS.iter().map(|k| (*k).to_string()).collect(),
        }
    }
}

impl StorageKeys {
    /// All keys in lookup order: current first, then legacy.
    pub fn lookup_order(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.current.as_str()).chain(self.legacy.iter().map(String::as_str))
    }
}
