//! Board Configuration
//!
//! Every field has a default, so a partial JSON object is a valid config.

use serde::{Deserialize, Serialize};
use crate::domain::{BoardError, BoardResult};
use crate::persistence::KeyValueStore;

/// Storage key the app reads its configuration from
pub const CONFIG_KEY: &str = "kanban-config";

/// What rename/delete do when the id is not on the board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupPolicy {
    /// Silent no-op
    Ignore,
    /// No-op with a warning
    #[default]
    Log,
    /// Return the error to the caller
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoardConfig {
    pub storage_key: String,
    pub legacy_status_key: String,
    pub legacy_tasks_key: String,
    pub import_legacy_slots: bool,
    pub lookup_policy: LookupPolicy,
    /// `tracing` level name
    pub log_level: String,
    /// Pointer travel before a press becomes a drag
    pub drag_threshold_px: i32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: "kanban-board".to_string(),
            legacy_status_key: "status".to_string(),
            legacy_tasks_key: "tasks".to_string(),
            import_legacy_slots: true,
            lookup_policy: LookupPolicy::Log,
            log_level: "info".to_string(),
            drag_threshold_px: 10,
        }
    }
}

impl BoardConfig {
    pub fn from_json(json: &str) -> BoardResult<Self> {
        serde_json::from_str(json).map_err(|e| BoardError::InvalidConfig(e.to_string()))
    }

    /// Read the config slot. An empty slot yields the defaults.
    pub fn read<S: KeyValueStore>(store: &S, key: &str) -> BoardResult<Self> {
        match store.get(key)? {
            Some(json) => Self::from_json(&json),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = BoardConfig::from_json(r#"{"lookupPolicy":"reject","dragThresholdPx":4}"#).unwrap();
        assert_eq!(config.lookup_policy, LookupPolicy::Reject);
        assert_eq!(config.drag_threshold_px, 4);
        assert_eq!(config.storage_key, "kanban-board");
        assert!(config.import_legacy_slots);
    }

    #[test]
    fn test_bad_config_is_reported() {
        let store = MemoryStore::with_slots([(CONFIG_KEY, r#"{"lookupPolicy":"sometimes"}"#)]);
        assert!(matches!(
            BoardConfig::read(&store, CONFIG_KEY),
            Err(BoardError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_missing_config_is_default() {
        assert_eq!(BoardConfig::read(&MemoryStore::new(), CONFIG_KEY), Ok(BoardConfig::default()));
    }
}
