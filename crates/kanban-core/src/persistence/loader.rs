//! Board Loading and Saving
//!
//! Load order: versioned record, then the two legacy slots, then the default
//! seed. Unreadable data is logged and skipped, never returned as an error.

use serde::de::DeserializeOwned;
use tracing::{info, warn};

use super::snapshot::Snapshot;
use super::store::KeyValueStore;
use crate::board::Board;
use crate::config::BoardConfig;
use crate::domain::{BoardError, BoardResult};
use crate::seed::{default_board, default_statuses, default_tasks};

/// Where the initial board came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Snapshot,
    Legacy,
    Seed,
}

#[derive(Debug, Clone)]
pub struct LoadedBoard {
    pub board: Board,
    pub source: LoadSource,
}

pub fn load_board<S: KeyValueStore>(store: &S, config: &BoardConfig) -> LoadedBoard {
    if let Some(json) = read_slot(store, &config.storage_key) {
        match Snapshot::from_json(&json) {
            Ok(snapshot) => {
                info!(key = %config.storage_key, "loaded board snapshot");
                return LoadedBoard {
                    board: snapshot.into_board(),
                    source: LoadSource::Snapshot,
                };
            }
            Err(err) => warn!(key = %config.storage_key, %err, "discarding unreadable board snapshot"),
        }
    }

    if config.import_legacy_slots {
        if let Some(board) = load_legacy(store, config) {
            info!("imported board from legacy slots");
            return LoadedBoard {
                board,
                source: LoadSource::Legacy,
            };
        }
    }

    info!("starting from the default board");
    LoadedBoard {
        board: default_board(),
        source: LoadSource::Seed,
    }
}

/// Write the whole board as one record.
pub fn save_board<S: KeyValueStore>(store: &S, config: &BoardConfig, board: &Board) -> BoardResult<()> {
    let json = Snapshot::of(board).to_json()?;
    store.set(&config.storage_key, &json)
}

fn load_legacy<S: KeyValueStore>(store: &S, config: &BoardConfig) -> Option<Board> {
    let statuses = read_slot(store, &config.legacy_status_key);
    let tasks = read_slot(store, &config.legacy_tasks_key);
    if statuses.is_none() && tasks.is_none() {
        return None;
    }

    let statuses = parse_legacy_slot(&config.legacy_status_key, statuses).unwrap_or_else(default_statuses);
    let tasks = parse_legacy_slot(&config.legacy_tasks_key, tasks).unwrap_or_else(default_tasks);
    Some(Board::new(statuses, tasks))
}

fn parse_legacy_slot<T: DeserializeOwned>(key: &str, json: Option<String>) -> Option<Vec<T>> {
    let json = json?;
    match serde_json::from_str(&json) {
        Ok(items) => Some(items),
        Err(err) => {
            let err = BoardError::Serialization(err.to_string());
            warn!(key, %err, "discarding unreadable legacy slot");
            None
        }
    }
}

fn read_slot<S: KeyValueStore>(store: &S, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(err) => {
            warn!(key, %err, "storage read failed");
            None
        }
    }
}
