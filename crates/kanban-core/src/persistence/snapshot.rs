//! Snapshot Record
//!
//! `{"schemaVersion": 1, "statuses": [...], "tasks": [...]}`

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::domain::{BoardError, BoardResult, Status, Task};

/// Current record layout
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub schema_version: u32,
    pub statuses: Vec<Status>,
    pub tasks: Vec<Task>,
}

/// Version probe, read before the full record
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Header {
    schema_version: u32,
}

impl Snapshot {
    pub fn of(board: &Board) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            statuses: board.statuses().to_vec(),
            tasks: board.tasks().to_vec(),
        }
    }

    pub fn into_board(self) -> Board {
        Board::new(self.statuses, self.tasks)
    }

    pub fn to_json(&self) -> BoardResult<String> {
        serde_json::to_string(self).map_err(|e| BoardError::Serialization(e.to_string()))
    }

    /// Parse a stored record, rejecting versions newer than this build.
    pub fn from_json(json: &str) -> BoardResult<Self> {
        let header: Header =
            serde_json::from_str(json).map_err(|e| BoardError::Serialization(e.to_string()))?;
        if header.schema_version == 0 || header.schema_version > SCHEMA_VERSION {
            return Err(BoardError::UnsupportedSchema(header.schema_version));
        }
        serde_json::from_str(json).map_err(|e| BoardError::Serialization(e.to_string()))
    }
}
