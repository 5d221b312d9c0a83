//! Task Entity
//!
//! A card. Column membership comes only from `status_id`; card order is the
//! order of the task vector across the whole board.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, Id};

/// A board card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Id,
    pub status_id: Id,
    pub content: String,
}

impl Task {
    pub fn new(id: Id, status_id: Id, content: impl Into<String>) -> Self {
        Self {
            id,
            status_id,
            content: content.into(),
        }
    }
}

impl Entity for Task {
    fn id(&self) -> &Id {
        &self.id
    }
}
