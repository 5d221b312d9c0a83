//! Status Entity
//!
//! A column of the board. Column order is the order of the status vector.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, Id};

/// A board column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    pub id: Id,
    pub title: String,
    /// CSS color for the title swatch, empty when unset
    #[serde(default)]
    pub background_color: String,
}

impl Status {
    pub fn new(id: Id, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            background_color: String::new(),
        }
    }

    pub fn with_color(id: Id, title: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            background_color: color.into(),
        }
    }
}

impl Entity for Status {
    fn id(&self) -> &Id {
        &self.id
    }
}
