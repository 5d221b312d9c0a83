//! Domain Layer - Core Entity Trait
//!
//! Every board entity is addressed by an [`Id`]; collections are plain
//! vectors searched linearly.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a column or card.
///
/// Stored data may use JSON strings or JSON numbers, so both are accepted.
/// Equality is strict: `Text("6")` and `Number(6)` are different ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Number(u64),
    Text(String),
}

impl Id {
    /// Numeric value of the id, including text ids that spell an integer.
    pub fn as_number(&self) -> Option<u64> {
        match self {
            Id::Number(n) => Some(*n),
            Id::Text(s) => s.parse().ok(),
        }
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Number(n) => write!(f, "{}", n),
            Id::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for Id {
    fn from(n: u64) -> Self {
        Id::Number(n)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id::Text(s.to_string())
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        Id::Text(s)
    }
}

/// Core trait for all board entities
pub trait Entity: Clone {
    /// Returns the entity's identifier
    fn id(&self) -> &Id;
}

/// Index of the entity with `id`, if present.
pub fn position_of<E: Entity>(items: &[E], id: &Id) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}

/// Common result type for board operations
pub type BoardResult<T> = Result<T, BoardError>;

/// Board-level errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("status not found: {0}")]
    StatusNotFound(Id),
    #[error("task not found: {0}")]
    TaskNotFound(Id),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("unsupported snapshot schema version {0}")]
    UnsupportedSchema(u32),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl BoardError {
    /// True for errors caused by an id that is not on the board.
    pub fn is_lookup_miss(&self) -> bool {
        matches!(self, BoardError::StatusNotFound(_) | BoardError::TaskNotFound(_))
    }
}
