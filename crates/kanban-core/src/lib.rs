//! Kanban Core
//!
//! Framework-agnostic board logic:
//! - domain: ids, columns, cards, errors
//! - board: in-memory state and its operations
//! - reconciler: drag gesture state machine
//! - persistence: versioned snapshots over a key-value store
//! - controller: all of the above behind one owner

pub mod board;
pub mod config;
pub mod controller;
pub mod domain;
pub mod persistence;
pub mod reconciler;
pub mod seed;

mod ids;

#[cfg(test)]
mod tests;

pub use board::Board;
pub use config::{BoardConfig, LookupPolicy, CONFIG_KEY};
pub use controller::BoardController;
pub use domain::{BoardError, BoardResult, Entity, Id, Status, Task};
pub use persistence::{KeyValueStore, LoadSource, MemoryStore, Snapshot};
pub use reconciler::{DragItem, DragOutcome, DragState, Reconciler};
