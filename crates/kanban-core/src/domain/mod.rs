//! Domain Layer
//!
//! Board entities and the errors board operations can produce.
//! Depends only on serde and thiserror.

mod entity;
mod status;
mod task;

pub use entity::{position_of, BoardError, BoardResult, Entity, Id};
pub use status::Status;
pub use task::Task;
