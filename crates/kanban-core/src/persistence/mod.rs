//! Persistence Layer
//!
//! The board is saved as one versioned JSON record in a string key-value
//! store. Browser local storage is the production store; [`MemoryStore`]
//! backs tests and anything else that runs off the web.

mod loader;
mod snapshot;
mod store;

pub use loader::{load_board, save_board, LoadSource, LoadedBoard};
pub use snapshot::{Snapshot, SCHEMA_VERSION};
pub use store::{KeyValueStore, MemoryStore};
