//! Key-Value Store Abstraction
//!
//! String keys to string values, the shape of `window.localStorage`.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::domain::{BoardError, BoardResult};

/// Synchronous string store
pub trait KeyValueStore {
    /// Read a slot; `Ok(None)` when it was never written
    fn get(&self, key: &str) -> BoardResult<Option<String>>;

    /// Overwrite a slot
    fn set(&self, key: &str, value: &str) -> BoardResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> BoardResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> BoardResult<()> {
        (**self).set(key, value)
    }
}

/// In-memory store. Writes can be made to fail to exercise error paths.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RefCell<HashMap<String, String>>,
    write_error: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with `(key, value)` pairs
    pub fn with_slots<'a>(slots: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        store
            .slots
            .borrow_mut()
            .extend(slots.into_iter().map(|(k, v)| (k.to_string(), v.to_string())));
        store
    }

    /// Make every following write fail with `message`, or succeed again with `None`
    pub fn fail_writes(&self, message: Option<&str>) {
        *self.write_error.borrow_mut() = message.map(str::to_string);
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> BoardResult<Option<String>> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> BoardResult<()> {
        if let Some(message) = self.write_error.borrow().as_ref() {
            return Err(BoardError::Storage(message.clone()));
        }
        self.slots.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
