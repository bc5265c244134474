//! Key/value persistence port over browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! State modules never touch `web_sys` directly. They take a
//! [`KeyValueStore`] so the theme and contact-draft logic can run against
//! [`MemoryStore`] in native tests and [`BrowserStorage`] in the page.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::PortfolioError;

#[cfg(test)]
#[path = "persistence_test.rs"]
mod persistence_test;

/// Read/write/delete of string values by key.
pub trait KeyValueStore {
    /// Read the raw value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when storage is unavailable or rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), PortfolioError>;

    /// Delete the value stored under `key`. Missing keys are not an error.
    fn remove(&self, key: &str);
}

/// Load and decode a JSON value stored under `key`.
///
/// Missing entries and undecodable payloads both yield `None`.
pub fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::debug!("ignoring malformed {key} entry: {e}");
            None
        }
    }
}

/// Encode `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Returns an error if encoding fails or the store rejects the write.
pub fn save_json<T: Serialize>(store: &impl KeyValueStore, key: &str, value: &T) -> Result<(), PortfolioError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// `window.localStorage`, looked up on every call.
///
/// Outside the `csr` build every read misses and every write fails with
/// [`PortfolioError::StorageUnavailable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().unwrap_or_default())
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).unwrap_or_default()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PortfolioError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage().ok_or(PortfolioError::StorageUnavailable)?;
            storage
                .set_item(key, value)
                .map_err(|_| PortfolioError::StorageWrite { key: key.to_owned() })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(PortfolioError::StorageUnavailable)
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                if storage.remove_item(key).is_err() {
                    log::warn!("failed to remove {key} from local storage");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

/// In-memory store with the same semantics as `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-seeded with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PortfolioError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
