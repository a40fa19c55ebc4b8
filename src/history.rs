//! Session-scoped history of recent analyses.
//!
//! The list lives in `sessionStorage` as a JSON array, most recent first, and
//! never holds more than [`MAX_ENTRIES`] items.

use tracing::{debug, warn};

use crate::error::{js_message, ClientError};
use crate::types::HistoryEntry;

pub const STORAGE_KEY: &str = "emailtriage-history";
pub const MAX_ENTRIES: usize = 5;

/// Minimal string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, ClientError>;
    fn set(&self, key: &str, value: &str) -> Result<(), ClientError>;
}

/// `window.sessionStorage`, looked up on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionStore;

impl SessionStore {
    fn storage() -> Result<web_sys::Storage, ClientError> {
        let window =
            web_sys::window().ok_or_else(|| ClientError::Unavailable("window".to_string()))?;
        window
            .session_storage()
            .map_err(|e| ClientError::Storage(js_message(&e)))?
            .ok_or_else(|| ClientError::Unavailable("sessionStorage".to_string()))
    }
}

impl KeyValueStore for SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, ClientError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| ClientError::Storage(js_message(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| ClientError::Storage(js_message(&e)))
    }
}

/// Bounded, most-recent-first list of past results.
#[derive(Debug, Clone, Copy)]
pub struct HistoryStore<S> {
    store: S,
}

impl HistoryStore<SessionStore> {
    pub fn session() -> Self {
        Self::new(SessionStore)
    }
}

impl<S: KeyValueStore> HistoryStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored entries, or an empty list when nothing usable is stored.
    pub fn load(&self) -> Vec<HistoryEntry> {
        let raw = match self.store.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                debug!("History unavailable: {}", e);
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<HistoryEntry>>(&raw) {
            Ok(mut entries) => {
                entries.truncate(MAX_ENTRIES);
                entries
            }
            Err(e) => {
                debug!("Discarding unreadable history: {}", e);
                Vec::new()
            }
        }
    }

    /// Prepend `entry`, drop anything past [`MAX_ENTRIES`], and persist.
    /// Returns the new list even when persisting fails.
    pub fn append(&self, entry: HistoryEntry) -> Vec<HistoryEntry> {
        let mut entries = self.load();
        entries.insert(0, entry);
        entries.truncate(MAX_ENTRIES);

        match serde_json::to_string(&entries) {
            Ok(json) => {
                if let Err(e) = self.store.set(STORAGE_KEY, &json) {
                    warn!("Failed to persist history: {}", e);
                }
            }
            Err(e) => warn!("Failed to serialize history: {}", e),
        }
        entries
    }
}
