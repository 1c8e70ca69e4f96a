//! Application state container.
//!
//! The store owns a single immutable [`AppState`] snapshot. Every change goes
//! through [`Store::update`], which builds a new snapshot and swaps it in;
//! holders of the previous `Rc<AppState>` keep seeing the old values.

use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, warn};
use thiserror::Error;

use crate::filter::FilterForm;
use crate::Account;

/// Durable key-value storage (browser local storage in production)
pub trait StorageBackend {
    fn read(&self, key: &str) -> Option<String>;

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Error, PartialEq)]
pub enum StorageError {
    #[error("failed to serialize account: {0}")]
    Serialize(String),
    #[error("storage rejected write for '{key}': {reason}")]
    Write { key: String, reason: String },
}

/// Snapshot of everything the views render from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Present iff the user is logged in
    pub account: Option<Account>,
    /// Dashboard search form; never persisted
    pub filters: FilterForm,
}

impl AppState {
    pub fn is_authenticated(&self) -> bool {
        self.account.is_some()
    }
}

/// A replacement for one top-level field of [`AppState`]
#[derive(Debug, Clone, PartialEq)]
pub enum StateUpdate {
    Account(Option<Account>),
    Filters(FilterForm),
}

impl StateUpdate {
    /// Name of the field being replaced
    pub fn key(&self) -> &'static str {
        match self {
            StateUpdate::Account(_) => "account",
            StateUpdate::Filters(_) => "filters",
        }
    }
}

pub struct Store<B: StorageBackend> {
    backend: B,
    storage_key: String,
    current: Rc<AppState>,
}

impl<B: StorageBackend> Store<B> {
    /// Build the store from whatever account was persisted earlier.
    /// Absent or unreadable data starts the session logged out.
    pub fn hydrate(backend: B, storage_key: impl Into<String>) -> Self {
        let storage_key = storage_key.into();
        let account = match backend.read(&storage_key) {
            Some(raw) => match serde_json::from_str::<Option<Account>>(&raw) {
                Ok(account) => account,
                Err(e) => {
                    warn!("Ignoring saved account under '{}': {}", storage_key, e);
                    None
                }
            },
            None => None,
        };

        if let Some(account) = &account {
            debug!("Restored saved account for '{}'", account.user);
        }

        Self {
            backend,
            storage_key,
            current: Rc::new(AppState {
                account,
                ..AppState::default()
            }),
        }
    }

    /// Current snapshot
    pub fn state(&self) -> Rc<AppState> {
        Rc::clone(&self.current)
    }

    /// Replace one field, swap in the new snapshot, and persist the account
    /// when (and only when) the account is what changed.
    ///
    /// The new snapshot is in place even if persisting fails.
    pub fn update(&mut self, update: StateUpdate) -> Result<(), StorageError> {
        debug!("State updated: {}", update.key());
        let mut next = AppState::clone(&self.current);
        match update {
            StateUpdate::Account(account) => {
                next.account = account;
                self.current = Rc::new(next);
                self.persist_account()
            }
            StateUpdate::Filters(filters) => {
                next.filters = filters;
                self.current = Rc::new(next);
                Ok(())
            }
        }
    }

    fn persist_account(&mut self) -> Result<(), StorageError> {
        match &self.current.account {
            Some(account) => {
                let serialized =
                    serde_json::to_string(account).map_err(|e| StorageError::Serialize(e.to_string()))?;
                self.backend.write(&self.storage_key, &serialized)
            }
            None => self.backend.remove(&self.storage_key),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }
}

/// In-process storage backend
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    writes: usize,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    /// Backend that refuses every write, like a full quota
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of successful writes and removals
    pub fn writes(&self) -> usize {
        self.writes
    }

    fn check_writable(&self, key: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::Write {
                key: key.to_string(),
                reason: "storage is read-only".to_string(),
            });
        }
        Ok(())
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_writable(key)?;
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.check_writable(key)?;
        self.entries.remove(key);
        self.writes += 1;
        Ok(())
    }
}
