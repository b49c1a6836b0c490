//! Persisted Preferences
//!
//! Grid/list view mode and filter toggles survive between visits in a small
//! key/value store owned by the caller. Values are JSON. Reads fall back to
//! defaults on missing or malformed data; writes are best-effort and a
//! failed write is logged and dropped.

use std::collections::HashMap;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::config::MenuConfig;
use crate::filters::FilterState;

/// Menu layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

#[derive(Error, Debug)]
pub enum PreferenceError {
    #[error("Storage unavailable: {0}")]
    Storage(String),

    #[error("Failed to serialize preference: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Key/value backend (browser local storage, a file, memory).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Load/save boundary around a store, bound to the configured keys.
pub struct Preferences<S> {
    store: S,
    view_key: String,
    filters_key: String,
}

impl<S: PreferenceStore> Preferences<S> {
    pub fn new(store: S, config: &MenuConfig) -> Self {
        Self {
            store,
            view_key: config.view_key.clone(),
            filters_key: config.filters_key.clone(),
        }
    }

    pub fn load_filters(&self) -> FilterState {
        load_or_default(&self.store, &self.filters_key)
    }

    pub fn save_filters(&mut self, filters: &FilterState) {
        save_best_effort(&mut self.store, &self.filters_key, filters);
    }

    /// Restore default filters and persist them.
    pub fn reset_filters(&mut self) -> FilterState {
        let filters = FilterState::default();
        self.save_filters(&filters);
        filters
    }

    pub fn load_view_mode(&self) -> ViewMode {
        load_or_default(&self.store, &self.view_key)
    }

    pub fn save_view_mode(&mut self, mode: ViewMode) {
        save_best_effort(&mut self.store, &self.view_key, &mode);
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}

fn load_or_default<S, T>(store: &S, key: &str) -> T
where
    S: PreferenceStore,
    T: DeserializeOwned + Default,
{
    let Some(raw) = store.get(key) else {
        return T::default();
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Malformed preference '{}' ({}), using defaults", key, e);
            T::default()
        }
    }
}

fn save_best_effort<S, T>(store: &mut S, key: &str, value: &T)
where
    S: PreferenceStore,
    T: Serialize,
{
    let result = serde_json::to_string(value)
        .map_err(PreferenceError::from)
        .and_then(|json| store.set(key, &json));

    if let Err(e) = result {
        tracing::warn!("Could not persist preference '{}': {}", key, e);
    }
}
