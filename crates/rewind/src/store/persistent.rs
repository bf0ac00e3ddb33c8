//! Storage-backed state value.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

use super::{KeyValueStore, StoreError};

/// A value mirrored into a [`KeyValueStore`] under a fixed key.
///
/// Loading falls back to a default when the key is absent or holds a value
/// that no longer decodes; every [`set`](Self::set) writes through.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistentState<T> {
    key: String,
    value: T,
}

impl<T> PersistentState<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Reads `key` from `store`, or uses `default()` if nothing valid is there.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store itself fails. An undecodable
    /// stored value is not an error: it is logged and replaced by the default.
    #[instrument(skip(store, default))]
    pub fn load(
        store: &impl KeyValueStore,
        key: &str,
        default: impl FnOnce() -> T,
    ) -> Result<Self, StoreError> {
        let value = match store.get(key)? {
            None => {
                debug!("No stored value, using default");
                default()
            }
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => {
                    debug!("Stored value restored");
                    value
                }
                Err(e) => {
                    warn!(error = %e, "Stored value is invalid, using default");
                    default()
                }
            },
        };

        Ok(Self {
            key: key.to_string(),
            value,
        })
    }

    /// Replaces the value and writes it to `store`.
    ///
    /// The in-memory value only changes once the write succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if encoding or the write fails.
    #[instrument(skip(self, store, value), fields(key = %self.key))]
    pub fn set(&mut self, store: &mut impl KeyValueStore, value: T) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(&value)?;
        store.set(&self.key, &encoded)?;
        self.value = value;
        info!("State saved");
        Ok(())
    }
}

impl<T> PersistentState<T> {
    /// Returns the storage key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the current value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the state, returning the value.
    pub fn into_inner(self) -> T {
        self.value
    }
}
