//! Key-value persistence collaborator.
//!
//! The engine never touches storage. Callers load a history through
//! [`PersistentState`] and write it back after every transition.

mod dir;
mod error;
mod memory;
mod persistent;

pub use dir::DirStore;
pub use error::StoreError;
pub use memory::MemoryStore;
pub use persistent::PersistentState;

/// String-keyed get/set storage.
///
/// Implementations report failures as [`StoreError`] and never retry.
pub trait KeyValueStore {
    /// Returns the stored value, or `None` if the key was never set.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}
