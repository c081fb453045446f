/// Core traits for Vidshelf
use crate::error::Result;

/// Persistent key-value store
///
/// The catalog and the session flag are kept as whole JSON documents under
/// fixed keys. Implementations give no guarantees across keys: two `set`
/// calls are two independent writes.
///
/// Implementations must be usable through a shared reference so that the
/// catalog repository and the session store can hold the same backend.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// Returns `Ok(None)` when the key has never been written.
    ///
    /// # Errors
    /// Returns an error if the backend cannot be read
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    ///
    /// # Errors
    /// Returns an error if the backend cannot be written
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key` (no-op if absent)
    ///
    /// # Errors
    /// Returns an error if the backend cannot be written
    fn remove(&self, key: &str) -> Result<()>;
}
