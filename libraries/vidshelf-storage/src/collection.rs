//! Whole-collection load/save
//!
//! A collection is one JSON array under one key. Plain reads tolerate missing
//! and malformed documents; writes always replace the full array, so they
//! load through `load_for_write` and refuse to start from a document they
//! could not parse.

use serde::de::DeserializeOwned;
use serde::Serialize;
use vidshelf_core::{KeyValueStore, Result};

/// Load a collection, treating an absent or malformed document as empty
///
/// Backend failures are returned to the caller.
pub(crate) fn load<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Vec<T>> {
    let Some(raw) = store.get(key)? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str(&raw) {
        Ok(items) => Ok(items),
        Err(e) => {
            tracing::warn!(key, error = %e, "Stored collection is malformed, treating as empty");
            Ok(Vec::new())
        }
    }
}

/// Load a collection that is about to be rewritten
///
/// Absent documents load empty. A malformed document is an error, so the
/// caller never replaces records it could not read.
pub(crate) fn load_for_write<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Vec<T>> {
    let Some(raw) = store.get(key)? else {
        return Ok(Vec::new());
    };

    serde_json::from_str(&raw).map_err(|e| {
        tracing::error!(key, error = %e, "Stored collection is malformed, refusing to overwrite it");
        e.into()
    })
}

/// Serialize and write the full collection
pub(crate) fn save<T: Serialize>(store: &dyn KeyValueStore, key: &str, items: &[T]) -> Result<()> {
    let raw = serde_json::to_string(items)?;
    store.set(key, &raw)?;
    tracing::trace!(key, count = items.len(), "Collection written");
    Ok(())
}
