/// On-disk key-value store
use crate::error::StorageError;
use redb::{Database, TableDefinition};
use std::path::{Path, PathBuf};
use vidshelf_core::{CatalogError, KeyValueStore, Result};

const ENTRIES: TableDefinition<&str, &str> = TableDefinition::new("kv");

/// Single-file store backed by `redb`
///
/// Each `set`/`remove` commits its own write transaction, so a multi-key
/// update can be interrupted between keys.
pub struct RedbStore {
    db: Database,
    path: PathBuf,
}

impl RedbStore {
    /// Open the store at `path`, creating the file (and parent directories)
    /// if it doesn't exist
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file is
    /// not a valid store
    pub fn open(path: impl AsRef<Path>) -> std::result::Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(&path).map_err(|source| StorageError::Open {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "Opened store");

        Ok(Self { db, path })
    }

    /// Location of the store file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn backend<E: Into<redb::Error>>(err: E) -> CatalogError {
    StorageError::Database(err.into()).into()
}

impl KeyValueStore for RedbStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let txn = self.db.begin_read().map_err(backend)?;

        // Nothing has been written yet
        let table = match txn.open_table(ENTRIES) {
            Ok(table) => table,
            Err(redb::TableError::TableDoesNotExist(_)) => return Ok(None),
            Err(e) => return Err(backend(e)),
        };

        let value = table.get(key).map_err(backend)?;
        Ok(value.map(|guard| guard.value().to_string()))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let txn = self.db.begin_write().map_err(backend)?;
        {
            let mut table = txn.open_table(ENTRIES).map_err(backend)?;
            table.insert(key, value).map_err(backend)?;
        }
        txn.commit().map_err(backend)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let txn = self.db.begin_write().map_err(backend)?;
        {
            let mut table = txn.open_table(ENTRIES).map_err(backend)?;
            table.remove(key).map_err(backend)?;
        }
        txn.commit().map_err(backend)?;
        Ok(())
    }
}
