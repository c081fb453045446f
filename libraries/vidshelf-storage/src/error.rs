/// Storage-specific errors
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Store file could not be opened or created
    #[error("Failed to open store at {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: redb::DatabaseError,
    },

    /// Error from the on-disk backend
    #[error(transparent)]
    Database(#[from] redb::Error),

    /// In-memory backend lock was poisoned by a panicking writer
    #[error("Store lock poisoned: {0}")]
    Poisoned(String),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<StorageError> for vidshelf_core::CatalogError {
    fn from(err: StorageError) -> Self {
        vidshelf_core::CatalogError::storage(err.to_string())
    }
}
