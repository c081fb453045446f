/// Shared application state
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::guard::AdminSession;
use std::sync::Arc;
use vidshelf_core::KeyValueStore;
use vidshelf_storage::{AdminCredentials, CatalogRepository, MemoryStore, RedbStore, SessionStore};

/// Application state shared across all handlers
///
/// The catalog and the session read and write the same store.
pub struct AppState {
    pub catalog: CatalogRepository,
    pub session: SessionStore,
}

impl AppState {
    pub fn new(store: Arc<dyn KeyValueStore>, credentials: Option<AdminCredentials>) -> Result<Self> {
        let session = SessionStore::open(store.clone(), credentials)?;
        Ok(Self {
            catalog: CatalogRepository::new(store),
            session,
        })
    }

    /// Open the configured store (or a throwaway in-memory one)
    pub fn open(config: &AppConfig, ephemeral: bool) -> Result<Self> {
        let store: Arc<dyn KeyValueStore> = if ephemeral {
            tracing::info!("Using in-memory store, nothing will be saved");
            Arc::new(MemoryStore::new())
        } else {
            Arc::new(RedbStore::open(&config.storage.path)?)
        };

        Self::new(store, config.admin_credentials())
    }

    /// Proof that an admin is signed in, required by every mutating handler
    pub fn require_admin(&self) -> Result<AdminSession> {
        if self.session.is_authenticated() {
            Ok(AdminSession::new())
        } else {
            Err(CliError::Unauthorized)
        }
    }
}
