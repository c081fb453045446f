//! Admin session flag and credential check
//!
//! Login compares the submitted pair against configured plaintext values.
//! There is no hashing, lockout or expiry: the session only hides private
//! videos from casual visitors and is not access control. The flag is
//! persisted so a restart keeps the admin signed in.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use vidshelf_storage::{AdminCredentials, MemoryStore, SessionStore};
//!
//! # fn example() -> vidshelf_core::Result<()> {
//! let credentials = AdminCredentials::new("admin", "hunter2");
//! let mut session = SessionStore::open(Arc::new(MemoryStore::new()), Some(credentials))?;
//!
//! assert!(!session.login("admin", "wrong")?);
//! assert!(session.login("admin", "hunter2")?);
//! assert!(session.is_authenticated());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use crate::SESSION_KEY;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use vidshelf_core::{KeyValueStore, Result};

/// Configured admin username and password
#[derive(Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Build credentials from optional settings
    ///
    /// Returns `None` unless both values are present and non-empty.
    pub fn from_parts(username: Option<String>, password: Option<String>) -> Option<Self> {
        match (username, password) {
            (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
                Some(Self { username, password })
            }
            _ => None,
        }
    }

    /// Exact, case-sensitive comparison of both fields
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Persisted document layout
#[derive(Debug, Serialize, Deserialize)]
struct PersistedSession {
    state: SessionState,
    #[serde(default)]
    version: u32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionState {
    is_authenticated: bool,
}

/// Admin session backed by the key-value store
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
    credentials: Option<AdminCredentials>,
    authenticated: bool,
}

impl SessionStore {
    /// Load the persisted flag
    ///
    /// A missing or malformed document loads as signed out.
    ///
    /// # Errors
    /// Returns an error if the backend cannot be read
    pub fn open(
        store: Arc<dyn KeyValueStore>,
        credentials: Option<AdminCredentials>,
    ) -> Result<Self> {
        let authenticated = match store.get(SESSION_KEY)? {
            Some(raw) => match serde_json::from_str::<PersistedSession>(&raw) {
                Ok(doc) => doc.state.is_authenticated,
                Err(e) => {
                    tracing::warn!(error = %e, "Stored session is malformed, starting signed out");
                    false
                }
            },
            None => false,
        };

        Ok(Self {
            store,
            credentials,
            authenticated,
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Whether admin credentials were configured at all
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Check credentials and sign in on an exact match
    ///
    /// Returns `Ok(false)` on a mismatch or when no credentials are
    /// configured; the flag is left as it was.
    ///
    /// # Errors
    /// Returns an error if the flag cannot be persisted
    pub fn login(&mut self, username: &str, password: &str) -> Result<bool> {
        let Some(credentials) = &self.credentials else {
            tracing::error!("Admin credentials are not configured, login is disabled");
            return Ok(false);
        };

        if !credentials.matches(username, password) {
            tracing::info!(username, "Login rejected");
            return Ok(false);
        }

        self.persist(true)?;
        self.authenticated = true;
        tracing::info!(username, "Admin signed in");
        Ok(true)
    }

    /// Sign out, regardless of the current state
    ///
    /// # Errors
    /// Returns an error if the flag cannot be persisted
    pub fn logout(&mut self) -> Result<()> {
        self.persist(false)?;
        self.authenticated = false;
        tracing::info!("Admin signed out");
        Ok(())
    }

    fn persist(&self, is_authenticated: bool) -> Result<()> {
        let doc = PersistedSession {
            state: SessionState { is_authenticated },
            version: 0,
        };
        self.store.set(SESSION_KEY, &serde_json::to_string(&doc)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn credentials_require_both_non_empty_values() {
        assert!(AdminCredentials::from_parts(Some("a".into()), Some("b".into())).is_some());
        assert!(AdminCredentials::from_parts(Some("a".into()), None).is_none());
        assert!(AdminCredentials::from_parts(None, Some("b".into())).is_none());
        assert!(AdminCredentials::from_parts(Some(String::new()), Some("b".into())).is_none());
    }

    #[test]
    fn debug_output_hides_password() {
        let rendered = format!("{:?}", AdminCredentials::new("admin", "hunter2"));
        assert!(rendered.contains("admin"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn persisted_document_uses_browser_layout() {
        let store = Arc::new(MemoryStore::new());
        let mut session =
            SessionStore::open(store.clone(), Some(AdminCredentials::new("a", "b"))).unwrap();
        session.login("a", "b").unwrap();

        let raw = store.get(SESSION_KEY).unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["state"]["isAuthenticated"], true);
        assert_eq!(json["version"], 0);
    }

    #[test]
    fn malformed_document_loads_signed_out() {
        let store = Arc::new(MemoryStore::with_entries([(SESSION_KEY, "garbage")]));
        let session = SessionStore::open(store, None).unwrap();
        assert!(!session.is_authenticated());
    }
}
