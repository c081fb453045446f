/// Common test utilities and fixtures
use std::sync::Arc;
use vidshelf_cli::{
    api::{self, auth::LoginRequest},
    AppState,
};
use vidshelf_core::KeyValueStore;
use vidshelf_storage::{AdminCredentials, MemoryStore};

/// Admin credentials configured for tests
pub mod fixtures {
    pub const ADMIN_USERNAME: &str = "admin";
    pub const ADMIN_PASSWORD: &str = "AdminPassword456!";
}

pub fn credentials() -> AdminCredentials {
    AdminCredentials::new(fixtures::ADMIN_USERNAME, fixtures::ADMIN_PASSWORD)
}

/// Fresh state over an in-memory store, signed out
pub fn test_state() -> (AppState, Arc<dyn KeyValueStore>) {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let state = AppState::new(store.clone(), Some(credentials())).unwrap();
    (state, store)
}

/// Fresh state with the admin already signed in
#[allow(dead_code)]
pub fn signed_in_state() -> (AppState, Arc<dyn KeyValueStore>) {
    let (mut state, store) = test_state();
    api::auth::login(
        &mut state,
        LoginRequest {
            username: fixtures::ADMIN_USERNAME.to_string(),
            password: fixtures::ADMIN_PASSWORD.to_string(),
        },
    )
    .unwrap();
    (state, store)
}
