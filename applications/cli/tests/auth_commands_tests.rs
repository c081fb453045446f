/// Sign-in command tests
/// Login, logout and status through the handlers, including persistence
mod common;

use common::{fixtures, signed_in_state, test_state};
use vidshelf_cli::{
    api::{self, auth::LoginRequest},
    AppState, CliError,
};
use std::sync::Arc;
use vidshelf_storage::{MemoryStore, SESSION_KEY};

fn request(username: &str, password: &str) -> LoginRequest {
    LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    }
}

#[test]
fn test_login_with_valid_credentials() {
    let (mut state, _store) = test_state();
    assert!(!api::auth::status(&state).authenticated);

    api::auth::login(
        &mut state,
        request(fixtures::ADMIN_USERNAME, fixtures::ADMIN_PASSWORD),
    )
    .unwrap();

    let status = api::auth::status(&state);
    assert!(status.authenticated);
    assert!(status.login_enabled);
    assert!(state.require_admin().is_ok());
}

#[test]
fn test_login_with_wrong_password() {
    let (mut state, store) = test_state();

    let result = api::auth::login(&mut state, request(fixtures::ADMIN_USERNAME, "wrong"));

    assert!(matches!(result, Err(CliError::InvalidCredentials)));
    assert!(!api::auth::status(&state).authenticated);
    assert!(matches!(state.require_admin(), Err(CliError::Unauthorized)));
    // A rejected attempt leaves the stored session untouched
    assert_eq!(store.get(SESSION_KEY).unwrap(), None);
}

#[test]
fn test_login_is_case_sensitive() {
    let (mut state, _store) = test_state();

    let result = api::auth::login(
        &mut state,
        request(&fixtures::ADMIN_USERNAME.to_uppercase(), fixtures::ADMIN_PASSWORD),
    );

    assert!(matches!(result, Err(CliError::InvalidCredentials)));
}

#[test]
fn test_login_disabled_without_credentials() {
    let store = Arc::new(MemoryStore::new());
    let mut state = AppState::new(store, None).unwrap();

    let status = api::auth::status(&state);
    assert!(!status.login_enabled);

    let result = api::auth::login(&mut state, request("", ""));
    assert!(matches!(result, Err(CliError::InvalidCredentials)));
    assert!(!api::auth::status(&state).authenticated);
}

#[test]
fn test_logout_ends_session() {
    let (mut state, _store) = signed_in_state();

    api::auth::logout(&mut state).unwrap();

    assert!(!api::auth::status(&state).authenticated);
    assert!(matches!(state.require_admin(), Err(CliError::Unauthorized)));

    // Logging out twice is harmless
    api::auth::logout(&mut state).unwrap();
}

#[test]
fn test_session_survives_restart() {
    let (_state, store) = signed_in_state();

    let reopened = AppState::new(store.clone(), Some(common::credentials())).unwrap();
    assert!(api::auth::status(&reopened).authenticated);

    let raw = store.get(SESSION_KEY).unwrap().unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(doc["state"]["isAuthenticated"], true);
}

#[test]
fn test_logout_persists_across_restart() {
    let (mut state, store) = signed_in_state();
    api::auth::logout(&mut state).unwrap();

    let reopened = AppState::new(store, Some(common::credentials())).unwrap();
    assert!(!api::auth::status(&reopened).authenticated);
}
