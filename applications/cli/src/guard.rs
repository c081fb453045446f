//! Admin guard for mutating commands

/// Token handed out by [`crate::AppState::require_admin`]
///
/// Handlers that change the catalog take one as an argument, so they can
/// only be called after the session check passed.
#[derive(Debug, Clone, Copy)]
pub struct AdminSession {
    _private: (),
}

impl AdminSession {
    pub(crate) fn new() -> Self {
        Self { _private: () }
    }
}
