/// Sign-in commands
use crate::{
    error::{CliError, Result},
    state::AppState,
};

#[derive(Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Current session state as shown by `vidshelf status`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusResponse {
    pub authenticated: bool,
    pub login_enabled: bool,
}

/// `vidshelf login`
pub fn login(app_state: &mut AppState, req: LoginRequest) -> Result<()> {
    if app_state.session.login(&req.username, &req.password)? {
        Ok(())
    } else {
        Err(CliError::InvalidCredentials)
    }
}

/// `vidshelf logout`
pub fn logout(app_state: &mut AppState) -> Result<()> {
    app_state.session.logout()?;
    Ok(())
}

/// `vidshelf status`
pub fn status(app_state: &AppState) -> StatusResponse {
    StatusResponse {
        authenticated: app_state.session.is_authenticated(),
        login_enabled: app_state.session.has_credentials(),
    }
}
