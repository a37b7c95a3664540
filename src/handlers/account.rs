use crate::core::error::{AccountError, SessionError};
use crate::core::state::AppState;
use crate::models::forms::{
    LoginForm, LoginResponse, RegisterForm, RegisterResponse, SessionResponse, SuccessResponse,
};
use crate::stores::session_store::Session;
use crate::utils::auth::bearer_token;
use crate::utils::time::current_timestamp;
use axum::{
    extract::{Form, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{info, warn};

/// Create an account
///
/// POST /register (form: name, age, blood_group, username, password, confirm_password)
pub async fn register_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<RegisterForm>,
) -> Result<Response, AccountError> {
    let registration = form.validate()?;

    let user = state.accounts.register(registration)?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            success: true,
            message: "Account created successfully! You can now log in.".to_string(),
            user,
        }),
    )
        .into_response())
}

/// Check credentials and open a session
///
/// POST /login (form: username, password)
pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<LoginForm>,
) -> Result<Response, AccountError> {
    form.validate()?;

    let user = match state.accounts.verify(form.username.trim(), &form.password) {
        Ok(user) => user,
        Err(AccountError::Authentication) => {
            warn!(username = %form.username, "Failed login attempt");
            return Err(AccountError::Authentication);
        }
        Err(e) => return Err(e),
    };

    let session = state.sessions.create(&user, current_timestamp());

    info!(username = %user.username, sessions = state.sessions.len(), "User logged in");

    Ok((
        StatusCode::OK,
        Json(LoginResponse {
            success: true,
            message: format!("Welcome back, {}!", user.name),
            token: session.token.clone(),
            username: user.username,
            name: user.name,
        }),
    )
        .into_response())
}

/// Close the caller's session
///
/// POST /logout (Authorization: Bearer <token>)
pub async fn logout_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, SessionError> {
    let session = require_session(&state, &headers)?;

    state.sessions.remove(&session.token);

    info!(username = %session.username, "User logged out");

    Ok((
        StatusCode::OK,
        Json(SuccessResponse {
            success: true,
            message: "Logged out".to_string(),
        }),
    )
        .into_response())
}

/// Describe the caller's session
///
/// GET /session (Authorization: Bearer <token>)
pub async fn session_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, SessionError> {
    let session = require_session(&state, &headers)?;

    Ok((
        StatusCode::OK,
        Json(SessionResponse {
            success: true,
            username: session.username.clone(),
            name: session.name.clone(),
            expires_at: session.created_at.saturating_add(state.sessions.ttl()),
        }),
    )
        .into_response())
}

/// Resolve the bearer token on a request to a live session
pub fn require_session(state: &AppState, headers: &HeaderMap) -> Result<Arc<Session>, SessionError> {
    let token = bearer_token(headers).ok_or(SessionError::MissingToken)?;

    state
        .sessions
        .get(token, current_timestamp())
        .ok_or(SessionError::Expired)
}
