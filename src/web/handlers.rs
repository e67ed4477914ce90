//! HTTP handlers for authgate.
//!
//! Each handler translates a request into an [`AuthService`] call and the
//! result back into a status code and JSON payload. Cookie mechanics live
//! entirely here; the service only ever sees opaque token strings.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
    Form, Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::auth::AuthService;
use crate::web::dto::{
    EmailMessageResponse, LoginForm, MessageResponse, ProfileResponse, RegisterForm,
    ResetRequestForm, ResetTokenResponse, UpdatePasswordForm,
};
use crate::web::error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The credential and session service.
    pub auth: AuthService,
    /// Name of the session cookie.
    pub session_cookie: String,
}

impl AppState {
    /// Create a new application state.
    pub fn new(auth: AuthService, session_cookie: impl Into<String>) -> Self {
        Self {
            auth,
            session_cookie: session_cookie.into(),
        }
    }

    /// Read the session token from the request cookies, if any.
    fn session_token<'a>(&self, jar: &'a CookieJar) -> Option<&'a str> {
        jar.get(&self.session_cookie).map(|c| c.value())
    }
}

/// GET / - welcome payload.
pub async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse::new("Bienvenue"))
}

/// POST /users - register a new user.
pub async fn register(
    State(state): State<Arc<AppState>>,
    Form(form): Form<RegisterForm>,
) -> Result<Json<EmailMessageResponse>, ApiError> {
    if form.email.is_empty() || form.password.is_empty() {
        return Err(ApiError::bad_request("email and password are required"));
    }

    state.auth.register(&form.email, &form.password).await?;

    Ok(Json(EmailMessageResponse {
        email: form.email,
        message: "user created".to_string(),
    }))
}

/// POST /sessions - login and issue a session cookie.
pub async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<impl IntoResponse, ApiError> {
    let valid = state.auth.login(&form.email, &form.password).await?;
    if !valid {
        return Err(ApiError::unauthorized("invalid email or password"));
    }

    let token = state.auth.create_session(&form.email).await?;

    let cookie = Cookie::build((state.session_cookie.clone(), token))
        .path("/")
        .http_only(true)
        .build();

    let body = EmailMessageResponse {
        email: form.email,
        message: "logged in".to_string(),
    };

    Ok((jar.add(cookie), Json(body)))
}

/// DELETE /sessions - logout.
///
/// Resolves the session cookie, destroys the session, and redirects to
/// the welcome route. An absent or stale cookie is a 403.
pub async fn logout(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Result<impl IntoResponse, ApiError> {
    let token = state
        .session_token(&jar)
        .ok_or_else(|| ApiError::forbidden("no active session"))?;

    let user = state
        .auth
        .resolve_session(token)
        .await?
        .ok_or_else(|| ApiError::forbidden("no active session"))?;

    state.auth.destroy_session(user.id).await?;

    let jar = jar.remove(Cookie::from(state.session_cookie.clone()));
    Ok((jar, Redirect::to("/")))
}

/// GET /profile - email of the session's user.
pub async fn profile(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Result<Json<ProfileResponse>, ApiError> {
    let token = state
        .session_token(&jar)
        .ok_or_else(|| ApiError::forbidden("no active session"))?;

    let user = state
        .auth
        .resolve_session(token)
        .await?
        .ok_or_else(|| ApiError::forbidden("no active session"))?;

    Ok(Json(ProfileResponse { email: user.email }))
}

/// POST /reset_password - issue a reset token.
pub async fn request_reset_token(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ResetRequestForm>,
) -> Result<Json<ResetTokenResponse>, ApiError> {
    let reset_token = state.auth.issue_reset_token(&form.email).await?;

    Ok(Json(ResetTokenResponse {
        email: form.email,
        reset_token,
    }))
}

/// PUT /reset_password - consume a reset token and set a new password.
pub async fn update_password(
    State(state): State<Arc<AppState>>,
    Form(form): Form<UpdatePasswordForm>,
) -> Result<Json<EmailMessageResponse>, ApiError> {
    state
        .auth
        .consume_reset_token(&form.reset_token, &form.new_password)
        .await?;

    Ok(Json(EmailMessageResponse {
        email: form.email,
        message: "Password updated".to_string(),
    }))
}
