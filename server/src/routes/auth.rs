//! Auth routes — sign-up, sign-in, sign-out, and session introspection.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;
use uuid::Uuid;

use identity::{LoginRequest, SessionUser, SignupRequest};

use crate::services::{auth as auth_svc, session};
use crate::state::AppState;

const COOKIE_NAME: &str = "session_token";
const SESSION_COOKIE_DAYS: i64 = 30;

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn cookie_secure() -> bool {
    if let Some(value) = env_bool("COOKIE_SECURE") {
        return value;
    }

    std::env::var("PUBLIC_BASE_URL")
        .map(|url| url.starts_with("https://"))
        .unwrap_or(false)
}

/// Status code a sign-up/sign-in failure maps to.
pub(crate) fn auth_error_status(err: &auth_svc::AuthError) -> StatusCode {
    match err {
        auth_svc::AuthError::InvalidEmail | auth_svc::AuthError::Password(_) => StatusCode::BAD_REQUEST,
        auth_svc::AuthError::EmailTaken => StatusCode::CONFLICT,
        auth_svc::AuthError::BadCredentials => StatusCode::UNAUTHORIZED,
        auth_svc::AuthError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(cookie_secure())
        .max_age(Duration::days(SESSION_COOKIE_DAYS))
        .build()
}

fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(cookie_secure())
        .max_age(Duration::ZERO)
        .build()
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: session::CurrentUser,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, token)
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user, token: token.to_owned() })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// Issue a session for `user_id` and return the cookie + wire identity.
async fn open_session(
    state: &AppState,
    jar: CookieJar,
    user_id: Uuid,
) -> Result<(CookieJar, Json<SessionUser>), (StatusCode, String)> {
    let token = session::create_session(&state.pool, user_id).await.map_err(|e| {
        tracing::error!(error = %e, "session creation failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "failed to create session".to_owned())
    })?;

    // Resolve through the same path every protected handler uses, so the
    // response reflects exactly what later requests will see.
    let user = session::validate_session(&state.pool, &token)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "session validation failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to validate session".to_owned())
        })?
        .ok_or_else(|| (StatusCode::INTERNAL_SERVER_ERROR, "fresh session did not validate".to_owned()))?;

    let jar = jar.add(session_cookie(token));
    Ok((jar, Json(user.to_wire())))
}

/// `POST /api/auth/signup` — create an account and sign it in.
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(input): Json<SignupRequest>,
) -> Result<(CookieJar, Json<SessionUser>), (StatusCode, String)> {
    let user_id = auth_svc::sign_up(&state.pool, &input.email, &input.password, input.display_name.as_deref())
        .await
        .map_err(|e| {
            if matches!(e, auth_svc::AuthError::Db(_)) {
                tracing::error!(error = %e, "sign-up failed");
            }
            (auth_error_status(&e), e.to_string())
        })?;

    open_session(&state, jar, user_id).await
}

/// `POST /api/auth/login` — verify credentials and open a session.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(input): Json<LoginRequest>,
) -> Result<(CookieJar, Json<SessionUser>), (StatusCode, String)> {
    let user_id = auth_svc::verify_credentials(&state.pool, &input.email, &input.password)
        .await
        .map_err(|e| {
            if matches!(e, auth_svc::AuthError::Db(_)) {
                tracing::error!(error = %e, "login failed");
            }
            (auth_error_status(&e), e.to_string())
        })?;

    open_session(&state, jar, user_id).await
}

/// `POST /api/auth/logout` — delete the session, clear the cookie.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> (CookieJar, StatusCode) {
    if let Err(e) = session::delete_session(&state.pool, &auth.token).await {
        tracing::error!(error = %e, "session delete failed");
    }

    let jar = CookieJar::new().add(clear_session_cookie());
    (jar, StatusCode::NO_CONTENT)
}

/// `GET /api/auth/me` — return the current user.
pub async fn me(auth: AuthUser) -> Json<SessionUser> {
    Json(auth.user.to_wire())
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
