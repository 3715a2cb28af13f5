//! REST API helpers for communicating with the identity backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning `None`/error since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth/profile
//! fetch failures degrade UI behavior without crashing the app. Error
//! strings prefer the server's response body (it carries messages like
//! "invalid email or password") and fall back to a status line.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LoginRequest, Profile, Role, SessionUser, SignupRequest, UpdateProfileRequest};
#[cfg(feature = "csr")]
use super::types::UpdateRoleRequest;

#[cfg(any(test, feature = "csr"))]
fn member_role_endpoint(user_id: &str) -> String {
    format!("/api/users/{user_id}/role")
}

#[cfg(any(test, feature = "csr"))]
fn request_failed_message(action: &str, status: u16) -> String {
    format!("{action} failed: {status}")
}

/// Prefer the server's error body; fall back to a status line.
#[cfg(feature = "csr")]
async fn error_message(resp: gloo_net::http::Response, action: &str) -> String {
    let status = resp.status();
    match resp.text().await {
        Ok(body) if !body.trim().is_empty() => body,
        _ => request_failed_message(action, status),
    }
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or outside the browser.
pub async fn fetch_current_user() -> Option<SessionUser> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<SessionUser>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Create an account via `POST /api/auth/signup`. Signing up signs in: the
/// response sets the session cookie.
///
/// # Errors
///
/// Returns the server's message (duplicate email, rejected password) or a
/// transport error string.
pub async fn sign_up(input: &SignupRequest) -> Result<SessionUser, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/signup")
            .json(input)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_message(resp, "sign up").await);
        }
        resp.json::<SessionUser>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = input;
        Err("not available outside the browser".to_owned())
    }
}

/// Sign in via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the server's message (one shared string for any credential
/// failure) or a transport error string.
pub async fn sign_in(input: &LoginRequest) -> Result<SessionUser, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(input)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_message(resp, "sign in").await);
        }
        resp.json::<SessionUser>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = input;
        Err("not available outside the browser".to_owned())
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "csr")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}

/// Fetch the caller's profile from `GET /api/profile`.
/// Returns `None` if not authenticated or outside the browser.
pub async fn fetch_profile() -> Option<Profile> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get("/api/profile").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Profile>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Update the caller's profile via `PATCH /api/profile`.
///
/// # Errors
///
/// Returns the server's message (blank display name) or a transport error
/// string.
pub async fn update_profile(input: &UpdateProfileRequest) -> Result<Profile, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::patch("/api/profile")
            .json(input)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_message(resp, "profile update").await);
        }
        resp.json::<Profile>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = input;
        Err("not available outside the browser".to_owned())
    }
}

/// Fetch every member's profile via `GET /api/users`. Admin only.
///
/// # Errors
///
/// Returns the server's message (403 for non-admins) or a transport error
/// string.
pub async fn fetch_members() -> Result<Vec<Profile>, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get("/api/users")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_message(resp, "member list").await);
        }
        resp.json::<Vec<Profile>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available outside the browser".to_owned())
    }
}

/// Change one member's role via `PATCH /api/users/{id}/role`. Admin only.
///
/// # Errors
///
/// Returns the server's message (403, last-admin guard) or a transport
/// error string.
pub async fn update_member_role(user_id: &str, role: Role) -> Result<Profile, String> {
    #[cfg(feature = "csr")]
    {
        let url = member_role_endpoint(user_id);
        let resp = gloo_net::http::Request::patch(&url)
            .json(&UpdateRoleRequest { role })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_message(resp, "role change").await);
        }
        resp.json::<Profile>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (user_id, role);
        Err("not available outside the browser".to_owned())
    }
}
