//! Account service — sign-up, credential verification, profile bootstrap.

use sqlx::{PgPool, Row};
use uuid::Uuid;

use identity::Role;

use super::password;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid email")]
    InvalidEmail,
    #[error(transparent)]
    Password(#[from] password::PasswordError),
    #[error("an account with this email already exists")]
    EmailTaken,
    #[error("invalid email or password")]
    BadCredentials,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    if normalized.is_empty() || !normalized.contains('@') {
        return None;
    }
    let parts = normalized.split('@').collect::<Vec<_>>();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return None;
    }
    Some(normalized)
}

/// Default display name for a fresh profile: the email local part.
#[must_use]
pub fn display_name_from_email(email: &str) -> String {
    let local = email
        .split('@')
        .next()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or("user");
    local.to_owned()
}

/// Resolve the display name a sign-up should use: the caller's choice if
/// non-empty, otherwise the email local part.
#[must_use]
pub fn resolve_display_name(requested: Option<&str>, email: &str) -> String {
    requested
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map_or_else(|| display_name_from_email(email), ToOwned::to_owned)
}

/// Create an account: validate the email and password, hash the password,
/// insert the user row, and bootstrap the profile. Returns the user id.
///
/// # Errors
///
/// `InvalidEmail`/`Password` for rejected input, `EmailTaken` when the
/// address already has an account, `Db` for storage failures.
pub async fn sign_up(
    pool: &PgPool,
    email: &str,
    password: &str,
    display_name: Option<&str>,
) -> Result<Uuid, AuthError> {
    let normalized = normalize_email(email).ok_or(AuthError::InvalidEmail)?;
    password::check_policy(password)?;
    let hash = password::hash_password(password)?;

    // The unique constraint is the authority on duplicates; a pre-check
    // would still race with concurrent sign-ups.
    let row = sqlx::query("INSERT INTO users (email, password_hash) VALUES ($1, $2) RETURNING id")
        .bind(&normalized)
        .bind(&hash)
        .fetch_one(pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => AuthError::EmailTaken,
            _ => AuthError::Db(e),
        })?;
    let user_id: Uuid = row.get("id");

    let name = resolve_display_name(display_name, &normalized);
    bootstrap_profile(pool, user_id, &name).await?;

    Ok(user_id)
}

/// Insert the profile row for a user if it is missing. Idempotent.
///
/// # Errors
///
/// Returns `Db` for storage failures.
pub async fn bootstrap_profile(pool: &PgPool, user_id: Uuid, display_name: &str) -> Result<(), AuthError> {
    sqlx::query(
        r"INSERT INTO profiles (user_id, display_name, role)
          VALUES ($1, $2, $3)
          ON CONFLICT (user_id) DO NOTHING",
    )
    .bind(user_id)
    .bind(display_name)
    .bind(Role::default().as_str())
    .execute(pool)
    .await?;
    Ok(())
}

/// Check email + password, returning the user id on success.
///
/// Unknown email and wrong password produce the same `BadCredentials`
/// error so responses cannot be used to probe which addresses have
/// accounts.
///
/// # Errors
///
/// `BadCredentials` for any credential failure, `Db` for storage failures.
pub async fn verify_credentials(pool: &PgPool, email: &str, password: &str) -> Result<Uuid, AuthError> {
    let normalized = normalize_email(email).ok_or(AuthError::BadCredentials)?;

    let row = sqlx::query("SELECT id, password_hash FROM users WHERE email = $1")
        .bind(&normalized)
        .fetch_optional(pool)
        .await?;
    let Some(row) = row else {
        return Err(AuthError::BadCredentials);
    };

    let hash: String = row.get("password_hash");
    if !password::verify_password(password, &hash) {
        return Err(AuthError::BadCredentials);
    }

    Ok(row.get("id"))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
