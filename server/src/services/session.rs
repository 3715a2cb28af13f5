//! Session management.
//!
//! ARCHITECTURE
//! ============
//! Sessions are opaque random tokens stored server-side with their expiry;
//! the token travels only in an HttpOnly cookie. Validation resolves the
//! token to the current identity, including the profile's role, so every
//! protected handler sees a consistent picture from one query.
//!
//! TRADE-OFFS
//! ==========
//! Role changes are picked up on the next validation rather than pushed to
//! live sessions; an admin demotion takes effect on the target's next
//! request, not instantly.

use std::fmt::Write;

use rand::Rng;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use identity::{Role, SessionUser};

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Authenticated identity resolved from a session token.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// Unique user identifier.
    pub id: Uuid,
    /// Sign-in email, normalized to lowercase.
    pub email: String,
    /// Display name from the profile row.
    pub display_name: String,
    /// Avatar image URL, if set.
    pub avatar_url: Option<String>,
    /// Access-level tag from the profile row.
    pub role: Role,
}

impl CurrentUser {
    /// The wire representation sent to the client.
    #[must_use]
    pub fn to_wire(&self) -> SessionUser {
        SessionUser {
            id: self.id.to_string(),
            email: self.email.clone(),
            display_name: self.display_name.clone(),
            avatar_url: self.avatar_url.clone(),
            role: self.role,
        }
    }
}

/// Create a session for the given user, returning the token.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub async fn create_session(pool: &PgPool, user_id: Uuid) -> Result<String, sqlx::Error> {
    let token = generate_token();
    sqlx::query("INSERT INTO sessions (token, user_id) VALUES ($1, $2)")
        .bind(&token)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(token)
}

/// Validate a session token and return the associated identity.
///
/// Expired sessions resolve to `None`, exactly like unknown tokens. Users
/// whose profile row has not been bootstrapped yet still validate; their
/// display name falls back to the email local part and their role to the
/// default.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn validate_session(pool: &PgPool, token: &str) -> Result<Option<CurrentUser>, sqlx::Error> {
    let row = sqlx::query(
        r"SELECT
              u.id,
              u.email,
              COALESCE(p.display_name, split_part(u.email, '@', 1)) AS display_name,
              p.avatar_url,
              COALESCE(p.role, 'viewer') AS role
          FROM sessions s
          JOIN users u ON u.id = s.user_id
          LEFT JOIN profiles p ON p.user_id = u.id
          WHERE s.token = $1 AND s.expires_at > now()",
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| CurrentUser {
        id: r.get("id"),
        email: r.get("email"),
        display_name: r.get("display_name"),
        avatar_url: r.get("avatar_url"),
        role: r.get::<String, _>("role").parse().unwrap_or_default(),
    }))
}

/// Delete a session by token.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub async fn delete_session(pool: &PgPool, token: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM sessions WHERE token = $1")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
