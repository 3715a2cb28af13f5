//! Profile rows — fetch, bootstrap, updates, and role administration.
//!
//! Every operation touches exactly one row by primary key; the profile
//! table is the single source of truth for display name, avatar, and role.

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use identity::{Profile, Role};

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("profile not found")]
    NotFound,
    #[error("display name cannot be empty")]
    EmptyDisplayName,
    #[error("cannot demote the only remaining admin")]
    LastAdmin,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// How a profile update treats the avatar field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AvatarChange {
    /// Field absent from the request: leave as-is.
    Keep,
    /// Empty string: clear the avatar.
    Clear,
    /// Replace with a new URL.
    Set(String),
}

/// Interpret the request's optional avatar field.
#[must_use]
pub fn avatar_change(input: Option<&str>) -> AvatarChange {
    match input.map(str::trim) {
        None => AvatarChange::Keep,
        Some("") => AvatarChange::Clear,
        Some(url) => AvatarChange::Set(url.to_owned()),
    }
}

/// Validate the request's optional display name, trimming it.
///
/// # Errors
///
/// Returns [`ProfileError::EmptyDisplayName`] when a name is present but
/// blank.
pub fn validate_display_name(input: Option<&str>) -> Result<Option<String>, ProfileError> {
    match input.map(str::trim) {
        None => Ok(None),
        Some("") => Err(ProfileError::EmptyDisplayName),
        Some(name) => Ok(Some(name.to_owned())),
    }
}

const PROFILE_COLUMNS: &str = r"p.user_id,
       p.display_name,
       p.avatar_url,
       p.role,
       to_char(p.created_at, 'YYYY-MM-DD') AS member_since";

fn row_to_profile(row: &PgRow) -> Profile {
    Profile {
        user_id: row.get::<Uuid, _>("user_id").to_string(),
        display_name: row.get("display_name"),
        avatar_url: row.get("avatar_url"),
        role: row.get::<String, _>("role").parse().unwrap_or_default(),
        member_since: row.get("member_since"),
    }
}

/// Fetch a profile row by user id.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn fetch_profile(pool: &PgPool, user_id: Uuid) -> Result<Option<Profile>, ProfileError> {
    let row = sqlx::query(&format!("SELECT {PROFILE_COLUMNS} FROM profiles p WHERE p.user_id = $1"))
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    Ok(row.as_ref().map(row_to_profile))
}

/// Fetch the caller's profile, inserting the default row first if missing.
///
/// The insert is `ON CONFLICT DO NOTHING`, so racing bootstraps converge on
/// one row.
///
/// # Errors
///
/// Returns an error if the insert or re-read fails.
pub async fn fetch_or_bootstrap(pool: &PgPool, user_id: Uuid, fallback_name: &str) -> Result<Profile, ProfileError> {
    if let Some(profile) = fetch_profile(pool, user_id).await? {
        return Ok(profile);
    }

    sqlx::query(
        r"INSERT INTO profiles (user_id, display_name, role)
          VALUES ($1, $2, $3)
          ON CONFLICT (user_id) DO NOTHING",
    )
    .bind(user_id)
    .bind(fallback_name)
    .bind(Role::default().as_str())
    .execute(pool)
    .await?;

    fetch_profile(pool, user_id).await?.ok_or(ProfileError::NotFound)
}

/// Update display name and/or avatar of one row by primary key.
///
/// # Errors
///
/// `EmptyDisplayName` for a blank name, `NotFound` for an unknown user,
/// `Db` for storage failures.
pub async fn update_profile(
    pool: &PgPool,
    user_id: Uuid,
    display_name: Option<&str>,
    avatar_url: Option<&str>,
) -> Result<Profile, ProfileError> {
    let name = validate_display_name(display_name)?;
    let (clear_avatar, new_avatar) = match avatar_change(avatar_url) {
        AvatarChange::Keep => (false, None),
        AvatarChange::Clear => (true, None),
        AvatarChange::Set(url) => (false, Some(url)),
    };

    let row = sqlx::query(&format!(
        r"UPDATE profiles p
          SET display_name = COALESCE($2, display_name),
              avatar_url = CASE
                  WHEN $3 THEN NULL
                  WHEN $4::text IS NOT NULL THEN $4
                  ELSE avatar_url
              END,
              updated_at = now()
          WHERE p.user_id = $1
          RETURNING {PROFILE_COLUMNS}"
    ))
    .bind(user_id)
    .bind(name)
    .bind(clear_avatar)
    .bind(new_avatar)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(row_to_profile).ok_or(ProfileError::NotFound)
}

/// List every profile, oldest account first.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn list_profiles(pool: &PgPool) -> Result<Vec<Profile>, ProfileError> {
    let rows = sqlx::query(&format!(
        "SELECT {PROFILE_COLUMNS} FROM profiles p ORDER BY p.created_at, p.user_id"
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows.iter().map(row_to_profile).collect())
}

/// Change one user's role.
///
/// Demoting the only remaining admin is refused so the team panel cannot
/// lock everyone out of role management.
///
/// # Errors
///
/// `NotFound` for an unknown user, `LastAdmin` when the guard trips, `Db`
/// for storage failures.
pub async fn set_role(pool: &PgPool, user_id: Uuid, role: Role) -> Result<Profile, ProfileError> {
    let current = fetch_profile(pool, user_id).await?.ok_or(ProfileError::NotFound)?;

    if current.role == Role::Admin && role != Role::Admin {
        let admins: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM profiles WHERE role = $1")
            .bind(Role::Admin.as_str())
            .fetch_one(pool)
            .await?;
        if admins <= 1 {
            return Err(ProfileError::LastAdmin);
        }
    }

    let row = sqlx::query(&format!(
        r"UPDATE profiles p
          SET role = $2, updated_at = now()
          WHERE p.user_id = $1
          RETURNING {PROFILE_COLUMNS}"
    ))
    .bind(user_id)
    .bind(role.as_str())
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(row_to_profile).ok_or(ProfileError::NotFound)
}

#[cfg(test)]
#[path = "profile_test.rs"]
mod tests;
