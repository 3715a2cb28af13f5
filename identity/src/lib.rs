//! Shared identity model for the client/server boundary.
//!
//! This crate owns the types both `server` and `client` serialize across
//! HTTP: the role tag, profile rows, the authenticated-user payload, and
//! the auth request bodies. Keeping them in one place means the two sides
//! cannot drift on field names or role spellings.

use serde::{Deserialize, Serialize};

/// Error returned when parsing a [`Role`] from its wire string.
#[derive(Debug, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

/// Access-level tag attached to every profile.
///
/// Stored as text in the database and sent as snake_case on the wire
/// (`"project_manager"` etc.). New accounts start as [`Role::Viewer`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    ProjectManager,
    Developer,
    Tester,
    #[default]
    Viewer,
}

impl Role {
    /// All roles, in descending order of privilege. Drives admin UI lists.
    pub const ALL: [Self; 5] = [
        Self::Admin,
        Self::ProjectManager,
        Self::Developer,
        Self::Tester,
        Self::Viewer,
    ];

    /// The wire/database spelling of this role.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::ProjectManager => "project_manager",
            Self::Developer => "developer",
            Self::Tester => "tester",
            Self::Viewer => "viewer",
        }
    }

    /// Human-readable label for UI display.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::ProjectManager => "Project Manager",
            Self::Developer => "Developer",
            Self::Tester => "Tester",
            Self::Viewer => "Viewer",
        }
    }

    /// Whether this role may list members and change other users' roles.
    #[must_use]
    pub fn can_manage_roles(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl std::str::FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "project_manager" => Ok(Self::ProjectManager),
            "developer" => Ok(Self::Developer),
            "tester" => Ok(Self::Tester),
            "viewer" => Ok(Self::Viewer),
            other => Err(ParseRoleError(other.to_owned())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A profile row: display name, avatar, and role, keyed by the user's
/// identity id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Owning user's identifier (UUID string).
    pub user_id: String,
    /// Display name shown across the product.
    pub display_name: String,
    /// Avatar image URL, if set.
    pub avatar_url: Option<String>,
    /// Access-level tag.
    pub role: Role,
    /// ISO 8601 date the profile was created, if known.
    pub member_since: Option<String>,
}

/// The authenticated identity returned by the `/api/auth/*` endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Sign-in email, normalized to lowercase.
    pub email: String,
    /// Display name shown across the product.
    pub display_name: String,
    /// Avatar image URL, if set.
    pub avatar_url: Option<String>,
    /// Access-level tag.
    pub role: Role,
}

/// Body of `POST /api/auth/signup`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    /// Optional display name; defaults from the email local part.
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `PATCH /api/profile`. Absent fields are left unchanged; an
/// empty `avatar_url` string clears the avatar.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Body of `PATCH /api/users/{id}/role`. An unknown role string fails
/// deserialization, so invalid tags never reach a handler.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdateRoleRequest {
    pub role: Role,
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
