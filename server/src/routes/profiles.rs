//! Profile routes — the caller's own row, plus admin role management.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use uuid::Uuid;

use identity::{Profile, Role, UpdateProfileRequest, UpdateRoleRequest};

use crate::services::profile as profile_svc;
use crate::state::AppState;

use super::auth::AuthUser;

/// Status code a profile failure maps to.
pub(crate) fn profile_error_status(err: &profile_svc::ProfileError) -> StatusCode {
    match err {
        profile_svc::ProfileError::NotFound => StatusCode::NOT_FOUND,
        profile_svc::ProfileError::EmptyDisplayName => StatusCode::BAD_REQUEST,
        profile_svc::ProfileError::LastAdmin => StatusCode::CONFLICT,
        profile_svc::ProfileError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Gate an endpoint on role-management privileges.
pub(crate) fn ensure_can_manage(role: Role) -> Result<(), StatusCode> {
    if role.can_manage_roles() {
        Ok(())
    } else {
        Err(StatusCode::FORBIDDEN)
    }
}

fn map_profile_error(err: &profile_svc::ProfileError) -> (StatusCode, String) {
    if matches!(err, profile_svc::ProfileError::Db(_)) {
        tracing::error!(error = %err, "profile query failed");
    }
    (profile_error_status(err), err.to_string())
}

/// `GET /api/profile` — the caller's profile, bootstrapped if missing.
pub async fn my_profile(State(state): State<AppState>, auth: AuthUser) -> Result<Json<Profile>, (StatusCode, String)> {
    let profile = profile_svc::fetch_or_bootstrap(&state.pool, auth.user.id, &auth.user.display_name)
        .await
        .map_err(|e| map_profile_error(&e))?;
    Ok(Json(profile))
}

/// `PATCH /api/profile` — update the caller's display name and/or avatar.
pub async fn update_my_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<UpdateProfileRequest>,
) -> Result<Json<Profile>, (StatusCode, String)> {
    let profile = profile_svc::update_profile(
        &state.pool,
        auth.user.id,
        input.display_name.as_deref(),
        input.avatar_url.as_deref(),
    )
    .await
    .map_err(|e| map_profile_error(&e))?;
    Ok(Json(profile))
}

/// `GET /api/users` — every member's profile. Admin only.
pub async fn list_members(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Profile>>, (StatusCode, String)> {
    ensure_can_manage(auth.user.role).map_err(|s| (s, "role management requires admin".to_owned()))?;

    let profiles = profile_svc::list_profiles(&state.pool)
        .await
        .map_err(|e| map_profile_error(&e))?;
    Ok(Json(profiles))
}

/// `PATCH /api/users/{id}/role` — change one member's role. Admin only.
pub async fn update_member_role(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Uuid>,
    Json(input): Json<UpdateRoleRequest>,
) -> Result<Json<Profile>, (StatusCode, String)> {
    ensure_can_manage(auth.user.role).map_err(|s| (s, "role management requires admin".to_owned()))?;

    let profile = profile_svc::set_role(&state.pool, user_id, input.role)
        .await
        .map_err(|e| map_profile_error(&e))?;

    tracing::info!(target_user = %user_id, role = %input.role, by = %auth.user.id, "role changed");
    Ok(Json(profile))
}

#[cfg(test)]
#[path = "profiles_test.rs"]
mod tests;
