use super::*;

use crate::services::profile::ProfileError;

// =============================================================================
// profile_error_status
// =============================================================================

#[test]
fn not_found_maps_to_404() {
    assert_eq!(profile_error_status(&ProfileError::NotFound), StatusCode::NOT_FOUND);
}

#[test]
fn empty_display_name_maps_to_400() {
    assert_eq!(
        profile_error_status(&ProfileError::EmptyDisplayName),
        StatusCode::BAD_REQUEST
    );
}

#[test]
fn last_admin_guard_maps_to_409() {
    assert_eq!(profile_error_status(&ProfileError::LastAdmin), StatusCode::CONFLICT);
}

// =============================================================================
// ensure_can_manage
// =============================================================================

#[test]
fn admin_can_manage() {
    assert!(ensure_can_manage(Role::Admin).is_ok());
}

#[test]
fn non_admin_roles_are_forbidden() {
    for role in [Role::ProjectManager, Role::Developer, Role::Tester, Role::Viewer] {
        assert_eq!(ensure_can_manage(role), Err(StatusCode::FORBIDDEN), "role {role}");
    }
}
