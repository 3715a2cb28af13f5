use super::*;

use std::str::FromStr;

// =============================================================================
// Role wire spelling
// =============================================================================

#[test]
fn role_wire_strings_are_snake_case() {
    assert_eq!(Role::Admin.as_str(), "admin");
    assert_eq!(Role::ProjectManager.as_str(), "project_manager");
    assert_eq!(Role::Developer.as_str(), "developer");
    assert_eq!(Role::Tester.as_str(), "tester");
    assert_eq!(Role::Viewer.as_str(), "viewer");
}

#[test]
fn role_from_str_round_trips_every_variant() {
    for role in Role::ALL {
        assert_eq!(Role::from_str(role.as_str()).expect("role"), role);
    }
}

#[test]
fn role_from_str_rejects_unknown_value() {
    let err = Role::from_str("superuser").expect_err("role should be invalid");
    assert_eq!(err.0, "superuser");
    assert_eq!(err.to_string(), "unknown role: superuser");
}

#[test]
fn role_from_str_is_case_sensitive() {
    assert!(Role::from_str("Admin").is_err());
    assert!(Role::from_str("PROJECT_MANAGER").is_err());
}

#[test]
fn role_serde_matches_as_str() {
    for role in Role::ALL {
        let json = serde_json::to_string(&role).expect("serialize");
        assert_eq!(json, format!("\"{}\"", role.as_str()));
        let restored: Role = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, role);
    }
}

#[test]
fn role_serde_rejects_unknown_tag() {
    assert!(serde_json::from_str::<Role>("\"owner\"").is_err());
}

#[test]
fn role_default_is_viewer() {
    assert_eq!(Role::default(), Role::Viewer);
}

#[test]
fn role_display_uses_wire_spelling() {
    assert_eq!(Role::ProjectManager.to_string(), "project_manager");
}

// =============================================================================
// Role privileges
// =============================================================================

#[test]
fn only_admin_can_manage_roles() {
    assert!(Role::Admin.can_manage_roles());
    assert!(!Role::ProjectManager.can_manage_roles());
    assert!(!Role::Developer.can_manage_roles());
    assert!(!Role::Tester.can_manage_roles());
    assert!(!Role::Viewer.can_manage_roles());
}

#[test]
fn role_labels_are_human_readable() {
    assert_eq!(Role::ProjectManager.label(), "Project Manager");
    assert_eq!(Role::Viewer.label(), "Viewer");
}

// =============================================================================
// DTO shapes
// =============================================================================

#[test]
fn profile_serializes_null_avatar() {
    let profile = Profile {
        user_id: "00000000-0000-0000-0000-000000000001".into(),
        display_name: "alice".into(),
        avatar_url: None,
        role: Role::Developer,
        member_since: Some("2026-01-15".into()),
    };
    let json = serde_json::to_value(&profile).expect("serialize");
    assert!(json["avatar_url"].is_null());
    assert_eq!(json["role"], "developer");
    assert_eq!(json["member_since"], "2026-01-15");
}

#[test]
fn session_user_round_trips() {
    let user = SessionUser {
        id: "00000000-0000-0000-0000-000000000002".into(),
        email: "bob@example.com".into(),
        display_name: "bob".into(),
        avatar_url: Some("https://example.com/bob.png".into()),
        role: Role::Admin,
    };
    let json = serde_json::to_string(&user).expect("serialize");
    let restored: SessionUser = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, user);
}

#[test]
fn signup_request_display_name_defaults_to_none() {
    let body = r#"{"email":"a@b.com","password":"secretpass"}"#;
    let req: SignupRequest = serde_json::from_str(body).expect("deserialize");
    assert_eq!(req.display_name, None);
}

#[test]
fn update_profile_request_defaults_to_no_changes() {
    let req: UpdateProfileRequest = serde_json::from_str("{}").expect("deserialize");
    assert_eq!(req, UpdateProfileRequest::default());
    assert_eq!(req.display_name, None);
    assert_eq!(req.avatar_url, None);
}

#[test]
fn update_role_request_rejects_unknown_role() {
    assert!(serde_json::from_str::<UpdateRoleRequest>(r#"{"role":"root"}"#).is_err());
    let req: UpdateRoleRequest =
        serde_json::from_str(r#"{"role":"tester"}"#).expect("deserialize");
    assert_eq!(req.role, Role::Tester);
}
