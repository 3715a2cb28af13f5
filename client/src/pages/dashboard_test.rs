use super::*;

use identity::Role;

fn sample_user() -> SessionUser {
    SessionUser {
        id: "u1".into(),
        email: "alice@example.com".into(),
        display_name: "Alice".into(),
        avatar_url: None,
        role: Role::ProjectManager,
    }
}

fn sample_profile() -> Profile {
    Profile {
        user_id: "u1".into(),
        display_name: "Alice".into(),
        avatar_url: Some("https://example.com/a.png".into()),
        role: Role::ProjectManager,
        member_since: Some("2026-01-15".into()),
    }
}

// =============================================================================
// identity_line
// =============================================================================

#[test]
fn identity_line_shows_name_and_role_label() {
    assert_eq!(identity_line(&sample_user()), "Alice (Project Manager)");
}

// =============================================================================
// build_profile_update
// =============================================================================

#[test]
fn unchanged_inputs_produce_no_update() {
    let profile = sample_profile();
    assert_eq!(build_profile_update("Alice", "https://example.com/a.png", &profile), None);
}

#[test]
fn renaming_sends_only_the_name() {
    let profile = sample_profile();
    let update = build_profile_update("Alicia", "https://example.com/a.png", &profile).expect("update");
    assert_eq!(update.display_name, Some("Alicia".to_owned()));
    assert_eq!(update.avatar_url, None);
}

#[test]
fn blank_name_input_is_treated_as_unchanged() {
    let profile = sample_profile();
    assert_eq!(build_profile_update("   ", "https://example.com/a.png", &profile), None);
}

#[test]
fn emptied_avatar_field_sends_an_explicit_clear() {
    let profile = sample_profile();
    let update = build_profile_update("Alice", "", &profile).expect("update");
    assert_eq!(update.display_name, None);
    assert_eq!(update.avatar_url, Some(String::new()));
}

#[test]
fn setting_avatar_from_empty_sends_the_url() {
    let mut profile = sample_profile();
    profile.avatar_url = None;
    let update = build_profile_update("Alice", "https://example.com/new.png", &profile).expect("update");
    assert_eq!(update.avatar_url, Some("https://example.com/new.png".to_owned()));
}

#[test]
fn inputs_are_trimmed_before_comparison() {
    let profile = sample_profile();
    assert_eq!(
        build_profile_update("  Alice  ", "  https://example.com/a.png  ", &profile),
        None
    );
}
