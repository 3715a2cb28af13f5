use super::*;

// =============================================================================
// normalize_email
// =============================================================================

#[test]
fn normalize_email_accepts_basic_address() {
    assert_eq!(normalize_email("  USER@Example.com "), Some("user@example.com".to_owned()));
}

#[test]
fn normalize_email_rejects_invalid_values() {
    assert_eq!(normalize_email(""), None);
    assert_eq!(normalize_email("user"), None);
    assert_eq!(normalize_email("@example.com"), None);
    assert_eq!(normalize_email("user@"), None);
    assert_eq!(normalize_email("a@b@c"), None);
}

// =============================================================================
// display names
// =============================================================================

#[test]
fn display_name_from_email_takes_local_part() {
    assert_eq!(display_name_from_email("alice@example.com"), "alice");
}

#[test]
fn display_name_from_email_falls_back_for_degenerate_input() {
    assert_eq!(display_name_from_email(""), "user");
    assert_eq!(display_name_from_email("   @example.com"), "user");
}

#[test]
fn resolve_display_name_prefers_requested_value() {
    assert_eq!(resolve_display_name(Some("  Alice  "), "alice@example.com"), "Alice");
}

#[test]
fn resolve_display_name_ignores_blank_request() {
    assert_eq!(resolve_display_name(Some("   "), "alice@example.com"), "alice");
    assert_eq!(resolve_display_name(None, "bob@example.com"), "bob");
}

// =============================================================================
// error messages
// =============================================================================

#[test]
fn bad_credentials_message_does_not_name_the_field() {
    // Shared message for unknown email and wrong password.
    assert_eq!(AuthError::BadCredentials.to_string(), "invalid email or password");
}

#[test]
fn email_taken_message_mentions_existing_account() {
    assert_eq!(
        AuthError::EmailTaken.to_string(),
        "an account with this email already exists"
    );
}

#[test]
fn password_error_passes_through() {
    let err = AuthError::from(crate::services::password::PasswordError::TooShort);
    assert_eq!(err.to_string(), "password must be at least 8 characters");
}
