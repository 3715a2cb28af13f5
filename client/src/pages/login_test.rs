use super::*;

// =============================================================================
// validate_sign_in_input
// =============================================================================

#[test]
fn sign_in_input_trims_email() {
    let req = validate_sign_in_input("  a@b.com  ", "secretpass").expect("input");
    assert_eq!(req.email, "a@b.com");
    assert_eq!(req.password, "secretpass");
}

#[test]
fn sign_in_input_requires_both_fields() {
    assert_eq!(
        validate_sign_in_input("", "secretpass"),
        Err("Enter both email and password.")
    );
    assert_eq!(validate_sign_in_input("a@b.com", ""), Err("Enter both email and password."));
    assert_eq!(validate_sign_in_input("   ", "x"), Err("Enter both email and password."));
}

#[test]
fn sign_in_input_does_not_trim_password() {
    let req = validate_sign_in_input("a@b.com", "  spaced  ").expect("input");
    assert_eq!(req.password, "  spaced  ");
}

// =============================================================================
// validate_sign_up_input
// =============================================================================

#[test]
fn sign_up_input_accepts_minimal_form() {
    let req = validate_sign_up_input("a@b.com", "12345678", "").expect("input");
    assert_eq!(req.email, "a@b.com");
    assert_eq!(req.display_name, None);
}

#[test]
fn sign_up_input_rejects_bad_email() {
    assert_eq!(
        validate_sign_up_input("not-an-email", "12345678", ""),
        Err("Enter a valid email address.")
    );
    assert_eq!(
        validate_sign_up_input("", "12345678", ""),
        Err("Enter a valid email address.")
    );
}

#[test]
fn sign_up_input_rejects_short_password() {
    assert_eq!(
        validate_sign_up_input("a@b.com", "1234567", ""),
        Err("Password must be at least 8 characters.")
    );
}

#[test]
fn sign_up_input_trims_display_name() {
    let req = validate_sign_up_input("a@b.com", "12345678", "  Alice  ").expect("input");
    assert_eq!(req.display_name, Some("Alice".to_owned()));
}

#[test]
fn sign_up_input_blank_display_name_becomes_none() {
    let req = validate_sign_up_input("a@b.com", "12345678", "   ").expect("input");
    assert_eq!(req.display_name, None);
}
