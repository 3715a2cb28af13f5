use super::*;

// =============================================================================
// env_bool — uses unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_bool_true_variants() {
    for (i, val) in ["1", "true", "yes", "on"].iter().enumerate() {
        let key = format!("__TEST_EB_TRUE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(true), "expected true for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_false_variants() {
    for (i, val) in ["0", "false", "no", "off"].iter().enumerate() {
        let key = format!("__TEST_EB_FALSE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(false), "expected false for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_case_insensitive() {
    for (i, val) in ["TRUE", "True", "YES", "On"].iter().enumerate() {
        let key = format!("__TEST_EB_CI_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(true), "expected true for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_invalid_returns_none() {
    let key = "__TEST_EB_INVALID_3141__";
    unsafe { std::env::set_var(key, "maybe") };
    assert_eq!(env_bool(key), None);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_bool_unset_returns_none() {
    assert_eq!(env_bool("__TEST_EB_SURELY_UNSET_XYZ_7__"), None);
}

// =============================================================================
// cookie_secure — the https inference is tested via its components to avoid
// racing other tests on the shared PUBLIC_BASE_URL/COOKIE_SECURE globals.
// =============================================================================

#[test]
fn cookie_secure_https_inference_logic() {
    assert!("https://tasks.example.com".starts_with("https://"));
    assert!(!"http://localhost:3000".starts_with("https://"));
}

// =============================================================================
// auth_error_status
// =============================================================================

#[test]
fn invalid_input_maps_to_bad_request() {
    assert_eq!(
        auth_error_status(&crate::services::auth::AuthError::InvalidEmail),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        auth_error_status(&crate::services::auth::AuthError::Password(
            crate::services::password::PasswordError::TooShort
        )),
        StatusCode::BAD_REQUEST
    );
}

#[test]
fn duplicate_email_maps_to_conflict() {
    assert_eq!(
        auth_error_status(&crate::services::auth::AuthError::EmailTaken),
        StatusCode::CONFLICT
    );
}

#[test]
fn bad_credentials_map_to_unauthorized() {
    assert_eq!(
        auth_error_status(&crate::services::auth::AuthError::BadCredentials),
        StatusCode::UNAUTHORIZED
    );
}

// =============================================================================
// cookies
// =============================================================================

#[test]
fn session_cookie_is_http_only_lax() {
    let cookie = session_cookie("tok".to_owned());
    assert_eq!(cookie.name(), COOKIE_NAME);
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.path(), Some("/"));
}

#[test]
fn clear_cookie_expires_immediately() {
    let cookie = clear_session_cookie();
    assert_eq!(cookie.name(), COOKIE_NAME);
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    assert_eq!(cookie.value(), "");
}
