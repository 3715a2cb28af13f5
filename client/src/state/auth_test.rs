use super::*;

use identity::Role;

fn user(id: &str) -> SessionUser {
    SessionUser {
        id: id.to_owned(),
        email: format!("{id}@example.com"),
        display_name: id.to_owned(),
        avatar_url: None,
        role: Role::Developer,
    }
}

fn profile(id: &str) -> Profile {
    Profile {
        user_id: id.to_owned(),
        display_name: id.to_owned(),
        avatar_url: None,
        role: Role::Developer,
        member_since: None,
    }
}

// =============================================================================
// AuthState defaults
// =============================================================================

#[test]
fn auth_state_starts_loading_with_no_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert!(state.profile.is_none());
}

// =============================================================================
// AuthState::apply
// =============================================================================

#[test]
fn initial_session_none_ends_loading() {
    let mut state = AuthState::default();
    state.apply(AuthEvent::InitialSession(None));
    assert!(!state.loading);
    assert!(state.user.is_none());
}

#[test]
fn initial_session_some_restores_user() {
    let mut state = AuthState::default();
    state.apply(AuthEvent::InitialSession(Some(user("u1"))));
    assert!(!state.loading);
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u1"));
}

#[test]
fn loading_never_returns_after_initial_session() {
    let mut state = AuthState::default();
    state.apply(AuthEvent::InitialSession(None));
    state.apply(AuthEvent::SignedIn(user("u1")));
    assert!(!state.loading);
    state.apply(AuthEvent::SignedOut);
    assert!(!state.loading);
}

#[test]
fn signed_in_sets_user() {
    let mut state = AuthState::default();
    state.apply(AuthEvent::SignedIn(user("u1")));
    assert!(!state.loading);
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u1"));
}

#[test]
fn signed_in_as_other_user_discards_previous_profile() {
    let mut state = AuthState::default();
    state.apply(AuthEvent::SignedIn(user("u1")));
    state.apply(AuthEvent::ProfileUpdated(profile("u1")));
    assert!(state.profile.is_some());

    state.apply(AuthEvent::SignedIn(user("u2")));
    assert!(state.profile.is_none());
}

#[test]
fn signed_in_as_same_user_keeps_profile() {
    let mut state = AuthState::default();
    state.apply(AuthEvent::SignedIn(user("u1")));
    state.apply(AuthEvent::ProfileUpdated(profile("u1")));
    state.apply(AuthEvent::SignedIn(user("u1")));
    assert!(state.profile.is_some());
}

#[test]
fn signed_out_clears_user_and_profile() {
    let mut state = AuthState::default();
    state.apply(AuthEvent::SignedIn(user("u1")));
    state.apply(AuthEvent::ProfileUpdated(profile("u1")));
    state.apply(AuthEvent::SignedOut);
    assert!(state.user.is_none());
    assert!(state.profile.is_none());
}

#[test]
fn profile_update_ignored_when_signed_out() {
    let mut state = AuthState::default();
    state.apply(AuthEvent::InitialSession(None));
    state.apply(AuthEvent::ProfileUpdated(profile("u1")));
    assert!(state.profile.is_none());
}

#[test]
fn profile_update_applies_when_signed_in() {
    let mut state = AuthState::default();
    state.apply(AuthEvent::SignedIn(user("u1")));
    state.apply(AuthEvent::ProfileUpdated(profile("u1")));
    assert_eq!(state.profile.as_ref().map(|p| p.user_id.as_str()), Some("u1"));
}

// =============================================================================
// AuthEvents queue
// =============================================================================

#[test]
fn events_default_is_empty() {
    let events = AuthEvents::default();
    assert!(events.is_empty());
    assert_eq!(events.len(), 0);
    assert_eq!(events.seq(), 0);
}

#[test]
fn events_drain_in_fifo_order() {
    let mut events = AuthEvents::default();
    events.push(AuthEvent::SignedIn(user("u1")));
    events.push(AuthEvent::SignedOut);

    assert!(matches!(events.pop(), Some(AuthEvent::SignedIn(_))));
    assert!(matches!(events.pop(), Some(AuthEvent::SignedOut)));
    assert!(events.pop().is_none());
}

#[test]
fn seq_counts_pushes_not_pops() {
    let mut events = AuthEvents::default();
    events.push(AuthEvent::SignedOut);
    events.push(AuthEvent::SignedOut);
    assert_eq!(events.seq(), 2);

    let _ = events.pop();
    let _ = events.pop();
    assert_eq!(events.seq(), 2);
    assert!(events.is_empty());
}
