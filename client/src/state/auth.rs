//! Auth-session view state and the event stream that feeds it.
//!
//! SYSTEM CONTEXT
//! ==============
//! The provider mirrors the backend's auth lifecycle into reactive state:
//! network actions (and the initial session probe at mount) push
//! [`AuthEvent`]s onto a queue, and a single installed listener applies
//! them to [`AuthState`] in FIFO order. Components only ever read
//! `AuthState`; the listener is the one writer.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::collections::VecDeque;

use leptos::prelude::*;

use crate::net::types::{Profile, SessionUser};

/// A change in the authentication lifecycle.
#[derive(Clone, Debug, PartialEq)]
pub enum AuthEvent {
    /// Result of the initial session probe at app start.
    InitialSession(Option<SessionUser>),
    /// A sign-in (or sign-up) completed.
    SignedIn(SessionUser),
    /// The session ended.
    SignedOut,
    /// The caller's profile row was loaded or changed.
    ProfileUpdated(Profile),
}

/// Authentication state tracking the current user, their profile, and
/// whether the initial session probe is still in flight.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub profile: Option<Profile>,
    pub loading: bool,
}

impl Default for AuthState {
    /// Starts loading: the session probe has not reported yet.
    fn default() -> Self {
        Self { user: None, profile: None, loading: true }
    }
}

impl AuthState {
    /// Apply one auth event. Pure state transition.
    pub fn apply(&mut self, event: AuthEvent) {
        match event {
            AuthEvent::InitialSession(user) => {
                self.replace_user(user);
                self.loading = false;
            }
            AuthEvent::SignedIn(user) => {
                self.replace_user(Some(user));
                self.loading = false;
            }
            AuthEvent::SignedOut => {
                self.user = None;
                self.profile = None;
            }
            AuthEvent::ProfileUpdated(profile) => {
                // A stale profile response arriving after sign-out is dropped.
                if self.user.is_some() {
                    self.profile = Some(profile);
                }
            }
        }
    }

    /// Swap the current identity, discarding the profile when the user
    /// actually changed.
    fn replace_user(&mut self, user: Option<SessionUser>) {
        let same_user = match (&self.user, &user) {
            (Some(old), Some(new)) => old.id == new.id,
            (None, None) => true,
            _ => false,
        };
        if !same_user {
            self.profile = None;
        }
        self.user = user;
    }
}

/// FIFO queue of pending auth events plus a change counter.
///
/// The counter lets the listener effect subscribe to pushes without
/// re-running forever on its own drain.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthEvents {
    queue: VecDeque<AuthEvent>,
    seq: u64,
}

impl AuthEvents {
    /// Enqueue an event and bump the change counter.
    pub fn push(&mut self, event: AuthEvent) {
        self.queue.push_back(event);
        self.seq += 1;
    }

    /// Remove and return the oldest pending event.
    pub fn pop(&mut self) -> Option<AuthEvent> {
        self.queue.pop_front()
    }

    /// Number of pushes so far; monotonically increasing.
    #[must_use]
    pub fn seq(&self) -> u64 {
        self.seq
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Push an auth event onto the shared queue.
pub fn dispatch(events: RwSignal<AuthEvents>, event: AuthEvent) {
    events.update(|q| q.push(event));
}

/// Subscribe `state` to the event queue: every push drains the queue in
/// FIFO order through [`AuthState::apply`].
pub fn install_event_listener(state: RwSignal<AuthState>, events: RwSignal<AuthEvents>) {
    Effect::new(move || {
        events.track();
        loop {
            if events.with_untracked(AuthEvents::is_empty) {
                break;
            }
            if let Some(event) = events.try_update(AuthEvents::pop).flatten() {
                state.update(|s| s.apply(event));
            }
        }
    });
}

/// Probe the backend for an existing session and emit `InitialSession`.
///
/// This is what makes sessions survive reloads: the HttpOnly cookie rides
/// along with the probe, and a still-valid session comes back as a user.
pub fn bootstrap_session(events: RwSignal<AuthEvents>) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        dispatch(events, AuthEvent::InitialSession(user));
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = events;
    }
}

/// Load the caller's profile and emit `ProfileUpdated`.
pub fn load_profile(events: RwSignal<AuthEvents>) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        if let Some(profile) = crate::net::api::fetch_profile().await {
            dispatch(events, AuthEvent::ProfileUpdated(profile));
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = events;
    }
}

/// Sign out on the backend, then emit `SignedOut`.
///
/// The event is emitted even if the request fails: the user asked to leave,
/// and the worst case is a dangling server-side session that expires.
pub fn sign_out(events: RwSignal<AuthEvents>) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        crate::net::api::logout().await;
        dispatch(events, AuthEvent::SignedOut);
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = events;
    }
}
