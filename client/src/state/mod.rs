//! Reactive application state provided via context.
//!
//! ARCHITECTURE
//! ============
//! `auth` owns the session/profile mirror fed by the auth event queue;
//! `ui` owns transient presentation concerns (theme, notices). Pages read
//! both through `expect_context`.

pub mod auth;
pub mod ui;
