//! # client
//!
//! Leptos + WASM frontend for the Taskdeck identity layer. Owns the root
//! landing router (loading / dashboard / landing), the auth view-state
//! provider that mirrors the backend's session lifecycle, and the pages
//! and chrome built on top of them.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
