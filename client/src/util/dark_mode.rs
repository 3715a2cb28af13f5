//! Dark-mode preference handling.
//!
//! The choice lives in `localStorage` and is reflected onto the `<html>`
//! element as a `data-theme` attribute, which the stylesheet keys off.
//! Outside a browser every function is a no-op.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "taskdeck_dark";

/// The stored choice, if the user ever toggled the theme.
#[cfg(feature = "csr")]
fn stored_preference() -> Option<bool> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let value = storage.get_item(STORAGE_KEY).ok()??;
    Some(value == "true")
}

/// Whether the OS asks for a dark UI.
#[cfg(feature = "csr")]
fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|mq| mq.matches())
}

#[cfg(feature = "csr")]
fn persist(enabled: bool) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(STORAGE_KEY, if enabled { "true" } else { "false" });
    }
}

/// Initial theme: the stored choice when present, the system preference
/// otherwise.
#[must_use]
pub fn read_preference() -> bool {
    #[cfg(feature = "csr")]
    {
        stored_preference().unwrap_or_else(system_prefers_dark)
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Reflect the flag onto `<html data-theme="...">`.
pub fn apply(enabled: bool) {
    #[cfg(feature = "csr")]
    {
        let theme = if enabled { "dark" } else { "light" };
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            let _ = root.set_attribute("data-theme", theme);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = enabled;
    }
}

/// Flip the theme, apply it, and persist the choice.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "csr")]
    persist(next);
    next
}
