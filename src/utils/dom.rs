//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use std::cell::Cell;

use refine_core::theme::Theme;
use web_sys::{HtmlElement, Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Get sessionStorage.
#[inline]
pub fn session_storage() -> Option<Storage> {
    window()?.session_storage().ok()?
}

fn body() -> Option<HtmlElement> {
    window()?.document()?.body()
}

/// Milliseconds since the epoch, for measuring tick deltas.
#[inline]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

// =============================================================================
// Theme
// =============================================================================

/// Whether the system color scheme is dark, read synchronously.
pub fn prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|mq| mq.matches())
}

/// Apply `theme` to the page.
///
/// Sets `data-theme` on `<html>` (read by the stylesheet variables) and the
/// `dark` class on `<body>`.
pub fn apply_theme(theme: Theme) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };

    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
    if let Some(body) = document.body() {
        let _ = body.class_list().toggle_with_force("dark", theme.is_dark());
    }
}

// =============================================================================
// Scroll lock
// =============================================================================

thread_local! {
    static SCROLL_LOCKS: Cell<u32> = const { Cell::new(0) };
}

/// Keeps the page body from scrolling while alive.
///
/// Locks nest: the menu and the fullscreen preview can both hold one, and
/// scrolling comes back only when the last is dropped.
#[derive(Debug)]
pub struct ScrollLock(());

impl ScrollLock {
    pub fn acquire() -> Self {
        let held = SCROLL_LOCKS.with(|n| {
            n.set(n.get() + 1);
            n.get()
        });
        if held == 1 {
            set_body_overflow("hidden");
        }
        Self(())
    }

    /// Number of live locks.
    #[cfg(test)]
    pub fn held() -> u32 {
        SCROLL_LOCKS.with(Cell::get)
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let held = SCROLL_LOCKS.with(|n| {
            n.set(n.get().saturating_sub(1));
            n.get()
        });
        if held == 0 {
            set_body_overflow("");
        }
    }
}

fn set_body_overflow(value: &str) {
    if let Some(body) = body() {
        let _ = body.style().set_property("overflow", value);
    }
}
