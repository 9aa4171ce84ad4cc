//! Browser-backed preference storage.
//!
//! The theme lives in localStorage so it survives reloads. The mascot intro
//! flag lives in sessionStorage: the walk-in plays once per tab, and again
//! on the next visit.

use refine_core::StorageError;
use refine_core::theme::PreferenceStore;
use web_sys::Storage;

use super::dom;
use crate::config::storage::INTRO_PLAYED_KEY;

/// [`PreferenceStore`] over a Web Storage area.
///
/// A missing storage area (private mode, blocked cookies) reads as empty and
/// rejects writes with [`StorageError::Unavailable`].
pub struct BrowserStore {
    storage: Option<Storage>,
}

impl BrowserStore {
    pub fn local() -> Self {
        Self {
            storage: dom::local_storage(),
        }
    }

    pub fn session() -> Self {
        Self {
            storage: dom::session_storage(),
        }
    }
}

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok()?
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed(key.to_string()))
    }
}

/// Whether the mascot intro already ran in this tab.
pub fn intro_played() -> bool {
    BrowserStore::session().get(INTRO_PLAYED_KEY).is_some()
}

/// Remember that the mascot intro ran.
pub fn mark_intro_played() {
    if let Err(e) = BrowserStore::session().set(INTRO_PLAYED_KEY, "1") {
        tracing::debug!(error = %e, "intro flag not saved");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use refine_core::theme::{THEME_KEY, Theme, ThemeController};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_theme_round_trip_through_local_storage() {
        if let Some(storage) = dom::local_storage() {
            let _ = storage.remove_item(THEME_KEY);
        }

        let mut ctl = ThemeController::load(BrowserStore::local(), false);
        assert_eq!(ctl.theme(), Theme::Light);
        assert_eq!(ctl.toggle(), Ok(Theme::Dark));

        let reloaded = ThemeController::load(BrowserStore::local(), false);
        assert_eq!(reloaded.theme(), Theme::Dark);
    }

    #[wasm_bindgen_test]
    fn test_intro_flag() {
        if let Some(storage) = dom::session_storage() {
            let _ = storage.remove_item(INTRO_PLAYED_KEY);
        }
        assert!(!intro_played());
        mark_intro_played();
        assert!(intro_played());
    }
}
