//! Light/dark theme switching.
//!
//! - [`ThemeState`] - Reactive theme provided as context at the root
//! - [`ThemeToggle`] - Sliding switch
//! - [`PullCord`] - Decorative cord that toggles when pulled far enough

mod cord;
mod toggle;

use leptos::prelude::*;
use leptos_use::use_media_query;
use refine_core::audio::Effect as AudioEffect;
use refine_core::theme::{Theme, ThemeController};

use crate::utils::{audio, dom, storage::BrowserStore};

pub use cord::PullCord;
pub use toggle::ThemeToggle;

/// Current theme plus the controller that persists it.
///
/// `Copy`, so it can be captured by any handler; obtain it with
/// `use_context::<ThemeState>()`.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
    controller: StoredValue<ThemeController<BrowserStore>, LocalStorage>,
}

/// Saved preference, else the system color scheme as it is right now.
fn initial_controller() -> ThemeController<BrowserStore> {
    let prefers_dark = dom::prefers_dark();
    let controller = ThemeController::load(BrowserStore::local(), prefers_dark);
    tracing::debug!(theme = %controller.theme(), prefers_dark, "theme resolved");
    controller
}

impl ThemeState {
    /// Resolve the starting theme and apply it to the page.
    ///
    /// Must run inside a reactive owner. Until the visitor picks a theme,
    /// later system color scheme changes are followed.
    pub fn init() -> Self {
        let controller = initial_controller();
        let initial = controller.theme();
        dom::apply_theme(initial);

        let (theme, set_theme) = signal(initial);
        let state = Self {
            theme,
            set_theme,
            controller: StoredValue::new_local(controller),
        };

        // The media-query signal settles after mount; only react to changes.
        let system_dark = use_media_query("(prefers-color-scheme: dark)");
        Effect::new(move |prev: Option<bool>| {
            let dark = system_dark.get();
            if prev.is_some_and(|p| p != dark) {
                state.follow_system(dark);
            }
            dark
        });

        state
    }

    fn follow_system(&self, prefers_dark: bool) {
        let changed = self
            .controller
            .try_update_value(|c| c.follow_system(prefers_dark))
            .unwrap_or(false);
        if changed {
            let theme = self.controller.with_value(|c| c.theme());
            self.set_theme.set(theme);
            dom::apply_theme(theme);
            tracing::debug!(%theme, "following system color scheme");
        }
    }

    /// Flip the theme, apply it, persist it, and click.
    pub fn toggle(&self) {
        let Some(result) = self.controller.try_update_value(|c| c.toggle()) else {
            return;
        };
        let theme = self.controller.with_value(|c| c.theme());

        self.set_theme.set(theme);
        dom::apply_theme(theme);
        audio::play(AudioEffect::Click(theme));

        if let Err(e) = result {
            tracing::debug!(error = %e, "theme preference not persisted");
        }
    }
}

/// Fetch the [`ThemeState`] provided by the root.
pub fn use_theme() -> ThemeState {
    use_context::<ThemeState>().expect("ThemeState must be provided at root")
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use refine_core::theme::THEME_KEY;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn clear_saved() {
        if let Some(storage) = dom::local_storage() {
            let _ = storage.remove_item(THEME_KEY);
        }
    }

    #[wasm_bindgen_test]
    fn test_initial_theme_follows_system_scheme() {
        clear_saved();
        let system_dark = dom::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map(|mq| mq.matches())
            .unwrap();

        let expected = if system_dark { Theme::Dark } else { Theme::Light };
        assert_eq!(initial_controller().theme(), expected);
    }

    #[wasm_bindgen_test]
    fn test_saved_theme_beats_system_scheme() {
        let saved = if dom::prefers_dark() { Theme::Light } else { Theme::Dark };
        dom::local_storage()
            .unwrap()
            .set_item(THEME_KEY, saved.as_str())
            .unwrap();

        assert_eq!(initial_controller().theme(), saved);
        clear_saved();
    }
}
