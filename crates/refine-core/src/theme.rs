//! Light/dark preference.
//!
//! [`ThemeController`] owns the current [`Theme`] and persists every change
//! through a [`PreferenceStore`], so the stored value always matches what
//! the page shows. The browser implements the store over `localStorage`;
//! tests use [`MemoryStore`].

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::StorageError;

/// Storage key for the persisted theme.
pub const THEME_KEY: &str = "theme";

// ============================================================================
// Theme
// ============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    #[inline]
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Pick the starting theme.
    ///
    /// A saved preference wins. Otherwise, or when the saved value is not
    /// recognised, follow the system color scheme.
    pub fn resolve(saved: Option<&str>, prefers_dark: bool) -> Self {
        saved
            .and_then(|s| s.parse().ok())
            .unwrap_or(if prefers_dark { Theme::Dark } else { Theme::Light })
    }

    /// Screen-reader text for the toggle.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Switch to dark mode",
            Theme::Dark => "Switch to light mode",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised theme name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

// ============================================================================
// Storage
// ============================================================================

/// A string key/value store (browser `Storage`, or memory in tests).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ============================================================================
// ThemeController
// ============================================================================

pub struct ThemeController<S> {
    store: S,
    theme: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Read the saved preference, falling back to the system scheme.
    pub fn load(store: S, prefers_dark: bool) -> Self {
        let saved = store.get(THEME_KEY);
        let theme = Theme::resolve(saved.as_deref(), prefers_dark);
        Self { store, theme }
    }

    #[inline]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The system color scheme changed.
    ///
    /// Only followed while nothing usable is saved; an explicit choice
    /// sticks. Returns whether the theme changed.
    pub fn follow_system(&mut self, prefers_dark: bool) -> bool {
        let saved = self.store.get(THEME_KEY);
        let theme = Theme::resolve(saved.as_deref(), prefers_dark);
        let changed = theme != self.theme;
        self.theme = theme;
        changed
    }

    /// Flip and persist the theme.
    ///
    /// The in-memory theme flips even when the write fails, so the page
    /// still responds; the error tells the caller the choice won't survive
    /// a reload.
    pub fn toggle(&mut self) -> Result<Theme, StorageError> {
        self.theme = self.theme.toggled();
        self.store.set(THEME_KEY, self.theme.as_str())?;
        Ok(self.theme)
    }
}

// ============================================================================
// Pull cord
// ============================================================================

/// Stretch needed before releasing the cord toggles the theme.
pub const CORD_THRESHOLD_PX: f64 = 40.0;
/// The cord stops stretching here.
pub const CORD_MAX_PX: f64 = 80.0;

/// Drag gesture on the decorative pull cord.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PullCord {
    stretch: f64,
    dragging: bool,
}

impl PullCord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current stretch in px.
    #[inline]
    pub fn stretch(&self) -> f64 {
        self.stretch
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether releasing now would toggle.
    pub fn armed(&self) -> bool {
        self.stretch >= CORD_THRESHOLD_PX
    }

    pub fn grab(&mut self) {
        self.dragging = true;
        self.stretch = 0.0;
    }

    /// Pointer moved `dy` px below where it grabbed the cord.
    pub fn drag(&mut self, dy: f64) {
        if !self.dragging || dy.is_nan() {
            return;
        }
        self.stretch = dy.clamp(0.0, CORD_MAX_PX);
    }

    /// Let go. Returns whether the theme should toggle.
    pub fn release(&mut self) -> bool {
        let fire = self.dragging && self.armed();
        self.dragging = false;
        self.stretch = 0.0;
        fire
    }

    /// The pointer was taken away (`pointercancel`). Snap back without
    /// toggling.
    pub fn cancel(&mut self) {
        self.dragging = false;
        self.stretch = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
        assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
        assert_eq!(Theme::resolve(Some("sepia"), true), Theme::Dark);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(" dark ".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(
            "Dark".parse::<Theme>(),
            Err(UnknownTheme("Dark".to_string()))
        );
    }

    #[test]
    fn test_toggle_persists() {
        let mut ctl = ThemeController::load(MemoryStore::new(), false);
        assert_eq!(ctl.theme(), Theme::Light);

        assert_eq!(ctl.toggle(), Ok(Theme::Dark));
        assert_eq!(ctl.store().get(THEME_KEY).as_deref(), Some("dark"));
    }

    struct ReadOnly;

    impl PreferenceStore for ReadOnly {
        fn get(&self, _: &str) -> Option<String> {
            None
        }
        fn set(&mut self, key: &str, _: &str) -> Result<(), StorageError> {
            Err(StorageError::WriteFailed(key.to_string()))
        }
    }

    #[test]
    fn test_toggle_with_failing_store_still_flips() {
        let mut ctl = ThemeController::load(ReadOnly, true);
        assert!(ctl.toggle().is_err());
        assert_eq!(ctl.theme(), Theme::Light);
    }

    #[test]
    fn test_follow_system_until_a_choice_is_saved() {
        let mut ctl = ThemeController::load(MemoryStore::new(), false);
        assert!(ctl.follow_system(true));
        assert_eq!(ctl.theme(), Theme::Dark);
        assert!(!ctl.follow_system(true));

        ctl.toggle().unwrap();
        assert_eq!(ctl.theme(), Theme::Light);
        assert!(!ctl.follow_system(true));
        assert_eq!(ctl.theme(), Theme::Light);
    }

    #[test]
    fn test_cord_cancel_never_fires() {
        let mut cord = PullCord::new();
        cord.grab();
        cord.drag(70.0);
        assert!(cord.armed());

        cord.cancel();
        assert!(!cord.is_dragging());
        assert_eq!(cord.stretch(), 0.0);
        assert!(!cord.release());
    }

    #[test]
    fn test_cord_fires_past_threshold() {
        let mut cord = PullCord::new();
        cord.grab();
        cord.drag(55.0);
        assert!(cord.armed());
        assert!(cord.release());
        assert_eq!(cord.stretch(), 0.0);
    }

    #[test]
    fn test_cord_short_pull_does_nothing() {
        let mut cord = PullCord::new();
        cord.grab();
        cord.drag(20.0);
        assert!(!cord.release());
    }

    #[test]
    fn test_cord_clamps_and_ignores_drag_without_grab() {
        let mut cord = PullCord::new();
        cord.drag(60.0);
        assert_eq!(cord.stretch(), 0.0);

        cord.grab();
        cord.drag(500.0);
        assert_eq!(cord.stretch(), CORD_MAX_PX);
        cord.drag(-30.0);
        assert_eq!(cord.stretch(), 0.0);
    }
}
