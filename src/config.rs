//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Page content is loaded at compile time using `include_str!`.

use refine_core::Showcase;

// =============================================================================
// Content (loaded at compile time)
// =============================================================================

/// Projects and navigation links rendered by the widgets.
pub const SHOWCASE_JSON: &str = include_str!("../assets/data/showcase.json");

/// Parse [`SHOWCASE_JSON`].
///
/// A broken document renders an empty page rather than no page.
pub fn showcase() -> Showcase {
    match Showcase::from_json(SHOWCASE_JSON) {
        Ok(showcase) => {
            tracing::info!(
                gallery = showcase.gallery.len(),
                previews = showcase.previews.len(),
                "showcase loaded"
            );
            showcase
        }
        Err(e) => {
            tracing::warn!(error = %e, "showcase unavailable, rendering empty");
            Showcase::default()
        }
    }
}

// =============================================================================
// Site Metadata
// =============================================================================

pub const SITE_NAME: &str = "Refine & Deploy";

pub const SITE_TAGLINE: &str = "Web Design & Development";

// =============================================================================
// Logging
// =============================================================================

/// Most verbose level forwarded to the browser console.
pub const LOG_LEVEL: tracing::Level = if cfg!(debug_assertions) {
    tracing::Level::DEBUG
} else {
    tracing::Level::INFO
};

// =============================================================================
// Storage Keys
// =============================================================================

pub mod storage {
    /// sessionStorage flag set once the mascot intro has played.
    pub const INTRO_PLAYED_KEY: &str = "mascot_intro_played";
}

// =============================================================================
// Widget Timing
// =============================================================================

/// Mascot sequencer settings.
pub mod mascot {
    /// Period of the sequencer tick interval (ms).
    pub const TICK_MS: u32 = 40;
    pub const ABOUT_HREF: &str = "/about";
    pub const ABOUT_LABEL: &str = "More About Us";
}

/// Horizontal project strip.
pub mod gallery {
    /// One card width per prev/next press.
    pub const STEP_PX: f64 = 400.0;
    /// Fade-in delay between consecutive cards (ms).
    pub const STAGGER_MS: usize = 100;
}

/// Slide-in navigation panel.
pub mod menu {
    /// Slide-in delay between consecutive links (ms).
    pub const LINK_STAGGER_MS: usize = 50;
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_showcase_parses() {
        let showcase = Showcase::from_json(SHOWCASE_JSON).unwrap();
        assert!(!showcase.gallery.is_empty());
        assert!(!showcase.previews.is_empty());
        assert!(showcase.previews.iter().all(|p| p.url.is_some()));
        assert_eq!(showcase.cta.href, "/contact");
    }

    #[test]
    fn test_gallery_pages_one_card_width() {
        use refine_core::gallery::GalleryScroll;

        // 400px cards, 32px gaps
        let cards = Showcase::from_json(SHOWCASE_JSON).unwrap().gallery.len() as f64;
        let mut scroll = GalleryScroll::new(gallery::STEP_PX);
        scroll.measure(cards * 400.0 + (cards - 1.0) * 32.0, 1000.0);
        assert_eq!(scroll.next(), 400.0);
    }
}
