//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuCheck as Check, LuChevronLeft as ChevronLeft, LuChevronRight as ChevronRight,
        LuExternalLink as ExternalLink, LuInfo as Warning, LuMaximize2 as Fullscreen,
        LuMoon as Moon, LuRotateCcw as Replay, LuSun as Sun, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowCounterclockwise as Replay, BsArrowsFullscreen as Fullscreen,
        BsBoxArrowUpRight as ExternalLink, BsCheckLg as Check, BsChevronLeft as ChevronLeft,
        BsChevronRight as ChevronRight, BsExclamationCircle as Warning, BsMoonFill as Moon,
        BsSunFill as Sun, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(CLOSE, Close);
themed_icon!(CHECK, Check);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(FULLSCREEN, Fullscreen);
themed_icon!(REPLAY, Replay);
themed_icon!(WARNING, Warning);
themed_icon!(SUN, Sun);
themed_icon!(MOON, Moon);
