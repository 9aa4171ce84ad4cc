//! UI components built with Leptos.
//!
//! - [`gallery`] - Horizontally scrolling project strip
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`mascot`] - Animated figures carrying the "About" sign
//! - [`menu`] - Hamburger button and slide-in navigation panel
//! - [`preview`] - Phone mockup embedding live project sites
//! - [`theme`] - Theme switch, pull cord, and theme context

pub mod gallery;
pub mod icons;
pub mod mascot;
pub mod menu;
pub mod preview;
pub mod theme;

pub use gallery::ProjectGallery;
pub use mascot::AboutMascot;
pub use menu::MobileMenu;
pub use preview::DevicePreview;
pub use theme::{PullCord, ThemeState, ThemeToggle};
