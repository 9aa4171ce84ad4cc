//! Framework-free state for the showcase widgets.
//!
//! Everything here is plain data and deterministic state machines, so it
//! runs (and is tested) natively. The Leptos site drives these types from
//! timers and DOM events.
//!
//! - [`mascot`] - Phase sequencer for the "About" mascot
//! - [`gallery`] - Paging arithmetic for the horizontal project strip
//! - [`preview`] - Load/timeout state for the device-preview frame
//! - [`menu`] - Open/closed state for the slide-in navigation panel
//! - [`theme`] - Light/dark preference and the pull-cord gesture
//! - [`audio`] - Tone recipes and the playback gate
//! - [`content`] - Display records loaded from JSON

pub mod audio;
pub mod content;
pub mod error;
pub mod gallery;
pub mod mascot;
pub mod menu;
pub mod preview;
pub mod theme;

pub use content::{NavLink, Project, Showcase};
pub use error::{AudioError, ContentError, StorageError};
