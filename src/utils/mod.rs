//! Browser adapters for the widgets.
//!
//! Provides:
//! - [`dom`] - Window/document access, theme attribute, [`dom::ScrollLock`]
//! - [`storage`] - [`storage::BrowserStore`] over localStorage/sessionStorage
//! - [`audio`] - Web Audio playback of procedural effects
//! - [`logging`] - `tracing` subscriber writing to the console

pub mod audio;
pub mod dom;
pub mod logging;
pub mod storage;
