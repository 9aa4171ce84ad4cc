//! Error types for the widgets.
//!
//! None of these are fatal. Callers either log and carry on (audio,
//! storage) or turn them into a visible fallback (content).
//!
//! - [`StorageError`] - Browser storage reads/writes
//! - [`AudioError`] - Web Audio graph construction
//! - [`ContentError`] - Display records embedded in the site

use thiserror::Error;

/// Preference storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The storage area is not available (private mode, no window).
    #[error("storage not available")]
    Unavailable,
    /// The write was rejected (quota, security).
    #[error("failed to write `{0}` to storage")]
    WriteFailed(String),
}

/// Audio synthesis errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AudioError {
    /// No `AudioContext` constructor in this browser.
    #[error("Web Audio is not supported")]
    Unsupported,
    /// A node could not be created or connected.
    #[error("audio graph error: {0}")]
    Graph(String),
}

/// Errors in the embedded showcase document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    /// The document is not valid JSON for [`crate::Showcase`].
    #[error("invalid showcase document: {0}")]
    Parse(String),
    /// A device-preview entry has nothing to embed.
    #[error("preview project `{0}` has no url")]
    MissingUrl(String),
}
