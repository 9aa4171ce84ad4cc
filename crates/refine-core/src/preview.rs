//! Load state for the device-preview frame.
//!
//! The frame embeds one project page at a time. Switching project arms a
//! fresh load; every load ends as either loaded or failed, and a timeout
//! guarantees the spinner never stays up forever. The iframe loads lazily,
//! so a timeout can fire before the page even starts; a `load` for the
//! current generation still recovers from [`Failure::TimedOut`]. Load signals
//! carry the generation they were armed for, so a late `load` event from a
//! previous project cannot resolve the current one.

/// Milliseconds before a pending load is given up on.
pub const LOAD_TIMEOUT_MS: u32 = 8000;

/// Sandbox flags applied to the embedded page.
pub const SANDBOX: &str = "allow-scripts allow-same-origin allow-popups allow-forms";

/// Why the preview could not be shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Failure {
    /// The iframe reported an error.
    LoadError,
    /// No load signal arrived within [`LOAD_TIMEOUT_MS`].
    TimedOut,
}

/// Visible state of the screen area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStatus {
    /// No projects to show.
    Empty,
    Loading,
    Loaded,
    Failed(Failure),
}

impl FrameStatus {
    #[inline]
    pub fn is_loading(self) -> bool {
        self == FrameStatus::Loading
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewFrame {
    count: usize,
    active: usize,
    status: FrameStatus,
    generation: u64,
    fullscreen: bool,
}

impl PreviewFrame {
    /// A frame over `count` projects, loading the first one.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            active: 0,
            status: if count == 0 {
                FrameStatus::Empty
            } else {
                FrameStatus::Loading
            },
            generation: 0,
            fullscreen: false,
        }
    }

    #[inline]
    pub fn active(&self) -> usize {
        self.active
    }

    #[inline]
    pub fn status(&self) -> FrameStatus {
        self.status
    }

    /// Identifies the pending load; pass it back with load signals.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Switch to project `index`.
    ///
    /// Returns the new load generation, or `None` when `index` is already
    /// active or out of range.
    pub fn select(&mut self, index: usize) -> Option<u64> {
        if index == self.active || index >= self.count {
            return None;
        }
        self.active = index;
        self.status = FrameStatus::Loading;
        self.generation += 1;
        Some(self.generation)
    }

    /// The iframe fired `load`.
    ///
    /// Also lifts a timed-out frame of the same generation to `Loaded`.
    pub fn loaded(&mut self, generation: u64) -> bool {
        if generation == self.generation
            && self.status == FrameStatus::Failed(Failure::TimedOut)
        {
            self.status = FrameStatus::Loaded;
            return true;
        }
        self.resolve(generation, FrameStatus::Loaded)
    }

    /// The iframe fired `error`.
    pub fn failed(&mut self, generation: u64) -> bool {
        self.resolve(generation, FrameStatus::Failed(Failure::LoadError))
    }

    /// The load timeout for `generation` elapsed.
    pub fn timed_out(&mut self, generation: u64) -> bool {
        self.resolve(generation, FrameStatus::Failed(Failure::TimedOut))
    }

    fn resolve(&mut self, generation: u64, status: FrameStatus) -> bool {
        if generation != self.generation || !self.status.is_loading() {
            return false;
        }
        self.status = status;
        true
    }

    /// The embedded page is remounted in the fullscreen modal, so a fresh
    /// load is armed. Returns the new generation, or `None` if already open
    /// or there is nothing to show.
    pub fn open_fullscreen(&mut self) -> Option<u64> {
        if self.fullscreen || self.count == 0 {
            return None;
        }
        self.fullscreen = true;
        Some(self.rearm())
    }

    /// Leave fullscreen, remounting the inline frame.
    pub fn close_fullscreen(&mut self) -> Option<u64> {
        if !self.fullscreen {
            return None;
        }
        self.fullscreen = false;
        Some(self.rearm())
    }

    fn rearm(&mut self) -> u64 {
        self.status = FrameStatus::Loading;
        self.generation += 1;
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_loading_first_project() {
        let frame = PreviewFrame::new(3);
        assert_eq!(frame.active(), 0);
        assert_eq!(frame.status(), FrameStatus::Loading);
        assert!(!frame.is_fullscreen());
    }

    #[test]
    fn test_empty_frame() {
        let mut frame = PreviewFrame::new(0);
        assert_eq!(frame.status(), FrameStatus::Empty);
        assert_eq!(frame.select(0), None);
        assert_eq!(frame.open_fullscreen(), None);
        assert!(!frame.timed_out(0));
    }

    #[test]
    fn test_select_same_or_out_of_range_ignored() {
        let mut frame = PreviewFrame::new(2);
        assert_eq!(frame.select(0), None);
        assert_eq!(frame.select(5), None);
        assert_eq!(frame.generation(), 0);
    }

    #[test]
    fn test_load_then_late_timeout() {
        let mut frame = PreviewFrame::new(2);
        assert!(frame.loaded(0));
        assert!(!frame.timed_out(0));
        assert_eq!(frame.status(), FrameStatus::Loaded);
    }

    #[test]
    fn test_error_state() {
        let mut frame = PreviewFrame::new(2);
        assert!(frame.failed(0));
        assert_eq!(frame.status(), FrameStatus::Failed(Failure::LoadError));
    }

    #[test]
    fn test_stale_signal_after_switch() {
        let mut frame = PreviewFrame::new(3);
        let generation = frame.select(2).unwrap();
        assert!(!frame.loaded(0));
        assert!(frame.status().is_loading());

        assert!(frame.timed_out(generation));
        assert_eq!(frame.status(), FrameStatus::Failed(Failure::TimedOut));
    }

    #[test]
    fn test_late_load_after_timeout_recovers() {
        let mut frame = PreviewFrame::new(2);
        assert!(frame.timed_out(0));
        assert!(frame.loaded(0));
        assert_eq!(frame.status(), FrameStatus::Loaded);
    }

    #[test]
    fn test_timeout_is_not_overwritten_by_error_or_old_load() {
        let mut frame = PreviewFrame::new(3);
        assert!(frame.timed_out(0));
        assert!(!frame.failed(0));
        assert_eq!(frame.status(), FrameStatus::Failed(Failure::TimedOut));

        let generation = frame.select(1).unwrap();
        assert!(frame.timed_out(generation));
        assert!(!frame.loaded(0));
        assert_eq!(frame.status(), FrameStatus::Failed(Failure::TimedOut));
    }

    #[test]
    fn test_fullscreen_rearms_load() {
        let mut frame = PreviewFrame::new(1);
        frame.loaded(0);
        let generation = frame.open_fullscreen().unwrap();
        assert!(frame.is_fullscreen());
        assert!(frame.status().is_loading());
        assert_eq!(frame.open_fullscreen(), None);

        frame.loaded(generation);
        assert!(frame.close_fullscreen().is_some());
        assert!(!frame.is_fullscreen());
        assert_eq!(frame.close_fullscreen(), None);
    }
}
