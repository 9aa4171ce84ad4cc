//! Paging arithmetic for the horizontal project strip.

/// Offsets within this distance of an end count as "at the end".
///
/// Browsers report fractional `scrollLeft` on zoomed pages.
pub const END_TOLERANCE_PX: f64 = 1.0;

/// Scroll position and dimensions of a horizontally scrolling strip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GalleryScroll {
    offset: f64,
    step: f64,
    content_width: f64,
    viewport_width: f64,
}

impl GalleryScroll {
    /// A strip paging by `step` px (one card width).
    pub fn new(step: f64) -> Self {
        Self {
            offset: 0.0,
            step: step.max(0.0),
            content_width: 0.0,
            viewport_width: 0.0,
        }
    }

    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Furthest reachable offset.
    pub fn max_offset(&self) -> f64 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    /// Update dimensions (mount, resize, images loaded).
    ///
    /// The current offset is re-clamped, since a wider viewport can pull
    /// the end closer.
    pub fn measure(&mut self, content_width: f64, viewport_width: f64) {
        self.content_width = content_width.max(0.0);
        self.viewport_width = viewport_width.max(0.0);
        self.offset = self.clamp(self.offset);
    }

    /// Record an offset reported by a scroll event.
    pub fn sync(&mut self, offset: f64) {
        self.offset = self.clamp(offset);
    }

    /// Page forward by one card. Returns the target offset.
    pub fn next(&mut self) -> f64 {
        self.offset = self.clamp(self.offset + self.step);
        self.offset
    }

    /// Page back by one card. Returns the target offset.
    pub fn prev(&mut self) -> f64 {
        self.offset = self.clamp(self.offset - self.step);
        self.offset
    }

    pub fn can_prev(&self) -> bool {
        self.offset > END_TOLERANCE_PX
    }

    pub fn can_next(&self) -> bool {
        self.offset < self.max_offset() - END_TOLERANCE_PX
    }

    fn clamp(&self, offset: f64) -> f64 {
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_offset())
    }
}

impl Default for GalleryScroll {
    fn default() -> Self {
        Self::new(400.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(cards: usize) -> GalleryScroll {
        let mut g = GalleryScroll::new(400.0);
        g.measure(cards as f64 * 400.0, 1000.0);
        g
    }

    #[test]
    fn test_initial_state() {
        let g = strip(6);
        assert_eq!(g.offset(), 0.0);
        assert_eq!(g.max_offset(), 1400.0);
        assert!(!g.can_prev());
        assert!(g.can_next());
    }

    #[test]
    fn test_next_clamps_to_end() {
        let mut g = strip(6);
        assert_eq!(g.next(), 400.0);
        assert_eq!(g.next(), 800.0);
        assert_eq!(g.next(), 1200.0);
        assert_eq!(g.next(), 1400.0);
        assert_eq!(g.next(), 1400.0);
        assert!(!g.can_next());
        assert!(g.can_prev());
    }

    #[test]
    fn test_prev_clamps_to_start() {
        let mut g = strip(6);
        g.sync(250.0);
        assert_eq!(g.prev(), 0.0);
        assert_eq!(g.prev(), 0.0);
    }

    #[test]
    fn test_content_narrower_than_viewport() {
        let mut g = strip(2);
        assert_eq!(g.max_offset(), 0.0);
        assert_eq!(g.next(), 0.0);
        assert!(!g.can_next());
        assert!(!g.can_prev());
    }

    #[test]
    fn test_resize_reclamps_offset() {
        let mut g = strip(6);
        g.sync(1400.0);
        g.measure(2400.0, 1600.0);
        assert_eq!(g.offset(), 800.0);
    }

    #[test]
    fn test_fractional_end_counts_as_end() {
        let mut g = strip(6);
        g.sync(1399.5);
        assert!(!g.can_next());
        g.sync(0.5);
        assert!(!g.can_prev());
    }
}
