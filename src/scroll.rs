use crate::core::{Progress, Rect};

/// Geometry of the pinned scroll section, in document-space pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollGeometry {
    /// Scroll offset at which the section becomes sticky.
    pub start_offset: f64,
    /// Total scrollable travel through the section.
    pub travel: f64,
}

impl ScrollGeometry {
    pub fn new(start_offset: f64, travel: f64) -> Self {
        Self {
            start_offset,
            travel,
        }
    }

    /// Geometry for a section pinned from "start start" to "end end": the
    /// section begins tracking when its top reaches the viewport top, and
    /// travel is whatever of the section's height extends past the viewport.
    pub fn from_bounds(bounds: Rect, viewport_height: f64) -> Self {
        Self {
            start_offset: bounds.y0,
            travel: bounds.height() - viewport_height,
        }
    }
}

/// Maps raw scroll offsets to normalized [`Progress`].
///
/// Holds no animation state: the same offset and geometry always produce the
/// same progress. The last raw offset is remembered only so that a resize can
/// re-derive progress immediately instead of waiting for the next scroll tick.
#[derive(Clone, Copy, Debug)]
pub struct ScrollTracker {
    geometry: ScrollGeometry,
    last_offset: f64,
}

impl ScrollTracker {
    pub fn new(geometry: ScrollGeometry) -> Self {
        Self {
            geometry,
            last_offset: 0.0,
        }
    }

    pub fn geometry(&self) -> ScrollGeometry {
        self.geometry
    }

    /// Current progress at the last observed offset.
    pub fn progress(&self) -> Progress {
        self.progress_at(self.last_offset)
    }

    pub fn on_scroll(&mut self, offset: f64) -> Progress {
        self.last_offset = offset;
        self.progress_at(offset)
    }

    /// Swaps in new geometry and recomputes from the last raw offset, so
    /// stale pre-resize ratios never survive into the next frame.
    pub fn on_resize(&mut self, geometry: ScrollGeometry) -> Progress {
        self.geometry = geometry;
        self.progress_at(self.last_offset)
    }

    fn progress_at(&self, offset: f64) -> Progress {
        // Content shorter than the viewport has nothing to scroll through;
        // default to 0 rather than divide by zero.
        if !self.geometry.travel.is_finite() || self.geometry.travel <= 0.0 {
            return Progress::START;
        }
        Progress::new((offset - self.geometry.start_offset) / self.geometry.travel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_map_linearly_through_the_section() {
        let mut tracker = ScrollTracker::new(ScrollGeometry::new(200.0, 1000.0));
        assert_eq!(tracker.on_scroll(200.0).value(), 0.0);
        assert_eq!(tracker.on_scroll(700.0).value(), 0.5);
        assert_eq!(tracker.on_scroll(1200.0).value(), 1.0);
    }

    #[test]
    fn out_of_bounds_offsets_clamp_to_the_domain() {
        let mut tracker = ScrollTracker::new(ScrollGeometry::new(200.0, 1000.0));
        assert_eq!(tracker.on_scroll(-5000.0).value(), 0.0);
        assert_eq!(tracker.on_scroll(99_999.0).value(), 1.0);
    }

    #[test]
    fn zero_or_negative_travel_defaults_to_zero_progress() {
        let mut tracker = ScrollTracker::new(ScrollGeometry::new(0.0, 0.0));
        assert_eq!(tracker.on_scroll(300.0).value(), 0.0);

        let mut tracker = ScrollTracker::new(ScrollGeometry::new(0.0, -250.0));
        assert_eq!(tracker.on_scroll(300.0).value(), 0.0);
    }

    #[test]
    fn resize_recomputes_without_a_scroll_event() {
        // Fixed raw offset, travel halves mid-scroll: progress doubles
        // immediately.
        let mut tracker = ScrollTracker::new(ScrollGeometry::new(0.0, 1000.0));
        assert_eq!(tracker.on_scroll(250.0).value(), 0.25);
        assert_eq!(tracker.on_resize(ScrollGeometry::new(0.0, 500.0)).value(), 0.5);
        assert_eq!(tracker.progress().value(), 0.5);
    }

    #[test]
    fn recomputation_is_idempotent() {
        let mut tracker = ScrollTracker::new(ScrollGeometry::new(100.0, 800.0));
        let a = tracker.on_scroll(420.0);
        let b = tracker.on_scroll(420.0);
        assert_eq!(a, b);
        assert_eq!(tracker.progress(), b);
    }

    #[test]
    fn from_bounds_uses_height_beyond_the_viewport() {
        // A 250vh section in a 800px viewport scrolls through 1200px.
        let bounds = Rect::new(0.0, 3000.0, 1280.0, 3000.0 + 2000.0);
        let g = ScrollGeometry::from_bounds(bounds, 800.0);
        assert_eq!(g.start_offset, 3000.0);
        assert_eq!(g.travel, 1200.0);
    }
}
