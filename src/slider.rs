use crate::core::{Point, Rect};

/// Maps a pointer position to a before/after slider percentage.
///
/// Simple clamped linear mapping from pointer X within the container to
/// [0, 100]. Degenerate containers (zero or negative width) and non-finite
/// pointer positions fall back to the centered resting position.
pub fn slider_position(pointer: Point, bounds: Rect) -> f64 {
    let width = bounds.width();
    if !width.is_finite() || width <= 0.0 || !pointer.x.is_finite() {
        return 50.0;
    }
    (((pointer.x - bounds.x0) / width) * 100.0).clamp(0.0, 100.0)
}
