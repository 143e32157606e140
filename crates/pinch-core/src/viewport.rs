use glam::Vec2;

// Conversions between absolute viewport pixels and 0..1 relative coordinates,
// plus the offset needed to centre an element on a point.

/// Absolute position -> fraction of the viewport. `None` for a degenerate viewport.
#[inline]
pub fn relative_point(absolute: Vec2, viewport: Vec2) -> Option<Vec2> {
    if viewport.x > 0.0 && viewport.y > 0.0 {
        Some(absolute / viewport)
    } else {
        None
    }
}

#[inline]
pub fn absolute_point(relative: Vec2, viewport: Vec2) -> Vec2 {
    relative * viewport
}

/// Top-left translation that places an element of `size` with its middle on `center`.
#[inline]
pub fn offset_from_middle(center: Vec2, size: Vec2) -> Vec2 {
    center - size * 0.5
}

#[inline]
pub fn viewport_center(viewport: Vec2) -> Vec2 {
    viewport * 0.5
}
