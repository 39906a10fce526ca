//! Layout rectangles in client (viewport) coordinates.
//!
//! These mirror what `getBoundingClientRect` reports, so the web frontend can
//! measure an element and hand the result straight to the controllers.

use glam::DVec2;

/// Axis-aligned rectangle: top-left corner plus size, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: DVec2,
    pub size: DVec2,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            origin: DVec2::new(left, top),
            size: DVec2::new(width, height),
        }
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        self.origin + self.size * 0.5
    }

    /// Position of `self` relative to the top-left corner of `outer`.
    #[inline]
    pub fn offset_within(&self, outer: &Rect) -> DVec2 {
        self.origin - outer.origin
    }
}

/// Snapshot of the two rectangles every evasion decision depends on.
///
/// Measured fresh for each event; nothing here is cached between calls.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ZoneLayout {
    /// Interaction zone the negative control is confined to.
    pub zone: Rect,
    /// Current box of the negative control.
    pub control: Rect,
}

impl ZoneLayout {
    /// Euclidean distance from a client-space point to the control's center.
    #[inline]
    pub fn distance_to_control(&self, point: DVec2) -> f64 {
        self.control.center().distance(point)
    }
}
