//! Input tracking: turns raw pointer/touch samples into evasion decisions.

use crate::geometry::ZoneLayout;
use crate::responsive::ResponsiveProfile;
use glam::DVec2;

/// Where a sample came from. Touch samples that trigger an evasion must
/// also suppress the browser's default scrolling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch,
    /// Pointer-down landing on the negative control itself.
    PressOnControl,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub source: PointerSource,
    /// Client (viewport) coordinates.
    pub point: DVec2,
}

impl PointerSample {
    pub fn mouse(x: f64, y: f64) -> Self {
        Self {
            source: PointerSource::Mouse,
            point: DVec2::new(x, y),
        }
    }

    pub fn touch(x: f64, y: f64) -> Self {
        Self {
            source: PointerSource::Touch,
            point: DVec2::new(x, y),
        }
    }

    pub fn press(x: f64, y: f64) -> Self {
        Self {
            source: PointerSource::PressOnControl,
            point: DVec2::new(x, y),
        }
    }
}

/// True when the sample should push the control away. A press on the control
/// always counts, regardless of distance.
#[inline]
pub fn should_evade(sample: &PointerSample, layout: &ZoneLayout, profile: &ResponsiveProfile) -> bool {
    match sample.source {
        PointerSource::PressOnControl => true,
        PointerSource::Mouse | PointerSource::Touch => {
            layout.distance_to_control(sample.point) < profile.threshold
        }
    }
}
