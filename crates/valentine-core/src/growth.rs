use crate::constants::{BASELINE_TRANSFORM, BASE_SCALE};
use crate::responsive::ResponsiveProfile;

/// Scale factor of the affirmative control. Starts at 1.0 and only grows
/// until [`Growth::reset`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Growth {
    scale: f64,
}

impl Default for Growth {
    fn default() -> Self {
        Self { scale: BASE_SCALE }
    }
}

impl Growth {
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Add the profile's increment, capped at its max scale. Returns the new factor.
    pub fn grow(&mut self, profile: &ResponsiveProfile) -> f64 {
        self.scale = (self.scale + profile.growth_increment).min(profile.max_scale);
        self.scale
    }

    pub fn reset(&mut self) {
        self.scale = BASE_SCALE;
    }

    /// CSS transform for the control, keeping the vertical-centering baseline.
    pub fn transform_css(&self) -> String {
        scale_transform(self.scale)
    }
}

#[inline]
pub fn scale_transform(scale: f64) -> String {
    format!("{} scale({})", BASELINE_TRANSFORM, scale)
}
