//! Responsive policy: a single pure lookup from viewport signals to tuning.
//!
//! Nothing is memoized. Callers re-read the viewport and call [`profile`] on
//! every event so the result always tracks the latest window size.

use crate::constants::*;

/// Viewport signals polled from the window at call time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub device_pixel_ratio: f64,
    /// Touch capability or a coarse primary pointer.
    pub touch: bool,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio: 1.0,
            touch: false,
        }
    }

    pub fn with_touch(mut self, touch: bool) -> Self {
        self.touch = touch;
        self
    }

    pub fn with_device_pixel_ratio(mut self, dpr: f64) -> Self {
        self.device_pixel_ratio = dpr;
        self
    }

    /// Backing-store size for a full-viewport canvas. The ratio is floored at 1.
    pub fn backing_size(&self) -> (u32, u32) {
        let dpr = self.device_pixel_ratio.max(1.0);
        let w = (self.width * dpr).floor().max(0.0) as u32;
        let h = (self.height * dpr).floor().max(0.0) as u32;
        (w, h)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidthBucket {
    Narrow,
    Medium,
    Wide,
}

impl WidthBucket {
    pub fn for_width(width: f64) -> Self {
        if width <= NARROW_MAX_WIDTH {
            WidthBucket::Narrow
        } else if width <= MEDIUM_MAX_WIDTH {
            WidthBucket::Medium
        } else {
            WidthBucket::Wide
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

impl DeviceClass {
    pub fn of(viewport: &Viewport) -> Self {
        if viewport.touch || viewport.width <= MOBILE_MAX_WIDTH {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }
}

/// Everything the controllers need to know about the current viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResponsiveProfile {
    pub bucket: WidthBucket,
    pub device: DeviceClass,
    /// Pointer distance below which the negative control evades.
    pub threshold: f64,
    /// Displacement applied per evasion.
    pub push_speed: f64,
    pub growth_increment: f64,
    pub max_scale: f64,
    pub clamp_padding: f64,
    /// Particles per small burst of the frame loop.
    pub burst_particles: u32,
    /// Particles in the centered finale.
    pub finale_particles: u32,
}

pub fn profile(viewport: &Viewport) -> ResponsiveProfile {
    let bucket = WidthBucket::for_width(viewport.width);
    let device = DeviceClass::of(viewport);

    let (threshold, push_speed, growth_increment) = match bucket {
        WidthBucket::Narrow => (NARROW_THRESHOLD, NARROW_PUSH_SPEED, NARROW_GROWTH_INCREMENT),
        WidthBucket::Medium => (MEDIUM_THRESHOLD, MEDIUM_PUSH_SPEED, MEDIUM_GROWTH_INCREMENT),
        WidthBucket::Wide => (WIDE_THRESHOLD, WIDE_PUSH_SPEED, WIDE_GROWTH_INCREMENT),
    };

    let (max_scale, clamp_padding, burst_particles, finale_particles) = match device {
        DeviceClass::Mobile => (
            MOBILE_MAX_SCALE,
            MOBILE_CLAMP_PADDING,
            MOBILE_BURST_PARTICLES,
            MOBILE_FINALE_PARTICLES,
        ),
        DeviceClass::Desktop => (
            DESKTOP_MAX_SCALE,
            DESKTOP_CLAMP_PADDING,
            DESKTOP_BURST_PARTICLES,
            DESKTOP_FINALE_PARTICLES,
        ),
    };

    ResponsiveProfile {
        bucket,
        device,
        threshold,
        push_speed,
        growth_increment,
        max_scale,
        clamp_padding,
        burst_particles,
        finale_particles,
    }
}
