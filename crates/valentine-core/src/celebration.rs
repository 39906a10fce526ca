//! Celebration effect: a rapid-fire burst loop plus one delayed finale.
//!
//! The loop is a pure function of elapsed time since activation, so any
//! scheduler can drive it: `requestAnimationFrame` in the browser, a plain
//! `for` loop in tests.

use crate::constants::{BURST_LOOP_MS, FINALE_DELAY_MS};
use crate::particles::{BurstSpec, ParticleField};
use crate::responsive::ResponsiveProfile;
use glam::DVec2;
use rand::Rng;

/// Timers the celebration asks its host to arm.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CelebrationSchedule {
    /// Small bursts are emitted on frames strictly before this.
    pub burst_loop_ms: f64,
    /// One-shot finale delay, measured from activation.
    pub finale_delay_ms: f64,
}

impl Default for CelebrationSchedule {
    fn default() -> Self {
        Self {
            burst_loop_ms: BURST_LOOP_MS,
            finale_delay_ms: FINALE_DELAY_MS,
        }
    }
}

pub struct Celebration {
    schedule: CelebrationSchedule,
    burst_particles: u32,
    finale_particles: u32,
    finale_fired: bool,
    field: ParticleField,
}

impl Celebration {
    /// Particle densities are taken from the profile at activation time.
    pub fn new(profile: &ResponsiveProfile) -> Self {
        Self {
            schedule: CelebrationSchedule::default(),
            burst_particles: profile.burst_particles,
            finale_particles: profile.finale_particles,
            finale_fired: false,
            field: ParticleField::new(),
        }
    }

    #[inline]
    pub fn schedule(&self) -> CelebrationSchedule {
        self.schedule
    }

    #[inline]
    pub fn burst_loop_active(&self, elapsed_ms: f64) -> bool {
        elapsed_ms < self.schedule.burst_loop_ms
    }

    /// Small burst due on a frame at `elapsed_ms`, if the loop is still open.
    pub fn frame_burst<R: Rng + ?Sized>(&self, elapsed_ms: f64, rng: &mut R) -> Option<BurstSpec> {
        self.burst_loop_active(elapsed_ms)
            .then(|| BurstSpec::small(self.burst_particles, BurstSpec::random_top_origin(rng)))
    }

    /// One animation frame: emit the due small burst, then advance the field.
    /// Returns the burst that was emitted, if any.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        elapsed_ms: f64,
        surface: DVec2,
        scalar: f64,
        rng: &mut R,
    ) -> Option<BurstSpec> {
        let burst = self.frame_burst(elapsed_ms, rng);
        if let Some(spec) = &burst {
            self.field.emit(spec, surface, scalar, rng);
        }
        self.field.step(rng);
        burst
    }

    /// Emit the centered finale. Only the first call has any effect.
    pub fn fire_finale<R: Rng + ?Sized>(
        &mut self,
        surface: DVec2,
        scalar: f64,
        rng: &mut R,
    ) -> Option<BurstSpec> {
        if self.finale_fired {
            return None;
        }
        self.finale_fired = true;
        let spec = BurstSpec::finale(self.finale_particles);
        self.field.emit(&spec, surface, scalar, rng);
        log::info!("[celebrate] finale with {} particles", spec.particle_count);
        Some(spec)
    }

    #[inline]
    pub fn finale_fired(&self) -> bool {
        self.finale_fired
    }

    /// Nothing left to emit or animate.
    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        !self.burst_loop_active(elapsed_ms) && self.finale_fired && self.field.is_empty()
    }

    #[inline]
    pub fn field(&self) -> &ParticleField {
        &self.field
    }
}
