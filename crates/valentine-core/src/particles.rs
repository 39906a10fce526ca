//! Confetti particle field.
//!
//! Coordinates are backing-store pixels of the full-viewport surface (y grows
//! downward). One call to [`ParticleField::step`] advances every particle by
//! one animation frame.

use crate::constants::*;
use glam::DVec2;
use rand::Rng;
use std::f64::consts::PI;

/// Parameters of a single burst.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BurstSpec {
    pub particle_count: u32,
    /// Full cone width around the launch angle, in degrees.
    pub spread_deg: f64,
    pub start_velocity: f64,
    /// Lifetime in frames.
    pub ticks: u32,
    /// Launch point as a fraction of the surface size.
    pub origin: DVec2,
}

impl BurstSpec {
    /// Rapid-fire burst from a top-of-screen origin.
    pub fn small(particle_count: u32, origin: DVec2) -> Self {
        Self {
            particle_count,
            spread_deg: BURST_SPREAD_DEG,
            start_velocity: BURST_START_VELOCITY,
            ticks: BURST_TICKS,
            origin,
        }
    }

    /// Large centered burst.
    pub fn finale(particle_count: u32) -> Self {
        Self {
            particle_count,
            spread_deg: FINALE_SPREAD_DEG,
            start_velocity: FINALE_START_VELOCITY,
            ticks: FINALE_TICKS,
            origin: DVec2::from_array(FINALE_ORIGIN),
        }
    }

    /// Random origin anywhere across the top band of the screen.
    pub fn random_top_origin<R: Rng + ?Sized>(rng: &mut R) -> DVec2 {
        DVec2::new(rng.gen::<f64>(), rng.gen::<f64>() * BURST_ORIGIN_Y_MAX)
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: DVec2,
    pub color: &'static str,
    angle: f64,
    velocity: f64,
    scalar: f64,
    wobble: f64,
    wobble_speed: f64,
    wobble_pos: DVec2,
    tilt_angle: f64,
    tilt: DVec2,
    jitter: f64,
    tick: u32,
    total_ticks: u32,
}

impl Particle {
    fn spawn<R: Rng + ?Sized>(spec: &BurstSpec, at: DVec2, scalar: f64, rng: &mut R) -> Self {
        let rad_angle = LAUNCH_ANGLE_DEG.to_radians();
        let rad_spread = spec.spread_deg.to_radians();
        let angle = -rad_angle + (0.5 * rad_spread - rng.gen::<f64>() * rad_spread);
        let velocity = spec.start_velocity * 0.5 + rng.gen::<f64>() * spec.start_velocity;
        let color = CONFETTI_COLORS[rng.gen_range(0..CONFETTI_COLORS.len())];
        Self {
            pos: at,
            color,
            angle,
            velocity,
            scalar,
            wobble: rng.gen::<f64>() * 10.0,
            wobble_speed: (rng.gen::<f64>() * 0.1 + 0.05).min(PARTICLE_WOBBLE_SPEED_MAX),
            wobble_pos: at,
            tilt_angle: (rng.gen::<f64>() * 0.5 + 0.25) * PI,
            tilt: DVec2::ZERO,
            jitter: 0.0,
            tick: 0,
            total_ticks: spec.ticks.max(1),
        }
    }

    /// Advance one frame. Returns false once the particle has expired.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        self.pos.x += self.angle.cos() * self.velocity;
        self.pos.y += self.angle.sin() * self.velocity + PARTICLE_GRAVITY;
        self.velocity *= PARTICLE_DECAY;

        self.wobble += self.wobble_speed;
        let r = PARTICLE_WOBBLE_RADIUS * self.scalar;
        self.wobble_pos = self.pos + DVec2::new(self.wobble.cos(), self.wobble.sin()) * r;

        self.tilt_angle += PARTICLE_TILT_STEP;
        self.tilt = DVec2::new(self.tilt_angle.cos(), self.tilt_angle.sin());
        self.jitter = rng.gen::<f64>() + 2.0;

        self.tick += 1;
        self.is_alive()
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.tick < self.total_ticks
    }

    /// Linear fade over the particle's lifetime.
    #[inline]
    pub fn opacity(&self) -> f64 {
        (1.0 - self.tick as f64 / self.total_ticks as f64).clamp(0.0, 1.0)
    }

    /// Corners of the tilted paper quad to fill.
    pub fn quad(&self) -> [DVec2; 4] {
        let lean = self.tilt * self.jitter * self.scalar;
        [
            self.pos,
            DVec2::new(self.wobble_pos.x, self.pos.y + lean.y),
            self.wobble_pos + lean,
            DVec2::new(self.pos.x + lean.x, self.wobble_pos.y),
        ]
    }
}

/// All live confetti on the surface.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Launch `spec.particle_count` particles from `spec.origin` scaled to `surface`.
    pub fn emit<R: Rng + ?Sized>(&mut self, spec: &BurstSpec, surface: DVec2, scalar: f64, rng: &mut R) {
        let at = spec.origin * surface;
        self.particles.reserve(spec.particle_count as usize);
        for _ in 0..spec.particle_count {
            self.particles.push(Particle::spawn(spec, at, scalar, rng));
        }
    }

    /// Advance every particle one frame and drop the expired ones.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.particles.retain_mut(|p| p.step(rng));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
