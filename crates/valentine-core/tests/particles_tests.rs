// Host-side tests for the confetti particle field.

use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use valentine_core::constants::CONFETTI_COLORS;
use valentine_core::*;

#[test]
fn emit_places_particles_at_scaled_origin() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut field = ParticleField::new();
    let spec = BurstSpec::finale(50);
    field.emit(&spec, DVec2::new(1000.0, 800.0), 1.0, &mut rng);
    assert_eq!(field.len(), 50);
    for p in field.iter() {
        assert!(p.pos.abs_diff_eq(DVec2::new(500.0, 440.0), 1e-9));
        assert!(CONFETTI_COLORS.contains(&p.color));
        assert_eq!(p.opacity(), 1.0);
    }
}

#[test]
fn particles_launch_upward_then_fade_out() {
    let mut rng = StdRng::seed_from_u64(12);
    let mut field = ParticleField::new();
    let spec = BurstSpec::small(20, DVec2::new(0.5, 0.3));
    let start_y = 0.3 * 600.0;
    field.emit(&spec, DVec2::new(800.0, 600.0), 1.0, &mut rng);

    field.step(&mut rng);
    // 90 degree spread around straight up keeps every launch above the horizon
    assert!(field.iter().all(|p| p.pos.y < start_y));
    let first: Vec<f64> = field.iter().map(|p| p.opacity()).collect();
    field.step(&mut rng);
    let second: Vec<f64> = field.iter().map(|p| p.opacity()).collect();
    assert!(first.iter().zip(&second).all(|(a, b)| b < a));
}

#[test]
fn particles_expire_after_their_ticks() {
    let mut rng = StdRng::seed_from_u64(13);
    let mut field = ParticleField::new();
    let spec = BurstSpec {
        particle_count: 10,
        spread_deg: 45.0,
        start_velocity: 30.0,
        ticks: 5,
        origin: DVec2::new(0.5, 0.5),
    };
    field.emit(&spec, DVec2::new(100.0, 100.0), 1.0, &mut rng);
    for _ in 0..4 {
        field.step(&mut rng);
        assert_eq!(field.len(), 10);
    }
    field.step(&mut rng);
    assert!(field.is_empty());
}

#[test]
fn quad_corners_are_finite() {
    let mut rng = StdRng::seed_from_u64(14);
    let mut field = ParticleField::new();
    field.emit(&BurstSpec::finale(30), DVec2::new(1920.0, 1080.0), 2.0, &mut rng);
    for _ in 0..10 {
        field.step(&mut rng);
    }
    for p in field.iter() {
        assert!(p.quad().iter().all(|c| c.is_finite()));
    }
}
