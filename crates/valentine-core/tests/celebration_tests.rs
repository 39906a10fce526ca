// Host-side tests for the celebration schedule, driven by manual ticks.

use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use valentine_core::*;

const FRAME_MS: f64 = 16.0;

fn surface() -> DVec2 {
    DVec2::new(1280.0, 720.0)
}

fn desktop_profile() -> ResponsiveProfile {
    profile(&Viewport::new(1280.0, 720.0))
}

#[test]
fn schedule_is_one_finale_and_bounded_loop() {
    let c = Celebration::new(&desktop_profile());
    let s = c.schedule();
    assert_eq!(s.finale_delay_ms, 300.0);
    assert_eq!(s.burst_loop_ms, 1600.0);
    assert!(c.burst_loop_active(0.0));
    assert!(c.burst_loop_active(1599.9));
    assert!(!c.burst_loop_active(1600.0));
}

#[test]
fn activation_frame_draws_first_burst() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut c = Celebration::new(&desktop_profile());
    let spec = c.tick(0.0, surface(), 1.0, &mut rng);
    assert_eq!(spec.map(|s| s.particle_count), Some(12));
    assert_eq!(c.field().len(), 12);
    assert!(!c.is_finished(0.0));
}

#[test]
fn small_bursts_only_inside_loop_window() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut c = Celebration::new(&desktop_profile());
    let mut bursts = 0;
    let mut frame = 0u32;
    loop {
        let t = frame as f64 * FRAME_MS;
        if t >= 300.0 && !c.finale_fired() {
            assert!(c.fire_finale(surface(), 1.0, &mut rng).is_some());
        }
        match c.tick(t, surface(), 1.0, &mut rng) {
            Some(spec) => {
                assert!(t < 1600.0, "burst emitted at {t}ms");
                assert_eq!(spec.particle_count, 12);
                assert!(spec.origin.y >= 0.0 && spec.origin.y < 0.3);
                assert!(spec.origin.x >= 0.0 && spec.origin.x < 1.0);
                bursts += 1;
            }
            None => assert!(t >= 1600.0),
        }
        if c.is_finished(t) {
            break;
        }
        frame += 1;
        assert!(frame < 2000, "celebration never finished");
    }
    assert_eq!(bursts, 100); // frames at 0, 16, ..., 1584
    assert!(c.field().is_empty());
}

#[test]
fn finale_fires_exactly_once() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut c = Celebration::new(&desktop_profile());
    let spec = c.fire_finale(surface(), 2.0, &mut rng).expect("first finale");
    assert_eq!(spec.particle_count, 300);
    assert_eq!(spec.origin, DVec2::new(0.5, 0.55));
    assert_eq!(c.field().len(), 300);
    assert!(c.fire_finale(surface(), 2.0, &mut rng).is_none());
    assert_eq!(c.field().len(), 300);
}

#[test]
fn mobile_density_is_reduced() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut c = Celebration::new(&profile(&Viewport::new(390.0, 844.0).with_touch(true)));
    let spec = c.tick(0.0, surface(), 3.0, &mut rng).expect("first frame bursts");
    assert_eq!(spec.particle_count, 8);
    assert_eq!(c.fire_finale(surface(), 3.0, &mut rng).map(|s| s.particle_count), Some(200));
}

#[test]
fn not_finished_until_finale_fired() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut c = Celebration::new(&desktop_profile());
    for frame in 0..400 {
        c.tick(frame as f64 * FRAME_MS, surface(), 1.0, &mut rng);
    }
    assert!(c.field().is_empty());
    assert!(!c.is_finished(400.0 * FRAME_MS));
    c.fire_finale(surface(), 1.0, &mut rng);
    assert!(!c.is_finished(401.0 * FRAME_MS));
}
