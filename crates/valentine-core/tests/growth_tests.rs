// Host-side tests for the affirmative control's growth.

use proptest::prelude::*;
use valentine_core::*;

#[test]
fn starts_at_one_with_baseline_transform() {
    let g = Growth::default();
    assert_eq!(g.scale(), 1.0);
    assert_eq!(g.transform_css(), "translateY(-50%) scale(1)");
}

#[test]
fn grows_by_increment_per_call() {
    let p = profile(&Viewport::new(1000.0, 800.0));
    let mut g = Growth::default();
    for n in 1..=5 {
        let s = g.grow(&p);
        assert!((s - (1.0 + n as f64 * 0.1)).abs() < 1e-9, "after {n} evasions got {s}");
    }
}

#[test]
fn idempotent_at_cap() {
    let p = profile(&Viewport::new(1000.0, 800.0));
    let mut g = Growth::default();
    for _ in 0..50 {
        g.grow(&p);
    }
    assert_eq!(g.scale(), 2.2);
    g.grow(&p);
    g.grow(&p);
    assert_eq!(g.scale(), 2.2);
    assert_eq!(g.transform_css(), "translateY(-50%) scale(2.2)");
}

#[test]
fn reset_returns_to_one() {
    let p = profile(&Viewport::new(320.0, 640.0).with_touch(true));
    let mut g = Growth::default();
    g.grow(&p);
    g.grow(&p);
    assert!(g.scale() > 1.0);
    g.reset();
    assert_eq!(g.scale(), 1.0);
}

proptest! {
    #[test]
    fn scale_after_n_evasions_matches_closed_form(
        n in 0usize..80,
        width in 200.0f64..1600.0,
        touch in any::<bool>(),
    ) {
        let p = profile(&Viewport::new(width, 700.0).with_touch(touch));
        let mut g = Growth::default();
        for _ in 0..n {
            g.grow(&p);
        }
        let expected = p.max_scale.min(1.0 + n as f64 * p.growth_increment);
        prop_assert!((g.scale() - expected).abs() < 1e-9);
        prop_assert!(g.scale() >= 1.0 && g.scale() <= p.max_scale);
    }
}
