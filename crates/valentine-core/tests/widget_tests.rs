// Host-side tests for the widget state machine and its dispatch paths.

use glam::DVec2;
use valentine_core::*;

fn layout() -> ZoneLayout {
    ZoneLayout {
        zone: Rect::new(0.0, 0.0, 600.0, 300.0),
        control: Rect::new(400.0, 130.0, 80.0, 40.0),
    }
}

fn desktop() -> Viewport {
    Viewport::new(1000.0, 800.0)
}

fn near_pointer() -> WidgetEvent {
    WidgetEvent::Pointer(PointerSample::mouse(400.0, 150.0))
}

#[test]
fn near_pointer_moves_control_and_grows_once() {
    let mut w = Widget::new();
    let fx = w.dispatch(near_pointer(), &layout(), &desktop());
    assert_eq!(
        fx.as_slice(),
        &[
            Effect::PlaceNegative(DVec2::new(515.0, 130.0)),
            Effect::ScaleAffirmative(1.1),
        ]
    );
    assert_eq!(w.negative().offset(), Some(DVec2::new(515.0, 130.0)));
    assert!(w.negative().has_moved());
    assert_eq!(w.phase(), Phase::Idle);
}

#[test]
fn far_pointer_is_ignored() {
    let mut w = Widget::new();
    let fx = w.dispatch(
        WidgetEvent::Pointer(PointerSample::mouse(0.0, 0.0)),
        &layout(),
        &desktop(),
    );
    assert!(fx.is_empty());
    assert_eq!(w.scale(), 1.0);
    assert!(!w.negative().has_moved());
}

#[test]
fn growth_counts_every_evasion_even_when_clamped() {
    let mut w = Widget::new();
    // same measured layout each time, so every push clamps to the right edge
    for _ in 0..3 {
        w.dispatch(near_pointer(), &layout(), &desktop());
    }
    assert!((w.scale() - 1.3).abs() < 1e-9);
}

#[test]
fn touch_evasion_suppresses_scrolling() {
    let mut w = Widget::new();
    let touch = WidgetEvent::Pointer(PointerSample::touch(400.0, 150.0));
    let fx = w.dispatch(touch, &layout(), &desktop().with_touch(true));
    assert_eq!(fx.last(), Some(&Effect::SuppressDefault));

    let far = WidgetEvent::Pointer(PointerSample::touch(0.0, 0.0));
    let fx = w.dispatch(far, &layout(), &desktop().with_touch(true));
    assert!(fx.is_empty());
}

#[test]
fn press_on_control_always_evades_and_cancels_default() {
    let mut w = Widget::new();
    let press = WidgetEvent::Pointer(PointerSample::press(440.0, 150.0));
    let fx = w.dispatch(press, &layout(), &desktop());
    assert_eq!(fx[0], Effect::SuppressDefault);
    assert!(matches!(fx[1], Effect::PlaceNegative(_)));
    assert!(matches!(fx[2], Effect::ScaleAffirmative(_)));
}

#[test]
fn activation_enters_terminal_celebration() {
    let mut w = Widget::new();
    let fx = w.dispatch(WidgetEvent::Activate, &layout(), &desktop());
    assert_eq!(
        fx.as_slice(),
        &[
            Effect::HideZone,
            Effect::HideHint,
            Effect::ShowResult,
            Effect::SizeSurface,
            Effect::StartCelebration(CelebrationSchedule {
                burst_loop_ms: 1600.0,
                finale_delay_ms: 300.0,
            }),
        ]
    );
    assert_eq!(w.phase(), Phase::Celebrating);

    // nothing is processed afterwards, and activation does not repeat
    assert!(w.dispatch(near_pointer(), &layout(), &desktop()).is_empty());
    assert!(w.dispatch(WidgetEvent::Activate, &layout(), &desktop()).is_empty());
    assert!(w.dispatch(WidgetEvent::ResizeSettled, &layout(), &desktop()).is_empty());
    assert_eq!(w.phase(), Phase::Celebrating);
}

#[test]
fn settled_resize_resets_growth_and_position() {
    let mut w = Widget::new();
    w.dispatch(near_pointer(), &layout(), &desktop());
    w.dispatch(near_pointer(), &layout(), &desktop());

    let ticket = w.arm_resize();
    assert_eq!(w.resize_quiet_ms(), 250.0);
    assert!(w.settle_resize(ticket));
    let fx = w.dispatch(WidgetEvent::ResizeSettled, &layout(), &desktop());
    assert_eq!(
        fx.as_slice(),
        &[Effect::ScaleAffirmative(1.0), Effect::RestoreNegative]
    );
    assert_eq!(w.scale(), 1.0);
    assert_eq!(w.negative().offset(), None);
}

#[test]
fn collapsed_zone_keeps_control_position_on_reset() {
    let mut w = Widget::new();
    w.dispatch(near_pointer(), &layout(), &desktop());
    let collapsed = ZoneLayout {
        zone: Rect::new(0.0, 0.0, 0.0, 0.0),
        control: layout().control,
    };
    let fx = w.dispatch(WidgetEvent::ResizeSettled, &collapsed, &desktop());
    assert_eq!(fx.as_slice(), &[Effect::ScaleAffirmative(1.0)]);
    assert!(w.negative().has_moved());
}

#[test]
fn burst_of_resizes_settles_once() {
    let mut w = Widget::new();
    let tickets: Vec<_> = (0..5).map(|_| w.arm_resize()).collect();
    let settled: Vec<bool> = tickets.iter().map(|t| w.settle_resize(*t)).collect();
    assert_eq!(settled, vec![false, false, false, false, true]);
    assert!(!w.settle_resize(tickets[4]));
}
