// Host-side tests for pointer normalization and the move throttle.

use ember_core::pointer::normalize;
use ember_core::{PointerState, PointerTracker};
use glam::Vec2;

#[test]
fn normalized_pointer_stays_in_unit_square() {
    let viewport = Vec2::new(1280.0, 720.0);
    let samples = [-500.0, -1.0, 0.0, 1.0, 360.0, 640.0, 719.0, 1280.0, 5000.0];
    for &x in &samples {
        for &y in &samples {
            let p = normalize(Some(Vec2::new(x, y)), viewport);
            assert!((0.0..=1.0).contains(&p.x), "x out of range for {x}: {}", p.x);
            assert!((0.0..=1.0).contains(&p.y), "y out of range for {y}: {}", p.y);
        }
    }
}

#[test]
fn normalize_maps_viewport_corners() {
    let viewport = Vec2::new(800.0, 600.0);
    assert_eq!(
        normalize(Some(Vec2::ZERO), viewport),
        PointerState { x: 0.0, y: 0.0 }
    );
    assert_eq!(
        normalize(Some(viewport), viewport),
        PointerState { x: 1.0, y: 1.0 }
    );
    assert_eq!(
        normalize(Some(Vec2::new(400.0, 150.0)), viewport),
        PointerState { x: 0.5, y: 0.25 }
    );
}

#[test]
fn missing_or_degenerate_input_falls_back_to_center() {
    let viewport = Vec2::new(800.0, 600.0);
    assert_eq!(normalize(None, viewport), PointerState::CENTER);
    assert_eq!(
        normalize(Some(Vec2::new(100.0, 100.0)), Vec2::ZERO),
        PointerState::CENTER
    );

    let p = normalize(Some(Vec2::new(f32::NAN, 300.0)), viewport);
    assert_eq!(p.x, 0.5);
    assert_eq!(p.y, 0.5);

    let p = normalize(Some(Vec2::new(200.0, f32::INFINITY)), viewport);
    assert_eq!(p.x, 0.25);
    assert_eq!(p.y, 0.5);
}

#[test]
fn signed_is_zero_at_center_and_unit_at_edges() {
    assert_eq!(PointerState::CENTER.signed(), Vec2::ZERO);
    assert_eq!(PointerState { x: 1.0, y: 0.0 }.signed(), Vec2::new(1.0, -1.0));
    assert_eq!(PointerState { x: 0.0, y: 1.0 }.signed(), Vec2::new(-1.0, 1.0));
}

#[test]
fn tracker_starts_centered() {
    let t = PointerTracker::default();
    assert_eq!(t.state(), PointerState::CENTER);
}

#[test]
fn tracker_drops_moves_inside_the_interval() {
    let viewport = Vec2::new(100.0, 100.0);
    let mut t = PointerTracker::new(16.0);

    assert!(t.on_move(0.0, Some(Vec2::new(10.0, 10.0)), viewport));
    assert_eq!(t.state(), PointerState { x: 0.1, y: 0.1 });

    // Too soon: dropped, not queued.
    assert!(!t.on_move(10.0, Some(Vec2::new(90.0, 90.0)), viewport));
    assert_eq!(t.state(), PointerState { x: 0.1, y: 0.1 });

    // The drop does not push the window forward.
    assert!(t.on_move(16.0, Some(Vec2::new(50.0, 50.0)), viewport));
    assert_eq!(t.state(), PointerState::CENTER);
}

#[test]
fn tracker_without_interval_accepts_everything() {
    let viewport = Vec2::new(100.0, 100.0);
    let mut t = PointerTracker::new(0.0);
    for i in 0..10 {
        assert!(t.on_move(1.0, Some(Vec2::new(i as f32 * 10.0, 0.0)), viewport));
    }
    assert_eq!(t.state().x, 0.9);
}
