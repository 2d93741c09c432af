// Host-side tests for parallax offsets.

use ember_core::{LayerMotion, ParallaxConfig, PointerState, Unit};

fn grid() -> impl Iterator<Item = PointerState> {
    (0..=10).flat_map(|i| {
        (0..=10).map(move |j| PointerState {
            x: i as f32 / 10.0,
            y: j as f32 / 10.0,
        })
    })
}

#[test]
fn centered_pointer_means_no_offset() {
    let frame = ParallaxConfig::default().frame(PointerState::CENTER);
    for offset in [frame.fog_a, frame.fog_b, frame.logo] {
        assert_eq!(offset.x, 0.0);
        assert_eq!(offset.y, 0.0);
        assert_eq!(offset.rotate_deg, 0.0);
    }
}

#[test]
fn offsets_are_linear_in_pointer_delta() {
    let motion = LayerMotion::px(8.0, 2.0);
    let half = motion.offset(PointerState { x: 0.75, y: 0.25 });
    let full = motion.offset(PointerState { x: 1.0, y: 0.0 });
    assert!((full.x - 2.0 * half.x).abs() < 1e-5);
    assert!((full.y - 2.0 * half.y).abs() < 1e-5);
    assert!((full.rotate_deg - 2.0 * half.rotate_deg).abs() < 1e-5);

    // Opposite sides mirror each other.
    let left = motion.offset(PointerState { x: 0.0, y: 0.5 });
    assert!((left.x + full.x).abs() < 1e-5);
}

#[test]
fn offsets_are_bounded_by_layer_gain() {
    let cfg = ParallaxConfig::default();
    for p in grid() {
        let frame = cfg.frame(p);
        for (offset, motion) in [
            (frame.fog_a, cfg.fog_a),
            (frame.fog_b, cfg.fog_b),
            (frame.logo, cfg.logo),
        ] {
            let bound = motion.max_translate() + 1e-5;
            assert!(offset.x.abs() <= bound, "{:?} at {:?}", offset, p);
            assert!(offset.y.abs() <= bound, "{:?} at {:?}", offset, p);
            assert!(offset.rotate_deg.abs() <= motion.rotate_deg.abs() + 1e-5);
        }
    }
}

#[test]
fn layers_keep_their_units() {
    let frame = ParallaxConfig::default().frame(PointerState { x: 0.2, y: 0.9 });
    assert_eq!(frame.fog_a.unit, Unit::Percent);
    assert_eq!(frame.fog_b.unit, Unit::Percent);
    assert_eq!(frame.logo.unit, Unit::Px);
}

#[test]
fn css_transform_formatting() {
    let fog = LayerMotion::percent(2.0).offset(PointerState { x: 1.0, y: 1.0 });
    assert_eq!(fog.to_css(), "translate3d(2.000%, 2.000%, 0)");

    let logo = LayerMotion::px(1.2, 0.6).offset(PointerState { x: 0.0, y: 1.0 });
    assert_eq!(
        logo.to_css(),
        "translate3d(-1.200px, 1.200px, 0) rotate(-0.600deg)"
    );
}
