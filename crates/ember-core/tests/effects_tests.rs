// Host-side tests for the storm, mist and grain layers in isolation.

use ember_core::blobs::{wrap_axis, BlobField};
use ember_core::grain::{grain_count, scatter};
use ember_core::lightning::{jagged_bolt, Lightning};
use ember_core::mist::{link_alpha, MistField};
use ember_core::sparks::Sparks;
use ember_core::{GrainConfig, SceneConfig};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn wrap_axis_reenters_from_the_opposite_edge() {
    assert_eq!(wrap_axis(-11.0, 10.0, 100.0), 110.0);
    assert_eq!(wrap_axis(111.0, 10.0, 100.0), -10.0);
    // Inside the margin nothing moves.
    assert_eq!(wrap_axis(-10.0, 10.0, 100.0), -10.0);
    assert_eq!(wrap_axis(105.0, 10.0, 100.0), 105.0);
}

#[test]
fn blob_field_is_reproducible_with_a_seed() {
    let cfg = SceneConfig::default().blobs;
    let size = Vec2::new(1920.0, 1080.0);
    let a = BlobField::new(size, &cfg, &mut StdRng::seed_from_u64(42));
    let b = BlobField::new(size, &cfg, &mut StdRng::seed_from_u64(42));
    assert_eq!(a.blobs(), b.blobs());
    for blob in a.blobs() {
        assert!(blob.radius >= cfg.min_radius * 0.6 - 1e-3);
        let alpha = blob.alpha_at(1.5, &cfg);
        assert!(alpha >= cfg.base_alpha - 1e-6);
        assert!(alpha <= cfg.base_alpha + cfg.pulse_alpha + 1e-6);
    }
}

#[test]
fn expired_sparks_are_removed_before_drawing() {
    let mut cfg = SceneConfig::storm().sparks;
    cfg.spawn_probability = 1.0;
    let mut rng = StdRng::seed_from_u64(5);
    let size = Vec2::new(800.0, 600.0);
    let mut sparks = Sparks::default();

    for _ in 0..10 {
        assert!(sparks.maybe_spawn(0.0, size, &cfg, &mut rng));
    }
    assert_eq!(sparks.len(), 10);
    for s in sparks.iter() {
        assert!(s.life_ms >= cfg.life_min_ms && s.life_ms <= cfg.life_max_ms);
        assert!(s.pos.y >= size.y * 0.7 - 1e-3);
        assert!(s.vel.y < 0.0, "sparks rise");
    }

    sparks.step(cfg.life_min_ms - 1.0, 0.016);
    assert_eq!(sparks.len(), 10);
    sparks.step(cfg.life_max_ms, 0.016);
    assert!(sparks.is_empty());
}

#[test]
fn spark_spawning_respects_the_live_cap() {
    let mut cfg = SceneConfig::storm().sparks;
    cfg.spawn_probability = 1.0;
    cfg.max_live = 3;
    let mut rng = StdRng::seed_from_u64(6);
    let mut sparks = Sparks::default();
    let spawned = (0..10)
        .filter(|_| sparks.maybe_spawn(0.0, Vec2::new(100.0, 100.0), &cfg, &mut rng))
        .count();
    assert_eq!(spawned, 3);
    assert_eq!(sparks.len(), 3);
}

#[test]
fn spark_alpha_fades_linearly() {
    let mut cfg = SceneConfig::storm().sparks;
    cfg.spawn_probability = 1.0;
    let mut sparks = Sparks::default();
    sparks.maybe_spawn(100.0, Vec2::new(100.0, 100.0), &cfg, &mut StdRng::seed_from_u64(1));
    let s = sparks.iter().next().unwrap();
    assert_eq!(s.alpha(100.0), 1.0);
    assert!((s.alpha(100.0 + s.life_ms / 2.0) - 0.5).abs() < 1e-4);
    assert_eq!(s.alpha(100.0 + s.life_ms), 0.0);
}

#[test]
fn lightning_envelope_decays_to_zero() {
    let cfg = SceneConfig::storm().lightning;
    let mut rng = StdRng::seed_from_u64(8);
    let mut l = Lightning::default();
    assert_eq!(l.envelope(0.0, &cfg), 0.0);

    l.strike(1000.0, Vec2::new(800.0, 600.0), &cfg, &mut rng);
    assert!((2..=4).contains(&l.bolts().len()));
    assert_eq!(l.envelope(1000.0, &cfg), 1.0);
    let half = l.envelope(1000.0 + cfg.flash_ms / 2.0, &cfg);
    assert!((half - 0.5).abs() < 1e-4);
    assert_eq!(l.envelope(1000.0 + cfg.flash_ms, &cfg), 0.0);

    l.expire(1000.0 + cfg.flash_ms / 2.0, &cfg);
    assert!(l.is_active());
    l.expire(1000.0 + cfg.flash_ms, &cfg);
    assert!(!l.is_active());
    assert!(l.bolts().is_empty());
}

#[test]
fn lightning_cooldown_blocks_back_to_back_strikes() {
    let mut cfg = SceneConfig::storm().lightning;
    cfg.probability = 1.0;
    let size = Vec2::new(800.0, 600.0);
    let mut rng = StdRng::seed_from_u64(9);
    let mut l = Lightning::default();

    assert!(l.maybe_strike(0.0, size, &cfg, &mut rng));
    assert!(l.in_cooldown(1.0, &cfg));
    assert!(!l.maybe_strike(cfg.cooldown_ms - 1.0, size, &cfg, &mut rng));
    assert!(l.maybe_strike(cfg.cooldown_ms, size, &cfg, &mut rng));

    cfg.probability = 0.0;
    let mut quiet = Lightning::default();
    for i in 0..100 {
        assert!(!quiet.maybe_strike(i as f64 * 10_000.0, size, &cfg, &mut rng));
    }
}

#[test]
fn bolts_walk_down_with_bounded_jitter() {
    let cfg = SceneConfig::storm().lightning;
    let mut rng = StdRng::seed_from_u64(10);
    let bolt = jagged_bolt(400.0, 270.0, &cfg, &mut rng);
    assert_eq!(bolt.points.len(), cfg.segments + 1);
    assert_eq!(bolt.points[0], Vec2::new(400.0, 0.0));
    let step = 270.0 / cfg.segments as f32;
    for pair in bolt.points.windows(2) {
        let d = pair[1] - pair[0];
        assert!(d.x.abs() <= cfg.jitter_px + 1e-3);
        assert!((d.y - step).abs() < 1e-3);
    }
    assert!((bolt.points[cfg.segments].y - 270.0).abs() < 1e-2);
}

#[test]
fn grain_count_follows_density() {
    assert_eq!(grain_count(Vec2::new(10.0, 10.0), 0.5), 50);
    assert_eq!(grain_count(Vec2::new(40.0, 10.0), 0.25), 100);
    assert_eq!(grain_count(Vec2::new(0.0, 500.0), 0.5), 0);
    assert_eq!(grain_count(Vec2::new(-10.0, 500.0), 0.5), 0);
}

#[test]
fn grain_specks_land_on_canvas() {
    let cfg = GrainConfig {
        density: 0.125,
        max_size: 2.0,
        alpha: 0.02,
    };
    let size = Vec2::new(64.0, 32.0);
    let mut rng = StdRng::seed_from_u64(12);
    let specks: Vec<_> = scatter(size, &cfg, &mut rng).collect();
    assert_eq!(specks.len(), 256);
    for s in &specks {
        assert!(s.pos.x >= 0.0 && s.pos.x <= size.x);
        assert!(s.pos.y >= 0.0 && s.pos.y <= size.y);
        assert!(s.size >= 0.0 && s.size <= cfg.max_size);
    }
}

#[test]
fn mist_links_fade_with_distance() {
    let cfg = SceneConfig::mist().mist;
    assert_eq!(link_alpha(0.0, &cfg), cfg.max_alpha);
    assert!((link_alpha(cfg.link_distance / 2.0, &cfg) - cfg.max_alpha / 2.0).abs() < 1e-6);
    assert_eq!(link_alpha(cfg.link_distance, &cfg), 0.0);
    assert_eq!(link_alpha(cfg.link_distance * 3.0, &cfg), 0.0);
}

#[test]
fn mist_links_only_join_nearby_nodes() {
    let cfg = SceneConfig::mist().mist;
    let mut rng = StdRng::seed_from_u64(14);
    let mut field = MistField::new(Vec2::new(800.0, 600.0), &cfg, &mut rng);
    field.step(0.5);
    let n = field.nodes().len();
    assert!(n >= cfg.floor && n <= cfg.cap);
    let mut links = 0;
    for link in field.links(&cfg) {
        assert!(link.from.distance(link.to) < cfg.link_distance);
        assert!(link.alpha > 0.0 && link.alpha <= cfg.max_alpha);
        links += 1;
    }
    assert!(links <= n * (n - 1) / 2);
    for node in field.nodes() {
        assert!(node.pos.x >= 0.0 && node.pos.x <= 800.0);
        assert!(node.pos.y >= 0.0 && node.pos.y <= 600.0);
    }
}

#[test]
fn glow_leans_toward_the_pointer() {
    use ember_core::glow::backdrop_glow;
    use ember_core::PointerState;

    let cfg = SceneConfig::default().glow;
    let size = Vec2::new(1000.0, 800.0);
    let center = backdrop_glow(size, PointerState::CENTER, &cfg);
    let right = backdrop_glow(size, PointerState { x: 1.0, y: 0.5 }, &cfg);
    let top = backdrop_glow(size, PointerState { x: 0.5, y: 0.0 }, &cfg);
    assert!(right.center.x > center.center.x);
    assert!(top.center.y < center.center.y);
    assert_eq!(center.radius, right.radius);
    assert_eq!(center.stops.len(), 3);
    assert_eq!(center.stops[2].color.alpha, 0.0);
    assert!(center.stops[0].color.alpha >= center.stops[1].color.alpha);
}
