// Host-side tests for scene presets and validation.

use ember_core::{ConfigError, Modes, Preset, SceneConfig};

#[test]
fn every_preset_validates() {
    for preset in [Preset::Ember, Preset::Storm, Preset::Mist] {
        let cfg = SceneConfig::preset(preset);
        assert_eq!(cfg.validate(), Ok(()), "{:?}", preset);
    }
}

#[test]
fn default_is_ember() {
    assert_eq!(SceneConfig::default(), SceneConfig::ember());
    assert_eq!(SceneConfig::default().modes, Modes::default());
    assert!(SceneConfig::storm().modes.storm);
    assert!(SceneConfig::mist().modes.mist);
}

#[test]
fn preset_names_parse_loosely() {
    assert_eq!("ember".parse::<Preset>(), Ok(Preset::Ember));
    assert_eq!(" Storm ".parse::<Preset>(), Ok(Preset::Storm));
    assert_eq!("MIST".parse::<Preset>(), Ok(Preset::Mist));
    assert_eq!(
        "neon".parse::<Preset>(),
        Err(ConfigError::UnknownPreset("neon".into()))
    );
}

#[test]
fn floor_above_cap_is_rejected() {
    let mut cfg = SceneConfig::default();
    cfg.mist.floor = 10;
    cfg.mist.cap = 5;
    assert_eq!(
        cfg.validate(),
        Err(ConfigError::FloorAboveCap {
            what: "mist",
            floor: 10,
            cap: 5
        })
    );
}

#[test]
fn zero_cap_is_rejected() {
    let mut cfg = SceneConfig::default();
    cfg.blobs.floor = 0;
    cfg.blobs.cap = 0;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::NotPositive { field: "blobs", .. })
    ));
}

#[test]
fn probabilities_must_be_unit_range() {
    let mut cfg = SceneConfig::default();
    cfg.lightning.probability = 1.5;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::OutOfUnitRange {
            field: "lightning.probability",
            ..
        })
    ));
}

#[test]
fn inverted_spark_life_is_rejected() {
    let mut cfg = SceneConfig::storm();
    cfg.sparks.life_min_ms = 900.0;
    cfg.sparks.life_max_ms = 100.0;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::InvertedRange { .. })
    ));
}

#[test]
fn non_positive_sizes_are_rejected() {
    let mut cfg = SceneConfig::default();
    cfg.blobs.area_per_blob = 0.0;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::NotPositive {
            field: "blobs.area_per_blob",
            ..
        })
    ));

    let mut cfg = SceneConfig::default();
    cfg.mist.link_distance = f32::NAN;
    assert!(cfg.validate().is_err());

    let mut cfg = SceneConfig::default();
    cfg.lightning.segments = 0;
    assert!(cfg.validate().is_err());
}

#[test]
fn errors_render_readably() {
    let err = ConfigError::FloorAboveCap {
        what: "blobs",
        floor: 30,
        cap: 24,
    };
    assert_eq!(err.to_string(), "blobs: floor 30 exceeds cap 24");
    assert_eq!(
        ConfigError::UnknownPreset("neon".into()).to_string(),
        "unknown preset `neon`"
    );
}

#[test]
fn non_finite_motion_parameters_are_rejected() {
    let cases: [(&str, fn(&mut SceneConfig)); 8] = [
        ("blobs.speed", |c| c.blobs.speed = f32::NAN),
        ("blobs.drift", |c| c.blobs.drift = f32::NAN),
        ("blobs.drift_rate", |c| c.blobs.drift_rate = f32::INFINITY),
        ("blobs.pulse_rate", |c| c.blobs.pulse_rate = f32::NAN),
        ("sparks.speed", |c| c.sparks.speed = f32::NAN),
        ("mist.speed", |c| c.mist.speed = -1.0),
        ("lightning.cooldown_ms", |c| c.lightning.cooldown_ms = f64::NAN),
        ("lightning.jitter_px", |c| c.lightning.jitter_px = f32::NAN),
    ];
    for (name, break_it) in cases {
        let mut cfg = SceneConfig::storm();
        break_it(&mut cfg);
        match cfg.validate() {
            Err(ConfigError::NegativeOrNonFinite { field, .. }) => assert_eq!(field, name),
            other => panic!("{name}: expected rejection, got {:?}", other),
        }
    }
}

#[test]
fn nan_spark_lifetime_is_rejected() {
    let mut cfg = SceneConfig::storm();
    cfg.sparks.life_max_ms = f64::NAN;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::InvertedRange { .. })
    ));

    let mut cfg = SceneConfig::storm();
    cfg.sparks.life_max_ms = f64::INFINITY;
    assert!(cfg.validate().is_err());
}

#[test]
fn nan_drift_never_reaches_a_scene() {
    let mut cfg = SceneConfig::default();
    cfg.blobs.drift = f32::NAN;
    assert!(ember_core::Scene::seeded(cfg, 1, false).is_err());
}
