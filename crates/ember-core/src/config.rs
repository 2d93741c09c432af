//! Scene configuration.
//!
//! The landing page shipped several near-identical variants of the backdrop
//! that differ only in tuning constants. Each variant is a preset here; none
//! is treated as canonical, `SceneConfig::default()` is simply the `ember`
//! preset.

use crate::error::ConfigError;
use crate::parallax::{LayerMotion, ParallaxConfig};
use crate::painter::Rgb;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    Ember,
    Storm,
    Mist,
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ember" => Ok(Preset::Ember),
            "storm" => Ok(Preset::Storm),
            "mist" => Ok(Preset::Mist),
            other => Err(ConfigError::UnknownPreset(other.to_string())),
        }
    }
}

/// Optional layers that keybinds can switch on and off at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Modes {
    /// Sparks and lightning.
    pub storm: bool,
    pub mist: bool,
    pub grain: bool,
}

impl Default for Modes {
    fn default() -> Self {
        Self {
            storm: false,
            mist: false,
            grain: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GlowConfig {
    pub color: Rgb,
    pub core_alpha: f32,
    pub mid_alpha: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BlobConfig {
    pub color: Rgb,
    /// Canvas area (px²) per blob; the `k` in `max(floor, min(area / k, cap))`.
    pub area_per_blob: f32,
    pub floor: usize,
    pub cap: usize,
    pub min_radius: f32,
    /// Base radius as a fraction of `min(W, H)`.
    pub radius_fraction: f32,
    /// Linear speed in px/s.
    pub speed: f32,
    /// Sinusoidal drift amplitude in px/s.
    pub drift: f32,
    /// Drift angular frequency in rad/s.
    pub drift_rate: f32,
    pub base_alpha: f32,
    pub pulse_alpha: f32,
    /// Alpha pulse angular frequency in rad/s.
    pub pulse_rate: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SparkConfig {
    pub color: Rgb,
    pub spawn_probability: f32,
    pub max_live: usize,
    pub life_min_ms: f64,
    pub life_max_ms: f64,
    /// Rise speed in px/s.
    pub speed: f32,
    pub size: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LightningConfig {
    pub probability: f32,
    pub cooldown_ms: f64,
    pub flash_ms: f64,
    pub flash_alpha: f32,
    pub bolt_alpha: f32,
    pub jitter_px: f32,
    pub segments: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MistConfig {
    pub color: Rgb,
    pub area_per_node: f32,
    pub floor: usize,
    pub cap: usize,
    pub speed: f32,
    pub link_distance: f32,
    pub max_alpha: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GrainConfig {
    /// Specks per px² of canvas.
    pub density: f32,
    pub max_size: f32,
    pub alpha: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub modes: Modes,
    pub glow: GlowConfig,
    pub blobs: BlobConfig,
    pub sparks: SparkConfig,
    pub lightning: LightningConfig,
    pub mist: MistConfig,
    pub grain: GrainConfig,
    pub parallax: ParallaxConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::ember()
    }
}

impl SceneConfig {
    pub fn preset(preset: Preset) -> Self {
        match preset {
            Preset::Ember => Self::ember(),
            Preset::Storm => Self::storm(),
            Preset::Mist => Self::mist(),
        }
    }

    /// Drifting coals with grain and a soft crimson glow.
    pub fn ember() -> Self {
        Self {
            modes: Modes::default(),
            glow: GlowConfig {
                color: Rgb::new(255, 10, 40),
                core_alpha: 0.035,
                mid_alpha: 0.01,
            },
            blobs: BlobConfig {
                color: Rgb::new(255, 30, 70),
                area_per_blob: 200_000.0,
                floor: 6,
                cap: 24,
                min_radius: 40.0,
                radius_fraction: 0.06,
                speed: 10.0,
                drift: 14.0,
                drift_rate: 0.35,
                base_alpha: 0.02,
                pulse_alpha: 0.02,
                pulse_rate: 0.3,
            },
            sparks: SparkConfig {
                color: Rgb::new(255, 120, 80),
                spawn_probability: 0.06,
                max_live: 48,
                life_min_ms: 700.0,
                life_max_ms: 1600.0,
                speed: 36.0,
                size: 1.4,
            },
            lightning: LightningConfig {
                probability: 0.003,
                cooldown_ms: 4500.0,
                flash_ms: 200.0,
                flash_alpha: 0.18,
                bolt_alpha: 0.85,
                jitter_px: 80.0,
                segments: 12,
            },
            mist: MistConfig {
                color: Rgb::new(220, 200, 210),
                area_per_node: 16_000.0,
                floor: 12,
                cap: 80,
                speed: 12.0,
                link_distance: 120.0,
                max_alpha: 0.1,
            },
            grain: GrainConfig {
                density: 0.0018,
                max_size: 1.6,
                alpha: 0.02,
            },
            parallax: ParallaxConfig::default(),
        }
    }

    /// Ember plus sparks and lightning, with a colder glow.
    pub fn storm() -> Self {
        let mut cfg = Self::ember();
        cfg.modes.storm = true;
        cfg.glow.color = Rgb::new(150, 170, 255);
        cfg.glow.core_alpha = 0.05;
        cfg.blobs.color = Rgb::new(120, 140, 255);
        cfg.blobs.cap = 16;
        cfg.grain.density = 0.0009;
        cfg.parallax.fog_a = LayerMotion::percent(3.0);
        cfg.parallax.fog_b = LayerMotion::percent(-4.0);
        cfg
    }

    /// Connecting-line field over a sparse glow, very light grain.
    pub fn mist() -> Self {
        let mut cfg = Self::ember();
        cfg.modes.mist = true;
        cfg.blobs.floor = 4;
        cfg.blobs.cap = 12;
        cfg.blobs.base_alpha = 0.015;
        cfg.grain.density = 0.00005;
        cfg.grain.max_size = 2.0;
        cfg
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("blobs.area_per_blob", self.blobs.area_per_blob)?;
        positive("blobs.min_radius", self.blobs.min_radius)?;
        floor_cap("blobs", self.blobs.floor, self.blobs.cap)?;
        positive("mist.area_per_node", self.mist.area_per_node)?;
        positive("mist.link_distance", self.mist.link_distance)?;
        floor_cap("mist", self.mist.floor, self.mist.cap)?;
        positive("lightning.flash_ms", self.lightning.flash_ms as f32)?;
        positive("sparks.life_min_ms", self.sparks.life_min_ms as f32)?;
        // NaN and infinite upper bounds fail here too.
        if !(self.sparks.life_max_ms.is_finite()
            && self.sparks.life_max_ms >= self.sparks.life_min_ms)
        {
            return Err(ConfigError::InvertedRange {
                field: "sparks.life_ms",
                min: self.sparks.life_min_ms,
                max: self.sparks.life_max_ms,
            });
        }
        if self.lightning.segments == 0 {
            return Err(ConfigError::NotPositive {
                field: "lightning.segments",
                value: 0.0,
            });
        }
        non_negative("blobs.radius_fraction", self.blobs.radius_fraction as f64)?;
        non_negative("blobs.speed", self.blobs.speed as f64)?;
        non_negative("blobs.drift", self.blobs.drift as f64)?;
        non_negative("blobs.drift_rate", self.blobs.drift_rate as f64)?;
        non_negative("blobs.pulse_rate", self.blobs.pulse_rate as f64)?;
        non_negative("sparks.speed", self.sparks.speed as f64)?;
        non_negative("sparks.size", self.sparks.size as f64)?;
        non_negative("mist.speed", self.mist.speed as f64)?;
        non_negative("lightning.cooldown_ms", self.lightning.cooldown_ms)?;
        non_negative("lightning.jitter_px", self.lightning.jitter_px as f64)?;
        non_negative("grain.max_size", self.grain.max_size as f64)?;
        unit("sparks.spawn_probability", self.sparks.spawn_probability)?;
        unit("lightning.probability", self.lightning.probability)?;
        unit("grain.density", self.grain.density)?;
        unit("grain.alpha", self.grain.alpha)?;
        unit("glow.core_alpha", self.glow.core_alpha)?;
        unit("glow.mid_alpha", self.glow.mid_alpha)?;
        unit("mist.max_alpha", self.mist.max_alpha)?;
        unit("lightning.flash_alpha", self.lightning.flash_alpha)?;
        unit("lightning.bolt_alpha", self.lightning.bolt_alpha)?;
        unit("blobs.base_alpha", self.blobs.base_alpha)?;
        unit("blobs.pulse_alpha", self.blobs.pulse_alpha)?;
        unit(
            "blobs.base_alpha + blobs.pulse_alpha",
            self.blobs.base_alpha + self.blobs.pulse_alpha,
        )?;
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NegativeOrNonFinite { field, value })
    }
}

fn unit(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnitRange { field, value })
    }
}

fn floor_cap(what: &'static str, floor: usize, cap: usize) -> Result<(), ConfigError> {
    if cap == 0 {
        return Err(ConfigError::NotPositive {
            field: what,
            value: 0.0,
        });
    }
    if floor > cap {
        return Err(ConfigError::FloorAboveCap { what, floor, cap });
    }
    Ok(())
}
