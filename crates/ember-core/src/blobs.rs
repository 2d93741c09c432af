//! Drifting glow blobs ("coals").

use crate::config::BlobConfig;
use crate::constants::*;
use crate::painter::{ColorStop, RadialGradient, Rgba};
use glam::Vec2;
use rand::Rng;
use smallvec::smallvec;
use std::f32::consts::TAU;

#[derive(Clone, Debug, PartialEq)]
pub struct Blob {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub alpha: f32,
    pub phase: f32,
}

/// `max(floor, min(area / k, cap))`.
#[inline]
pub fn blob_count(area: f32, cfg: &BlobConfig) -> usize {
    let by_area = (area.max(0.0) / cfg.area_per_blob).floor() as usize;
    by_area.min(cfg.cap).max(cfg.floor)
}

/// Move `v` back inside `[-r, extent + r]` once it has left by more than `r`,
/// entering from the opposite edge.
#[inline]
pub fn wrap_axis(v: f32, r: f32, extent: f32) -> f32 {
    if v < -r {
        extent + r
    } else if v > extent + r {
        -r
    } else {
        v
    }
}

#[inline]
pub fn wrap(pos: Vec2, r: f32, size: Vec2) -> Vec2 {
    Vec2::new(wrap_axis(pos.x, r, size.x), wrap_axis(pos.y, r, size.y))
}

impl Blob {
    /// Time-varying opacity, `base + pulse * |sin(t·ω + φ)|`.
    #[inline]
    pub fn alpha_at(&self, t_sec: f32, cfg: &BlobConfig) -> f32 {
        self.alpha + cfg.pulse_alpha * (t_sec * cfg.pulse_rate + self.phase).sin().abs()
    }

    pub fn gradient(&self, alpha: f32, cfg: &BlobConfig) -> RadialGradient {
        RadialGradient {
            center: self.pos,
            radius: self.radius,
            stops: smallvec![
                ColorStop {
                    offset: 0.0,
                    color: cfg.color.with_alpha(alpha),
                },
                ColorStop {
                    offset: BLOB_MID_STOP,
                    color: cfg.color.with_alpha(alpha * BLOB_MID_ALPHA_RATIO),
                },
                ColorStop {
                    offset: 1.0,
                    color: Rgba::TRANSPARENT,
                },
            ],
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct BlobField {
    blobs: Vec<Blob>,
    size: Vec2,
}

impl BlobField {
    pub fn new<R: Rng + ?Sized>(size: Vec2, cfg: &BlobConfig, rng: &mut R) -> Self {
        let count = blob_count(size.x * size.y, cfg);
        let base_radius = cfg.min_radius.max(size.min_element() * cfg.radius_fraction);
        let blobs = (0..count)
            .map(|_| {
                let heading = rng.gen::<f32>() * TAU;
                let speed = cfg.speed * (0.5 + 0.5 * rng.gen::<f32>());
                let spread = 1.0 + BLOB_RADIUS_SPREAD * (rng.gen::<f32>() * 2.0 - 1.0);
                Blob {
                    pos: Vec2::new(rng.gen::<f32>() * size.x, rng.gen::<f32>() * size.y),
                    vel: Vec2::from_angle(heading) * speed,
                    radius: base_radius * spread,
                    alpha: cfg.base_alpha,
                    phase: rng.gen::<f32>() * TAU,
                }
            })
            .collect();
        Self { blobs, size }
    }

    #[inline]
    pub fn blobs(&self) -> &[Blob] {
        &self.blobs
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }

    /// Integrate velocity plus a per-blob sinusoidal drift, then wrap.
    pub fn step(&mut self, dt_sec: f32, t_sec: f32, cfg: &BlobConfig) {
        for b in &mut self.blobs {
            let w = t_sec * cfg.drift_rate + b.phase;
            let drift = Vec2::new(w.sin(), (w * 0.8).cos()) * cfg.drift;
            b.pos += (b.vel + drift) * dt_sec;
            b.pos = wrap(b.pos, b.radius, self.size);
        }
    }
}
