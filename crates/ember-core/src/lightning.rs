//! Lightning: a brief white flash plus a few jagged bolts near the top.

use crate::config::LightningConfig;
use crate::constants::*;
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq)]
pub struct Bolt {
    pub points: SmallVec<[Vec2; 16]>,
}

/// Vertical random walk from `(start_x, 0)` down to `depth`, jittering each
/// segment horizontally by up to `cfg.jitter_px`.
pub fn jagged_bolt<R: Rng + ?Sized>(
    start_x: f32,
    depth: f32,
    cfg: &LightningConfig,
    rng: &mut R,
) -> Bolt {
    let segments = cfg.segments.max(1);
    let step = depth / segments as f32;
    let mut points = SmallVec::with_capacity(segments + 1);
    let mut p = Vec2::new(start_x, 0.0);
    points.push(p);
    for _ in 0..segments {
        p.x += (rng.gen::<f32>() * 2.0 - 1.0) * cfg.jitter_px;
        p.y += step;
        points.push(p);
    }
    Bolt { points }
}

#[derive(Clone, Debug)]
struct Strike {
    start_ms: f64,
    bolts: SmallVec<[Bolt; LIGHTNING_MAX_BOLTS]>,
}

#[derive(Clone, Debug, Default)]
pub struct Lightning {
    last_strike_ms: Option<f64>,
    strike: Option<Strike>,
}

impl Lightning {
    #[inline]
    pub fn in_cooldown(&self, now_ms: f64, cfg: &LightningConfig) -> bool {
        self.last_strike_ms
            .is_some_and(|last| now_ms - last < cfg.cooldown_ms)
    }

    /// Roll for a strike; never fires while the cooldown is running.
    pub fn maybe_strike<R: Rng + ?Sized>(
        &mut self,
        now_ms: f64,
        size: Vec2,
        cfg: &LightningConfig,
        rng: &mut R,
    ) -> bool {
        if self.in_cooldown(now_ms, cfg) || rng.gen::<f32>() >= cfg.probability {
            return false;
        }
        self.strike(now_ms, size, cfg, rng);
        true
    }

    /// Strike now regardless of cooldown and probability.
    pub fn strike<R: Rng + ?Sized>(
        &mut self,
        now_ms: f64,
        size: Vec2,
        cfg: &LightningConfig,
        rng: &mut R,
    ) {
        let n = rng.gen_range(LIGHTNING_MIN_BOLTS..=LIGHTNING_MAX_BOLTS);
        let depth = size.y * LIGHTNING_DEPTH_FRACTION;
        let bolts = (0..n)
            .map(|_| {
                let x = size.x * (0.1 + 0.8 * rng.gen::<f32>());
                jagged_bolt(x, depth, cfg, rng)
            })
            .collect();
        self.last_strike_ms = Some(now_ms);
        self.strike = Some(Strike {
            start_ms: now_ms,
            bolts,
        });
        log::debug!("[scene] lightning strike with {} bolts", n);
    }

    /// Linear decay from 1 at the strike to 0 after `flash_ms`.
    pub fn envelope(&self, now_ms: f64, cfg: &LightningConfig) -> f32 {
        match &self.strike {
            Some(s) => {
                let k = (now_ms - s.start_ms) / cfg.flash_ms;
                (1.0 - k).clamp(0.0, 1.0) as f32
            }
            None => 0.0,
        }
    }

    /// Forget the strike once its envelope has fully decayed.
    pub fn expire(&mut self, now_ms: f64, cfg: &LightningConfig) {
        if self.strike.is_some() && self.envelope(now_ms, cfg) <= 0.0 {
            self.strike = None;
        }
    }

    pub fn bolts(&self) -> &[Bolt] {
        self.strike.as_ref().map(|s| s.bolts.as_slice()).unwrap_or(&[])
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.strike.is_some()
    }
}
