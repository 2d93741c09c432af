use crate::config::SparkConfig;
use glam::Vec2;
use rand::Rng;

/// Short-lived ember rising from the lower part of the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct Spark {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life_ms: f64,
    pub born_ms: f64,
}

impl Spark {
    #[inline]
    pub fn age_ms(&self, now_ms: f64) -> f64 {
        now_ms - self.born_ms
    }

    #[inline]
    pub fn is_expired(&self, now_ms: f64) -> bool {
        self.age_ms(now_ms) >= self.life_ms
    }

    /// Linear fade from 1 at birth to 0 at the end of its life.
    #[inline]
    pub fn alpha(&self, now_ms: f64) -> f32 {
        (1.0 - self.age_ms(now_ms) / self.life_ms).clamp(0.0, 1.0) as f32
    }
}

#[derive(Clone, Debug, Default)]
pub struct Sparks {
    live: Vec<Spark>,
}

impl Sparks {
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Spark> {
        self.live.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn clear(&mut self) {
        self.live.clear();
    }

    /// Drop expired sparks, then move the survivors.
    pub fn step(&mut self, now_ms: f64, dt_sec: f32) {
        self.live.retain(|s| !s.is_expired(now_ms));
        for s in &mut self.live {
            s.pos += s.vel * dt_sec;
        }
    }

    /// Roll once for a new spark. Returns whether one was added.
    pub fn maybe_spawn<R: Rng + ?Sized>(
        &mut self,
        now_ms: f64,
        size: Vec2,
        cfg: &SparkConfig,
        rng: &mut R,
    ) -> bool {
        if self.live.len() >= cfg.max_live || rng.gen::<f32>() >= cfg.spawn_probability {
            return false;
        }
        let sway = (rng.gen::<f32>() * 2.0 - 1.0) * cfg.speed * 0.35;
        let rise = cfg.speed * (0.6 + 0.4 * rng.gen::<f32>());
        let life_ms = cfg.life_min_ms + (cfg.life_max_ms - cfg.life_min_ms) * rng.gen::<f64>();
        self.live.push(Spark {
            pos: Vec2::new(
                rng.gen::<f32>() * size.x,
                size.y * (0.7 + 0.3 * rng.gen::<f32>()),
            ),
            vel: Vec2::new(sway, -rise),
            life_ms,
            born_ms: now_ms,
        });
        true
    }
}
