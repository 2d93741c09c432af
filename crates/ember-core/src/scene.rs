//! The animated backdrop: one owning object for every piece of per-frame
//! state, driven by a single cooperative frame task.
//!
//! Lifecycle:
//!
//! ```text
//! Uninitialized --start--> Running <--pause/resume--> Paused
//!       |                     |
//!       +--reduced motion--> Disabled        (any) --dispose--> Disposed
//! ```
//!
//! The frame task re-arms itself only while `should_schedule()` is true.

use crate::blobs::BlobField;
use crate::config::{Modes, SceneConfig};
use crate::constants::*;
use crate::error::ConfigError;
use crate::glow::backdrop_glow;
use crate::grain;
use crate::keys::KeyAction;
use crate::lightning::Lightning;
use crate::mist::MistField;
use crate::painter::{Composite, Painter, Rgb};
use crate::pointer::PointerState;
use crate::sparks::Sparks;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneState {
    Uninitialized,
    Running,
    Paused,
    /// Reduced motion was requested at load; nothing is ever drawn.
    Disabled,
    Disposed,
}

pub struct Scene<R: Rng = StdRng> {
    config: SceneConfig,
    modes: Modes,
    state: SceneState,
    size: Vec2,
    rng: R,
    blobs: BlobField,
    sparks: Sparks,
    lightning: Lightning,
    mist: MistField,
    start_ms: Option<f64>,
    last_frame_ms: Option<f64>,
    frames: u64,
}

impl Scene<StdRng> {
    /// Deterministic scene, used by tests and reproducible captures.
    pub fn seeded(config: SceneConfig, seed: u64, reduced_motion: bool) -> Result<Self, ConfigError> {
        Self::create(config, StdRng::seed_from_u64(seed), reduced_motion)
    }
}

impl<R: Rng> Scene<R> {
    pub fn create(config: SceneConfig, rng: R, reduced_motion: bool) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = if reduced_motion {
            log::info!("[scene] reduced motion preferred; backdrop disabled");
            SceneState::Disabled
        } else {
            SceneState::Uninitialized
        };
        Ok(Self {
            modes: config.modes,
            config,
            state,
            size: Vec2::ZERO,
            rng,
            blobs: BlobField::default(),
            sparks: Sparks::default(),
            lightning: Lightning::default(),
            mist: MistField::default(),
            start_ms: None,
            last_frame_ms: None,
            frames: 0,
        })
    }

    #[inline]
    pub fn state(&self) -> SceneState {
        self.state
    }

    #[inline]
    pub fn should_schedule(&self) -> bool {
        self.state == SceneState::Running
    }

    #[inline]
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    #[inline]
    pub fn modes(&self) -> Modes {
        self.modes
    }

    #[inline]
    pub fn modes_mut(&mut self) -> &mut Modes {
        &mut self.modes
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn blobs(&self) -> &BlobField {
        &self.blobs
    }

    #[inline]
    pub fn sparks(&self) -> &Sparks {
        &self.sparks
    }

    #[inline]
    pub fn lightning(&self) -> &Lightning {
        &self.lightning
    }

    #[inline]
    pub fn mist(&self) -> &MistField {
        &self.mist
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Size the particle sets to the canvas and begin running. Returns
    /// whether the caller should request the first frame.
    pub fn start(&mut self, width: f32, height: f32) -> bool {
        match self.state {
            SceneState::Uninitialized => {
                self.resize(width, height);
                self.state = SceneState::Running;
                log::info!(
                    "[scene] running {}x{} blobs={}",
                    width,
                    height,
                    self.blobs.len()
                );
                true
            }
            SceneState::Running => true,
            SceneState::Paused | SceneState::Disabled | SceneState::Disposed => false,
        }
    }

    pub fn pause(&mut self) {
        if self.state == SceneState::Running {
            self.state = SceneState::Paused;
            log::debug!("[scene] paused");
        }
    }

    /// Resume after the page became visible again. Particles are reset to the
    /// current canvas size. Returns whether a frame should be requested.
    pub fn resume(&mut self, width: f32, height: f32) -> bool {
        if self.state != SceneState::Paused {
            return self.state == SceneState::Running;
        }
        self.resize(width, height);
        self.last_frame_ms = None;
        self.state = SceneState::Running;
        log::debug!("[scene] resumed");
        true
    }

    /// Reinitialize particle sets for a new canvas size.
    pub fn resize(&mut self, width: f32, height: f32) {
        if matches!(self.state, SceneState::Disabled | SceneState::Disposed) {
            return;
        }
        self.size = Vec2::new(width.max(0.0), height.max(0.0));
        self.blobs = BlobField::new(self.size, &self.config.blobs, &mut self.rng);
        self.mist = MistField::new(self.size, &self.config.mist, &mut self.rng);
        self.sparks.clear();
    }

    pub fn dispose(&mut self) {
        self.state = SceneState::Disposed;
        self.blobs = BlobField::default();
        self.mist = MistField::default();
        self.sparks.clear();
        self.lightning = Lightning::default();
    }

    /// Force a lightning strike on the next drawn frame.
    pub fn strike(&mut self, now_ms: f64) {
        if self.state == SceneState::Running {
            let cfg = &self.config.lightning;
            self.lightning.strike(now_ms, self.size, cfg, &mut self.rng);
        }
    }

    /// Apply a mode keybind and return the toast text. `None` when the
    /// backdrop is disabled or disposed, or the action is not a mode change.
    pub fn apply_key(&mut self, action: KeyAction, now_ms: f64) -> Option<String> {
        if matches!(self.state, SceneState::Disabled | SceneState::Disposed) {
            return None;
        }
        let on_off = |on: bool| if on { "on" } else { "off" };
        match action {
            KeyAction::ToggleStorm => {
                self.modes.storm = !self.modes.storm;
                Some(format!("Storm {}", on_off(self.modes.storm)))
            }
            KeyAction::ToggleMist => {
                self.modes.mist = !self.modes.mist;
                Some(format!("Mist {}", on_off(self.modes.mist)))
            }
            KeyAction::ToggleGrain => {
                self.modes.grain = !self.modes.grain;
                Some(format!("Grain {}", on_off(self.modes.grain)))
            }
            KeyAction::Ignite => {
                self.modes.storm = true;
                self.strike(now_ms);
                Some("Ignited".to_string())
            }
            KeyAction::ToggleAmbience | KeyAction::Greet => None,
        }
    }

    /// Advance and draw one frame. Returns whether to reschedule.
    pub fn frame<P: Painter + ?Sized>(
        &mut self,
        now_ms: f64,
        pointer: PointerState,
        painter: &mut P,
    ) -> bool {
        if self.state != SceneState::Running {
            return false;
        }
        let start_ms = *self.start_ms.get_or_insert(now_ms);
        let dt_sec = self
            .last_frame_ms
            .map(|last| ((now_ms - last) / 1000.0) as f32)
            .unwrap_or(0.0)
            .clamp(0.0, FRAME_DT_MAX_SEC);
        self.last_frame_ms = Some(now_ms);
        let t_sec = ((now_ms - start_ms) / 1000.0) as f32;
        let size = self.size;

        painter.clear(size);

        painter.set_composite(Composite::SourceOver);
        let glow = backdrop_glow(size, pointer, &self.config.glow);
        painter.fill_gradient_rect(&glow, Vec2::ZERO, size);

        let blob_cfg = &self.config.blobs;
        self.blobs.step(dt_sec, t_sec, blob_cfg);
        painter.set_composite(Composite::Lighter);
        for b in self.blobs.blobs() {
            let alpha = b.alpha_at(t_sec, blob_cfg);
            painter.fill_gradient_circle(&b.gradient(alpha, blob_cfg));
        }
        painter.set_composite(Composite::SourceOver);

        if self.modes.storm {
            self.draw_sparks(now_ms, dt_sec, painter);
            self.draw_lightning(now_ms, painter);
        } else if !self.sparks.is_empty() {
            self.sparks.clear();
        }

        if self.modes.mist {
            self.draw_mist(dt_sec, painter);
        }

        if self.modes.grain {
            let cfg = &self.config.grain;
            let color = Rgb::BLACK.with_alpha(cfg.alpha);
            for speck in grain::scatter(size, cfg, &mut self.rng) {
                painter.fill_rect(speck.pos, Vec2::splat(speck.size), color);
            }
        }

        self.frames += 1;
        true
    }

    fn draw_sparks<P: Painter + ?Sized>(&mut self, now_ms: f64, dt_sec: f32, painter: &mut P) {
        let cfg = &self.config.sparks;
        self.sparks.step(now_ms, dt_sec);
        self.sparks.maybe_spawn(now_ms, self.size, cfg, &mut self.rng);
        for s in self.sparks.iter() {
            painter.fill_circle(s.pos, cfg.size, cfg.color.with_alpha(s.alpha(now_ms)));
        }
    }

    fn draw_lightning<P: Painter + ?Sized>(&mut self, now_ms: f64, painter: &mut P) {
        let cfg = &self.config.lightning;
        self.lightning.expire(now_ms, cfg);
        if !self.lightning.is_active() {
            self.lightning
                .maybe_strike(now_ms, self.size, cfg, &mut self.rng);
        }
        let env = self.lightning.envelope(now_ms, cfg);
        if env <= 0.0 {
            return;
        }
        painter.fill_rect(
            Vec2::ZERO,
            self.size,
            Rgb::WHITE.with_alpha(cfg.flash_alpha * env),
        );
        let bolt_color = Rgb::WHITE.with_alpha(cfg.bolt_alpha * env);
        for bolt in self.lightning.bolts() {
            painter.stroke_polyline(&bolt.points, LIGHTNING_LINE_WIDTH, bolt_color);
        }
    }

    fn draw_mist<P: Painter + ?Sized>(&mut self, dt_sec: f32, painter: &mut P) {
        let cfg = &self.config.mist;
        self.mist.step(dt_sec);
        for link in self.mist.links(cfg) {
            painter.stroke_polyline(
                &[link.from, link.to],
                MIST_LINE_WIDTH,
                cfg.color.with_alpha(link.alpha),
            );
        }
    }
}
