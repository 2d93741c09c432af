//! Pointer-driven parallax offsets for the fog layers and the logo.

use crate::pointer::PointerState;
use std::fmt::Write as _;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    Percent,
    Px,
}

impl Unit {
    fn suffix(self) -> &'static str {
        match self {
            Unit::Percent => "%",
            Unit::Px => "px",
        }
    }
}

/// Per-layer gains: offset = gain * signed pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerMotion {
    pub translate: f32,
    pub unit: Unit,
    /// Degrees of rotation per unit of horizontal pointer offset.
    pub rotate_deg: f32,
}

impl LayerMotion {
    pub const fn percent(translate: f32) -> Self {
        Self {
            translate,
            unit: Unit::Percent,
            rotate_deg: 0.0,
        }
    }

    pub const fn px(translate: f32, rotate_deg: f32) -> Self {
        Self {
            translate,
            unit: Unit::Px,
            rotate_deg,
        }
    }

    pub fn offset(&self, pointer: PointerState) -> LayerOffset {
        let n = pointer.signed();
        LayerOffset {
            x: n.x * self.translate,
            y: n.y * self.translate,
            unit: self.unit,
            rotate_deg: n.x * self.rotate_deg,
        }
    }

    /// Largest translation this layer can reach on either axis.
    #[inline]
    pub fn max_translate(&self) -> f32 {
        self.translate.abs()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerOffset {
    pub x: f32,
    pub y: f32,
    pub unit: Unit,
    pub rotate_deg: f32,
}

impl LayerOffset {
    /// CSS `transform` value.
    pub fn to_css(&self) -> String {
        let u = self.unit.suffix();
        let mut css = format!("translate3d({:.3}{u}, {:.3}{u}, 0)", self.x, self.y);
        if self.rotate_deg != 0.0 {
            let _ = write!(css, " rotate({:.3}deg)", self.rotate_deg);
        }
        css
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxConfig {
    pub fog_a: LayerMotion,
    pub fog_b: LayerMotion,
    pub logo: LayerMotion,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            fog_a: LayerMotion::percent(2.0),
            fog_b: LayerMotion::percent(-3.0),
            logo: LayerMotion::px(1.2, 0.6),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxFrame {
    pub fog_a: LayerOffset,
    pub fog_b: LayerOffset,
    pub logo: LayerOffset,
}

impl ParallaxConfig {
    pub fn frame(&self, pointer: PointerState) -> ParallaxFrame {
        ParallaxFrame {
            fog_a: self.fog_a.offset(pointer),
            fog_b: self.fog_b.offset(pointer),
            logo: self.logo.offset(pointer),
        }
    }
}
