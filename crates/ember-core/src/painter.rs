//! Drawing seam between the scene and a 2D canvas.
//!
//! The scene only speaks in terms of the primitives below so it can run on
//! the host against a recording painter; the web crate implements `Painter`
//! on top of `CanvasRenderingContext2d`.

use glam::Vec2;
use smallvec::SmallVec;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Rgba {
        Rgba {
            rgb: self,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba {
        rgb: Rgb::BLACK,
        alpha: 0.0,
    };
}

/// CSS `rgba()` form, the format canvas fill and stroke styles accept.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({},{},{},{:.4})",
            self.rgb.r, self.rgb.g, self.rgb.b, self.alpha
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

/// Radial gradient from a point to `radius`, painted inside its own circle
/// (`Painter::fill_gradient_circle`) or across a rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub radius: f32,
    pub stops: SmallVec<[ColorStop; 3]>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Composite {
    /// Normal alpha blending.
    SourceOver,
    /// Additive: overlapping shapes brighten.
    Lighter,
}

impl Composite {
    pub fn as_css(self) -> &'static str {
        match self {
            Composite::SourceOver => "source-over",
            Composite::Lighter => "lighter",
        }
    }
}

pub trait Painter {
    fn clear(&mut self, size: Vec2);
    fn set_composite(&mut self, mode: Composite);
    fn fill_gradient_rect(&mut self, gradient: &RadialGradient, origin: Vec2, size: Vec2);
    fn fill_gradient_circle(&mut self, gradient: &RadialGradient);
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn stroke_polyline(&mut self, points: &[Vec2], width: f32, color: Rgba);
}
