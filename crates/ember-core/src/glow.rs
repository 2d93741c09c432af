use crate::config::GlowConfig;
use crate::constants::*;
use crate::painter::{ColorStop, RadialGradient, Rgba};
use crate::pointer::PointerState;
use glam::Vec2;
use smallvec::smallvec;

/// The large light source behind everything, nudged toward the pointer.
pub fn backdrop_glow(size: Vec2, pointer: PointerState, cfg: &GlowConfig) -> RadialGradient {
    let center = Vec2::new(
        size.x * GLOW_CENTER_X + (pointer.x - 0.5) * size.x * GLOW_FOLLOW_X,
        size.y * GLOW_CENTER_Y + (pointer.y - 0.5) * size.y * GLOW_FOLLOW_Y,
    );
    RadialGradient {
        center,
        radius: size.max_element() * GLOW_RADIUS_FRACTION,
        stops: smallvec![
            ColorStop {
                offset: 0.0,
                color: cfg.color.with_alpha(cfg.core_alpha),
            },
            ColorStop {
                offset: GLOW_MID_STOP,
                color: cfg.color.with_alpha(cfg.mid_alpha),
            },
            ColorStop {
                offset: 1.0,
                color: Rgba::TRANSPARENT,
            },
        ],
    }
}
