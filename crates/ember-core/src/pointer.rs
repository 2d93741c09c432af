use crate::constants::POINTER_MIN_INTERVAL_MS;
use glam::Vec2;

/// Pointer position normalized to the viewport, `(0, 0)` top-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl Default for PointerState {
    fn default() -> Self {
        Self::CENTER
    }
}

impl PointerState {
    pub const CENTER: PointerState = PointerState { x: 0.5, y: 0.5 };

    /// Map `[0, 1]` to `[-1, 1]` on each axis, zero at the viewport center.
    #[inline]
    pub fn signed(&self) -> Vec2 {
        Vec2::new((self.x - 0.5) * 2.0, (self.y - 0.5) * 2.0)
    }
}

/// Normalize a client-space contact point against the viewport size.
///
/// A missing contact, a non-finite coordinate or an empty viewport fall back
/// to the center; everything else is clamped into `[0, 1]²`.
pub fn normalize(client: Option<Vec2>, viewport: Vec2) -> PointerState {
    let Some(p) = client else {
        return PointerState::CENTER;
    };
    let axis = |v: f32, extent: f32| {
        if extent > 0.0 && v.is_finite() && extent.is_finite() {
            (v / extent).clamp(0.0, 1.0)
        } else {
            0.5
        }
    };
    PointerState {
        x: axis(p.x, viewport.x),
        y: axis(p.y, viewport.y),
    }
}

/// Shared pointer state plus the frame-rate throttle guarding it.
///
/// Moves arriving sooner than `min_interval_ms` after the last accepted one
/// are dropped, not queued.
#[derive(Clone, Debug)]
pub struct PointerTracker {
    state: PointerState,
    last_accept_ms: Option<f64>,
    min_interval_ms: f64,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(POINTER_MIN_INTERVAL_MS)
    }
}

impl PointerTracker {
    pub fn new(min_interval_ms: f64) -> Self {
        Self {
            state: PointerState::CENTER,
            last_accept_ms: None,
            min_interval_ms: min_interval_ms.max(0.0),
        }
    }

    #[inline]
    pub fn state(&self) -> PointerState {
        self.state
    }

    /// Returns whether the move was accepted.
    pub fn on_move(&mut self, now_ms: f64, client: Option<Vec2>, viewport: Vec2) -> bool {
        if let Some(last) = self.last_accept_ms {
            if now_ms - last < self.min_interval_ms {
                return false;
            }
        }
        self.last_accept_ms = Some(now_ms);
        self.state = normalize(client, viewport);
        true
    }
}
