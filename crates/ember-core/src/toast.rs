use crate::constants::TOAST_DEFAULT_MS;

/// Handle for one `show` call; hand its generation back to `expire` when the
/// hide timer fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastTicket {
    pub generation: u64,
    pub duration_ms: u32,
}

/// Visibility bookkeeping for the toast. The most recent `show` owns the
/// toast: timers from earlier calls are stale and cannot hide it.
#[derive(Clone, Debug, Default)]
pub struct ToastClock {
    generation: u64,
    visible: bool,
    hide_at_ms: Option<f64>,
}

impl ToastClock {
    pub fn show(&mut self, now_ms: f64, duration_ms: Option<u32>) -> ToastTicket {
        let duration_ms = duration_ms.unwrap_or(TOAST_DEFAULT_MS);
        self.generation = self.generation.wrapping_add(1);
        self.visible = true;
        self.hide_at_ms = Some(now_ms + duration_ms as f64);
        ToastTicket {
            generation: self.generation,
            duration_ms,
        }
    }

    /// Returns true when the timer for `generation` should hide the toast.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        self.hide_at_ms = None;
        true
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[inline]
    pub fn hide_at_ms(&self) -> Option<f64> {
        self.hide_at_ms
    }
}
