use crate::constants::AMBIENCE_VOLUME;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AmbienceCommand {
    Play { volume: f64 },
    Pause,
}

/// Tracks whether the ambience loop has been started and is audible.
///
/// Playback is only attempted from a user gesture; a rejected attempt leaves
/// the state as not playing and is never retried on its own.
#[derive(Clone, Debug)]
pub struct Ambience {
    volume: f64,
    armed: bool,
    playing: bool,
}

impl Default for Ambience {
    fn default() -> Self {
        Self::new(AMBIENCE_VOLUME)
    }
}

impl Ambience {
    pub fn new(volume: f64) -> Self {
        Self {
            volume: volume.clamp(0.0, 1.0),
            armed: false,
            playing: false,
        }
    }

    /// Click or pointer-down anywhere. Only the first one starts playback.
    pub fn on_gesture(&mut self) -> Option<AmbienceCommand> {
        if self.armed {
            return None;
        }
        self.armed = true;
        Some(AmbienceCommand::Play {
            volume: self.volume,
        })
    }

    /// The dedicated toggle key.
    pub fn on_toggle(&mut self) -> AmbienceCommand {
        self.armed = true;
        if self.playing {
            self.playing = false;
            AmbienceCommand::Pause
        } else {
            AmbienceCommand::Play {
                volume: self.volume,
            }
        }
    }

    /// Outcome of a `Play` attempt.
    pub fn on_play_result(&mut self, ok: bool) {
        self.playing = ok;
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[inline]
    pub fn volume(&self) -> f64 {
        self.volume
    }
}
