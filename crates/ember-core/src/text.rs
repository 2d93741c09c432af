//! Typewriter and glitch text effects.

use crate::constants::*;
use rand::seq::index;
use rand::Rng;

/// Reveals a line one character at a time.
#[derive(Clone, Debug)]
pub struct Typewriter {
    chars: Vec<char>,
    revealed: usize,
    next_at_ms: Option<f64>,
    char_ms: f64,
    pause_ms: f64,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self::with_timing(text, TYPEWRITER_CHAR_MS, TYPEWRITER_PUNCT_PAUSE_MS)
    }

    pub fn with_timing(text: &str, char_ms: f64, pause_ms: f64) -> Self {
        Self {
            chars: text.chars().collect(),
            revealed: 0,
            next_at_ms: None,
            char_ms: char_ms.max(0.0),
            pause_ms: pause_ms.max(0.0),
        }
    }

    fn delay_after(&self, c: char) -> f64 {
        match c {
            '.' | ',' | ';' | ':' | '!' | '?' | '—' | '…' => self.char_ms + self.pause_ms,
            _ => self.char_ms,
        }
    }

    /// Reveal every character that is due by `now_ms`. The first call only
    /// anchors the clock. Returns whether the visible text changed.
    pub fn advance(&mut self, now_ms: f64) -> bool {
        let Some(mut next) = self.next_at_ms else {
            self.next_at_ms = Some(now_ms + self.char_ms);
            return false;
        };
        let before = self.revealed;
        while self.revealed < self.chars.len() && now_ms >= next {
            next += self.delay_after(self.chars[self.revealed]);
            self.revealed += 1;
        }
        self.next_at_ms = Some(next);
        self.revealed != before
    }

    /// Show everything at once (reduced motion, or a click to skip).
    pub fn finish(&mut self) {
        self.revealed = self.chars.len();
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.revealed >= self.chars.len()
    }

    #[inline]
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn visible(&self) -> String {
        self.chars[..self.revealed].iter().collect()
    }
}

/// Replace up to `ceil(fraction * n)` of the `n` non-whitespace characters
/// with glyphs from `GLITCH_GLYPHS`.
pub fn scramble<R: Rng + ?Sized>(text: &str, fraction: f32, rng: &mut R) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    let slots: Vec<usize> = chars
        .iter()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(i, _)| i)
        .collect();
    let k = ((slots.len() as f32) * fraction.clamp(0.0, 1.0)).ceil() as usize;
    for pick in index::sample(rng, slots.len(), k.min(slots.len())).iter() {
        let glyph = GLITCH_GLYPHS[rng.gen_range(0..GLITCH_GLYPHS.len())];
        chars[slots[pick]] = glyph;
    }
    chars.into_iter().collect()
}

/// Occasional short bursts of scrambled text over an otherwise clean label.
#[derive(Clone, Debug)]
pub struct Glitch {
    text: String,
    probability: f32,
    burst_ms: f64,
    max_fraction: f32,
    burst_until_ms: Option<f64>,
}

impl Glitch {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            probability: GLITCH_PROBABILITY,
            burst_ms: GLITCH_BURST_MS,
            max_fraction: GLITCH_MAX_FRACTION,
            burst_until_ms: None,
        }
    }

    pub fn with_probability(mut self, probability: f32) -> Self {
        self.probability = probability.clamp(0.0, 1.0);
        self
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn in_burst(&self) -> bool {
        self.burst_until_ms.is_some()
    }

    /// Returns the text to display when it should change this frame: a fresh
    /// scramble during a burst, the clean text when a burst ends.
    pub fn frame<R: Rng + ?Sized>(&mut self, now_ms: f64, rng: &mut R) -> Option<String> {
        match self.burst_until_ms {
            Some(until) if now_ms >= until => {
                self.burst_until_ms = None;
                Some(self.text.clone())
            }
            Some(_) => {
                let fraction = rng.gen::<f32>() * self.max_fraction;
                Some(scramble(&self.text, fraction, rng))
            }
            None if rng.gen::<f32>() < self.probability => {
                self.burst_until_ms = Some(now_ms + self.burst_ms);
                let fraction = rng.gen::<f32>() * self.max_fraction;
                Some(scramble(&self.text, fraction, rng))
            }
            None => None,
        }
    }
}
