//! Keybinds and typed-keyword Easter eggs.

use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyAction {
    ToggleStorm,
    ToggleMist,
    ToggleGrain,
    ToggleAmbience,
    /// Storm on plus an immediate strike.
    Ignite,
    /// Show the hidden greeting toast.
    Greet,
}

impl KeyAction {
    pub fn describe(self) -> &'static str {
        match self {
            KeyAction::ToggleStorm => "storm",
            KeyAction::ToggleMist => "mist",
            KeyAction::ToggleGrain => "grain",
            KeyAction::ToggleAmbience => "ambience",
            KeyAction::Ignite => "ignite",
            KeyAction::Greet => "greet",
        }
    }
}

/// Single-key bindings, matched case-insensitively against `KeyboardEvent.key`.
#[derive(Clone, Debug)]
pub struct Keymap {
    binds: FnvHashMap<String, KeyAction>,
}

impl Default for Keymap {
    fn default() -> Self {
        let mut map = Self::empty();
        map.bind("1", KeyAction::ToggleStorm);
        map.bind("2", KeyAction::ToggleMist);
        map.bind("3", KeyAction::ToggleGrain);
        map.bind("m", KeyAction::ToggleAmbience);
        map
    }
}

impl Keymap {
    pub fn empty() -> Self {
        Self {
            binds: FnvHashMap::default(),
        }
    }

    pub fn bind(&mut self, key: &str, action: KeyAction) {
        self.binds.insert(key.to_lowercase(), action);
    }

    pub fn action_for_key(&self, key: &str) -> Option<KeyAction> {
        self.binds.get(&key.to_lowercase()).copied()
    }
}

/// Watches the stream of typed characters for registered keywords.
///
/// Keeps only the last `n` characters, `n` being the longest keyword, so the
/// buffer never grows with typing.
#[derive(Clone, Debug)]
pub struct KeywordListener {
    buffer: String,
    max_chars: usize,
    keywords: Vec<(String, KeyAction)>,
}

impl Default for KeywordListener {
    fn default() -> Self {
        Self::new([("ignite", KeyAction::Ignite), ("hello", KeyAction::Greet)])
    }
}

impl KeywordListener {
    pub fn new<'a>(keywords: impl IntoIterator<Item = (&'a str, KeyAction)>) -> Self {
        let keywords: Vec<(String, KeyAction)> = keywords
            .into_iter()
            .filter(|(k, _)| !k.is_empty())
            .map(|(k, a)| (k.to_lowercase(), a))
            .collect();
        let max_chars = keywords
            .iter()
            .map(|(k, _)| k.chars().count())
            .max()
            .unwrap_or(0);
        Self {
            buffer: String::new(),
            max_chars,
            keywords,
        }
    }

    /// Feed one `KeyboardEvent.key`. Named keys such as `Shift` or `Enter`
    /// are ignored. A completed keyword fires once and resets the buffer.
    pub fn push(&mut self, key: &str) -> Option<KeyAction> {
        let mut chars = key.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return None;
        };
        if self.max_chars == 0 {
            return None;
        }
        self.buffer.extend(c.to_lowercase());
        let excess = self.buffer.chars().count().saturating_sub(self.max_chars);
        if excess > 0 {
            let cut = self
                .buffer
                .char_indices()
                .nth(excess)
                .map(|(i, _)| i)
                .unwrap_or(self.buffer.len());
            self.buffer.drain(..cut);
        }
        let hit = self
            .keywords
            .iter()
            .find(|(k, _)| self.buffer.ends_with(k.as_str()))
            .map(|(_, a)| *a);
        if hit.is_some() {
            self.buffer.clear();
        }
        hit
    }

    #[inline]
    pub fn buffered(&self) -> &str {
        &self.buffer
    }
}
