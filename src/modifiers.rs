use crate::key::KeyIdentifier;

bitflags::bitflags! {
    /// Which shift sources are currently engaged.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    struct ShiftSources: u8 {
        const LEFT   = 0b001;
        const RIGHT  = 0b010;
        /// Latched by clicking a rendered shift key.
        const STICKY = 0b100;
    }
}

/// A change to the modifier state that the rendering layer may reflect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierChange {
    /// Caps lock flipped; carries the new value.
    CapsLock(bool),
    /// Shift engaged or released; `true` means show the shifted set.
    Shift(bool),
    /// The active layout language changed; carries the new index.
    Language(usize),
}

/// Caps lock, shift and active layout language.
///
/// This is a plain value: the resolver reads it, and only the explicit
/// operations below change it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifierState {
    caps_lock: bool,
    shift: ShiftSources,
    language: usize,
    language_count: usize,
    chord_latched: bool,
}

impl ModifierState {
    pub fn new(language_count: usize) -> Self {
        Self {
            caps_lock: false,
            shift: ShiftSources::empty(),
            language: 0,
            language_count: language_count.max(1),
            chord_latched: false,
        }
    }

    /// Starts on `language`, or on language 0 if it is out of range.
    pub fn with_language(mut self, language: usize) -> Self {
        self.set_language(language);
        self
    }

    pub fn with_caps_lock(mut self, on: bool) -> Self {
        self.caps_lock = on;
        self
    }

    pub fn with_shift(mut self, held: bool) -> Self {
        self.shift.set(ShiftSources::LEFT, held);
        self
    }

    pub fn caps_lock(&self) -> bool {
        self.caps_lock
    }

    pub fn shift_held(&self) -> bool {
        !self.shift.is_empty()
    }

    pub fn language(&self) -> usize {
        self.language
    }

    pub fn language_count(&self) -> usize {
        self.language_count
    }

    pub fn set_language(&mut self, language: usize) {
        self.language = if language < self.language_count {
            language
        } else {
            0
        };
    }

    /// Updates state for a key going down.
    ///
    /// Caps lock toggles once per discrete down event; auto-repeat is not
    /// filtered. Shift engages the side that went down.
    pub fn on_key_down(&mut self, id: &KeyIdentifier) -> Option<ModifierChange> {
        if id.is_caps_lock() {
            self.caps_lock = !self.caps_lock;
            return Some(ModifierChange::CapsLock(self.caps_lock));
        }
        if id.is_shift() {
            self.shift.insert(side(id));
            return Some(ModifierChange::Shift(true));
        }
        None
    }

    /// Updates state for a key coming up. Caps lock has no key-up effect.
    pub fn on_key_up(&mut self, id: &KeyIdentifier) -> Option<ModifierChange> {
        if id.is_shift() {
            self.shift.remove(side(id) | ShiftSources::STICKY);
            return Some(ModifierChange::Shift(self.shift_held()));
        }
        None
    }

    /// Latches or releases shift from a click on a rendered shift key.
    pub fn toggle_shift(&mut self) -> ModifierChange {
        if self.shift_held() {
            self.shift = ShiftSources::empty();
        } else {
            self.shift.insert(ShiftSources::STICKY);
        }
        ModifierChange::Shift(self.shift_held())
    }

    /// Advances to the next layout language, wrapping around.
    pub fn switch_language(&mut self) -> usize {
        self.language = (self.language + 1) % self.language_count;
        self.language
    }

    /// Switches language for the alt+shift chord, at most once until the
    /// chord is released.
    pub fn on_switch_chord(&mut self) -> Option<usize> {
        if self.chord_latched {
            return None;
        }
        self.chord_latched = true;
        Some(self.switch_language())
    }

    pub fn release_chord(&mut self) {
        self.chord_latched = false;
    }

    /// True when letters come out uppercase: caps lock XOR shift.
    pub fn uppercase(&self) -> bool {
        self.caps_lock != self.shift_held()
    }

    /// Applies the case rule to `text`. Shift inverts caps lock instead of
    /// stacking with it.
    pub fn apply_case(&self, text: &str) -> String {
        if self.uppercase() {
            text.to_uppercase()
        } else {
            text.to_lowercase()
        }
    }
}

impl Default for ModifierState {
    fn default() -> Self {
        Self::new(1)
    }
}

fn side(id: &KeyIdentifier) -> ShiftSources {
    if id.as_str() == "shiftright" {
        ShiftSources::RIGHT
    } else {
        ShiftSources::LEFT
    }
}
