use std::fmt;

/// A physical key name, normalized to one canonical casing.
///
/// Event sources disagree on how they spell key codes: a physical key-down
/// may report `KeyA` while a rendered button carries `keya` or just `a`.
/// Construction lowercases the raw code and folds the legacy aliases onto
/// the canonical code names, so every spelling of a key compares equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyIdentifier(String);

impl KeyIdentifier {
    pub fn new(raw: &str) -> Self {
        Self(normalize(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_caps_lock(&self) -> bool {
        self.0 == "capslock"
    }

    pub fn is_shift(&self) -> bool {
        matches!(self.0.as_str(), "shiftleft" | "shiftright")
    }

    pub fn is_alt(&self) -> bool {
        matches!(self.0.as_str(), "altleft" | "altright")
    }
}

impl fmt::Display for KeyIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for KeyIdentifier {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for KeyIdentifier {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

fn normalize(raw: &str) -> String {
    let alias = match raw {
        "\\" => Some("backslash"),
        " " => Some("space"),
        "`" => Some("backquote"),
        "-" => Some("minus"),
        "=" => Some("equal"),
        "[" => Some("bracketleft"),
        "]" => Some("bracketright"),
        ";" => Some("semicolon"),
        "'" => Some("quote"),
        "," => Some("comma"),
        "." => Some("period"),
        "/" => Some("slash"),
        "↑" => Some("arrowup"),
        "←" => Some("arrowleft"),
        "↓" => Some("arrowdown"),
        "→" => Some("arrowright"),
        _ => None,
    };
    if let Some(alias) = alias {
        return alias.to_string();
    }

    let lower = raw.to_lowercase();
    match lower.as_str() {
        "control" | "ctrl" => return "controlleft".to_string(),
        "shift" => return "shiftleft".to_string(),
        "alt" => return "altleft".to_string(),
        "win" | "meta" => return "metaleft".to_string(),
        _ => {}
    }

    // Bare single characters from legacy sources name their physical key.
    let mut chars = lower.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_ascii_lowercase() {
            return format!("key{c}");
        }
        if c.is_ascii_digit() {
            return format!("digit{c}");
        }
    }
    lower
}

bitflags::bitflags! {
    /// Keyboard modifier flags reported by the host alongside a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const CTRL  = 0b0010;
        const ALT   = 0b0100;
        const META  = 0b1000;
    }
}

/// Whether a physical key went down or came back up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPhase {
    Down,
    Up,
}

/// Where an event came from.
///
/// Physical events honour the native pass-through list; virtual clicks on a
/// rendered key always go through the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Physical,
    Virtual,
}

/// A key event translated once from the platform event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that changed state.
    pub id: KeyIdentifier,
    /// Modifier keys held when the event fired.
    pub mods: Modifiers,
    pub phase: KeyPhase,
}

impl KeyEvent {
    pub fn down(id: impl Into<KeyIdentifier>, mods: Modifiers) -> Self {
        Self {
            id: id.into(),
            mods,
            phase: KeyPhase::Down,
        }
    }

    pub fn up(id: impl Into<KeyIdentifier>, mods: Modifiers) -> Self {
        Self {
            id: id.into(),
            mods,
            phase: KeyPhase::Up,
        }
    }
}

/// Input events that can be processed by the keyboard engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A physical key going down or up.
    Key(KeyEvent),
    /// A click on a rendered key, carrying the key's identifier attribute.
    Click(KeyIdentifier),
}

impl InputEvent {
    pub fn source(&self) -> InputSource {
        match self {
            InputEvent::Key(_) => InputSource::Physical,
            InputEvent::Click(_) => InputSource::Virtual,
        }
    }
}
