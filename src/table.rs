use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::key::KeyIdentifier;

/// The arrow cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKey {
    Up,
    Down,
    Left,
    Right,
}

/// The role a key plays, independent of the text it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// Emits its (possibly fixed) text.
    Text,
    Backspace,
    Delete,
    Arrow(ArrowKey),
    CapsLock,
    Shift,
    Control,
    Alt,
    Meta,
}

/// A supported layout language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    /// Short tag persisted as the language preference, e.g. `en`.
    pub code: String,
    /// Human-readable name.
    pub name: String,
}

impl Language {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// Static description of one physical key across every layout language.
///
/// All per-language vectors are indexed by language index and fall back to
/// entry 0 when shorter than the language count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyDefinition {
    pub id: KeyIdentifier,
    pub kind: KeyKind,
    /// Unshifted text per language.
    pub primary_text: Vec<String>,
    /// Text emitted while shift is held, per language. `None` means the key
    /// falls through to the case rule.
    pub shifted_text: Vec<Option<String>>,
    /// Label drawn on the key, per language.
    pub labels: Vec<String>,
    /// Fixed keys never change case.
    pub fixed: bool,
    /// Capitalize the first letter of the label for display.
    pub capitalize_display: bool,
}

impl KeyDefinition {
    /// A printing key whose label is its primary text.
    pub fn printing(id: &str, primary: &[&str], shifted: &[Option<&str>]) -> Self {
        let primary_text: Vec<String> = primary.iter().map(|s| s.to_string()).collect();
        Self {
            id: KeyIdentifier::new(id),
            kind: KeyKind::Text,
            labels: primary_text.clone(),
            primary_text,
            shifted_text: shifted.iter().map(|s| s.map(str::to_string)).collect(),
            fixed: false,
            capitalize_display: false,
        }
    }

    /// A fixed key with the same text and label in every language.
    pub fn fixed(id: &str, kind: KeyKind, text: &str, label: &str) -> Self {
        Self {
            id: KeyIdentifier::new(id),
            kind,
            primary_text: vec![text.to_string()],
            shifted_text: Vec::new(),
            labels: vec![label.to_string()],
            fixed: true,
            capitalize_display: true,
        }
    }

    pub fn primary(&self, language: usize) -> &str {
        pick(&self.primary_text, language).map_or("", String::as_str)
    }

    pub fn shifted(&self, language: usize) -> Option<&str> {
        pick(&self.shifted_text, language).and_then(|s| s.as_deref())
    }

    /// The label for `language`, capitalized when the key asks for it.
    pub fn label(&self, language: usize) -> String {
        let raw = pick(&self.labels, language).map_or("", String::as_str);
        if !self.capitalize_display {
            return raw.to_string();
        }
        let mut chars = raw.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

fn pick<T>(values: &[T], language: usize) -> Option<&T> {
    values.get(language).or_else(|| values.first())
}

/// Lookup table from key identifier to key definition.
///
/// Built once; there is no mutation API.
#[derive(Debug, Clone)]
pub struct KeyTable {
    languages: Vec<Language>,
    keys: Vec<KeyDefinition>,
    index: HashMap<KeyIdentifier, usize>,
    rows: Vec<Vec<KeyIdentifier>>,
}

impl KeyTable {
    /// Builds a table from rows of keys in rendering order.
    pub fn new(languages: Vec<Language>, rows: Vec<Vec<KeyDefinition>>) -> Result<Self> {
        if languages.is_empty() {
            return Err(Error::NoLanguages);
        }

        let mut keys = Vec::new();
        let mut index = HashMap::new();
        let mut row_ids = Vec::with_capacity(rows.len());
        for row in rows {
            let mut ids = Vec::with_capacity(row.len());
            for def in row {
                if index.contains_key(&def.id) {
                    return Err(Error::DuplicateKey(def.id.to_string()));
                }
                index.insert(def.id.clone(), keys.len());
                ids.push(def.id.clone());
                keys.push(def);
            }
            row_ids.push(ids);
        }

        Ok(Self {
            languages,
            keys,
            index,
            rows: row_ids,
        })
    }

    /// English (Latin) and Russian (Cyrillic) on a US/ЙЦУКЕН board.
    pub fn standard() -> Self {
        let languages = vec![Language::new("en", "English"), Language::new("ru", "Русский")];
        Self::new(languages, standard_rows()).expect("built-in layout is always well formed")
    }

    pub fn lookup(&self, id: &KeyIdentifier) -> Option<&KeyDefinition> {
        self.index.get(id).map(|&i| &self.keys[i])
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn language_count(&self) -> usize {
        self.languages.len()
    }

    /// Index of the language tagged `code`.
    pub fn language_index(&self, code: &str) -> Option<usize> {
        self.languages.iter().position(|l| l.code == code)
    }

    /// Key identifiers row by row, in rendering order.
    pub fn rows(&self) -> &[Vec<KeyIdentifier>] {
        &self.rows
    }

    pub fn keys(&self) -> impl Iterator<Item = &KeyDefinition> {
        self.keys.iter()
    }
}

impl Default for KeyTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn letter(id: &str, en: &str, ru: &str) -> KeyDefinition {
    KeyDefinition::printing(id, &[en, ru], &[None, None])
}

fn symbol(id: &str, primary: [&str; 2], shifted: [Option<&str>; 2]) -> KeyDefinition {
    KeyDefinition::printing(id, &primary, &shifted)
}

fn standard_rows() -> Vec<Vec<KeyDefinition>> {
    use KeyKind::*;

    vec![
        vec![
            symbol("Backquote", ["`", "ё"], [Some("~"), None]),
            symbol("Digit1", ["1", "1"], [Some("!"), Some("!")]),
            symbol("Digit2", ["2", "2"], [Some("@"), Some("\"")]),
            symbol("Digit3", ["3", "3"], [Some("#"), Some("№")]),
            symbol("Digit4", ["4", "4"], [Some("$"), Some(";")]),
            symbol("Digit5", ["5", "5"], [Some("%"), Some("%")]),
            symbol("Digit6", ["6", "6"], [Some("^"), Some(":")]),
            symbol("Digit7", ["7", "7"], [Some("&"), Some("?")]),
            symbol("Digit8", ["8", "8"], [Some("*"), Some("*")]),
            symbol("Digit9", ["9", "9"], [Some("("), Some("(")]),
            symbol("Digit0", ["0", "0"], [Some(")"), Some(")")]),
            symbol("Minus", ["-", "-"], [Some("_"), Some("_")]),
            symbol("Equal", ["=", "="], [Some("+"), Some("+")]),
            KeyDefinition::fixed("Backspace", Backspace, "", "backspace"),
        ],
        vec![
            KeyDefinition::fixed("Tab", Text, "\t", "tab"),
            letter("KeyQ", "q", "й"),
            letter("KeyW", "w", "ц"),
            letter("KeyE", "e", "у"),
            letter("KeyR", "r", "к"),
            letter("KeyT", "t", "е"),
            letter("KeyY", "y", "н"),
            letter("KeyU", "u", "г"),
            letter("KeyI", "i", "ш"),
            letter("KeyO", "o", "щ"),
            letter("KeyP", "p", "з"),
            symbol("BracketLeft", ["[", "х"], [Some("{"), None]),
            symbol("BracketRight", ["]", "ъ"], [Some("}"), None]),
            symbol("Backslash", ["\\", "\\"], [Some("|"), Some("/")]),
            KeyDefinition::fixed("Delete", Delete, "", "delete"),
        ],
        vec![
            KeyDefinition::fixed("CapsLock", CapsLock, "", "capslock"),
            letter("KeyA", "a", "ф"),
            letter("KeyS", "s", "ы"),
            letter("KeyD", "d", "в"),
            letter("KeyF", "f", "а"),
            letter("KeyG", "g", "п"),
            letter("KeyH", "h", "р"),
            letter("KeyJ", "j", "о"),
            letter("KeyK", "k", "л"),
            letter("KeyL", "l", "д"),
            symbol("Semicolon", [";", "ж"], [Some(":"), None]),
            symbol("Quote", ["'", "э"], [Some("\""), None]),
            KeyDefinition::fixed("Enter", Text, "\n", "enter"),
        ],
        vec![
            KeyDefinition::fixed("ShiftLeft", Shift, "", "shift"),
            symbol("IntlBackslash", ["\\", "\\"], [Some("|"), Some("/")]),
            letter("KeyZ", "z", "я"),
            letter("KeyX", "x", "ч"),
            letter("KeyC", "c", "с"),
            letter("KeyV", "v", "м"),
            letter("KeyB", "b", "и"),
            letter("KeyN", "n", "т"),
            letter("KeyM", "m", "ь"),
            symbol("Comma", [",", "б"], [Some("<"), None]),
            symbol("Period", [".", "ю"], [Some(">"), None]),
            symbol("Slash", ["/", "."], [Some("?"), Some(",")]),
            KeyDefinition::fixed("ArrowUp", Arrow(ArrowKey::Up), "", "↑"),
            KeyDefinition::fixed("ShiftRight", Shift, "", "shift"),
        ],
        vec![
            KeyDefinition::fixed("ControlLeft", Control, "", "ctrl"),
            KeyDefinition::fixed("MetaLeft", Meta, "", "win"),
            KeyDefinition::fixed("AltLeft", Alt, "", "alt"),
            KeyDefinition::fixed("Space", Text, " ", " "),
            KeyDefinition::fixed("AltRight", Alt, "", "alt"),
            KeyDefinition::fixed("ControlRight", Control, "", "ctrl"),
            KeyDefinition::fixed("ArrowLeft", Arrow(ArrowKey::Left), "", "←"),
            KeyDefinition::fixed("ArrowDown", Arrow(ArrowKey::Down), "", "↓"),
            KeyDefinition::fixed("ArrowRight", Arrow(ArrowKey::Right), "", "→"),
        ],
    ]
}
