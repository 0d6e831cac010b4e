use std::collections::HashSet;

use crate::key::{InputSource, KeyIdentifier};
use crate::modifiers::ModifierState;
use crate::table::{ArrowKey, KeyDefinition, KeyKind, KeyTable};
use crate::types::{Action, Direction};

/// Keys a physical key-down leaves to the host's native text widget.
pub const DEFAULT_NATIVE_KEYS: &[&str] = &[
    "ArrowUp",
    "ArrowLeft",
    "ArrowDown",
    "ArrowRight",
    "Backspace",
    "Delete",
    "Enter",
];

/// Turns a key plus modifier state into a buffer action.
///
/// Resolution is a pure function of its inputs. Unknown keys resolve to
/// [`Action::NoOp`].
#[derive(Debug, Clone)]
pub struct KeyResolver {
    table: KeyTable,
    native: HashSet<KeyIdentifier>,
}

impl KeyResolver {
    pub fn new(table: KeyTable) -> Self {
        Self::with_native_keys(table, DEFAULT_NATIVE_KEYS.iter().copied())
    }

    pub fn with_native_keys<I, S>(table: KeyTable, native: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            table,
            native: native
                .into_iter()
                .map(|s| KeyIdentifier::new(s.as_ref()))
                .collect(),
        }
    }

    pub fn table(&self) -> &KeyTable {
        &self.table
    }

    /// Whether a physical key-down on `id` is left to the host.
    pub fn is_native(&self, id: &KeyIdentifier) -> bool {
        self.native.contains(id)
    }

    /// Resolves through the generic path used by virtual clicks.
    pub fn resolve(&self, id: &KeyIdentifier, state: &ModifierState) -> Action {
        let Some(def) = self.table.lookup(id) else {
            tracing::debug!(key = %id, "unknown key resolves to no-op");
            return Action::NoOp;
        };

        match def.kind {
            KeyKind::Text => Action::InsertText(self.text_for(def, state)),
            KeyKind::Backspace => Action::DeleteBackward,
            KeyKind::Delete => Action::DeleteForward,
            KeyKind::Arrow(ArrowKey::Left) => Action::MoveCaret(Direction::Left),
            KeyKind::Arrow(ArrowKey::Right) => Action::MoveCaret(Direction::Right),
            KeyKind::Arrow(ArrowKey::Up | ArrowKey::Down)
            | KeyKind::CapsLock
            | KeyKind::Shift
            | KeyKind::Control
            | KeyKind::Alt
            | KeyKind::Meta => Action::NoOp,
        }
    }

    /// Resolves an event from `source`. Physical events on native keys
    /// resolve to [`Action::NoOp`] so the host can handle them itself.
    pub fn resolve_from(
        &self,
        source: InputSource,
        id: &KeyIdentifier,
        state: &ModifierState,
    ) -> Action {
        if source == InputSource::Physical && self.is_native(id) {
            tracing::debug!(key = %id, "native key passed through");
            return Action::NoOp;
        }
        self.resolve(id, state)
    }

    /// Label for the rendered key under the current modifiers.
    pub fn display_text(&self, id: &KeyIdentifier, state: &ModifierState) -> String {
        let Some(def) = self.table.lookup(id) else {
            return String::new();
        };
        let language = state.language();
        if def.fixed {
            return def.label(language);
        }
        if state.shift_held()
            && let Some(shifted) = def.shifted(language)
        {
            return shifted.to_string();
        }
        state.apply_case(&def.label(language))
    }

    fn text_for(&self, def: &KeyDefinition, state: &ModifierState) -> String {
        let language = state.language();
        if def.fixed {
            return def.primary(language).to_string();
        }
        if state.shift_held()
            && let Some(shifted) = def.shifted(language)
        {
            return shifted.to_string();
        }
        state.apply_case(def.primary(language))
    }
}

impl Default for KeyResolver {
    fn default() -> Self {
        Self::new(KeyTable::standard())
    }
}
