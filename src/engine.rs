use crate::buffer::{BufferSnapshot, TextBuffer};
use crate::config::EngineConfig;
use crate::key::{InputEvent, InputSource, KeyEvent, KeyIdentifier, KeyPhase, Modifiers};
use crate::modifiers::{ModifierChange, ModifierState};
use crate::resolver::KeyResolver;
use crate::store::MemoryStore;
use crate::table::{KeyTable, Language};
use crate::traits::{Clipboard, PreferenceStore};
use crate::types::{Action, Selection};

/// What handling one event did.
///
/// The buffer has already been updated by the time this is returned; the
/// host only needs it to refresh its visuals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// The action applied to the buffer.
    pub action: Action,
    /// Modifier or language change to reflect on the rendered keys.
    pub change: Option<ModifierChange>,
    /// The key is on the native list; the host should let its own text
    /// widget handle it.
    pub passthrough: bool,
}

impl Outcome {
    fn action(action: Action) -> Self {
        Self {
            action,
            change: None,
            passthrough: false,
        }
    }

    fn change(change: Option<ModifierChange>) -> Self {
        Self {
            action: Action::NoOp,
            change,
            passthrough: false,
        }
    }
}

/// One editing session: modifiers, resolver and text buffer.
pub struct Engine {
    resolver: KeyResolver,
    modifiers: ModifierState,
    buffer: TextBuffer,
    preferences: Box<dyn PreferenceStore>,
    preference_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSnapshot {
    pub caps_lock: bool,
    pub shift_held: bool,
    pub language: usize,
}

pub struct EngineBuilder {
    table: KeyTable,
    config: EngineConfig,
    text: String,
    preferences: Box<dyn PreferenceStore>,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            table: KeyTable::standard(),
            config: EngineConfig::default(),
            text: String::new(),
            preferences: Box::new(MemoryStore::new()),
        }
    }
}

impl EngineBuilder {
    pub fn table(mut self, table: KeyTable) -> Self {
        self.table = table;
        self
    }

    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Initial buffer content; the caret starts at its end.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn preferences(mut self, store: impl PreferenceStore + 'static) -> Self {
        self.preferences = Box::new(store);
        self
    }

    pub fn build(self) -> Engine {
        let EngineBuilder {
            table,
            config,
            text,
            preferences,
        } = self;

        let mut modifiers =
            ModifierState::new(table.language_count()).with_language(config.default_language);
        if let Some(code) = preferences.get(&config.preference_key) {
            match table.language_index(&code) {
                Some(language) => modifiers.set_language(language),
                None => tracing::warn!("ignoring stored layout language `{code}`"),
            }
        }

        Engine {
            resolver: KeyResolver::with_native_keys(table, &config.native_keys),
            modifiers,
            buffer: TextBuffer::from_text(text),
            preferences,
            preference_key: config.preference_key,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        EngineBuilder::default().build()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            caps_lock: self.modifiers.caps_lock(),
            shift_held: self.modifiers.shift_held(),
            language: self.modifiers.language(),
        }
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn buffer_snapshot(&self) -> BufferSnapshot {
        self.buffer.snapshot()
    }

    pub fn modifiers(&self) -> &ModifierState {
        &self.modifiers
    }

    pub fn table(&self) -> &KeyTable {
        self.resolver.table()
    }

    /// The active layout language.
    pub fn language(&self) -> &Language {
        &self.table().languages()[self.modifiers.language()]
    }

    /// Label for a rendered key under the current modifiers and language.
    pub fn display_text(&self, id: &KeyIdentifier) -> String {
        self.resolver.display_text(id, &self.modifiers)
    }

    /// Whether the caps-lock key should be drawn as engaged.
    pub fn caps_lock_visual_state(&self) -> bool {
        self.modifiers.caps_lock()
    }

    /// Mirrors a selection made in the host's text widget, e.g. by mouse.
    pub fn set_selection(&mut self, start: usize, end: usize) -> Selection {
        self.buffer.set_selection(start, end);
        self.buffer.selection()
    }

    /// Advances the layout language and remembers the choice.
    pub fn switch_language(&mut self) -> usize {
        let language = self.modifiers.switch_language();
        self.persist_language();
        language
    }

    pub fn handle_event<C: Clipboard>(&mut self, clipboard: &mut C, input: InputEvent) -> Outcome {
        match input {
            InputEvent::Key(ke) => match ke.phase {
                KeyPhase::Down => self.key_down(clipboard, &ke),
                KeyPhase::Up => self.key_up(&ke),
            },
            InputEvent::Click(id) => self.click(&id),
        }
    }

    fn key_down<C: Clipboard>(&mut self, clipboard: &mut C, ke: &KeyEvent) -> Outcome {
        let change = self.modifiers.on_key_down(&ke.id);

        let chord = (ke.id.is_shift() && ke.mods.contains(Modifiers::ALT))
            || (ke.id.is_alt() && ke.mods.contains(Modifiers::SHIFT));
        if chord {
            let switched = self.modifiers.on_switch_chord();
            if switched.is_some() {
                self.persist_language();
            }
            return Outcome::change(switched.map(ModifierChange::Language).or(change));
        }
        if change.is_some() {
            return Outcome::change(change);
        }

        if ke.mods.contains(Modifiers::CTRL) {
            return self.shortcut(clipboard, &ke.id);
        }
        if ke.mods.intersects(Modifiers::ALT | Modifiers::META) {
            return Outcome::action(Action::NoOp);
        }

        // Trust the event's shift flag when the shift key-down was missed.
        let state = if ke.mods.contains(Modifiers::SHIFT) && !self.modifiers.shift_held() {
            self.modifiers.clone().with_shift(true)
        } else {
            self.modifiers.clone()
        };
        let action = self
            .resolver
            .resolve_from(InputSource::Physical, &ke.id, &state);
        self.buffer.apply(&action);
        Outcome {
            action,
            change: None,
            passthrough: self.resolver.is_native(&ke.id),
        }
    }

    fn key_up(&mut self, ke: &KeyEvent) -> Outcome {
        if ke.id.is_shift() || ke.id.is_alt() {
            self.modifiers.release_chord();
        }
        Outcome::change(self.modifiers.on_key_up(&ke.id))
    }

    fn click(&mut self, id: &KeyIdentifier) -> Outcome {
        if id.is_caps_lock() {
            return Outcome::change(self.modifiers.on_key_down(id));
        }
        if id.is_shift() {
            return Outcome::change(Some(self.modifiers.toggle_shift()));
        }
        let action = self
            .resolver
            .resolve_from(InputSource::Virtual, id, &self.modifiers);
        self.buffer.apply(&action);
        Outcome::action(action)
    }

    fn shortcut<C: Clipboard>(&mut self, clipboard: &mut C, id: &KeyIdentifier) -> Outcome {
        let action = match id.as_str() {
            "keya" => Action::SelectAll,
            "keyc" => {
                let selected = self.buffer.selected_text();
                if !selected.is_empty() {
                    clipboard.set(selected.to_string());
                }
                Action::NoOp
            }
            "keyx" => {
                let selected = self.buffer.selected_text();
                if selected.is_empty() {
                    Action::NoOp
                } else {
                    clipboard.set(selected.to_string());
                    Action::DeleteBackward
                }
            }
            "keyv" => match clipboard.get() {
                Some(text) => Action::InsertText(text),
                None => Action::NoOp,
            },
            _ => {
                return Outcome {
                    action: Action::NoOp,
                    change: None,
                    passthrough: self.resolver.is_native(id),
                };
            }
        };
        self.buffer.apply(&action);
        Outcome::action(action)
    }

    fn persist_language(&mut self) {
        let language = self.language().clone();
        tracing::info!("switched layout language to {} ({})", language.name, language.code);
        if let Err(err) = self.preferences.set(&self.preference_key, &language.code) {
            tracing::warn!("failed to persist layout language: {err}");
        }
    }
}
