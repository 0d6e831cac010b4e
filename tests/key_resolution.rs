use vkbd::{
    Action, Direction, InputSource, KeyDefinition, KeyIdentifier, KeyKind, KeyResolver, KeyTable,
    Language, ModifierChange, ModifierState,
};

fn id(raw: &str) -> KeyIdentifier {
    KeyIdentifier::new(raw)
}

fn state(caps: bool, shift: bool, language: usize) -> ModifierState {
    ModifierState::new(2)
        .with_language(language)
        .with_caps_lock(caps)
        .with_shift(shift)
}

fn insert(text: &str) -> Action {
    Action::InsertText(text.to_string())
}

#[test]
fn letter_case_is_caps_xor_shift() {
    let resolver = KeyResolver::default();
    for (caps, shift, expected) in [
        (false, false, "a"),
        (true, false, "A"),
        (false, true, "A"),
        (true, true, "a"),
    ] {
        let action = resolver.resolve(&id("KeyA"), &state(caps, shift, 0));
        assert_eq!(action, insert(expected), "caps={caps} shift={shift}");
    }
}

#[test]
fn shift_inverts_caps_lock_on_cyrillic() {
    let resolver = KeyResolver::default();
    assert_eq!(resolver.resolve(&id("KeyQ"), &state(false, false, 1)), insert("й"));
    assert_eq!(resolver.resolve(&id("KeyQ"), &state(true, false, 1)), insert("Й"));
    assert_eq!(resolver.resolve(&id("KeyQ"), &state(true, true, 1)), insert("й"));
    // Russian letters on punctuation keys have no shifted text.
    assert_eq!(resolver.resolve(&id("Semicolon"), &state(false, true, 1)), insert("Ж"));
    assert_eq!(resolver.resolve(&id("Backquote"), &state(false, true, 1)), insert("Ё"));
}

#[test]
fn shifted_text_wins_over_case_rule() {
    let resolver = KeyResolver::default();
    assert_eq!(resolver.resolve(&id("Digit1"), &state(false, true, 0)), insert("!"));
    assert_eq!(resolver.resolve(&id("Digit1"), &state(true, true, 0)), insert("!"));
    assert_eq!(resolver.resolve(&id("Digit1"), &state(true, false, 0)), insert("1"));
    assert_eq!(resolver.resolve(&id("Digit3"), &state(false, true, 1)), insert("№"));
    assert_eq!(resolver.resolve(&id("Slash"), &state(false, false, 1)), insert("."));
    assert_eq!(resolver.resolve(&id("Slash"), &state(false, true, 1)), insert(","));
}

#[test]
fn fixed_keys_ignore_case() {
    let resolver = KeyResolver::default();
    let loud = state(true, true, 0);
    assert_eq!(resolver.resolve(&id("Enter"), &loud), insert("\n"));
    assert_eq!(resolver.resolve(&id("Tab"), &loud), insert("\t"));
    assert_eq!(resolver.resolve(&id("Space"), &loud), insert(" "));
}

#[test]
fn command_keys_resolve_to_edits() {
    let resolver = KeyResolver::default();
    let s = state(false, false, 0);
    assert_eq!(resolver.resolve(&id("Backspace"), &s), Action::DeleteBackward);
    assert_eq!(resolver.resolve(&id("Delete"), &s), Action::DeleteForward);
    assert_eq!(
        resolver.resolve(&id("ArrowLeft"), &s),
        Action::MoveCaret(Direction::Left)
    );
    assert_eq!(
        resolver.resolve(&id("ArrowRight"), &s),
        Action::MoveCaret(Direction::Right)
    );
    assert_eq!(resolver.resolve(&id("ArrowUp"), &s), Action::NoOp);
    assert_eq!(resolver.resolve(&id("ShiftLeft"), &s), Action::NoOp);
    assert_eq!(resolver.resolve(&id("CapsLock"), &s), Action::NoOp);
    assert_eq!(resolver.resolve(&id("ControlLeft"), &s), Action::NoOp);
}

#[test]
fn unknown_key_is_noop() {
    let resolver = KeyResolver::default();
    let s = state(false, false, 0);
    assert_eq!(resolver.resolve(&id("F13"), &s), Action::NoOp);
    assert_eq!(resolver.display_text(&id("F13"), &s), "");
}

#[test]
fn native_keys_only_pass_through_on_physical_path() {
    let resolver = KeyResolver::default();
    let s = state(false, false, 0);
    for key in ["Backspace", "Delete", "Enter", "ArrowLeft", "ArrowRight"] {
        assert_eq!(
            resolver.resolve_from(InputSource::Physical, &id(key), &s),
            Action::NoOp,
            "{key}"
        );
        assert_ne!(
            resolver.resolve_from(InputSource::Virtual, &id(key), &s),
            Action::NoOp,
            "{key}"
        );
    }
    assert_eq!(
        resolver.resolve_from(InputSource::Physical, &id("KeyB"), &s),
        insert("b")
    );

    let owning = KeyResolver::with_native_keys(KeyTable::standard(), Vec::<String>::new());
    assert_eq!(
        owning.resolve_from(InputSource::Physical, &id("Backspace"), &s),
        Action::DeleteBackward
    );
}

#[test]
fn identifiers_collapse_across_spellings() {
    assert_eq!(id("KeyA"), id("keya"));
    assert_eq!(id("KEYA"), id("a"));
    assert_eq!(id("\\"), id("Backslash"));
    assert_eq!(id("ArrowUp"), id("↑"));
    assert_eq!(id("Control"), id("ControlLeft"));
    assert_eq!(id(" "), id("Space"));
    assert_eq!(id("1"), id("Digit1"));
    assert_eq!(id("`"), id("Backquote"));
    assert!(id("CapsLock").is_caps_lock());
    assert!(id("shift").is_shift());
    assert!(id("ShiftRight").is_shift());
    assert!(id("AltRight").is_alt());

    let resolver = KeyResolver::default();
    let s = state(false, false, 0);
    assert_eq!(resolver.resolve(&id("KEYZ"), &s), insert("z"));
}

#[test]
fn display_text_follows_modifiers_and_language() {
    let resolver = KeyResolver::default();
    assert_eq!(resolver.display_text(&id("KeyA"), &state(false, false, 0)), "a");
    assert_eq!(resolver.display_text(&id("KeyA"), &state(true, false, 0)), "A");
    assert_eq!(resolver.display_text(&id("KeyA"), &state(false, false, 1)), "ф");
    assert_eq!(resolver.display_text(&id("Digit2"), &state(false, true, 0)), "@");
    assert_eq!(resolver.display_text(&id("Digit2"), &state(false, true, 1)), "\"");
    assert_eq!(resolver.display_text(&id("Backspace"), &state(false, false, 0)), "Backspace");
    assert_eq!(resolver.display_text(&id("CapsLock"), &state(true, true, 1)), "Capslock");
    assert_eq!(resolver.display_text(&id("ArrowLeft"), &state(false, false, 0)), "←");
    assert_eq!(resolver.display_text(&id("MetaLeft"), &state(false, false, 0)), "Win");
}

#[test]
fn missing_language_entry_falls_back_to_first() {
    let languages = vec![
        Language::new("en", "English"),
        Language::new("ru", "Русский"),
        Language::new("uk", "Українська"),
    ];
    let rows = vec![vec![
        KeyDefinition::printing("KeyA", &["a", "ф"], &[None]),
        KeyDefinition::fixed("Enter", KeyKind::Text, "\n", "enter"),
    ]];
    let table = KeyTable::new(languages, rows).expect("valid table");
    let resolver = KeyResolver::new(table);
    let third = ModifierState::new(3).with_language(2);
    assert_eq!(resolver.resolve(&id("KeyA"), &third), insert("a"));
    assert_eq!(resolver.resolve(&id("Enter"), &third), insert("\n"));
}

#[test]
fn table_rejects_duplicates_and_empty_language_list() {
    let dup = vec![vec![
        KeyDefinition::printing("KeyA", &["a"], &[]),
        KeyDefinition::printing("keya", &["a"], &[]),
    ]];
    assert!(matches!(
        KeyTable::new(vec![Language::new("en", "English")], dup),
        Err(vkbd::Error::DuplicateKey(key)) if key == "keya"
    ));
    assert!(matches!(
        KeyTable::new(Vec::new(), Vec::new()),
        Err(vkbd::Error::NoLanguages)
    ));
}

#[test]
fn standard_table_has_every_row_key() {
    let table = KeyTable::standard();
    assert_eq!(table.language_count(), 2);
    assert_eq!(table.language_index("ru"), Some(1));
    assert_eq!(table.rows().len(), 5);
    for row in table.rows() {
        for key in row {
            assert!(table.lookup(key).is_some(), "{key}");
        }
    }
    assert_eq!(table.keys().count(), table.rows().iter().map(Vec::len).sum::<usize>());
}

#[test]
fn caps_lock_toggles_once_per_down() {
    let mut s = ModifierState::new(2);
    assert_eq!(s.on_key_down(&id("CapsLock")), Some(ModifierChange::CapsLock(true)));
    assert_eq!(s.on_key_up(&id("CapsLock")), None);
    assert!(s.caps_lock());
    assert_eq!(s.on_key_down(&id("CapsLock")), Some(ModifierChange::CapsLock(false)));
    assert!(!s.caps_lock());
}

#[test]
fn shift_released_by_matching_key_up() {
    let mut s = ModifierState::new(2);
    assert_eq!(s.on_key_down(&id("ShiftLeft")), Some(ModifierChange::Shift(true)));
    s.on_key_down(&id("ShiftRight"));
    assert_eq!(s.on_key_up(&id("ShiftLeft")), Some(ModifierChange::Shift(true)));
    assert!(s.shift_held());
    assert_eq!(s.on_key_up(&id("ShiftRight")), Some(ModifierChange::Shift(false)));
    assert!(!s.shift_held());
    assert_eq!(s.on_key_down(&id("KeyA")), None);
}

#[test]
fn language_switch_wraps_and_debounces() {
    let mut s = ModifierState::new(2);
    assert_eq!(s.switch_language(), 1);
    assert_eq!(s.switch_language(), 0);

    assert_eq!(s.on_switch_chord(), Some(1));
    assert_eq!(s.on_switch_chord(), None);
    s.release_chord();
    assert_eq!(s.on_switch_chord(), Some(0));

    let out_of_range = ModifierState::new(2).with_language(7);
    assert_eq!(out_of_range.language(), 0);
}
