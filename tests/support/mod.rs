#![allow(dead_code)]

pub mod mock_clipboard;
pub mod mock_store;

use vkbd::{InputEvent, KeyEvent, KeyIdentifier, Modifiers};

pub fn down(id: &str) -> InputEvent {
    InputEvent::Key(KeyEvent::down(id, Modifiers::empty()))
}

pub fn down_with(id: &str, mods: Modifiers) -> InputEvent {
    InputEvent::Key(KeyEvent::down(id, mods))
}

pub fn up(id: &str) -> InputEvent {
    InputEvent::Key(KeyEvent::up(id, Modifiers::empty()))
}

pub fn up_with(id: &str, mods: Modifiers) -> InputEvent {
    InputEvent::Key(KeyEvent::up(id, mods))
}

pub fn click(id: &str) -> InputEvent {
    InputEvent::Click(KeyIdentifier::new(id))
}
