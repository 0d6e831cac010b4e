pub mod buffer;
pub mod config;
pub mod engine;
pub mod error;
pub mod key;
pub mod modifiers;
pub mod resolver;
pub mod store;
pub mod table;
pub mod traits;
pub mod types;

pub use crate::buffer::{BufferSnapshot, TextBuffer};
pub use crate::config::EngineConfig;
pub use crate::engine::{Engine, EngineBuilder, EngineSnapshot, Outcome};
pub use crate::error::{Error, Result};
pub use crate::key::{InputEvent, InputSource, KeyEvent, KeyIdentifier, KeyPhase, Modifiers};
pub use crate::modifiers::{ModifierChange, ModifierState};
pub use crate::resolver::KeyResolver;
#[cfg(feature = "clipboard")]
pub use crate::store::SystemClipboard;
pub use crate::store::{JsonFileStore, LocalClipboard, MemoryStore};
pub use crate::table::{ArrowKey, KeyDefinition, KeyKind, KeyTable, Language};
pub use crate::traits::{Clipboard, PreferenceStore};
pub use crate::types::{Action, Direction, Selection};
