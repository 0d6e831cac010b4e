use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use vkbd::Error;
use vkbd::traits::PreferenceStore;

/// Store whose contents stay visible to the test after the engine takes it.
#[derive(Default, Debug, Clone)]
pub struct SharedStore {
    values: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<RefCell<usize>>,
}

impl SharedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    pub fn writes(&self) -> usize {
        *self.writes.borrow()
    }
}

impl PreferenceStore for SharedStore {
    fn get(&self, key: &str) -> Option<String> {
        self.value(key)
    }

    fn set(&mut self, key: &str, value: &str) -> vkbd::Result<()> {
        *self.writes.borrow_mut() += 1;
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store that refuses every write.
#[derive(Default, Debug, Clone, Copy)]
pub struct ReadOnlyStore;

impl PreferenceStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, _key: &str, _value: &str) -> vkbd::Result<()> {
        Err(Error::Io {
            path: "prefs.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        })
    }
}
