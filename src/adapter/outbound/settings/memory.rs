//! In-memory settings store for testing.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::error::Result;
use crate::port::outbound::SettingsStore;

/// Settings kept in a map, with a write counter.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    values: RwLock<HashMap<(String, String), String>>,
    writes: RwLock<usize>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set` calls so far.
    pub fn writes(&self) -> usize {
        *self.writes.read()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, section: &str, key: &str) -> Result<Option<String>> {
        Ok(self
            .values
            .read()
            .get(&(section.to_string(), key.to_string()))
            .cloned())
    }

    fn set(&self, section: &str, key: &str, value: &str) -> Result<()> {
        self.values
            .write()
            .insert((section.to_string(), key.to_string()), value.to_string());
        *self.writes.write() += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get() {
        let store = MemorySettingsStore::new();
        assert_eq!(store.get("main", "role").unwrap(), None);
        store.set("main", "role", "master").unwrap();
        assert_eq!(store.get("main", "role").unwrap().as_deref(), Some("master"));
        assert_eq!(store.get("other", "role").unwrap(), None);
        assert_eq!(store.writes(), 1);
    }
}
