//! Key-Value Storage Backends
//!
//! Abstract interface over the persistent store. The browser backend wraps
//! `window.localStorage`; the in-memory backend exists for tests.

use std::collections::HashMap;

/// A durable string-keyed store holding the serialized todo list.
///
/// The store is treated as always available: a backend that cannot write
/// reports the problem and carries on rather than failing the mutation.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// `window.localStorage` backend
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    pub fn new() -> Self {
        Self
    }

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::local_storage()?.get_item(key).ok()?
    }

    fn set(&mut self, key: &str, value: &str) {
        match Self::local_storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    leptos::logging::warn!("localStorage write failed for key {key}");
                }
            }
            None => leptos::logging::warn!("localStorage is unavailable"),
        }
    }

    fn remove(&mut self, key: &str) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory backend used by the test suite
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_roundtrip() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("todos"), None);

        storage.set("todos", "[]");
        assert_eq!(storage.get("todos").as_deref(), Some("[]"));

        storage.set("todos", "[1]");
        assert_eq!(storage.get("todos").as_deref(), Some("[1]"));

        storage.remove("todos");
        assert_eq!(storage.get("todos"), None);
    }
}
