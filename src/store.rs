//! Todo Store
//!
//! Owns the list, the view filter, and the in-progress edit target. Every
//! successful mutation is written back to the key-value store before it
//! returns, so the persisted list always matches the in-memory one.

use thiserror::Error;

use crate::models::{Filter, Stats, TodoItem};
use crate::storage::KeyValueStore;

/// The single key holding the serialized list
pub const STORAGE_KEY: &str = "ticklist.todos";

/// Recoverable failures reported by store operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("todo text is empty")]
    EmptyInput,
    #[error("no todo with id {0}")]
    NotFound(String),
    #[error("completed todos cannot be edited")]
    ItemCompleted,
}

/// The todo list with its ephemeral view state.
///
/// `filter` and `editing_id` are UI state and are never persisted; only
/// `items` goes through the storage backend.
#[derive(Debug)]
pub struct TodoStore<S: KeyValueStore> {
    items: Vec<TodoItem>,
    filter: Filter,
    editing_id: Option<String>,
    storage: S,
}

impl<S: KeyValueStore> TodoStore<S> {
    /// Load the persisted list from `storage`.
    ///
    /// A missing key is the normal first-run state and loads as an empty
    /// list. An unparseable payload is reported and also treated as empty.
    pub fn load(storage: S) -> Self {
        let items = match storage.get(STORAGE_KEY) {
            Some(payload) => match serde_json::from_str::<Vec<TodoItem>>(&payload) {
                Ok(items) => items,
                Err(err) => {
                    leptos::logging::warn!("discarding unreadable todo list: {err}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        Self {
            items,
            filter: Filter::default(),
            editing_id: None,
            storage,
        }
    }

    /// Add a new item at the front of the list.
    pub fn add(&mut self, text: &str) -> Result<TodoItem, TodoError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(TodoError::EmptyInput);
        }

        let item = TodoItem::new(trimmed);
        self.items.insert(0, item.clone());
        self.persist();
        Ok(item)
    }

    /// Flip an item's completion state.
    pub fn toggle(&mut self, id: &str) -> Result<TodoItem, TodoError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| TodoError::NotFound(id.to_string()))?;

        item.completed = !item.completed;
        let toggled = item.clone();

        // A completed item can no longer be the edit target
        if toggled.completed && self.editing_id.as_deref() == Some(id) {
            self.editing_id = None;
        }

        self.persist();
        Ok(toggled)
    }

    /// Remove an item. Confirmation is the caller's responsibility.
    pub fn delete(&mut self, id: &str) -> Result<(), TodoError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| TodoError::NotFound(id.to_string()))?;

        self.items.remove(index);
        if self.editing_id.as_deref() == Some(id) {
            self.editing_id = None;
        }
        self.persist();
        Ok(())
    }

    /// Open an item for editing. Completed items must be toggled back to
    /// active first.
    pub fn begin_edit(&mut self, id: &str) -> Result<TodoItem, TodoError> {
        let item = self
            .items
            .iter()
            .find(|item| item.id == id)
            .ok_or_else(|| TodoError::NotFound(id.to_string()))?;

        if item.completed {
            return Err(TodoError::ItemCompleted);
        }

        let item = item.clone();
        self.editing_id = Some(item.id.clone());
        Ok(item)
    }

    /// Discard the in-progress edit without touching the list.
    pub fn cancel_edit(&mut self) {
        self.editing_id = None;
    }

    /// Replace an item's text.
    pub fn edit(&mut self, id: &str, text: &str) -> Result<TodoItem, TodoError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(TodoError::EmptyInput);
        }

        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| TodoError::NotFound(id.to_string()))?;

        if item.completed {
            return Err(TodoError::ItemCompleted);
        }

        item.text = trimmed.to_string();
        let edited = item.clone();

        if self.editing_id.as_deref() == Some(id) {
            self.editing_id = None;
        }

        self.persist();
        Ok(edited)
    }

    /// Remove every completed item and report how many were removed.
    /// Zero is a valid result; nothing is persisted in that case.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.completed);
        let removed = before - self.items.len();

        if removed > 0 {
            self.persist();
        }
        removed
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.editing_id.as_deref()
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Items visible under the current filter, in list order.
    pub fn visible_items(&self) -> Vec<TodoItem> {
        self.items
            .iter()
            .filter(|item| self.filter.matches(item))
            .cloned()
            .collect()
    }

    pub fn stats(&self) -> Stats {
        let total = self.items.len();
        let completed = self.items.iter().filter(|item| item.completed).count();
        Stats {
            total,
            active: total - completed,
            completed,
        }
    }

    /// Hand back the storage backend, dropping the in-memory state.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self) {
        // An empty list and a missing key load the same way, so emptying the
        // list clears the key instead of storing "[]"
        if self.items.is_empty() {
            self.storage.remove(STORAGE_KEY);
            return;
        }
        match serde_json::to_string(&self.items) {
            Ok(payload) => self.storage.set(STORAGE_KEY, &payload),
            Err(err) => leptos::logging::warn!("failed to serialize todo list: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn empty_store() -> TodoStore<MemoryStorage> {
        TodoStore::load(MemoryStorage::new())
    }

    #[test]
    fn test_add_prepends() {
        let mut store = empty_store();
        store.add("Buy milk").expect("add failed");
        store.add("Walk dog").expect("add failed");

        let texts: Vec<_> = store.items().iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, ["Walk dog", "Buy milk"]);
    }

    #[test]
    fn test_add_trims_text() {
        let mut store = empty_store();
        let item = store.add("  Buy milk  ").unwrap();
        assert_eq!(item.text, "Buy milk");
    }

    #[test]
    fn test_add_whitespace_only_fails() {
        let mut store = empty_store();
        assert_eq!(store.add("  "), Err(TodoError::EmptyInput));
        assert!(store.items().is_empty());
    }

    #[test]
    fn test_toggle_flips_exactly_one() {
        let mut store = empty_store();
        let a = store.add("a").unwrap();
        let b = store.add("b").unwrap();

        let toggled = store.toggle(&a.id).unwrap();
        assert!(toggled.completed);
        assert!(store.items().iter().find(|i| i.id == a.id).unwrap().completed);
        assert!(!store.items().iter().find(|i| i.id == b.id).unwrap().completed);

        let back = store.toggle(&a.id).unwrap();
        assert!(!back.completed);
    }

    #[test]
    fn test_toggle_unknown_id_fails() {
        let mut store = empty_store();
        store.add("a").unwrap();

        let err = store.toggle("missing").unwrap_err();
        assert_eq!(err, TodoError::NotFound("missing".to_string()));
        assert_eq!(store.items().len(), 1);
        assert!(!store.items()[0].completed);
    }

    #[test]
    fn test_delete_removes_item() {
        let mut store = empty_store();
        let a = store.add("a").unwrap();
        store.add("b").unwrap();

        store.delete(&a.id).unwrap();
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].text, "b");

        assert_eq!(
            store.delete(&a.id),
            Err(TodoError::NotFound(a.id.clone()))
        );
    }

    #[test]
    fn test_edit_replaces_text() {
        let mut store = empty_store();
        let item = store.add("Original").unwrap();

        let edited = store.edit(&item.id, "  Updated  ").unwrap();
        assert_eq!(edited.text, "Updated");
        assert_eq!(store.items()[0].text, "Updated");
    }

    #[test]
    fn test_edit_completed_item_fails() {
        let mut store = empty_store();
        let item = store.add("Original").unwrap();
        store.toggle(&item.id).unwrap();

        assert_eq!(store.edit(&item.id, "Updated"), Err(TodoError::ItemCompleted));
        assert_eq!(store.items()[0].text, "Original");
    }

    #[test]
    fn test_edit_empty_text_fails() {
        let mut store = empty_store();
        let item = store.add("Original").unwrap();

        assert_eq!(store.edit(&item.id, "   "), Err(TodoError::EmptyInput));
        assert_eq!(store.items()[0].text, "Original");
    }

    #[test]
    fn test_edit_unknown_id_fails() {
        let mut store = empty_store();
        assert_eq!(
            store.edit("missing", "text"),
            Err(TodoError::NotFound("missing".to_string()))
        );
    }

    #[test]
    fn test_begin_edit_tracks_target() {
        let mut store = empty_store();
        let item = store.add("a").unwrap();

        store.begin_edit(&item.id).unwrap();
        assert_eq!(store.editing_id(), Some(item.id.as_str()));

        store.cancel_edit();
        assert_eq!(store.editing_id(), None);
    }

    #[test]
    fn test_begin_edit_completed_item_fails() {
        let mut store = empty_store();
        let item = store.add("a").unwrap();
        store.toggle(&item.id).unwrap();

        assert_eq!(store.begin_edit(&item.id), Err(TodoError::ItemCompleted));
        assert_eq!(store.editing_id(), None);
    }

    #[test]
    fn test_toggle_clears_edit_target_on_completion() {
        let mut store = empty_store();
        let item = store.add("a").unwrap();

        store.begin_edit(&item.id).unwrap();
        store.toggle(&item.id).unwrap();
        assert_eq!(store.editing_id(), None);
    }

    #[test]
    fn test_save_edit_closes_edit_target() {
        let mut store = empty_store();
        let item = store.add("a").unwrap();

        store.begin_edit(&item.id).unwrap();
        store.edit(&item.id, "b").unwrap();
        assert_eq!(store.editing_id(), None);
    }

    #[test]
    fn test_clear_completed_removes_exactly_completed() {
        let mut store = empty_store();
        let ids: Vec<_> = ["a", "b", "c", "d", "e"]
            .iter()
            .map(|t| store.add(t).unwrap().id)
            .collect();
        store.toggle(&ids[1]).unwrap();
        store.toggle(&ids[3]).unwrap();

        assert_eq!(store.clear_completed(), 2);

        // Survivors keep their relative order: e, c, a (newest first)
        let texts: Vec<_> = store.items().iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, ["e", "c", "a"]);
    }

    #[test]
    fn test_clear_completed_with_nothing_completed() {
        let mut store = empty_store();
        store.add("a").unwrap();
        assert_eq!(store.clear_completed(), 0);
        assert_eq!(store.items().len(), 1);
    }

    #[test]
    fn test_visible_items_per_filter() {
        let mut store = empty_store();
        let ids: Vec<_> = ["a", "b", "c"]
            .iter()
            .map(|t| store.add(t).unwrap().id)
            .collect();
        store.toggle(&ids[1]).unwrap();

        let texts = |items: Vec<TodoItem>| -> Vec<String> {
            items.into_iter().map(|i| i.text).collect()
        };

        assert_eq!(texts(store.visible_items()), ["c", "b", "a"]);

        store.set_filter(Filter::Active);
        assert_eq!(texts(store.visible_items()), ["c", "a"]);

        store.set_filter(Filter::Completed);
        assert_eq!(texts(store.visible_items()), ["b"]);
    }

    #[test]
    fn test_stats_balance() {
        let mut store = empty_store();
        let stats = store.stats();
        assert_eq!((stats.total, stats.active, stats.completed), (0, 0, 0));

        let ids: Vec<_> = ["a", "b", "c"]
            .iter()
            .map(|t| store.add(t).unwrap().id)
            .collect();
        store.toggle(&ids[0]).unwrap();

        let stats = store.stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.active, 2);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.active + stats.completed, stats.total);
    }

    #[test]
    fn test_persistence_roundtrip() {
        let mut store = empty_store();
        let a = store.add("Buy milk").unwrap();
        let b = store.add("Walk dog").unwrap();
        store.toggle(&a.id).unwrap();

        let reloaded = TodoStore::load(store.into_storage());
        assert_eq!(reloaded.items().len(), 2);

        let loaded_a = reloaded.items().iter().find(|i| i.id == a.id).unwrap();
        assert_eq!(loaded_a.text, "Buy milk");
        assert!(loaded_a.completed);
        assert_eq!(loaded_a.created_at, a.created_at);

        let loaded_b = reloaded.items().iter().find(|i| i.id == b.id).unwrap();
        assert_eq!(loaded_b.text, "Walk dog");
        assert!(!loaded_b.completed);
        assert_eq!(loaded_b.created_at, b.created_at);
    }

    #[test]
    fn test_persistence_roundtrip_empty_list() {
        let mut store = empty_store();
        let item = store.add("a").unwrap();
        store.delete(&item.id).unwrap();

        let reloaded = TodoStore::load(store.into_storage());
        assert!(reloaded.items().is_empty());
    }

    #[test]
    fn test_emptying_the_list_clears_the_key() {
        let mut store = empty_store();
        let item = store.add("a").unwrap();
        store.delete(&item.id).unwrap();

        let storage = store.into_storage();
        assert_eq!(storage.get(STORAGE_KEY), None);
    }

    #[test]
    fn test_clear_completed_of_whole_list_clears_the_key() {
        let mut store = empty_store();
        let item = store.add("a").unwrap();
        store.toggle(&item.id).unwrap();

        assert_eq!(store.clear_completed(), 1);
        let storage = store.into_storage();
        assert_eq!(storage.get(STORAGE_KEY), None);
    }

    #[test]
    fn test_load_missing_key_is_empty() {
        let store = empty_store();
        assert!(store.items().is_empty());
        assert_eq!(store.filter(), Filter::All);
        assert_eq!(store.editing_id(), None);
    }

    #[test]
    fn test_load_unreadable_payload_is_empty() {
        let mut storage = MemoryStorage::new();
        storage.set(STORAGE_KEY, "not json");

        let store = TodoStore::load(storage);
        assert!(store.items().is_empty());
    }

    #[test]
    fn test_filter_is_not_persisted() {
        let mut store = empty_store();
        store.add("a").unwrap();
        store.set_filter(Filter::Completed);

        let reloaded = TodoStore::load(store.into_storage());
        assert_eq!(reloaded.filter(), Filter::All);
    }
}
