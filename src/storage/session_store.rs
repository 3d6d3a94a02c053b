use std::cell::RefCell;
use std::collections::HashMap;

use crate::common::StoreResult;

/// String-keyed persistent state, the desktop stand-in for browser local
/// storage. All access is synchronous on the UI thread.
pub trait SessionStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
    fn remove(&self, key: &str) -> StoreResult<()>;
}

impl<S: SessionStore + ?Sized> SessionStore for Box<S> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }
}

/// Non-persistent store for tests and `--memory` runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_get_set_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get("TT_XP").unwrap(), None);

        store.set("TT_XP", "10").unwrap();
        store.set("TT_XP", "20").unwrap();
        assert_eq!(store.get("TT_XP").unwrap().as_deref(), Some("20"));

        store.remove("TT_XP").unwrap();
        store.remove("TT_XP").unwrap();
        assert_eq!(store.get("TT_XP").unwrap(), None);
    }

    #[test]
    fn boxed_store_forwards() {
        let store: Box<dyn SessionStore> = Box::new(MemoryStore::new());
        store.set("tt-theme", "light").unwrap();
        assert_eq!(store.get("tt-theme").unwrap().as_deref(), Some("light"));
    }
}
