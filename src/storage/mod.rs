pub mod keys;
pub mod profile;
pub mod session_store;
pub mod sqlite_store;

pub use profile::Profile;
pub use session_store::{MemoryStore, SessionStore};
pub use sqlite_store::SqliteStore;

use std::path::Path;

/// Open the SQLite store, falling back to memory so the app always starts.
pub fn open_store(path: &Path) -> Box<dyn SessionStore> {
    match SqliteStore::with_path(path) {
        Ok(store) => {
            match store.len() {
                Ok(count) => log::info!("Session store {} opened ({count} keys)", path.display()),
                Err(err) => log::warn!("Session store {} opened but unreadable: {err}", path.display()),
            }
            Box::new(store)
        }
        Err(err) => {
            log::warn!(
                "Failed to open session store {} ({err}); nothing will be persisted",
                path.display()
            );
            Box::new(MemoryStore::new())
        }
    }
}
