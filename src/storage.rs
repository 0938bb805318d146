//! Cart Storage

use std::{
    fs,
    io::ErrorKind,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use tracing::warn;

/// Well-known key under which the serialized cart is kept.
pub const CART_STORAGE_KEY: &str = "event-booking-cart";

/// A durable slot holding the single serialized cart.
///
/// All operations fail soft: storage problems are logged and swallowed, never
/// surfaced to the caller. The cart is ephemeral session state, not a
/// transactional resource.
pub trait CartStorage: Send + Sync {
    /// Read the stored payload, if any.
    fn read(&self) -> Option<String>;

    /// Replace the stored payload.
    fn write(&self, payload: &str);

    /// Remove the stored payload.
    fn remove(&self);
}

/// In-memory slot, shared between clones. Used in tests and on hosts without
/// a writable data directory.
#[derive(Debug, Clone, Default)]
pub struct MemoryCartStorage {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryCartStorage {
    /// Create an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStorage for MemoryCartStorage {
    fn read(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }

    fn write(&self, payload: &str) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(payload.to_string());
        }
    }

    fn remove(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
    }
}

/// File-backed slot: one JSON file named after [`CART_STORAGE_KEY`] inside a
/// caller-chosen directory.
#[derive(Debug, Clone)]
pub struct FileCartStorage {
    path: PathBuf,
}

impl FileCartStorage {
    /// Create a slot rooted at `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(format!("{CART_STORAGE_KEY}.json")),
        }
    }
}

impl CartStorage for FileCartStorage {
    fn read(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => Some(payload),
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "failed to read stored cart");
                None
            }
        }
    }

    fn write(&self, payload: &str) {
        if let Err(err) = fs::write(&self.path, payload) {
            warn!(path = %self.path.display(), %err, "failed to write cart");
        }
    }

    fn remove(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => warn!(path = %self.path.display(), %err, "failed to remove stored cart"),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn memory_slot_round_trips_and_shares_state_between_clones() {
        let storage = MemoryCartStorage::new();
        let clone = storage.clone();

        storage.write("{}");

        assert_eq!(clone.read(), Some("{}".to_string()));

        clone.remove();

        assert_eq!(storage.read(), None);
    }

    #[test]
    fn file_slot_round_trips() -> TestResult {
        let dir = tempfile::tempdir()?;
        let storage = FileCartStorage::new(dir.path());

        assert_eq!(storage.read(), None);

        storage.write(r#"{"cart":true}"#);

        assert_eq!(storage.read(), Some(r#"{"cart":true}"#.to_string()));

        storage.remove();

        assert_eq!(storage.read(), None);

        Ok(())
    }

    #[test]
    fn removing_a_missing_file_is_a_no_op() -> TestResult {
        let dir = tempfile::tempdir()?;
        let storage = FileCartStorage::new(dir.path());

        storage.remove();
        storage.remove();

        Ok(())
    }
}
