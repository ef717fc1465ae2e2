use std::sync::{Arc, Mutex};

/// Durable storage for the persisted session record.
///
/// Implementations are best-effort: read and write failures are swallowed
/// and surface as a missing record, never as an error.
pub trait SessionStorage: Send + Sync {
    /// Read the raw record, if one exists.
    fn load(&self) -> Option<String>;
    /// Write the raw record, replacing any previous one.
    fn save(&self, raw: &str);
    /// Delete the record entirely.
    fn remove(&self);
}

/// In-memory SessionStorage for tests and platforms without a durable backend.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    record: Arc<Mutex<Option<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        self.record.lock().unwrap().clone()
    }

    fn save(&self, raw: &str) {
        *self.record.lock().unwrap() = Some(raw.to_string());
    }

    fn remove(&self) {
        *self.record.lock().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        assert!(storage.load().is_none());

        storage.save("{\"isAuthenticated\":true}");
        assert_eq!(storage.load().as_deref(), Some("{\"isAuthenticated\":true}"));

        storage.save("{}");
        assert_eq!(storage.load().as_deref(), Some("{}"));

        storage.remove();
        assert!(storage.load().is_none());
    }

    #[test]
    fn clones_share_the_record() {
        let storage = MemoryStorage::new();
        let other = storage.clone();
        storage.save("shared");
        assert_eq!(other.load().as_deref(), Some("shared"));
    }
}
