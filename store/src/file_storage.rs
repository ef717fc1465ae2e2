//! Filesystem-backed session record for native targets.
//!
//! One file holds the whole record. Reads and writes are best-effort: a
//! missing or unreadable file is simply "no session".

use std::path::PathBuf;

use crate::storage::SessionStorage;

/// Filesystem-backed [`SessionStorage`].
#[derive(Clone, Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SessionStorage for FileStorage {
    fn load(&self) -> Option<String> {
        std::fs::read_to_string(&self.path).ok()
    }

    fn save(&self, raw: &str) {
        if let Some(parent) = self.path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = std::fs::write(&self.path, raw);
    }

    fn remove(&self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("todopro_test_{}_{}", std::process::id(), name))
            .join("session.json")
    }

    #[test]
    fn file_storage_roundtrip() {
        let path = temp_path("roundtrip");
        let storage = FileStorage::new(path.clone());
        assert!(storage.load().is_none());

        storage.save("{\"isAuthenticated\":false,\"user\":null}");

        // Re-open from the same path
        let reopened = FileStorage::new(path.clone());
        assert_eq!(
            reopened.load().as_deref(),
            Some("{\"isAuthenticated\":false,\"user\":null}")
        );

        reopened.remove();
        assert!(reopened.load().is_none());

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn remove_without_record_is_harmless() {
        let storage = FileStorage::new(temp_path("absent"));
        storage.remove();
        assert!(storage.load().is_none());
    }
}
