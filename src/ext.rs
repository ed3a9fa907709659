//! Convenience extensions over any storage provider.

use crate::provider::StorageProvider;

/// Extension methods available on every storage provider.
///
/// Blanket-implemented, so any [`StorageProvider`] — including trait
/// objects — gets them automatically.
///
/// # Example
///
/// ```rust
/// use itemfs::{FileOps, MemoryProvider, ProviderExt};
///
/// let storage = MemoryProvider::new();
/// storage.create_file("/config.json", Some("{}")).unwrap();
///
/// assert!(storage.is_file("/config.json"));
/// assert!(!storage.is_file("/"));
/// assert!(!storage.is_file("/missing"));
/// ```
pub trait ProviderExt: StorageProvider {
    /// Returns `true` if the path points at an existing regular file.
    fn is_file(&self, path: &str) -> bool {
        self.exists(path) && !self.is_folder(path)
    }
}

// Blanket implementation - any provider gets ProviderExt for free.
impl<P: StorageProvider + ?Sized> ProviderExt for P {}

// =============================================================================
// JSON Support (Feature-Gated)
// =============================================================================

#[cfg(feature = "serde")]
mod json {
    use std::io;

    use serde::{Serialize, de::DeserializeOwned};

    use crate::error::StorageError;
    use crate::provider::StorageProvider;

    /// JSON convenience methods over whole-file text I/O.
    ///
    /// Available when the `serde` feature is enabled.
    pub trait ProviderExtJson: StorageProvider {
        /// Reads the file at the path and deserializes it as JSON.
        ///
        /// # Errors
        ///
        /// [`StorageError::DamagedData`] if the file is not UTF-8 text;
        /// [`StorageError::Io`] with `InvalidData` if the JSON cannot be
        /// parsed.
        fn read_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, StorageError> {
            let text = self.read_text(path)?;
            serde_json::from_str(&text).map_err(|e| {
                StorageError::io("read", path, io::Error::new(io::ErrorKind::InvalidData, e))
            })
        }

        /// Serializes a value as pretty-printed JSON and writes it to the
        /// file at the path.
        fn write_json<T: Serialize>(&self, path: &str, value: &T) -> Result<(), StorageError> {
            let json = serde_json::to_string_pretty(value).map_err(|e| {
                StorageError::io("write", path, io::Error::new(io::ErrorKind::InvalidData, e))
            })?;
            self.write_text(path, &json)
        }
    }

    // Blanket implementation
    impl<P: StorageProvider + ?Sized> ProviderExtJson for P {}
}

#[cfg(feature = "serde")]
pub use json::ProviderExtJson;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryProvider;
    use crate::provider::{FileOps, FolderOps, StorageProvider};

    #[test]
    fn is_file_distinguishes_kinds() {
        let storage = MemoryProvider::new();
        storage.create_file("/a.txt", None).unwrap();
        storage.create_folder("/dir").unwrap();

        assert!(storage.is_file("/a.txt"));
        assert!(!storage.is_file("/dir"));
        assert!(!storage.is_file("/missing"));
    }

    #[test]
    fn provider_ext_available_on_dyn_provider() {
        let storage = MemoryProvider::new();
        storage.create_file("/a.txt", None).unwrap();

        let storage: &dyn StorageProvider = &storage;
        assert!(storage.is_file("/a.txt"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_round_trip() {
        use super::ProviderExtJson;

        let storage = MemoryProvider::new();
        let value = serde_json::json!({ "name": "itemfs", "files": 3 });
        storage.write_json("/meta.json", &value).unwrap();

        let read: serde_json::Value = storage.read_json("/meta.json").unwrap();
        assert_eq!(read, value);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn read_json_rejects_malformed_input() {
        use super::ProviderExtJson;

        let storage = MemoryProvider::new();
        storage.create_file("/broken.json", Some("{ not json")).unwrap();

        let result: Result<serde_json::Value, _> = storage.read_json("/broken.json");
        assert!(matches!(result, Err(crate::StorageError::Io { .. })));
    }
}
