//! An in-memory storage provider.

use std::collections::BTreeMap;
use std::io;
use std::sync::RwLock;
use std::time::SystemTime;

use crate::enumerate::Enumeration;
use crate::error::StorageError;
use crate::path;
use crate::provider::{FileOps, FolderOps, ItemOps};
use crate::types::{DirEntry, EntryKind, Metadata};

#[derive(Debug, Clone)]
struct MemEntry {
    kind: EntryKind,
    data: Vec<u8>,
    created: SystemTime,
}

impl MemEntry {
    fn folder() -> Self {
        Self {
            kind: EntryKind::Folder,
            data: Vec::new(),
            created: SystemTime::now(),
        }
    }

    fn file(data: Vec<u8>) -> Self {
        Self {
            kind: EntryKind::File,
            data,
            created: SystemTime::now(),
        }
    }
}

/// Storage provider that keeps everything in memory.
///
/// The substitutable fake promised by the provider seam: same observable
/// semantics as [`NativeProvider`](crate::NativeProvider) — same error
/// classes for absent paths, same replace behavior on move/copy, same
/// hidden-entry and depth rules on enumeration — with process-local state
/// and no OS access. The current and home directories both report `/`.
///
/// Paths are normalized to absolute `/`-separated form, so `"docs/a.txt"`
/// and `"/docs//a.txt"` address the same entry. The root folder `/` always
/// exists.
///
/// The internal map sits behind an `RwLock` only to satisfy the seam's
/// `&self` + `Send + Sync` contract; no cross-operation atomicity is
/// provided.
///
/// # Example
///
/// ```rust
/// use itemfs::{FileOps, ItemOps, MemoryProvider};
///
/// let storage = MemoryProvider::new();
/// storage.create_file("/greeting.txt", Some("hello")).unwrap();
/// assert!(storage.exists("/greeting.txt"));
/// assert_eq!(storage.read_text("/greeting.txt").unwrap(), "hello");
/// ```
#[derive(Debug)]
pub struct MemoryProvider {
    entries: RwLock<BTreeMap<String, MemEntry>>,
}

impl MemoryProvider {
    /// Creates an empty provider containing only the root folder `/`.
    pub fn new() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert("/".to_owned(), MemEntry::folder());
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Normalizes a path to absolute form: leading `/`, no repeated or
    /// trailing separators.
    fn normalize(path: &str) -> String {
        let mut normalized = String::with_capacity(path.len() + 1);
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            normalized.push('/');
            normalized.push_str(segment);
        }
        if normalized.is_empty() {
            normalized.push('/');
        }
        normalized
    }

    /// The key prefix addressing the strict subtree below a folder.
    fn subtree_prefix(folder: &str) -> String {
        if folder == "/" {
            "/".to_owned()
        } else {
            format!("{folder}/")
        }
    }

    fn not_found(operation: &'static str, path: &str) -> StorageError {
        StorageError::io(
            operation,
            path,
            io::Error::new(io::ErrorKind::NotFound, "no such file or directory"),
        )
    }

    fn is_a_directory(operation: &'static str, path: &str) -> StorageError {
        StorageError::io(
            operation,
            path,
            io::Error::new(io::ErrorKind::IsADirectory, "is a directory"),
        )
    }
}

impl Default for MemoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemOps for MemoryProvider {
    fn exists(&self, path: &str) -> bool {
        self.entries
            .read()
            .unwrap()
            .contains_key(&Self::normalize(path))
    }

    fn is_folder(&self, path: &str) -> bool {
        self.entries
            .read()
            .unwrap()
            .get(&Self::normalize(path))
            .is_some_and(|entry| entry.kind == EntryKind::Folder)
    }

    fn metadata(&self, path: &str) -> Result<Metadata, StorageError> {
        let normalized = Self::normalize(path);
        let entries = self.entries.read().unwrap();
        let entry = entries
            .get(&normalized)
            .ok_or_else(|| Self::not_found("metadata", &normalized))?;
        Ok(Metadata {
            kind: entry.kind,
            size: match entry.kind {
                EntryKind::File => Some(entry.data.len() as u64),
                EntryKind::Folder => Some(0),
            },
            created: Some(entry.created),
        })
    }

    fn delete(&self, path: &str) -> Result<(), StorageError> {
        let normalized = Self::normalize(path);
        let mut entries = self.entries.write().unwrap();
        let entry = entries
            .remove(&normalized)
            .ok_or_else(|| Self::not_found("delete", &normalized))?;
        if entry.kind == EntryKind::Folder {
            let prefix = Self::subtree_prefix(&normalized);
            entries.retain(|key, _| !key.starts_with(&prefix));
        }
        Ok(())
    }

    fn move_item(
        &self,
        source: &str,
        folder_path: &str,
        replace: bool,
    ) -> Result<(), StorageError> {
        let source = Self::normalize(source);
        if !self.exists(&source) {
            return Err(Self::not_found("move", &source));
        }
        self.create_folder(folder_path)?;
        let destination = Self::normalize(&path::join(folder_path, path::name(&source)));
        if replace {
            // Best-effort: a failed delete is deliberately ignored so the
            // move itself can still proceed or fail on its own terms.
            let _ = self.delete(&destination);
        } else if self.exists(&destination) {
            return Err(StorageError::AlreadyExists {
                path: destination,
                operation: "move",
            });
        }

        let mut entries = self.entries.write().unwrap();
        let prefix = Self::subtree_prefix(&source);
        let keys: Vec<String> = std::iter::once(source.clone())
            .chain(
                entries
                    .keys()
                    .filter(|key| key.starts_with(&prefix))
                    .cloned(),
            )
            .collect();
        for key in keys {
            if let Some(entry) = entries.remove(&key) {
                let relocated = format!("{destination}{}", &key[source.len()..]);
                entries.insert(relocated, entry);
            }
        }
        Ok(())
    }

    fn copy_item(
        &self,
        source: &str,
        folder_path: &str,
        replace: bool,
    ) -> Result<(), StorageError> {
        let source = Self::normalize(source);
        if !self.exists(&source) {
            return Err(Self::not_found("copy", &source));
        }
        self.create_folder(folder_path)?;
        let destination = Self::normalize(&path::join(folder_path, path::name(&source)));
        if replace {
            let _ = self.delete(&destination);
        } else if self.exists(&destination) {
            return Err(StorageError::AlreadyExists {
                path: destination,
                operation: "copy",
            });
        }

        let mut entries = self.entries.write().unwrap();
        let prefix = Self::subtree_prefix(&source);
        let copies: Vec<(String, MemEntry)> = std::iter::once(source.clone())
            .chain(
                entries
                    .keys()
                    .filter(|key| key.starts_with(&prefix))
                    .cloned(),
            )
            .filter_map(|key| {
                entries.get(&key).map(|entry| {
                    let relocated = format!("{destination}{}", &key[source.len()..]);
                    (relocated, entry.clone())
                })
            })
            .collect();
        for (key, entry) in copies {
            entries.insert(key, entry);
        }
        Ok(())
    }
}

impl FileOps for MemoryProvider {
    fn create_file(&self, path: &str, contents: Option<&str>) -> Result<(), StorageError> {
        let normalized = Self::normalize(path);
        let mut entries = self.entries.write().unwrap();
        if entries
            .get(&normalized)
            .is_some_and(|entry| entry.kind == EntryKind::Folder)
        {
            return Err(Self::is_a_directory("create", &normalized));
        }
        let parent = path::parent(&normalized);
        if !entries
            .get(parent)
            .is_some_and(|entry| entry.kind == EntryKind::Folder)
        {
            return Err(Self::not_found("create", &normalized));
        }
        let data = contents.unwrap_or_default().as_bytes().to_vec();
        entries.insert(normalized, MemEntry::file(data));
        Ok(())
    }

    fn read_bytes(&self, path: &str) -> Result<Vec<u8>, StorageError> {
        let normalized = Self::normalize(path);
        let entries = self.entries.read().unwrap();
        let entry = entries
            .get(&normalized)
            .ok_or_else(|| Self::not_found("read", &normalized))?;
        if entry.kind == EntryKind::Folder {
            return Err(Self::is_a_directory("read", &normalized));
        }
        Ok(entry.data.clone())
    }

    fn read_text(&self, path: &str) -> Result<String, StorageError> {
        let bytes = self.read_bytes(path)?;
        String::from_utf8(bytes).map_err(|_| StorageError::DamagedData {
            path: Self::normalize(path),
        })
    }

    fn write_text(&self, path: &str, text: &str) -> Result<(), StorageError> {
        let normalized = Self::normalize(path);
        let mut entries = self.entries.write().unwrap();
        match entries.get_mut(&normalized) {
            Some(entry) if entry.kind == EntryKind::Folder => {
                Err(Self::is_a_directory("write", &normalized))
            }
            Some(entry) => {
                entry.data = text.as_bytes().to_vec();
                Ok(())
            }
            None => {
                let parent = path::parent(&normalized);
                if !entries
                    .get(parent)
                    .is_some_and(|entry| entry.kind == EntryKind::Folder)
                {
                    return Err(Self::not_found("write", &normalized));
                }
                entries.insert(normalized, MemEntry::file(text.as_bytes().to_vec()));
                Ok(())
            }
        }
    }

    fn append_text(&self, path: &str, text: &str) -> Result<(), StorageError> {
        let normalized = Self::normalize(path);
        let mut entries = self.entries.write().unwrap();
        match entries.get_mut(&normalized) {
            Some(entry) if entry.kind == EntryKind::Folder => {
                Err(Self::is_a_directory("append", &normalized))
            }
            Some(entry) => {
                entry.data.extend_from_slice(text.as_bytes());
                Ok(())
            }
            // Append requires the file to exist already; no implicit create.
            None => Err(Self::not_found("append", &normalized)),
        }
    }
}

impl FolderOps for MemoryProvider {
    fn create_folder(&self, path: &str) -> Result<(), StorageError> {
        let normalized = Self::normalize(path);
        let mut entries = self.entries.write().unwrap();
        let mut built = String::new();
        for segment in normalized.split('/').filter(|s| !s.is_empty()) {
            built.push('/');
            built.push_str(segment);
            match entries.get(&built) {
                Some(entry) if entry.kind == EntryKind::File => {
                    return Err(StorageError::io(
                        "create",
                        &built,
                        io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
                    ));
                }
                Some(_) => {}
                None => {
                    entries.insert(built.clone(), MemEntry::folder());
                }
            }
        }
        Ok(())
    }

    fn enumerate(&self, path: &str, deep: bool) -> Result<Enumeration, StorageError> {
        let normalized = Self::normalize(path);
        if !self.is_folder(&normalized) {
            return Err(StorageError::EnumerationFailed { path: normalized });
        }

        let prefix = Self::subtree_prefix(&normalized);
        let entries = self.entries.read().unwrap();
        let mut listing = Vec::new();
        for (key, entry) in entries.iter() {
            if key == &normalized || !key.starts_with(&prefix) {
                continue;
            }
            let relative = &key[prefix.len()..];
            if relative.split('/').any(path::is_hidden) {
                continue;
            }
            if !deep && relative.contains('/') {
                continue;
            }
            listing.push(DirEntry {
                name: path::name(key).to_owned(),
                path: key.clone(),
                kind: entry.kind,
                size: match entry.kind {
                    EntryKind::File => Some(entry.data.len() as u64),
                    EntryKind::Folder => Some(0),
                },
            });
        }
        Ok(Enumeration::new(listing))
    }

    fn current_dir(&self) -> Result<String, StorageError> {
        Ok("/".to_owned())
    }

    fn home_dir(&self) -> Result<String, StorageError> {
        Ok("/".to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_always_exists() {
        let storage = MemoryProvider::new();
        assert!(storage.exists("/"));
        assert!(storage.is_folder("/"));
    }

    #[test]
    fn paths_are_normalized() {
        let storage = MemoryProvider::new();
        storage.create_folder("/docs").unwrap();
        storage.create_file("/docs/a.txt", Some("x")).unwrap();

        assert!(storage.exists("docs/a.txt"));
        assert!(storage.exists("/docs//a.txt"));
        assert!(storage.exists("/docs/a.txt/"));
    }

    #[test]
    fn create_folder_builds_intermediates_and_is_idempotent() {
        let storage = MemoryProvider::new();
        storage.create_folder("/a/b/c").unwrap();
        assert!(storage.is_folder("/a"));
        assert!(storage.is_folder("/a/b"));
        assert!(storage.is_folder("/a/b/c"));

        storage.create_folder("/a/b/c").unwrap();
    }

    #[test]
    fn create_folder_through_a_file_fails() {
        let storage = MemoryProvider::new();
        storage.create_file("/blocker", None).unwrap();
        assert!(storage.create_folder("/blocker/sub").is_err());
    }

    #[test]
    fn create_file_requires_an_existing_parent() {
        let storage = MemoryProvider::new();
        let err = storage.create_file("/nowhere/a.txt", None).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn delete_removes_a_folder_subtree() {
        let storage = MemoryProvider::new();
        storage.create_folder("/a/b").unwrap();
        storage.create_file("/a/b/c.txt", None).unwrap();

        storage.delete("/a").unwrap();
        assert!(!storage.exists("/a"));
        assert!(!storage.exists("/a/b"));
        assert!(!storage.exists("/a/b/c.txt"));
    }

    #[test]
    fn delete_of_missing_path_is_not_found() {
        let storage = MemoryProvider::new();
        assert!(storage.delete("/missing").unwrap_err().is_not_found());
    }

    #[test]
    fn append_requires_an_existing_file() {
        let storage = MemoryProvider::new();
        assert!(
            storage
                .append_text("/missing.txt", "x")
                .unwrap_err()
                .is_not_found()
        );
    }

    #[test]
    fn move_relocates_a_subtree() {
        let storage = MemoryProvider::new();
        storage.create_folder("/src/inner").unwrap();
        storage.create_file("/src/inner/a.txt", Some("a")).unwrap();

        storage.move_item("/src", "/dest", false).unwrap();
        assert!(!storage.exists("/src"));
        assert!(storage.is_folder("/dest/src/inner"));
        assert_eq!(storage.read_text("/dest/src/inner/a.txt").unwrap(), "a");
    }

    #[test]
    fn move_without_replace_fails_on_occupied_destination() {
        let storage = MemoryProvider::new();
        storage.create_file("/a.txt", Some("source")).unwrap();
        storage.create_folder("/dest").unwrap();
        storage.create_file("/dest/a.txt", Some("old")).unwrap();

        let err = storage.move_item("/a.txt", "/dest", false).unwrap_err();
        assert!(matches!(err, StorageError::AlreadyExists { .. }));
        assert_eq!(storage.read_text("/a.txt").unwrap(), "source");
        assert_eq!(storage.read_text("/dest/a.txt").unwrap(), "old");
    }

    #[test]
    fn copy_keeps_the_source() {
        let storage = MemoryProvider::new();
        storage.create_file("/a.txt", Some("body")).unwrap();

        storage.copy_item("/a.txt", "/backup", false).unwrap();
        assert_eq!(storage.read_text("/a.txt").unwrap(), "body");
        assert_eq!(storage.read_text("/backup/a.txt").unwrap(), "body");
    }

    #[test]
    fn enumerate_is_shallow_or_deep() {
        let storage = MemoryProvider::new();
        storage.create_folder("/top/sub").unwrap();
        storage.create_file("/top/a.txt", None).unwrap();
        storage.create_file("/top/sub/b.txt", None).unwrap();

        let shallow = storage.enumerate("/top", false).unwrap();
        assert_eq!(shallow.paths(), vec!["/top/a.txt", "/top/sub"]);

        let deep = storage.enumerate("/top", true).unwrap();
        assert_eq!(
            deep.paths(),
            vec!["/top/a.txt", "/top/sub", "/top/sub/b.txt"]
        );
    }

    #[test]
    fn enumerate_excludes_hidden_entries_and_their_subtrees() {
        let storage = MemoryProvider::new();
        storage.create_folder("/top/.git").unwrap();
        storage.create_file("/top/.git/config", None).unwrap();
        storage.create_file("/top/.hidden.txt", None).unwrap();
        storage.create_file("/top/visible.txt", None).unwrap();

        let deep = storage.enumerate("/top", true).unwrap();
        assert_eq!(deep.paths(), vec!["/top/visible.txt"]);
    }

    #[test]
    fn enumerate_of_a_file_fails() {
        let storage = MemoryProvider::new();
        storage.create_file("/plain.txt", None).unwrap();
        assert!(matches!(
            storage.enumerate("/plain.txt", false),
            Err(StorageError::EnumerationFailed { .. })
        ));
    }

    #[test]
    fn metadata_reports_size_and_creation_date() {
        let storage = MemoryProvider::new();
        storage.create_file("/a.txt", Some("12345")).unwrap();

        let meta = storage.metadata("/a.txt").unwrap();
        assert!(meta.is_file());
        assert_eq!(meta.size, Some(5));
        assert!(meta.created.is_some());
    }
}
