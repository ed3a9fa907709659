//! Eagerly materialized directory enumeration results.

use crate::types::{DirEntry, EntryKind};

/// The materialized result of one directory traversal.
///
/// Providers build an `Enumeration` while walking a directory: every entry
/// is classified (regular file vs folder) and sized as it is visited, so a
/// per-entry metadata failure aborts the traversal inside the provider and
/// no `Enumeration` is produced. Hidden entries never appear.
///
/// The result is a finite list, not a restartable stream; the derived views
/// below are filters over the same traversal.
///
/// # Example
///
/// ```rust
/// use itemfs::{FileOps, FolderOps, MemoryProvider};
///
/// let storage = MemoryProvider::new();
/// storage.create_folder("/docs").unwrap();
/// storage.create_file("/docs/note.txt", Some("hi")).unwrap();
///
/// let listing = storage.enumerate("/docs", false).unwrap();
/// assert_eq!(listing.paths(), vec!["/docs/note.txt"]);
/// assert_eq!(listing.files().count(), 1);
/// assert_eq!(listing.folders().count(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Enumeration {
    entries: Vec<DirEntry>,
}

impl Enumeration {
    /// Creates an enumeration from already-classified entries.
    pub fn new(entries: Vec<DirEntry>) -> Self {
        Self { entries }
    }

    /// All entries, in traversal order.
    pub fn entries(&self) -> &[DirEntry] {
        &self.entries
    }

    /// Consumes the enumeration, returning all entries.
    pub fn into_entries(self) -> Vec<DirEntry> {
        self.entries
    }

    /// The standardized paths of all entries, in traversal order.
    pub fn paths(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.path.as_str()).collect()
    }

    /// The entries the storage reports as regular files.
    pub fn files(&self) -> impl Iterator<Item = &DirEntry> {
        self.entries.iter().filter(|e| e.kind == EntryKind::File)
    }

    /// The entries the storage reports as anything but a regular file.
    pub fn folders(&self) -> impl Iterator<Item = &DirEntry> {
        self.entries.iter().filter(|e| e.kind != EntryKind::File)
    }

    /// Number of entries found by the traversal.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the traversal found no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(path: &str, kind: EntryKind) -> DirEntry {
        DirEntry {
            name: crate::path::name(path).to_owned(),
            path: path.to_owned(),
            kind,
            size: Some(0),
        }
    }

    #[test]
    fn views_filter_by_kind() {
        let listing = Enumeration::new(vec![
            entry("/dir/a.txt", EntryKind::File),
            entry("/dir/sub", EntryKind::Folder),
            entry("/dir/sub/b.txt", EntryKind::File),
        ]);

        assert_eq!(listing.len(), 3);
        assert_eq!(listing.paths(), vec!["/dir/a.txt", "/dir/sub", "/dir/sub/b.txt"]);

        let files: Vec<_> = listing.files().map(|e| e.name.as_str()).collect();
        assert_eq!(files, vec!["a.txt", "b.txt"]);

        let folders: Vec<_> = listing.folders().map(|e| e.name.as_str()).collect();
        assert_eq!(folders, vec!["sub"]);
    }

    #[test]
    fn empty_enumeration() {
        let listing = Enumeration::default();
        assert!(listing.is_empty());
        assert_eq!(listing.len(), 0);
        assert_eq!(listing.files().count(), 0);
        assert_eq!(listing.folders().count(), 0);
    }

    #[test]
    fn into_entries_returns_everything() {
        let listing = Enumeration::new(vec![entry("/dir/a", EntryKind::Folder)]);
        let entries = listing.into_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path, "/dir/a");
    }
}
