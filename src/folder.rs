//! The folder item.

use std::fmt;

use crate::error::{AttributeKind, StorageError};
use crate::file::File;
use crate::item::Item;
use crate::path;
use crate::provider::{FolderOps, ItemOps, StorageProvider};
use crate::types::EntryKind;

/// A directory bound to a storage provider.
///
/// Holds only the path and a non-owning reference to the provider that
/// resolves it; child lookups, enumeration, and mutation delegate to the
/// provider at call time.
///
/// A `Folder`'s path must currently resolve to a directory — constructing
/// one for anything else is a programming error and panics. Use
/// [`Folder::at`] to look up an existing directory and [`Folder::create`]
/// to make a new one.
///
/// # Example
///
/// ```rust
/// use itemfs::{Folder, MemoryProvider};
///
/// let storage = MemoryProvider::new();
/// let root = Folder::at(&storage, "/").unwrap();
/// let docs = root.create_folder("docs").unwrap();
/// docs.create_file("note.txt", Some("hi")).unwrap();
///
/// assert_eq!(docs.files(false).unwrap().len(), 1);
/// assert!(!docs.is_empty().unwrap());
/// ```
pub struct Folder<'fs> {
    path: String,
    storage: &'fs dyn StorageProvider,
}

impl<'fs> Folder<'fs> {
    /// Creates a folder item for the path.
    ///
    /// # Panics
    ///
    /// Panics if the path does not currently resolve to a directory.
    pub fn new(storage: &'fs dyn StorageProvider, path: impl Into<String>) -> Self {
        let path = path.into();
        assert!(
            storage.is_folder(&path),
            "the path '{path}' isn't a folder path"
        );
        Self { path, storage }
    }

    /// Returns the folder at the path if it exists.
    ///
    /// # Errors
    ///
    /// [`StorageError::FolderNotFound`] if nothing exists at the path.
    ///
    /// # Panics
    ///
    /// Panics if the existing entry is a regular file.
    pub fn at(
        storage: &'fs dyn StorageProvider,
        path: impl Into<String>,
    ) -> Result<Self, StorageError> {
        let path = path.into();
        if !storage.exists(&path) {
            return Err(StorageError::FolderNotFound { path });
        }
        Ok(Self::new(storage, path))
    }

    /// Creates a new folder at the path, with intermediate segments as
    /// needed, and returns it.
    ///
    /// A no-op if the folder already exists.
    pub fn create(
        storage: &'fs dyn StorageProvider,
        path: impl Into<String>,
    ) -> Result<Self, StorageError> {
        let path = path.into();
        storage.create_folder(&path)?;
        Self::at(storage, path)
    }

    /// Returns the program's current working directory.
    pub fn current(storage: &'fs dyn StorageProvider) -> Result<Self, StorageError> {
        let path = storage.current_dir()?;
        Self::at(storage, path)
    }

    /// Returns the home directory of the current user.
    pub fn home(storage: &'fs dyn StorageProvider) -> Result<Self, StorageError> {
        let path = storage.home_dir()?;
        Self::at(storage, path)
    }

    /// Builds a new path by joining the passed components onto the folder
    /// path, one separator between each.
    ///
    /// Embedded separators inside components are not normalized.
    pub fn subpath(&self, components: &[&str]) -> String {
        components
            .iter()
            .fold(self.path.clone(), |base, component| {
                path::join(&base, component)
            })
    }

    /// Returns the file with the name if it exists in this folder.
    ///
    /// # Errors
    ///
    /// [`StorageError::FileNotFound`] if the folder has no such file.
    pub fn file(&self, name: &str) -> Result<File<'fs>, StorageError> {
        File::at(self.storage, self.subpath(&[name]))
    }

    /// Finds the files in this folder; the whole subtree when `deep`,
    /// immediate children otherwise.
    pub fn files(&self, deep: bool) -> Result<Vec<File<'fs>>, StorageError> {
        self.storage
            .enumerate(&self.path, deep)?
            .into_entries()
            .into_iter()
            .filter(|entry| entry.kind == EntryKind::File)
            .map(|entry| File::at(self.storage, entry.path))
            .collect()
    }

    /// Finds the folders in this folder; the whole subtree when `deep`,
    /// immediate children otherwise.
    pub fn folders(&self, deep: bool) -> Result<Vec<Folder<'fs>>, StorageError> {
        self.storage
            .enumerate(&self.path, deep)?
            .into_entries()
            .into_iter()
            .filter(|entry| entry.kind != EntryKind::File)
            .map(|entry| Folder::at(self.storage, entry.path))
            .collect()
    }

    /// Creates a new file with the name in this folder and returns it.
    ///
    /// If `contents` is supplied it is written as UTF-8 text.
    pub fn create_file(
        &self,
        name: &str,
        contents: Option<&str>,
    ) -> Result<File<'fs>, StorageError> {
        File::create(self.storage, self.subpath(&[name]), contents)
    }

    /// Creates a new folder with the name inside this one and returns it.
    pub fn create_folder(&self, name: &str) -> Result<Folder<'fs>, StorageError> {
        Folder::create(self.storage, self.subpath(&[name]))
    }

    /// Returns `true` if the folder has no visible children.
    pub fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.storage.enumerate(&self.path, false)?.is_empty())
    }

    /// Removes every direct child of the folder.
    ///
    /// One shallow pass; child folders are deleted recursively, so the
    /// folder ends up empty.
    pub fn empty_folder(&self) -> Result<(), StorageError> {
        for entry in self.storage.enumerate(&self.path, false)?.entries() {
            self.storage.delete(&entry.path)?;
        }
        Ok(())
    }
}

impl Item for Folder<'_> {
    fn path(&self) -> &str {
        &self.path
    }

    fn storage(&self) -> &dyn StorageProvider {
        self.storage
    }

    fn size(&self) -> Result<u64, StorageError> {
        let listing = self.storage.enumerate(&self.path, true)?;
        let mut total = 0u64;
        for entry in listing.files() {
            let size = entry.size.ok_or_else(|| StorageError::MissingAttribute {
                kind: AttributeKind::Size,
                path: entry.path.clone(),
            })?;
            total += size;
        }
        Ok(total)
    }
}

impl fmt::Debug for Folder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Folder")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

// Items are equal-by-path values; the provider binding carries no identity.
impl PartialEq for Folder<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for Folder<'_> {}
