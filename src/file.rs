//! The file item.

use std::fmt;

use crate::error::{AttributeKind, StorageError};
use crate::item::Item;
use crate::provider::{FileOps, ItemOps, StorageProvider};

/// A regular file bound to a storage provider.
///
/// Holds only the path and a non-owning reference to the provider that
/// resolves it; reads and writes delegate to the provider at call time.
///
/// A `File`'s path must never denote a directory — constructing one for a
/// directory path is a programming error and panics. Use [`File::at`] to
/// look up an existing file and [`File::create`] to make a new one.
///
/// # Example
///
/// ```rust
/// use itemfs::{File, Item, MemoryProvider};
///
/// let storage = MemoryProvider::new();
/// let file = File::create(&storage, "/todo.txt", Some("- feed cat\n")).unwrap();
/// file.append("- water plants\n").unwrap();
/// assert_eq!(file.read().unwrap(), "- feed cat\n- water plants\n");
/// assert_eq!(file.name(), "todo.txt");
/// ```
pub struct File<'fs> {
    path: String,
    storage: &'fs dyn StorageProvider,
}

impl<'fs> File<'fs> {
    /// Creates a file item for the path without checking existence.
    ///
    /// # Panics
    ///
    /// Panics if the path currently resolves to a directory.
    pub fn new(storage: &'fs dyn StorageProvider, path: impl Into<String>) -> Self {
        let path = path.into();
        assert!(
            !storage.is_folder(&path),
            "the path '{path}' isn't a file path"
        );
        Self { path, storage }
    }

    /// Returns the file at the path if it exists.
    ///
    /// # Errors
    ///
    /// [`StorageError::FileNotFound`] if nothing exists at the path.
    ///
    /// # Panics
    ///
    /// Panics if the existing entry is a directory.
    pub fn at(
        storage: &'fs dyn StorageProvider,
        path: impl Into<String>,
    ) -> Result<Self, StorageError> {
        let path = path.into();
        if !storage.exists(&path) {
            return Err(StorageError::FileNotFound { path });
        }
        Ok(Self::new(storage, path))
    }

    /// Creates a new file at the path and returns it.
    ///
    /// An existing file is truncated. If `contents` is supplied it is
    /// written as UTF-8 text.
    pub fn create(
        storage: &'fs dyn StorageProvider,
        path: impl Into<String>,
        contents: Option<&str>,
    ) -> Result<Self, StorageError> {
        let path = path.into();
        storage.create_file(&path, contents)?;
        Self::at(storage, path)
    }

    /// Appends the text at the end of the file.
    pub fn append(&self, text: &str) -> Result<(), StorageError> {
        self.storage.append_text(&self.path, text)
    }

    /// Overwrites the file with the text.
    pub fn write(&self, text: &str) -> Result<(), StorageError> {
        self.storage.write_text(&self.path, text)
    }

    /// Reads the file content as a string.
    ///
    /// # Errors
    ///
    /// [`StorageError::DamagedData`] if the content is not valid UTF-8.
    pub fn read(&self) -> Result<String, StorageError> {
        self.storage.read_text(&self.path)
    }

    /// Reads the raw file content.
    pub fn read_bytes(&self) -> Result<Vec<u8>, StorageError> {
        self.storage.read_bytes(&self.path)
    }
}

impl Item for File<'_> {
    fn path(&self) -> &str {
        &self.path
    }

    fn storage(&self) -> &dyn StorageProvider {
        self.storage
    }

    fn size(&self) -> Result<u64, StorageError> {
        let meta = self.storage.metadata(&self.path)?;
        meta.size.ok_or_else(|| StorageError::MissingAttribute {
            kind: AttributeKind::Size,
            path: self.path.clone(),
        })
    }
}

impl fmt::Debug for File<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("File")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

// Items are equal-by-path values; the provider binding carries no identity.
impl PartialEq for File<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for File<'_> {}
