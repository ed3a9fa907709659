//! The storage provider backed by the host filesystem.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use walkdir::WalkDir;

use crate::enumerate::Enumeration;
use crate::error::StorageError;
use crate::path;
use crate::provider::{FileOps, FolderOps, ItemOps};
use crate::types::{DirEntry, EntryKind, Metadata};

/// Storage provider backed by the host filesystem.
///
/// The only component in the crate that touches the OS: `std::fs` for file
/// and directory calls, `walkdir` for traversal, `directories` for the home
/// directory. Stateless and freely copyable; every call is a direct
/// blocking call into the OS.
///
/// # Example
///
/// ```rust,no_run
/// use itemfs::{Folder, Item, NativeProvider};
///
/// let storage = NativeProvider::new();
/// let home = Folder::home(&storage).unwrap();
/// println!("{} bytes under {}", home.size().unwrap(), home.path());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeProvider;

impl NativeProvider {
    /// Creates a native provider.
    pub fn new() -> Self {
        Self
    }

    /// Resolves the destination path for a move/copy into `folder_path`,
    /// creating the destination folder and applying the replace semantics.
    fn prepare_destination(
        &self,
        source: &str,
        folder_path: &str,
        replace: bool,
        operation: &'static str,
    ) -> Result<String, StorageError> {
        self.create_folder(folder_path)?;
        let destination = path::join(folder_path, path::name(source));
        if replace {
            // Best-effort: a failed delete is deliberately ignored so the
            // move/copy itself can still proceed or fail on its own terms.
            let _ = self.delete(&destination);
        } else if self.exists(&destination) {
            return Err(StorageError::AlreadyExists {
                path: destination,
                operation,
            });
        }
        Ok(destination)
    }
}

impl ItemOps for NativeProvider {
    fn exists(&self, path: &str) -> bool {
        Path::new(path).exists()
    }

    fn is_folder(&self, path: &str) -> bool {
        Path::new(path).is_dir()
    }

    fn metadata(&self, path: &str) -> Result<Metadata, StorageError> {
        let meta = fs::metadata(path).map_err(|e| StorageError::io("metadata", path, e))?;
        Ok(Metadata {
            kind: if meta.is_dir() {
                EntryKind::Folder
            } else {
                EntryKind::File
            },
            size: Some(meta.len()),
            created: meta.created().ok(),
        })
    }

    fn delete(&self, path: &str) -> Result<(), StorageError> {
        let result = if self.is_folder(path) {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        };
        result.map_err(|e| StorageError::io("delete", path, e))
    }

    fn move_item(
        &self,
        source: &str,
        folder_path: &str,
        replace: bool,
    ) -> Result<(), StorageError> {
        let destination = self.prepare_destination(source, folder_path, replace, "move")?;
        fs::rename(source, &destination).map_err(|e| StorageError::io("move", source, e))
    }

    fn copy_item(
        &self,
        source: &str,
        folder_path: &str,
        replace: bool,
    ) -> Result<(), StorageError> {
        let destination = self.prepare_destination(source, folder_path, replace, "copy")?;
        if self.is_folder(source) {
            copy_tree(Path::new(source), Path::new(&destination))
                .map_err(|e| StorageError::io("copy", source, e))
        } else {
            fs::copy(source, &destination)
                .map(|_| ())
                .map_err(|e| StorageError::io("copy", source, e))
        }
    }
}

impl FileOps for NativeProvider {
    fn create_file(&self, path: &str, contents: Option<&str>) -> Result<(), StorageError> {
        fs::write(path, contents.unwrap_or_default())
            .map_err(|e| StorageError::io("create", path, e))
    }

    fn read_bytes(&self, path: &str) -> Result<Vec<u8>, StorageError> {
        fs::read(path).map_err(|e| StorageError::io("read", path, e))
    }

    fn read_text(&self, path: &str) -> Result<String, StorageError> {
        let bytes = self.read_bytes(path)?;
        String::from_utf8(bytes).map_err(|_| StorageError::DamagedData {
            path: path.to_owned(),
        })
    }

    fn write_text(&self, path: &str, text: &str) -> Result<(), StorageError> {
        fs::write(path, text).map_err(|e| StorageError::io("write", path, e))
    }

    fn append_text(&self, path: &str, text: &str) -> Result<(), StorageError> {
        // Append requires the file to exist already; no implicit create.
        let mut file = fs::OpenOptions::new()
            .append(true)
            .open(path)
            .map_err(|e| StorageError::io("append", path, e))?;
        file.write_all(text.as_bytes())
            .map_err(|e| StorageError::io("append", path, e))
    }
}

impl FolderOps for NativeProvider {
    fn create_folder(&self, path: &str) -> Result<(), StorageError> {
        fs::create_dir_all(path).map_err(|e| StorageError::io("create", path, e))
    }

    fn enumerate(&self, path: &str, deep: bool) -> Result<Enumeration, StorageError> {
        if !self.is_folder(path) {
            return Err(StorageError::EnumerationFailed {
                path: path.to_owned(),
            });
        }

        let mut walk = WalkDir::new(path).min_depth(1).sort_by_file_name();
        if !deep {
            walk = walk.max_depth(1);
        }

        let mut entries = Vec::new();
        let hidden_filter = |entry: &walkdir::DirEntry| {
            // The traversal root itself must always pass the filter.
            entry.depth() == 0 || !path::is_hidden(&entry.file_name().to_string_lossy())
        };
        for entry in walk.into_iter().filter_entry(hidden_filter) {
            let entry = entry.map_err(|e| {
                let failed = e
                    .path()
                    .map_or_else(|| path.to_owned(), |p| p.to_string_lossy().into_owned());
                StorageError::io("enumerate", failed, io::Error::from(e))
            })?;
            let entry_path = entry.path().to_string_lossy().into_owned();
            let meta = entry
                .metadata()
                .map_err(|e| StorageError::io("enumerate", entry_path.clone(), io::Error::from(e)))?;
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                path: entry_path,
                kind: if meta.is_file() {
                    EntryKind::File
                } else {
                    EntryKind::Folder
                },
                size: Some(meta.len()),
            });
        }
        Ok(Enumeration::new(entries))
    }

    fn current_dir(&self) -> Result<String, StorageError> {
        let dir = std::env::current_dir().map_err(|e| StorageError::io("current dir", ".", e))?;
        Ok(dir.to_string_lossy().into_owned())
    }

    fn home_dir(&self) -> Result<String, StorageError> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.home_dir().to_string_lossy().into_owned())
            .ok_or_else(|| {
                StorageError::io(
                    "home dir",
                    "~",
                    io::Error::new(io::ErrorKind::NotFound, "no home directory"),
                )
            })
    }
}

/// Recursively copies a directory tree.
fn copy_tree(from: &Path, to: &Path) -> io::Result<()> {
    fs::create_dir_all(to)?;
    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let target = to.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_tree(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
