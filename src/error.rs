//! Error types for the itemfs storage abstraction.

use std::fmt;
use std::io;

/// Attributes a storage provider may be unable to report.
///
/// Carried by [`StorageError::MissingAttribute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    /// The date the item was created.
    CreationDate,
    /// The item size, in bytes.
    Size,
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeKind::CreationDate => f.write_str("creation date"),
            AttributeKind::Size => f.write_str("size"),
        }
    }
}

/// Storage error type with contextual variants.
///
/// Every variant carries the path involved. Uses `#[non_exhaustive]` for
/// forward compatibility.
///
/// # Examples
///
/// ```rust
/// use itemfs::StorageError;
///
/// let err = StorageError::FileNotFound { path: "/missing.txt".into() };
/// assert_eq!(err.to_string(), "file not found at path '/missing.txt'");
/// ```
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Nothing exists at a path that was looked up as a file.
    #[error("file not found at path '{path}'")]
    FileNotFound {
        /// The path that was looked up.
        path: String,
    },

    /// Nothing exists at a path that was looked up as a folder.
    #[error("folder not found at path '{path}'")]
    FolderNotFound {
        /// The path that was looked up.
        path: String,
    },

    /// The storage refused to create a traversal handle for a path
    /// (missing, inaccessible, or not a directory).
    #[error("cannot enumerate '{path}'")]
    EnumerationFailed {
        /// The path that could not be enumerated.
        path: String,
    },

    /// Bytes read from a file are not valid UTF-8 text.
    #[error("damaged data: '{path}' is not valid UTF-8 text")]
    DamagedData {
        /// The path of the unreadable file.
        path: String,
    },

    /// The storage reports no value for an attribute of an existing item.
    #[error("missing {kind} of item at path '{path}'")]
    MissingAttribute {
        /// The attribute that is not reported.
        kind: AttributeKind,
        /// The path of the item.
        path: String,
    },

    /// The destination of a move or copy is already occupied and
    /// replacement was not requested.
    #[error("{operation}: already exists: {path}")]
    AlreadyExists {
        /// The occupied destination path.
        path: String,
        /// The operation that failed.
        operation: &'static str,
    },

    /// An operation failed in the underlying storage.
    #[error("{operation} failed for '{path}': {source}")]
    Io {
        /// The operation that failed.
        operation: &'static str,
        /// The path involved in the operation.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl StorageError {
    /// Wraps an I/O error with the operation and path it occurred on.
    pub fn io(operation: &'static str, path: impl Into<String>, source: io::Error) -> Self {
        StorageError::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    /// Returns `true` for NotFound-class failures: a typed file/folder
    /// lookup miss, or a storage operation that failed because nothing
    /// exists at the path.
    pub fn is_not_found(&self) -> bool {
        match self {
            StorageError::FileNotFound { .. } | StorageError::FolderNotFound { .. } => true,
            StorageError::Io { source, .. } => source.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_not_found_display() {
        let err = StorageError::FileNotFound {
            path: "/a/b.txt".into(),
        };
        assert_eq!(err.to_string(), "file not found at path '/a/b.txt'");
    }

    #[test]
    fn folder_not_found_display() {
        let err = StorageError::FolderNotFound { path: "/a/b".into() };
        assert_eq!(err.to_string(), "folder not found at path '/a/b'");
    }

    #[test]
    fn missing_attribute_display() {
        let err = StorageError::MissingAttribute {
            kind: AttributeKind::CreationDate,
            path: "/a".into(),
        };
        assert_eq!(err.to_string(), "missing creation date of item at path '/a'");

        let err = StorageError::MissingAttribute {
            kind: AttributeKind::Size,
            path: "/a".into(),
        };
        assert_eq!(err.to_string(), "missing size of item at path '/a'");
    }

    #[test]
    fn already_exists_display() {
        let err = StorageError::AlreadyExists {
            path: "/dest/a.txt".into(),
            operation: "move",
        };
        assert_eq!(err.to_string(), "move: already exists: /dest/a.txt");
    }

    #[test]
    fn io_display_includes_operation_and_path() {
        let err = StorageError::io(
            "delete",
            "/a",
            io::Error::new(io::ErrorKind::NotFound, "no such file or directory"),
        );
        let text = err.to_string();
        assert!(text.contains("delete"));
        assert!(text.contains("/a"));
    }

    #[test]
    fn not_found_classification() {
        assert!(StorageError::FileNotFound { path: "/x".into() }.is_not_found());
        assert!(StorageError::FolderNotFound { path: "/x".into() }.is_not_found());
        assert!(StorageError::io("delete", "/x", io::ErrorKind::NotFound.into()).is_not_found());

        assert!(!StorageError::DamagedData { path: "/x".into() }.is_not_found());
        assert!(
            !StorageError::io("read", "/x", io::ErrorKind::PermissionDenied.into()).is_not_found()
        );
    }
}
