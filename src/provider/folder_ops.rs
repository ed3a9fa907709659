//! Directory management operations.

use crate::enumerate::Enumeration;
use crate::error::StorageError;

/// Folder operations of a storage provider.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`. Methods take `&self`;
/// providers with internal state use interior mutability.
pub trait FolderOps: Send + Sync {
    /// Creates a directory at the path, with intermediate segments as
    /// needed.
    ///
    /// A no-op success if the directory already exists.
    fn create_folder(&self, path: &str) -> Result<(), StorageError>;

    /// Lists the directory at the path.
    ///
    /// With `deep == false` only immediate children are returned; with
    /// `deep == true` the full recursive subtree. Hidden entries (final
    /// segment starting with `.`) are always excluded, and a hidden
    /// directory hides its whole subtree.
    ///
    /// The result is materialized eagerly: every surviving entry is
    /// classified and sized during the traversal.
    ///
    /// # Errors
    ///
    /// [`StorageError::EnumerationFailed`] if a traversal handle cannot be
    /// created for the path (missing, inaccessible, or not a directory);
    /// [`StorageError::Io`] if any visited entry's metadata cannot be
    /// retrieved — the whole enumeration aborts, no partial results.
    fn enumerate(&self, path: &str, deep: bool) -> Result<Enumeration, StorageError>;

    /// Returns the path of the program's current working directory.
    fn current_dir(&self) -> Result<String, StorageError>;

    /// Returns the path of the current user's home directory.
    fn home_dir(&self) -> Result<String, StorageError>;
}
