//! Kind-agnostic item management operations.

use crate::error::StorageError;
use crate::types::Metadata;

/// Item management operations of a storage provider.
///
/// These apply to files and directories alike; the caller does not need to
/// know which kind sits at a path.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`. Methods take `&self`;
/// providers with internal state use interior mutability.
pub trait ItemOps: Send + Sync {
    /// Returns `true` if a file or directory exists at the path.
    ///
    /// Never fails — an inaccessible path reads as absent.
    fn exists(&self, path: &str) -> bool;

    /// Returns `true` if the path is a directory.
    ///
    /// Returns `false` for non-existent paths.
    fn is_folder(&self, path: &str) -> bool;

    /// Returns the metadata of the entry at the path.
    ///
    /// # Errors
    ///
    /// NotFound-class [`StorageError::Io`] if nothing exists at the path.
    fn metadata(&self, path: &str) -> Result<Metadata, StorageError>;

    /// Removes the file or directory at the path.
    ///
    /// Directories are removed recursively.
    ///
    /// # Errors
    ///
    /// NotFound-class [`StorageError::Io`] if nothing exists at the path.
    fn delete(&self, path: &str) -> Result<(), StorageError>;

    /// Moves the entry at `source` into the folder at `folder_path`,
    /// keeping its name.
    ///
    /// The destination folder is created, with intermediate segments, if it
    /// does not exist.
    ///
    /// With `replace == false`, an occupied destination name fails with
    /// [`StorageError::AlreadyExists`] and the pre-existing entry is left
    /// untouched — no partial move. With `replace == true`, any existing
    /// destination entry is deleted first; that deletion is best-effort and
    /// its failure is deliberately ignored, so the move itself still
    /// proceeds or fails on its own terms.
    ///
    /// The delete and the move are two separate storage calls, not one
    /// atomic operation: a crash between them can leave the destination
    /// missing entirely.
    ///
    /// # Errors
    ///
    /// [`StorageError::AlreadyExists`] on an occupied destination without
    /// `replace`; otherwise whatever the underlying storage reports.
    fn move_item(
        &self,
        source: &str,
        folder_path: &str,
        replace: bool,
    ) -> Result<(), StorageError>;

    /// Copies the entry at `source` into the folder at `folder_path`,
    /// keeping its name.
    ///
    /// Identical destination-creation and replace semantics as
    /// [`move_item`](Self::move_item) — including the non-atomic
    /// delete-then-copy window — but the source remains at its original
    /// location afterwards. Directories are copied recursively.
    ///
    /// # Errors
    ///
    /// [`StorageError::AlreadyExists`] on an occupied destination without
    /// `replace`; otherwise whatever the underlying storage reports.
    fn copy_item(
        &self,
        source: &str,
        folder_path: &str,
        replace: bool,
    ) -> Result<(), StorageError>;
}
