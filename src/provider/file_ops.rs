//! Whole-file I/O operations.

use crate::error::StorageError;

/// File operations of a storage provider.
///
/// All reads and writes are whole-file; there is no streaming surface.
/// Text is UTF-8 throughout — a `&str` is UTF-8 by construction, so only
/// the read side can encounter damaged data.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`. Methods take `&self`;
/// providers with internal state use interior mutability.
pub trait FileOps: Send + Sync {
    /// Creates a file at the path, or truncates the existing one.
    ///
    /// If `contents` is supplied it is written as UTF-8 text; otherwise the
    /// file is left empty.
    ///
    /// # Errors
    ///
    /// NotFound-class [`StorageError::Io`] if the parent directory does not
    /// exist.
    fn create_file(&self, path: &str, contents: Option<&str>) -> Result<(), StorageError>;

    /// Reads the whole file as bytes.
    ///
    /// # Errors
    ///
    /// NotFound-class [`StorageError::Io`] if nothing exists at the path.
    fn read_bytes(&self, path: &str) -> Result<Vec<u8>, StorageError>;

    /// Reads the whole file as UTF-8 text.
    ///
    /// # Errors
    ///
    /// [`StorageError::DamagedData`] if the content is not valid UTF-8;
    /// NotFound-class [`StorageError::Io`] if nothing exists at the path.
    fn read_text(&self, path: &str) -> Result<String, StorageError>;

    /// Overwrites the file with the text, creating it if absent.
    ///
    /// # Errors
    ///
    /// NotFound-class [`StorageError::Io`] if the parent directory does not
    /// exist.
    fn write_text(&self, path: &str, text: &str) -> Result<(), StorageError>;

    /// Appends the text at the end of an existing file.
    ///
    /// Prior content is never reordered or truncated.
    ///
    /// # Errors
    ///
    /// NotFound-class [`StorageError::Io`] if the file does not exist.
    fn append_text(&self, path: &str, text: &str) -> Result<(), StorageError>;
}
