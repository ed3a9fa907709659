//! # The storage-provider seam
//!
//! The single substitution point between items and real storage. Everything
//! above this module delegates here; nothing above it touches the OS.
//!
//! The contract is split into three component traits, composed into one:
//!
//! | Trait | Covers |
//! |-------|--------|
//! | [`ItemOps`] | Kind-agnostic item management — exists, metadata, delete, move, copy |
//! | [`FileOps`] | Whole-file I/O — create, read, write, append |
//! | [`FolderOps`] | Directory management — create, enumerate, current/home dir |
//!
//! [`StorageProvider`] is the composite with a blanket implementation:
//! implement the three component traits and the composite comes for free.
//!
//! ## Thread safety
//!
//! All traits require `Send + Sync` and take `&self`; providers with
//! internal state use interior mutability. This layer adds no locking of
//! its own — concurrent callers rely on the underlying storage's per-call
//! guarantees.
//!
//! ## Object safety
//!
//! All traits are object-safe; items hold a `&dyn StorageProvider`.

mod file_ops;
mod folder_ops;
mod item_ops;

pub use file_ops::FileOps;
pub use folder_ops::FolderOps;
pub use item_ops::ItemOps;

/// A complete storage provider.
///
/// The only component that performs real storage operations, and the only
/// seam for substitution: pass a [`NativeProvider`](crate::NativeProvider)
/// to touch the host filesystem, or a
/// [`MemoryProvider`](crate::MemoryProvider) (or any other implementation)
/// in tests.
///
/// # Blanket Implementation
///
/// Automatically implemented for any type implementing [`ItemOps`],
/// [`FileOps`], and [`FolderOps`] — never implement `StorageProvider`
/// directly.
///
/// # Example
///
/// ```rust
/// use itemfs::{FileOps, FolderOps, ItemOps, MemoryProvider, StorageProvider};
///
/// fn stage_report(storage: &dyn StorageProvider) -> Result<(), itemfs::StorageError> {
///     storage.create_folder("/reports")?;
///     storage.create_file("/reports/latest.txt", Some("ok"))?;
///     storage.move_item("/reports/latest.txt", "/reports/archive", false)
/// }
///
/// let storage = MemoryProvider::new();
/// stage_report(&storage).unwrap();
/// assert!(storage.exists("/reports/archive/latest.txt"));
/// ```
pub trait StorageProvider: ItemOps + FileOps + FolderOps {}

// Blanket implementation - implementing the three component traits is enough.
impl<T: ItemOps + FileOps + FolderOps> StorageProvider for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_provider_is_object_safe() {
        fn _check(_: &dyn StorageProvider) {}
    }

    #[test]
    fn component_traits_are_object_safe() {
        fn _item(_: &dyn ItemOps) {}
        fn _file(_: &dyn FileOps) {}
        fn _folder(_: &dyn FolderOps) {}
    }
}
