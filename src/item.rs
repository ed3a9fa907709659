//! The shared contract of files and folders.

use std::time::SystemTime;

use crate::error::{AttributeKind, StorageError};
use crate::folder::Folder;
use crate::path;
use crate::provider::{ItemOps, StorageProvider};

/// The basic interacting features of a file or folder.
///
/// Implemented by [`File`](crate::File) and [`Folder`]. An item is
/// identified solely by its path and the storage provider bound at
/// construction; no metadata is cached — every attribute query goes back to
/// the provider, and two lookups of the same path produce two independent,
/// equal-by-path values.
pub trait Item {
    /// The item path.
    fn path(&self) -> &str;

    /// The storage provider this item is bound to.
    fn storage(&self) -> &dyn StorageProvider;

    /// The resource size, in bytes.
    ///
    /// For a file this is the byte length; for a folder the recursive sum
    /// of the sizes of every regular file below it.
    ///
    /// # Errors
    ///
    /// [`StorageError::MissingAttribute`] if the storage reports no size.
    fn size(&self) -> Result<u64, StorageError>;

    /// The item name (final path segment).
    fn name(&self) -> &str {
        path::name(self.path())
    }

    /// The path extension, if the name has one.
    fn path_extension(&self) -> Option<&str> {
        path::extension(self.path())
    }

    /// The item name without its extension.
    fn name_without_extension(&self) -> &str {
        path::name_without_extension(self.path())
    }

    /// The parent folder of the item.
    ///
    /// Returns `None` when the parent path does not currently exist; the
    /// lookup failure is swallowed, not propagated.
    fn parent(&self) -> Option<Folder<'_>> {
        Folder::at(self.storage(), path::parent(self.path())).ok()
    }

    /// The date the item was created.
    ///
    /// # Errors
    ///
    /// [`StorageError::MissingAttribute`] if the storage reports no
    /// creation date for the item.
    fn creation_date(&self) -> Result<SystemTime, StorageError> {
        let meta = self.storage().metadata(self.path())?;
        meta.created.ok_or_else(|| StorageError::MissingAttribute {
            kind: AttributeKind::CreationDate,
            path: self.path().to_owned(),
        })
    }

    /// Returns the item path relative to `folder`.
    ///
    /// Best-effort: when the item does not lie under `folder`, the full
    /// path is returned unchanged.
    fn relative_path(&self, folder: &Folder<'_>) -> &str {
        path::relative_path(self.path(), folder.path())
    }

    /// Removes the item from storage.
    fn delete(&self) -> Result<(), StorageError> {
        self.storage().delete(self.path())
    }

    /// Moves the item into the folder at `folder_path`.
    ///
    /// See [`ItemOps::move_item`](crate::ItemOps::move_item) for the
    /// replace semantics. The item keeps its original path value; look the
    /// item up again at its new location to keep working with it.
    fn move_to(&self, folder_path: &str, replace: bool) -> Result<(), StorageError> {
        self.storage().move_item(self.path(), folder_path, replace)
    }

    /// Copies the item into the folder at `folder_path`.
    ///
    /// See [`ItemOps::copy_item`](crate::ItemOps::copy_item) for the
    /// replace semantics; the source remains in place.
    fn copy_to(&self, folder_path: &str, replace: bool) -> Result<(), StorageError> {
        self.storage().copy_item(self.path(), folder_path, replace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumerate::Enumeration;
    use crate::provider::{FileOps, FolderOps, ItemOps};
    use crate::types::{EntryKind, Metadata};
    use crate::File;

    /// Provider whose metadata reports no attributes at all.
    struct BareMetadataProvider;

    impl ItemOps for BareMetadataProvider {
        fn exists(&self, _: &str) -> bool {
            true
        }

        fn is_folder(&self, _: &str) -> bool {
            false
        }

        fn metadata(&self, _: &str) -> Result<Metadata, StorageError> {
            Ok(Metadata {
                kind: EntryKind::File,
                size: None,
                created: None,
            })
        }

        fn delete(&self, _: &str) -> Result<(), StorageError> {
            Ok(())
        }

        fn move_item(&self, _: &str, _: &str, _: bool) -> Result<(), StorageError> {
            Ok(())
        }

        fn copy_item(&self, _: &str, _: &str, _: bool) -> Result<(), StorageError> {
            Ok(())
        }
    }

    impl FileOps for BareMetadataProvider {
        fn create_file(&self, _: &str, _: Option<&str>) -> Result<(), StorageError> {
            Ok(())
        }

        fn read_bytes(&self, _: &str) -> Result<Vec<u8>, StorageError> {
            Ok(vec![])
        }

        fn read_text(&self, _: &str) -> Result<String, StorageError> {
            Ok(String::new())
        }

        fn write_text(&self, _: &str, _: &str) -> Result<(), StorageError> {
            Ok(())
        }

        fn append_text(&self, _: &str, _: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    impl FolderOps for BareMetadataProvider {
        fn create_folder(&self, _: &str) -> Result<(), StorageError> {
            Ok(())
        }

        fn enumerate(&self, _: &str, _: bool) -> Result<Enumeration, StorageError> {
            Ok(Enumeration::default())
        }

        fn current_dir(&self) -> Result<String, StorageError> {
            Ok("/".into())
        }

        fn home_dir(&self) -> Result<String, StorageError> {
            Ok("/".into())
        }
    }

    #[test]
    fn missing_size_surfaces_as_attribute_error() {
        let storage = BareMetadataProvider;
        let file = File::at(&storage, "/report.txt").unwrap();

        match file.size() {
            Err(StorageError::MissingAttribute { kind, path }) => {
                assert_eq!(kind, AttributeKind::Size);
                assert_eq!(path, "/report.txt");
            }
            other => panic!("expected MissingAttribute, got {other:?}"),
        }
    }

    #[test]
    fn missing_creation_date_surfaces_as_attribute_error() {
        let storage = BareMetadataProvider;
        let file = File::at(&storage, "/report.txt").unwrap();

        match file.creation_date() {
            Err(StorageError::MissingAttribute { kind, path }) => {
                assert_eq!(kind, AttributeKind::CreationDate);
                assert_eq!(path, "/report.txt");
            }
            other => panic!("expected MissingAttribute, got {other:?}"),
        }
    }

    #[test]
    fn name_accessors_derive_from_path() {
        let storage = BareMetadataProvider;
        let file = File::at(&storage, "/docs/report.final.txt").unwrap();

        assert_eq!(file.name(), "report.final.txt");
        assert_eq!(file.path_extension(), Some("txt"));
        assert_eq!(file.name_without_extension(), "report.final");
    }

    #[test]
    fn item_trait_is_object_safe() {
        fn _check(_: &dyn Item) {}
    }
}
