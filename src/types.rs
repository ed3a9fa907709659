//! Core types for the itemfs storage abstraction.

use std::time::SystemTime;

/// Kind of a storage entry.
///
/// An entry is a [`File`](EntryKind::File) iff the storage reports it as a
/// regular file; anything else counts as a [`Folder`](EntryKind::Folder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntryKind {
    /// Regular file.
    File,
    /// Directory.
    Folder,
}

/// Metadata for a storage entry.
///
/// `None` fields model a storage that cannot report the attribute; item
/// accessors convert them into
/// [`MissingAttribute`](crate::StorageError::MissingAttribute) errors.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Kind of the entry.
    pub kind: EntryKind,
    /// Size in bytes, if the storage reports one.
    pub size: Option<u64>,
    /// Creation time, if the storage reports one.
    #[cfg_attr(feature = "serde", serde(with = "system_time_serde"))]
    pub created: Option<SystemTime>,
}

impl Metadata {
    /// Returns `true` if this is a regular file.
    #[inline]
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// Returns `true` if this is a directory.
    #[inline]
    pub fn is_folder(&self) -> bool {
        self.kind == EntryKind::Folder
    }
}

/// A single entry produced by a directory enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirEntry {
    /// Name of the entry (final path segment).
    pub name: String,
    /// Full path to the entry.
    pub path: String,
    /// Kind of the entry.
    pub kind: EntryKind,
    /// Size in bytes, if the storage reports one.
    pub size: Option<u64>,
}

impl DirEntry {
    /// Returns `true` if the entry is a regular file.
    #[inline]
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

/// Serde support for `Option<SystemTime>` (when the serde feature is enabled).
#[cfg(feature = "serde")]
mod system_time_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    pub fn serialize<S>(time: &Option<SystemTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        time.map(|t| {
            let duration = t.duration_since(UNIX_EPOCH).unwrap_or(Duration::ZERO);
            (duration.as_secs(), duration.subsec_nanos())
        })
        .serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<SystemTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parts: Option<(u64, u32)> = Deserialize::deserialize(deserializer)?;
        Ok(parts.map(|(secs, nanos)| UNIX_EPOCH + Duration::new(secs, nanos)))
    }
}
