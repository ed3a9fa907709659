//! # itemfs
//!
//! Files and folders as polymorphic **items** over a swappable storage
//! provider.
//!
//! Consumers never call `std::fs` directly: every operation — existence
//! checks, attribute queries, traversal, creation, deletion, move, copy,
//! whole-file I/O — is routed through a single [`StorageProvider`] seam, so
//! tests can substitute an in-memory fake for the real filesystem.
//!
//! ---
//!
//! ## Quick Start
//!
//! ```rust
//! use itemfs::{Folder, Item, MemoryProvider, StorageProvider};
//!
//! fn list_names(storage: &dyn StorageProvider) -> Result<Vec<String>, itemfs::StorageError> {
//!     let root = Folder::at(storage, "/")?;
//!     root.create_file("greeting.txt", Some("hello"))?;
//!     let files = root.files(false)?;
//!     Ok(files.iter().map(|f| f.name().to_owned()).collect())
//! }
//!
//! // Production code passes a NativeProvider; tests pass a fake.
//! let storage = MemoryProvider::new();
//! assert_eq!(list_names(&storage).unwrap(), vec!["greeting.txt"]);
//! ```
//!
//! ---
//!
//! ## Core Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`StorageProvider`] | The storage seam — [`ItemOps`] + [`FileOps`] + [`FolderOps`] |
//! | [`NativeProvider`] | Provider backed by the host filesystem |
//! | [`MemoryProvider`] | In-memory provider for tests |
//! | [`Item`] | Shared contract of files and folders |
//! | [`File`] | A regular file item |
//! | [`Folder`] | A directory item |
//! | [`Enumeration`] | Materialized traversal result with file/folder views |
//! | [`StorageError`] | Error taxonomy with path context |
//!
//! The [`path`] module holds the pure path-string helpers used throughout.
//!
//! ---
//!
//! ## Items
//!
//! An item is identified solely by its path and the provider bound at
//! construction; nothing is cached, so every attribute query reflects the
//! storage at call time. A [`File`]'s path must never denote a directory
//! and a [`Folder`]'s path must always denote one — constructing the wrong
//! variant is a programming error and panics. The fallible lookups
//! ([`File::at`], [`Folder::at`]) are the usual entry points.
//!
//! ---
//!
//! ## Error Handling
//!
//! All operations return `Result<T, StorageError>`. Errors carry the path
//! (and operation) that caused them:
//!
//! ```rust
//! use itemfs::{File, MemoryProvider, StorageError};
//!
//! let storage = MemoryProvider::new();
//! match File::at(&storage, "/missing.txt") {
//!     Err(StorageError::FileNotFound { path }) => assert_eq!(path, "/missing.txt"),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```
//!
//! Two failures are deliberately swallowed rather than surfaced: the
//! best-effort delete that precedes a replace-move/copy (see
//! [`ItemOps::move_item`]), and a parent-folder lookup from an item, which
//! collapses into `None` ([`Item::parent`]).
//!
//! ---
//!
//! ## Concurrency
//!
//! Everything is synchronous, blocking I/O. Providers are `Send + Sync`
//! and take `&self`, but this layer performs no locking of its own:
//! replace-move/copy is delete-then-move, two separate storage calls, and
//! concurrent callers rely entirely on the underlying storage's per-call
//! guarantees.

// Private modules
mod enumerate;
mod error;
mod ext;
mod file;
mod folder;
mod item;
mod memory;
mod native;
pub mod path;
mod provider;
mod types;

// Public re-exports - error types
pub use error::{AttributeKind, StorageError};

// Public re-exports - core types
pub use types::{DirEntry, EntryKind, Metadata};

// Public re-exports - the provider seam
pub use provider::{FileOps, FolderOps, ItemOps, StorageProvider};

// Public re-exports - providers
pub use memory::MemoryProvider;
pub use native::NativeProvider;

// Public re-exports - items
pub use file::File;
pub use folder::Folder;
pub use item::Item;

// Public re-exports - enumeration
pub use enumerate::Enumeration;

// Public re-exports - convenience extensions
pub use ext::ProviderExt;

// Conditional re-exports
#[cfg(feature = "serde")]
pub use ext::ProviderExtJson;
