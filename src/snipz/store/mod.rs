//! # Storage Layer
//!
//! Persistence for snipz is a plain key-value store holding two JSON
//! documents: the full snippet array and the full category array. The
//! [`KeyValueStore`] trait is the only thing the API facade knows about it.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one `<key>.json` file per key inside a data directory.
//!   Writes go to a temp file first and are renamed into place.
//! - [`memory::InMemoryStore`]: a `HashMap`, for tests. It can be told to fail
//!   every write so the best-effort persistence path can be exercised.
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data dir>/
//! ├── code-snippets.json       # snippet array
//! ├── snippet-categories.json  # category array
//! └── config.json              # SnipzConfig (not managed by the store)
//! ```
//!
//! Every mutation rewrites the whole document for its key. There is no
//! incremental diffing and no transaction log.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Key holding the serialized snippet collection.
pub const SNIPPETS_KEY: &str = "code-snippets";

/// Key holding the serialized category collection.
pub const CATEGORIES_KEY: &str = "snippet-categories";

/// Abstract interface for the persistence collaborator.
pub trait KeyValueStore {
    /// Returns `Ok(None)` when nothing was ever stored under `key`, and
    /// [`crate::error::SnipzError::UnreadableDocument`] when something was
    /// stored but is not text.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value under `key`. Failures are reported as
    /// [`crate::error::SnipzError::PersistenceWrite`].
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
