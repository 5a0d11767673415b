// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::PathBuf;

use crate::backend::StorageBackend;
use crate::backend::memory::InMemoryBackend;
use crate::backend::sqlite::SqliteBackend;
use crate::error::PersistenceError;

/// Where a record store keeps its blobs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StoreConfig {
    /// Plain process memory.
    #[default]
    Memory,
    /// An isolated in-memory `SQLite` database.
    SqliteMemory,
    /// A `SQLite` database file.
    SqliteFile(PathBuf),
}

impl StoreConfig {
    /// Picks a file database when a path is given, plain memory otherwise.
    #[must_use]
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Memory, Self::SqliteFile)
    }

    /// Opens the configured backend.
    ///
    /// # Errors
    ///
    /// Returns an error if a database cannot be opened or migrated.
    pub fn open_backend(&self) -> Result<Box<dyn StorageBackend>, PersistenceError> {
        Ok(match self {
            Self::Memory => Box::new(InMemoryBackend::new()),
            Self::SqliteMemory => Box::new(SqliteBackend::new_in_memory()?),
            Self::SqliteFile(path) => Box::new(SqliteBackend::new_with_file(path)?),
        })
    }
}
