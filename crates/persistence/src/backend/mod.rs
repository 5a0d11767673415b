// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Storage backends.
//!
//! A backend is a flat map from blob key to text. It knows nothing about
//! aircraft or employees; encoding and seeding live in the record store.
//!
//! ## Backend Support
//!
//! - `memory`: `HashMap` backend for tests
//! - `sqlite`: `SQLite` backend, in-memory or file based

pub mod memory;
pub mod sqlite;

use crate::error::PersistenceError;

/// Keyed blob storage.
pub trait StorageBackend {
    /// Reads the blob stored under `key`, or `None` if it was never written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn read(&mut self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Replaces the blob stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;
}
