// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Record store for the AeroCode tracker.
//!
//! Aircraft and employees are persisted as two independent JSON blobs,
//! `aerocodeAircraft` and `aerocodeEmployees`. Every save overwrites the
//! whole collection. A collection that has never been written loads as the
//! seed data.
//!
//! ## Backends
//!
//! - `InMemoryBackend`: a `HashMap`, used by unit tests
//! - `SqliteBackend`: Diesel over `SQLite`, in-memory or file based
//!
//! ## Concurrency
//!
//! Each operation is load, change, save with no isolation between callers.
//! Two writers sharing one database can lose each other's updates; callers
//! are expected to serialize access.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod backend;
mod config;
mod data_models;
mod diesel_schema;
mod error;
mod seed;

#[cfg(test)]
mod tests;

use aerocode::{Collection, Fleet, TransitionResult};
use aerocode_domain::{Aircraft, Employee};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

pub use backend::StorageBackend;
pub use backend::memory::InMemoryBackend;
pub use backend::sqlite::SqliteBackend;
pub use config::StoreConfig;
pub use error::PersistenceError;
pub use seed::{seed_aircraft, seed_employees};

/// Blob key for the aircraft collection.
pub const AIRCRAFT_KEY: &str = "aerocodeAircraft";
/// Blob key for the employee collection.
pub const EMPLOYEES_KEY: &str = "aerocodeEmployees";

/// Typed access to the two persisted collections.
///
/// Not safe for concurrent writers; see the crate documentation.
pub struct RecordStore {
    backend: Box<dyn StorageBackend>,
}

impl RecordStore {
    /// Wraps an already opened backend.
    #[must_use]
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Creates a store over a fresh in-memory backend.
    #[must_use]
    pub fn new_in_memory() -> Self {
        Self::new(Box::new(InMemoryBackend::new()))
    }

    /// Opens the backend described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be opened.
    pub fn open(config: &StoreConfig) -> Result<Self, PersistenceError> {
        Ok(Self::new(config.open_backend()?))
    }

    /// Writes the seed data for every collection that has never been saved.
    ///
    /// After this the stored contents are stable: later loads return what
    /// is stored rather than fresh seed data.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read or written.
    pub fn initialize(&mut self) -> Result<(), PersistenceError> {
        if self.backend.read(AIRCRAFT_KEY)?.is_none() {
            info!(key = AIRCRAFT_KEY, "Writing seed aircraft");
            self.save_all_aircraft(&seed_aircraft())?;
        }
        if self.backend.read(EMPLOYEES_KEY)?.is_none() {
            info!(key = EMPLOYEES_KEY, "Writing seed employees");
            self.save_employees(&seed_employees())?;
        }
        Ok(())
    }

    // ========================================================================
    // Collections
    // ========================================================================

    /// Loads every aircraft, in stored order.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::SerializationError` if the stored blob is
    /// malformed, or a backend error if it cannot be read.
    pub fn load_aircraft(&mut self) -> Result<Vec<Aircraft>, PersistenceError> {
        self.load_or(AIRCRAFT_KEY, seed_aircraft)
    }

    /// Replaces the whole aircraft collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be encoded or written.
    pub fn save_all_aircraft(&mut self, aircraft: &[Aircraft]) -> Result<(), PersistenceError> {
        self.save(AIRCRAFT_KEY, aircraft)
    }

    /// Loads every employee, in stored order.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::SerializationError` if the stored blob is
    /// malformed, or a backend error if it cannot be read.
    pub fn load_employees(&mut self) -> Result<Vec<Employee>, PersistenceError> {
        self.load_or(EMPLOYEES_KEY, seed_employees)
    }

    /// Replaces the whole employee collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be encoded or written.
    pub fn save_employees(&mut self, employees: &[Employee]) -> Result<(), PersistenceError> {
        self.save(EMPLOYEES_KEY, employees)
    }

    /// Loads both collections.
    ///
    /// # Errors
    ///
    /// Returns an error if either collection cannot be loaded.
    pub fn load_fleet(&mut self) -> Result<Fleet, PersistenceError> {
        Ok(Fleet::new(self.load_aircraft()?, self.load_employees()?))
    }

    /// Persists the collection a transition changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be written.
    pub fn persist_transition(&mut self, result: &TransitionResult) -> Result<(), PersistenceError> {
        self.persist_collection(&result.new_state, result.changed)
    }

    /// Writes one collection of `fleet`, leaving the other untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be written.
    pub fn persist_collection(
        &mut self,
        fleet: &Fleet,
        collection: Collection,
    ) -> Result<(), PersistenceError> {
        match collection {
            Collection::Aircraft => self.save_all_aircraft(&fleet.aircraft),
            Collection::Employees => self.save_employees(&fleet.employees),
        }
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    /// Returns the aircraft with the given code.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be loaded.
    pub fn find_aircraft(&mut self, code: &str) -> Result<Option<Aircraft>, PersistenceError> {
        debug!(code, "Looking up aircraft");
        Ok(self.load_aircraft()?.into_iter().find(|a| a.code == code))
    }

    /// Upserts an aircraft by code.
    ///
    /// An aircraft with the same code is replaced in place; otherwise the
    /// aircraft is appended. Duplicate checks belong to the create path, not
    /// to this method.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be loaded or written.
    pub fn save_aircraft(&mut self, aircraft: Aircraft) -> Result<(), PersistenceError> {
        let mut all: Vec<Aircraft> = self.load_aircraft()?;
        match all.iter().position(|a| a.code == aircraft.code) {
            Some(index) => all[index] = aircraft,
            None => all.push(aircraft),
        }
        self.save_all_aircraft(&all)
    }

    /// Returns the employee with the given login.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be loaded.
    pub fn find_employee_by_login(
        &mut self,
        login: &str,
    ) -> Result<Option<Employee>, PersistenceError> {
        debug!(login, "Looking up employee by login");
        Ok(self.load_employees()?.into_iter().find(|e| e.login == login))
    }

    fn load_or<T: DeserializeOwned>(
        &mut self,
        key: &str,
        seed: fn() -> Vec<T>,
    ) -> Result<Vec<T>, PersistenceError> {
        match self.backend.read(key)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => {
                debug!(key, "Blob never written, using seed data");
                Ok(seed())
            }
        }
    }

    fn save<T: Serialize>(&mut self, key: &str, records: &[T]) -> Result<(), PersistenceError> {
        let json: String = serde_json::to_string(records)?;
        self.backend.write(key, &json)?;
        info!(key, records = records.len(), "Saved collection");
        Ok(())
    }
}
