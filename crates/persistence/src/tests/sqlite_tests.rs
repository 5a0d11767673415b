// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::create_test_aircraft;
use crate::{RecordStore, SqliteBackend, StorageBackend, StoreConfig, seed_employees};
use aerocode_domain::Aircraft;

#[test]
fn test_sqlite_read_of_missing_key_is_none() {
    let mut backend: SqliteBackend = SqliteBackend::new_in_memory().unwrap();

    assert_eq!(backend.read("missing").unwrap(), None);
}

#[test]
fn test_sqlite_write_overwrites() {
    let mut backend: SqliteBackend = SqliteBackend::new_in_memory().unwrap();

    backend.write("k", "first").unwrap();
    backend.write("k", "second").unwrap();

    assert_eq!(backend.read("k").unwrap(), Some(String::from("second")));
}

#[test]
fn test_sqlite_in_memory_databases_are_isolated() {
    let mut first: SqliteBackend = SqliteBackend::new_in_memory().unwrap();
    let mut second: SqliteBackend = SqliteBackend::new_in_memory().unwrap();

    first.write("k", "v").unwrap();

    assert_eq!(second.read("k").unwrap(), None);
}

#[test]
fn test_sqlite_store_round_trip() {
    let mut store: RecordStore = RecordStore::open(&StoreConfig::SqliteMemory).unwrap();
    store.initialize().unwrap();

    let aircraft: Aircraft = create_test_aircraft("X9");
    store.save_aircraft(aircraft.clone()).unwrap();

    assert_eq!(store.find_aircraft("X9").unwrap(), Some(aircraft));
    assert_eq!(store.load_employees().unwrap(), seed_employees());
    assert_eq!(store.load_aircraft().unwrap().len(), 3);
}

#[test]
fn test_sqlite_file_store_survives_reopen() {
    let path: std::path::PathBuf = std::env::temp_dir().join(format!(
        "aerocode_store_test_{}.db",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    let config: StoreConfig = StoreConfig::from_path(Some(path.clone()));

    {
        let mut store: RecordStore = RecordStore::open(&config).unwrap();
        store.save_all_aircraft(&[create_test_aircraft("X9")]).unwrap();
    }

    let mut reopened: RecordStore = RecordStore::open(&config).unwrap();
    let codes: Vec<String> = reopened
        .load_aircraft()
        .unwrap()
        .into_iter()
        .map(|a| a.code)
        .collect();
    assert_eq!(codes, vec!["X9"]);

    drop(reopened);
    let _ = std::fs::remove_file(&path);
}
