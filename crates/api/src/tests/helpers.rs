// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use aerocode_domain::{EmployeeId, Role};
use aerocode_persistence::RecordStore;

use crate::{
    AdvanceStageRequest, AircraftDetailResponse, AuthenticatedActor, CreateAircraftRequest,
    StageDefinition, advance_stage, get_aircraft,
};

/// Code of the seeded aircraft with stages Done, `InProgress`, Pending, Pending.
pub const SEED_AIRCRAFT: &str = "E195-BR01";

/// A store holding the seed fleet and employees.
pub fn create_test_store() -> RecordStore {
    let mut store: RecordStore = RecordStore::new_in_memory();
    store.initialize().expect("seed data should be written");
    store
}

fn actor(id: &str, login: &str, name: &str, role: Role) -> AuthenticatedActor {
    AuthenticatedActor {
        employee_id: EmployeeId::new(id),
        login: login.to_string(),
        name: name.to_string(),
        role,
    }
}

pub fn create_test_admin() -> AuthenticatedActor {
    actor("F001", "admin", "Ozires Silva", Role::Administrator)
}

pub fn create_test_engineer() -> AuthenticatedActor {
    actor("F002", "engineer", "Chief Engineer", Role::Engineer)
}

pub fn create_test_operator() -> AuthenticatedActor {
    actor("F003", "operator", "Factory Operator", Role::Operator)
}

pub fn create_test_aircraft_request(code: &str) -> CreateAircraftRequest {
    CreateAircraftRequest {
        code: code.to_string(),
        model: String::from("E175"),
        category: String::from("commercial"),
        capacity: 88,
        range_km: 3700,
        stages: vec![
            StageDefinition {
                name: String::from("Fuselage"),
                due: String::from("2026-07-01"),
            },
            StageDefinition {
                name: String::from("Wings"),
                due: String::from("2026-08-01"),
            },
        ],
    }
}

pub fn create_test_advance(
    aircraft_code: &str,
    stage_id: &str,
    status: &str,
) -> AdvanceStageRequest {
    AdvanceStageRequest {
        aircraft_code: aircraft_code.to_string(),
        stage_id: stage_id.to_string(),
        status: status.to_string(),
    }
}

/// Returns the aircraft's stage ids in stored order.
pub fn stage_ids(store: &mut RecordStore, code: &str) -> Vec<String> {
    let detail: AircraftDetailResponse =
        get_aircraft(store, code, &create_test_admin()).expect("aircraft should exist");
    detail.stages.into_iter().map(|s| s.id).collect()
}

/// Drives every open stage of the aircraft to done, in order.
pub fn complete_all_stages(store: &mut RecordStore, code: &str) {
    let engineer: AuthenticatedActor = create_test_engineer();
    let detail: AircraftDetailResponse =
        get_aircraft(store, code, &engineer).expect("aircraft should exist");
    for stage in detail.stages {
        if stage.status == "pending" {
            let start: AdvanceStageRequest = create_test_advance(code, &stage.id, "in_progress");
            advance_stage(store, &start, &engineer).expect("stage should start");
        }
        if stage.status != "done" {
            let finish: AdvanceStageRequest = create_test_advance(code, &stage.id, "done");
            advance_stage(store, &finish, &engineer).expect("stage should complete");
        }
    }
}
