// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, CoreError, Fleet, SequentialIds, StageDraft, TransitionResult, apply};
use aerocode_domain::{AircraftCategory, Employee, EmployeeId, Role, StageStatus};
use time::macros::date;

pub fn create_test_ids() -> SequentialIds {
    SequentialIds::new("id")
}

pub fn create_test_employee(id: &str, login: &str, role: Role) -> Employee {
    Employee {
        id: EmployeeId::new(id),
        name: format!("Employee {id}"),
        phone: String::new(),
        address: String::new(),
        login: login.to_string(),
        password: String::from("123"),
        role,
    }
}

pub fn create_aircraft_command(code: &str, stage_names: &[&str]) -> Command {
    Command::CreateAircraft {
        code: code.to_string(),
        model: String::from("E195-E2"),
        category: AircraftCategory::Commercial,
        capacity: 146,
        range_km: 4800,
        stages: stage_names
            .iter()
            .map(|name| StageDraft {
                name: (*name).to_string(),
                due: date!(2026 - 01 - 20),
            })
            .collect(),
    }
}

/// Fleet with the three seed employees and aircraft `X1` with stages A then B.
///
/// Stage ids come from `create_test_ids`, so A is `id1` and B is `id2`.
pub fn create_test_fleet() -> Fleet {
    let fleet: Fleet = Fleet::new(
        Vec::new(),
        vec![
            create_test_employee("F001", "admin", Role::Administrator),
            create_test_employee("F002", "engineer", Role::Engineer),
            create_test_employee("F003", "operator", Role::Operator),
        ],
    );
    apply(
        &fleet,
        create_aircraft_command("X1", &["A", "B"]),
        &mut create_test_ids(),
    )
    .unwrap()
    .new_state
}

pub fn advance(fleet: &Fleet, stage_id: &str, status: StageStatus) -> Result<Fleet, CoreError> {
    apply(
        fleet,
        Command::AdvanceStage {
            aircraft_code: String::from("X1"),
            stage_id: stage_id.to_string(),
            status,
        },
        &mut create_test_ids(),
    )
    .map(|result: TransitionResult| result.new_state)
}

pub fn stage_status(fleet: &Fleet, stage_id: &str) -> StageStatus {
    fleet
        .find_aircraft("X1")
        .unwrap()
        .find_stage(stage_id)
        .unwrap()
        .1
        .status
}
