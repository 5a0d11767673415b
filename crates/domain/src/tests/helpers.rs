// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Aircraft, AircraftCategory, Employee, EmployeeId, Part, PartOrigin, PartStatus, Role, Stage,
    StageStatus, TestCategory, TestOutcome, TestRecord,
};
use time::{Date, macros::date};

pub fn create_test_stage(id: &str, name: &str, due: Date, status: StageStatus) -> Stage {
    let mut stage: Stage = Stage::new(id.to_string(), name.to_string(), due);
    stage.status = status;
    stage
}

/// Two-stage aircraft: S1 "Fuselage" then S2 "Wings", both pending.
pub fn create_test_aircraft() -> Aircraft {
    Aircraft {
        code: String::from("A1"),
        model: String::from("M"),
        category: AircraftCategory::Commercial,
        capacity: 100,
        range_km: 3000,
        stages: vec![
            create_test_stage("S1", "Fuselage", date!(2026 - 01 - 10), StageStatus::Pending),
            create_test_stage("S2", "Wings", date!(2026 - 02 - 10), StageStatus::Pending),
        ],
        parts: Vec::new(),
        tests: Vec::new(),
        report: None,
    }
}

pub fn create_test_part(id: &str, name: &str, supplier: &str, status: PartStatus) -> Part {
    Part {
        id: id.to_string(),
        name: name.to_string(),
        origin: PartOrigin::Domestic,
        supplier: supplier.to_string(),
        status,
    }
}

pub fn create_test_record(id: &str, category: TestCategory, outcome: TestOutcome) -> TestRecord {
    TestRecord {
        id: id.to_string(),
        category,
        outcome,
    }
}

pub fn create_test_employee(id: &str, login: &str, role: Role) -> Employee {
    Employee {
        id: EmployeeId::new(id),
        name: String::from("Test Employee"),
        phone: String::new(),
        address: String::new(),
        login: login.to_string(),
        password: String::from("123"),
        role,
    }
}
