// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Seed records returned for collections that have never been written.

use aerocode_domain::{
    Aircraft, AircraftCategory, Employee, EmployeeId, Part, PartOrigin, PartStatus, Role, Stage,
    StageStatus, TestCategory, TestOutcome, TestRecord,
};
use time::Date;
use time::macros::date;

fn employee(id: &str, name: &str, phone: &str, address: &str, login: &str, role: Role) -> Employee {
    Employee {
        id: EmployeeId::new(id),
        name: name.to_string(),
        phone: phone.to_string(),
        address: address.to_string(),
        login: login.to_string(),
        password: String::from("123"),
        role,
    }
}

fn stage(id: &str, name: &str, due: Date, status: StageStatus, assigned: &[&str]) -> Stage {
    Stage {
        id: id.to_string(),
        name: name.to_string(),
        due,
        status,
        assigned_employees: assigned.iter().map(|id| EmployeeId::new(id)).collect(),
    }
}

fn part(id: &str, name: &str, origin: PartOrigin, supplier: &str, status: PartStatus) -> Part {
    Part {
        id: id.to_string(),
        name: name.to_string(),
        origin,
        supplier: supplier.to_string(),
        status,
    }
}

/// The three built-in accounts, one per role.
#[must_use]
pub fn seed_employees() -> Vec<Employee> {
    vec![
        employee(
            "F001",
            "Ozires Silva",
            "11987654321",
            "Rua A, 123",
            "admin",
            Role::Administrator,
        ),
        employee(
            "F002",
            "Chief Engineer",
            "11999998888",
            "Rua B, 456",
            "engineer",
            Role::Engineer,
        ),
        employee(
            "F003",
            "Factory Operator",
            "11977776666",
            "Rua C, 789",
            "operator",
            Role::Operator,
        ),
    ]
}

/// One commercial aircraft mid-production and one military aircraft not yet started.
#[must_use]
pub fn seed_aircraft() -> Vec<Aircraft> {
    vec![
        Aircraft {
            code: String::from("E195-BR01"),
            model: String::from("E195-E2"),
            category: AircraftCategory::Commercial,
            capacity: 146,
            range_km: 4800,
            stages: vec![
                stage(
                    "E001",
                    "Fuselage Assembly",
                    date!(2025 - 12 - 15),
                    StageStatus::Done,
                    &["F002", "F003"],
                ),
                stage(
                    "E002",
                    "Wing Installation",
                    date!(2026 - 01 - 20),
                    StageStatus::InProgress,
                    &["F002"],
                ),
                stage(
                    "E003",
                    "Landing Gear Installation",
                    date!(2026 - 02 - 10),
                    StageStatus::Pending,
                    &[],
                ),
                stage(
                    "E004",
                    "Electrical Tests",
                    date!(2026 - 03 - 05),
                    StageStatus::Pending,
                    &[],
                ),
            ],
            parts: vec![
                part(
                    "P001",
                    "Forward Fuselage",
                    PartOrigin::Imported,
                    "China Aero",
                    PartStatus::InTransit,
                ),
                part(
                    "P002",
                    "Left Wing",
                    PartOrigin::Domestic,
                    "Asas BR",
                    PartStatus::Ready,
                ),
                part(
                    "P003",
                    "Landing Gear",
                    PartOrigin::Imported,
                    "Gear Inc",
                    PartStatus::Ready,
                ),
            ],
            tests: vec![TestRecord {
                id: String::from("T001"),
                category: TestCategory::Electrical,
                outcome: TestOutcome::Failed,
            }],
            report: None,
        },
        Aircraft {
            code: String::from("C390-MIL02"),
            model: String::from("KC-390 Millennium"),
            category: AircraftCategory::Military,
            capacity: 80,
            range_km: 6000,
            stages: vec![stage(
                "E100",
                "Initial Assembly",
                date!(2026 - 06 - 01),
                StageStatus::Pending,
                &[],
            )],
            parts: Vec::new(),
            tests: Vec::new(),
            report: None,
        },
    ]
}
