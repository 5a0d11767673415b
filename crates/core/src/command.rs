// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::Collection;
use aerocode_domain::{
    AircraftCategory, EmployeeId, PartOrigin, PartStatus, Role, StageStatus, TestCategory,
    TestOutcome,
};
use time::Date;

/// A stage as supplied when an aircraft is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageDraft {
    /// Stage name.
    pub name: String,
    /// Due date.
    pub due: Date,
}

/// A part as supplied when it is added to an aircraft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartDraft {
    /// Part name.
    pub name: String,
    /// Domestic or imported.
    pub origin: PartOrigin,
    /// Supplier name.
    pub supplier: String,
}

/// A command represents user intent as data only.
///
/// Commands are the only way to request state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Register a new aircraft with its ordered stages.
    CreateAircraft {
        /// Unique aircraft code.
        code: String,
        /// Model name.
        model: String,
        /// Classification.
        category: AircraftCategory,
        /// Passenger or payload capacity.
        capacity: u32,
        /// Range in kilometres.
        range_km: u32,
        /// Stages in production order.
        stages: Vec<StageDraft>,
    },
    /// Change an aircraft's model.
    SetAircraftModel {
        /// The aircraft code.
        code: String,
        /// The new model.
        model: String,
    },
    /// Change an aircraft's category.
    SetAircraftCategory {
        /// The aircraft code.
        code: String,
        /// The new category.
        category: AircraftCategory,
    },
    /// Change an aircraft's capacity.
    SetAircraftCapacity {
        /// The aircraft code.
        code: String,
        /// The new capacity.
        capacity: u32,
    },
    /// Change an aircraft's range.
    SetAircraftRange {
        /// The aircraft code.
        code: String,
        /// The new range in kilometres.
        range_km: u32,
    },
    /// Remove an aircraft and everything attached to it.
    DeleteAircraft {
        /// The aircraft code.
        code: String,
    },
    /// Move a stage one step forward.
    AdvanceStage {
        /// The aircraft code.
        aircraft_code: String,
        /// The stage id.
        stage_id: String,
        /// The requested status.
        status: StageStatus,
    },
    /// Assign an employee to a stage.
    AssignEmployee {
        /// The aircraft code.
        aircraft_code: String,
        /// The stage id.
        stage_id: String,
        /// The employee to assign.
        employee_id: EmployeeId,
    },
    /// Remove an employee from a stage.
    UnassignEmployee {
        /// The aircraft code.
        aircraft_code: String,
        /// The stage id.
        stage_id: String,
        /// The employee to remove.
        employee_id: EmployeeId,
    },
    /// Add a part to an aircraft.
    AddPart {
        /// The aircraft code.
        aircraft_code: String,
        /// The part to add.
        part: PartDraft,
    },
    /// Overwrite a part's status.
    SetPartStatus {
        /// The aircraft code.
        aircraft_code: String,
        /// The part id.
        part_id: String,
        /// The new status.
        status: PartStatus,
    },
    /// Record a quality test outcome.
    RecordTest {
        /// The aircraft code.
        aircraft_code: String,
        /// The test category.
        category: TestCategory,
        /// The test outcome.
        outcome: TestOutcome,
    },
    /// Generate and attach the final delivery report.
    GenerateReport {
        /// The aircraft code.
        aircraft_code: String,
        /// Receiving client.
        client_name: String,
        /// Agreed delivery date.
        delivery_date: Date,
    },
    /// Register a new employee.
    CreateEmployee {
        /// Display name.
        name: String,
        /// Contact phone number.
        phone: String,
        /// Postal address.
        address: String,
        /// Login name.
        login: String,
        /// Password. Empty means the default password.
        password: String,
        /// Permission tier.
        role: Role,
    },
    /// Remove an employee.
    DeleteEmployee {
        /// The employee id.
        employee_id: EmployeeId,
    },
}

impl Command {
    /// Returns the command name, for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreateAircraft { .. } => "CreateAircraft",
            Self::SetAircraftModel { .. } => "SetAircraftModel",
            Self::SetAircraftCategory { .. } => "SetAircraftCategory",
            Self::SetAircraftCapacity { .. } => "SetAircraftCapacity",
            Self::SetAircraftRange { .. } => "SetAircraftRange",
            Self::DeleteAircraft { .. } => "DeleteAircraft",
            Self::AdvanceStage { .. } => "AdvanceStage",
            Self::AssignEmployee { .. } => "AssignEmployee",
            Self::UnassignEmployee { .. } => "UnassignEmployee",
            Self::AddPart { .. } => "AddPart",
            Self::SetPartStatus { .. } => "SetPartStatus",
            Self::RecordTest { .. } => "RecordTest",
            Self::GenerateReport { .. } => "GenerateReport",
            Self::CreateEmployee { .. } => "CreateEmployee",
            Self::DeleteEmployee { .. } => "DeleteEmployee",
        }
    }

    /// Returns the collection this command writes to.
    #[must_use]
    pub const fn collection(&self) -> Collection {
        match self {
            Self::CreateEmployee { .. } | Self::DeleteEmployee { .. } => Collection::Employees,
            _ => Collection::Aircraft,
        }
    }
}
