// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use aerocode_domain::{Aircraft, DomainError, Employee, EmployeeId, StageStatus};

/// Which persisted collection a transition changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// The aircraft collection.
    Aircraft,
    /// The employee collection.
    Employees,
}

/// The complete working state: every aircraft and every employee.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fleet {
    /// All aircraft, in stored order.
    pub aircraft: Vec<Aircraft>,
    /// All employees, in stored order.
    pub employees: Vec<Employee>,
}

impl Fleet {
    /// Creates a fleet from loaded collections.
    #[must_use]
    pub const fn new(aircraft: Vec<Aircraft>, employees: Vec<Employee>) -> Self {
        Self {
            aircraft,
            employees,
        }
    }

    /// Returns the aircraft with the given code.
    #[must_use]
    pub fn find_aircraft(&self, code: &str) -> Option<&Aircraft> {
        self.aircraft.iter().find(|a| a.code == code)
    }

    /// Returns the employee with the given id.
    #[must_use]
    pub fn find_employee(&self, employee_id: &EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| &e.id == employee_id)
    }

    pub(crate) fn aircraft_mut(&mut self, code: &str) -> Result<&mut Aircraft, DomainError> {
        self.aircraft
            .iter_mut()
            .find(|a| a.code == code)
            .ok_or_else(|| DomainError::AircraftNotFound {
                code: code.to_string(),
            })
    }
}

/// What a successful transition did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// An aircraft was registered.
    AircraftCreated {
        /// The new aircraft's code.
        code: String,
    },
    /// An aircraft attribute changed.
    AircraftUpdated {
        /// The aircraft code.
        code: String,
    },
    /// An aircraft was removed.
    AircraftDeleted {
        /// The aircraft code.
        code: String,
    },
    /// A stage moved forward.
    StageAdvanced {
        /// The aircraft code.
        aircraft_code: String,
        /// The stage id.
        stage_id: String,
        /// The stage's new status.
        status: StageStatus,
    },
    /// An employee was added to a stage.
    EmployeeAssigned {
        /// The stage id.
        stage_id: String,
        /// The employee id.
        employee_id: EmployeeId,
    },
    /// An employee was removed from a stage.
    EmployeeUnassigned {
        /// The stage id.
        stage_id: String,
        /// The employee id.
        employee_id: EmployeeId,
    },
    /// A part was added.
    PartAdded {
        /// The aircraft code.
        aircraft_code: String,
        /// The new part's id.
        part_id: String,
    },
    /// A part status was overwritten.
    PartStatusSet {
        /// The aircraft code.
        aircraft_code: String,
        /// The part id.
        part_id: String,
    },
    /// A test outcome was recorded.
    TestRecorded {
        /// The aircraft code.
        aircraft_code: String,
        /// The new test's id.
        test_id: String,
    },
    /// A final report was generated and attached.
    ReportGenerated {
        /// The aircraft code.
        aircraft_code: String,
        /// The rendered report text.
        content: String,
    },
    /// An employee was registered.
    EmployeeCreated {
        /// The new employee's id.
        employee_id: EmployeeId,
    },
    /// An employee was removed.
    EmployeeDeleted {
        /// The employee id.
        employee_id: EmployeeId,
    },
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: Fleet,
    /// The collection that must be persisted.
    pub changed: Collection,
    /// What the transition did.
    pub outcome: Outcome,
}
