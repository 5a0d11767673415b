// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::stage::StageStatus;

/// Broad classification of a domain failure.
///
/// Every failure leaves state untouched; the kind only tells the caller
/// what to correct before trying again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// A referenced aircraft, stage, part, or employee does not exist.
    Structural,
    /// A transition or generation precondition was not met.
    Invariant,
    /// A unique key or assignment would be duplicated.
    Duplicate,
    /// A field value is malformed or out of range.
    InvalidInput,
}

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No aircraft is registered under the code.
    AircraftNotFound {
        /// The aircraft code that was looked up.
        code: String,
    },
    /// The aircraft has no stage with the given id.
    StageNotFound {
        /// The aircraft code.
        aircraft_code: String,
        /// The stage id that was looked up.
        stage_id: String,
    },
    /// The aircraft has no part with the given id.
    PartNotFound {
        /// The aircraft code.
        aircraft_code: String,
        /// The part id that was looked up.
        part_id: String,
    },
    /// No employee exists with the given id.
    EmployeeNotFound {
        /// The employee id that was looked up.
        employee_id: String,
    },
    /// The employee is not assigned to the stage.
    AssignmentNotFound {
        /// The stage id.
        stage_id: String,
        /// The employee id.
        employee_id: String,
    },
    /// The requested status change is not a single forward step.
    InvalidStageTransition {
        /// The stage id.
        stage_id: String,
        /// The current status.
        from: StageStatus,
        /// The requested status.
        to: StageStatus,
    },
    /// The stage cannot be completed before the stage in front of it.
    PredecessorNotDone {
        /// The stage being completed.
        stage_id: String,
        /// The positional predecessor that is not yet done.
        predecessor_id: String,
    },
    /// A report was requested while stages are still open.
    StagesIncomplete {
        /// The aircraft code.
        aircraft_code: String,
        /// Number of stages not yet done.
        open_stages: usize,
    },
    /// The employee is protected and cannot be removed.
    ProtectedEmployee {
        /// The employee id.
        employee_id: String,
    },
    /// An aircraft with this code already exists.
    DuplicateAircraftCode {
        /// The duplicate code.
        code: String,
    },
    /// An employee with this login already exists.
    DuplicateLogin {
        /// The duplicate login name.
        login: String,
    },
    /// The employee is already assigned to the stage.
    DuplicateAssignment {
        /// The stage id.
        stage_id: String,
        /// The employee id.
        employee_id: String,
    },
    /// Aircraft code is empty or invalid.
    InvalidAircraftCode(String),
    /// Aircraft model is empty or invalid.
    InvalidModel(String),
    /// Aircraft capacity must be positive.
    InvalidCapacity {
        /// The rejected capacity.
        capacity: u32,
    },
    /// A stage definition is invalid.
    InvalidStage(String),
    /// A display name is empty or invalid.
    InvalidName(String),
    /// A login name is empty or invalid.
    InvalidLogin(String),
    /// An enumerated value could not be parsed.
    InvalidEnumValue {
        /// The enumeration being parsed.
        kind: &'static str,
        /// The rejected text.
        value: String,
    },
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl DomainError {
    /// Classifies this error.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::AircraftNotFound { .. }
            | Self::StageNotFound { .. }
            | Self::PartNotFound { .. }
            | Self::EmployeeNotFound { .. }
            | Self::AssignmentNotFound { .. } => FailureKind::Structural,
            Self::InvalidStageTransition { .. }
            | Self::PredecessorNotDone { .. }
            | Self::StagesIncomplete { .. }
            | Self::ProtectedEmployee { .. } => FailureKind::Invariant,
            Self::DuplicateAircraftCode { .. }
            | Self::DuplicateLogin { .. }
            | Self::DuplicateAssignment { .. } => FailureKind::Duplicate,
            Self::InvalidAircraftCode(_)
            | Self::InvalidModel(_)
            | Self::InvalidCapacity { .. }
            | Self::InvalidStage(_)
            | Self::InvalidName(_)
            | Self::InvalidLogin(_)
            | Self::InvalidEnumValue { .. }
            | Self::DateParseError { .. } => FailureKind::InvalidInput,
        }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AircraftNotFound { code } => write!(f, "Aircraft '{code}' not found"),
            Self::StageNotFound {
                aircraft_code,
                stage_id,
            } => write!(
                f,
                "Stage '{stage_id}' not found on aircraft '{aircraft_code}'"
            ),
            Self::PartNotFound {
                aircraft_code,
                part_id,
            } => write!(f, "Part '{part_id}' not found on aircraft '{aircraft_code}'"),
            Self::EmployeeNotFound { employee_id } => {
                write!(f, "Employee '{employee_id}' not found")
            }
            Self::AssignmentNotFound {
                stage_id,
                employee_id,
            } => write!(
                f,
                "Employee '{employee_id}' is not assigned to stage '{stage_id}'"
            ),
            Self::InvalidStageTransition { stage_id, from, to } => write!(
                f,
                "Stage '{stage_id}' cannot move from {from} to {to}"
            ),
            Self::PredecessorNotDone {
                stage_id,
                predecessor_id,
            } => write!(
                f,
                "Stage '{stage_id}' cannot be completed before stage '{predecessor_id}' is done"
            ),
            Self::StagesIncomplete {
                aircraft_code,
                open_stages,
            } => write!(
                f,
                "Report for aircraft '{aircraft_code}' requires all stages done ({open_stages} still open)"
            ),
            Self::ProtectedEmployee { employee_id } => {
                write!(f, "Employee '{employee_id}' is protected and cannot be removed")
            }
            Self::DuplicateAircraftCode { code } => {
                write!(f, "Aircraft with code '{code}' already exists")
            }
            Self::DuplicateLogin { login } => {
                write!(f, "Employee with login '{login}' already exists")
            }
            Self::DuplicateAssignment {
                stage_id,
                employee_id,
            } => write!(
                f,
                "Employee '{employee_id}' is already assigned to stage '{stage_id}'"
            ),
            Self::InvalidAircraftCode(msg) => write!(f, "Invalid aircraft code: {msg}"),
            Self::InvalidModel(msg) => write!(f, "Invalid model: {msg}"),
            Self::InvalidCapacity { capacity } => {
                write!(f, "Invalid capacity: {capacity}. Must be greater than 0")
            }
            Self::InvalidStage(msg) => write!(f, "Invalid stage: {msg}"),
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidLogin(msg) => write!(f, "Invalid login: {msg}"),
            Self::InvalidEnumValue { kind, value } => write!(f, "Invalid {kind}: '{value}'"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
