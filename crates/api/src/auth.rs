// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types and services.

use aerocode::Command;
use aerocode_domain::{Employee, EmployeeId, Role};
use aerocode_persistence::RecordStore;
use tracing::{debug, info};

use crate::error::AuthError;

/// A state-changing action subject to the role policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Register a new aircraft.
    CreateAircraft,
    /// Change an aircraft's descriptive fields.
    EditAircraft,
    /// Remove an aircraft and everything it owns.
    DeleteAircraft,
    /// Move a stage to its next status.
    AdvanceStage,
    /// Put an employee on a stage.
    AssignEmployee,
    /// Take an employee off a stage.
    UnassignEmployee,
    /// Add a part to an aircraft.
    AddPart,
    /// Overwrite a part's supply status.
    SetPartStatus,
    /// Record a quality test result.
    RecordTest,
    /// Produce the final delivery report.
    GenerateReport,
    /// Register a new employee.
    CreateEmployee,
    /// Remove an employee.
    DeleteEmployee,
}

impl Action {
    /// Returns the action name used in error messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CreateAircraft => "create_aircraft",
            Self::EditAircraft => "edit_aircraft",
            Self::DeleteAircraft => "delete_aircraft",
            Self::AdvanceStage => "advance_stage",
            Self::AssignEmployee => "assign_employee",
            Self::UnassignEmployee => "unassign_employee",
            Self::AddPart => "add_part",
            Self::SetPartStatus => "set_part_status",
            Self::RecordTest => "record_test",
            Self::GenerateReport => "generate_report",
            Self::CreateEmployee => "create_employee",
            Self::DeleteEmployee => "delete_employee",
        }
    }

    /// Returns the least privileged role allowed to perform this action.
    #[must_use]
    pub const fn minimum_role(&self) -> Role {
        match self {
            Self::AdvanceStage
            | Self::AssignEmployee
            | Self::UnassignEmployee
            | Self::SetPartStatus
            | Self::RecordTest => Role::Engineer,
            Self::CreateAircraft
            | Self::EditAircraft
            | Self::DeleteAircraft
            | Self::AddPart
            | Self::GenerateReport
            | Self::CreateEmployee
            | Self::DeleteEmployee => Role::Administrator,
        }
    }

    /// Maps a core command to the action it performs.
    #[must_use]
    pub const fn for_command(command: &Command) -> Self {
        match command {
            Command::CreateAircraft { .. } => Self::CreateAircraft,
            Command::SetAircraftModel { .. }
            | Command::SetAircraftCategory { .. }
            | Command::SetAircraftCapacity { .. }
            | Command::SetAircraftRange { .. } => Self::EditAircraft,
            Command::DeleteAircraft { .. } => Self::DeleteAircraft,
            Command::AdvanceStage { .. } => Self::AdvanceStage,
            Command::AssignEmployee { .. } => Self::AssignEmployee,
            Command::UnassignEmployee { .. } => Self::UnassignEmployee,
            Command::AddPart { .. } => Self::AddPart,
            Command::SetPartStatus { .. } => Self::SetPartStatus,
            Command::RecordTest { .. } => Self::RecordTest,
            Command::GenerateReport { .. } => Self::GenerateReport,
            Command::CreateEmployee { .. } => Self::CreateEmployee,
            Command::DeleteEmployee { .. } => Self::DeleteEmployee,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returns whether `role` may perform `action`.
///
/// Administrators may do everything. Engineers drive the production
/// workflow. Operators are read-only.
#[must_use]
pub const fn permits(role: Role, action: Action) -> bool {
    match role {
        Role::Administrator => true,
        Role::Engineer => matches!(action.minimum_role(), Role::Engineer),
        Role::Operator => false,
    }
}

/// An authenticated employee acting through the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The employee's id.
    pub employee_id: EmployeeId,
    /// The employee's login.
    pub login: String,
    /// The employee's display name.
    pub name: String,
    /// The employee's role.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates an actor for an employee record.
    #[must_use]
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            employee_id: employee.id.clone(),
            login: employee.login.clone(),
            name: employee.name.clone(),
            role: employee.role,
        }
    }
}

/// Authorization service for enforcing role-based access control.
///
/// Every mutating handler calls [`AuthorizationService::authorize`] before
/// touching the store.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks if an actor is authorized to perform an action.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Unauthorized` if the actor's role does not
    /// permit the action.
    pub fn authorize(actor: &AuthenticatedActor, action: Action) -> Result<(), AuthError> {
        if permits(actor.role, action) {
            debug!(login = %actor.login, %action, "Action authorized");
            return Ok(());
        }
        Err(AuthError::Unauthorized {
            action: action.as_str().to_string(),
            required_role: action.minimum_role().to_string(),
        })
    }
}

/// Authentication service.
///
/// Credentials are compared as stored, in plain text.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Authenticates an employee by login and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::AuthenticationFailed` if no employee matches, or
    /// if the store cannot be read.
    pub fn authenticate(
        store: &mut RecordStore,
        login: &str,
        password: &str,
    ) -> Result<AuthenticatedActor, AuthError> {
        let employee: Option<Employee> =
            store
                .find_employee_by_login(login)
                .map_err(|e| AuthError::AuthenticationFailed {
                    reason: format!("Database error: {e}"),
                })?;

        match employee {
            Some(employee) if employee.matches_credentials(login, password) => {
                info!(login, role = %employee.role, "Employee authenticated");
                Ok(AuthenticatedActor::from_employee(&employee))
            }
            _ => Err(AuthError::AuthenticationFailed {
                reason: String::from("Invalid login or password"),
            }),
        }
    }
}
