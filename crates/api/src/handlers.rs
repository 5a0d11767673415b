// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request handlers.
//!
//! Every mutating handler follows the same path: authorize the actor, load
//! the fleet, apply the command, and persist the changed collection. A
//! failure at any step returns before anything is written. Handlers that
//! issue several commands apply them all before the single write.

use aerocode::{
    Collection, Command, Fleet, Outcome, PartDraft, RandomIds, StageDraft, TransitionResult,
    apply, validate_aircraft_exists,
};
use aerocode_domain::{
    Aircraft, AircraftCategory, Employee, EmployeeId, PartOrigin, PartStatus, ProductionStatus,
    Role, StageStatus, TestCategory, TestOutcome, production_status,
};
use aerocode_persistence::RecordStore;
use time::Date;
use tracing::{debug, info};

use crate::auth::{Action, AuthenticatedActor, AuthenticationService, AuthorizationService};
use crate::capabilities::{
    compute_aircraft_capabilities, compute_employee_capabilities, compute_global_capabilities,
    compute_stage_capabilities,
};
use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
use crate::request_response::{
    AddPartRequest, AdvanceStageRequest, AircraftDetailResponse, AircraftField,
    AircraftMutationResponse, CreateAircraftRequest, CreateEmployeeRequest, DashboardResponse,
    EmployeeMutationResponse, GenerateReportRequest, ListAircraftResponse, ListEmployeesResponse,
    ListReportsResponse, LoginRequest, RecordTestRequest, ReportInfo, SetPartStatusRequest,
    StageAssignmentRequest, StageInfo, UpdateAircraftRequest, WhoAmIResponse, aircraft_summary,
    employee_info, part_info, stage_info, test_info,
};
use crate::request_validation::{parse_date, parse_enum, require_text};

// ============================================================================
// Shared plumbing
// ============================================================================

/// Authorizes, applies, and persists a single command.
fn execute(
    store: &mut RecordStore,
    actor: &AuthenticatedActor,
    command: Command,
) -> Result<Outcome, ApiError> {
    let mut outcomes: Vec<Outcome> = execute_batch(store, actor, vec![command])?;
    outcomes.pop().ok_or_else(|| ApiError::Internal {
        message: String::from("Command produced no outcome"),
    })
}

/// Authorizes and applies every command against one loaded fleet, then
/// persists once.
///
/// Each command sees the state left by the one before it. If any command
/// fails nothing is written.
fn execute_batch(
    store: &mut RecordStore,
    actor: &AuthenticatedActor,
    commands: Vec<Command>,
) -> Result<Vec<Outcome>, ApiError> {
    let actions: Vec<Action> = commands.iter().map(Action::for_command).collect();
    for action in &actions {
        AuthorizationService::authorize(actor, *action)?;
    }

    let mut state: Fleet = load_fleet(store)?;
    let mut changed: Vec<Collection> = Vec::new();
    let mut outcomes: Vec<Outcome> = Vec::with_capacity(commands.len());
    for command in commands {
        let result: TransitionResult =
            apply(&state, command, &mut RandomIds).map_err(translate_core_error)?;
        if !changed.contains(&result.changed) {
            changed.push(result.changed);
        }
        state = result.new_state;
        outcomes.push(result.outcome);
    }

    for collection in changed {
        store
            .persist_collection(&state, collection)
            .map_err(translate_persistence_error)?;
    }

    for (action, outcome) in actions.iter().zip(&outcomes) {
        info!(login = %actor.login, %action, ?outcome, "Command applied");
    }
    Ok(outcomes)
}

fn load_fleet(store: &mut RecordStore) -> Result<Fleet, ApiError> {
    store.load_fleet().map_err(translate_persistence_error)
}

fn aircraft_response(
    aircraft_code: String,
    item_id: Option<String>,
    message: String,
) -> AircraftMutationResponse {
    AircraftMutationResponse {
        aircraft_code,
        item_id,
        message,
    }
}

// ============================================================================
// Session
// ============================================================================

/// Logs an employee in.
///
/// # Errors
///
/// Returns `ApiError::AuthenticationFailed` if the credentials do not match
/// a stored employee.
pub fn login(
    store: &mut RecordStore,
    request: &LoginRequest,
) -> Result<(AuthenticatedActor, WhoAmIResponse), ApiError> {
    let actor: AuthenticatedActor =
        AuthenticationService::authenticate(store, &request.login, &request.password)?;
    let response: WhoAmIResponse = whoami(&actor);
    Ok((actor, response))
}

/// Describes the logged in employee.
#[must_use]
pub fn whoami(actor: &AuthenticatedActor) -> WhoAmIResponse {
    WhoAmIResponse {
        employee_id: actor.employee_id.value().to_string(),
        login: actor.login.clone(),
        name: actor.name.clone(),
        role: actor.role.to_string(),
        capabilities: compute_global_capabilities(actor),
    }
}

// ============================================================================
// Aircraft queries
// ============================================================================

/// Lists every aircraft in stored order.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn list_aircraft(store: &mut RecordStore) -> Result<ListAircraftResponse, ApiError> {
    let fleet: Fleet = load_fleet(store)?;
    Ok(ListAircraftResponse {
        aircraft: fleet.aircraft.iter().map(aircraft_summary).collect(),
    })
}

/// Returns the full detail of one aircraft, with capabilities for `actor`.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if no aircraft has the code.
pub fn get_aircraft(
    store: &mut RecordStore,
    code: &str,
    actor: &AuthenticatedActor,
) -> Result<AircraftDetailResponse, ApiError> {
    let fleet: Fleet = load_fleet(store)?;
    let aircraft: &Aircraft =
        validate_aircraft_exists(&fleet, code).map_err(translate_domain_error)?;

    let stages: Vec<StageInfo> = aircraft
        .stages
        .iter()
        .enumerate()
        .map(|(index, stage)| {
            stage_info(stage, compute_stage_capabilities(actor, aircraft, index))
        })
        .collect();

    Ok(AircraftDetailResponse {
        summary: aircraft_summary(aircraft),
        stages,
        parts: aircraft.parts.iter().map(part_info).collect(),
        tests: aircraft.tests.iter().map(test_info).collect(),
        report: aircraft.report.as_ref().map(ReportInfo::from_report),
        capabilities: compute_aircraft_capabilities(actor, aircraft),
    })
}

/// Summarizes production across the fleet.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn dashboard(store: &mut RecordStore) -> Result<DashboardResponse, ApiError> {
    let fleet: Fleet = load_fleet(store)?;

    let count_status = |status: ProductionStatus| {
        fleet
            .aircraft
            .iter()
            .filter(|a| production_status(a) == status)
            .count()
    };
    let count_stages = |status: StageStatus| {
        fleet
            .aircraft
            .iter()
            .flat_map(|a| a.stages.iter())
            .filter(|s| s.status == status)
            .count()
    };

    Ok(DashboardResponse {
        total_aircraft: fleet.aircraft.len(),
        not_started: count_status(ProductionStatus::NotStarted),
        in_production: count_status(ProductionStatus::InProduction),
        completed: count_status(ProductionStatus::Completed),
        reports_generated: fleet.aircraft.iter().filter(|a| a.has_report()).count(),
        stages_pending: count_stages(StageStatus::Pending),
        stages_in_progress: count_stages(StageStatus::InProgress),
        stages_done: count_stages(StageStatus::Done),
        aircraft: fleet.aircraft.iter().map(aircraft_summary).collect(),
    })
}

// ============================================================================
// Aircraft mutations
// ============================================================================

/// Registers a new aircraft with its ordered stages.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not an administrator
/// - A field is blank, a date is malformed, or the category is unknown
/// - The code is already registered
pub fn create_aircraft(
    store: &mut RecordStore,
    request: &CreateAircraftRequest,
    actor: &AuthenticatedActor,
) -> Result<AircraftMutationResponse, ApiError> {
    let category: AircraftCategory = parse_enum("category", &request.category)?;
    let stages: Vec<StageDraft> = request
        .stages
        .iter()
        .map(|stage| -> Result<StageDraft, ApiError> {
            Ok(StageDraft {
                name: stage.name.trim().to_string(),
                due: parse_date("stages.due", &stage.due)?,
            })
        })
        .collect::<Result<Vec<StageDraft>, ApiError>>()?;

    let command: Command = Command::CreateAircraft {
        code: request.code.clone(),
        model: request.model.trim().to_string(),
        category,
        capacity: request.capacity,
        range_km: request.range_km,
        stages,
    };

    match execute(store, actor, command)? {
        Outcome::AircraftCreated { code } => Ok(aircraft_response(
            code.clone(),
            None,
            format!("Aircraft '{code}' registered"),
        )),
        other => Err(unexpected(&other)),
    }
}

/// Changes descriptive fields of an aircraft.
///
/// The fields are applied in order to the same loaded state and saved once,
/// so a bad value anywhere leaves the aircraft untouched.
///
/// # Errors
///
/// Returns an error if the actor is not an administrator, no field is given,
/// the aircraft does not exist, or any new value is invalid.
pub fn update_aircraft(
    store: &mut RecordStore,
    request: &UpdateAircraftRequest,
    actor: &AuthenticatedActor,
) -> Result<AircraftMutationResponse, ApiError> {
    if request.fields.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("fields"),
            message: String::from("At least one field must be given"),
        });
    }

    let commands: Vec<Command> = request
        .fields
        .iter()
        .map(|field| field_command(&request.code, field))
        .collect::<Result<Vec<Command>, ApiError>>()?;
    let updated: usize = commands.len();

    for outcome in execute_batch(store, actor, commands)? {
        if !matches!(outcome, Outcome::AircraftUpdated { .. }) {
            return Err(unexpected(&outcome));
        }
    }

    Ok(aircraft_response(
        request.code.clone(),
        None,
        format!("Aircraft '{}' updated ({updated} field(s))", request.code),
    ))
}

fn field_command(code: &str, field: &AircraftField) -> Result<Command, ApiError> {
    let code: String = code.to_string();
    Ok(match field {
        AircraftField::Model(model) => Command::SetAircraftModel {
            code,
            model: require_text("model", model)?,
        },
        AircraftField::Category(category) => Command::SetAircraftCategory {
            code,
            category: parse_enum("category", category)?,
        },
        AircraftField::Capacity(capacity) => Command::SetAircraftCapacity {
            code,
            capacity: *capacity,
        },
        AircraftField::RangeKm(range_km) => Command::SetAircraftRange {
            code,
            range_km: *range_km,
        },
    })
}

/// Removes an aircraft and everything attached to it.
///
/// # Errors
///
/// Returns an error if the actor is not an administrator or the aircraft
/// does not exist.
pub fn delete_aircraft(
    store: &mut RecordStore,
    code: &str,
    actor: &AuthenticatedActor,
) -> Result<AircraftMutationResponse, ApiError> {
    let command: Command = Command::DeleteAircraft {
        code: code.to_string(),
    };
    match execute(store, actor, command)? {
        Outcome::AircraftDeleted { code } => Ok(aircraft_response(
            code.clone(),
            None,
            format!("Aircraft '{code}' deleted"),
        )),
        other => Err(unexpected(&other)),
    }
}

/// Moves a stage one step forward.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is an operator
/// - The aircraft or stage does not exist
/// - The requested status is not the next one
/// - The stage would be done before its predecessor
pub fn advance_stage(
    store: &mut RecordStore,
    request: &AdvanceStageRequest,
    actor: &AuthenticatedActor,
) -> Result<AircraftMutationResponse, ApiError> {
    let status: StageStatus = parse_enum("status", &request.status)?;
    let command: Command = Command::AdvanceStage {
        aircraft_code: request.aircraft_code.clone(),
        stage_id: request.stage_id.clone(),
        status,
    };
    match execute(store, actor, command)? {
        Outcome::StageAdvanced {
            aircraft_code,
            stage_id,
            status,
        } => Ok(aircraft_response(
            aircraft_code,
            Some(stage_id.clone()),
            format!("Stage '{stage_id}' is now {status}"),
        )),
        other => Err(unexpected(&other)),
    }
}

/// Assigns an employee to a stage.
///
/// # Errors
///
/// Returns an error if the actor is an operator, a referenced record does
/// not exist, or the employee is already assigned.
pub fn assign_employee(
    store: &mut RecordStore,
    request: &StageAssignmentRequest,
    actor: &AuthenticatedActor,
) -> Result<AircraftMutationResponse, ApiError> {
    let command: Command = Command::AssignEmployee {
        aircraft_code: request.aircraft_code.clone(),
        stage_id: request.stage_id.clone(),
        employee_id: EmployeeId::new(request.employee_id.trim()),
    };
    match execute(store, actor, command)? {
        Outcome::EmployeeAssigned {
            stage_id,
            employee_id,
        } => Ok(aircraft_response(
            request.aircraft_code.clone(),
            Some(stage_id.clone()),
            format!("Employee '{employee_id}' assigned to stage '{stage_id}'"),
        )),
        other => Err(unexpected(&other)),
    }
}

/// Removes an employee from a stage.
///
/// # Errors
///
/// Returns an error if the actor is an operator, the aircraft or stage does
/// not exist, or the employee is not assigned.
pub fn unassign_employee(
    store: &mut RecordStore,
    request: &StageAssignmentRequest,
    actor: &AuthenticatedActor,
) -> Result<AircraftMutationResponse, ApiError> {
    let command: Command = Command::UnassignEmployee {
        aircraft_code: request.aircraft_code.clone(),
        stage_id: request.stage_id.clone(),
        employee_id: EmployeeId::new(request.employee_id.trim()),
    };
    match execute(store, actor, command)? {
        Outcome::EmployeeUnassigned {
            stage_id,
            employee_id,
        } => Ok(aircraft_response(
            request.aircraft_code.clone(),
            Some(stage_id.clone()),
            format!("Employee '{employee_id}' removed from stage '{stage_id}'"),
        )),
        other => Err(unexpected(&other)),
    }
}

/// Adds a part to an aircraft. New parts start in production.
///
/// # Errors
///
/// Returns an error if the actor is not an administrator, the aircraft does
/// not exist, or a field is blank or unknown.
pub fn add_part(
    store: &mut RecordStore,
    request: &AddPartRequest,
    actor: &AuthenticatedActor,
) -> Result<AircraftMutationResponse, ApiError> {
    let origin: PartOrigin = parse_enum("origin", &request.origin)?;
    let command: Command = Command::AddPart {
        aircraft_code: request.aircraft_code.clone(),
        part: PartDraft {
            name: require_text("name", &request.name)?,
            origin,
            supplier: require_text("supplier", &request.supplier)?,
        },
    };
    match execute(store, actor, command)? {
        Outcome::PartAdded {
            aircraft_code,
            part_id,
        } => Ok(aircraft_response(
            aircraft_code,
            Some(part_id.clone()),
            format!("Part '{part_id}' added"),
        )),
        other => Err(unexpected(&other)),
    }
}

/// Overwrites a part's supply status. Any status may follow any other.
///
/// # Errors
///
/// Returns an error if the actor is an operator, the aircraft or part does
/// not exist, or the status is unknown.
pub fn set_part_status(
    store: &mut RecordStore,
    request: &SetPartStatusRequest,
    actor: &AuthenticatedActor,
) -> Result<AircraftMutationResponse, ApiError> {
    let status: PartStatus = parse_enum("status", &request.status)?;
    let command: Command = Command::SetPartStatus {
        aircraft_code: request.aircraft_code.clone(),
        part_id: request.part_id.clone(),
        status,
    };
    match execute(store, actor, command)? {
        Outcome::PartStatusSet {
            aircraft_code,
            part_id,
        } => Ok(aircraft_response(
            aircraft_code,
            Some(part_id.clone()),
            format!("Part '{part_id}' is now {}", status.label()),
        )),
        other => Err(unexpected(&other)),
    }
}

/// Records a quality test outcome.
///
/// # Errors
///
/// Returns an error if the actor is an operator, the aircraft does not
/// exist, or the category or outcome is unknown.
pub fn record_test(
    store: &mut RecordStore,
    request: &RecordTestRequest,
    actor: &AuthenticatedActor,
) -> Result<AircraftMutationResponse, ApiError> {
    let category: TestCategory = parse_enum("category", &request.category)?;
    let outcome: TestOutcome = parse_enum("outcome", &request.outcome)?;
    let command: Command = Command::RecordTest {
        aircraft_code: request.aircraft_code.clone(),
        category,
        outcome,
    };
    match execute(store, actor, command)? {
        Outcome::TestRecorded {
            aircraft_code,
            test_id,
        } => Ok(aircraft_response(
            aircraft_code,
            Some(test_id),
            format!("{category} test recorded as {outcome}"),
        )),
        other => Err(unexpected(&other)),
    }
}

// ============================================================================
// Reports
// ============================================================================

/// Generates the final delivery report, replacing any earlier one.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not an administrator
/// - The client name is blank or the date is malformed
/// - The aircraft does not exist
/// - Any stage is not done
pub fn generate_report(
    store: &mut RecordStore,
    request: &GenerateReportRequest,
    actor: &AuthenticatedActor,
) -> Result<ReportInfo, ApiError> {
    let client_name: String = require_text("client_name", &request.client_name)?;
    let delivery_date: Date = parse_date("delivery_date", &request.delivery_date)?;
    let command: Command = Command::GenerateReport {
        aircraft_code: request.aircraft_code.clone(),
        client_name,
        delivery_date,
    };

    match execute(store, actor, command)? {
        Outcome::ReportGenerated { aircraft_code, .. } => {
            let fleet: Fleet = load_fleet(store)?;
            fleet
                .find_aircraft(&aircraft_code)
                .and_then(|a| a.report.as_ref())
                .map(ReportInfo::from_report)
                .ok_or_else(|| ApiError::Internal {
                    message: format!("Report for '{aircraft_code}' missing after save"),
                })
        }
        other => Err(unexpected(&other)),
    }
}

/// Lists every stored report, in aircraft order.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn list_reports(store: &mut RecordStore) -> Result<ListReportsResponse, ApiError> {
    let fleet: Fleet = load_fleet(store)?;
    let reports: Vec<ReportInfo> = fleet
        .aircraft
        .iter()
        .filter_map(|a| a.report.as_ref())
        .map(ReportInfo::from_report)
        .collect();
    debug!(count = reports.len(), "Listed reports");
    Ok(ListReportsResponse { reports })
}

/// Returns the stored report of one aircraft.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the aircraft does not exist or has
/// no report yet.
pub fn get_report(store: &mut RecordStore, aircraft_code: &str) -> Result<ReportInfo, ApiError> {
    let fleet: Fleet = load_fleet(store)?;
    let aircraft: &Aircraft =
        validate_aircraft_exists(&fleet, aircraft_code).map_err(translate_domain_error)?;
    aircraft
        .report
        .as_ref()
        .map(ReportInfo::from_report)
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Report"),
            message: format!("Aircraft '{aircraft_code}' has no report yet"),
        })
}

// ============================================================================
// Employees
// ============================================================================

/// Creates an employee. A blank password means the default one.
///
/// # Errors
///
/// Returns an error if the actor is not an administrator, a field is blank
/// or unknown, or the login is taken.
pub fn create_employee(
    store: &mut RecordStore,
    request: &CreateEmployeeRequest,
    actor: &AuthenticatedActor,
) -> Result<EmployeeMutationResponse, ApiError> {
    let role: Role = parse_enum("role", &request.role)?;
    let command: Command = Command::CreateEmployee {
        name: request.name.trim().to_string(),
        phone: request.phone.trim().to_string(),
        address: request.address.trim().to_string(),
        login: request.login.trim().to_string(),
        password: request.password.clone(),
        role,
    };
    match execute(store, actor, command)? {
        Outcome::EmployeeCreated { employee_id } => Ok(EmployeeMutationResponse {
            employee_id: employee_id.value().to_string(),
            message: format!("Employee '{}' created as {role}", request.login.trim()),
        }),
        other => Err(unexpected(&other)),
    }
}

/// Deletes an employee. Stage assignments that reference it are kept.
///
/// # Errors
///
/// Returns an error if the actor is not an administrator, the employee is
/// the protected seed administrator, or it does not exist.
pub fn delete_employee(
    store: &mut RecordStore,
    employee_id: &str,
    actor: &AuthenticatedActor,
) -> Result<EmployeeMutationResponse, ApiError> {
    let command: Command = Command::DeleteEmployee {
        employee_id: EmployeeId::new(employee_id.trim()),
    };
    match execute(store, actor, command)? {
        Outcome::EmployeeDeleted { employee_id } => Ok(EmployeeMutationResponse {
            employee_id: employee_id.value().to_string(),
            message: format!("Employee '{employee_id}' deleted"),
        }),
        other => Err(unexpected(&other)),
    }
}

/// Lists every employee, without passwords.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn list_employees(
    store: &mut RecordStore,
    actor: &AuthenticatedActor,
) -> Result<ListEmployeesResponse, ApiError> {
    let employees: Vec<Employee> = store
        .load_employees()
        .map_err(translate_persistence_error)?;
    Ok(ListEmployeesResponse {
        employees: employees
            .iter()
            .map(|e| employee_info(e, compute_employee_capabilities(actor, e)))
            .collect(),
    })
}

fn unexpected(outcome: &Outcome) -> ApiError {
    ApiError::Internal {
        message: format!("Unexpected outcome: {outcome:?}"),
    }
}
