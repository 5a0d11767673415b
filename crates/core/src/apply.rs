// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{Command, PartDraft, StageDraft};
use crate::error::CoreError;
use crate::id::{IdGenerator, fresh_id};
use crate::state::{Collection, Fleet, Outcome, TransitionResult};
use aerocode_domain::{
    Aircraft, AircraftCategory, DomainError, Employee, EmployeeId, Part, PartStatus, Report, Role,
    Stage, StageStatus, TestRecord, validate_aircraft_code_unique, validate_aircraft_fields,
    validate_employee_fields, validate_employee_removable, validate_login_unique,
    validate_report_ready, validate_stage_advance,
};

/// Password given to employees created without one.
const DEFAULT_PASSWORD: &str = "123";

/// Applies a command to the current state, producing a new state.
///
/// The input state is never modified. On failure no new state is produced,
/// so callers that persist only successful results never write partial changes.
///
/// # Arguments
///
/// * `state` - The current fleet (immutable)
/// * `command` - The command to apply
/// * `ids` - Source of fresh ids for new stages, parts, tests, and employees
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and what changed
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - A referenced aircraft, stage, part, or employee does not exist
/// - A stage transition or report precondition is not met
/// - A code, login, or assignment would be duplicated
/// - A field value is invalid
#[allow(clippy::too_many_lines)]
pub fn apply(
    state: &Fleet,
    command: Command,
    ids: &mut dyn IdGenerator,
) -> Result<TransitionResult, CoreError> {
    let changed: Collection = command.collection();
    let mut new_state: Fleet = state.clone();

    let outcome: Outcome = match command {
        Command::CreateAircraft {
            code,
            model,
            category,
            capacity,
            range_km,
            stages,
        } => create_aircraft(
            &mut new_state,
            code,
            model,
            category,
            capacity,
            range_km,
            stages,
            ids,
        )?,
        Command::SetAircraftModel { code, model } => {
            let aircraft: &mut Aircraft = new_state.aircraft_mut(&code)?;
            if model.trim().is_empty() {
                return Err(DomainError::InvalidModel(String::from("Model cannot be empty")).into());
            }
            aircraft.model = model;
            Outcome::AircraftUpdated { code }
        }
        Command::SetAircraftCategory { code, category } => {
            new_state.aircraft_mut(&code)?.category = category;
            Outcome::AircraftUpdated { code }
        }
        Command::SetAircraftCapacity { code, capacity } => {
            let aircraft: &mut Aircraft = new_state.aircraft_mut(&code)?;
            if capacity == 0 {
                return Err(DomainError::InvalidCapacity { capacity }.into());
            }
            aircraft.capacity = capacity;
            Outcome::AircraftUpdated { code }
        }
        Command::SetAircraftRange { code, range_km } => {
            new_state.aircraft_mut(&code)?.range_km = range_km;
            Outcome::AircraftUpdated { code }
        }
        Command::DeleteAircraft { code } => {
            crate::validate_aircraft_exists(&new_state, &code)?;
            new_state.aircraft.retain(|a| a.code != code);
            Outcome::AircraftDeleted { code }
        }
        Command::AdvanceStage {
            aircraft_code,
            stage_id,
            status,
        } => advance_stage(&mut new_state, aircraft_code, stage_id, status)?,
        Command::AssignEmployee {
            aircraft_code,
            stage_id,
            employee_id,
        } => assign_employee(&mut new_state, &aircraft_code, stage_id, employee_id)?,
        Command::UnassignEmployee {
            aircraft_code,
            stage_id,
            employee_id,
        } => {
            let aircraft: &mut Aircraft = new_state.aircraft_mut(&aircraft_code)?;
            let stage: &mut Stage = stage_mut(aircraft, &stage_id)?;
            if !stage.is_assigned(&employee_id) {
                return Err(DomainError::AssignmentNotFound {
                    stage_id,
                    employee_id: employee_id.value().to_string(),
                }
                .into());
            }
            stage.assigned_employees.retain(|id| id != &employee_id);
            Outcome::EmployeeUnassigned {
                stage_id,
                employee_id,
            }
        }
        Command::AddPart {
            aircraft_code,
            part,
        } => add_part(&mut new_state, aircraft_code, part, ids)?,
        Command::SetPartStatus {
            aircraft_code,
            part_id,
            status,
        } => {
            let aircraft: &mut Aircraft = new_state.aircraft_mut(&aircraft_code)?;
            let part: &mut Part = aircraft
                .parts
                .iter_mut()
                .find(|p| p.id == part_id)
                .ok_or_else(|| DomainError::PartNotFound {
                    aircraft_code: aircraft_code.clone(),
                    part_id: part_id.clone(),
                })?;
            part.status = status;
            Outcome::PartStatusSet {
                aircraft_code,
                part_id,
            }
        }
        Command::RecordTest {
            aircraft_code,
            category,
            outcome,
        } => {
            let aircraft: &mut Aircraft = new_state.aircraft_mut(&aircraft_code)?;
            let test_id: String = fresh_id(ids, |candidate| {
                aircraft.tests.iter().any(|t| t.id == candidate)
            });
            // Tests are accepted at any production state, report or not
            aircraft.tests.push(TestRecord {
                id: test_id.clone(),
                category,
                outcome,
            });
            Outcome::TestRecorded {
                aircraft_code,
                test_id,
            }
        }
        Command::GenerateReport {
            aircraft_code,
            client_name,
            delivery_date,
        } => {
            let aircraft: &mut Aircraft = new_state.aircraft_mut(&aircraft_code)?;
            validate_report_ready(aircraft)?;
            let report: Report = Report::snapshot(aircraft, &client_name, delivery_date);
            let content: String = report.content.clone();
            aircraft.report = Some(report);
            Outcome::ReportGenerated {
                aircraft_code,
                content,
            }
        }
        Command::CreateEmployee {
            name,
            phone,
            address,
            login,
            password,
            role,
        } => create_employee(&mut new_state, name, phone, address, login, password, role, ids)?,
        Command::DeleteEmployee { employee_id } => {
            validate_employee_removable(&employee_id, &new_state.employees)?;
            // Stage assignments keep the id; they are weak references
            new_state.employees.retain(|e| e.id != employee_id);
            Outcome::EmployeeDeleted { employee_id }
        }
    };

    Ok(TransitionResult {
        new_state,
        changed,
        outcome,
    })
}

#[allow(clippy::too_many_arguments)]
fn create_aircraft(
    state: &mut Fleet,
    code: String,
    model: String,
    category: AircraftCategory,
    capacity: u32,
    range_km: u32,
    stages: Vec<StageDraft>,
    ids: &mut dyn IdGenerator,
) -> Result<Outcome, CoreError> {
    let mut new_stages: Vec<Stage> = Vec::with_capacity(stages.len());
    for draft in stages {
        let stage_id: String = fresh_id(ids, |candidate| {
            new_stages.iter().any(|s: &Stage| s.id == candidate)
        });
        new_stages.push(Stage::new(stage_id, draft.name, draft.due));
    }

    let aircraft: Aircraft = Aircraft {
        code: code.trim().to_string(),
        model,
        category,
        capacity,
        range_km,
        stages: new_stages,
        parts: Vec::new(),
        tests: Vec::new(),
        report: None,
    };

    validate_aircraft_fields(&aircraft)?;
    validate_aircraft_code_unique(&aircraft.code, &state.aircraft)?;

    let code: String = aircraft.code.clone();
    state.aircraft.push(aircraft);
    Ok(Outcome::AircraftCreated { code })
}

fn stage_mut<'a>(aircraft: &'a mut Aircraft, stage_id: &str) -> Result<&'a mut Stage, DomainError> {
    let aircraft_code: String = aircraft.code.clone();
    aircraft
        .stages
        .iter_mut()
        .find(|s| s.id == stage_id)
        .ok_or_else(|| DomainError::StageNotFound {
            aircraft_code,
            stage_id: stage_id.to_string(),
        })
}

fn advance_stage(
    state: &mut Fleet,
    aircraft_code: String,
    stage_id: String,
    status: StageStatus,
) -> Result<Outcome, CoreError> {
    let aircraft: &mut Aircraft = state.aircraft_mut(&aircraft_code)?;
    let index: usize = validate_stage_advance(aircraft, &stage_id, status)?;
    aircraft.stages[index].status = status;
    Ok(Outcome::StageAdvanced {
        aircraft_code,
        stage_id,
        status,
    })
}

fn assign_employee(
    state: &mut Fleet,
    aircraft_code: &str,
    stage_id: String,
    employee_id: EmployeeId,
) -> Result<Outcome, CoreError> {
    let employee_known: bool = state.find_employee(&employee_id).is_some();

    let aircraft: &mut Aircraft = state.aircraft_mut(aircraft_code)?;
    let stage: &mut Stage = stage_mut(aircraft, &stage_id)?;

    if !employee_known {
        return Err(DomainError::EmployeeNotFound {
            employee_id: employee_id.value().to_string(),
        }
        .into());
    }

    if stage.is_assigned(&employee_id) {
        return Err(DomainError::DuplicateAssignment {
            stage_id,
            employee_id: employee_id.value().to_string(),
        }
        .into());
    }

    stage.assigned_employees.push(employee_id.clone());
    Ok(Outcome::EmployeeAssigned {
        stage_id,
        employee_id,
    })
}

fn add_part(
    state: &mut Fleet,
    aircraft_code: String,
    draft: PartDraft,
    ids: &mut dyn IdGenerator,
) -> Result<Outcome, CoreError> {
    let aircraft: &mut Aircraft = state.aircraft_mut(&aircraft_code)?;

    let part_id: String = fresh_id(ids, |candidate| {
        aircraft.parts.iter().any(|p| p.id == candidate)
    });
    aircraft.parts.push(Part {
        id: part_id.clone(),
        name: draft.name,
        origin: draft.origin,
        supplier: draft.supplier,
        status: PartStatus::InProduction,
    });

    Ok(Outcome::PartAdded {
        aircraft_code,
        part_id,
    })
}

#[allow(clippy::too_many_arguments)]
fn create_employee(
    state: &mut Fleet,
    name: String,
    phone: String,
    address: String,
    login: String,
    password: String,
    role: Role,
    ids: &mut dyn IdGenerator,
) -> Result<Outcome, CoreError> {
    let employee_id: EmployeeId = EmployeeId::new(&fresh_id(ids, |candidate| {
        state.employees.iter().any(|e| e.id.value() == candidate)
    }));

    let password: String = if password.is_empty() {
        String::from(DEFAULT_PASSWORD)
    } else {
        password
    };

    let employee: Employee = Employee {
        id: employee_id.clone(),
        name,
        phone,
        address,
        login,
        password,
        role,
    };

    validate_employee_fields(&employee)?;
    validate_login_unique(&employee.login, &state.employees)?;

    state.employees.push(employee);
    Ok(Outcome::EmployeeCreated { employee_id })
}
