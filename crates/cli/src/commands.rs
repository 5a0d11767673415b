// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Console subcommands and their mapping onto API handlers.

use std::path::{Path, PathBuf};

use aerocode_api::{
    AddPartRequest, AdvanceStageRequest, AircraftField, AuthenticatedActor, CreateAircraftRequest,
    CreateEmployeeRequest, GenerateReportRequest, RecordTestRequest, ReportInfo,
    SetPartStatusRequest, StageAssignmentRequest, StageDefinition, UpdateAircraftRequest,
    add_part, advance_stage, assign_employee, create_aircraft, create_employee, dashboard,
    delete_aircraft, delete_employee, generate_report, get_aircraft, get_report, list_aircraft,
    list_employees, list_reports, record_test, set_part_status, unassign_employee,
    update_aircraft, whoami,
};
use aerocode_persistence::RecordStore;
use clap::Subcommand;
use color_eyre::Result;
use color_eyre::eyre::{WrapErr, bail, eyre};
use tracing::info;

use crate::render;

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Show the logged in employee and what they may do
    Whoami,

    /// List every aircraft
    #[command(visible_alias = "ls")]
    List,

    /// Show one aircraft with its stages, parts, tests and report
    Show {
        /// Aircraft code
        code: String,
    },

    /// Production overview
    Dashboard,

    /// Register a new aircraft
    CreateAircraft {
        /// Unique aircraft code
        code: String,
        /// Model name
        model: String,
        /// `commercial` or `military`
        #[arg(long, default_value = "commercial")]
        category: String,
        /// Passenger or payload capacity
        #[arg(long)]
        capacity: u32,
        /// Range in kilometres
        #[arg(long, default_value_t = 0)]
        range_km: u32,
        /// Stage as `NAME@YYYY-MM-DD`, in production order. Repeat for each stage.
        #[arg(long = "stage", required = true)]
        stages: Vec<String>,
    },

    /// Change descriptive fields of an aircraft. All given fields are saved together or not at all.
    UpdateAircraft {
        /// Aircraft code
        code: String,
        #[arg(long)]
        model: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        capacity: Option<u32>,
        #[arg(long)]
        range_km: Option<u32>,
    },

    /// Delete an aircraft
    DeleteAircraft {
        /// Aircraft code
        code: String,
    },

    /// Move a stage to `in_progress` or `done`
    Advance {
        code: String,
        stage_id: String,
        status: String,
    },

    /// Assign an employee to a stage
    Assign {
        code: String,
        stage_id: String,
        employee_id: String,
    },

    /// Remove an employee from a stage
    Unassign {
        code: String,
        stage_id: String,
        employee_id: String,
    },

    /// Add a part to an aircraft
    AddPart {
        code: String,
        name: String,
        /// `domestic` or `imported`
        #[arg(long, default_value = "domestic")]
        origin: String,
        #[arg(long)]
        supplier: String,
    },

    /// Set a part's supply status
    SetPartStatus {
        code: String,
        part_id: String,
        /// `in_production`, `in_transit` or `ready`
        status: String,
    },

    /// Record a quality test
    RecordTest {
        code: String,
        /// `electrical`, `hydraulic` or `aerodynamic`
        category: String,
        /// `passed` or `failed`
        outcome: String,
    },

    /// Generate the final delivery report and write it to `REPORT_<code>.txt`
    GenerateReport {
        code: String,
        #[arg(long)]
        client: String,
        /// `YYYY-MM-DD`
        #[arg(long)]
        delivery_date: String,
        /// Directory to write the report file into
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// List every stored report
    Reports,

    /// Print the stored report of one aircraft
    Report {
        code: String,
    },

    /// Create an employee
    CreateEmployee {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        address: String,
        #[arg(long = "employee-login")]
        employee_login: String,
        /// Leave empty for the default password
        #[arg(long = "employee-password", default_value = "")]
        employee_password: String,
        /// `administrator`, `engineer` or `operator`
        #[arg(long)]
        role: String,
    },

    /// Delete an employee
    DeleteEmployee {
        employee_id: String,
    },

    /// List every employee
    Employees,
}

impl Command {
    #[allow(clippy::too_many_lines)]
    pub fn run(
        self,
        store: &mut RecordStore,
        actor: &AuthenticatedActor,
        json: bool,
    ) -> Result<()> {
        match self {
            Self::Whoami => render::whoami(&whoami(actor), json),
            Self::List => render::aircraft_list(&list_aircraft(store)?, json),
            Self::Show { code } => {
                render::aircraft_detail(&get_aircraft(store, &code, actor)?, json)
            }
            Self::Dashboard => render::dashboard(&dashboard(store)?, json),
            Self::CreateAircraft {
                code,
                model,
                category,
                capacity,
                range_km,
                stages,
            } => {
                let stages: Vec<StageDefinition> = stages
                    .iter()
                    .map(String::as_str)
                    .map(parse_stage)
                    .collect::<Result<Vec<StageDefinition>>>()?;
                let request: CreateAircraftRequest = CreateAircraftRequest {
                    code,
                    model,
                    category,
                    capacity,
                    range_km,
                    stages,
                };
                render::mutation(&create_aircraft(store, &request, actor)?, json)
            }
            Self::UpdateAircraft {
                code,
                model,
                category,
                capacity,
                range_km,
            } => {
                let fields: Vec<AircraftField> = [
                    model.map(AircraftField::Model),
                    category.map(AircraftField::Category),
                    capacity.map(AircraftField::Capacity),
                    range_km.map(AircraftField::RangeKm),
                ]
                .into_iter()
                .flatten()
                .collect();
                if fields.is_empty() {
                    bail!(
                        "nothing to update: pass at least one of --model, --category, --capacity, --range-km"
                    );
                }
                let request: UpdateAircraftRequest = UpdateAircraftRequest { code, fields };
                render::mutation(&update_aircraft(store, &request, actor)?, json)
            }
            Self::DeleteAircraft { code } => {
                render::mutation(&delete_aircraft(store, &code, actor)?, json)
            }
            Self::Advance {
                code,
                stage_id,
                status,
            } => {
                let request: AdvanceStageRequest = AdvanceStageRequest {
                    aircraft_code: code,
                    stage_id,
                    status,
                };
                render::mutation(&advance_stage(store, &request, actor)?, json)
            }
            Self::Assign {
                code,
                stage_id,
                employee_id,
            } => {
                let request: StageAssignmentRequest = StageAssignmentRequest {
                    aircraft_code: code,
                    stage_id,
                    employee_id,
                };
                render::mutation(&assign_employee(store, &request, actor)?, json)
            }
            Self::Unassign {
                code,
                stage_id,
                employee_id,
            } => {
                let request: StageAssignmentRequest = StageAssignmentRequest {
                    aircraft_code: code,
                    stage_id,
                    employee_id,
                };
                render::mutation(&unassign_employee(store, &request, actor)?, json)
            }
            Self::AddPart {
                code,
                name,
                origin,
                supplier,
            } => {
                let request: AddPartRequest = AddPartRequest {
                    aircraft_code: code,
                    name,
                    origin,
                    supplier,
                };
                render::mutation(&add_part(store, &request, actor)?, json)
            }
            Self::SetPartStatus {
                code,
                part_id,
                status,
            } => {
                let request: SetPartStatusRequest = SetPartStatusRequest {
                    aircraft_code: code,
                    part_id,
                    status,
                };
                render::mutation(&set_part_status(store, &request, actor)?, json)
            }
            Self::RecordTest {
                code,
                category,
                outcome,
            } => {
                let request: RecordTestRequest = RecordTestRequest {
                    aircraft_code: code,
                    category,
                    outcome,
                };
                render::mutation(&record_test(store, &request, actor)?, json)
            }
            Self::GenerateReport {
                code,
                client,
                delivery_date,
                out_dir,
            } => {
                let request: GenerateReportRequest = GenerateReportRequest {
                    aircraft_code: code,
                    client_name: client,
                    delivery_date,
                };
                let report: ReportInfo = generate_report(store, &request, actor)?;
                let path: PathBuf = export_report(&report, &out_dir)?;
                render::report_written(&report, &path, json)
            }
            Self::Reports => render::report_list(&list_reports(store)?, json),
            Self::Report { code } => render::report(&get_report(store, &code)?, json),
            Self::CreateEmployee {
                name,
                phone,
                address,
                employee_login,
                employee_password,
                role,
            } => {
                let request: CreateEmployeeRequest = CreateEmployeeRequest {
                    name,
                    phone,
                    address,
                    login: employee_login,
                    password: employee_password,
                    role,
                };
                render::employee_mutation(&create_employee(store, &request, actor)?, json)
            }
            Self::DeleteEmployee { employee_id } => {
                render::employee_mutation(&delete_employee(store, &employee_id, actor)?, json)
            }
            Self::Employees => render::employee_list(&list_employees(store, actor)?, json),
        }
    }
}

/// Splits `NAME@YYYY-MM-DD` into a stage definition.
///
/// The date is checked later by the handler.
fn parse_stage(text: &str) -> Result<StageDefinition> {
    let (name, due) = text
        .rsplit_once('@')
        .ok_or_else(|| eyre!("stage '{text}' must look like NAME@YYYY-MM-DD"))?;
    Ok(StageDefinition {
        name: name.to_string(),
        due: due.to_string(),
    })
}

fn export_report(report: &ReportInfo, out_dir: &Path) -> Result<PathBuf> {
    let path: PathBuf = out_dir.join(&report.file_name);
    std::fs::write(&path, &report.content)
        .wrap_err_with(|| format!("writing report to {}", path.display()))?;
    info!(path = %path.display(), "Report exported");
    Ok(path)
}
