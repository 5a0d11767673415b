// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request handling for the AeroCode tracker.
//!
//! This crate sits between a presentation layer and the record store. It
//! authenticates employees, enforces the role policy, turns text requests
//! into core commands, and translates failures into [`ApiError`].

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod capabilities;
mod error;
mod handlers;
mod request_response;
mod request_validation;

#[cfg(test)]
mod tests;

pub use auth::{
    Action, AuthenticatedActor, AuthenticationService, AuthorizationService, permits,
};
pub use capabilities::{
    compute_aircraft_capabilities, compute_employee_capabilities, compute_global_capabilities,
    compute_stage_capabilities,
};
pub use error::{
    ApiError, AuthError, translate_core_error, translate_domain_error,
    translate_persistence_error,
};
pub use handlers::{
    add_part, advance_stage, assign_employee, create_aircraft, create_employee, dashboard,
    delete_aircraft, delete_employee, generate_report, get_aircraft, get_report, list_aircraft,
    list_employees, list_reports, login, record_test, set_part_status, unassign_employee,
    update_aircraft, whoami,
};
pub use request_response::{
    AddPartRequest, AdvanceStageRequest, AircraftCapabilities, AircraftDetailResponse,
    AircraftField, AircraftMutationResponse, AircraftSummary, Capability, CreateAircraftRequest,
    CreateEmployeeRequest, DashboardResponse, EmployeeCapabilities, EmployeeInfo,
    EmployeeMutationResponse, GenerateReportRequest, GlobalCapabilities, ListAircraftResponse,
    ListEmployeesResponse, ListReportsResponse, LoginRequest, PartInfo, RecordTestRequest,
    ReportInfo, SetPartStatusRequest, StageAssignmentRequest, StageCapabilities,
    StageDefinition, StageInfo, TestInfo, UpdateAircraftRequest, WhoAmIResponse,
};
pub use request_validation::{RequestValidationError, parse_date, parse_enum, require_text};
