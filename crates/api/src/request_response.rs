// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Requests carry enumerated values and dates as text, exactly as a user
//! supplied them. Handlers parse them before building core commands.

use aerocode_domain::{Aircraft, Employee, Part, Report, Stage, TestRecord, format_iso_date};

// ============================================================================
// Session
// ============================================================================

/// API request to log in.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoginRequest {
    /// The login name.
    pub login: String,
    /// The password.
    pub password: String,
}

/// API response describing the logged in employee.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WhoAmIResponse {
    /// The employee id.
    pub employee_id: String,
    /// The login name.
    pub login: String,
    /// The display name.
    pub name: String,
    /// The role label.
    pub role: String,
    /// What the employee may do.
    pub capabilities: GlobalCapabilities,
}

// ============================================================================
// Aircraft
// ============================================================================

/// A stage to create along with a new aircraft.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StageDefinition {
    /// The stage name.
    pub name: String,
    /// The due date, `YYYY-MM-DD`.
    pub due: String,
}

/// API request to register a new aircraft.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateAircraftRequest {
    /// Unique aircraft code.
    pub code: String,
    /// Model name.
    pub model: String,
    /// `commercial` or `military`.
    pub category: String,
    /// Passenger or payload capacity.
    pub capacity: u32,
    /// Range in kilometres.
    pub range_km: u32,
    /// Production stages, in order.
    pub stages: Vec<StageDefinition>,
}

/// A single editable aircraft field.
///
/// The code and the stage list are fixed after creation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AircraftField {
    /// New model name.
    Model(String),
    /// New category, `commercial` or `military`.
    Category(String),
    /// New capacity.
    Capacity(u32),
    /// New range in kilometres.
    RangeKm(u32),
}

/// API request to change descriptive fields of an aircraft.
///
/// The fields are applied together: either all of them are saved or none.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UpdateAircraftRequest {
    /// The aircraft code.
    pub code: String,
    /// The fields and their new values, applied in order.
    pub fields: Vec<AircraftField>,
}

/// API request to move a stage to its next status.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AdvanceStageRequest {
    /// The aircraft code.
    pub aircraft_code: String,
    /// The stage id.
    pub stage_id: String,
    /// `in_progress` or `done`.
    pub status: String,
}

/// API request to assign an employee to a stage, or remove them from it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StageAssignmentRequest {
    /// The aircraft code.
    pub aircraft_code: String,
    /// The stage id.
    pub stage_id: String,
    /// The employee id.
    pub employee_id: String,
}

/// API request to add a part to an aircraft.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AddPartRequest {
    /// The aircraft code.
    pub aircraft_code: String,
    /// The part name.
    pub name: String,
    /// `domestic` or `imported`.
    pub origin: String,
    /// The supplier.
    pub supplier: String,
}

/// API request to set a part's supply status.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SetPartStatusRequest {
    /// The aircraft code.
    pub aircraft_code: String,
    /// The part id.
    pub part_id: String,
    /// `in_production`, `in_transit` or `ready`.
    pub status: String,
}

/// API request to record a quality test.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RecordTestRequest {
    /// The aircraft code.
    pub aircraft_code: String,
    /// `electrical`, `hydraulic` or `aerodynamic`.
    pub category: String,
    /// `passed` or `failed`.
    pub outcome: String,
}

/// API request to generate the final delivery report.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GenerateReportRequest {
    /// The aircraft code.
    pub aircraft_code: String,
    /// The receiving client.
    pub client_name: String,
    /// The delivery date, `YYYY-MM-DD`.
    pub delivery_date: String,
}

/// API response for any successful change to an aircraft.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AircraftMutationResponse {
    /// The aircraft code.
    pub aircraft_code: String,
    /// Id of the stage, part or test created or changed, if any.
    pub item_id: Option<String>,
    /// A success message.
    pub message: String,
}

/// One row of the aircraft list.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AircraftSummary {
    pub code: String,
    pub model: String,
    pub category: String,
    pub capacity: u32,
    pub range_km: u32,
    /// Derived overall status label.
    pub production_status: String,
    pub stages_done: usize,
    pub stage_count: usize,
    pub has_report: bool,
}

/// API response listing every aircraft.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListAircraftResponse {
    /// Aircraft in stored order.
    pub aircraft: Vec<AircraftSummary>,
}

/// A stage as shown on the aircraft detail view.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StageInfo {
    pub id: String,
    pub name: String,
    /// Due date, `YYYY-MM-DD`.
    pub due: String,
    /// Stored status name.
    pub status: String,
    /// Display label for the status.
    pub status_label: String,
    /// Assigned employee ids. Ids of deleted employees are kept.
    pub assigned_employees: Vec<String>,
    pub capabilities: StageCapabilities,
}

/// A part as shown on the aircraft detail view.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PartInfo {
    pub id: String,
    pub name: String,
    pub origin: String,
    pub supplier: String,
    pub status: String,
    pub status_label: String,
}

/// A recorded test.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TestInfo {
    pub id: String,
    pub category: String,
    pub outcome: String,
}

/// API response with everything known about one aircraft.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AircraftDetailResponse {
    pub summary: AircraftSummary,
    pub stages: Vec<StageInfo>,
    pub parts: Vec<PartInfo>,
    pub tests: Vec<TestInfo>,
    pub report: Option<ReportInfo>,
    pub capabilities: AircraftCapabilities,
}

/// API response for the production overview.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DashboardResponse {
    /// Number of registered aircraft.
    pub total_aircraft: usize,
    /// Aircraft whose production has not started.
    pub not_started: usize,
    /// Aircraft currently in production.
    pub in_production: usize,
    /// Aircraft with every stage done.
    pub completed: usize,
    /// Aircraft with a final report.
    pub reports_generated: usize,
    /// Stages pending across the fleet.
    pub stages_pending: usize,
    /// Stages in progress across the fleet.
    pub stages_in_progress: usize,
    /// Stages done across the fleet.
    pub stages_done: usize,
    /// Aircraft in stored order.
    pub aircraft: Vec<AircraftSummary>,
}

// ============================================================================
// Reports
// ============================================================================

/// A stored delivery report.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReportInfo {
    pub aircraft_code: String,
    pub client_name: String,
    /// Delivery date, `YYYY-MM-DD`.
    pub delivery_date: String,
    /// Suggested export file name.
    pub file_name: String,
    /// Report text.
    pub content: String,
}

impl ReportInfo {
    /// Builds the response view of a stored report.
    #[must_use]
    pub fn from_report(report: &Report) -> Self {
        Self {
            aircraft_code: report.aircraft_code.clone(),
            client_name: report.client_name.clone(),
            delivery_date: format_iso_date(report.delivery_date),
            file_name: report.file_name(),
            content: report.content.clone(),
        }
    }
}

/// API response listing every stored report.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListReportsResponse {
    /// Reports in aircraft order.
    pub reports: Vec<ReportInfo>,
}

// ============================================================================
// Employees
// ============================================================================

/// API request to create an employee.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateEmployeeRequest {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub login: String,
    /// Blank means the default password.
    pub password: String,
    /// `administrator`, `engineer` or `operator`.
    pub role: String,
}

/// API response for a created or deleted employee.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EmployeeMutationResponse {
    /// The employee id.
    pub employee_id: String,
    /// A success message.
    pub message: String,
}

/// Employee information. The password is never included.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EmployeeInfo {
    pub employee_id: String,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub login: String,
    pub role: String,
    pub capabilities: EmployeeCapabilities,
}

/// API response listing every employee.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListEmployeesResponse {
    pub employees: Vec<EmployeeInfo>,
}

// ============================================================================
// Capabilities
// ============================================================================

/// Whether an action is permitted.
///
/// Serialized as a plain boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// The action is permitted.
    Allowed,
    /// The action is not permitted.
    Denied,
}

impl Capability {
    /// Returns true if the capability is allowed.
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Creates a capability from a boolean value.
    #[must_use]
    pub const fn from_bool(value: bool) -> Self {
        if value { Self::Allowed } else { Self::Denied }
    }
}

impl serde::Serialize for Capability {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_bool(self.is_allowed())
    }
}

impl<'de> serde::Deserialize<'de> for Capability {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let allowed: bool = bool::deserialize(deserializer)?;
        Ok(Self::from_bool(allowed))
    }
}

/// Role-level capabilities for the logged in employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GlobalCapabilities {
    pub can_create_aircraft: Capability,
    pub can_edit_aircraft: Capability,
    pub can_delete_aircraft: Capability,
    pub can_advance_stages: Capability,
    pub can_assign_employees: Capability,
    pub can_add_parts: Capability,
    pub can_set_part_status: Capability,
    pub can_record_tests: Capability,
    pub can_generate_reports: Capability,
    pub can_manage_employees: Capability,
}

/// Capabilities for one stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StageCapabilities {
    /// Pending and the actor may advance stages.
    pub can_start: Capability,
    /// In progress, predecessor done, and the actor may advance stages.
    pub can_complete: Capability,
}

/// Capabilities for one aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AircraftCapabilities {
    /// Every stage done and the actor may generate reports.
    pub can_generate_report: Capability,
}

/// Capabilities for one employee record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EmployeeCapabilities {
    /// The actor may delete employees and the target is not protected.
    pub can_delete: Capability,
}

// ============================================================================
// Conversions
// ============================================================================

#[must_use]
pub fn part_info(part: &Part) -> PartInfo {
    PartInfo {
        id: part.id.clone(),
        name: part.name.clone(),
        origin: part.origin.as_str().to_string(),
        supplier: part.supplier.clone(),
        status: part.status.as_str().to_string(),
        status_label: part.status.label().to_string(),
    }
}

#[must_use]
pub fn test_info(test: &TestRecord) -> TestInfo {
    TestInfo {
        id: test.id.clone(),
        category: test.category.to_string(),
        outcome: test.outcome.to_string(),
    }
}

#[must_use]
pub fn stage_info(stage: &Stage, capabilities: StageCapabilities) -> StageInfo {
    StageInfo {
        id: stage.id.clone(),
        name: stage.name.clone(),
        due: format_iso_date(stage.due),
        status: stage.status.as_str().to_string(),
        status_label: stage.status.label().to_string(),
        assigned_employees: stage
            .assigned_employees
            .iter()
            .map(|id| id.value().to_string())
            .collect(),
        capabilities,
    }
}

#[must_use]
pub fn aircraft_summary(aircraft: &Aircraft) -> AircraftSummary {
    AircraftSummary {
        code: aircraft.code.clone(),
        model: aircraft.model.clone(),
        category: aircraft.category.to_string(),
        capacity: aircraft.capacity,
        range_km: aircraft.range_km,
        production_status: aerocode_domain::production_status(aircraft).to_string(),
        stages_done: aircraft
            .stages
            .iter()
            .filter(|s| s.status.is_done())
            .count(),
        stage_count: aircraft.stages.len(),
        has_report: aircraft.has_report(),
    }
}

#[must_use]
pub fn employee_info(employee: &Employee, capabilities: EmployeeCapabilities) -> EmployeeInfo {
    EmployeeInfo {
        employee_id: employee.id.value().to_string(),
        name: employee.name.clone(),
        phone: employee.phone.clone(),
        address: employee.address.clone(),
        login: employee.login.clone(),
        role: employee.role.to_string(),
        capabilities,
    }
}
