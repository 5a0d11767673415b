// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Capability computation for authorization-aware UI gating.
//!
//! Capabilities tell a presentation layer which controls to offer. They are
//! advisory only and do not replace backend authorization checks.

use aerocode_domain::{
    Aircraft, Employee, StageStatus, predecessor_done, validate_report_ready,
};

use crate::auth::{Action, AuthenticatedActor, permits};
use crate::request_response::{
    AircraftCapabilities, Capability, EmployeeCapabilities, GlobalCapabilities, StageCapabilities,
};

/// Computes role-level capabilities for an authenticated actor.
#[must_use]
pub fn compute_global_capabilities(actor: &AuthenticatedActor) -> GlobalCapabilities {
    let allowed = |action: Action| Capability::from_bool(permits(actor.role, action));
    GlobalCapabilities {
        can_create_aircraft: allowed(Action::CreateAircraft),
        can_edit_aircraft: allowed(Action::EditAircraft),
        can_delete_aircraft: allowed(Action::DeleteAircraft),
        can_advance_stages: allowed(Action::AdvanceStage),
        can_assign_employees: allowed(Action::AssignEmployee),
        can_add_parts: allowed(Action::AddPart),
        can_set_part_status: allowed(Action::SetPartStatus),
        can_record_tests: allowed(Action::RecordTest),
        can_generate_reports: allowed(Action::GenerateReport),
        can_manage_employees: allowed(Action::CreateEmployee),
    }
}

/// Computes capabilities for the stage at `index` on `aircraft`.
///
/// `can_complete` mirrors the ordering rule: the stage must be in progress
/// and the stage stored before it, if any, must be done.
#[must_use]
pub fn compute_stage_capabilities(
    actor: &AuthenticatedActor,
    aircraft: &Aircraft,
    index: usize,
) -> StageCapabilities {
    let may_advance: bool = permits(actor.role, Action::AdvanceStage);
    let Some(stage) = aircraft.stages.get(index) else {
        return StageCapabilities {
            can_start: Capability::Denied,
            can_complete: Capability::Denied,
        };
    };

    StageCapabilities {
        can_start: Capability::from_bool(may_advance && stage.status == StageStatus::Pending),
        can_complete: Capability::from_bool(
            may_advance
                && stage.status == StageStatus::InProgress
                && predecessor_done(&aircraft.stages, index),
        ),
    }
}

/// Computes capabilities for an aircraft as a whole.
#[must_use]
pub fn compute_aircraft_capabilities(
    actor: &AuthenticatedActor,
    aircraft: &Aircraft,
) -> AircraftCapabilities {
    AircraftCapabilities {
        can_generate_report: Capability::from_bool(
            permits(actor.role, Action::GenerateReport) && validate_report_ready(aircraft).is_ok(),
        ),
    }
}

/// Computes capabilities for an employee record.
///
/// The seed administrator can never be deleted, whoever is asking.
#[must_use]
pub fn compute_employee_capabilities(
    actor: &AuthenticatedActor,
    target: &Employee,
) -> EmployeeCapabilities {
    EmployeeCapabilities {
        can_delete: Capability::from_bool(
            permits(actor.role, Action::DeleteEmployee) && !target.id.is_protected(),
        ),
    }
}
