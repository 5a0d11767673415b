// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use aerocode_persistence::RecordStore;

use crate::tests::helpers::{
    SEED_AIRCRAFT, create_test_admin, create_test_advance, create_test_aircraft_request,
    create_test_engineer, create_test_store, stage_ids,
};
use crate::{
    AddPartRequest, AircraftDetailResponse, AircraftField, AircraftMutationResponse, ApiError,
    AuthenticatedActor, Capability, CreateAircraftRequest, DashboardResponse, RecordTestRequest,
    SetPartStatusRequest, StageAssignmentRequest, StageInfo, UpdateAircraftRequest, add_part,
    advance_stage, assign_employee, create_aircraft, dashboard, delete_aircraft, get_aircraft,
    record_test, set_part_status, unassign_employee, update_aircraft,
};

fn detail(store: &mut RecordStore, code: &str) -> AircraftDetailResponse {
    get_aircraft(store, code, &create_test_engineer()).unwrap()
}

fn stage<'a>(detail: &'a AircraftDetailResponse, id: &str) -> &'a StageInfo {
    detail.stages.iter().find(|s| s.id == id).unwrap()
}

fn assert_rule(result: Result<AircraftMutationResponse, ApiError>, expected: &str) {
    match result {
        Err(ApiError::DomainRuleViolation { rule, .. }) => assert_eq!(rule, expected),
        other => panic!("expected rule '{expected}', got {other:?}"),
    }
}

fn assignment(stage_id: &str, employee_id: &str) -> StageAssignmentRequest {
    StageAssignmentRequest {
        aircraft_code: String::from(SEED_AIRCRAFT),
        stage_id: stage_id.to_string(),
        employee_id: employee_id.to_string(),
    }
}

// ============================================================================
// Aircraft registration and editing
// ============================================================================

#[test]
fn test_create_aircraft_keeps_stage_order() {
    let mut store: RecordStore = create_test_store();
    let response: AircraftMutationResponse = create_aircraft(
        &mut store,
        &create_test_aircraft_request("E175-BR09"),
        &create_test_admin(),
    )
    .unwrap();
    assert_eq!(response.aircraft_code, "E175-BR09");

    let created: AircraftDetailResponse = detail(&mut store, "E175-BR09");
    let names: Vec<&str> = created.stages.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Fuselage", "Wings"]);
    assert!(created.stages.iter().all(|s| s.status == "pending"));
    assert!(created.stages.iter().all(|s| s.id.len() == 7));
    assert_eq!(created.stages[0].due, "2026-07-01");
    assert_eq!(created.summary.production_status, "Not Started");
}

#[test]
fn test_create_aircraft_rejects_existing_code() {
    let mut store: RecordStore = create_test_store();
    let result = create_aircraft(
        &mut store,
        &create_test_aircraft_request(SEED_AIRCRAFT),
        &create_test_admin(),
    );
    assert_rule(result, "unique_aircraft_code");
}

#[test]
fn test_create_aircraft_rejects_bad_input() {
    let mut store: RecordStore = create_test_store();
    let admin: AuthenticatedActor = create_test_admin();

    let mut bad_date: CreateAircraftRequest = create_test_aircraft_request("X1");
    bad_date.stages[1].due = String::from("01/08/2026");
    assert!(matches!(
        create_aircraft(&mut store, &bad_date, &admin),
        Err(ApiError::InvalidInput { field, .. }) if field == "stages.due"
    ));

    let mut bad_category: CreateAircraftRequest = create_test_aircraft_request("X1");
    bad_category.category = String::from("cargo");
    assert!(matches!(
        create_aircraft(&mut store, &bad_category, &admin),
        Err(ApiError::InvalidInput { field, .. }) if field == "category"
    ));

    let mut no_stages: CreateAircraftRequest = create_test_aircraft_request("X1");
    no_stages.stages.clear();
    assert!(matches!(
        create_aircraft(&mut store, &no_stages, &admin),
        Err(ApiError::InvalidInput { field, .. }) if field == "stages"
    ));

    let blank_code: CreateAircraftRequest = create_test_aircraft_request("  ");
    assert!(matches!(
        create_aircraft(&mut store, &blank_code, &admin),
        Err(ApiError::InvalidInput { field, .. }) if field == "code"
    ));

    let slashed_code: CreateAircraftRequest = create_test_aircraft_request("E195/BR01");
    assert!(matches!(
        create_aircraft(&mut store, &slashed_code, &admin),
        Err(ApiError::InvalidInput { field, .. }) if field == "code"
    ));
}

fn update_request(code: &str, fields: Vec<AircraftField>) -> UpdateAircraftRequest {
    UpdateAircraftRequest {
        code: code.to_string(),
        fields,
    }
}

#[test]
fn test_update_aircraft_fields() {
    let mut store: RecordStore = create_test_store();
    let admin: AuthenticatedActor = create_test_admin();

    update_aircraft(
        &mut store,
        &update_request(
            "C390-MIL02",
            vec![
                AircraftField::Capacity(90),
                AircraftField::Category(String::from("Commercial")),
            ],
        ),
        &admin,
    )
    .unwrap();

    let updated: AircraftDetailResponse = detail(&mut store, "C390-MIL02");
    assert_eq!(updated.summary.capacity, 90);
    assert_eq!(updated.summary.category, "Commercial");

    let zero = update_aircraft(
        &mut store,
        &update_request("C390-MIL02", vec![AircraftField::Capacity(0)]),
        &admin,
    );
    assert!(matches!(zero, Err(ApiError::InvalidInput { field, .. }) if field == "capacity"));
    assert_eq!(detail(&mut store, "C390-MIL02").summary.capacity, 90);

    let empty = update_aircraft(&mut store, &update_request("C390-MIL02", Vec::new()), &admin);
    assert!(matches!(empty, Err(ApiError::InvalidInput { field, .. }) if field == "fields"));
}

#[test]
fn test_update_aircraft_is_all_or_nothing() {
    let mut store: RecordStore = create_test_store();
    let admin: AuthenticatedActor = create_test_admin();

    let result = update_aircraft(
        &mut store,
        &update_request(
            SEED_AIRCRAFT,
            vec![
                AircraftField::Model(String::from("CHANGED")),
                AircraftField::Capacity(0),
            ],
        ),
        &admin,
    );
    assert!(matches!(result, Err(ApiError::InvalidInput { field, .. }) if field == "capacity"));

    let stored: AircraftDetailResponse = detail(&mut store, SEED_AIRCRAFT);
    assert_eq!(stored.summary.model, "E195-E2");
    assert_eq!(stored.summary.capacity, 146);

    let unknown_category = update_aircraft(
        &mut store,
        &update_request(
            SEED_AIRCRAFT,
            vec![
                AircraftField::RangeKm(1),
                AircraftField::Category(String::from("spaceship")),
            ],
        ),
        &admin,
    );
    assert!(matches!(
        unknown_category,
        Err(ApiError::InvalidInput { field, .. }) if field == "category"
    ));
    assert_eq!(detail(&mut store, SEED_AIRCRAFT).summary.range_km, 4800);
}

#[test]
fn test_delete_aircraft() {
    let mut store: RecordStore = create_test_store();
    delete_aircraft(&mut store, "C390-MIL02", &create_test_admin()).unwrap();

    let missing = get_aircraft(&mut store, "C390-MIL02", &create_test_admin());
    assert!(matches!(
        missing,
        Err(ApiError::ResourceNotFound { resource_type, .. }) if resource_type == "Aircraft"
    ));

    let again = delete_aircraft(&mut store, "C390-MIL02", &create_test_admin());
    assert!(matches!(again, Err(ApiError::ResourceNotFound { .. })));
}

// ============================================================================
// Stage sequencing
// ============================================================================

#[test]
fn test_stage_completes_after_predecessor() {
    let mut store: RecordStore = create_test_store();
    let engineer: AuthenticatedActor = create_test_engineer();

    advance_stage(
        &mut store,
        &create_test_advance(SEED_AIRCRAFT, "E002", "done"),
        &engineer,
    )
    .unwrap();

    let after: AircraftDetailResponse = detail(&mut store, SEED_AIRCRAFT);
    assert_eq!(stage(&after, "E002").status, "done");
    assert_eq!(stage(&after, "E002").status_label, "Done");
}

#[test]
fn test_stage_cannot_complete_before_predecessor() {
    let mut store: RecordStore = create_test_store();
    let engineer: AuthenticatedActor = create_test_engineer();

    // E003 may start while E002 is still in progress
    advance_stage(
        &mut store,
        &create_test_advance(SEED_AIRCRAFT, "E003", "In Progress"),
        &engineer,
    )
    .unwrap();

    let result = advance_stage(
        &mut store,
        &create_test_advance(SEED_AIRCRAFT, "E003", "done"),
        &engineer,
    );
    assert_rule(result, "stage_order");

    let after: AircraftDetailResponse = detail(&mut store, SEED_AIRCRAFT);
    assert_eq!(stage(&after, "E003").status, "in_progress");
}

#[test]
fn test_stage_cannot_skip_or_reverse() {
    let mut store: RecordStore = create_test_store();
    let engineer: AuthenticatedActor = create_test_engineer();

    let skip = advance_stage(
        &mut store,
        &create_test_advance(SEED_AIRCRAFT, "E004", "done"),
        &engineer,
    );
    assert_rule(skip, "forward_stage_transition");

    let reverse = advance_stage(
        &mut store,
        &create_test_advance(SEED_AIRCRAFT, "E001", "in_progress"),
        &engineer,
    );
    assert_rule(reverse, "forward_stage_transition");

    let unknown = advance_stage(
        &mut store,
        &create_test_advance(SEED_AIRCRAFT, "E999", "in_progress"),
        &engineer,
    );
    assert!(matches!(
        unknown,
        Err(ApiError::ResourceNotFound { resource_type, .. }) if resource_type == "Stage"
    ));
}

#[test]
fn test_two_stage_scenario_on_new_aircraft() {
    let mut store: RecordStore = create_test_store();
    let engineer: AuthenticatedActor = create_test_engineer();
    create_aircraft(
        &mut store,
        &create_test_aircraft_request("X1"),
        &create_test_admin(),
    )
    .unwrap();
    let ids: Vec<String> = stage_ids(&mut store, "X1");
    let (first, second): (&str, &str) = (&ids[0], &ids[1]);

    // B cannot finish while A is pending, even once started
    advance_stage(&mut store, &create_test_advance("X1", second, "in_progress"), &engineer)
        .unwrap();
    assert_rule(
        advance_stage(&mut store, &create_test_advance("X1", second, "done"), &engineer),
        "stage_order",
    );

    advance_stage(&mut store, &create_test_advance("X1", first, "in_progress"), &engineer)
        .unwrap();
    advance_stage(&mut store, &create_test_advance("X1", first, "done"), &engineer).unwrap();
    advance_stage(&mut store, &create_test_advance("X1", second, "done"), &engineer).unwrap();

    let finished: AircraftDetailResponse = detail(&mut store, "X1");
    assert_eq!(finished.summary.production_status, "Completed");
    assert_eq!(finished.summary.stages_done, 2);
}

#[test]
fn test_stage_capabilities_reflect_ordering() {
    let mut store: RecordStore = create_test_store();
    let seeded: AircraftDetailResponse = detail(&mut store, SEED_AIRCRAFT);

    assert_eq!(stage(&seeded, "E001").capabilities.can_start, Capability::Denied);
    assert_eq!(stage(&seeded, "E001").capabilities.can_complete, Capability::Denied);
    assert_eq!(stage(&seeded, "E002").capabilities.can_complete, Capability::Allowed);
    assert_eq!(stage(&seeded, "E003").capabilities.can_start, Capability::Allowed);
    assert_eq!(stage(&seeded, "E003").capabilities.can_complete, Capability::Denied);
}

// ============================================================================
// Assignments
// ============================================================================

#[test]
fn test_assign_and_unassign_employee() {
    let mut store: RecordStore = create_test_store();
    let engineer: AuthenticatedActor = create_test_engineer();

    assign_employee(&mut store, &assignment("E003", "F003"), &engineer).unwrap();
    assert_eq!(
        stage(&detail(&mut store, SEED_AIRCRAFT), "E003").assigned_employees,
        vec![String::from("F003")]
    );

    unassign_employee(&mut store, &assignment("E003", "F003"), &engineer).unwrap();
    assert!(
        stage(&detail(&mut store, SEED_AIRCRAFT), "E003")
            .assigned_employees
            .is_empty()
    );
}

#[test]
fn test_duplicate_assignment_is_rejected() {
    let mut store: RecordStore = create_test_store();
    let result = assign_employee(&mut store, &assignment("E001", "F002"), &create_test_engineer());
    assert_rule(result, "unique_assignment");

    let after: AircraftDetailResponse = detail(&mut store, SEED_AIRCRAFT);
    assert_eq!(stage(&after, "E001").assigned_employees.len(), 2);
}

#[test]
fn test_assignment_failures_for_missing_records() {
    let mut store: RecordStore = create_test_store();
    let engineer: AuthenticatedActor = create_test_engineer();

    let unknown_employee = assign_employee(&mut store, &assignment("E003", "F999"), &engineer);
    assert!(matches!(
        unknown_employee,
        Err(ApiError::ResourceNotFound { resource_type, .. }) if resource_type == "Employee"
    ));

    let not_assigned = unassign_employee(&mut store, &assignment("E003", "F002"), &engineer);
    assert!(matches!(
        not_assigned,
        Err(ApiError::ResourceNotFound { resource_type, .. }) if resource_type == "Assignment"
    ));
}

// ============================================================================
// Parts and tests
// ============================================================================

#[test]
fn test_part_lifecycle() {
    let mut store: RecordStore = create_test_store();

    let added: AircraftMutationResponse = add_part(
        &mut store,
        &AddPartRequest {
            aircraft_code: String::from(SEED_AIRCRAFT),
            name: String::from("Rudder"),
            origin: String::from("imported"),
            supplier: String::from("Tail Works"),
        },
        &create_test_admin(),
    )
    .unwrap();
    let part_id: String = added.item_id.unwrap();

    let before: AircraftDetailResponse = detail(&mut store, SEED_AIRCRAFT);
    let part = before.parts.iter().find(|p| p.id == part_id).unwrap();
    assert_eq!(part.status, "in_production");
    assert_eq!(before.parts.len(), 4);

    // Any status may follow any other
    for status in ["ready", "in_transit", "in_production", "Ready"] {
        set_part_status(
            &mut store,
            &SetPartStatusRequest {
                aircraft_code: String::from(SEED_AIRCRAFT),
                part_id: part_id.clone(),
                status: String::from(status),
            },
            &create_test_engineer(),
        )
        .unwrap();
    }

    let after: AircraftDetailResponse = detail(&mut store, SEED_AIRCRAFT);
    let part = after.parts.iter().find(|p| p.id == part_id).unwrap();
    assert_eq!(part.status_label, "Ready for Use");
}

#[test]
fn test_part_failures() {
    let mut store: RecordStore = create_test_store();

    let blank_supplier = add_part(
        &mut store,
        &AddPartRequest {
            aircraft_code: String::from(SEED_AIRCRAFT),
            name: String::from("Rudder"),
            origin: String::from("domestic"),
            supplier: String::from(" "),
        },
        &create_test_admin(),
    );
    assert!(matches!(
        blank_supplier,
        Err(ApiError::InvalidInput { field, .. }) if field == "supplier"
    ));

    let blank_name = add_part(
        &mut store,
        &AddPartRequest {
            aircraft_code: String::from(SEED_AIRCRAFT),
            name: String::new(),
            origin: String::from("domestic"),
            supplier: String::from("Tail Works"),
        },
        &create_test_admin(),
    );
    assert!(matches!(
        blank_name,
        Err(ApiError::InvalidInput { field, .. }) if field == "name"
    ));
    assert_eq!(detail(&mut store, SEED_AIRCRAFT).parts.len(), 3);

    let unknown_part = set_part_status(
        &mut store,
        &SetPartStatusRequest {
            aircraft_code: String::from(SEED_AIRCRAFT),
            part_id: String::from("P999"),
            status: String::from("ready"),
        },
        &create_test_engineer(),
    );
    assert!(matches!(
        unknown_part,
        Err(ApiError::ResourceNotFound { resource_type, .. }) if resource_type == "Part"
    ));
}

#[test]
fn test_record_test_appends() {
    let mut store: RecordStore = create_test_store();
    let recorded: AircraftMutationResponse = record_test(
        &mut store,
        &RecordTestRequest {
            aircraft_code: String::from("C390-MIL02"),
            category: String::from("aerodynamic"),
            outcome: String::from("passed"),
        },
        &create_test_engineer(),
    )
    .unwrap();

    let after: AircraftDetailResponse = detail(&mut store, "C390-MIL02");
    assert_eq!(after.tests.len(), 1);
    assert_eq!(Some(after.tests[0].id.clone()), recorded.item_id);
    assert_eq!(after.tests[0].category, "Aerodynamic");
    assert_eq!(after.tests[0].outcome, "Passed");
}

// ============================================================================
// Overview
// ============================================================================

#[test]
fn test_dashboard_counts_seed_fleet() {
    let mut store: RecordStore = create_test_store();
    let overview: DashboardResponse = dashboard(&mut store).unwrap();

    assert_eq!(overview.total_aircraft, 2);
    assert_eq!(overview.in_production, 1);
    assert_eq!(overview.not_started, 1);
    assert_eq!(overview.completed, 0);
    assert_eq!(overview.reports_generated, 0);
    assert_eq!(overview.stages_done, 1);
    assert_eq!(overview.stages_in_progress, 1);
    assert_eq!(overview.stages_pending, 3);
}
