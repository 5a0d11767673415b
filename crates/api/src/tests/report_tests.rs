// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use aerocode_persistence::RecordStore;

use crate::tests::helpers::{
    SEED_AIRCRAFT, complete_all_stages, create_test_admin, create_test_engineer,
    create_test_store,
};
use crate::{
    AircraftDetailResponse, ApiError, Capability, GenerateReportRequest, ListReportsResponse,
    RecordTestRequest, ReportInfo, generate_report, get_aircraft, get_report, list_reports,
    record_test,
};

fn create_test_report_request(client_name: &str, delivery_date: &str) -> GenerateReportRequest {
    GenerateReportRequest {
        aircraft_code: String::from(SEED_AIRCRAFT),
        client_name: client_name.to_string(),
        delivery_date: delivery_date.to_string(),
    }
}

#[test]
fn test_report_requires_every_stage_done() {
    let mut store: RecordStore = create_test_store();

    let result = generate_report(
        &mut store,
        &create_test_report_request("Azul", "2026-05-01"),
        &create_test_admin(),
    );
    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { rule, .. }) if rule == "report_requires_all_stages_done"
    ));

    let stored = get_report(&mut store, SEED_AIRCRAFT);
    assert!(matches!(
        stored,
        Err(ApiError::ResourceNotFound { resource_type, .. }) if resource_type == "Report"
    ));
    assert!(list_reports(&mut store).unwrap().reports.is_empty());
}

#[test]
fn test_generate_report_after_completion() {
    let mut store: RecordStore = create_test_store();
    complete_all_stages(&mut store, SEED_AIRCRAFT);

    let report: ReportInfo = generate_report(
        &mut store,
        &create_test_report_request("Azul", "2026-05-01"),
        &create_test_admin(),
    )
    .unwrap();

    assert_eq!(report.file_name, "REPORT_E195-BR01.txt");
    assert_eq!(report.delivery_date, "2026-05-01");
    assert!(report.content.starts_with("--- FINAL DELIVERY REPORT: AIRCRAFT E195-BR01 ---"));
    assert!(report.content.contains("CLIENT: Azul"));
    assert!(report.content.contains("DELIVERY DATE: 2026-05-01"));
    assert!(report.content.contains("    - Fuselage Assembly (Status: Done, Due: 2025-12-15)"));
    assert!(report.content.contains("    - Electrical: Failed"));
    assert!(report.content.ends_with("--- END OF REPORT ---\n"));

    assert_eq!(get_report(&mut store, SEED_AIRCRAFT).unwrap(), report);
    let listed: ListReportsResponse = list_reports(&mut store).unwrap();
    assert_eq!(listed.reports, vec![report]);
}

#[test]
fn test_report_request_validation() {
    let mut store: RecordStore = create_test_store();
    complete_all_stages(&mut store, SEED_AIRCRAFT);

    let blank_client = generate_report(
        &mut store,
        &create_test_report_request("   ", "2026-05-01"),
        &create_test_admin(),
    );
    assert!(matches!(
        blank_client,
        Err(ApiError::InvalidInput { field, .. }) if field == "client_name"
    ));

    let bad_date = generate_report(
        &mut store,
        &create_test_report_request("Azul", "2026-02-30"),
        &create_test_admin(),
    );
    assert!(matches!(
        bad_date,
        Err(ApiError::InvalidInput { field, .. }) if field == "delivery_date"
    ));
}

#[test]
fn test_regenerating_replaces_the_report() {
    let mut store: RecordStore = create_test_store();
    complete_all_stages(&mut store, SEED_AIRCRAFT);

    generate_report(
        &mut store,
        &create_test_report_request("Azul", "2026-05-01"),
        &create_test_admin(),
    )
    .unwrap();
    generate_report(
        &mut store,
        &create_test_report_request("LATAM", "2026-06-15"),
        &create_test_admin(),
    )
    .unwrap();

    let listed: ListReportsResponse = list_reports(&mut store).unwrap();
    assert_eq!(listed.reports.len(), 1);
    assert_eq!(listed.reports[0].client_name, "LATAM");
}

#[test]
fn test_report_is_a_snapshot() {
    let mut store: RecordStore = create_test_store();
    complete_all_stages(&mut store, SEED_AIRCRAFT);
    generate_report(
        &mut store,
        &create_test_report_request("Azul", "2026-05-01"),
        &create_test_admin(),
    )
    .unwrap();

    // Tests are still accepted after the report exists
    record_test(
        &mut store,
        &RecordTestRequest {
            aircraft_code: String::from(SEED_AIRCRAFT),
            category: String::from("hydraulic"),
            outcome: String::from("passed"),
        },
        &create_test_engineer(),
    )
    .unwrap();

    let report: ReportInfo = get_report(&mut store, SEED_AIRCRAFT).unwrap();
    assert!(!report.content.contains("Hydraulic"));
}

#[test]
fn test_report_capability_tracks_readiness_and_role() {
    let mut store: RecordStore = create_test_store();

    let before: AircraftDetailResponse =
        get_aircraft(&mut store, SEED_AIRCRAFT, &create_test_admin()).unwrap();
    assert_eq!(before.capabilities.can_generate_report, Capability::Denied);

    complete_all_stages(&mut store, SEED_AIRCRAFT);

    let admin_view: AircraftDetailResponse =
        get_aircraft(&mut store, SEED_AIRCRAFT, &create_test_admin()).unwrap();
    assert_eq!(admin_view.capabilities.can_generate_report, Capability::Allowed);

    let engineer_view: AircraftDetailResponse =
        get_aircraft(&mut store, SEED_AIRCRAFT, &create_test_engineer()).unwrap();
    assert_eq!(engineer_view.capabilities.can_generate_report, Capability::Denied);
}
