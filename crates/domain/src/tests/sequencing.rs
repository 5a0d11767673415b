// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_test_aircraft, create_test_stage};
use crate::{
    Aircraft, DomainError, FailureKind, ProductionStatus, StageStatus, open_stage_count,
    predecessor_done, production_status, validate_report_ready, validate_stage_advance,
};
use time::macros::date;

#[test]
fn test_first_stage_can_start() {
    let aircraft: Aircraft = create_test_aircraft();

    let result: Result<usize, DomainError> =
        validate_stage_advance(&aircraft, "S1", StageStatus::InProgress);
    assert_eq!(result, Ok(0));
}

#[test]
fn test_later_stage_can_start_before_predecessor_done() {
    let aircraft: Aircraft = create_test_aircraft();

    let result: Result<usize, DomainError> =
        validate_stage_advance(&aircraft, "S2", StageStatus::InProgress);
    assert_eq!(result, Ok(1));
}

#[test]
fn test_pending_stage_cannot_jump_to_done() {
    let aircraft: Aircraft = create_test_aircraft();

    let result: Result<usize, DomainError> =
        validate_stage_advance(&aircraft, "S1", StageStatus::Done);
    assert!(matches!(
        result,
        Err(DomainError::InvalidStageTransition {
            from: StageStatus::Pending,
            to: StageStatus::Done,
            ..
        })
    ));
}

#[test]
fn test_done_stage_cannot_move_back() {
    let mut aircraft: Aircraft = create_test_aircraft();
    aircraft.stages[0].status = StageStatus::Done;

    for requested in [StageStatus::Pending, StageStatus::InProgress, StageStatus::Done] {
        let result: Result<usize, DomainError> =
            validate_stage_advance(&aircraft, "S1", requested);
        assert!(matches!(
            result,
            Err(DomainError::InvalidStageTransition { .. })
        ));
    }
}

#[test]
fn test_completion_requires_previous_stage_done() {
    let mut aircraft: Aircraft = create_test_aircraft();
    aircraft.stages[0].status = StageStatus::InProgress;
    aircraft.stages[1].status = StageStatus::InProgress;

    let result: Result<usize, DomainError> =
        validate_stage_advance(&aircraft, "S2", StageStatus::Done);
    let err: DomainError = result.unwrap_err();
    assert_eq!(err.kind(), FailureKind::Invariant);
    assert_eq!(
        err,
        DomainError::PredecessorNotDone {
            stage_id: String::from("S2"),
            predecessor_id: String::from("S1"),
        }
    );
}

#[test]
fn test_first_stage_completes_without_predecessor() {
    let mut aircraft: Aircraft = create_test_aircraft();
    aircraft.stages[0].status = StageStatus::InProgress;

    let result: Result<usize, DomainError> =
        validate_stage_advance(&aircraft, "S1", StageStatus::Done);
    assert_eq!(result, Ok(0));
}

#[test]
fn test_predecessor_is_positional_not_by_due_date() {
    let mut aircraft: Aircraft = create_test_aircraft();
    // S0 is due earliest but stored last; it is nobody's predecessor.
    aircraft.stages.push(create_test_stage(
        "S0",
        "Paint",
        date!(2025 - 01 - 01),
        StageStatus::Pending,
    ));
    aircraft.stages[0].status = StageStatus::Done;
    aircraft.stages[1].status = StageStatus::InProgress;

    assert!(validate_stage_advance(&aircraft, "S2", StageStatus::Done).is_ok());
    assert!(!predecessor_done(&aircraft.stages, 2));
}

#[test]
fn test_unknown_stage_is_structural() {
    let aircraft: Aircraft = create_test_aircraft();

    let err: DomainError =
        validate_stage_advance(&aircraft, "S9", StageStatus::InProgress).unwrap_err();
    assert!(matches!(err, DomainError::StageNotFound { .. }));
    assert_eq!(err.kind(), FailureKind::Structural);
}

#[test]
fn test_report_ready_requires_all_stages_done() {
    let mut aircraft: Aircraft = create_test_aircraft();
    aircraft.stages[0].status = StageStatus::Done;

    let result: Result<(), DomainError> = validate_report_ready(&aircraft);
    assert!(matches!(
        result,
        Err(DomainError::StagesIncomplete { open_stages: 1, .. })
    ));

    aircraft.stages[1].status = StageStatus::Done;
    assert!(validate_report_ready(&aircraft).is_ok());
}

#[test]
fn test_report_ready_with_no_stages() {
    let mut aircraft: Aircraft = create_test_aircraft();
    aircraft.stages.clear();

    assert!(validate_report_ready(&aircraft).is_ok());
    assert_eq!(open_stage_count(&aircraft.stages), 0);
}

#[test]
fn test_production_status_derivation() {
    let mut aircraft: Aircraft = create_test_aircraft();
    assert_eq!(production_status(&aircraft), ProductionStatus::NotStarted);

    aircraft.stages[0].status = StageStatus::InProgress;
    assert_eq!(production_status(&aircraft), ProductionStatus::InProduction);

    aircraft.stages[0].status = StageStatus::Done;
    assert_eq!(production_status(&aircraft), ProductionStatus::InProduction);

    aircraft.stages[1].status = StageStatus::Done;
    assert_eq!(production_status(&aircraft), ProductionStatus::Completed);

    aircraft.stages.clear();
    assert_eq!(production_status(&aircraft), ProductionStatus::NotStarted);
}
