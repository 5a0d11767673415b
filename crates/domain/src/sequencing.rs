// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Stage ordering rules.
//!
//! Precedence between stages is purely positional: the predecessor of a
//! stage is the one stored immediately before it, never the one with the
//! earlier due date.

use crate::error::DomainError;
use crate::stage::{Stage, StageStatus};
use crate::types::Aircraft;
use serde::{Deserialize, Serialize};

/// Validates a requested stage status change.
///
/// The request must be a single forward step of the stage status machine.
/// Completing a stage additionally requires its positional predecessor,
/// if there is one, to be done already.
///
/// # Arguments
///
/// * `aircraft` - The aircraft owning the stage
/// * `stage_id` - The stage to advance
/// * `requested` - The status being requested
///
/// # Returns
///
/// The position of the stage within the aircraft's sequence.
///
/// # Errors
///
/// Returns an error if:
/// - The stage does not exist on the aircraft
/// - The request is not `Pending → InProgress` or `InProgress → Done`
/// - The request is `→ Done` and the previous stage is not done
pub fn validate_stage_advance(
    aircraft: &Aircraft,
    stage_id: &str,
    requested: StageStatus,
) -> Result<usize, DomainError> {
    let (index, stage) =
        aircraft
            .find_stage(stage_id)
            .ok_or_else(|| DomainError::StageNotFound {
                aircraft_code: aircraft.code.clone(),
                stage_id: stage_id.to_string(),
            })?;

    if !stage.status.can_transition_to(requested) {
        return Err(DomainError::InvalidStageTransition {
            stage_id: stage.id.clone(),
            from: stage.status,
            to: requested,
        });
    }

    let unfinished_predecessor: Option<&Stage> = if requested.is_done() {
        predecessor(&aircraft.stages, index).filter(|previous| !previous.status.is_done())
    } else {
        None
    };

    if let Some(previous) = unfinished_predecessor {
        return Err(DomainError::PredecessorNotDone {
            stage_id: stage.id.clone(),
            predecessor_id: previous.id.clone(),
        });
    }

    Ok(index)
}

/// Returns the stage stored immediately before `index`, if any.
#[must_use]
pub fn predecessor(stages: &[Stage], index: usize) -> Option<&Stage> {
    index.checked_sub(1).and_then(|i| stages.get(i))
}

/// Returns whether the stage at `index` has no unfinished predecessor.
#[must_use]
pub fn predecessor_done(stages: &[Stage], index: usize) -> bool {
    predecessor(stages, index).is_none_or(|previous| previous.status.is_done())
}

/// Counts stages that are not yet done.
#[must_use]
pub fn open_stage_count(stages: &[Stage]) -> usize {
    stages.iter().filter(|s| !s.status.is_done()).count()
}

/// Validates that an aircraft is ready for its final report.
///
/// An aircraft with no stages at all is considered ready.
///
/// # Errors
///
/// Returns `DomainError::StagesIncomplete` if any stage is pending or in progress.
pub fn validate_report_ready(aircraft: &Aircraft) -> Result<(), DomainError> {
    let open_stages: usize = open_stage_count(&aircraft.stages);
    if open_stages > 0 {
        return Err(DomainError::StagesIncomplete {
            aircraft_code: aircraft.code.clone(),
            open_stages,
        });
    }
    Ok(())
}

/// Overall production status derived from an aircraft's stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductionStatus {
    /// No stage has been started, or there are no stages.
    NotStarted,
    /// At least one stage has started but not all are done.
    InProduction,
    /// Every stage is done.
    Completed,
}

impl std::fmt::Display for ProductionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotStarted => write!(f, "Not Started"),
            Self::InProduction => write!(f, "In Production"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

/// Derives the overall production status of an aircraft.
#[must_use]
pub fn production_status(aircraft: &Aircraft) -> ProductionStatus {
    let stages: &[Stage] = &aircraft.stages;
    if stages.is_empty() {
        return ProductionStatus::NotStarted;
    }
    if stages.iter().all(|s| s.status.is_done()) {
        return ProductionStatus::Completed;
    }
    if stages.iter().any(|s| s.status != StageStatus::Pending) {
        return ProductionStatus::InProduction;
    }
    ProductionStatus::NotStarted
}
