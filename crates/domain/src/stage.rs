// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Production stages and their forward-only status machine.

use crate::error::DomainError;
use crate::types::EmployeeId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Status of one production stage.
///
/// Stages only ever move one step forward:
/// - `Pending` → `InProgress`
/// - `InProgress` → `Done`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    /// Work on the stage has not started.
    #[default]
    Pending,
    /// Work on the stage is under way.
    InProgress,
    /// The stage is complete.
    Done,
}

impl StageStatus {
    /// Returns the string representation used for persistence.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }

    /// Returns the human-readable label used in reports.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Returns the single status this one may advance to, if any.
    #[must_use]
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::Pending => Some(Self::InProgress),
            Self::InProgress => Some(Self::Done),
            Self::Done => None,
        }
    }

    /// Checks if a transition from this status to another is valid.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::InProgress) | (Self::InProgress, Self::Done)
        )
    }

    /// Returns true once the stage is complete.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

impl FromStr for StageStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(DomainError::InvalidEnumValue {
                kind: "stage status",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for StageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One ordered step of aircraft production.
///
/// Assigned employees are held by id only; an employee's lifecycle is
/// independent of every stage that references it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    /// Stage identifier, unique within its aircraft.
    pub id: String,
    /// Stage name.
    pub name: String,
    /// Due date.
    #[serde(with = "crate::dates::iso_date")]
    pub due: Date,
    /// Current status.
    pub status: StageStatus,
    /// Ids of employees assigned to this stage, without duplicates.
    pub assigned_employees: Vec<EmployeeId>,
}

impl Stage {
    /// Creates a new pending stage with no assignees.
    #[must_use]
    pub const fn new(id: String, name: String, due: Date) -> Self {
        Self {
            id,
            name,
            due,
            status: StageStatus::Pending,
            assigned_employees: Vec::new(),
        }
    }

    /// Returns whether the employee is assigned to this stage.
    #[must_use]
    pub fn is_assigned(&self, employee_id: &EmployeeId) -> bool {
        self.assigned_employees.contains(employee_id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_status_string_round_trip() {
        for status in [StageStatus::Pending, StageStatus::InProgress, StageStatus::Done] {
            let parsed: StageStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_invalid_status_string() {
        assert!("finished".parse::<StageStatus>().is_err());
    }

    #[test]
    fn test_only_single_forward_steps_are_valid() {
        assert!(StageStatus::Pending.can_transition_to(StageStatus::InProgress));
        assert!(StageStatus::InProgress.can_transition_to(StageStatus::Done));

        assert!(!StageStatus::Pending.can_transition_to(StageStatus::Done));
        assert!(!StageStatus::Pending.can_transition_to(StageStatus::Pending));
        assert!(!StageStatus::InProgress.can_transition_to(StageStatus::Pending));
        assert!(!StageStatus::Done.can_transition_to(StageStatus::InProgress));
        assert!(!StageStatus::Done.can_transition_to(StageStatus::Done));
    }

    #[test]
    fn test_next_status() {
        assert_eq!(StageStatus::Pending.next(), Some(StageStatus::InProgress));
        assert_eq!(StageStatus::InProgress.next(), Some(StageStatus::Done));
        assert_eq!(StageStatus::Done.next(), None);
    }
}
