// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::part::Part;
use crate::quality_test::TestRecord;
use crate::report::Report;
use crate::stage::Stage;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Id of the seed administrator. This employee can never be removed.
pub const PROTECTED_EMPLOYEE_ID: &str = "F001";

/// Permission tier of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full authority over aircraft, employees, and reports.
    Administrator,
    /// Drives the production workflow: stages, assignments, parts, tests.
    Engineer,
    /// Read-only access.
    Operator,
}

impl Role {
    /// Returns the string representation used for persistence.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Administrator => "administrator",
            Self::Engineer => "engineer",
            Self::Operator => "operator",
        }
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "administrator" => Ok(Self::Administrator),
            "engineer" => Ok(Self::Engineer),
            "operator" => Ok(Self::Operator),
            _ => Err(DomainError::InvalidEnumValue {
                kind: "role",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Administrator => write!(f, "Administrator"),
            Self::Engineer => write!(f, "Engineer"),
            Self::Operator => write!(f, "Operator"),
        }
    }
}

/// Identifier of an employee.
///
/// Stages reference employees through this id only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Creates a new `EmployeeId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the id value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Returns true for the seed administrator.
    #[must_use]
    pub fn is_protected(&self) -> bool {
        self.0 == PROTECTED_EMPLOYEE_ID
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An employee who can log in and be assigned to stages.
///
/// Credentials are stored and compared as plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier.
    pub id: EmployeeId,
    /// Display name.
    pub name: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: String,
    /// Postal address.
    #[serde(default)]
    pub address: String,
    /// Login name, unique across all employees.
    pub login: String,
    /// Password.
    pub password: String,
    /// Permission tier.
    pub role: Role,
}

impl Employee {
    /// Returns whether the supplied credentials match this employee.
    #[must_use]
    pub fn matches_credentials(&self, login: &str, password: &str) -> bool {
        self.login == login && self.password == password
    }
}

/// Aircraft classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AircraftCategory {
    /// Passenger or cargo airliner.
    Commercial,
    /// Built for an armed forces customer.
    Military,
}

impl AircraftCategory {
    /// Returns the string representation used for persistence.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Commercial => "commercial",
            Self::Military => "military",
        }
    }
}

impl FromStr for AircraftCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "commercial" => Ok(Self::Commercial),
            "military" => Ok(Self::Military),
            _ => Err(DomainError::InvalidEnumValue {
                kind: "aircraft category",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for AircraftCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Commercial => write!(f, "Commercial"),
            Self::Military => write!(f, "Military"),
        }
    }
}

/// An aircraft under production.
///
/// The order of `stages` is meaningful: a stage's predecessor is the stage
/// immediately before it in this sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aircraft {
    /// Unique code, fixed at creation.
    pub code: String,
    /// Model name.
    pub model: String,
    /// Classification.
    pub category: AircraftCategory,
    /// Passenger or payload capacity.
    pub capacity: u32,
    /// Range in kilometres.
    pub range_km: u32,
    /// Ordered production stages.
    pub stages: Vec<Stage>,
    /// Parts associated with the aircraft.
    pub parts: Vec<Part>,
    /// Recorded tests.
    pub tests: Vec<TestRecord>,
    /// Final delivery report, present once production is finalized.
    pub report: Option<Report>,
}

impl Aircraft {
    /// Returns the position and stage with the given id.
    #[must_use]
    pub fn find_stage(&self, stage_id: &str) -> Option<(usize, &Stage)> {
        self.stages
            .iter()
            .enumerate()
            .find(|(_, stage)| stage.id == stage_id)
    }

    /// Returns the part with the given id.
    #[must_use]
    pub fn find_part(&self, part_id: &str) -> Option<&Part> {
        self.parts.iter().find(|part| part.id == part_id)
    }

    /// Returns whether a final report has been generated.
    #[must_use]
    pub const fn has_report(&self) -> bool {
        self.report.is_some()
    }
}
