// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod dates;
mod error;
mod part;
mod report;
mod sequencing;
mod stage;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use dates::{ISO_DATE, format_iso_date, iso_date, parse_iso_date};
pub use error::{DomainError, FailureKind};
pub use part::{Part, PartOrigin, PartStatus};
pub use quality_test::{TestCategory, TestOutcome, TestRecord};
pub use report::{Report, render_report_text};
pub use sequencing::{
    ProductionStatus, open_stage_count, predecessor, predecessor_done, production_status,
    validate_report_ready, validate_stage_advance,
};
pub use stage::{Stage, StageStatus};
pub use types::{
    Aircraft, AircraftCategory, Employee, EmployeeId, PROTECTED_EMPLOYEE_ID, Role,
};
pub use validation::{
    validate_aircraft_code_unique, validate_aircraft_fields, validate_employee_fields,
    validate_employee_removable, validate_login_unique,
};
