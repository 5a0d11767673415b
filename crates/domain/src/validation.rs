// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Aircraft, Employee, EmployeeId};

/// Validates an aircraft's descriptive fields and stage definitions.
///
/// This function checks that required fields are present.
/// It does NOT check for uniqueness (that requires context).
///
/// # Errors
///
/// Returns an error if:
/// - The code or model is empty
/// - The code has characters other than ASCII letters, digits, `-` or `_`
/// - The capacity is zero
/// - The aircraft has no stages, or a stage has an empty name
pub fn validate_aircraft_fields(aircraft: &Aircraft) -> Result<(), DomainError> {
    if aircraft.code.trim().is_empty() {
        return Err(DomainError::InvalidAircraftCode(String::from(
            "Code cannot be empty",
        )));
    }

    // Codes name report files, so they stay path-safe
    if !aircraft.code.chars().all(is_code_char) {
        return Err(DomainError::InvalidAircraftCode(format!(
            "'{}' may only contain letters, digits, '-' and '_'",
            aircraft.code
        )));
    }

    if aircraft.model.trim().is_empty() {
        return Err(DomainError::InvalidModel(String::from(
            "Model cannot be empty",
        )));
    }

    if aircraft.capacity == 0 {
        return Err(DomainError::InvalidCapacity {
            capacity: aircraft.capacity,
        });
    }

    // Rule: production always has at least one stage
    if aircraft.stages.is_empty() {
        return Err(DomainError::InvalidStage(String::from(
            "An aircraft needs at least one stage",
        )));
    }

    if aircraft.stages.iter().any(|s| s.name.trim().is_empty()) {
        return Err(DomainError::InvalidStage(String::from(
            "Stage name cannot be empty",
        )));
    }

    Ok(())
}

/// Whether a character may appear in an aircraft code.
#[must_use]
pub(crate) const fn is_code_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Validates an employee's basic field constraints.
///
/// # Errors
///
/// Returns an error if the name or login is empty, or the login contains
/// whitespace.
pub fn validate_employee_fields(employee: &Employee) -> Result<(), DomainError> {
    if employee.name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Name cannot be empty",
        )));
    }

    if employee.login.is_empty() {
        return Err(DomainError::InvalidLogin(String::from(
            "Login cannot be empty",
        )));
    }

    if employee.login.chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidLogin(String::from(
            "Login cannot contain whitespace",
        )));
    }

    Ok(())
}

/// Validates that an aircraft code is not already registered.
///
/// # Errors
///
/// Returns `DomainError::DuplicateAircraftCode` if the code is in use.
pub fn validate_aircraft_code_unique(code: &str, existing: &[Aircraft]) -> Result<(), DomainError> {
    if existing.iter().any(|a| a.code == code) {
        return Err(DomainError::DuplicateAircraftCode {
            code: code.to_string(),
        });
    }
    Ok(())
}

/// Validates that a login name is not already taken.
///
/// # Errors
///
/// Returns `DomainError::DuplicateLogin` if the login is in use.
pub fn validate_login_unique(login: &str, existing: &[Employee]) -> Result<(), DomainError> {
    if existing.iter().any(|e| e.login == login) {
        return Err(DomainError::DuplicateLogin {
            login: login.to_string(),
        });
    }
    Ok(())
}

/// Validates that an employee may be removed.
///
/// The seed administrator is rejected before existence is considered, so
/// removing it fails the same way whether or not it is still stored.
///
/// # Errors
///
/// Returns an error if the employee is protected or does not exist.
pub fn validate_employee_removable(
    employee_id: &EmployeeId,
    existing: &[Employee],
) -> Result<(), DomainError> {
    if employee_id.is_protected() {
        return Err(DomainError::ProtectedEmployee {
            employee_id: employee_id.value().to_string(),
        });
    }

    if !existing.iter().any(|e| &e.id == employee_id) {
        return Err(DomainError::EmployeeNotFound {
            employee_id: employee_id.value().to_string(),
        });
    }

    Ok(())
}
