// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use aerocode::CoreError;
use aerocode_domain::DomainError;
use aerocode_persistence::PersistenceError;

use crate::request_validation::RequestValidationError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the actor does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// A production rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

impl From<RequestValidationError> for ApiError {
    fn from(err: RequestValidationError) -> Self {
        Self::InvalidInput {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::AircraftNotFound { .. } => ApiError::ResourceNotFound {
            resource_type: String::from("Aircraft"),
            message,
        },
        DomainError::StageNotFound { .. } => ApiError::ResourceNotFound {
            resource_type: String::from("Stage"),
            message,
        },
        DomainError::PartNotFound { .. } => ApiError::ResourceNotFound {
            resource_type: String::from("Part"),
            message,
        },
        DomainError::EmployeeNotFound { .. } => ApiError::ResourceNotFound {
            resource_type: String::from("Employee"),
            message,
        },
        DomainError::AssignmentNotFound { .. } => ApiError::ResourceNotFound {
            resource_type: String::from("Assignment"),
            message,
        },
        DomainError::InvalidStageTransition { .. } => rule("forward_stage_transition", message),
        DomainError::PredecessorNotDone { .. } => rule("stage_order", message),
        DomainError::StagesIncomplete { .. } => rule("report_requires_all_stages_done", message),
        DomainError::ProtectedEmployee { .. } => rule("protected_employee", message),
        DomainError::DuplicateAircraftCode { .. } => rule("unique_aircraft_code", message),
        DomainError::DuplicateLogin { .. } => rule("unique_login", message),
        DomainError::DuplicateAssignment { .. } => rule("unique_assignment", message),
        DomainError::InvalidAircraftCode(msg) => invalid("code", msg),
        DomainError::InvalidModel(msg) => invalid("model", msg),
        DomainError::InvalidCapacity { .. } => invalid("capacity", message),
        DomainError::InvalidStage(msg) => invalid("stages", msg),
        DomainError::InvalidName(msg) => invalid("name", msg),
        DomainError::InvalidLogin(msg) => invalid("login", msg),
        DomainError::InvalidEnumValue { kind, .. } => invalid(kind, message),
        DomainError::DateParseError { .. } => invalid("date", message),
    }
}

fn rule(name: &str, message: String) -> ApiError {
    ApiError::DomainRuleViolation {
        rule: name.to_string(),
        message,
    }
}

fn invalid(field: &str, message: String) -> ApiError {
    ApiError::InvalidInput {
        field: field.to_string(),
        message,
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

/// Translates a persistence error into an API error.
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    ApiError::Internal {
        message: format!("Storage failure: {err}"),
    }
}
