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

mod apply;
mod command;
mod error;
mod id;
mod state;

#[cfg(test)]
mod tests;

use aerocode_domain::{Aircraft, DomainError};

// Re-export public types and functions
pub use apply::apply;
pub use command::{Command, PartDraft, StageDraft};
pub use error::CoreError;
pub use id::{ID_LENGTH, IdGenerator, RandomIds, SequentialIds, fresh_id};
pub use state::{Collection, Fleet, Outcome, TransitionResult};

/// Validates that an aircraft exists in the fleet and returns it.
///
/// This is a read-only lookup used by query handlers.
///
/// # Errors
///
/// Returns `DomainError::AircraftNotFound` if no aircraft has the code.
pub fn validate_aircraft_exists<'a>(
    fleet: &'a Fleet,
    code: &str,
) -> Result<&'a Aircraft, DomainError> {
    fleet
        .find_aircraft(code)
        .ok_or_else(|| DomainError::AircraftNotFound {
            code: code.to_string(),
        })
}
