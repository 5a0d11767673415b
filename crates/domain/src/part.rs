// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Parts tracked against an aircraft by supply status.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Where a part is sourced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOrigin {
    /// Produced domestically.
    Domestic,
    /// Imported from abroad.
    Imported,
}

impl PartOrigin {
    /// Returns the string representation used for persistence.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Domestic => "domestic",
            Self::Imported => "imported",
        }
    }
}

impl FromStr for PartOrigin {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "domestic" => Ok(Self::Domestic),
            "imported" => Ok(Self::Imported),
            _ => Err(DomainError::InvalidEnumValue {
                kind: "part origin",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for PartOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Domestic => write!(f, "Domestic"),
            Self::Imported => write!(f, "Imported"),
        }
    }
}

/// Supply status of a part.
///
/// Any status may be overwritten by any other; no ordering is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PartStatus {
    /// Still being manufactured.
    #[default]
    InProduction,
    /// Shipped and on its way.
    InTransit,
    /// Delivered and ready to be fitted.
    Ready,
}

impl PartStatus {
    /// Returns the string representation used for persistence.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InProduction => "in_production",
            Self::InTransit => "in_transit",
            Self::Ready => "ready",
        }
    }

    /// Returns the human-readable label used in reports.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::InProduction => "In Production",
            Self::InTransit => "In Transit",
            Self::Ready => "Ready for Use",
        }
    }
}

impl FromStr for PartStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in_production" => Ok(Self::InProduction),
            "in_transit" => Ok(Self::InTransit),
            "ready" => Ok(Self::Ready),
            _ => Err(DomainError::InvalidEnumValue {
                kind: "part status",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for PartStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A component associated with an aircraft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// Part identifier, unique within its aircraft.
    pub id: String,
    /// Part name.
    pub name: String,
    /// Sourcing origin.
    pub origin: PartOrigin,
    /// Supplier name.
    pub supplier: String,
    /// Current supply status.
    pub status: PartStatus,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_part_status_parse() {
        assert_eq!("in_transit".parse::<PartStatus>().unwrap(), PartStatus::InTransit);
        assert!(matches!(
            "lost".parse::<PartStatus>(),
            Err(DomainError::InvalidEnumValue { kind: "part status", .. })
        ));
    }

    #[test]
    fn test_part_origin_parse() {
        assert_eq!("imported".parse::<PartOrigin>().unwrap(), PartOrigin::Imported);
        assert!("foreign".parse::<PartOrigin>().is_err());
    }

    #[test]
    fn test_default_part_status_is_in_production() {
        assert_eq!(PartStatus::default(), PartStatus::InProduction);
    }
}
