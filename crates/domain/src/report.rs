// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Final delivery reports.
//!
//! A report is a snapshot: it owns copies of the aircraft's stages, parts,
//! and tests as they were when it was generated, so later changes to the
//! aircraft never alter a stored report.

use crate::dates::format_iso_date;
use crate::part::Part;
use crate::quality_test::TestRecord;
use crate::stage::Stage;
use crate::types::{Aircraft, AircraftCategory};
use crate::validation::is_code_char;
use serde::{Deserialize, Serialize};
use time::Date;

const ITEM_INDENT: &str = "    ";

/// Final delivery report attached to an aircraft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Name of the receiving client.
    pub client_name: String,
    /// Agreed delivery date.
    #[serde(with = "crate::dates::iso_date")]
    pub delivery_date: Date,
    /// Aircraft code at generation time.
    pub aircraft_code: String,
    /// Aircraft model at generation time.
    pub aircraft_model: String,
    /// Aircraft category at generation time.
    pub aircraft_category: AircraftCategory,
    /// Aircraft capacity at generation time.
    pub aircraft_capacity: u32,
    /// Aircraft range at generation time.
    pub aircraft_range_km: u32,
    /// Stages as they stood at generation time.
    pub stages: Vec<Stage>,
    /// Parts as they stood at generation time.
    pub parts: Vec<Part>,
    /// Tests recorded up to generation time.
    pub tests: Vec<TestRecord>,
    /// Pre-rendered report text.
    pub content: String,
}

impl Report {
    /// Builds a report snapshot from the aircraft's current state.
    ///
    /// Readiness is not checked here; see
    /// [`validate_report_ready`](crate::validate_report_ready).
    #[must_use]
    pub fn snapshot(aircraft: &Aircraft, client_name: &str, delivery_date: Date) -> Self {
        Self {
            client_name: client_name.to_string(),
            delivery_date,
            aircraft_code: aircraft.code.clone(),
            aircraft_model: aircraft.model.clone(),
            aircraft_category: aircraft.category,
            aircraft_capacity: aircraft.capacity,
            aircraft_range_km: aircraft.range_km,
            stages: aircraft.stages.clone(),
            parts: aircraft.parts.clone(),
            tests: aircraft.tests.clone(),
            content: render_report_text(aircraft, client_name, delivery_date),
        }
    }

    /// Suggested file name for the exported text.
    ///
    /// Characters not allowed in aircraft codes are replaced with `_`, so
    /// the name never leaves the export directory.
    #[must_use]
    pub fn file_name(&self) -> String {
        let code: String = self
            .aircraft_code
            .chars()
            .map(|c| if is_code_char(c) { c } else { '_' })
            .collect();
        format!("REPORT_{code}.txt")
    }
}

/// Renders the text body of a delivery report.
///
/// Sections always appear in the same order: header, client, delivery date,
/// aircraft data, stages, parts, tests, footer. Items within a section keep
/// the order in which the aircraft stores them.
#[must_use]
pub fn render_report_text(aircraft: &Aircraft, client_name: &str, delivery_date: Date) -> String {
    let mut lines: Vec<String> = vec![
        format!("--- FINAL DELIVERY REPORT: AIRCRAFT {} ---", aircraft.code),
        format!("CLIENT: {client_name}"),
        format!("DELIVERY DATE: {}", format_iso_date(delivery_date)),
        String::new(),
        String::from("AIRCRAFT DATA:"),
        format!(
            "{ITEM_INDENT}Model: {} ({})",
            aircraft.model, aircraft.category
        ),
        format!("{ITEM_INDENT}Capacity: {}", aircraft.capacity),
        format!("{ITEM_INDENT}Range: {} km", aircraft.range_km),
        String::new(),
        String::from("PRODUCTION STAGES:"),
    ];

    push_items(
        &mut lines,
        aircraft.stages.iter().map(|stage| {
            format!(
                "- {} (Status: {}, Due: {})",
                stage.name,
                stage.status,
                format_iso_date(stage.due)
            )
        }),
    );

    lines.push(String::new());
    lines.push(String::from("PARTS USED:"));
    push_items(
        &mut lines,
        aircraft.parts.iter().map(|part| {
            format!(
                "- {} (Supplier: {}, Status: {})",
                part.name, part.supplier, part.status
            )
        }),
    );

    lines.push(String::new());
    lines.push(String::from("TEST RESULTS:"));
    push_items(
        &mut lines,
        aircraft
            .tests
            .iter()
            .map(|test| format!("- {}: {}", test.category, test.outcome)),
    );

    lines.push(String::new());
    lines.push(String::from("--- END OF REPORT ---"));

    let mut text: String = lines.join("\n");
    text.push('\n');
    text
}

fn push_items(lines: &mut Vec<String>, items: impl Iterator<Item = String>) {
    let before: usize = lines.len();
    lines.extend(items.map(|item| format!("{ITEM_INDENT}{item}")));
    if lines.len() == before {
        lines.push(format!("{ITEM_INDENT}(none)"));
    }
}
