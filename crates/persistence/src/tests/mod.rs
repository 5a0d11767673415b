// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod sqlite_tests;

use aerocode_domain::{Aircraft, AircraftCategory, Report, Stage, StageStatus};
use time::macros::date;

pub fn create_test_aircraft(code: &str) -> Aircraft {
    let mut first: Stage = Stage::new(
        String::from("S1"),
        String::from("Fuselage"),
        date!(2026 - 01 - 10),
    );
    first.status = StageStatus::Done;
    let mut second: Stage = Stage::new(
        String::from("S2"),
        String::from("Wings"),
        date!(2026 - 02 - 10),
    );
    second.status = StageStatus::Done;

    let mut aircraft: Aircraft = Aircraft {
        code: code.to_string(),
        model: String::from("M"),
        category: AircraftCategory::Military,
        capacity: 10,
        range_km: 100,
        stages: vec![first, second],
        parts: Vec::new(),
        tests: Vec::new(),
        report: None,
    };
    aircraft.report = Some(Report::snapshot(
        &aircraft,
        "Air Force",
        date!(2026 - 04 - 30),
    ));
    aircraft
}
