// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Text and JSON rendering of API responses.

use std::path::Path;

use aerocode_api::{
    AircraftDetailResponse, AircraftMutationResponse, AircraftSummary, Capability,
    DashboardResponse, EmployeeMutationResponse, ListAircraftResponse, ListEmployeesResponse,
    ListReportsResponse, ReportInfo, WhoAmIResponse,
};
use color_eyre::Result;
use serde::Serialize;

fn emit<T: Serialize>(value: &T, json: bool, text: impl FnOnce(&T)) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        text(value);
    }
    Ok(())
}

const fn mark(capability: Capability) -> &'static str {
    if capability.is_allowed() { "yes" } else { "no" }
}

fn summary_line(aircraft: &AircraftSummary) -> String {
    format!(
        "{:<12} {:<20} {:<10} {:<14} {}/{} stages{}",
        aircraft.code,
        aircraft.model,
        aircraft.category,
        aircraft.production_status,
        aircraft.stages_done,
        aircraft.stage_count,
        if aircraft.has_report { ", reported" } else { "" }
    )
}

pub fn whoami(response: &WhoAmIResponse, json: bool) -> Result<()> {
    emit(response, json, |r| {
        println!("{} ({}) - {} [{}]", r.name, r.login, r.role, r.employee_id);
        let caps = &r.capabilities;
        println!("  create aircraft:  {}", mark(caps.can_create_aircraft));
        println!("  advance stages:   {}", mark(caps.can_advance_stages));
        println!("  add parts:        {}", mark(caps.can_add_parts));
        println!("  record tests:     {}", mark(caps.can_record_tests));
        println!("  generate reports: {}", mark(caps.can_generate_reports));
        println!("  manage employees: {}", mark(caps.can_manage_employees));
    })
}

pub fn aircraft_list(response: &ListAircraftResponse, json: bool) -> Result<()> {
    emit(response, json, |r| {
        if r.aircraft.is_empty() {
            println!("No aircraft registered.");
        }
        for aircraft in &r.aircraft {
            println!("{}", summary_line(aircraft));
        }
    })
}

pub fn aircraft_detail(response: &AircraftDetailResponse, json: bool) -> Result<()> {
    emit(response, json, |r| {
        let s = &r.summary;
        println!("{} - {} ({})", s.code, s.model, s.category);
        println!("Capacity: {}  Range: {} km", s.capacity, s.range_km);
        println!("Status: {}", s.production_status);

        println!("\nStages:");
        for (position, stage) in r.stages.iter().enumerate() {
            println!(
                "  {}. [{}] {} - {} (due {}) assigned: {}",
                position + 1,
                stage.id,
                stage.name,
                stage.status_label,
                stage.due,
                if stage.assigned_employees.is_empty() {
                    String::from("-")
                } else {
                    stage.assigned_employees.join(", ")
                }
            );
        }

        println!("\nParts:");
        for part in &r.parts {
            println!(
                "  [{}] {} from {} ({}) - {}",
                part.id, part.name, part.supplier, part.origin, part.status_label
            );
        }

        println!("\nTests:");
        for test in &r.tests {
            println!("  [{}] {}: {}", test.id, test.category, test.outcome);
        }

        match &r.report {
            Some(report) => println!(
                "\nReport: {} for {} on {}",
                report.file_name, report.client_name, report.delivery_date
            ),
            None => println!(
                "\nReport: none (can generate: {})",
                mark(r.capabilities.can_generate_report)
            ),
        }
    })
}

pub fn dashboard(response: &DashboardResponse, json: bool) -> Result<()> {
    emit(response, json, |r| {
        println!("Aircraft:        {}", r.total_aircraft);
        println!("  Not started:   {}", r.not_started);
        println!("  In production: {}", r.in_production);
        println!("  Completed:     {}", r.completed);
        println!("  Reported:      {}", r.reports_generated);
        println!(
            "Stages: {} pending, {} in progress, {} done",
            r.stages_pending, r.stages_in_progress, r.stages_done
        );
        println!();
        for aircraft in &r.aircraft {
            println!("{}", summary_line(aircraft));
        }
    })
}

pub fn mutation(response: &AircraftMutationResponse, json: bool) -> Result<()> {
    emit(response, json, |r| println!("{}", r.message))
}

pub fn employee_mutation(response: &EmployeeMutationResponse, json: bool) -> Result<()> {
    emit(response, json, |r| println!("{}", r.message))
}

pub fn report(response: &ReportInfo, json: bool) -> Result<()> {
    emit(response, json, |r| print!("{}", r.content))
}

pub fn report_written(response: &ReportInfo, path: &Path, json: bool) -> Result<()> {
    emit(response, json, |r| {
        println!(
            "Report for {} written to {}",
            r.aircraft_code,
            path.display()
        );
    })
}

pub fn report_list(response: &ListReportsResponse, json: bool) -> Result<()> {
    emit(response, json, |r| {
        if r.reports.is_empty() {
            println!("No reports generated yet.");
        }
        for report in &r.reports {
            println!(
                "{:<24} {:<12} {:<20} {}",
                report.file_name, report.aircraft_code, report.client_name, report.delivery_date
            );
        }
    })
}

pub fn employee_list(response: &ListEmployeesResponse, json: bool) -> Result<()> {
    emit(response, json, |r| {
        for employee in &r.employees {
            println!(
                "{:<6} {:<20} {:<12} {:<14} can delete: {}",
                employee.employee_id,
                employee.name,
                employee.login,
                employee.role,
                mark(employee.capabilities.can_delete)
            );
        }
    })
}
