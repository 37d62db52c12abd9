//! Pretty output formatting.

use crate::commands::{PresetRow, WindowReport};

/// Format a window report for display.
pub fn format_report(report: &WindowReport) -> String {
    let mode = if report.chart.is_now { "live" } else { "pinned" };
    let days = if report.chart.days == 1 { "day" } else { "days" };
    let mut output = format!(
        "WINDOW ({}, {} {}) [{}]\n",
        mode, report.chart.days, days, report.timezone
    );
    output.push_str(&"-".repeat(40));
    output.push_str(&format!(
        "\n  Chart:  {} .. {}",
        report.chart.start.to_rfc3339(),
        report.chart.end.to_rfc3339()
    ));
    output.push_str(&format!(
        "\n  Picker: {} .. {}",
        report.picker.start.date_naive(),
        report.picker.end.date_naive()
    ));
    output.push_str(&format!("\n  Query:  {}", format_query(report)));
    output
}

fn format_query(report: &WindowReport) -> String {
    let mut params = Vec::new();
    if let Some(from) = report.query.from {
        params.push(format!("from={}", from));
    }
    if let Some(to) = report.query.to {
        params.push(format!("to={}", to));
    }
    if params.is_empty() {
        return "(none)".to_string();
    }
    params.join("&")
}

/// Format presets for display.
pub fn format_presets(rows: &[PresetRow]) -> String {
    let mut output = format!("PRESETS ({})\n", rows.len());
    output.push_str(&"-".repeat(40));
    for row in rows {
        output.push_str(&format!("\n  {:<6} {} days", row.preset, row.days));
    }
    output
}
