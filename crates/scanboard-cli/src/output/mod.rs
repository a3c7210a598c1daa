//! Output formatting for the summary command.

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use scanboard_core::ViewModel;

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed tables with colors
    #[default]
    Pretty,
    /// JSON output
    Json,
}

/// Print a view model in the requested format.
pub fn render(view: &ViewModel, excluded: usize, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(view)?);
        }
        OutputFormat::Pretty => render_pretty(view, excluded),
    }
    Ok(())
}

#[derive(Tabled)]
struct StatusRow {
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Severity")]
    severity: String,
    #[tabled(rename = "Count")]
    count: usize,
}

#[derive(Tabled)]
struct ShareRow {
    #[tabled(rename = "Severity")]
    severity: String,
    #[tabled(rename = "Count")]
    count: usize,
}

#[derive(Tabled)]
struct ServiceRow {
    #[tabled(rename = "Service")]
    service: String,
    #[tabled(rename = "Severity")]
    severity: String,
    #[tabled(rename = "Count")]
    count: usize,
}

fn render_pretty(view: &ViewModel, excluded: usize) {
    println!("{}", "Security posture".bold());
    println!(
        "  {} {}   {} {}   {} {}",
        "total checks:".dimmed(),
        view.kpis.total.to_string().yellow(),
        "fails:".dimmed(),
        view.kpis.fails.to_string().red(),
        "passes:".dimmed(),
        view.kpis.passes.to_string().green(),
    );
    if excluded > 0 {
        println!(
            "  {} {}",
            "excluded (malformed):".dimmed(),
            excluded.to_string().red()
        );
    }

    println!("\n{}", "Status by severity".bold());
    let rows: Vec<StatusRow> = view
        .status_by_severity
        .iter()
        .map(|c| StatusRow {
            status: c.status.to_string(),
            severity: c.severity.to_string(),
            count: c.count,
        })
        .collect();
    print_table(Table::new(rows));

    println!("\n{}", "Severity shares".bold());
    let rows: Vec<ShareRow> = view
        .severity_shares
        .iter()
        .map(|c| ShareRow {
            severity: c.severity.to_string(),
            count: c.count,
        })
        .collect();
    print_table(Table::new(rows));

    println!("\n{}", "Findings by service".bold());
    let rows: Vec<ServiceRow> = view
        .service_by_severity
        .iter()
        .map(|c| ServiceRow {
            service: c.service.clone(),
            severity: c.severity.to_string(),
            count: c.count,
        })
        .collect();
    print_table(Table::new(rows));

    println!(
        "\n{} {}",
        view.rows.len().to_string().bold(),
        "findings in the working set".dimmed()
    );
}

fn print_table(mut table: Table) {
    table.with(Style::rounded());
    println!("{table}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use scanboard_core::{compute_views, sample, SeverityFilter};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_render_json_succeeds() {
        let findings = sample::findings_at(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());
        let view = compute_views(&findings, SeverityFilter::All);
        render(&view, 0, OutputFormat::Json).unwrap();
    }

    #[test]
    fn test_render_pretty_succeeds() {
        let findings = sample::findings_at(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());
        let view = compute_views(&findings, SeverityFilter::All);
        render(&view, 2, OutputFormat::Pretty).unwrap();
    }
}
