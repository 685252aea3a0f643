//! Report files written by `rpc check --report`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, bail};
use rp_core::responses::AuditReport;
use serde::Serialize;

/// One CSV line, with the column headers of the original spreadsheet export.
#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "StudentCode")]
    student_code: &'a str,
    #[serde(rename = "SupervisorCode")]
    supervisor_code: &'a str,
    #[serde(rename = "ReviewerCode")]
    reviewer_code: &'a str,
    #[serde(rename = "Status")]
    status: &'a str,
    #[serde(rename = "Remarks")]
    remarks: &'a str,
}

/// Write `report` to `path`, choosing CSV or JSON by extension.
pub fn write_report(report: &AuditReport, path: &Path) -> anyhow::Result<()> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => write_csv(report, path),
        "json" => write_json(report, path),
        _ => bail!(
            "unsupported report format '{}': use a .csv or .json path",
            path.display()
        ),
    }?;

    tracing::info!(path = %path.display(), rows = report.rows.len(), "report written");
    Ok(())
}

fn write_csv(report: &AuditReport, path: &Path) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create report {}", path.display()))?;

    for row in &report.rows {
        writer.serialize(CsvRow {
            name: &row.name,
            student_code: &row.student_code,
            supervisor_code: &row.supervisor_code,
            reviewer_code: &row.reviewer_code,
            status: &row.status,
            remarks: &row.remarks,
        })?;
    }
    if report.rows.is_empty() {
        writer.write_record(CSV_HEADERS)?;
    }

    writer
        .flush()
        .with_context(|| format!("failed to write report {}", path.display()))
}

const CSV_HEADERS: [&str; 6] = [
    "Name",
    "StudentCode",
    "SupervisorCode",
    "ReviewerCode",
    "Status",
    "Remarks",
];

fn write_json(report: &AuditReport, path: &Path) -> anyhow::Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create report {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer
        .flush()
        .with_context(|| format!("failed to write report {}", path.display()))
}
