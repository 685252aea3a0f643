//! Roster loading.
//!
//! A roster is a table with four required columns, named by [`RosterConfig`].
//! Cells are trimmed; rows without a student code are skipped and a repeated
//! code replaces the earlier row.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use rp_config::RosterConfig;
use rp_core::entities::{Roster, Student};
use serde_json::Value;

use crate::error::IngestError;

/// Load a roster from a `.csv` or `.json` file.
pub fn load_roster(path: &Path, columns: &RosterConfig) -> Result<Roster, IngestError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let roster = match extension.as_str() {
        "csv" => {
            let file = File::open(path).map_err(IngestError::io(path))?;
            parse_csv(file, columns).map_err(|error| with_path(error, path))?
        }
        "json" => {
            let text = std::fs::read_to_string(path).map_err(IngestError::io(path))?;
            parse_json(&text, columns).map_err(|error| with_path(error, path))?
        }
        _ => return Err(IngestError::UnsupportedRoster { extension }),
    };

    tracing::info!(path = %path.display(), students = roster.len(), "roster loaded");
    Ok(roster)
}

/// Parse CSV roster content with a header row.
pub fn parse_csv<R: Read>(reader: R, columns: &RosterConfig) -> Result<Roster, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(parse_error)?
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>();
    let positions = column_positions(&headers, columns)?;

    let mut builder = RosterBuilder::default();
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(parse_error)?;
        let cell = |position: usize| record.get(position).unwrap_or_default().to_string();
        builder.push(
            row + 2,
            Student {
                code: cell(positions[0]),
                name: cell(positions[1]),
                supervisor_code: cell(positions[2]),
                reviewer_code: cell(positions[3]),
            },
        );
    }
    Ok(builder.finish())
}

/// Parse a JSON array of row objects keyed by column name.
pub fn parse_json(text: &str, columns: &RosterConfig) -> Result<Roster, IngestError> {
    let value: Value = serde_json::from_str(text).map_err(parse_error)?;
    let Value::Array(rows) = value else {
        return Err(parse_error("expected a JSON array of student objects"));
    };

    let required = columns.required_columns();
    let mut builder = RosterBuilder::default();
    for (index, row) in rows.iter().enumerate() {
        let Some(object) = row.as_object() else {
            return Err(parse_error(format!("row {} is not an object", index + 1)));
        };

        let missing = required
            .iter()
            .filter(|column| !object.contains_key(**column))
            .map(|column| (*column).to_string())
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            return Err(missing_columns(columns, missing));
        }

        let cell = |column: &str| object.get(column).map(cell_text).unwrap_or_default();
        builder.push(
            index + 1,
            Student {
                code: cell(required[0]),
                name: cell(required[1]),
                supervisor_code: cell(required[2]),
                reviewer_code: cell(required[3]),
            },
        );
    }
    Ok(builder.finish())
}

/// Collects students, skipping rows without a code and logging overrides.
#[derive(Default)]
struct RosterBuilder {
    roster: Roster,
}

impl RosterBuilder {
    fn push(&mut self, row: usize, student: Student) {
        if student.code.is_empty() {
            tracing::warn!(row, name = %student.name, "skipping roster row without student code");
            return;
        }
        let code = student.code.clone();
        if self.roster.insert(student).is_some() {
            tracing::warn!(row, %code, "duplicate student code; later row wins");
        }
    }

    fn finish(self) -> Roster {
        self.roster
    }
}

fn column_positions(headers: &[String], columns: &RosterConfig) -> Result<[usize; 4], IngestError> {
    let required = columns.required_columns();
    let mut positions = [0usize; 4];
    let mut missing = Vec::new();

    for (slot, column) in required.iter().enumerate() {
        match headers.iter().position(|header| header == column) {
            Some(position) => positions[slot] = position,
            None => missing.push((*column).to_string()),
        }
    }

    if missing.is_empty() {
        Ok(positions)
    } else {
        Err(missing_columns(columns, missing))
    }
}

fn missing_columns(columns: &RosterConfig, missing: Vec<String>) -> IngestError {
    IngestError::MissingColumns {
        required: columns
            .required_columns()
            .iter()
            .map(|column| (*column).to_string())
            .collect(),
        missing,
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.trim().to_string(),
        other => other.to_string(),
    }
}

fn parse_error(reason: impl ToString) -> IngestError {
    IngestError::RosterParse {
        path: std::path::PathBuf::new(),
        reason: reason.to_string(),
    }
}

/// Attach the roster path to parse errors raised from in-memory parsers.
fn with_path(error: IngestError, path: &Path) -> IngestError {
    match error {
        IngestError::RosterParse { reason, .. } => IngestError::RosterParse {
            path: path.to_path_buf(),
            reason,
        },
        other => other,
    }
}
