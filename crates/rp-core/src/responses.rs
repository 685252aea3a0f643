//! Report types returned as JSON by `rpc check`.
//!
//! A [`ReportRow`] is derived entirely from a [`SubmissionRecord`]; nothing
//! else feeds into it.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::SubmissionRecord;
use crate::enums::{Category, MatchMode};

/// Status text of a row with nothing outstanding.
pub const STATUS_ALL_SUBMITTED: &str = "all documents submitted";

/// Status text prefix of a row with outstanding categories.
pub const STATUS_MISSING_PREFIX: &str = "not yet submitted: ";

/// Remarks cell of a row without remarks.
pub const NO_REMARKS: &str = "-";

/// One line of the compliance report.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReportRow {
    pub name: String,
    pub student_code: String,
    pub supervisor_code: String,
    pub reviewer_code: String,
    pub status: String,
    pub remarks: String,
    pub missing: Vec<Category>,
    /// No missing categories and no remarks.
    pub complete: bool,
}

impl ReportRow {
    /// Status text for a set of outstanding categories.
    #[must_use]
    pub fn status_text(missing: &[Category]) -> String {
        if missing.is_empty() {
            return STATUS_ALL_SUBMITTED.to_string();
        }
        let labels = missing
            .iter()
            .map(|category| category.label())
            .collect::<Vec<_>>()
            .join(", ");
        format!("{STATUS_MISSING_PREFIX}{labels}")
    }

    #[must_use]
    pub fn has_remarks(&self) -> bool {
        self.remarks != NO_REMARKS
    }
}

impl From<SubmissionRecord> for ReportRow {
    fn from(record: SubmissionRecord) -> Self {
        let missing = record.missing();
        let remarks = if record.remarks().is_empty() {
            NO_REMARKS.to_string()
        } else {
            record
                .remarks()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n")
        };
        let complete = missing.is_empty() && record.remarks().is_empty();

        Self {
            status: Self::status_text(&missing),
            name: record.student.name,
            student_code: record.student.code,
            supervisor_code: record.student.supervisor_code,
            reviewer_code: record.student.reviewer_code,
            remarks,
            missing,
            complete,
        }
    }
}

/// Aggregate counts over one audit run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditSummary {
    pub students: usize,
    pub complete: usize,
    pub with_missing: usize,
    pub with_remarks: usize,
    pub files_discovered: usize,
    pub hidden_skipped: usize,
}

/// Response from `rpc check`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditReport {
    pub generated_at: DateTime<Utc>,
    pub match_mode: MatchMode,
    pub summary: AuditSummary,
    pub rows: Vec<ReportRow>,
}

impl AuditReport {
    /// Assemble a report, computing the row-derived summary counts.
    #[must_use]
    pub fn new(
        rows: Vec<ReportRow>,
        match_mode: MatchMode,
        files_discovered: usize,
        hidden_skipped: usize,
    ) -> Self {
        let summary = AuditSummary {
            students: rows.len(),
            complete: rows.iter().filter(|row| row.complete).count(),
            with_missing: rows.iter().filter(|row| !row.missing.is_empty()).count(),
            with_remarks: rows.iter().filter(|row| row.has_remarks()).count(),
            files_discovered,
            hidden_skipped,
        };

        Self {
            generated_at: Utc::now(),
            match_mode,
            summary,
            rows,
        }
    }

    /// Drop rows that need no follow-up, keeping summary counts intact.
    pub fn retain_incomplete(&mut self) {
        self.rows.retain(|row| !row.complete);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Remark, Student};
    use pretty_assertions::assert_eq;

    fn record() -> SubmissionRecord {
        SubmissionRecord::new(&Student {
            code: "AB12345".to_string(),
            name: "Budi Santoso".to_string(),
            supervisor_code: "X".to_string(),
            reviewer_code: "Y".to_string(),
        })
    }

    #[test]
    fn empty_record_lists_all_categories() {
        let row = ReportRow::from(record());
        assert_eq!(
            row.status,
            "not yet submitted: supervisor proposal, reviewer proposal, monitoring log, work plan"
        );
        assert_eq!(row.remarks, NO_REMARKS);
        assert!(!row.complete);
    }

    #[test]
    fn full_record_is_complete() {
        let mut record = record();
        for category in Category::ALL {
            record.mark_submitted(category);
        }
        let row = ReportRow::from(record);
        assert_eq!(row.status, STATUS_ALL_SUBMITTED);
        assert_eq!(row.remarks, NO_REMARKS);
        assert!(row.missing.is_empty());
        assert!(row.complete);
    }

    #[test]
    fn remarks_alone_keep_status_but_break_completeness() {
        let mut record = record();
        for category in Category::ALL {
            record.mark_submitted(category);
        }
        record.push_remark(Remark::Misplaced {
            file: "AB12345_X_Dosen Pembimbing.docx".to_string(),
            expected_folder: "Dosen X".to_string(),
        });
        record.push_remark(Remark::Misplaced {
            file: "AB12345_Y_Dosen Reviewer.docx".to_string(),
            expected_folder: "Dosen Y".to_string(),
        });

        let row = ReportRow::from(record);
        assert_eq!(row.status, STATUS_ALL_SUBMITTED);
        assert_eq!(row.remarks.lines().count(), 2);
        assert!(row.has_remarks());
        assert!(!row.complete);
    }

    #[test]
    fn summary_counts_rows() {
        let mut done = record();
        for category in Category::ALL {
            done.mark_submitted(category);
        }
        let rows = vec![ReportRow::from(done), ReportRow::from(record())];
        let mut report = AuditReport::new(rows, MatchMode::Prefix, 7, 2);

        assert_eq!(
            report.summary,
            AuditSummary {
                students: 2,
                complete: 1,
                with_missing: 1,
                with_remarks: 0,
                files_discovered: 7,
                hidden_skipped: 2,
            }
        );

        report.retain_incomplete();
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.summary.students, 2);
    }
}
