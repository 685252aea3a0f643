//! Per-student submission auditing.

use rp_core::entities::{DiscoveredFile, Remark, Roster, Student, SubmissionRecord};
use rp_core::enums::Category;
use rp_core::responses::{AuditReport, ReportRow};

use crate::error::AuditError;
use crate::index::FileIndex;
use crate::validator::FilenameValidator;

/// Runs the folder and naming checks for every student on a roster.
#[derive(Debug, Clone, Copy)]
pub struct Auditor<'v> {
    validator: &'v FilenameValidator,
}

impl<'v> Auditor<'v> {
    #[must_use]
    pub const fn new(validator: &'v FilenameValidator) -> Self {
        Self { validator }
    }

    /// Audit every roster student against the discovered files.
    ///
    /// Produces one row per student in roster order. Rows are never dropped.
    pub fn audit(
        &self,
        roster: &Roster,
        files: &[DiscoveredFile],
    ) -> Result<AuditReport, AuditError> {
        let index = FileIndex::build(roster, files)?;

        let rows = roster
            .iter()
            .enumerate()
            .map(|(position, student)| {
                let attached = index.files_for(position).iter().map(|&i| &files[i]);
                ReportRow::from(self.audit_student(student, attached))
            })
            .collect::<Vec<_>>();

        let report = AuditReport::new(
            rows,
            self.validator.mode(),
            files.len(),
            index.hidden_skipped(),
        );
        tracing::info!(
            students = report.summary.students,
            complete = report.summary.complete,
            files = report.summary.files_discovered,
            hidden = report.summary.hidden_skipped,
            "audit finished"
        );
        Ok(report)
    }

    /// Check the files attached to one student.
    ///
    /// Folder placement and naming are independent: a well-named file in the
    /// wrong folder still counts as submitted and also gets a remark.
    pub fn audit_student<'f>(
        &self,
        student: &Student,
        files: impl IntoIterator<Item = &'f DiscoveredFile>,
    ) -> SubmissionRecord {
        let mut record = SubmissionRecord::new(student);

        for file in files {
            if file.is_hidden() {
                continue;
            }
            Self::check_placement(student, file, &mut record);
            self.check_naming(file, &mut record);
        }

        record
    }

    fn check_placement(student: &Student, file: &DiscoveredFile, record: &mut SubmissionRecord) {
        for category in Category::ALL {
            if !file.name.contains(category.discriminator()) {
                continue;
            }
            let Some(expected_folder) = student.expected_folder(category) else {
                continue;
            };
            if !file.directory.contains(&expected_folder) {
                tracing::debug!(
                    student = %student.code,
                    file = %file.relative_path(),
                    expected = %expected_folder,
                    "file outside its lecturer folder"
                );
                record.push_remark(Remark::Misplaced {
                    file: file.name.clone(),
                    expected_folder,
                });
            }
        }
    }

    fn check_naming(&self, file: &DiscoveredFile, record: &mut SubmissionRecord) {
        let Some(category) = Category::classify(&file.name) else {
            tracing::trace!(file = %file.relative_path(), "no category phrase in file name");
            return;
        };

        if self.validator.matches(category, &file.name) {
            record.mark_submitted(category);
        } else {
            tracing::debug!(
                file = %file.relative_path(),
                %category,
                "file name does not follow template"
            );
            record.push_remark(Remark::FormatMismatch {
                file: file.name.clone(),
                category,
                template: category.template().to_string(),
            });
        }
    }
}
