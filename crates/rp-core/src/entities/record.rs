use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Student;
use crate::enums::Category;

/// A problem found with one file of a student's submission.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Remark {
    /// The file is not inside the lecturer folder it belongs to.
    Misplaced { file: String, expected_folder: String },
    /// The file name does not follow its category's template.
    FormatMismatch {
        file: String,
        category: Category,
        template: String,
    },
}

impl fmt::Display for Remark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Misplaced {
                file,
                expected_folder,
            } => write!(
                f,
                "File '{file}' was uploaded to the wrong folder. It belongs in folder '{expected_folder}'."
            ),
            Self::FormatMismatch { file, template, .. } => write!(
                f,
                "File name '{file}' does not follow the required format: '{template}'."
            ),
        }
    }
}

/// What one student has handed in, built during a single audit pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRecord {
    pub student: Student,
    submitted: [bool; Category::COUNT],
    remarks: Vec<Remark>,
}

impl SubmissionRecord {
    #[must_use]
    pub fn new(student: &Student) -> Self {
        Self {
            student: student.clone(),
            submitted: [false; Category::COUNT],
            remarks: Vec::new(),
        }
    }

    pub fn mark_submitted(&mut self, category: Category) {
        self.submitted[category.index()] = true;
    }

    #[must_use]
    pub fn is_submitted(&self, category: Category) -> bool {
        self.submitted[category.index()]
    }

    pub fn push_remark(&mut self, remark: Remark) {
        self.remarks.push(remark);
    }

    #[must_use]
    pub fn remarks(&self) -> &[Remark] {
        &self.remarks
    }

    /// Categories still outstanding, in category order.
    #[must_use]
    pub fn missing(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|category| !self.is_submitted(*category))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> SubmissionRecord {
        SubmissionRecord::new(&Student {
            code: "AB12345".to_string(),
            name: "Budi Santoso".to_string(),
            supervisor_code: "X".to_string(),
            reviewer_code: "Y".to_string(),
        })
    }

    #[test]
    fn fresh_record_misses_everything() {
        assert_eq!(record().missing(), Category::ALL.to_vec());
    }

    #[test]
    fn marking_is_idempotent() {
        let mut record = record();
        record.mark_submitted(Category::WorkPlan);
        record.mark_submitted(Category::WorkPlan);
        assert!(record.is_submitted(Category::WorkPlan));
        assert_eq!(record.missing().len(), 3);
    }

    #[test]
    fn remarks_keep_insertion_order() {
        let mut record = record();
        record.push_remark(Remark::Misplaced {
            file: "b".to_string(),
            expected_folder: "Dosen X".to_string(),
        });
        record.push_remark(Remark::FormatMismatch {
            file: "a".to_string(),
            category: Category::WorkPlan,
            template: Category::WorkPlan.template().to_string(),
        });
        assert!(matches!(record.remarks()[0], Remark::Misplaced { .. }));
        assert!(matches!(record.remarks()[1], Remark::FormatMismatch { .. }));
    }

    #[test]
    fn remark_text_names_file_and_target() {
        let remark = Remark::Misplaced {
            file: "AB12345_X_Dosen Pembimbing.docx".to_string(),
            expected_folder: "Dosen X".to_string(),
        };
        let text = remark.to_string();
        assert!(text.contains("AB12345_X_Dosen Pembimbing.docx"));
        assert!(text.contains("'Dosen X'"));
    }
}
