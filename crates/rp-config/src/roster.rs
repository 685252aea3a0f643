//! Roster column mapping.
//!
//! Defaults are the headers of the course's student sheet.

use serde::{Deserialize, Serialize};

fn default_student_code_column() -> String {
    "KodeMahasiswa".to_string()
}

fn default_name_column() -> String {
    "NamaMahasiswa".to_string()
}

fn default_supervisor_code_column() -> String {
    "KodeDosenPembimbing".to_string()
}

fn default_reviewer_code_column() -> String {
    "KodeDosenReviewer".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RosterConfig {
    #[serde(default = "default_student_code_column")]
    pub student_code_column: String,

    #[serde(default = "default_name_column")]
    pub name_column: String,

    #[serde(default = "default_supervisor_code_column")]
    pub supervisor_code_column: String,

    #[serde(default = "default_reviewer_code_column")]
    pub reviewer_code_column: String,
}

impl RosterConfig {
    /// The four required headers, in report column order.
    #[must_use]
    pub fn required_columns(&self) -> [&str; 4] {
        [
            &self.student_code_column,
            &self.name_column,
            &self.supervisor_code_column,
            &self.reviewer_code_column,
        ]
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            student_code_column: default_student_code_column(),
            name_column: default_name_column(),
            supervisor_code_column: default_supervisor_code_column(),
            reviewer_code_column: default_reviewer_code_column(),
        }
    }
}
