use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Category, LECTURER_FOLDER_PREFIX};

/// A student enrolled in the course, with assigned lecturers.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Student {
    pub code: String,
    pub name: String,
    pub supervisor_code: String,
    pub reviewer_code: String,
}

impl Student {
    /// Folder the supervisor proposal is expected in (`Dosen <code>`).
    #[must_use]
    pub fn supervisor_folder(&self) -> String {
        format!("{LECTURER_FOLDER_PREFIX}{}", self.supervisor_code)
    }

    /// Folder the reviewer proposal is expected in (`Dosen <code>`).
    #[must_use]
    pub fn reviewer_folder(&self) -> String {
        format!("{LECTURER_FOLDER_PREFIX}{}", self.reviewer_code)
    }

    /// Expected folder for a folder-bound category, `None` otherwise.
    #[must_use]
    pub fn expected_folder(&self, category: Category) -> Option<String> {
        match category {
            Category::SupervisorProposal => Some(self.supervisor_folder()),
            Category::ReviewerProposal => Some(self.reviewer_folder()),
            Category::MonitoringLog | Category::WorkPlan => None,
        }
    }
}

/// Students keyed by code, in first-seen order.
///
/// Re-inserting a code replaces the stored fields but keeps the original
/// position, so the last roster row wins without reordering the report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    students: Vec<Student>,
    positions: HashMap<String, usize>,
}

impl Roster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a student, returning the entry it replaced.
    pub fn insert(&mut self, student: Student) -> Option<Student> {
        if let Some(&position) = self.positions.get(&student.code) {
            return Some(std::mem::replace(&mut self.students[position], student));
        }
        self.positions
            .insert(student.code.clone(), self.students.len());
        self.students.push(student);
        None
    }

    #[must_use]
    pub fn get(&self, code: &str) -> Option<&Student> {
        self.positions.get(code).map(|&position| &self.students[position])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Student> {
        self.students.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

impl FromIterator<Student> for Roster {
    fn from_iter<I: IntoIterator<Item = Student>>(iter: I) -> Self {
        let mut roster = Self::new();
        for student in iter {
            roster.insert(student);
        }
        roster
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Student;
    type IntoIter = std::slice::Iter<'a, Student>;

    fn into_iter(self) -> Self::IntoIter {
        self.students.iter()
    }
}
