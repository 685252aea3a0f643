//! Student-code index over discovered files.
//!
//! All roster codes go into one Aho-Corasick automaton, so every file name is
//! scanned once no matter how many students there are. A file is attached to
//! each student whose code occurs anywhere in its name.

use aho_corasick::AhoCorasick;
use rp_core::entities::{DiscoveredFile, Roster};

use crate::error::AuditError;

/// Files attached to roster students, by roster position.
#[derive(Debug, Clone, Default)]
pub struct FileIndex {
    by_student: Vec<Vec<usize>>,
    hidden_skipped: usize,
}

impl FileIndex {
    /// Index `files` against the codes in `roster`.
    ///
    /// Hidden files are dropped and counted. Attached file positions keep
    /// discovery order and appear at most once per student.
    pub fn build(roster: &Roster, files: &[DiscoveredFile]) -> Result<Self, AuditError> {
        let mut by_student = vec![Vec::new(); roster.len()];

        let mut patterns = Vec::with_capacity(roster.len());
        let mut owners = Vec::with_capacity(roster.len());
        for (position, student) in roster.iter().enumerate() {
            if student.code.is_empty() {
                tracing::warn!(name = %student.name, "student without code cannot be matched");
                continue;
            }
            patterns.push(student.code.as_str());
            owners.push(position);
        }

        let hidden_skipped = files.iter().filter(|file| file.is_hidden()).count();
        if patterns.is_empty() {
            return Ok(Self {
                by_student,
                hidden_skipped,
            });
        }

        let matcher = AhoCorasick::new(&patterns)?;
        for (file_position, file) in files.iter().enumerate() {
            if file.is_hidden() {
                tracing::trace!(file = %file.relative_path(), "skipping hidden file");
                continue;
            }
            for found in matcher.find_overlapping_iter(&file.name) {
                let attached = &mut by_student[owners[found.pattern().as_usize()]];
                if attached.last() != Some(&file_position) {
                    attached.push(file_position);
                }
            }
        }

        Ok(Self {
            by_student,
            hidden_skipped,
        })
    }

    /// Positions (into the indexed file slice) attached to a roster position.
    #[must_use]
    pub fn files_for(&self, student_position: usize) -> &[usize] {
        self.by_student
            .get(student_position)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[must_use]
    pub const fn hidden_skipped(&self) -> usize {
        self.hidden_skipped
    }
}
