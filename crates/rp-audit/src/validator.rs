//! Filename validation against naming templates.
//!
//! Each placeholder expands to its fixed pattern, literal text is escaped,
//! and the result is anchored at the start. In [`MatchMode::Full`] it is also
//! anchored at the end.

use regex::Regex;
use rp_core::enums::{Category, MatchMode};
use rp_core::template::{TemplatePart, parse_template};

use crate::error::AuditError;

/// Compile a template string into a regex for the given match mode.
pub fn compile_template(template: &str, mode: MatchMode) -> Result<Regex, AuditError> {
    let mut pattern = String::from("^");
    for part in parse_template(template) {
        match part {
            TemplatePart::Literal(text) => pattern.push_str(&regex::escape(&text)),
            TemplatePart::Placeholder(placeholder) => {
                pattern.push_str("(?:");
                pattern.push_str(placeholder.pattern());
                pattern.push(')');
            }
        }
    }
    if mode == MatchMode::Full {
        pattern.push('$');
    }

    Regex::new(&pattern).map_err(|source| AuditError::Template {
        template: template.to_string(),
        source,
    })
}

/// Check a single file name against a template.
///
/// Compiles the template on every call; use [`FilenameValidator`] when
/// checking many names.
pub fn validate_filename(
    filename: &str,
    template: &str,
    mode: MatchMode,
) -> Result<bool, AuditError> {
    Ok(compile_template(template, mode)?.is_match(filename))
}

/// The four category templates, compiled once per run.
#[derive(Debug, Clone)]
pub struct FilenameValidator {
    mode: MatchMode,
    compiled: Vec<Regex>,
}

impl FilenameValidator {
    pub fn new(mode: MatchMode) -> Result<Self, AuditError> {
        let compiled = Category::ALL
            .into_iter()
            .map(|category| compile_template(category.template(), mode))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { mode, compiled })
    }

    #[must_use]
    pub const fn mode(&self) -> MatchMode {
        self.mode
    }

    #[must_use]
    pub fn matches(&self, category: Category, filename: &str) -> bool {
        self.compiled[category.index()].is_match(filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn validator(mode: MatchMode) -> FilenameValidator {
        FilenameValidator::new(mode).expect("fixed templates compile")
    }

    #[rstest]
    #[case(Category::SupervisorProposal, "AB12345_X_Dosen Pembimbing.docx")]
    #[case(Category::SupervisorProposal, "A12345_7_Dosen Pembimbing Siti Rahma.docx")]
    #[case(Category::ReviewerProposal, "AB12345_Y_Dosen Reviewer.docx")]
    #[case(
        Category::MonitoringLog,
        "AB12345_Budi Santoso_Lembar Pemantauan Bimbingan.pdf"
    )]
    #[case(
        Category::WorkPlan,
        "AB12345_Budi Santoso_Rencana Kerja Penulisan Skripsi.pdf"
    )]
    fn well_formed_names_match(#[case] category: Category, #[case] name: &str) {
        assert!(validator(MatchMode::Prefix).matches(category, name));
        assert!(validator(MatchMode::Full).matches(category, name));
    }

    #[rstest]
    #[case::four_digit_code(Category::SupervisorProposal, "AB1234_X_Dosen Pembimbing.docx")]
    #[case::six_digit_code(Category::SupervisorProposal, "AB123456_X_Dosen Pembimbing.docx")]
    #[case::three_letter_code(Category::SupervisorProposal, "ABC12345_X_Dosen Pembimbing.docx")]
    #[case::wrong_extension(Category::SupervisorProposal, "AB12345_X_Dosen Pembimbing.pdf")]
    #[case::two_char_lecturer(Category::ReviewerProposal, "AB12345_YZ_Dosen Reviewer.docx")]
    #[case::double_space(
        Category::MonitoringLog,
        "AB12345_Budi  Santoso_Lembar Pemantauan Bimbingan.pdf"
    )]
    #[case::docx_work_plan(
        Category::WorkPlan,
        "AB12345_Budi Santoso_Rencana Kerja Penulisan Skripsi.docx"
    )]
    #[case::lowercase_phrase(
        Category::WorkPlan,
        "AB12345_Budi_rencana kerja penulisan skripsi.pdf"
    )]
    fn malformed_names_fail(#[case] category: Category, #[case] name: &str) {
        assert!(!validator(MatchMode::Prefix).matches(category, name));
    }

    #[test]
    fn dot_in_extension_is_literal() {
        assert!(!validator(MatchMode::Prefix)
            .matches(Category::SupervisorProposal, "AB12345_X_Dosen PembimbingXdocx"));
    }

    #[test]
    fn prefix_mode_accepts_trailing_text() {
        let name = "AB12345_X_Dosen Pembimbing.docx.bak";
        assert!(validator(MatchMode::Prefix).matches(Category::SupervisorProposal, name));
        assert!(!validator(MatchMode::Full).matches(Category::SupervisorProposal, name));
    }

    #[test]
    fn match_is_anchored_at_start() {
        let name = "copy of AB12345_X_Dosen Pembimbing.docx";
        assert!(!validator(MatchMode::Prefix).matches(Category::SupervisorProposal, name));
    }

    #[test]
    fn standalone_validation_uses_any_template() {
        assert!(validate_filename("AB12345_notes.txt", "StudentCode_notes.txt", MatchMode::Full)
            .expect("template compiles"));
        assert!(!validate_filename("AB12345_notes.md", "StudentCode_notes.txt", MatchMode::Full)
            .expect("template compiles"));
    }

    #[test]
    fn compiled_pattern_escapes_literals() {
        let regex = compile_template("StudentCode (final).pdf", MatchMode::Full)
            .expect("template compiles");
        assert!(regex.is_match("AB12345 (final).pdf"));
        assert!(!regex.is_match("AB12345 final.pdf"));
    }
}
