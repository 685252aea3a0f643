//! Document categories and validator match modes.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Folder name prefix that precedes a lecturer code (`Dosen X`).
pub const LECTURER_FOLDER_PREFIX: &str = "Dosen ";

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// One of the four documents every student has to submit.
///
/// Variant order is the classification priority: a file name containing
/// several discriminator phrases belongs to the first matching category.
///
/// ```text
/// supervisor_proposal > reviewer_proposal > monitoring_log > work_plan
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    SupervisorProposal,
    ReviewerProposal,
    MonitoringLog,
    WorkPlan,
}

impl Category {
    pub const COUNT: usize = 4;

    /// All categories in classification priority order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::SupervisorProposal,
        Self::ReviewerProposal,
        Self::MonitoringLog,
        Self::WorkPlan,
    ];

    /// Position of this category in [`Category::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::SupervisorProposal => 0,
            Self::ReviewerProposal => 1,
            Self::MonitoringLog => 2,
            Self::WorkPlan => 3,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SupervisorProposal => "supervisor_proposal",
            Self::ReviewerProposal => "reviewer_proposal",
            Self::MonitoringLog => "monitoring_log",
            Self::WorkPlan => "work_plan",
        }
    }

    /// Human-readable name used in status text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SupervisorProposal => "supervisor proposal",
            Self::ReviewerProposal => "reviewer proposal",
            Self::MonitoringLog => "monitoring log",
            Self::WorkPlan => "work plan",
        }
    }

    /// Fixed phrase a file name must contain to belong to this category.
    #[must_use]
    pub const fn discriminator(self) -> &'static str {
        match self {
            Self::SupervisorProposal => "Dosen Pembimbing",
            Self::ReviewerProposal => "Dosen Reviewer",
            Self::MonitoringLog => "Lembar Pemantauan Bimbingan",
            Self::WorkPlan => "Rencana Kerja Penulisan Skripsi",
        }
    }

    /// Naming template the file name has to follow.
    #[must_use]
    pub const fn template(self) -> &'static str {
        match self {
            Self::SupervisorProposal => "StudentCode_SupervisorCode_SupervisorName.docx",
            Self::ReviewerProposal => "StudentCode_ReviewerCode_ReviewerName.docx",
            Self::MonitoringLog => "StudentCode_FullName_MonitoringLog.pdf",
            Self::WorkPlan => "StudentCode_FullName_WorkPlan.pdf",
        }
    }

    /// Whether files of this category must sit in a lecturer's folder.
    #[must_use]
    pub const fn is_folder_bound(self) -> bool {
        matches!(self, Self::SupervisorProposal | Self::ReviewerProposal)
    }

    /// Resolve the category of a file name by first-match priority.
    #[must_use]
    pub fn classify(file_name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| file_name.contains(category.discriminator()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "supervisor" | "supervisor_proposal" => Ok(Self::SupervisorProposal),
            "reviewer" | "reviewer_proposal" => Ok(Self::ReviewerProposal),
            "monitoring_log" | "logbook" => Ok(Self::MonitoringLog),
            "work_plan" => Ok(Self::WorkPlan),
            _ => Err(CoreError::UnknownCategory(value.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// MatchMode
// ---------------------------------------------------------------------------

/// How far a filename has to match its template.
///
/// `Prefix` only anchors at the start, so `AB12345_X_Name.docx.bak` passes the
/// supervisor template. `Full` anchors at both ends.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    #[default]
    Prefix,
    Full,
}

impl MatchMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prefix => "prefix",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
