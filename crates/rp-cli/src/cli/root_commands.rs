use std::path::PathBuf;

use clap::{Args, Subcommand};
use rp_core::enums::Category;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Audit a submission bundle against a student roster.
    Check(CheckArgs),
    /// List the naming template and folder rule of each document category.
    Templates,
    /// Check a single file name against a category's template.
    Validate(ValidateArgs),
    /// Print the JSON Schema of the audit report.
    Schema,
}

#[derive(Clone, Debug, Args)]
pub struct CheckArgs {
    /// Roster file (.csv or .json).
    #[arg(long)]
    pub roster: PathBuf,

    /// Submission bundle: a directory, .zip, .tar.gz or .tgz.
    #[arg(long)]
    pub bundle: PathBuf,

    /// Also write the report to this path (.csv or .json).
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Only print students with missing documents or remarks.
    #[arg(long)]
    pub incomplete_only: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ValidateArgs {
    /// Document category: supervisor, reviewer, monitoring-log (logbook) or work-plan.
    #[arg(value_parser = clap::value_parser!(Category))]
    pub category: Category,

    /// File name to check (no directory).
    pub filename: String,
}
