use anyhow::Context;
use rp_audit::Auditor;
use rp_ingest::{discover_files, ensure_within_limit, load_roster, prepare_bundle};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CheckArgs;
use crate::context::AppContext;
use crate::output::{export, output_report};
use crate::progress::Progress;

/// Handle `rpc check`.
///
/// Roster and bundle errors surface before the audit starts.
pub fn handle(args: &CheckArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = &ctx.config;

    ensure_within_limit(&args.roster, &config.limits)?;
    let roster = load_roster(&args.roster, &config.roster)
        .with_context(|| format!("failed to load roster {}", args.roster.display()))?;
    if roster.is_empty() {
        tracing::warn!(path = %args.roster.display(), "roster has no students");
    }

    let progress = Progress::spinner("preparing submission bundle");
    let bundle = progress
        .guard(
            prepare_bundle(&args.bundle, &config.ingest, &config.limits),
            "bundle rejected",
        )
        .with_context(|| format!("failed to open bundle {}", args.bundle.display()))?;

    progress.set_message("discovering files");
    let files = progress.guard(discover_files(bundle.root()), "file discovery failed")?;

    progress.set_message("auditing submissions");
    let mut report = progress.guard(
        Auditor::new(&ctx.validator).audit(&roster, &files),
        "audit failed",
    )?;
    progress.finish_ok(&format!(
        "{} students audited, {} complete",
        report.summary.students, report.summary.complete
    ));
    drop(bundle);

    if args.incomplete_only {
        report.retain_incomplete();
    }

    if let Some(path) = &args.report {
        export::write_report(&report, path)?;
    }

    output_report(&report, flags.format)
}
