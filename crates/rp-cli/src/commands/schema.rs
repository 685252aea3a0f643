use rp_core::responses::AuditReport;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `rpc schema`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schemars::schema_for!(AuditReport);
    output(&schema, flags.format)
}
