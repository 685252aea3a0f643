use rp_core::enums::{Category, LECTURER_FOLDER_PREFIX};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Serialize)]
struct TemplateEntry {
    category: Category,
    label: &'static str,
    template: &'static str,
    discriminator: &'static str,
    folder: Option<String>,
}

fn folder_rule(category: Category) -> Option<String> {
    let code = match category {
        Category::SupervisorProposal => "<SupervisorCode>",
        Category::ReviewerProposal => "<ReviewerCode>",
        Category::MonitoringLog | Category::WorkPlan => return None,
    };
    Some(format!("{LECTURER_FOLDER_PREFIX}{code}"))
}

fn entries() -> Vec<TemplateEntry> {
    Category::ALL
        .into_iter()
        .map(|category| TemplateEntry {
            category,
            label: category.label(),
            template: category.template(),
            discriminator: category.discriminator(),
            folder: folder_rule(category),
        })
        .collect()
}

/// Handle `rpc templates`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&entries(), flags.format)
}
