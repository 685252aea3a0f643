use rp_core::enums::{Category, MatchMode};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ValidateArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ValidateResponse<'a> {
    filename: &'a str,
    category: Category,
    template: &'static str,
    match_mode: MatchMode,
    valid: bool,
    /// Category the name would be classified as during an audit.
    classified_as: Option<Category>,
}

/// Handle `rpc validate`.
///
/// Prints the verdict either way; an invalid name is not an error.
pub fn handle(args: &ValidateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let category = args.category;
    let response = ValidateResponse {
        filename: &args.filename,
        category,
        template: category.template(),
        match_mode: ctx.validator.mode(),
        valid: ctx.validator.matches(category, &args.filename),
        classified_as: Category::classify(&args.filename),
    };
    output(&response, flags.format)
}
