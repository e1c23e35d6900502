use ccc_core::render::{RenderSet, View};
use ccc_store::KeyValueStore;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ClubFilterArgs;
use crate::commands::shared::filters::apply_filters;
use crate::context::AppContext;
use crate::output::output_view;

pub fn handle<S: KeyValueStore>(
    args: &ClubFilterArgs,
    ctx: &mut AppContext<S>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    apply_filters(
        ctx,
        args.category,
        Some(args.membership),
        args.search.as_deref(),
    )?;
    output_view(&ctx.render(RenderSet::only(View::Clubs)), flags.format)
}
