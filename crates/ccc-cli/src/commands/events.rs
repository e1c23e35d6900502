use ccc_core::render::{RenderSet, View};
use ccc_store::KeyValueStore;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::EventFilterArgs;
use crate::commands::shared::filters::apply_filters;
use crate::context::AppContext;
use crate::output::output_view;

pub fn handle<S: KeyValueStore>(
    args: &EventFilterArgs,
    ctx: &mut AppContext<S>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    apply_filters(ctx, args.category, None, args.search.as_deref())?;
    output_view(&ctx.render(RenderSet::only(View::Events)), flags.format)
}
