use ccc_core::render::{RenderSet, View};
use ccc_store::KeyValueStore;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output_view;

pub fn handle<S: KeyValueStore>(ctx: &AppContext<S>, flags: &GlobalFlags) -> anyhow::Result<()> {
    output_view(&ctx.render(RenderSet::only(View::Stats)), flags.format)
}
