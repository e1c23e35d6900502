use ccc_store::KeyValueStore;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch<S: KeyValueStore>(
    command: Commands,
    ctx: &mut AppContext<S>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Dashboard(args) => commands::dashboard::handle(&args, ctx, flags),
        Commands::Stats => commands::stats::handle(ctx, flags),
        Commands::Clubs(args) => commands::clubs::handle(&args, ctx, flags),
        Commands::Events(args) => commands::events::handle(&args, ctx, flags),
        Commands::Joined => commands::joined::handle(ctx, flags),
        Commands::Toggle(args) => commands::toggle::handle(&args, ctx, flags),
        Commands::Shell => commands::shell::handle(ctx, flags),
    }
}
