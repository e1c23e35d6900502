use anyhow::Context;
use ccc_core::render::Interaction;
use ccc_core::views::DirectoryView;
use ccc_store::KeyValueStore;
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::cli::root_commands::ToggleArgs;
use crate::context::AppContext;
use crate::output::{output_view, render};

#[derive(Debug, Serialize)]
struct ToggleResponse {
    club_id: String,
    joined: bool,
    view: DirectoryView,
}

pub fn handle<S: KeyValueStore>(
    args: &ToggleArgs,
    ctx: &mut AppContext<S>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let set = ctx
        .apply(&Interaction::ClubToggled(args.club_id.clone()))
        .with_context(|| format!("cannot toggle membership of '{}'", args.club_id))?;
    let joined = ctx.membership().contains(&args.club_id);
    let view = ctx.render(set);

    if flags.format == OutputFormat::Table {
        let name = ctx
            .catalog()
            .find_club_by_id(&args.club_id)
            .map_or(args.club_id.as_str(), |club| club.name.as_str());
        println!("{} {name}.\n", if joined { "Joined" } else { "Left" });
        return output_view(&view, flags.format);
    }

    let response = ToggleResponse {
        club_id: args.club_id.clone(),
        joined,
        view,
    };
    println!("{}", render(&response, flags.format)?);
    Ok(())
}
