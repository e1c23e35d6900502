use ccc_core::enums::{CategoryFilter, MembershipFilter};
use ccc_core::render::Interaction;
use ccc_store::KeyValueStore;

use crate::context::AppContext;

/// Feed command-line filters through the session as interactions.
pub fn apply_filters<S: KeyValueStore>(
    ctx: &mut AppContext<S>,
    category: CategoryFilter,
    membership: Option<MembershipFilter>,
    search: Option<&str>,
) -> anyhow::Result<()> {
    ctx.apply(&Interaction::CategorySelected(category))?;
    if let Some(membership) = membership {
        ctx.apply(&Interaction::MembershipFilterSelected(membership))?;
    }
    if let Some(search) = search {
        ctx.apply(&Interaction::SearchChanged(search.to_string()))?;
    }
    Ok(())
}
