use ccc_core::enums::{CategoryFilter, MembershipFilter};
use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Show everything: stats, joined clubs, clubs, and upcoming events.
    Dashboard(ClubFilterArgs),
    /// Total clubs, joined clubs, and upcoming events.
    Stats,
    /// List clubs matching the filters.
    Clubs(ClubFilterArgs),
    /// List upcoming events matching the filters.
    Events(EventFilterArgs),
    /// List the clubs you have joined.
    Joined,
    /// Join a club, or leave it if already joined.
    Toggle(ToggleArgs),
    /// Interactive session reading one interaction per line from stdin.
    Shell,
}

/// Filters for club listings.
#[derive(Clone, Debug, Args)]
pub struct ClubFilterArgs {
    /// Category: all, technical, cultural, sports, social.
    #[arg(long, default_value = "all")]
    pub category: CategoryFilter,
    /// Membership: all, joined, notJoined.
    #[arg(long, default_value = "all")]
    pub membership: MembershipFilter,
    /// Case-insensitive text search.
    #[arg(long)]
    pub search: Option<String>,
}

/// Filters for event listings. Membership does not apply to events.
#[derive(Clone, Debug, Args)]
pub struct EventFilterArgs {
    /// Category: all, technical, cultural, sports, social.
    #[arg(long, default_value = "all")]
    pub category: CategoryFilter,
    /// Case-insensitive text search.
    #[arg(long)]
    pub search: Option<String>,
}

/// Arguments for `ccc toggle`.
#[derive(Clone, Debug, Args)]
pub struct ToggleArgs {
    /// Club identifier, e.g. `coding-club`.
    pub club_id: String,
}
