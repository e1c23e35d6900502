//! Render-trigger contract between state mutations and the display surface.
//!
//! Every interaction maps to exactly one state mutation and to the set of
//! views that must be redrawn afterwards:
//!
//! ```text
//! interaction                stats  clubs  events  joined
//! initial load                 x      x      x       x
//! category selected                   x      x
//! membership filter selected          x
//! search text changed                 x      x
//! club toggled                 x      x              x
//! ```

use crate::enums::{CategoryFilter, MembershipFilter};

/// A discrete user interaction coming from the UI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    CategorySelected(CategoryFilter),
    MembershipFilterSelected(MembershipFilter),
    SearchChanged(String),
    ClubToggled(String),
}

/// One independently rendered region of the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Stats,
    Clubs,
    Events,
    Joined,
}

/// Which views need to be re-rendered after a state change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct RenderSet {
    pub stats: bool,
    pub clubs: bool,
    pub events: bool,
    pub joined: bool,
}

impl RenderSet {
    pub const NONE: Self = Self {
        stats: false,
        clubs: false,
        events: false,
        joined: false,
    };

    /// Initial load draws everything.
    pub const ALL: Self = Self {
        stats: true,
        clubs: true,
        events: true,
        joined: true,
    };

    #[must_use]
    pub const fn only(view: View) -> Self {
        let mut set = Self::NONE;
        match view {
            View::Stats => set.stats = true,
            View::Clubs => set.clubs = true,
            View::Events => set.events = true,
            View::Joined => set.joined = true,
        }
        set
    }

    /// Category and search changes affect both lists but not the counters.
    pub const CLUBS_AND_EVENTS: Self = Self {
        stats: false,
        clubs: true,
        events: true,
        joined: false,
    };

    /// Views mandated after `interaction` completes.
    #[must_use]
    pub const fn for_interaction(interaction: &Interaction) -> Self {
        match interaction {
            Interaction::CategorySelected(_) | Interaction::SearchChanged(_) => {
                Self::CLUBS_AND_EVENTS
            }
            Interaction::MembershipFilterSelected(_) => Self::only(View::Clubs),
            Interaction::ClubToggled(_) => Self {
                stats: true,
                clubs: true,
                events: false,
                joined: true,
            },
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        !(self.stats || self.clubs || self.events || self.joined)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::enums::Category;

    /// Set members in display order.
    fn views(set: RenderSet) -> Vec<View> {
        [
            (set.stats, View::Stats),
            (set.joined, View::Joined),
            (set.clubs, View::Clubs),
            (set.events, View::Events),
        ]
        .into_iter()
        .filter_map(|(on, view)| on.then_some(view))
        .collect()
    }

    #[test]
    fn category_change_redraws_clubs_and_events() {
        let set = RenderSet::for_interaction(&Interaction::CategorySelected(
            CategoryFilter::Only(Category::Sports),
        ));
        assert_eq!(views(set), [View::Clubs, View::Events]);
    }

    #[test]
    fn membership_filter_change_redraws_clubs_only() {
        let set = RenderSet::for_interaction(&Interaction::MembershipFilterSelected(
            MembershipFilter::Joined,
        ));
        assert_eq!(views(set), [View::Clubs]);
    }

    #[test]
    fn search_change_redraws_clubs_and_events() {
        let set = RenderSet::for_interaction(&Interaction::SearchChanged("band".into()));
        assert_eq!(views(set), [View::Clubs, View::Events]);
    }

    #[test]
    fn toggle_redraws_stats_clubs_and_sidebar() {
        let set = RenderSet::for_interaction(&Interaction::ClubToggled("ml-club".into()));
        assert_eq!(views(set), [View::Stats, View::Joined, View::Clubs]);
        assert!(!set.events);
    }

    #[test]
    fn all_and_none() {
        assert_eq!(views(RenderSet::ALL).len(), 4);
        assert!(RenderSet::NONE.is_empty());
        assert!(!RenderSet::only(View::Joined).is_empty());
    }
}
