//! Session-scoped view parameters.

use serde::Serialize;

use crate::enums::{CategoryFilter, MembershipFilter};
use crate::render::{Interaction, RenderSet, View};

/// Current category, membership, and search selections.
///
/// Fields are only changed through the setters, each of which returns the
/// views that must be re-rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    category: CategoryFilter,
    membership: MembershipFilter,
    search: String,
}

impl FilterState {
    #[must_use]
    pub const fn new(category: CategoryFilter, membership: MembershipFilter, search: String) -> Self {
        Self {
            category,
            membership,
            search,
        }
    }

    #[must_use]
    pub const fn category(&self) -> CategoryFilter {
        self.category
    }

    #[must_use]
    pub const fn membership(&self) -> MembershipFilter {
        self.membership
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Normalized search needle, or `None` when search does not filter.
    #[must_use]
    pub fn search_needle(&self) -> Option<String> {
        if self.search.is_empty() {
            None
        } else {
            Some(self.search.trim().to_lowercase())
        }
    }

    pub fn set_category(&mut self, category: CategoryFilter) -> RenderSet {
        self.category = category;
        RenderSet::CLUBS_AND_EVENTS
    }

    pub fn set_membership(&mut self, membership: MembershipFilter) -> RenderSet {
        self.membership = membership;
        RenderSet::only(View::Clubs)
    }

    pub fn set_search(&mut self, search: impl Into<String>) -> RenderSet {
        self.search = search.into();
        RenderSet::CLUBS_AND_EVENTS
    }

    /// Apply a filter interaction. Toggles do not touch filter state and
    /// return [`RenderSet::NONE`].
    pub fn apply(&mut self, interaction: &Interaction) -> RenderSet {
        match interaction {
            Interaction::CategorySelected(category) => self.set_category(*category),
            Interaction::MembershipFilterSelected(membership) => self.set_membership(*membership),
            Interaction::SearchChanged(search) => self.set_search(search.clone()),
            Interaction::ClubToggled(_) => RenderSet::NONE,
        }
    }
}
