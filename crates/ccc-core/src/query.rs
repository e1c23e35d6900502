//! Pure queries over the catalog.
//!
//! Nothing here touches storage or the clock: callers pass the membership set
//! and the render pass's `today` in explicitly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::entities::{Club, Event};
use crate::filter::FilterState;
use crate::membership::MembershipSet;

/// Aggregate counters shown above the lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryStats {
    pub total_clubs: usize,
    pub joined_clubs: usize,
    pub upcoming_events: usize,
}

/// Clubs passing the category, membership, and search predicates, in catalog order.
#[must_use]
pub fn filter_clubs<'a>(
    catalog: &'a Catalog,
    filter: &FilterState,
    membership: &MembershipSet,
) -> Vec<&'a Club> {
    let needle = filter.search_needle();
    catalog
        .clubs()
        .iter()
        .filter(|club| filter.category().matches(club.category))
        .filter(|club| filter.membership().matches(membership.contains(&club.id)))
        .filter(|club| {
            needle
                .as_deref()
                .is_none_or(|needle| club_search_text(club).contains(needle))
        })
        .collect()
}

/// Upcoming events of resolvable clubs passing the category and search
/// predicates, sorted by date. Ties keep catalog order.
#[must_use]
pub fn filter_events<'a>(
    catalog: &'a Catalog,
    filter: &FilterState,
    today: NaiveDate,
) -> Vec<&'a Event> {
    let needle = filter.search_needle();
    let mut events: Vec<&Event> = catalog
        .events()
        .iter()
        .filter_map(|event| {
            catalog
                .find_club_by_id(&event.club_id)
                .map(|club| (event, club))
        })
        .filter(|(event, _)| event.date >= today)
        .filter(|(_, club)| filter.category().matches(club.category))
        .filter(|(event, club)| {
            needle
                .as_deref()
                .is_none_or(|needle| event_search_text(event, club).contains(needle))
        })
        .map(|(event, _)| event)
        .collect();

    events.sort_by_key(|event| event.date);
    events
}

/// Joined clubs in membership order. Ids with no catalog entry are skipped.
#[must_use]
pub fn joined_clubs<'a>(catalog: &'a Catalog, membership: &MembershipSet) -> Vec<&'a Club> {
    membership
        .iter()
        .filter_map(|id| catalog.find_club_by_id(id))
        .collect()
}

#[must_use]
pub fn directory_stats(
    catalog: &Catalog,
    membership: &MembershipSet,
    today: NaiveDate,
) -> DirectoryStats {
    DirectoryStats {
        total_clubs: catalog.clubs().len(),
        joined_clubs: joined_clubs(catalog, membership).len(),
        upcoming_events: filter_events(catalog, &FilterState::default(), today).len(),
    }
}

fn club_search_text(club: &Club) -> String {
    format!(
        "{} {} {}",
        club.name,
        club.description,
        club.category.label()
    )
    .to_lowercase()
    .trim()
    .to_string()
}

fn event_search_text(event: &Event, club: &Club) -> String {
    format!(
        "{} {} {} {}",
        event.title, club.name, event.mode, event.location
    )
    .to_lowercase()
    .trim()
    .to_string()
}
