//! Display-ready view types.
//!
//! [`render`] is a pure function of catalog, filters, membership, and the
//! render pass's `today`. It only builds the sections named in the
//! [`RenderSet`].

use chrono::NaiveDate;
use serde::Serialize;

use crate::catalog::Catalog;
use crate::entities::{Club, Event};
use crate::enums::{Category, EventMode};
use crate::filter::FilterState;
use crate::format::{
    NO_CLUBS_MESSAGE, NO_EVENTS_MESSAGE, NO_JOINED_MESSAGE, clubs_result_info, events_result_info,
    format_date, membership_action,
};
use crate::membership::MembershipSet;
use crate::query::{DirectoryStats, directory_stats, filter_clubs, filter_events, joined_clubs};
use crate::render::RenderSet;

/// One club as shown in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClubCard {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub category_label: String,
    pub description: String,
    pub members: String,
    pub meeting: String,
    pub joined: bool,
    pub action: String,
}

impl ClubCard {
    #[must_use]
    pub fn new(club: &Club, joined: bool) -> Self {
        Self {
            id: club.id.clone(),
            name: club.name.clone(),
            category: club.category,
            category_label: club.category.label().to_string(),
            description: club.description.clone(),
            members: format!("{} members", club.members),
            meeting: format!("{}, {}", club.meeting_day, club.meeting_time),
            joined,
            action: membership_action(joined).to_string(),
        }
    }
}

/// One upcoming event as shown in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventCard {
    pub id: String,
    pub title: String,
    pub club: String,
    pub date: NaiveDate,
    pub date_label: String,
    pub mode: EventMode,
    pub location: String,
}

impl EventCard {
    #[must_use]
    pub fn new(event: &Event, club_name: &str) -> Self {
        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            club: club_name.to_string(),
            date: event.date,
            date_label: format_date(event.date),
            mode: event.mode,
            location: event.location.clone(),
        }
    }
}

/// Filtered club list with its counter line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClubsSection {
    pub info: String,
    pub count: usize,
    pub clubs: Vec<ClubCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

/// Filtered upcoming events with their counter line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventsSection {
    pub info: String,
    pub count: usize,
    pub events: Vec<EventCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

/// Names of joined clubs for the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JoinedSection {
    pub clubs: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

/// The sections produced by one render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryView {
    pub today: NaiveDate,
    pub filters: FilterState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<DirectoryStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joined: Option<JoinedSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clubs: Option<ClubsSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<EventsSection>,
}

#[must_use]
pub fn clubs_section(
    catalog: &Catalog,
    filter: &FilterState,
    membership: &MembershipSet,
) -> ClubsSection {
    let clubs: Vec<ClubCard> = filter_clubs(catalog, filter, membership)
        .into_iter()
        .map(|club| ClubCard::new(club, membership.contains(&club.id)))
        .collect();

    ClubsSection {
        info: clubs_result_info(clubs.len()),
        count: clubs.len(),
        empty_message: clubs.is_empty().then(|| NO_CLUBS_MESSAGE.to_string()),
        clubs,
    }
}

#[must_use]
pub fn events_section(catalog: &Catalog, filter: &FilterState, today: NaiveDate) -> EventsSection {
    let events: Vec<EventCard> = filter_events(catalog, filter, today)
        .into_iter()
        .filter_map(|event| {
            catalog
                .find_club_by_id(&event.club_id)
                .map(|club| EventCard::new(event, &club.name))
        })
        .collect();

    EventsSection {
        info: events_result_info(events.len()),
        count: events.len(),
        empty_message: events.is_empty().then(|| NO_EVENTS_MESSAGE.to_string()),
        events,
    }
}

#[must_use]
pub fn joined_section(catalog: &Catalog, membership: &MembershipSet) -> JoinedSection {
    let clubs: Vec<String> = joined_clubs(catalog, membership)
        .into_iter()
        .map(|club| club.name.clone())
        .collect();

    // An empty membership set shows the hint; stale ids alone render an empty list.
    JoinedSection {
        empty_message: membership
            .is_empty()
            .then(|| NO_JOINED_MESSAGE.to_string()),
        clubs,
    }
}

/// Build the sections named in `set`.
#[must_use]
pub fn render(
    catalog: &Catalog,
    filter: &FilterState,
    membership: &MembershipSet,
    today: NaiveDate,
    set: RenderSet,
) -> DirectoryView {
    DirectoryView {
        today,
        filters: filter.clone(),
        stats: set
            .stats
            .then(|| directory_stats(catalog, membership, today)),
        joined: set.joined.then(|| joined_section(catalog, membership)),
        clubs: set
            .clubs
            .then(|| clubs_section(catalog, filter, membership)),
        events: set.events.then(|| events_section(catalog, filter, today)),
    }
}
