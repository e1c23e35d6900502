//! Display strings handed to the presentation layer.

use chrono::NaiveDate;

pub const NO_CLUBS_MESSAGE: &str = "No clubs match your filters or search.";
pub const NO_EVENTS_MESSAGE: &str = "No upcoming events for the current filters.";
pub const NO_JOINED_MESSAGE: &str = "No clubs joined yet.";

pub const JOIN_ACTION: &str = "Join club";
pub const LEAVE_ACTION: &str = "Leave club";

/// Short day-month-year form, e.g. `03 Feb 2026`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

#[must_use]
pub fn clubs_result_info(count: usize) -> String {
    format!("{count} club(s) shown")
}

#[must_use]
pub fn events_result_info(count: usize) -> String {
    format!("{count} upcoming event(s)")
}

#[must_use]
pub const fn membership_action(joined: bool) -> &'static str {
    if joined { LEAVE_ACTION } else { JOIN_ACTION }
}
