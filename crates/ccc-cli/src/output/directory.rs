//! Table-mode layout of a [`DirectoryView`].
//!
//! Sections appear in display order (stats, joined, clubs, events). Each list
//! section is headed by its counter line and shows either a table or its
//! empty-state message.

use ccc_core::views::{ClubsSection, DirectoryView, EventsSection, JoinedSection};

use super::render_fields;
use super::table::{TableOptions, render_table};

pub fn render_directory(view: &DirectoryView, options: TableOptions) -> anyhow::Result<String> {
    let mut blocks = Vec::new();

    if let Some(stats) = &view.stats {
        blocks.push(format!("Stats\n{}", render_fields(stats, options)?));
    }
    if let Some(joined) = &view.joined {
        blocks.push(joined_block(joined));
    }
    if let Some(clubs) = &view.clubs {
        blocks.push(clubs_block(clubs, options));
    }
    if let Some(events) = &view.events {
        blocks.push(events_block(events, options));
    }

    Ok(blocks.join("\n\n"))
}

fn joined_block(section: &JoinedSection) -> String {
    let mut lines = vec![String::from("Joined clubs")];
    lines.extend(section.clubs.iter().map(|name| format!("  - {name}")));
    if let Some(message) = &section.empty_message {
        lines.push(format!("  {message}"));
    }
    lines.join("\n")
}

fn clubs_block(section: &ClubsSection, options: TableOptions) -> String {
    let heading = format!("Clubs: {}", section.info);
    if let Some(message) = &section.empty_message {
        return format!("{heading}\n  {message}");
    }

    let rows = section
        .clubs
        .iter()
        .map(|card| {
            vec![
                card.id.clone(),
                card.name.clone(),
                card.category_label.clone(),
                card.members.clone(),
                card.meeting.clone(),
                card.action.clone(),
            ]
        })
        .collect::<Vec<_>>();
    let table = render_table(
        &["id", "name", "category", "members", "meets", "action"],
        &rows,
        options,
    );
    format!("{heading}\n{table}")
}

fn events_block(section: &EventsSection, options: TableOptions) -> String {
    let heading = format!("Events: {}", section.info);
    if let Some(message) = &section.empty_message {
        return format!("{heading}\n  {message}");
    }

    let rows = section
        .events
        .iter()
        .map(|card| {
            vec![
                card.date_label.clone(),
                card.title.clone(),
                card.club.clone(),
                card.mode.to_string(),
                card.location.clone(),
            ]
        })
        .collect::<Vec<_>>();
    let table = render_table(&["date", "title", "club", "mode", "location"], &rows, options);
    format!("{heading}\n{table}")
}
