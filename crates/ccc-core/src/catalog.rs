//! The read-only club and event catalog.
//!
//! A [`Catalog`] is built once at startup and never mutated afterwards.
//! [`Catalog::sample`] returns the built-in demo data set.

use chrono::NaiveDate;

use crate::entities::{Club, Event};
use crate::enums::{Category, EventMode, Weekday};

/// Ordered, immutable collections of clubs and events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    clubs: Vec<Club>,
    events: Vec<Event>,
}

impl Catalog {
    #[must_use]
    pub const fn new(clubs: Vec<Club>, events: Vec<Event>) -> Self {
        Self { clubs, events }
    }

    /// The built-in demo catalog: six clubs and six events in February/March 2026.
    #[must_use]
    pub fn sample() -> Self {
        let clubs = SAMPLE_CLUBS
            .iter()
            .map(|raw| Club {
                id: raw.id.to_string(),
                name: raw.name.to_string(),
                category: raw.category,
                description: raw.description.to_string(),
                members: raw.members,
                meeting_day: raw.meeting_day,
                meeting_time: raw.meeting_time.to_string(),
            })
            .collect();

        let events = SAMPLE_EVENTS
            .iter()
            .map(|raw| Event {
                id: raw.id.to_string(),
                title: raw.title.to_string(),
                club_id: raw.club_id.to_string(),
                date: raw.date,
                mode: raw.mode,
                location: raw.location.to_string(),
            })
            .collect();

        Self { clubs, events }
    }

    #[must_use]
    pub fn clubs(&self) -> &[Club] {
        &self.clubs
    }

    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Look up a club by identifier.
    #[must_use]
    pub fn find_club_by_id(&self, id: &str) -> Option<&Club> {
        self.clubs.iter().find(|club| club.id == id)
    }
}

// ---------------------------------------------------------------------------
// Sample data
// ---------------------------------------------------------------------------

struct RawClub {
    id: &'static str,
    name: &'static str,
    category: Category,
    description: &'static str,
    members: u32,
    meeting_day: Weekday,
    meeting_time: &'static str,
}

struct RawEvent {
    id: &'static str,
    title: &'static str,
    club_id: &'static str,
    date: NaiveDate,
    mode: EventMode,
    location: &'static str,
}

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid sample date"),
    }
}

const SAMPLE_CLUBS: [RawClub; 6] = [
    RawClub {
        id: "coding-club",
        name: "Coding & Dev Club",
        category: Category::Technical,
        description: "Hands-on coding sessions, hackathons, and project-building meetups.",
        members: 85,
        meeting_day: Weekday::Wednesday,
        meeting_time: "5:00 PM",
    },
    RawClub {
        id: "ml-club",
        name: "AI & ML Circle",
        category: Category::Technical,
        description: "Exploring machine learning, Kaggle challenges, and paper reading.",
        members: 60,
        meeting_day: Weekday::Saturday,
        meeting_time: "11:00 AM",
    },
    RawClub {
        id: "drama-club",
        name: "Dramatics Society",
        category: Category::Cultural,
        description: "Theatre, stage plays, and acting workshops for creative minds.",
        members: 40,
        meeting_day: Weekday::Tuesday,
        meeting_time: "4:30 PM",
    },
    RawClub {
        id: "music-club",
        name: "Music & Jamming Club",
        category: Category::Cultural,
        description: "Band jamming, open mics, and music production experiments.",
        members: 55,
        meeting_day: Weekday::Friday,
        meeting_time: "6:00 PM",
    },
    RawClub {
        id: "football-club",
        name: "Football Squad",
        category: Category::Sports,
        description: "Evening practice, intra-college matches and fitness sessions.",
        members: 35,
        meeting_day: Weekday::Monday,
        meeting_time: "5:30 PM",
    },
    RawClub {
        id: "social-impact",
        name: "Social Impact Forum",
        category: Category::Social,
        description: "Community service, donation drives, and awareness campaigns.",
        members: 45,
        meeting_day: Weekday::Sunday,
        meeting_time: "10:00 AM",
    },
];

const SAMPLE_EVENTS: [RawEvent; 6] = [
    RawEvent {
        id: "hacknight",
        title: "Overnight Hackathon: HackNight 1.0",
        club_id: "coding-club",
        date: ymd(2026, 2, 10),
        mode: EventMode::OnCampus,
        location: "CSE Lab 3",
    },
    RawEvent {
        id: "ml-workshop",
        title: "Hands-on ML: Build Your First Classifier",
        club_id: "ml-club",
        date: ymd(2026, 2, 5),
        mode: EventMode::Online,
        location: "Google Meet",
    },
    RawEvent {
        id: "street-play",
        title: "Street Play for Social Awareness",
        club_id: "drama-club",
        date: ymd(2026, 2, 3),
        mode: EventMode::OnCampus,
        location: "Main Gate",
    },
    RawEvent {
        id: "battle-of-bands",
        title: "Battle of Bands",
        club_id: "music-club",
        date: ymd(2026, 3, 1),
        mode: EventMode::OnCampus,
        location: "Auditorium",
    },
    RawEvent {
        id: "football-league",
        title: "Inter-Department Football League",
        club_id: "football-club",
        date: ymd(2026, 2, 20),
        mode: EventMode::OnCampus,
        location: "College Ground",
    },
    RawEvent {
        id: "blood-donation",
        title: "Blood Donation Camp",
        club_id: "social-impact",
        date: ymd(2026, 2, 15),
        mode: EventMode::OnCampus,
        location: "Seminar Hall",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_six_clubs_and_events() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.clubs().len(), 6);
        assert_eq!(catalog.events().len(), 6);
    }

    #[test]
    fn sample_events_reference_existing_clubs() {
        let catalog = Catalog::sample();
        for event in catalog.events() {
            assert!(
                catalog.find_club_by_id(&event.club_id).is_some(),
                "event {} references unknown club {}",
                event.id,
                event.club_id
            );
        }
    }

    #[test]
    fn find_club_by_id_hits_and_misses() {
        let catalog = Catalog::sample();
        let club = catalog.find_club_by_id("ml-club").expect("ml-club exists");
        assert_eq!(club.name, "AI & ML Circle");
        assert!(catalog.find_club_by_id("chess-club").is_none());
    }

    #[test]
    fn sample_preserves_declared_order() {
        let catalog = Catalog::sample();
        let ids: Vec<&str> = catalog.clubs().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "coding-club",
                "ml-club",
                "drama-club",
                "music-club",
                "football-club",
                "social-impact"
            ]
        );
    }
}
