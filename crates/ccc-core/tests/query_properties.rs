//! Filtering, sorting, and toggling behavior over the sample catalog.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rstest::rstest;

use ccc_core::catalog::Catalog;
use ccc_core::enums::{Category, CategoryFilter, MembershipFilter};
use ccc_core::filter::FilterState;
use ccc_core::membership::{MembershipSet, toggle};
use ccc_core::query::{filter_clubs, filter_events};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn filter(category: CategoryFilter, membership: MembershipFilter, search: &str) -> FilterState {
    FilterState::new(category, membership, search.to_string())
}

#[test]
fn default_filters_return_full_catalog_in_order() {
    let catalog = Catalog::sample();
    let membership: MembershipSet = ["ml-club"].into_iter().collect();
    let clubs = filter_clubs(&catalog, &FilterState::default(), &membership);
    let expected: Vec<&str> = catalog.clubs().iter().map(|c| c.id.as_str()).collect();
    let actual: Vec<&str> = clubs.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(actual, expected);
}

#[test]
fn technical_category_returns_both_technical_clubs() {
    let catalog = Catalog::sample();
    let state = filter(
        CategoryFilter::Only(Category::Technical),
        MembershipFilter::All,
        "",
    );
    let clubs = filter_clubs(&catalog, &state, &MembershipSet::new());
    let ids: Vec<&str> = clubs.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["coding-club", "ml-club"]);
}

#[test]
fn toggling_coding_club_twice_returns_to_empty() {
    let empty = MembershipSet::new();
    let joined = toggle(&empty, "coding-club");
    assert_eq!(joined.iter().collect::<Vec<_>>(), ["coding-club"]);
    assert_eq!(toggle(&joined, "coding-club"), empty);
}

#[rstest]
#[case("hackathon")]
#[case("HACKATHON")]
#[case("  hackathon  ")]
fn hackathon_search_finds_coding_club(#[case] search: &str) {
    let catalog = Catalog::sample();
    let state = filter(CategoryFilter::All, MembershipFilter::All, search);
    let clubs = filter_clubs(&catalog, &state, &MembershipSet::new());
    let names: Vec<&str> = clubs.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Coding & Dev Club"]);
}

#[test]
fn all_sample_events_upcoming_on_first_of_february() {
    let catalog = Catalog::sample();
    let events = filter_events(&catalog, &FilterState::default(), date(2026, 2, 1));
    let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "street-play",
            "ml-workshop",
            "hacknight",
            "blood-donation",
            "football-league",
            "battle-of-bands"
        ]
    );
}

#[test]
fn past_workshop_is_excluded() {
    let catalog = Catalog::sample();
    let events = filter_events(&catalog, &FilterState::default(), date(2026, 2, 6));
    assert!(events.iter().all(|e| e.id != "ml-workshop"));
    assert!(events.iter().all(|e| e.id != "street-play"));
    assert_eq!(events.len(), 4);
}

#[rstest]
fn events_are_upcoming_and_sorted(
    #[values(
        date(2025, 12, 31),
        date(2026, 2, 3),
        date(2026, 2, 11),
        date(2026, 2, 20),
        date(2026, 3, 2)
    )]
    today: NaiveDate,
    #[values(
        CategoryFilter::All,
        CategoryFilter::Only(Category::Technical),
        CategoryFilter::Only(Category::Sports)
    )]
    category: CategoryFilter,
    #[values("", "on-campus", "club")] search: &str,
) {
    let catalog = Catalog::sample();
    let state = filter(category, MembershipFilter::All, search);
    let events = filter_events(&catalog, &state, today);

    assert!(events.iter().all(|e| e.date >= today));
    assert!(events.windows(2).all(|pair| pair[0].date <= pair[1].date));
}

#[rstest]
fn club_filters_are_conjunctive(
    #[values(
        CategoryFilter::All,
        CategoryFilter::Only(Category::Technical),
        CategoryFilter::Only(Category::Cultural),
        CategoryFilter::Only(Category::Social)
    )]
    category: CategoryFilter,
    #[values(MembershipFilter::All, MembershipFilter::Joined, MembershipFilter::NotJoined)]
    membership_filter: MembershipFilter,
    #[values("", "club", "music", "impact", "zzz")] search: &str,
) {
    let catalog = Catalog::sample();
    let membership: MembershipSet = ["coding-club", "music-club", "social-impact"]
        .into_iter()
        .collect();
    let state = filter(category, membership_filter, search);
    let shown = filter_clubs(&catalog, &state, &membership);

    for club in catalog.clubs() {
        let category_ok = match category {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == club.category,
        };
        let joined = membership.contains(&club.id);
        let membership_ok = match membership_filter {
            MembershipFilter::All => true,
            MembershipFilter::Joined => joined,
            MembershipFilter::NotJoined => !joined,
        };
        let haystack = format!(
            "{} {} {}",
            club.name,
            club.description,
            club.category.label()
        )
        .to_lowercase();
        let search_ok = search.is_empty() || haystack.contains(&search.trim().to_lowercase());

        let expected = category_ok && membership_ok && search_ok;
        let present = shown.iter().any(|c| c.id == club.id);
        assert_eq!(present, expected, "club {} with {state:?}", club.id);
    }
}
