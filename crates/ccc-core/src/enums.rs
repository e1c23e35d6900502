//! Categories, event modes, weekdays, and filter selectors for Campus Club Connect.
//!
//! Entity enums serialize with the spelling used in the catalog data.
//! Filter selectors parse from the strings the UI boundary hands over
//! (`all`, `technical`, `notJoined`, ...).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Category a club belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Technical,
    Cultural,
    Sports,
    Social,
}

impl Category {
    pub const ALL: [Self; 4] = [Self::Technical, Self::Cultural, Self::Sports, Self::Social];

    /// Return the identifier used in catalog data and filter selectors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Technical => "technical",
            Self::Cultural => "cultural",
            Self::Sports => "sports",
            Self::Social => "social",
        }
    }

    /// Human-readable label shown on badges and matched by club search.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Technical => "Technical",
            Self::Cultural => "Cultural",
            Self::Sports => "Sports",
            Self::Social => "Social Impact",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| CoreError::Validation(format!("unknown category '{raw}'")))
    }
}

// ---------------------------------------------------------------------------
// EventMode
// ---------------------------------------------------------------------------

/// Where an event takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum EventMode {
    #[serde(rename = "On-campus")]
    OnCampus,
    #[serde(rename = "Online")]
    Online,
}

impl EventMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OnCampus => "On-campus",
            Self::Online => "Online",
        }
    }
}

impl fmt::Display for EventMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Weekday
// ---------------------------------------------------------------------------

/// Day of the week a club meets on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CategoryFilter
// ---------------------------------------------------------------------------

/// Category selector: everything, or a single category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Whether a club of `category` passes this selector.
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.as_str(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        raw.parse::<Category>().map(Self::Only)
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        value.as_str().to_string()
    }
}

// ---------------------------------------------------------------------------
// MembershipFilter
// ---------------------------------------------------------------------------

/// Membership selector relative to the joined set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum MembershipFilter {
    #[default]
    All,
    Joined,
    NotJoined,
}

impl MembershipFilter {
    /// Whether a club with the given joined status passes this selector.
    #[must_use]
    pub const fn matches(self, joined: bool) -> bool {
        match self {
            Self::All => true,
            Self::Joined => joined,
            Self::NotJoined => !joined,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Joined => "joined",
            Self::NotJoined => "notJoined",
        }
    }
}

impl fmt::Display for MembershipFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MembershipFilter {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().replace(['-', '_'], "").to_ascii_lowercase();
        match normalized.as_str() {
            "all" => Ok(Self::All),
            "joined" => Ok(Self::Joined),
            "notjoined" => Ok(Self::NotJoined),
            _ => Err(CoreError::Validation(format!(
                "unknown membership filter '{raw}' (expected all, joined, notJoined)"
            ))),
        }
    }
}
