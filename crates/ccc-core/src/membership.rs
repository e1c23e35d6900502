//! The set of clubs the current user has joined.
//!
//! Ids keep insertion order so the persisted value and the joined-clubs list
//! are deterministic. Persistence lives in `ccc-store`.

use serde::{Deserialize, Serialize};

/// Storage key the joined-club list lives under unless configured otherwise.
pub const DEFAULT_MEMBERSHIP_KEY: &str = "ccc_joined_clubs";

/// Joined club identifiers, unique, in the order they were joined.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct MembershipSet {
    ids: Vec<String>,
}

impl MembershipSet {
    #[must_use]
    pub const fn new() -> Self {
        Self { ids: Vec::new() }
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|joined| joined == id)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Add `id` at the end. Returns `false` if it was already present.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Remove `id`. Returns `false` if it was not present.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|joined| joined != id);
        self.ids.len() != before
    }
}

/// Return `set` with `id` removed if present, or appended if absent.
///
/// Toggling the same id twice yields the original set.
#[must_use]
pub fn toggle(set: &MembershipSet, id: &str) -> MembershipSet {
    let mut next = set.clone();
    if !next.remove(id) {
        next.insert(id);
    }
    next
}

impl From<Vec<String>> for MembershipSet {
    fn from(ids: Vec<String>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<MembershipSet> for Vec<String> {
    fn from(set: MembershipSet) -> Self {
        set.ids
    }
}

impl<S: Into<String>> FromIterator<S> for MembershipSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

/// Order-independent equality.
impl PartialEq for MembershipSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|id| other.contains(id))
    }
}

impl Eq for MembershipSet {}
