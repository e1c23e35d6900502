//! Membership persistence at a single fixed key.
//!
//! The stored value is a JSON array of club ids. Reads never fail: a missing
//! key, unreadable storage, or a value that is not an array of strings all
//! load as the empty set.

pub use ccc_core::membership::DEFAULT_MEMBERSHIP_KEY;
use ccc_core::membership::{MembershipSet, toggle};

use crate::KeyValueStore;
use crate::error::StoreError;

/// Parse a stored membership value. Returns `None` if it is not a JSON array of strings.
#[must_use]
pub fn decode_membership(raw: &str) -> Option<MembershipSet> {
    serde_json::from_str::<Vec<String>>(raw)
        .ok()
        .map(MembershipSet::from)
}

pub struct MembershipStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> MembershipStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Store at [`DEFAULT_MEMBERSHIP_KEY`].
    pub fn with_default_key(storage: S) -> Self {
        Self::new(storage, DEFAULT_MEMBERSHIP_KEY)
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Load the persisted set, falling back to empty on any problem.
    #[must_use]
    pub fn load(&self) -> MembershipSet {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(key = %self.key, "no stored membership; starting empty");
                return MembershipSet::new();
            }
            Err(error) => {
                tracing::warn!(key = %self.key, %error, "failed to read membership; starting empty");
                return MembershipSet::new();
            }
        };

        decode_membership(&raw).map_or_else(
            || {
                tracing::warn!(key = %self.key, "stored membership is malformed; starting empty");
                MembershipSet::new()
            },
            |set| {
                tracing::debug!(key = %self.key, joined = set.len(), "loaded membership");
                set
            },
        )
    }

    /// Overwrite the stored value with the full set.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if encoding or the storage write fails.
    pub fn save(&mut self, set: &MembershipSet) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(set)?;
        self.storage.set(&self.key, &encoded)?;
        tracing::debug!(key = %self.key, joined = set.len(), "saved membership");
        Ok(())
    }

    /// Toggle `id` and persist the result.
    ///
    /// A failed write is logged and otherwise ignored: the returned set is
    /// authoritative for the rest of the session either way.
    pub fn toggle_and_save(&mut self, current: &MembershipSet, id: &str) -> MembershipSet {
        let next = toggle(current, id);
        if let Err(error) = self.save(&next) {
            tracing::warn!(
                key = %self.key,
                %error,
                "failed to persist membership; keeping in-memory state"
            );
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::MemoryStore;

    #[rstest]
    #[case::object(r#"{"coding-club": true}"#)]
    #[case::string(r#""coding-club""#)]
    #[case::null("null")]
    #[case::numbers("[1, 2, 3]")]
    #[case::truncated(r#"["coding-club""#)]
    #[case::garbage("not json at all")]
    fn malformed_values_load_empty(#[case] raw: &str) {
        let store =
            MembershipStore::with_default_key(MemoryStore::with_value(DEFAULT_MEMBERSHIP_KEY, raw));
        assert!(store.load().is_empty());
    }

    #[test]
    fn missing_key_loads_empty() {
        let store = MembershipStore::with_default_key(MemoryStore::new());
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_writes_json_array_in_order() {
        let mut store = MembershipStore::new(MemoryStore::new(), "joined");
        let set: MembershipSet = ["ml-club", "coding-club"].into_iter().collect();
        store.save(&set).unwrap();
        assert_eq!(
            store.storage().get("joined").unwrap().as_deref(),
            Some(r#"["ml-club","coding-club"]"#)
        );
    }

    #[test]
    fn toggle_and_save_persists_each_step() {
        let mut store = MembershipStore::with_default_key(MemoryStore::new());

        let joined = store.toggle_and_save(&MembershipSet::new(), "coding-club");
        assert!(joined.contains("coding-club"));
        assert_eq!(store.load(), joined);

        let left = store.toggle_and_save(&joined, "coding-club");
        assert!(left.is_empty());
        assert!(store.load().is_empty());
    }

    #[test]
    fn toggle_survives_failed_write() {
        let mut store = MembershipStore::with_default_key(
            MemoryStore::with_value(DEFAULT_MEMBERSHIP_KEY, r#"["ml-club"]"#).read_only(),
        );
        let current = store.load();
        let next = store.toggle_and_save(&current, "drama-club");

        assert!(next.contains("ml-club"));
        assert!(next.contains("drama-club"));
        // Storage still holds the old value.
        assert_eq!(store.load(), current);
    }
}
