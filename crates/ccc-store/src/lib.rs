//! # ccc-store
//!
//! Durable local key-value storage for Campus Club Connect.
//!
//! - [`KeyValueStore`]: the single-slot get/set interface the app relies on
//! - [`FileStore`]: one JSON file per key under a data directory
//! - [`MemoryStore`]: in-process map, used by tests and as a fallback
//! - [`MembershipStore`]: loads and saves the joined-club set at a fixed key

mod error;
mod file;
mod membership;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use membership::{DEFAULT_MEMBERSHIP_KEY, MembershipStore, decode_membership};
pub use memory::MemoryStore;

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    /// Read the value stored at `key`, or `None` if the key was never written.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite the value at `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing storage rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}
