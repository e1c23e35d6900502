//! Catalog entities.
//!
//! Both structs derive `Serialize`, `Deserialize`, and `JsonSchema` so they can
//! be emitted as JSON by the CLI and validated against their schemas in tests.

mod club;
mod event;

pub use club::Club;
pub use event::Event;
