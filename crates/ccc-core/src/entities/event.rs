use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::EventMode;

/// A scheduled activity owned by one club.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Event {
    pub id: String,
    pub title: String,
    /// Must resolve to a catalog club for the event to be shown.
    pub club_id: String,
    pub date: NaiveDate,
    pub mode: EventMode,
    pub location: String,
}
