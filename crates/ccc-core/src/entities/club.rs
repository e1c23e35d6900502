use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Category, Weekday};

/// A student organization listed in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Club {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub description: String,
    pub members: u32,
    pub meeting_day: Weekday,
    /// Display-only, e.g. `5:00 PM`.
    pub meeting_time: String,
}
