//! General application configuration.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const OUTPUT_FORMATS: [&str; 3] = ["json", "table", "raw"];

fn default_format() -> String {
    "table".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Pin "today" for reproducible listings. Unset means the local date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub today: Option<NaiveDate>,

    /// Output format used when `--format` is not given.
    #[serde(default = "default_format")]
    pub default_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            today: None,
            default_format: default_format(),
        }
    }
}

impl GeneralConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `default_format` is not one of
    /// `json`, `table`, `raw`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if OUTPUT_FORMATS.contains(&self.default_format.as_str()) {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue {
                field: "general.default_format".to_string(),
                reason: format!(
                    "'{}' is not one of {}",
                    self.default_format,
                    OUTPUT_FORMATS.join(", ")
                ),
            })
        }
    }
}
