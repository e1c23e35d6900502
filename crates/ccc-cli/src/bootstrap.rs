use std::path::PathBuf;

use anyhow::Context;
use ccc_config::CccConfig;
use chrono::NaiveDate;
use clap::ValueEnum;

use crate::cli::{GlobalFlags, OutputFormat};

pub fn load_config() -> anyhow::Result<CccConfig> {
    CccConfig::load_with_dotenv().context("failed to load ccc configuration")
}

/// Output format used when `--format` is not given.
pub fn default_format(config: &CccConfig) -> anyhow::Result<OutputFormat> {
    OutputFormat::from_str(&config.general.default_format, true).map_err(|error| {
        anyhow::anyhow!(
            "invalid general.default_format '{}': {error}",
            config.general.default_format
        )
    })
}

/// `--data-dir` wins over `storage.dir`.
pub fn membership_dir(config: &CccConfig, flags: &GlobalFlags) -> PathBuf {
    flags
        .data_dir
        .as_ref()
        .map_or_else(|| config.storage.resolve_dir(), PathBuf::from)
}

/// `--today` wins over `general.today`. `None` means the system clock.
pub fn today_override(config: &CccConfig, flags: &GlobalFlags) -> Option<NaiveDate> {
    flags.today.or(config.general.today)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use ccc_config::CccConfig;
    use chrono::NaiveDate;

    use super::{default_format, membership_dir, today_override};
    use crate::cli::{GlobalFlags, OutputFormat};

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Table,
            quiet: false,
            data_dir: None,
            today: None,
        }
    }

    #[test]
    fn default_format_reads_config() {
        let mut config = CccConfig::default();
        assert_eq!(default_format(&config).unwrap(), OutputFormat::Table);

        config.general.default_format = "JSON".to_string();
        assert_eq!(default_format(&config).unwrap(), OutputFormat::Json);

        config.general.default_format = "yaml".to_string();
        assert!(default_format(&config).is_err());
    }

    #[test]
    fn data_dir_flag_overrides_config() {
        let mut config = CccConfig::default();
        config.storage.dir = "/var/lib/ccc".to_string();

        assert_eq!(membership_dir(&config, &flags()), PathBuf::from("/var/lib/ccc"));

        let flags = GlobalFlags {
            data_dir: Some("/tmp/ccc-test".to_string()),
            ..flags()
        };
        assert_eq!(membership_dir(&config, &flags), PathBuf::from("/tmp/ccc-test"));
    }

    #[test]
    fn today_flag_overrides_config() {
        let pinned = NaiveDate::from_ymd_opt(2026, 2, 1);
        let flagged = NaiveDate::from_ymd_opt(2026, 2, 6);

        let mut config = CccConfig::default();
        assert_eq!(today_override(&config, &flags()), None);

        config.general.today = pinned;
        assert_eq!(today_override(&config, &flags()), pinned);

        let flags = GlobalFlags {
            today: flagged,
            ..flags()
        };
        assert_eq!(today_override(&config, &flags), flagged);
    }
}
