//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed file and env var manipulation.

use chrono::NaiveDate;
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use ccc_config::{CccConfig, ConfigError};

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[storage]
dir = "/var/lib/ccc"
key = "joined"

[general]
today = "2026-02-06"
default_format = "json"
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(CccConfig::default()))
            .merge(Toml::file("config.toml"));
        let config = CccConfig::from_figment(&figment).expect("config should load");

        assert_eq!(config.storage.dir, "/var/lib/ccc");
        assert_eq!(config.storage.key, "joined");
        assert_eq!(config.general.today, NaiveDate::from_ymd_opt(2026, 2, 6));
        assert_eq!(config.general.default_format, "json");
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[storage]\ndir = \"./data\"\n")?;

        let figment = Figment::from(Serialized::defaults(CccConfig::default()))
            .merge(Toml::file("config.toml"));
        let config = CccConfig::from_figment(&figment).expect("config should load");

        assert_eq!(config.storage.dir, "./data");
        assert_eq!(config.storage.key, "ccc_joined_clubs");
        assert_eq!(config.general.default_format, "table");
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".ccc")?;
        jail.create_file(".ccc/config.toml", "[general]\ntoday = \"2026-02-01\"\n")?;

        let config = CccConfig::load().expect("config should load");
        assert_eq!(config.general.today, NaiveDate::from_ymd_opt(2026, 2, 1));
        Ok(())
    });
}

#[test]
fn invalid_key_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[storage]\nkey = \"../escape\"\n")?;

        let figment = Figment::from(Serialized::defaults(CccConfig::default()))
            .merge(Toml::file("config.toml"));
        let err = CccConfig::from_figment(&figment).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}

#[test]
fn malformed_date_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[general]\ntoday = \"next tuesday\"\n")?;

        let figment = Figment::from(Serialized::defaults(CccConfig::default()))
            .merge(Toml::file("config.toml"));
        let err = CccConfig::from_figment(&figment).unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
