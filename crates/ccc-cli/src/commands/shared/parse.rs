use std::fmt::Display;
use std::str::FromStr;

/// Parse a filter value via its `FromStr`, naming the field on failure.
pub fn parse_filter<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim()
        .parse()
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}
