use ccc_core::views::DirectoryView;
use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod directory;
pub mod table;

/// Render a serializable response to a string in the requested format.
///
/// Table mode lays out a JSON object as a `field`/`value` listing.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_fields(value, table_options()),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Render a directory view: sectioned tables, or the view as JSON.
pub fn render_view(view: &DirectoryView, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => directory::render_directory(view, table_options()),
        OutputFormat::Json | OutputFormat::Raw => render(view, format),
    }
}

/// Print a directory view in the requested format.
pub fn output_view(view: &DirectoryView, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render_view(view, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_fields<T: Serialize>(value: &T, options: table::TableOptions) -> anyhow::Result<String> {
    let rows = match serde_json::to_value(value)? {
        Value::Object(map) => map
            .into_iter()
            .map(|(key, value)| vec![key, value_to_cell(&value)])
            .collect::<Vec<_>>(),
        scalar => vec![vec![String::from("value"), value_to_cell(&scalar)]],
    };
    Ok(table::render_table(&["field", "value"], &rows, options))
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use ccc_core::query::DirectoryStats;

    use super::render;
    use crate::cli::OutputFormat;

    const STATS: DirectoryStats = DirectoryStats {
        total_clubs: 6,
        joined_clubs: 2,
        upcoming_events: 4,
    };

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&STATS, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["total_clubs"], 6);
        assert_eq!(parsed["upcoming_events"], 4);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&STATS, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["joined_clubs"], 2);
    }

    #[test]
    fn table_render_lists_fields() {
        let out = render(&STATS, OutputFormat::Table).expect("table render should work");
        let first = out.lines().next().unwrap_or_default();
        assert!(first.starts_with("field"));
        assert!(out.lines().any(|line| line.starts_with("joined_clubs")));
        assert!(out.lines().any(|line| line.starts_with("total_clubs")));
    }
}
