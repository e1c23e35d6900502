use ccc_core::format::{JOIN_ACTION, LEAVE_ACTION};

const MIN_COLUMN_WIDTH: usize = 4;
const COLUMN_GAP: &str = "  ";

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned plain-text table. Cells are measured in chars so
/// multi-byte names like `Coding & Dev Club` or truncation ellipses line up.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
                .max(MIN_COLUMN_WIDTH)
        })
        .collect();

    shrink_to_fit(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
        .trim_end()
        .to_string();

    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = truncate(row.get(index).map_or("-", String::as_str), *width);
                let right_align = is_count(&cell);
                let padded = pad(&cell, *width, right_align);
                if options.color {
                    colorize(&cell, padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(COLUMN_GAP);
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// Narrow the widest columns one char at a time until the table fits.
fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let gaps = widths.len().saturating_sub(1) * COLUMN_GAP.len();

    while widths.iter().sum::<usize>() + gaps > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| {
                **width > headers[*index].chars().count().max(MIN_COLUMN_WIDTH)
            })
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);

        let Some(index) = widest else {
            break;
        };
        widths[index] -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

fn is_count(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|ch| ch.is_ascii_digit())
}

/// Highlight membership actions. Padding stays outside the escape codes.
fn colorize(cell: &str, padded: String) -> String {
    let code = match cell {
        LEAVE_ACTION => "32",
        JOIN_ACTION => "36",
        _ => return padded,
    };
    padded.replacen(cell, &format!("\u{1b}[{code}m{cell}\u{1b}[0m"), 1)
}
