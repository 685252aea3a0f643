use rp_core::responses::{NO_REMARKS, STATUS_ALL_SUBMITTED};

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned table of string rows.
///
/// Embedded newlines are flattened to ` | ` so every row stays on one line.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let rows = rows
        .iter()
        .map(|row| row.iter().map(|cell| flatten(cell)).collect::<Vec<_>>())
        .collect::<Vec<_>>();

    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
                .max(MIN_WIDTH)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| {
            let text = truncate_text(header, *width);
            let visible = text.chars().count();
            pad(&text, *width, visible)
        })
        .collect::<Vec<_>>()
        .join(SEPARATOR);

    let divider = "-".repeat(header_line.chars().count());

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .zip(headers.iter())
            .enumerate()
            .map(|(index, (width, header))| {
                let value = row.get(index).map_or(NO_REMARKS, String::as_str);
                let truncated = truncate_text(value, *width);
                let visible = truncated.chars().count();
                let cell = match cell_color(header, value).filter(|_| options.color) {
                    Some(code) => format!("\u{1b}[{code}m{truncated}\u{1b}[0m"),
                    None => truncated,
                };
                pad(&cell, *width, visible)
            })
            .collect::<Vec<_>>()
            .join(SEPARATOR)
            .trim_end()
            .to_string()
    });

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line.trim_end().to_string());
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

const MIN_WIDTH: usize = 4;
const SEPARATOR: &str = "  ";

fn flatten(cell: &str) -> String {
    cell.lines().collect::<Vec<_>>().join(" | ")
}

/// Shrink the widest columns one character at a time until the table fits.
fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].len().max(MIN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = candidate else {
            break;
        };
        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out = value.chars().take(width - 1).collect::<String>();
    out.push('…');
    out
}

/// Left-align `value` in `width` columns; `visible` is its length without
/// color codes.
fn pad(value: &str, width: usize, visible: usize) -> String {
    format!("{value}{}", " ".repeat(width.saturating_sub(visible)))
}

/// ANSI color of a report cell, decided from its column and full value.
fn cell_color(header: &str, value: &str) -> Option<&'static str> {
    match header {
        "status" if value == STATUS_ALL_SUBMITTED => Some("32"),
        "status" => Some("31"),
        "remarks" if value != NO_REMARKS => Some("33"),
        _ => None,
    }
}
