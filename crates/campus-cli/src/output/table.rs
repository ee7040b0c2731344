/// Layout knobs for [`render_entity_table`].
#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN_WIDTH: usize = 6;
const SEPARATOR: &str = "  ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug)]
struct Column {
    width: usize,
    floor: usize,
}

/// Render rows of string cells as an aligned, optionally colored table with
/// a header line and a dashed divider.
#[must_use]
pub fn render_entity_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut columns: Vec<Column> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            let floor = header.chars().count().max(MIN_COLUMN_WIDTH);
            let widest = rows
                .iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0);
            Column {
                width: widest.max(floor),
                floor,
            }
        })
        .collect();

    if let Some(max_width) = options.max_width {
        shrink_to_fit(&mut columns, max_width);
    }

    let header_line = headers
        .iter()
        .zip(&columns)
        .map(|(header, column)| pad(&clip(header, column.width), column.width, Align::Left))
        .collect::<Vec<_>>()
        .join(SEPARATOR);

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line.trim_end().to_string());
    lines.push("-".repeat(header_line.chars().count()));

    for row in rows {
        let line = columns
            .iter()
            .enumerate()
            .map(|(index, column)| {
                let cell = row.get(index).map_or("-", String::as_str);
                let text = clip(cell, column.width);
                let align = if is_numeric(&text) {
                    Align::Right
                } else {
                    Align::Left
                };
                let padded = pad(&text, column.width, align);
                if options.color {
                    colorize(&text, padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

/// Narrow the widest column one step at a time until the table fits or
/// every column is at its floor.
fn shrink_to_fit(columns: &mut [Column], max_width: usize) {
    let separators = columns.len().saturating_sub(1) * SEPARATOR.len();
    let total = |columns: &[Column]| columns.iter().map(|c| c.width).sum::<usize>() + separators;

    while total(columns) > max_width {
        let widest = columns
            .iter_mut()
            .filter(|column| column.width > column.floor)
            .max_by_key(|column| column.width);
        match widest {
            Some(column) => column.width -= 1,
            None => break,
        }
    }
}

fn clip(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut clipped: String = value.chars().take(width.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(text.chars().count()));
    match align {
        Align::Left => format!("{text}{fill}"),
        Align::Right => format!("{fill}{text}"),
    }
}

/// Amounts, counts and ratings are right-aligned. Dates and batch ranges
/// such as `2014-2018` stay left-aligned.
fn is_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    let body = trimmed.strip_prefix('$').unwrap_or(trimmed);
    !body.is_empty() && body.chars().all(|ch| ch.is_ascii_digit() || matches!(ch, '.' | ','))
}

/// Wrap `padded` in an ANSI color chosen from the cell's plain `text`.
fn colorize(text: &str, padded: String) -> String {
    let code = match text.to_ascii_lowercase().as_str() {
        "true" | "registered" | "available" | "online" => "32",
        "requested" | "pending" | "student" | "admin" => "33",
        "false" | "cancelled" | "unavailable" | "full" => "31",
        _ => return padded,
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn header_divider_and_rows() {
        let rows = vec![
            cells(&["Michael Chen", "Seattle", "2019"]),
            cells(&["Lisa Wang", "Austin", "2016"]),
        ];
        let table = render_entity_table(&["name", "city", "year"], &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("name"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].ends_with("2019"));
    }

    #[test]
    fn numbers_align_right_and_ranges_left() {
        assert!(is_numeric("2500"));
        assert!(is_numeric("$1,000"));
        assert!(is_numeric("4.8"));
        assert!(!is_numeric("2014-2018"));
        assert!(!is_numeric("2025-06-15"));
        assert_eq!(pad("45", 6, Align::Right), "    45");
    }

    #[test]
    fn narrow_terminal_clips_widest_column() {
        let rows = vec![cells(&["Entrepreneurship Panel Discussion", "Virtual Event"])];
        let options = TableOptions {
            max_width: Some(30),
            color: false,
        };
        let table = render_entity_table(&["title", "location"], &rows, options);
        let row = table.lines().nth(2).expect("data row");
        assert!(row.contains('…'));
        assert!(row.contains("Virtual Event"));
        assert!(row.chars().count() <= 30);
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let rows = vec![cells(&["only"])];
        let table = render_entity_table(&["a", "b"], &rows, PLAIN);
        assert!(table.lines().nth(2).expect("row").ends_with('-'));
    }

    #[test]
    fn color_follows_cell_text() {
        assert_eq!(colorize("full", "full  ".into()), "\u{1b}[31mfull  \u{1b}[0m");
        assert_eq!(colorize("Seattle", "Seattle".into()), "Seattle");
    }
}
