const MIN_COLUMN_WIDTH: usize = 6;
const SEPARATOR: &str = "  ";

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned table. Numeric cells are right-aligned; status words
/// are colored when `options.color` is set.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain([header.chars().count(), MIN_COLUMN_WIDTH])
                .max()
                .unwrap_or(MIN_COLUMN_WIDTH)
        })
        .collect();

    if let Some(max_width) = options.max_width {
        shrink_to_fit(&mut widths, headers, max_width);
    }

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join(SEPARATOR);

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
                let padded = pad(&cell, *width, is_numeric(&cell));
                match status_color(&cell).filter(|_| options.color) {
                    Some(code) => padded.replacen(&cell, &format!("\u{1b}[{code}m{cell}\u{1b}[0m"), 1),
                    None => padded,
                }
            })
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        lines.push(line);
    }

    lines.join("\n")
}

/// Narrow the widest shrinkable column one character at a time until the
/// table fits or every column is at its minimum.
fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: usize) {
    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();
    let floor = |index: usize| headers[index].chars().count().max(MIN_COLUMN_WIDTH);

    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > floor(*index))
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
    if right_align {
        format!("{value:>width$}")
    } else {
        format!("{value:<width$}")
    }
}

fn is_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.'))
}

fn status_color(value: &str) -> Option<&'static str> {
    match value.trim().to_ascii_lowercase().as_str() {
        "success" | "valid" | "match" | "true" | "authenticated" => Some("32"),
        "partial" | "exists" | "warning" | "missing" | "skipped" => Some("33"),
        "failed" | "invalid" | "mismatch" | "false" | "error" => Some("31"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{TableOptions, render_entity_table};

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    fn rows() -> Vec<Vec<String>> {
        vec![
            vec!["quiz.yaml".into(), "valid".into(), "100".into()],
            vec![
                "a-much-longer-package-name.yaml".into(),
                "invalid".into(),
                "35".into(),
            ],
        ]
    }

    #[test]
    fn header_and_divider_lead_the_table() {
        let table = render_entity_table(&["file", "status", "score"], &rows(), PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("file"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[1].len(), lines[0].len());
    }

    #[test]
    fn numbers_are_right_aligned() {
        let table = render_entity_table(&["file", "status", "score"], &rows(), PLAIN);
        let last = table.lines().last().expect("row");
        assert!(last.ends_with("    35"));
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let options = TableOptions {
            max_width: Some(40),
            color: false,
        };
        let table = render_entity_table(&["file", "status", "score"], &rows(), options);
        assert!(table.lines().all(|line| line.chars().count() <= 40));
        assert!(table.contains('…'));
    }

    #[test]
    fn color_wraps_status_words_only() {
        let options = TableOptions {
            max_width: None,
            color: true,
        };
        let table = render_entity_table(&["file", "status", "score"], &rows(), options);
        assert!(table.contains("\u{1b}[32mvalid\u{1b}[0m"));
        assert!(table.contains("\u{1b}[31minvalid\u{1b}[0m"));
        assert!(!table.contains("\u{1b}[32mquiz"));
    }
}
