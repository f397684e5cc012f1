//! Text-table rendering of query results.
//!
//! Display-only: pipe-joined header, a dash rule capped at a maximum visual
//! width, then at most [`MAX_ROWS`] data lines with NULLs spelled out,
//! followed by a truncation notice and a row-count summary.

use crate::exec::QueryOutput;

/// Maximum number of data rows emitted.
pub const MAX_ROWS: usize = 50;

/// Cap on the separator rule's width.
const MAX_RULE_WIDTH: usize = 80;

/// Rendering of SQL NULL.
const NULL_LITERAL: &str = "NULL";

/// Emitted instead of an empty table.
const NO_RESULTS: &str = "No results.";

/// Render a query result as a text table.
#[must_use]
pub fn format_table(output: &QueryOutput) -> String {
    if output.rows.is_empty() {
        return NO_RESULTS.to_string();
    }

    let header = output.columns.join(" | ");
    let rule = "-".repeat(header.chars().count().min(MAX_RULE_WIDTH));

    let mut lines = Vec::with_capacity(output.rows.len().min(MAX_ROWS) + 4);
    lines.push(header);
    lines.push(rule);

    for row in output.rows.iter().take(MAX_ROWS) {
        let cells: Vec<&str> = row
            .iter()
            .map(|cell| cell.as_deref().unwrap_or(NULL_LITERAL))
            .collect();
        lines.push(cells.join(" | "));
    }

    let total = output.rows.len();
    if total > MAX_ROWS {
        lines.push(format!("({} more rows not shown)", total - MAX_ROWS));
    }
    let noun = if total == 1 { "row" } else { "rows" };
    lines.push(format!("({total} {noun} total)"));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(columns: &[&str], rows: Vec<Vec<Option<String>>>) -> QueryOutput {
        QueryOutput {
            columns: columns.iter().map(ToString::to_string).collect(),
            rows,
        }
    }

    fn cell(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[test]
    fn test_empty_result() {
        let rendered = format_table(&output(&[], vec![]));
        assert_eq!(rendered, "No results.");
    }

    #[test]
    fn test_header_and_single_row() {
        let rendered = format_table(&output(
            &["customer_id", "customer_name"],
            vec![vec![cell("1"), cell("John Smith")]],
        ));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "customer_id | customer_name");
        assert_eq!(lines[1], "-".repeat("customer_id | customer_name".len()));
        assert_eq!(lines[2], "1 | John Smith");
        assert_eq!(lines[3], "(1 row total)");
    }

    #[test]
    fn test_null_rendered_literally() {
        let rendered = format_table(&output(
            &["city"],
            vec![vec![None], vec![cell("Austin")]],
        ));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[2], "NULL");
        assert_eq!(lines[3], "Austin");
    }

    #[test]
    fn test_rule_width_capped() {
        let wide: Vec<String> = (0..20).map(|i| format!("column_number_{i}")).collect();
        let wide_refs: Vec<&str> = wide.iter().map(String::as_str).collect();
        let rendered = format_table(&output(
            &wide_refs,
            vec![vec![cell("x"); 20]],
        ));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[1].len(), 80);
    }

    #[test]
    fn test_row_cap_and_summaries() {
        let rows: Vec<Vec<Option<String>>> =
            (0..75).map(|i| vec![cell(&i.to_string())]).collect();
        let rendered = format_table(&output(&["n"], rows));
        let lines: Vec<&str> = rendered.lines().collect();

        // header + rule + 50 data + notice + summary
        assert_eq!(lines.len(), 54);
        assert_eq!(lines[2], "0");
        assert_eq!(lines[51], "49");
        assert_eq!(lines[52], "(25 more rows not shown)");
        assert_eq!(lines[53], "(75 rows total)");
    }

    #[test]
    fn test_exactly_fifty_rows_has_no_notice() {
        let rows: Vec<Vec<Option<String>>> =
            (0..50).map(|i| vec![cell(&i.to_string())]).collect();
        let rendered = format_table(&output(&["n"], rows));
        assert!(!rendered.contains("more rows not shown"));
        assert!(rendered.ends_with("(50 rows total)"));
    }
}
